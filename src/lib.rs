//! # Introduction
//!
//! roster keeps student records (id, first name, last name, course, grade) in
//! memory and manages them through a numbered text menu on stdin/stdout.
//!
//! ## Layout
//!
//! ```text
//! stdin → TokenReader → Menu state machine → flows → RecordStore → stdout
//! ```
//!
//! 1. [`store`] — the [`store::RecordStore`], an insertion-ordered list of
//!    [`store::StudentRecord`]s held in an index-linked arena, with a
//!    duplicate-id guard on insert.
//! 2. [`console`] — token input, the [`console::Menu`] state machine and the
//!    [`console::Session`] that runs the add, search, delete and print flows.
//! 3. [`errors`] — typed store and input errors.
//! 4. [`logging`] — `tracing` subscriber setup (stderr only).
//! 5. [`constants`] — menu text and every user-facing message.
//!
//! ## Menu
//!
//! 1. Add a student record
//! 2. Find a student record
//! 3. Delete a student record
//! 4. Print all student records
//! 5. Quit

pub mod console;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod store;
