//! Console front end for the record store.
//!
//! The console is organized into four layers:
//!
//! - **[`input`]** — whitespace token reader with line discard for bad input
//! - **[`menu`]** — menu state enum and its pure transition function
//! - **[`session`]** — the read-eval-print loop and the add/search/delete/print flows
//! - **[`theme`]** — colour palette applied when output is a terminal
//!
//! The entry point for consumers is [`Session`]: construct it over any
//! `BufRead` input and `Write` output and call [`Session::run`].
//!
//! [`Session::run`]: session::Session::run

pub mod input;
pub mod menu;
pub mod session;
pub mod theme;

pub use menu::{Event, Flow, Menu};
pub use session::{Session, SessionEnd, SessionOptions};
