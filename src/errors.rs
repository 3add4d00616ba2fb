//! Error types for the record store and console input
//!
//! Neither error is fatal to a session: the console reports each one as a
//! message and returns to the menu. Only I/O failures on the underlying
//! streams propagate out of [`Session::run`](crate::console::Session::run).

use crate::store::StudentId;
use std::io;
use thiserror::Error;

/// Record store rejections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this id is already on file
    #[error("student {0} already in system")]
    DuplicateId(StudentId),

    /// No record with this id
    #[error("student {0} not found")]
    NotFound(StudentId),

    /// The store holds no records at all
    #[error("student list is empty")]
    Empty,
}

/// Failures while reading a token from the console
#[derive(Debug, Error)]
pub enum InputError {
    /// Token could not be parsed as the requested type
    #[error("malformed input: {0:?}")]
    Malformed(String),

    /// Input stream closed
    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}
