//! Whitespace token reader for console input
//!
//! Wraps any [`BufRead`] and hands out one whitespace-delimited token at a
//! time, reading further lines only when the current one is exhausted. A
//! token that fails to parse is left in place so the caller decides whether
//! to skip it with [`TokenReader::discard_line`].

use crate::errors::InputError;
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Token-at-a-time reader over a line-buffered source
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        TokenReader {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Make sure at least one token is pending, reading lines as needed.
    /// Returns false once the source is exhausted.
    fn fill(&mut self) -> Result<bool, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(true)
    }

    /// Next token, consumed
    pub fn next_token(&mut self) -> Result<String, InputError> {
        if !self.fill()? {
            return Err(InputError::EndOfInput);
        }
        self.pending.pop_front().ok_or(InputError::EndOfInput)
    }

    /// Next token parsed as `T`
    ///
    /// On a parse failure the token stays pending and
    /// [`InputError::Malformed`] carries its text.
    pub fn next_parsed<T: FromStr>(&mut self) -> Result<T, InputError> {
        if !self.fill()? {
            return Err(InputError::EndOfInput);
        }
        let token = self.pending.front().ok_or(InputError::EndOfInput)?;
        match token.parse::<T>() {
            Ok(value) => {
                self.pending.pop_front();
                Ok(value)
            }
            Err(_) => Err(InputError::Malformed(token.clone())),
        }
    }

    /// Drop every token left on the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
