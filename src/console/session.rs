//! Interactive session: the menu loop and its four flows
//!
//! A [`Session`] owns the [`RecordStore`] and drives it from a token stream.
//! Control flow lives in [`Menu`]; this module only performs the I/O for each
//! state and feeds the resulting [`Event`] back into [`Menu::next`].
//!
//! Every store rejection and malformed token is reported on the output and
//! the session returns to the menu. Only I/O errors escape [`Session::run`].

use super::input::TokenReader;
use super::menu::{Event, Flow, Menu};
use super::theme::{Tone, DEFAULT_THEME};
use crate::constants::*;
use crate::errors::{InputError, StoreError};
use crate::store::{RecordStore, StudentId, StudentRecord};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Output presentation settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Colour messages with terminal escape sequences
    pub styled: bool,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The Quit option was selected
    Quit,
    /// Input closed before Quit was selected
    EndOfInput,
}

/// Outcome of reading one field of a flow
enum Field<T> {
    Value(T),
    /// Malformed token; already reported and discarded
    Aborted,
    /// Input closed
    Closed,
}

impl<T> Field<T> {
    /// Event to hand back to the menu when the flow stops at this field
    fn outcome(&self) -> Event {
        match self {
            Field::Closed => Event::EndOfInput,
            Field::Value(_) | Field::Aborted => Event::FlowDone,
        }
    }
}

/// The interactive record manager
pub struct Session<R, W> {
    store: RecordStore,
    input: TokenReader<R>,
    out: W,
    options: SessionOptions,
    state: Menu,
    end: SessionEnd,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, options: SessionOptions) -> Self {
        Self::with_store(RecordStore::new(), input, out, options)
    }

    /// Start a session over an existing store
    pub fn with_store(store: RecordStore, input: R, out: W, options: SessionOptions) -> Self {
        Session {
            store,
            input: TokenReader::new(input),
            out,
            options,
            state: Menu::Prompt,
            end: SessionEnd::Quit,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> Menu {
        self.state
    }

    /// Consume the session, returning the store and the output sink
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.out)
    }

    /// Run until Quit is selected or input closes
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            let event = match self.state {
                Menu::Prompt => {
                    self.show_menu(true)?;
                    self.read_selection()?
                }
                Menu::Reprompt => {
                    self.show_menu(false)?;
                    self.read_selection()?
                }
                Menu::Flow(flow) => {
                    debug!(?flow, "entering flow");
                    self.run_flow(flow)?
                }
                Menu::Quit => {
                    self.out.flush()?;
                    return Ok(self.end);
                }
            };

            if event == Event::EndOfInput {
                self.end = SessionEnd::EndOfInput;
            }
            self.state = self.state.next(event);
        }
    }

    /// Run a single flow to completion
    pub fn run_flow(&mut self, flow: Flow) -> io::Result<Event> {
        let event = match flow {
            Flow::Add => self.add_flow()?,
            Flow::Search => self.search_flow()?,
            Flow::Delete => self.delete_flow()?,
            Flow::Print => self.print_flow()?,
        };
        writeln!(self.out)?;
        Ok(event)
    }

    fn show_menu(&mut self, with_banner: bool) -> io::Result<()> {
        if with_banner {
            self.say(WELCOME_BANNER, Tone::Header)?;
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", MENU_PROMPT)?;
        for (n, option) in MENU_OPTIONS.iter().enumerate() {
            writeln!(self.out, "{}) {}", n + 1, option)?;
        }
        writeln!(self.out)?;
        self.prompt(OPTION_SELECTED)
    }

    fn read_selection(&mut self) -> io::Result<Event> {
        let event = match self.input.next_parsed::<i32>() {
            Ok(n) => Event::Selected(n),
            Err(InputError::Malformed(token)) => {
                warn!(%token, "malformed menu selection");
                self.input.discard_line();
                Event::Malformed
            }
            Err(InputError::EndOfInput) => Event::EndOfInput,
            Err(InputError::Io(e)) => return Err(e),
        };

        writeln!(self.out)?;
        if event == Event::Malformed {
            self.say(MSG_INVALID_INPUT, Tone::Error)?;
        }
        Ok(event)
    }

    fn add_flow(&mut self) -> io::Result<Event> {
        self.say(ADD_HEADER, Tone::Header)?;

        let id = match self.field::<StudentId>(PROMPT_ID)? {
            Field::Value(id) => id,
            other => return Ok(other.outcome()),
        };

        if self.store.exists(id) {
            info!(id, "add rejected: duplicate id");
            self.say(MSG_DUPLICATE, Tone::Error)?;
            return Ok(Event::FlowDone);
        }

        // Any failed field abandons the remaining prompts
        let first_name = match self.field::<String>(PROMPT_FIRST_NAME)? {
            Field::Value(v) => v,
            other => return Ok(other.outcome()),
        };
        let last_name = match self.field::<String>(PROMPT_LAST_NAME)? {
            Field::Value(v) => v,
            other => return Ok(other.outcome()),
        };
        let course = match self.field::<String>(PROMPT_COURSE)? {
            Field::Value(v) => v,
            other => return Ok(other.outcome()),
        };
        let grade = match self.field::<i32>(PROMPT_GRADE)? {
            Field::Value(v) => v,
            other => return Ok(other.outcome()),
        };

        let record = StudentRecord::new(id, first_name, last_name, course, grade);
        match self.store.add(record) {
            Ok(()) => {
                info!(id, "student added");
                self.say(MSG_ADDED, Tone::Success)?;
            }
            Err(StoreError::DuplicateId(_)) => self.say(MSG_DUPLICATE, Tone::Error)?,
            Err(e) => self.say(&e.to_string(), Tone::Error)?,
        }
        Ok(Event::FlowDone)
    }

    fn search_flow(&mut self) -> io::Result<Event> {
        self.say(SEARCH_HEADER, Tone::Header)?;

        let id = match self.field::<StudentId>(PROMPT_ENTER_ID)? {
            Field::Value(id) => id,
            other => return Ok(other.outcome()),
        };
        writeln!(self.out)?;

        match self.store.find(id) {
            Some(record) => {
                let card = record.card().to_string();
                writeln!(self.out, "{}", card)?;
            }
            None => {
                info!(id, "search: not found");
                self.say(MSG_NOT_FOUND, Tone::Error)?;
            }
        }
        Ok(Event::FlowDone)
    }

    fn delete_flow(&mut self) -> io::Result<Event> {
        self.say(DELETE_HEADER, Tone::Header)?;

        let id = match self.field::<StudentId>(PROMPT_ENTER_ID)? {
            Field::Value(id) => id,
            other => return Ok(other.outcome()),
        };
        writeln!(self.out)?;

        match self.store.remove(id) {
            Ok(_) => {
                info!(id, "student deleted");
                self.say(MSG_DELETED, Tone::Success)?;
            }
            Err(StoreError::Empty) => {
                self.say(MSG_LIST_EMPTY, Tone::Muted)?;
                self.say(MSG_NOT_FOUND, Tone::Error)?;
            }
            Err(e) => {
                info!(id, error = %e, "delete rejected");
                self.say(MSG_NOT_FOUND, Tone::Error)?;
            }
        }
        Ok(Event::FlowDone)
    }

    fn print_flow(&mut self) -> io::Result<Event> {
        self.say(PRINT_HEADER, Tone::Header)?;

        let lines: Vec<String> = self
            .store
            .list_all()
            .into_iter()
            .map(|record| record.to_string())
            .collect();
        if lines.is_empty() {
            self.say(MSG_NO_RECORDS, Tone::Muted)?;
        }
        for line in &lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(Event::FlowDone)
    }

    /// Prompt for and read one field
    fn field<T: FromStr>(&mut self, prompt: &str) -> io::Result<Field<T>> {
        self.prompt(prompt)?;
        match self.input.next_parsed::<T>() {
            Ok(value) => Ok(Field::Value(value)),
            Err(InputError::Malformed(token)) => {
                warn!(%token, prompt, "malformed field");
                self.input.discard_line();
                writeln!(self.out)?;
                self.say(MSG_INVALID_INPUT, Tone::Error)?;
                Ok(Field::Aborted)
            }
            Err(InputError::EndOfInput) => Ok(Field::Closed),
            Err(InputError::Io(e)) => Err(e),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = DEFAULT_THEME.paint(text, tone, self.options.styled);
        writeln!(self.out, "{}", painted)
    }
}
