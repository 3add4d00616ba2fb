//! Menu state machine
//!
//! The session's control flow as a plain enum. [`Menu::next`] is pure: it maps
//! the current state and one [`Event`] to the following state, and the
//! session does all of the reading and printing around it.
//!
//! ```text
//! Prompt ──1..4──▶ Flow ──done──▶ Prompt
//!   │  └────5────▶ Quit
//!   └─malformed──▶ Reprompt ──malformed──▶ Prompt
//! ```

use crate::constants::{SELECT_ADD, SELECT_DELETE, SELECT_PRINT, SELECT_QUIT, SELECT_SEARCH};

/// One complete interactive sequence for a menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Add,
    Search,
    Delete,
    Print,
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    /// Banner and menu, then read a selection
    Prompt,
    /// Single recovery attempt after a malformed selection
    Reprompt,
    /// Running the flow for a selected option
    Flow(Flow),
    /// Terminal
    Quit,
}

/// Input observed by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A numeric menu selection (not necessarily in range)
    Selected(i32),
    /// The selection could not be read as a number
    Malformed,
    /// The current flow has finished, successfully or not
    FlowDone,
    /// Input stream closed
    EndOfInput,
}

impl Flow {
    /// Flow for a menu number, if it names one
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            SELECT_ADD => Some(Flow::Add),
            SELECT_SEARCH => Some(Flow::Search),
            SELECT_DELETE => Some(Flow::Delete),
            SELECT_PRINT => Some(Flow::Print),
            _ => None,
        }
    }
}

impl Menu {
    /// Transition on `event`
    pub fn next(self, event: Event) -> Self {
        match (self, event) {
            (_, Event::EndOfInput) => Menu::Quit,
            (Menu::Quit, _) => Menu::Quit,

            (Menu::Prompt | Menu::Reprompt, Event::Selected(SELECT_QUIT)) => Menu::Quit,
            (Menu::Prompt | Menu::Reprompt, Event::Selected(n)) => {
                Flow::from_selection(n).map_or(Menu::Prompt, Menu::Flow)
            }
            (Menu::Prompt, Event::Malformed) => Menu::Reprompt,
            (Menu::Reprompt, Event::Malformed) => Menu::Prompt,

            (Menu::Flow(_), Event::FlowDone) => Menu::Prompt,

            // Events that cannot occur in the state are ignored
            (state, _) => state,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Menu::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selections_enter_flows() {
        assert_eq!(Menu::Prompt.next(Event::Selected(1)), Menu::Flow(Flow::Add));
        assert_eq!(Menu::Prompt.next(Event::Selected(2)), Menu::Flow(Flow::Search));
        assert_eq!(Menu::Prompt.next(Event::Selected(3)), Menu::Flow(Flow::Delete));
        assert_eq!(Menu::Prompt.next(Event::Selected(4)), Menu::Flow(Flow::Print));
        assert_eq!(Menu::Prompt.next(Event::Selected(5)), Menu::Quit);
    }

    #[test]
    fn test_out_of_range_selection_reshows_menu() {
        assert_eq!(Menu::Prompt.next(Event::Selected(0)), Menu::Prompt);
        assert_eq!(Menu::Prompt.next(Event::Selected(9)), Menu::Prompt);
        assert_eq!(Menu::Reprompt.next(Event::Selected(-1)), Menu::Prompt);
    }

    #[test]
    fn test_single_recovery_attempt() {
        let state = Menu::Prompt.next(Event::Malformed);
        assert_eq!(state, Menu::Reprompt);

        // Recovery succeeds
        assert_eq!(state.next(Event::Selected(4)), Menu::Flow(Flow::Print));

        // Recovery fails: back to the full menu, not another reprompt
        assert_eq!(state.next(Event::Malformed), Menu::Prompt);
    }

    #[test]
    fn test_flow_returns_to_prompt() {
        for flow in [Flow::Add, Flow::Search, Flow::Delete, Flow::Print] {
            assert_eq!(Menu::Flow(flow).next(Event::FlowDone), Menu::Prompt);
        }
    }

    #[test]
    fn test_end_of_input_quits_from_any_state() {
        for state in [Menu::Prompt, Menu::Reprompt, Menu::Flow(Flow::Add)] {
            assert!(state.next(Event::EndOfInput).is_terminal());
        }
    }

    #[test]
    fn test_quit_is_terminal() {
        assert_eq!(Menu::Quit.next(Event::Selected(1)), Menu::Quit);
        assert_eq!(Menu::Quit.next(Event::FlowDone), Menu::Quit);
    }
}
