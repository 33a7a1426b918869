//! Application state definitions
//!
//! `AppState` wraps the booking session with the purely presentational state
//! the wizard needs: which pane has focus, where the cursors are, whether
//! help is open and the last status message.

use crate::booking::BookingSession;
use crate::components::keybindings::InputContext;
use crate::step::Step;

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Step progress header
    Header,
    /// Current step's screen
    #[default]
    Content,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Header => Self::Content,
            Self::Content => Self::Header,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The booking itself
    pub session: BookingSession,
    /// Pane holding focus
    pub focus: Focus,
    /// Step under the header cursor
    pub header_cursor: Step,
    /// Index of the focused skip card
    pub card_cursor: usize,
    /// Cards per row at the last render
    pub grid_columns: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Feedback for the last rejected intent; cleared on the next key
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let session = BookingSession::new();
        Self {
            header_cursor: session.current_step(),
            session,
            focus: Focus::Content,
            card_cursor: 0,
            grid_columns: 3,
            help_visible: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Keybinding context for the current focus and step.
    pub fn input_context(&self) -> InputContext {
        match self.focus {
            Focus::Header => InputContext::Header,
            Focus::Content if self.session.current_step() == Step::SelectSkip => {
                InputContext::SkipGrid
            }
            Focus::Content => InputContext::Placeholder,
        }
    }

    /// Header cursor, only while the header has focus.
    pub fn focused_header_step(&self) -> Option<Step> {
        (self.focus == Focus::Header).then_some(self.header_cursor)
    }

    /// Card cursor, only while the skip grid has focus.
    pub fn focused_card(&self) -> Option<usize> {
        (self.input_context() == InputContext::SkipGrid).then_some(self.card_cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.session, BookingSession::new());
        assert_eq!(state.focus, Focus::Content);
        assert_eq!(state.header_cursor, Step::SelectSkip);
        assert!(!state.help_visible);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_input_context_follows_focus_and_step() {
        let mut state = AppState::default();
        assert_eq!(state.input_context(), InputContext::SkipGrid);
        assert_eq!(state.focused_card(), Some(0));

        state.focus = Focus::Header;
        assert_eq!(state.input_context(), InputContext::Header);
        assert_eq!(state.focused_card(), None);
        assert_eq!(state.focused_header_step(), Some(Step::SelectSkip));

        state.focus = Focus::Content;
        state.session.attempt_navigate(Step::Postcode).ok();
        assert_eq!(state.input_context(), InputContext::Placeholder);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Header.toggled(), Focus::Content);
        assert_eq!(Focus::Content.toggled(), Focus::Header);
    }
}
