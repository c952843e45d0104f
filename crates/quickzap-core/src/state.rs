//! UI-agnostic session state types
//!
//! Shared between the TUI and the one-shot CLI commands; nothing here
//! depends on a UI framework.

/// Visibility of the default-country settings picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

impl PickerState {
    pub fn is_open(self) -> bool {
        self == PickerState::Open
    }
}
