use ratatui::widgets::ListState;
use tracing::{error, info};

use quickzap_core::{Composer, LinkOpener, PreferenceStore};

/// How many ticks a status message stays on screen.
const STATUS_TICKS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Country,
    Phone,
    Message,
    Send,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Country => Field::Phone,
            Field::Phone => Field::Message,
            Field::Message => Field::Send,
            Field::Send => Field::Country,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Country => Field::Send,
            Field::Phone => Field::Country,
            Field::Message => Field::Phone,
            Field::Send => Field::Message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    ticks_left: u8,
}

pub struct App {
    pub should_quit: bool,
    pub focus: Field,

    pub composer: Composer<Box<dyn PreferenceStore>>,
    pub opener: Box<dyn LinkOpener>,
    pub catalog_source: String,

    // Country dropdown (active selection)
    pub show_country_picker: bool,
    pub country_picker_state: ListState,

    // Settings popup list (open/closed lives in the composer)
    pub default_picker_state: ListState,

    pub status: Option<StatusMessage>,
    pub last_sent: Option<String>,
}

impl App {
    pub fn new(
        composer: Composer<Box<dyn PreferenceStore>>,
        opener: Box<dyn LinkOpener>,
        catalog_source: &str,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Field::Phone,
            composer,
            opener,
            catalog_source: catalog_source.to_string(),
            show_country_picker: false,
            country_picker_state: ListState::default(),
            default_picker_state: ListState::default(),
            status: None,
            last_sent: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            ticks_left: STATUS_TICKS,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            ticks_left: STATUS_TICKS,
        });
    }

    pub fn tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    // Field editing

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Field::Phone => self.composer.phone_digits_mut().push(c),
            Field::Message => self.composer.message_text_mut().push(c),
            Field::Country | Field::Send => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Phone => {
                self.composer.phone_digits_mut().pop();
            }
            Field::Message => {
                self.composer.message_text_mut().pop();
            }
            Field::Country | Field::Send => {}
        }
    }

    pub fn clear_field(&mut self) {
        match self.focus {
            Field::Phone => self.composer.phone_digits_mut().clear(),
            Field::Message => self.composer.message_text_mut().clear(),
            Field::Country | Field::Send => {}
        }
    }

    pub fn send(&mut self) {
        match self.composer.send(&*self.opener) {
            Ok(Some(link)) => {
                info!(%link, "Link sent");
                self.set_status(format!("Opened {link}"));
                self.last_sent = Some(link);
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, "Failed to open link");
                self.set_error(format!("Could not open link: {e}"));
            }
        }
    }

    // Country dropdown

    pub fn open_country_picker(&mut self) {
        self.show_country_picker = true;
        let len = self.composer.active_matches().len();
        reset_selection(&mut self.country_picker_state, len);
    }

    pub fn close_country_picker(&mut self) {
        self.show_country_picker = false;
    }

    pub fn country_picker_input(&mut self, c: char) {
        self.composer.active_search_mut().push(c);
        let len = self.composer.active_matches().len();
        reset_selection(&mut self.country_picker_state, len);
    }

    pub fn country_picker_backspace(&mut self) {
        self.composer.active_search_mut().pop();
        let len = self.composer.active_matches().len();
        reset_selection(&mut self.country_picker_state, len);
    }

    pub fn country_picker_down(&mut self) {
        let len = self.composer.active_matches().len();
        select_next(&mut self.country_picker_state, len);
    }

    pub fn country_picker_up(&mut self) {
        select_prev(&mut self.country_picker_state);
    }

    pub fn confirm_country_picker(&mut self) {
        let Some(index) = self.country_picker_state.selected() else {
            return;
        };
        if self.composer.pick_active_match(index) {
            self.show_country_picker = false;
            let label = self.composer.selected_country().label();
            self.set_status(format!("Sending to {label}"));
        }
    }

    // Default-country settings popup

    pub fn open_settings(&mut self) {
        self.composer.open_default_picker();
        let len = self.composer.default_matches().len();
        reset_selection(&mut self.default_picker_state, len);
    }

    pub fn dismiss_settings(&mut self) {
        self.composer.dismiss_default_picker();
    }

    pub fn settings_input(&mut self, c: char) {
        self.composer.default_search_mut().push(c);
        let len = self.composer.default_matches().len();
        reset_selection(&mut self.default_picker_state, len);
    }

    pub fn settings_backspace(&mut self) {
        self.composer.default_search_mut().pop();
        let len = self.composer.default_matches().len();
        reset_selection(&mut self.default_picker_state, len);
    }

    pub fn settings_down(&mut self) {
        let len = self.composer.default_matches().len();
        select_next(&mut self.default_picker_state, len);
    }

    pub fn settings_up(&mut self) {
        select_prev(&mut self.default_picker_state);
    }

    pub fn confirm_settings(&mut self) {
        let Some(index) = self.default_picker_state.selected() else {
            return;
        };
        if self.composer.pick_default_match(index) {
            let label = self.composer.selected_country().label();
            self.set_status(format!("Default country saved: {label}"));
        }
    }
}

/// Point the list at its first row, or at nothing when empty.
fn reset_selection(state: &mut ListState, len: usize) {
    state.select(if len == 0 { None } else { Some(0) });
}

fn select_next(state: &mut ListState, len: usize) {
    if len > 0 {
        let i = state.selected().unwrap_or(0);
        state.select(Some((i + 1).min(len - 1)));
    }
}

fn select_prev(state: &mut ListState) {
    if let Some(i) = state.selected() {
        state.select(Some(i.saturating_sub(1)));
    }
}
