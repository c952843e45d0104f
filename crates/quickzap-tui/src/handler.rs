use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::app::{App, Field};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize => {}
        AppEvent::Tick => app.tick(),
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Popups take input first (settings sits above the dropdown)
    if app.composer.default_picker().is_open() {
        handle_settings_popup(app, key);
    } else if app.show_country_picker {
        handle_country_picker(app, key);
    } else {
        handle_form(app, key);
    }
}

fn handle_settings_popup(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dismiss_settings(),
        KeyCode::Enter => app.confirm_settings(),
        KeyCode::Down => app.settings_down(),
        KeyCode::Up => app.settings_up(),
        KeyCode::Backspace => app.settings_backspace(),
        KeyCode::Char(c) => app.settings_input(c),
        _ => {}
    }
}

fn handle_country_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_country_picker(),
        KeyCode::Enter => app.confirm_country_picker(),
        KeyCode::Down => app.country_picker_down(),
        KeyCode::Up => app.country_picker_up(),
        KeyCode::Backspace => app.country_picker_backspace(),
        KeyCode::Char(c) => app.country_picker_input(c),
        _ => {}
    }
}

fn handle_form(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.should_quit = true,

        // Focus
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Down if app.focus != Field::Message => app.focus = app.focus.next(),
        KeyCode::Up if app.focus != Field::Message => app.focus = app.focus.prev(),

        // Shortcuts
        KeyCode::Char('s') if ctrl => app.send(),
        KeyCode::Char('d') if ctrl => app.open_settings(),
        KeyCode::Char('u') if ctrl => app.clear_field(),

        KeyCode::Enter => match app.focus {
            Field::Country => app.open_country_picker(),
            Field::Phone => app.focus = Field::Message,
            Field::Message => app.input_char('\n'),
            Field::Send => app.send(),
        },
        KeyCode::Char(' ') if app.focus == Field::Country => app.open_country_picker(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.input_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use quickzap_core::PickerState;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(app, AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_compose_and_send_with_keyboard() {
        let (mut app, opener) = test_app();
        type_text(&mut app, "(11) 98765-4321");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Field::Message);
        type_text(&mut app, "Hi there!");
        ctrl(&mut app, 's');

        assert_eq!(
            opener.opened(),
            vec!["https://wa.me/+5511987654321?text=Hi%20there!"]
        );
    }

    #[test]
    fn test_send_button_with_empty_phone_does_nothing() {
        let (mut app, opener) = test_app();
        app.focus = Field::Send;
        press(&mut app, KeyCode::Enter);
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let (mut app, _) = test_app();
        app.focus = Field::Message;
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "b");
        assert_eq!(app.composer.message_text(), "a\nb");
    }

    #[test]
    fn test_country_dropdown_flow() {
        let (mut app, _) = test_app();
        app.focus = Field::Country;
        press(&mut app, KeyCode::Enter);
        assert!(app.show_country_picker);

        type_text(&mut app, "united");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(!app.show_country_picker);
        // United Arab Emirates, United Kingdom, United States
        assert_eq!(app.composer.selected_country().code, "GB");
    }

    #[test]
    fn test_country_dropdown_escape_keeps_selection() {
        let (mut app, _) = test_app();
        app.focus = Field::Country;
        press(&mut app, KeyCode::Char(' '));
        type_text(&mut app, "jap");
        press(&mut app, KeyCode::Esc);

        assert!(!app.show_country_picker);
        assert!(!app.should_quit);
        assert_eq!(app.composer.selected_country().code, "BR");
    }

    #[test]
    fn test_settings_popup_flow() {
        let (mut app, _) = test_app();
        ctrl(&mut app, 'd');
        assert_eq!(app.composer.default_picker(), PickerState::Open);

        type_text(&mut app, "germ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.composer.default_picker(), PickerState::Closed);
        assert_eq!(app.composer.selected_country().code, "DE");
        assert_eq!(app.composer.stored_default().as_deref(), Some("DE"));
    }

    #[test]
    fn test_settings_popup_typing_does_not_touch_fields() {
        let (mut app, _) = test_app();
        ctrl(&mut app, 'd');
        type_text(&mut app, "12");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.composer.phone_digits(), "");
        assert_eq!(app.composer.default_search().query(), "12");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_resize_leaves_state_alone() {
        let (mut app, _) = test_app();
        type_text(&mut app, "55");
        handle_event(&mut app, AppEvent::Resize).unwrap();
        assert_eq!(app.composer.phone_digits(), "55");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_on_form_quits() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_popup() {
        let (mut app, _) = test_app();
        ctrl(&mut app, 'd');
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_u_clears_focused_field() {
        let (mut app, _) = test_app();
        type_text(&mut app, "555");
        ctrl(&mut app, 'u');
        assert_eq!(app.composer.phone_digits(), "");
    }
}
