use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use quickzap_core::Country;
use crate::app::{App, Field};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, form, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);
    render_form(app, frame, body_area);
    render_footer(app, frame, footer_area);

    // Render popups (in order of priority)
    if app.composer.default_picker().is_open() {
        render_settings_popup(app, frame, area);
    } else if app.show_country_picker {
        render_country_picker(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Quick Zap ", Style::default().fg(Color::Green).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} countries from {}", app.composer.catalog().len(), app.catalog_source),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn field_block(app: &App, field: Field, title: &str) -> Block<'static> {
    let border_style = if app.focus == field {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title))
}

fn render_form(app: &mut App, frame: &mut Frame, area: Rect) {
    let [country_area, phone_area, message_area, send_area, preview_area, status_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(area);

    let selected = app.composer.selected_country();

    // Country selector
    let country_line = Line::from(vec![
        Span::raw(format!("{} ", selected.flag)),
        Span::styled(selected.name.clone(), Style::default().bold()),
        Span::styled(format!(" ({})", selected.phone_code), Style::default().fg(Color::DarkGray)),
        Span::styled("  ▾", Style::default().fg(Color::DarkGray)),
    ]);
    let country = Paragraph::new(country_line).block(field_block(app, Field::Country, "Country"));
    frame.render_widget(country, country_area);

    // Phone number, prefixed by the dial code
    let dial_code = format!("{} ", selected.phone_code);
    let phone_line = Line::from(vec![
        Span::styled(dial_code.clone(), Style::default().fg(Color::Black).bg(Color::DarkGray)),
        Span::raw(" "),
        Span::raw(app.composer.phone_digits().to_string()),
    ]);
    let phone_block = field_block(app, Field::Phone, "Phone number");
    let phone_inner = phone_block.inner(phone_area);
    frame.render_widget(Paragraph::new(phone_line).block(phone_block), phone_area);

    // Message
    let message_block = field_block(app, Field::Message, "Message (optional)");
    let message_inner = message_block.inner(message_area);
    let message = Paragraph::new(Text::raw(app.composer.message_text().to_string()))
        .block(message_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(message, message_area);

    // Send button, disabled until a phone number is entered
    let can_send = app.composer.can_send();
    let send_style = match (can_send, app.focus == Field::Send) {
        (true, true) => Style::default().bg(Color::Green).fg(Color::Black).bold(),
        (true, false) => Style::default().fg(Color::Green).bold(),
        (false, _) => Style::default().fg(Color::DarkGray),
    };
    let send = Paragraph::new(Line::from(" Send message on WhatsApp ").centered())
        .style(send_style)
        .block(field_block(app, Field::Send, "Send"));
    frame.render_widget(send, send_area);

    // Live preview
    if let Some(link) = app.composer.compose_link() {
        let preview = Paragraph::new(link)
            .style(Style::default().fg(Color::Cyan))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Preview "),
            );
        frame.render_widget(preview, preview_area);
    }

    // Status line
    if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        frame.render_widget(Paragraph::new(format!(" {}", status.text)).style(style), status_area);
    }

    // Show cursor in the focused text field
    if !app.show_country_picker && !app.composer.default_picker().is_open() {
        match app.focus {
            Field::Phone => {
                let offset = dial_code.chars().count() + 1 + app.composer.phone_digits().chars().count();
                let (x, y) = cursor_in(phone_inner, offset, 0);
                frame.set_cursor_position((x, y));
            }
            Field::Message => {
                let text = app.composer.message_text();
                let row = text.split('\n').count().saturating_sub(1);
                let column = text.rsplit('\n').next().unwrap_or("").chars().count();
                let (x, y) = cursor_in(message_inner, column, row);
                frame.set_cursor_position((x, y));
            }
            Field::Country | Field::Send => {}
        }
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints = if app.composer.default_picker().is_open() || app.show_country_picker {
        vec![
            Span::styled(" type ", key_style),
            Span::styled(" search ", label_style),
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" nav ", label_style),
            Span::styled(" Enter ", key_style),
            Span::styled(" select ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" close ", label_style),
        ]
    } else {
        let mut hints = vec![
            Span::styled(" Tab ", key_style),
            Span::styled(" next field ", label_style),
        ];
        if app.focus == Field::Country {
            hints.extend(vec![
                Span::styled(" Enter ", key_style),
                Span::styled(" choose country ", label_style),
            ]);
        }
        hints.extend(vec![
            Span::styled(" ^S ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" ^D ", key_style),
            Span::styled(" default country ", label_style),
            Span::styled(" ^U ", key_style),
            Span::styled(" clear ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" quit ", label_style),
        ]);
        hints
    };

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Cursor position for `column`/`row` inside `area`, clamped to its last cell.
fn cursor_in(area: Rect, column: usize, row: usize) -> (u16, u16) {
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(column).min(area.right().saturating_sub(1));
    let y = area.y.saturating_add(row).min(area.bottom().saturating_sub(1));
    (x, y)
}

/// Centered popup rectangle clamped to the frame.
fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

fn country_items(countries: &[&Country], current_code: &str) -> Vec<ListItem<'static>> {
    countries
        .iter()
        .map(|country| {
            let is_current = country.code == current_code;
            let style = if is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let check = if is_current { " ✓" } else { "" };
            ListItem::new(format!(
                "{} {} ({}){}",
                country.flag, country.name, country.phone_code, check
            ))
            .style(style)
        })
        .collect()
}

/// Search box above a filtered country list.
fn render_country_list(
    frame: &mut Frame,
    popup_area: Rect,
    title: String,
    subtitle: Option<&str>,
    query: &str,
    items: Vec<ListItem<'static>>,
    state: &mut ListState,
) {
    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let subtitle_height = if subtitle.is_some() { 1 } else { 0 };
    let [subtitle_area, search_area, list_area] = Layout::vertical([
        Constraint::Length(subtitle_height),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(inner);

    if let Some(subtitle) = subtitle {
        frame.render_widget(
            Paragraph::new(subtitle).style(Style::default().fg(Color::DarkGray)),
            subtitle_area,
        );
    }

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Search countries ");
    let search_inner = search_block.inner(search_area);
    frame.render_widget(Paragraph::new(query.to_string()).block(search_block), search_area);

    frame.set_cursor_position(cursor_in(search_inner, query.chars().count(), 0));

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(" No countries found").style(Style::default().fg(Color::DarkGray)),
            list_area,
        );
        return;
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, list_area, state);
}

fn render_country_picker(app: &mut App, frame: &mut Frame, area: Rect) {
    let popup_area = popup_rect(area, 56, 20);
    let current = app.composer.selected_country().code.clone();
    let items = country_items(&app.composer.active_matches(), &current);

    render_country_list(
        frame,
        popup_area,
        " Select country ".to_string(),
        None,
        app.composer.active_search().query(),
        items,
        &mut app.country_picker_state,
    );
}

fn render_settings_popup(app: &mut App, frame: &mut Frame, area: Rect) {
    let popup_area = popup_rect(area, 56, 22);
    let current = app.composer.selected_country().code.clone();
    let items = country_items(&app.composer.default_matches(), &current);

    render_country_list(
        frame,
        popup_area,
        " Default country ".to_string(),
        Some("Choose your default country for new sessions:"),
        app.composer.default_search().query(),
        items,
        &mut app.default_picker_state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_cursor_is_clamped_to_area() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(cursor_in(area, 4, 1), (6, 4));
        assert_eq!(cursor_in(area, 500, 500), (11, 6));
        assert_eq!(cursor_in(area, usize::MAX, 70_000), (11, 6));
    }

    #[test]
    fn test_render_very_long_message() {
        let (mut app, _) = test_app();
        app.focus = Field::Message;
        app.composer.set_message_text(&"x\n".repeat(70_000));

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(&mut app, frame)).unwrap();
    }

    #[test]
    fn test_render_with_country_picker_open() {
        let (mut app, _) = test_app();
        app.open_country_picker();
        app.country_picker_input('z');
        app.country_picker_input('z');

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(&mut app, frame)).unwrap();
    }
}
