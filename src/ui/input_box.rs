use crate::components::breed_browser::{BreedBrowser, SEARCH_PLACEHOLDER};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Search field plus its decorative button. Places the terminal cursor when
/// `live` is set, i.e. when the field is fully on screen.
pub fn render(frame: &mut Frame, area: Rect, browser: &BreedBrowser, opacity: f32, live: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(area);

    let (border_style, border_type) = if live {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Theme::faded(border_style, opacity))
        .padding(Padding::horizontal(1));

    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let input = &browser.search;
    let line = if input.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Theme::faded(Theme::placeholder(), opacity),
        ))
    } else {
        Line::from(Span::styled(
            input.text.as_str(),
            Theme::faded(Theme::input_text(), opacity),
        ))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if live && inner.width > 0 {
        let cursor_x = inner.x + input.cursor_column() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }

    let button = Paragraph::new(Line::from(Span::styled(
        "Search",
        Theme::faded(Style::default().fg(Theme::TEXT_SECONDARY), opacity),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::faded(Theme::border(), opacity)),
    );
    frame.render_widget(button, chunks[1]);
}
