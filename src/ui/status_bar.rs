use crate::app::state::AppState;
use crate::components::page_shell::{Content, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.is_empty() {
        return;
    }
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.shell.active().label()),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BORDER_DIM),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Full image address of the selected card
    if let Content::Breeds(browser) = state.shell.content() {
        if let Some(breed) = browser
            .selected_breed()
            .filter(|_| state.config.ui.show_image_urls)
        {
            parts.push(Span::styled(
                format!(" {} ", browser.image_url(breed)),
                Theme::link().bg(Theme::BORDER_DIM),
            ));
        }
    }

    let hints = key_hints(state.shell.active());

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hints,
        Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BORDER_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn key_hints(active: Tab) -> &'static str {
    match active {
        Tab::Breeds => " Tab/F1-F3 switch  ↑↓ select  Esc clear/quit ",
        Tab::Facts | Tab::Care => " Tab/1-3 switch  q quit ",
    }
}
