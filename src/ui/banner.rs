use crate::app::state::AppState;
use crate::components::page_shell::BANNER_TITLE;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let progress = state.shell.banner_progress();
    let line = gradient_line(BANNER_TITLE, progress);

    // Drops into place from the top row as it fades in
    let row = if progress < 0.5 { 0 } else { area.height.min(2) / 2 };
    let title_area = Rect::new(area.x, area.y + row, area.width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), title_area);
}

fn gradient_line(text: &str, opacity: f32) -> Line<'static> {
    let count = text.chars().count().max(2) - 1;
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let color = Theme::fade(Theme::gradient(i as f32 / count as f32), opacity);
            Span::styled(
                c.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}
