use crate::components::fact_rotator::{FactRotator, FACTS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const PANEL_HEIGHT: u16 = 9;
const SLIDE_ROWS: f32 = 2.0;

pub fn render(frame: &mut Frame, area: Rect, rotator: &FactRotator, opacity: f32) {
    let panel = Rect::new(area.x, area.y, area.width, area.height.min(PANEL_HEIGHT));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::fade(Theme::ACCENT_LAVENDER, opacity)))
        .style(Theme::card_bg());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (text, vis) = rotator.displayed();
    let fact_opacity = vis.opacity() * opacity;

    // Text rises in from below and leaves upward
    let text_h = 3u16.min(inner.height - 1);
    let resting = inner.y + (inner.height - 1 - text_h) / 2;
    let shift = (vis.offset() * SLIDE_ROWS).round() as i32;
    let top = (resting as i32 + shift).clamp(inner.y as i32, (inner.bottom() - 1 - text_h) as i32);
    let text_area = Rect::new(inner.x + 1, top as u16, inner.width.saturating_sub(2), text_h);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Theme::fade(Theme::TEXT_PRIMARY, fact_opacity))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, text_area);

    let dots_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(position_dots(rotator.index(), opacity)).alignment(Alignment::Center),
        dots_area,
    );
}

fn position_dots(index: usize, opacity: f32) -> Line<'static> {
    let spans: Vec<Span> = (0..FACTS.len())
        .map(|i| {
            let (glyph, color) = if i == index {
                ("● ", Theme::ACCENT_TEAL)
            } else {
                ("○ ", Theme::TEXT_MUTED)
            };
            Span::styled(glyph, Style::default().fg(Theme::fade(color, opacity)))
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_dots_mark_current_fact() {
        let line = position_dots(2, 1.0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ○ ● ○ ○ ");
    }
}
