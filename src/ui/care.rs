use crate::components::care_tips::{CareTipList, CARE_HEADING};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const TIP_HEIGHT: u16 = 4;
const SLIDE_COLS: f32 = 4.0;

pub fn render(frame: &mut Frame, area: Rect, list: &CareTipList, opacity: f32) {
    if area.height == 0 {
        return;
    }
    let heading = Paragraph::new(Line::from(Span::styled(
        CARE_HEADING,
        Theme::faded(Theme::title(), opacity),
    )));
    frame.render_widget(heading, Rect::new(area.x, area.y, area.width, 1));

    let mut y = area.y + 2;
    for (tip, vis) in list.cards() {
        if y + TIP_HEIGHT > area.bottom() {
            break;
        }
        let slot = Rect::new(area.x, y, area.width, TIP_HEIGHT);
        y += TIP_HEIGHT;

        let card_opacity = vis.opacity() * opacity;
        if card_opacity <= 0.0 {
            continue;
        }
        // Slides in horizontally while fading
        let indent = ((vis.offset() * SLIDE_COLS).round() as u16).min(slot.width / 4);
        let card = Rect::new(slot.x + indent, slot.y, slot.width - indent, slot.height);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", tip.title),
                Theme::faded(Theme::title(), card_opacity),
            ))
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::faded(Theme::border(), card_opacity))
            .style(Theme::card_bg());
        let body = Paragraph::new(Line::from(Span::styled(
            tip.description,
            Theme::faded(Style::default().fg(Theme::TEXT_SECONDARY), card_opacity),
        )))
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(body, card);
    }
}
