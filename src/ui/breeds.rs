use crate::components::breed_browser::{BreedBrowser, BREED_DESCRIPTION};
use crate::motion::Visibility;
use crate::ui::input_box;
use crate::ui::layout::grid_columns;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CARD_HEIGHT: u16 = 8;
const CARD_HEIGHT_NO_URL: u16 = 6;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    browser: &BreedBrowser,
    opacity: f32,
    live: bool,
    show_urls: bool,
) {
    if area.height < 4 {
        return;
    }
    let search_area = Rect::new(area.x, area.y, area.width, 3);
    input_box::render(frame, search_area, browser, opacity, live);

    let grid = Rect::new(area.x, area.y + 4, area.width, area.height.saturating_sub(4));
    let cards = browser.rendered_cards();
    if cards.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!("No breeds match \"{}\".", browser.search.text),
            Theme::faded(Theme::placeholder(), opacity),
        )));
        frame.render_widget(hint, grid);
        return;
    }

    let card_h = if show_urls { CARD_HEIGHT } else { CARD_HEIGHT_NO_URL };
    let cols = grid_columns(grid.width);
    let rows_fit = (grid.height / card_h).max(1) as usize;

    // Scroll so the selected card's row stays on screen
    let selected = browser.selected_breed();
    let selected_pos = selected
        .and_then(|name| cards.iter().position(|(n, _)| *n == name))
        .unwrap_or(0);
    let first_row = (selected_pos / cols).saturating_sub(rows_fit - 1);

    let col_w = grid.width / cols as u16;
    for (slot, (name, vis)) in cards
        .iter()
        .enumerate()
        .skip(first_row * cols)
        .take(rows_fit * cols)
        .map(|(i, card)| (i - first_row * cols, card))
    {
        let row = (slot / cols) as u16;
        let col = (slot % cols) as u16;
        let cell = Rect::new(grid.x + col * col_w, grid.y + row * card_h, col_w, card_h);
        if cell.bottom() > grid.bottom() {
            break;
        }
        let is_selected = Some(*name) == selected;
        render_card(frame, cell, browser, name, *vis, opacity, is_selected, show_urls);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    frame: &mut Frame,
    cell: Rect,
    browser: &BreedBrowser,
    name: &str,
    vis: Visibility,
    page_opacity: f32,
    selected: bool,
    show_urls: bool,
) {
    let opacity = vis.opacity() * page_opacity;
    if opacity <= 0.0 {
        return;
    }

    // Cards grow in from slightly smaller and shrink on the way out
    let inset = if opacity < 0.6 { 1 } else { 0 };
    let mut area = Rect::new(
        cell.x + inset,
        cell.y,
        cell.width.saturating_sub(1 + 2 * inset),
        cell.height.saturating_sub(1),
    );
    if area.width < 4 {
        area = cell;
    }

    let border = if selected {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", name),
            Theme::faded(Theme::title(), opacity),
        ))
        .borders(Borders::ALL)
        .border_type(if selected {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(Theme::faded(border, opacity))
        .style(Theme::card_bg());

    let mut inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if show_urls {
        let url = fit_width(&browser.image_url(name), inner.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(url, Theme::faded(Theme::link(), opacity))),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
        inner = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
    }

    let description = Paragraph::new(Span::styled(
        BREED_DESCRIPTION,
        Theme::faded(Style::default().fg(Theme::TEXT_SECONDARY), opacity),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(description, inner);
}

/// Clip `text` to `width` columns, marking the cut with an ellipsis.
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}
