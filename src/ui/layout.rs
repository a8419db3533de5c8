use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub banner: Rect,
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Keep the page narrow on wide terminals
    let page = centered_width(area, 110);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Content card
            Constraint::Length(1), // Status bar
        ])
        .split(page);

    AppLayout {
        banner: chunks[0],
        tab_bar: chunks[1],
        content: chunks[2],
        status_bar: Rect::new(area.x, chunks[3].y, area.width, chunks[3].height),
    }
}

pub fn centered_width(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Number of card columns that fit, mirroring a 1/2/3 column responsive grid.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=95 => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let layout = compute_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.banner, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.tab_bar, Rect::new(0, 3, 80, 3));
        assert_eq!(layout.content, Rect::new(0, 6, 80, 23));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 80, 1));
    }

    #[test]
    fn test_short_terminal_keeps_regions_inside() {
        for height in 0..12 {
            let area = Rect::new(0, 0, 80, height);
            let layout = compute_layout(area);
            for region in [layout.banner, layout.tab_bar, layout.content, layout.status_bar] {
                assert_eq!(area.union(region), area);
            }
        }
    }

    #[test]
    fn test_page_is_centered_on_wide_terminals() {
        let layout = compute_layout(Rect::new(0, 0, 200, 30));
        assert_eq!(layout.content.x, 45);
        assert_eq!(layout.content.width, 110);
        assert_eq!(layout.status_bar.width, 200);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(110), 3);
    }
}
