use crate::app::state::AppState;
use crate::components::page_shell::Tab;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let titles = Tab::ALL.iter().map(|tab| tab_title(*tab));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(state.shell.active().index())
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::border()));

    frame.render_widget(tabs, area);
}

fn tab_title(tab: Tab) -> String {
    format!(" {} {} ", tab.index() + 1, tab.label())
}

/// Hit-test a click against the strip drawn by `render` into `area`. Each
/// title is framed by one column of padding per side, titles are separated by
/// a one-column divider, and the border takes the outer column.
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    let inner_right = area.right().saturating_sub(1);
    let mut x = area.x + 1;
    for tab in Tab::ALL {
        let end = x + tab_title(tab).width() as u16 + 2;
        if column >= x && column < end.min(inner_right) {
            return Some(tab);
        }
        x = end + 1;
    }
    None
}
