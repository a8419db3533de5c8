mod banner;
mod breeds;
mod care;
mod facts;
mod input_box;
mod layout;
mod status_bar;
mod tab_bar;
mod theme;

use crate::app::state::AppState;
use crate::components::page_shell::{Content, Tab};
use crate::motion::Visibility;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

const SLIDE_ROWS: f32 = 1.0;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::panel_bg()), area);

    let app_layout = layout::compute_layout(area);
    banner::render(frame, app_layout.banner.intersection(area), state);
    tab_bar::render(frame, app_layout.tab_bar.intersection(area), state);
    render_content(frame, app_layout.content.intersection(area), state);
    status_bar::render(frame, app_layout.status_bar.intersection(area), state);
}

/// The tab under a click at (`column`, `row`) on a screen of size `screen`.
pub fn tab_at(screen: Rect, column: u16, row: u16) -> Option<Tab> {
    tab_bar::tab_at(layout::compute_layout(screen).tab_bar, column, row)
}

/// Draws the content card for whichever tab the transition is showing. While
/// the previous tab is leaving only its header is drawn: its unit is already
/// gone.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let (shown, vis) = state.shell.displayed_tab();
    let opacity = vis.opacity();
    if opacity <= 0.0 {
        return;
    }

    let shift = (vis.offset() * SLIDE_ROWS).round() as i16;
    let area = match shift {
        s if s > 0 => Rect::new(area.x, area.y + s as u16, area.width, area.height.saturating_sub(s as u16)),
        s if s < 0 => Rect::new(area.x, area.y, area.width, area.height.saturating_sub(s.unsigned_abs())),
        _ => area,
    }
    .intersection(area);
    if area.is_empty() {
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", shown.title()),
            Theme::faded(Theme::title(), opacity),
        ))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::faded(Theme::border(), opacity))
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    let description = Paragraph::new(Line::from(Span::styled(
        shown.description(),
        Theme::faded(Theme::placeholder(), opacity),
    )));
    frame.render_widget(description, Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1));

    let body = Rect::new(
        inner.x + 1,
        inner.y + 2,
        inner.width.saturating_sub(2),
        inner.height - 2,
    );
    if shown != state.shell.mounted() {
        return;
    }
    let live = vis == Visibility::Shown;
    match state.shell.content() {
        Content::Breeds(browser) => breeds::render(
            frame,
            body,
            browser,
            opacity,
            live,
            state.config.ui.show_image_urls,
        ),
        Content::Facts(rotator) => facts::render(frame, body, rotator, opacity),
        Content::Care(list) => care::render(frame, body, list, opacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::AppEvent;
    use crate::components::fact_rotator::FACTS;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn still_state() -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
        let mut config = AppConfig::default();
        config.ui.animations = false;
        let (tx, rx) = mpsc::unbounded_channel();
        (AppState::new(config, tx), rx)
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_breeds_page_renders_cards_and_urls() {
        let (state, _rx) = still_state();
        let screen = draw(&state, 110, 40);
        assert!(screen.contains("All About Dogs"));
        assert!(screen.contains("1 Dog Breeds"));
        assert!(screen.contains("Popular Dog Breeds"));
        assert!(screen.contains("Search breeds..."));
        assert!(screen.contains("Labrador Retriever"));
        // Cards clip the address; the status bar carries the selected one in full
        assert!(screen.contains("https://source.unsplash.com/400"));
        assert!(screen.contains("https://source.unsplash.com/400x300/?labrador-retriever"));
        assert!(screen.contains("10 breeds"));
    }

    #[tokio::test]
    async fn test_empty_search_shows_hint() {
        let (mut state, _rx) = still_state();
        if let Some(browser) = state.shell.breeds_mut() {
            browser.edit_search(|input| "xyz".chars().for_each(|c| input.insert_char(c)));
        }
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("No breeds match \"xyz\"."));
        assert!(screen.contains("0 of 10 breeds match"));
    }

    #[tokio::test]
    async fn test_care_page_lists_tips_in_order() {
        let (mut state, _rx) = still_state();
        state.shell.select(Tab::Care);
        let screen = draw(&state, 100, 40);
        assert!(screen.contains("Essential Dog Care Tips"));
        let positions: Vec<usize> = [
            "Balanced Diet",
            "Regular Exercise",
            "Veterinary Check-ups",
            "Grooming",
            "Mental Stimulation",
        ]
        .iter()
        .map(|title| screen.find(title).expect("tip missing"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_facts_page_shows_current_fact() {
        let (mut state, _rx) = still_state();
        state.shell.select(Tab::Facts);
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("Fun Dog Facts"));
        assert!(screen.contains("Dogs have a sense of time"));

        state.shell.on_fact_timer(1);
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("nose print is unique"));
        assert!(!screen.contains(FACTS[0]));
    }

    #[tokio::test]
    async fn test_leaving_tab_draws_only_its_header() {
        let mut config = AppConfig::default();
        config.ui.animations = true;
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(config, tx);
        state.shell.select(Tab::Care);

        let screen = draw(&state, 100, 40);
        assert!(screen.contains("Popular Dog Breeds"));
        assert!(!screen.contains("Search breeds..."));
        assert!(!screen.contains("Essential Dog Care Tips"));
    }

    #[tokio::test]
    async fn test_every_tab_draws_at_tiny_sizes() {
        for animations in [false, true] {
            let mut config = AppConfig::default();
            config.ui.animations = animations;
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut state = AppState::new(config, tx);
            if let Some(browser) = state.shell.breeds_mut() {
                browser.edit_search(|input| input.insert_char('o'));
            }

            for tab in [Tab::Breeds, Tab::Facts, Tab::Care, Tab::Breeds] {
                state.shell.select(tab);
                for step in 0..3 {
                    for width in [1, 2, 3, 5, 8, 13, 21, 40, 80, 130] {
                        for height in 1..=24 {
                            draw(&state, width, height);
                        }
                    }
                    state.shell.advance(Duration::from_millis(150 * step));
                }
            }
        }
    }
}
