use crate::app::event::EventSender;
use crate::components::breed_browser::BREEDS;
use crate::components::care_tips::CARE_TIPS;
use crate::components::fact_rotator::FACTS;
use crate::components::page_shell::{Content, PageShell, ShellSettings};
use crate::config::AppConfig;
use ratatui::layout::Rect;
use std::time::Duration;

pub struct AppState {
    pub config: AppConfig,
    pub shell: PageShell,
    pub should_quit: bool,
    pub dirty: bool,
    pub frame_time: Duration,
    /// Last known terminal size, for mouse hit-testing.
    pub viewport: Rect,
}

impl AppState {
    pub fn new(config: AppConfig, events: EventSender) -> Self {
        let settings = ShellSettings {
            fact_interval: config.fact_interval(),
            image_service: config.images.service.clone(),
            animations: config.ui.animations,
        };
        let frame_time = config.tick_rate();
        Self {
            shell: PageShell::new(events, settings),
            config,
            should_quit: false,
            dirty: true,
            frame_time,
            viewport: Rect::default(),
        }
    }

    pub fn status_line(&self) -> String {
        match self.shell.content() {
            Content::Breeds(browser) => {
                let matches = browser.visible_breeds().len();
                if browser.search.is_empty() {
                    format!("{} breeds", BREEDS.len())
                } else {
                    format!("{} of {} breeds match", matches, BREEDS.len())
                }
            }
            Content::Facts(rotator) => {
                format!(
                    "Fact {}/{} | every {}",
                    rotator.index() + 1,
                    FACTS.len(),
                    format_interval(self.config.fact_interval())
                )
            }
            Content::Care(_) => format!("{} tips", CARE_TIPS.len()),
        }
    }
}

/// Whole seconds as `5s`, anything finer in milliseconds.
fn format_interval(interval: Duration) -> String {
    let ms = interval.as_millis();
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{}ms", ms)
    }
}
