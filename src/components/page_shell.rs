//! Top-level page: banner, tab switcher and the single mounted content unit.
//!
//! `content` is an enum, so exactly one unit exists at a time. Switching tabs
//! runs the old unit's cleanup before the new unit is built; the presence
//! transition that follows is purely visual.

use crate::app::event::{EventSender, Generation};
use crate::components::breed_browser::{BreedBrowser, CARD_TIMING};
use crate::components::care_tips::CareTipList;
use crate::components::fact_rotator::{FactRotator, FACT_TIMING};
use crate::motion::{Presence, Timing, Transition, Visibility};
use std::time::Duration;
use tracing::info;

pub const BANNER_TITLE: &str = "All About Dogs";

const TAB_TIMING: Timing = Timing::symmetric(Duration::from_millis(300));
const BANNER_ENTER: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Breeds,
    Facts,
    Care,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Breeds, Tab::Facts, Tab::Care];

    pub fn index(self) -> usize {
        match self {
            Tab::Breeds => 0,
            Tab::Facts => 1,
            Tab::Care => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Breeds => "Dog Breeds",
            Tab::Facts => "Fun Facts",
            Tab::Care => "Care Tips",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Breeds => "Popular Dog Breeds",
            Tab::Facts => "Fun Dog Facts",
            Tab::Care => "Dog Care Tips",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tab::Breeds => "Explore some of the most beloved dog breeds",
            Tab::Facts => "Interesting tidbits about our canine companions",
            Tab::Care => "Essential advice for keeping your dog happy and healthy",
        }
    }
}

/// Runtime knobs the shell passes down to the units it mounts.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub fact_interval: Duration,
    pub image_service: String,
    pub animations: bool,
}

pub enum Content {
    Breeds(BreedBrowser),
    Facts(FactRotator),
    Care(CareTipList),
}

impl Content {
    pub fn tab(&self) -> Tab {
        match self {
            Content::Breeds(_) => Tab::Breeds,
            Content::Facts(_) => Tab::Facts,
            Content::Care(_) => Tab::Care,
        }
    }

    fn unmount(&mut self) {
        if let Content::Facts(rotator) = self {
            rotator.unmount();
        }
    }

    fn advance(&mut self, dt: Duration) -> bool {
        match self {
            Content::Breeds(b) => b.advance(dt),
            Content::Facts(f) => f.advance(dt),
            Content::Care(c) => c.advance(dt),
        }
    }

    fn is_animating(&self) -> bool {
        match self {
            Content::Breeds(b) => b.is_animating(),
            Content::Facts(f) => f.is_animating(),
            Content::Care(c) => c.is_animating(),
        }
    }
}

pub struct PageShell {
    active: Tab,
    content: Content,
    presence: Presence<Tab>,
    banner: Transition,
    events: EventSender,
    settings: ShellSettings,
    next_generation: Generation,
}

impl PageShell {
    pub fn new(events: EventSender, settings: ShellSettings) -> Self {
        let animations = settings.animations;
        let banner = if animations {
            Transition::new(BANNER_ENTER)
        } else {
            Transition::completed()
        };
        let mut next_generation = 0;
        let content = mount(Tab::Breeds, &events, &settings, &mut next_generation);
        Self {
            active: Tab::Breeds,
            content,
            presence: Presence::new(Tab::Breeds, TAB_TIMING.enabled(animations)),
            banner,
            events,
            settings,
            next_generation,
        }
    }

    /// Switch to `tab`. Selecting the active tab does nothing.
    pub fn select(&mut self, tab: Tab) -> bool {
        if tab == self.active {
            return false;
        }
        info!(from = ?self.active, to = ?tab, "switching tab");
        self.content.unmount();
        let next = mount(tab, &self.events, &self.settings, &mut self.next_generation);
        // The old unit is dropped here, after its cleanup already ran.
        self.content = next;
        self.active = tab;
        self.presence.switch(tab);
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.active.next())
    }

    pub fn select_prev(&mut self) -> bool {
        self.select(self.active.prev())
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// The unit that currently exists, derived from the content itself.
    pub fn mounted(&self) -> Tab {
        self.content.tab()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn breeds_mut(&mut self) -> Option<&mut BreedBrowser> {
        match &mut self.content {
            Content::Breeds(b) => Some(b),
            _ => None,
        }
    }

    pub fn on_fact_timer(&mut self, generation: Generation) -> bool {
        match &mut self.content {
            Content::Facts(rotator) => rotator.on_timer(generation),
            _ => false,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let banner = self.banner.advance(dt);
        let tab = self.presence.advance(dt);
        let content = self.content.advance(dt);
        banner || tab || content
    }

    pub fn is_animating(&self) -> bool {
        !self.banner.is_done() || self.presence.is_animating() || self.content.is_animating()
    }

    /// Which content region to draw this frame and how visible it is.
    pub fn displayed_tab(&self) -> (Tab, Visibility) {
        let (tab, vis) = self.presence.visible();
        (*tab, vis)
    }

    pub fn banner_progress(&self) -> f32 {
        self.banner.progress()
    }

    /// Page teardown: run the mounted unit's cleanup.
    pub fn teardown(&mut self) {
        info!(tab = ?self.active, "tearing down page");
        self.content.unmount();
    }
}

fn mount(
    tab: Tab,
    events: &EventSender,
    settings: &ShellSettings,
    next_generation: &mut Generation,
) -> Content {
    let animations = settings.animations;
    info!(?tab, "mounting content");
    match tab {
        Tab::Breeds => Content::Breeds(BreedBrowser::new(
            settings.image_service.clone(),
            CARD_TIMING.enabled(animations),
        )),
        Tab::Facts => {
            *next_generation += 1;
            Content::Facts(FactRotator::mount(
                events.clone(),
                settings.fact_interval,
                *next_generation,
                FACT_TIMING.enabled(animations),
            ))
        }
        Tab::Care => Content::Care(CareTipList::new(animations)),
    }
}
