//! Breed gallery with live search.
//!
//! The visible set is never stored: it is recomputed from the search term
//! whenever it is asked for, so it cannot drift from the input.

use crate::components::input::InputState;
use crate::motion::{ListPresence, Timing, Visibility};
use std::time::Duration;
use tracing::debug;

pub const BREEDS: [&str; 10] = [
    "Labrador Retriever",
    "German Shepherd",
    "Golden Retriever",
    "French Bulldog",
    "Bulldog",
    "Poodle",
    "Beagle",
    "Rottweiler",
    "Dachshund",
    "Siberian Husky",
];

pub const BREED_DESCRIPTION: &str =
    "A popular and beloved dog breed known for its unique characteristics and charm.";

pub const SEARCH_PLACEHOLDER: &str = "Search breeds...";

pub const CARD_TIMING: Timing = Timing::symmetric(Duration::from_millis(300));

/// Case-insensitive substring filter that keeps the input order.
pub fn filter_breeds<'a>(breeds: &[&'a str], term: &str) -> Vec<&'a str> {
    let needle = term.to_lowercase();
    breeds
        .iter()
        .copied()
        .filter(|breed| breed.to_lowercase().contains(&needle))
        .collect()
}

/// Image-search keyword for a breed: lowercased, with the first space turned
/// into a hyphen. Later spaces are left alone.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replacen(' ', "-", 1)
}

pub fn image_url(service: &str, name: &str) -> String {
    format!("https://{}/400x300/?{}", service, slugify(name))
}

#[derive(Debug)]
pub struct BreedBrowser {
    pub search: InputState,
    pub selected: usize,
    cards: ListPresence<&'static str>,
    image_service: String,
}

impl BreedBrowser {
    pub fn new(image_service: impl Into<String>, timing: Timing) -> Self {
        Self {
            search: InputState::new(),
            selected: 0,
            cards: ListPresence::new(BREEDS, timing),
            image_service: image_service.into(),
        }
    }

    pub fn visible_breeds(&self) -> Vec<&'static str> {
        filter_breeds(&BREEDS, &self.search.text)
    }

    /// Apply an edit to the search box and reconcile the card set.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut InputState)) {
        let before = self.search.text.clone();
        edit(&mut self.search);
        if self.search.text == before {
            return;
        }
        let visible = self.visible_breeds();
        debug!(term = %self.search.text, matches = visible.len(), "breed search updated");
        self.cards.sync(&visible);
        self.selected = self.selected.min(visible.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        let len = self.visible_breeds().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_breed(&self) -> Option<&'static str> {
        self.visible_breeds().get(self.selected).copied()
    }

    pub fn image_url(&self, breed: &str) -> String {
        image_url(&self.image_service, breed)
    }

    /// Cards to draw this frame in list order, including ones still leaving.
    pub fn rendered_cards(&self) -> Vec<(&'static str, Visibility)> {
        BREEDS
            .iter()
            .filter_map(|breed| self.cards.visibility(breed).map(|v| (*breed, v)))
            .collect()
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.cards.advance(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.cards.is_animating()
    }
}
