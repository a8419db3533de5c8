use crate::motion::{Transition, Visibility};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CARE_HEADING: &str = "Essential Dog Care Tips";

pub static CARE_TIPS: [CareTip; 5] = [
    CareTip {
        title: "Balanced Diet",
        description: "Provide a balanced diet appropriate for your dog's age, size, and activity level.",
    },
    CareTip {
        title: "Regular Exercise",
        description: "Ensure your dog gets regular exercise through walks, playtime, and activities.",
    },
    CareTip {
        title: "Veterinary Check-ups",
        description: "Schedule regular check-ups with a veterinarian for vaccinations and health screenings.",
    },
    CareTip {
        title: "Grooming",
        description: "Groom your dog regularly, including brushing their coat and teeth.",
    },
    CareTip {
        title: "Mental Stimulation",
        description: "Offer mental stimulation through training, puzzle toys, and interactive games.",
    },
];

const TIP_ENTER: Duration = Duration::from_millis(500);
const STAGGER_STEP: Duration = Duration::from_millis(100);

pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Fixed tip cards. The only per-mount state is each card's entrance.
#[derive(Debug)]
pub struct CareTipList {
    entrances: Vec<Transition>,
}

impl CareTipList {
    pub fn new(animations: bool) -> Self {
        let entrances = (0..CARE_TIPS.len())
            .map(|i| {
                if animations {
                    Transition::new(TIP_ENTER).with_delay(stagger_delay(i))
                } else {
                    Transition::completed()
                }
            })
            .collect();
        Self { entrances }
    }

    pub fn cards(&self) -> Vec<(&'static CareTip, Visibility)> {
        CARE_TIPS
            .iter()
            .zip(&self.entrances)
            .map(|(tip, t)| {
                let vis = if t.is_done() {
                    Visibility::Shown
                } else if t.is_started() {
                    Visibility::Entering(t.progress())
                } else {
                    Visibility::Hidden
                };
                (tip, vis)
            })
            .collect()
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.entrances
            .iter_mut()
            .fold(false, |animating, t| t.advance(dt) || animating)
    }

    pub fn is_animating(&self) -> bool {
        self.entrances.iter().any(|t| !t.is_done())
    }
}
