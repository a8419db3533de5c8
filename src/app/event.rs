use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;

/// Identifies one mount of a timer-owning component, so firings queued
/// before an unmount can be told apart from current ones.
pub type Generation = u64;

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Fun-fact rotation timer fired
    FactTimer { generation: Generation },

    /// Animation frame
    Tick,
}
