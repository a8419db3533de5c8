//! Frame-driven enter/exit animation primitives.
//!
//! Transitions only describe how far along an animation is; the UI layer maps
//! that progress to colour fades and row/column offsets. Component state never
//! waits on an animation finishing.

pub mod presence;
pub mod transition;

pub use presence::{ListPresence, Presence, Timing, Visibility};
pub use transition::Transition;
