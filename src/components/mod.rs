//! Page content units and the shell that mounts them.

pub mod breed_browser;
pub mod care_tips;
pub mod fact_rotator;
pub mod input;
pub mod page_shell;
