//! Showcase screen
//!
//! Sidebar navigation on the left, the active demo page on the right

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_showcase;
pub use state::{Focus, ShowcaseState};
