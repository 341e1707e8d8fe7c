// Module declarations
mod app;
pub mod input;
pub mod showcase;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};
