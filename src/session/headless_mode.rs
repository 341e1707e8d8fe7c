//! Headless mode execution

use super::{SessionData, messages::print_session_starting};
use crate::catalog::{self, ProgressTask, Section, SessionState};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;

/// Renders one section against a fresh session and prints what a user would
/// see.
///
/// The progress demo runs to completion first, one blocking step at a time, so
/// the printed page always shows the finished bar.
pub fn run_headless_mode(session: SessionData, section: Section) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", section.label());

    let mut rng = match session.ui_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = SessionState::new();
    state.apply(catalog::Interaction::Navigate(section));
    let today = Local::now().date_naive();
    let mut view = catalog::render(&state, today, &mut rng);

    if view.has_progress() {
        ProgressTask::run_blocking(session.ui_config.progress_step, |percent| {
            view.set_progress(percent)
        });
    }

    for line in view.visible_text() {
        println!("{}", line);
    }

    let event = Event::host_with_level(
        format!("Rendered {} ({} elements)", section, view.elements().len()),
        EventType::Render,
        LogLevel::Info,
    );
    event.emit();
    println!("{}", event);

    Ok(())
}
