//! Showcase state update logic
//!
//! Applies commands, runs render passes and advances the host animations.

use super::state::{Celebration, Focus, ShowcaseState};

use crate::catalog::{self, Interaction, UploadedFile, WidgetId, WidgetValue};
use crate::consts::cli_consts::CELEBRATION_FRAME_MS;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::ui::input::Command;

use chrono::Local;
use log::{debug, info, warn};
use std::path::Path;
use std::time::{Duration, Instant};

impl ShowcaseState {
    /// Apply a command from the key map.
    pub fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::Quit => {}
            Command::Interact(interaction) => self.interact(interaction, now),
            Command::FocusContent => self.focus = Focus::Content,
            Command::FocusSidebar => self.focus = Focus::Sidebar,
            Command::FocusNext => self.move_focus(1),
            Command::FocusPrevious => self.move_focus(-1),
            Command::Scroll(delta) => {
                self.scroll = (i32::from(self.scroll) + delta).max(0) as u16;
            }
            Command::OpenUploadPrompt => self.upload_prompt = Some(String::new()),
            Command::PromptInput(c) => {
                if let Some(path) = self.upload_prompt.as_mut() {
                    path.push(c);
                }
            }
            Command::PromptBackspace => {
                if let Some(path) = self.upload_prompt.as_mut() {
                    path.pop();
                }
            }
            Command::PromptCancel => self.upload_prompt = None,
            Command::PromptSubmit => {
                if let Some(path) = self.upload_prompt.take() {
                    self.submit_upload(path.trim(), now);
                }
            }
        }
    }

    /// Apply one interaction and run a new render pass.
    pub fn interact(&mut self, interaction: Interaction, now: Instant) {
        let event = match &interaction {
            Interaction::Navigate(section) => Some(Event::navigation(*section)),
            Interaction::Click(id) => Some(Event::widget(*id, format!("{} clicked", id))),
            Interaction::Set(id, value) => {
                Some(Event::widget(*id, format!("{} = {:?}", id, value)))
            }
            Interaction::ToggleOption(id, option) => Some(Event::widget(
                *id,
                format!("{} toggled option {}", id, option + 1),
            )),
            Interaction::MoveCursor(..) => None,
        };
        if let Some(event) = event {
            self.add_to_activity_log(event);
        }
        if matches!(interaction, Interaction::Navigate(_)) {
            self.focused = 0;
            self.scroll = 0;
        }
        self.session.apply(interaction);
        self.rerun(now);
    }

    /// Run a render pass over the current session state.
    pub(super) fn rerun(&mut self, now: Instant) {
        let today = Local::now().date_naive();
        self.view = catalog::render(&self.session, today, &mut self.rng);
        self.sidebar = catalog::render_sidebar(&self.session, today);
        self.session.end_pass();

        if self.view.has_progress() {
            self.progress.restart(now);
        } else {
            self.progress.cancel();
        }

        if self.view.has_balloons() {
            self.celebration = Some(Celebration::new(
                &mut self.rng,
                now,
                self.celebration_duration,
            ));
            self.add_to_activity_log(Event::host_with_level(
                "🎈 Celebrating!".to_string(),
                EventType::Celebration,
                LogLevel::Info,
            ));
        }

        let focusable = self.view.focusables().len();
        self.focused = self.focused.min(focusable.saturating_sub(1));
    }

    /// Advance animations. Called once per loop iteration.
    pub fn update(&mut self, now: Instant) {
        if let Some(&last) = self.progress.advance(now).last() {
            self.view.set_progress(last);
            if !self.progress.is_running() {
                debug!("Progress demo finished at {}%", self.progress.percent());
            }
        }

        if self
            .celebration
            .as_ref()
            .is_some_and(|celebration| celebration.is_finished(now))
        {
            self.celebration = None;
        }
    }

    /// Earliest instant at which an animation needs a redraw.
    pub fn next_deadline(&self) -> Option<Instant> {
        let progress = self.progress.next_deadline();
        let celebration = self
            .celebration
            .as_ref()
            .map(|_| Instant::now() + Duration::from_millis(CELEBRATION_FRAME_MS));
        match (progress, celebration) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.view.focusables().len();
        if count == 0 {
            return;
        }
        let next = self.focused as isize + delta;
        self.focused = next.clamp(0, count as isize - 1) as usize;
    }

    fn submit_upload(&mut self, path: &str, now: Instant) {
        if path.is_empty() {
            return;
        }
        match UploadedFile::from_path(Path::new(path)) {
            Ok(file) => {
                info!("Uploaded {} ({} bytes)", file.name, file.size_bytes);
                self.add_to_activity_log(Event::host_with_level(
                    format!("Uploaded {}", file.name),
                    EventType::Upload,
                    LogLevel::Info,
                ));
                self.session.apply(Interaction::Set(
                    WidgetId::Upload,
                    WidgetValue::File(Some(file)),
                ));
                self.rerun(now);
            }
            Err(e) => {
                warn!("{}", e);
                self.add_to_activity_log(Event::host_with_level(
                    e.to_string(),
                    EventType::Error,
                    LogLevel::Error,
                ));
            }
        }
    }
}
