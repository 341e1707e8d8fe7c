//! Showcase screen state
//!
//! Owns the per-session widget store, the view of the latest render pass and
//! the host-side animations.

use crate::catalog::{Element, ProgressTask, SessionState, View};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::ui::app::UIConfig;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Which pane receives key presses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// One balloon of the celebration overlay.
#[derive(Debug, Clone)]
pub struct Balloon {
    /// Horizontal position as a fraction of the screen width.
    pub x: f64,
    /// Screen heights travelled over the whole animation.
    pub speed: f64,
    /// Delay before the balloon appears, as a fraction of the animation.
    pub delay: f64,
    pub color: usize,
}

/// A running balloon animation.
#[derive(Debug, Clone)]
pub struct Celebration {
    pub started_at: Instant,
    pub duration: Duration,
    pub balloons: Vec<Balloon>,
}

impl Celebration {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: Instant, duration: Duration) -> Self {
        let balloons = (0..24)
            .map(|i| Balloon {
                x: rng.gen_range(0.02..0.98),
                speed: rng.gen_range(1.1..1.8),
                delay: rng.gen_range(0.0..0.35),
                color: i,
            })
            .collect();
        Self {
            started_at: now,
            duration,
            balloons,
        }
    }

    /// Fraction of the animation elapsed at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug)]
pub struct ShowcaseState {
    /// Per-session widget store and active section.
    pub session: SessionState,
    /// Output of the latest render pass.
    pub view: View,
    /// Info box under the section radio.
    pub sidebar: View,
    /// Pane receiving key presses.
    pub focus: Focus,
    /// Index into `view.focusables()` of the focused element.
    pub focused: usize,
    /// First content row shown in the content pane.
    pub scroll: u16,
    /// Progress demo driver.
    pub progress: ProgressTask,
    /// Balloon animation, while it runs.
    pub celebration: Option<Celebration>,
    /// Path typed into the upload prompt, while it is open.
    pub upload_prompt: Option<String>,
    /// Recent activity for the sidebar log.
    pub activity_logs: VecDeque<Event>,
    /// Whether to paint the background.
    pub with_background_color: bool,

    pub(super) celebration_duration: Duration,
    pub(super) rng: StdRng,
}

impl ShowcaseState {
    /// Creates the state and runs the first render pass.
    pub fn new(ui_config: &UIConfig, now: Instant) -> Self {
        let rng = match ui_config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = Self {
            session: SessionState::new(),
            view: View::default(),
            sidebar: View::default(),
            focus: Focus::Sidebar,
            focused: 0,
            scroll: 0,
            progress: ProgressTask::new(ui_config.progress_step),
            celebration: None,
            upload_prompt: None,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            celebration_duration: ui_config.celebration,
            rng,
        };
        state.rerun(now);
        state
    }

    /// The focused element of the current view, if the content pane has any.
    pub fn focused_element(&self) -> Option<&Element> {
        let (index, _) = *self.view.focusables().get(self.focused)?;
        self.view.elements().get(index)
    }

    /// Whether typed characters should be routed to the focused control.
    pub fn is_editing_text(&self) -> bool {
        self.focus == Focus::Content
            && matches!(
                self.focused_element(),
                Some(Element::Control(control)) if control.state.accepts_text()
            )
    }

    /// Add an event to the activity log with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        event.emit();
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebration_progress_is_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let celebration = Celebration::new(&mut rng, start, Duration::from_millis(1000));
        assert_eq!(celebration.balloons.len(), 24);
        assert_eq!(celebration.progress(start), 0.0);
        assert!((celebration.progress(start + Duration::from_millis(500)) - 0.5).abs() < 1e-9);
        assert!(celebration.is_finished(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_length_celebration_is_finished() {
        let mut rng = StdRng::seed_from_u64(5);
        let now = Instant::now();
        assert!(Celebration::new(&mut rng, now, Duration::ZERO).is_finished(now));
    }
}
