//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{IDLE_POLL_MS, SPLASH_MS};
use crate::ui::input::{Command, map_key};
use crate::ui::showcase::{ShowcaseState, render_showcase};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use log::debug;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Pause between steps of the progress demo.
    pub progress_step: Duration,
    /// How long the balloons stay on screen.
    pub celebration: Duration,
    /// Seed for the sample data; entropy when absent.
    pub seed: Option<u64>,
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The section pages with the navigation sidebar.
    Showcase(Box<ShowcaseState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Leaves the splash screen and runs the first render pass.
    fn open_showcase(&mut self, now: Instant) {
        debug!("Opening showcase");
        let state = ShowcaseState::new(&self.ui_config, now);
        self.current_screen = Screen::Showcase(Box::new(state));
    }
}

/// How long to wait for input before the next redraw.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    let idle = Duration::from_millis(IDLE_POLL_MS);
    deadline.map_or(idle, |deadline| {
        deadline.saturating_duration_since(now).min(idle)
    })
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_MS);

    // UI event loop
    loop {
        let now = Instant::now();
        if let Screen::Showcase(state) = &mut app.current_screen {
            state.update(now);
        }
        terminal.draw(|f| render(f, &mut app.current_screen))?;

        // Handle splash-to-showcase transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_showcase(Instant::now());
                continue;
            }
        }

        let deadline = match &app.current_screen {
            Screen::Splash => Some(splash_start + splash_duration),
            Screen::Showcase(state) => state.next_deadline(),
        };

        // Poll for key events
        if event::poll(poll_timeout(deadline, Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key press will skip the splash screen
                        app.open_showcase(Instant::now());
                    }
                    Screen::Showcase(state) => match map_key(state, key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(command) => state.execute(command, Instant::now()),
                        None => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &mut Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Showcase(state) => render_showcase(f, state),
    }
}
