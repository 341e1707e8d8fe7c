//! Event System
//!
//! Activity events raised by user interactions and the terminal host

use crate::catalog::{Section, WidgetId};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// What raised the event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The sidebar navigation radio.
    Navigation,
    /// An interactive widget on the page.
    Widget(WidgetId),
    /// The terminal host itself (uploads, animations, configuration).
    Host,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Interaction,
    Render,
    Upload,
    Celebration,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn navigation(section: Section) -> Self {
        Self::new(
            Source::Navigation,
            format!("Section: {}", section),
            EventType::Interaction,
            LogLevel::Info,
        )
    }

    pub fn widget(id: WidgetId, msg: String) -> Self {
        Self::new(Source::Widget(id), msg, EventType::Interaction, LogLevel::Debug)
    }

    pub fn host_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Host, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Forward the event to the `log` facade.
    pub fn emit(&self) {
        log::log!(log::Level::from(self.log_level), "{}", self);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
