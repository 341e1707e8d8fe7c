//! Per-session state container.
//!
//! Holds the active section and the widget store that the render pass reads.
//! Nothing here survives the session.

use super::section::Section;
use super::widgets::{WidgetId, WidgetValue};
use log::debug;
use std::collections::{HashMap, HashSet};

/// A single user interaction. Every interaction is followed by a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Pick a section from the navigation radio.
    Navigate(Section),
    /// Press a button. Visible to the next render pass only.
    Click(WidgetId),
    /// Replace the stored value of a widget.
    Set(WidgetId, WidgetValue),
    /// Add or remove one option of a multiselect.
    ToggleOption(WidgetId, usize),
    /// Move the option cursor of a multiselect.
    MoveCursor(WidgetId, usize),
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    section: Section,
    values: HashMap<WidgetId, WidgetValue>,
    triggered: HashSet<WidgetId>,
    cursors: HashMap<WidgetId, usize>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn value(&self, id: WidgetId) -> Option<&WidgetValue> {
        self.values.get(&id)
    }

    /// Whether the button triggered the current render pass.
    pub fn was_clicked(&self, id: WidgetId) -> bool {
        self.triggered.contains(&id)
    }

    pub fn cursor(&self, id: WidgetId) -> usize {
        self.cursors.get(&id).copied().unwrap_or(0)
    }

    /// Apply one interaction to the store.
    pub fn apply(&mut self, interaction: Interaction) {
        debug!("Applying interaction {:?}", interaction);
        match interaction {
            Interaction::Navigate(section) => self.section = section,
            Interaction::Click(id) => {
                self.triggered.insert(id);
            }
            Interaction::Set(id, value) => {
                self.values.insert(id, value);
            }
            Interaction::ToggleOption(id, option) => {
                let entry = self
                    .values
                    .entry(id)
                    .or_insert_with(|| WidgetValue::Indices(Vec::new()));
                if !matches!(entry, WidgetValue::Indices(_)) {
                    *entry = WidgetValue::Indices(Vec::new());
                }
                if let WidgetValue::Indices(selected) = entry {
                    if let Some(pos) = selected.iter().position(|&i| i == option) {
                        selected.remove(pos);
                    } else {
                        selected.push(option);
                    }
                }
            }
            Interaction::MoveCursor(id, cursor) => {
                self.cursors.insert(id, cursor);
            }
        }
    }

    /// Finish a render pass. Button presses are forgotten so that a click is
    /// observed by exactly one pass.
    pub fn end_pass(&mut self) {
        self.triggered.clear();
    }
}
