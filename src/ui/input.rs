//! Key handling
//!
//! Translates key presses into commands for the showcase screen. Widget keys
//! become [`Interaction`]s computed from the control's rendered state, so the
//! store only ever receives values inside the widget's domain.

use crate::catalog::{Control, ControlState, Element, Interaction, Section, WidgetValue};
use crate::ui::showcase::{Focus, ShowcaseState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rows moved by PageUp/PageDown in the data grid.
const GRID_PAGE: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Interact(Interaction),
    FocusContent,
    FocusSidebar,
    FocusNext,
    FocusPrevious,
    Scroll(i32),
    OpenUploadPrompt,
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
}

/// Map a key press to a command, given what is on screen.
pub fn map_key(state: &ShowcaseState, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if state.upload_prompt.is_some() {
        return map_prompt_key(key);
    }
    match state.focus {
        Focus::Sidebar => map_sidebar_key(state.session.section(), key),
        Focus::Content => map_content_key(state, key),
    }
}

fn map_prompt_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter => Some(Command::PromptSubmit),
        KeyCode::Esc => Some(Command::PromptCancel),
        KeyCode::Backspace => Some(Command::PromptBackspace),
        KeyCode::Char(c) => Some(Command::PromptInput(c)),
        _ => None,
    }
}

fn map_sidebar_key(section: Section, key: KeyEvent) -> Option<Command> {
    let target = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Enter | KeyCode::Right | KeyCode::Tab => return Some(Command::FocusContent),
        KeyCode::Up | KeyCode::Char('k') => section.previous(),
        KeyCode::Down | KeyCode::Char('j') => section.next(),
        KeyCode::Char(c @ '1'..='6') => Section::from_index(c as usize - '1' as usize)?,
        _ => return None,
    };
    (target != section).then_some(Command::Interact(Interaction::Navigate(target)))
}

fn map_content_key(state: &ShowcaseState, key: KeyEvent) -> Option<Command> {
    let focused = state.focused_element();
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => return Some(Command::FocusSidebar),
        KeyCode::Up if focused.is_none() => return Some(Command::Scroll(-1)),
        KeyCode::Down if focused.is_none() => return Some(Command::Scroll(1)),
        KeyCode::Up => return Some(Command::FocusPrevious),
        KeyCode::Down => return Some(Command::FocusNext),
        KeyCode::Char('q') if !state.is_editing_text() => return Some(Command::Quit),
        _ => {}
    }
    element_command(focused?, key)
}

/// Command for a key pressed on a focused element.
pub fn element_command(element: &Element, key: KeyEvent) -> Option<Command> {
    match element {
        Element::Control(control) => {
            if let (ControlState::FileUploader(_), KeyCode::Enter) = (&control.state, key.code) {
                return Some(Command::OpenUploadPrompt);
            }
            control_interaction(control, key).map(Command::Interact)
        }
        Element::Tabs {
            id, labels, active, ..
        } => {
            let next = step_index(*active, labels.len(), key.code)?;
            Some(Command::Interact(Interaction::Set(*id, WidgetValue::Index(next))))
        }
        Element::Expander { id, expanded, .. } => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Interact(Interaction::Set(
                *id,
                WidgetValue::Bool(!expanded),
            ))),
            _ => None,
        },
        Element::DataGrid { id, data, offset } => {
            let delta = match key.code {
                KeyCode::Right => 1,
                KeyCode::Left => -1,
                KeyCode::PageDown => GRID_PAGE,
                KeyCode::PageUp => -GRID_PAGE,
                _ => return None,
            };
            let last = data.row_count().saturating_sub(1) as i64;
            let next = (*offset as i64 + delta).clamp(0, last);
            Some(Command::Interact(Interaction::Set(*id, WidgetValue::Number(next))))
        }
        _ => None,
    }
}

/// Interaction produced by a key on a focused control.
pub fn control_interaction(control: &Control, key: KeyEvent) -> Option<Interaction> {
    let id = control.id;
    let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
    match &control.state {
        ControlState::Button => activate.then_some(Interaction::Click(id)),
        ControlState::Checkbox(checked) => {
            activate.then(|| Interaction::Set(id, WidgetValue::Bool(!checked)))
        }
        ControlState::Radio { options, selected } | ControlState::Selectbox { options, selected } => {
            let next = step_index(*selected, options.len(), key.code)?;
            Some(Interaction::Set(id, WidgetValue::Index(next)))
        }
        ControlState::Multiselect {
            options, cursor, ..
        } => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Interaction::ToggleOption(id, *cursor)),
            KeyCode::Left => Some(Interaction::MoveCursor(id, cursor.saturating_sub(1))),
            KeyCode::Right => Some(Interaction::MoveCursor(
                id,
                (*cursor + 1).min(options.len().saturating_sub(1)),
            )),
            _ => None,
        },
        ControlState::Slider { min, max, value } => {
            let next = match key.code {
                KeyCode::Left => value - 1,
                KeyCode::Right => value + 1,
                KeyCode::Home => *min,
                KeyCode::End => *max,
                _ => return None,
            };
            Some(Interaction::Set(id, WidgetValue::Number(next.clamp(*min, *max))))
        }
        ControlState::NumberInput { min, max, value } => {
            let next = match key.code {
                KeyCode::Left | KeyCode::Char('-') => value - 1,
                KeyCode::Right | KeyCode::Char('+') => value + 1,
                _ => return None,
            };
            Some(Interaction::Set(id, WidgetValue::Number(next.clamp(*min, *max))))
        }
        ControlState::TextInput(text) => {
            let mut next = text.clone();
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => next.push(c),
                KeyCode::Backspace => {
                    next.pop()?;
                }
                _ => return None,
            }
            Some(Interaction::Set(id, WidgetValue::Text(next)))
        }
        ControlState::DateInput(date) => {
            let next = match key.code {
                KeyCode::Left => date.pred_opt()?,
                KeyCode::Right => date.succ_opt()?,
                _ => return None,
            };
            Some(Interaction::Set(id, WidgetValue::Date(next)))
        }
        ControlState::FileUploader(file) => match key.code {
            KeyCode::Delete | KeyCode::Backspace if file.is_some() => {
                Some(Interaction::Set(id, WidgetValue::File(None)))
            }
            _ => None,
        },
    }
}

/// Left/Right through `len` options, wrapping at both ends.
fn step_index(current: usize, len: usize, code: KeyCode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match code {
        KeyCode::Right => Some((current + 1) % len),
        KeyCode::Left => Some((current + len - 1) % len),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WidgetId;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn control(id: WidgetId, state: ControlState) -> Control {
        Control {
            id,
            label: "label".to_string(),
            state,
        }
    }

    #[test]
    fn test_sidebar_navigation_keys() {
        assert_eq!(
            map_sidebar_key(Section::Widgets, key(KeyCode::Down)),
            Some(Command::Interact(Interaction::Navigate(Section::Media)))
        );
        assert_eq!(
            map_sidebar_key(Section::Widgets, key(KeyCode::Up)),
            Some(Command::Interact(Interaction::Navigate(Section::Utilities)))
        );
        assert_eq!(
            map_sidebar_key(Section::Widgets, key(KeyCode::Char('5'))),
            Some(Command::Interact(Interaction::Navigate(Section::DataFrames)))
        );
        // Re-selecting the active section is not an interaction.
        assert_eq!(map_sidebar_key(Section::Widgets, key(KeyCode::Char('1'))), None);
        assert_eq!(map_sidebar_key(Section::Widgets, key(KeyCode::Char('7'))), None);
        assert_eq!(
            map_sidebar_key(Section::Layout, key(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_button_and_checkbox_activate() {
        let button = control(WidgetId::ClickMe, ControlState::Button);
        assert_eq!(
            control_interaction(&button, key(KeyCode::Enter)),
            Some(Interaction::Click(WidgetId::ClickMe))
        );
        assert_eq!(control_interaction(&button, key(KeyCode::Left)), None);

        let checkbox = control(WidgetId::Agree, ControlState::Checkbox(true));
        assert_eq!(
            control_interaction(&checkbox, key(KeyCode::Char(' '))),
            Some(Interaction::Set(WidgetId::Agree, WidgetValue::Bool(false)))
        );
    }

    #[test]
    fn test_slider_stays_in_domain() {
        let slider = control(
            WidgetId::Value,
            ControlState::Slider {
                min: 0,
                max: 100,
                value: 100,
            },
        );
        assert_eq!(
            control_interaction(&slider, key(KeyCode::Right)),
            Some(Interaction::Set(WidgetId::Value, WidgetValue::Number(100)))
        );
        assert_eq!(
            control_interaction(&slider, key(KeyCode::Home)),
            Some(Interaction::Set(WidgetId::Value, WidgetValue::Number(0)))
        );
    }

    #[test]
    fn test_radio_wraps() {
        let radio = control(
            WidgetId::Choice,
            ControlState::Radio {
                options: vec!["a".into(), "b".into(), "c".into()],
                selected: 0,
            },
        );
        assert_eq!(
            control_interaction(&radio, key(KeyCode::Left)),
            Some(Interaction::Set(WidgetId::Choice, WidgetValue::Index(2)))
        );
    }

    #[test]
    fn test_text_input_editing() {
        let input = control(WidgetId::Name, ControlState::TextInput("Ad".to_string()));
        assert_eq!(
            control_interaction(&input, key(KeyCode::Char('a'))),
            Some(Interaction::Set(
                WidgetId::Name,
                WidgetValue::Text("Ada".to_string())
            ))
        );
        assert_eq!(
            control_interaction(&input, key(KeyCode::Backspace)),
            Some(Interaction::Set(
                WidgetId::Name,
                WidgetValue::Text("A".to_string())
            ))
        );

        let empty = control(WidgetId::Name, ControlState::TextInput(String::new()));
        assert_eq!(control_interaction(&empty, key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_multiselect_cursor_and_toggle() {
        let multi = control(
            WidgetId::Items,
            ControlState::Multiselect {
                options: vec!["1".into(), "2".into(), "3".into()],
                selected: vec![],
                cursor: 2,
            },
        );
        assert_eq!(
            control_interaction(&multi, key(KeyCode::Right)),
            Some(Interaction::MoveCursor(WidgetId::Items, 2))
        );
        assert_eq!(
            control_interaction(&multi, key(KeyCode::Enter)),
            Some(Interaction::ToggleOption(WidgetId::Items, 2))
        );
    }

    #[test]
    fn test_date_steps_by_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let picker = control(WidgetId::Date, ControlState::DateInput(date));
        assert_eq!(
            control_interaction(&picker, key(KeyCode::Left)),
            Some(Interaction::Set(
                WidgetId::Date,
                WidgetValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            ))
        );
    }

    #[test]
    fn test_uploader_opens_prompt() {
        let uploader = Element::Control(control(WidgetId::Upload, ControlState::FileUploader(None)));
        assert_eq!(
            element_command(&uploader, key(KeyCode::Enter)),
            Some(Command::OpenUploadPrompt)
        );
        assert_eq!(element_command(&uploader, key(KeyCode::Delete)), None);
    }

    #[test]
    fn test_expander_and_tabs() {
        let expander = Element::Expander {
            id: WidgetId::Expander,
            label: "Click to expand".to_string(),
            expanded: false,
            body: vec![],
        };
        assert_eq!(
            element_command(&expander, key(KeyCode::Enter)),
            Some(Command::Interact(Interaction::Set(
                WidgetId::Expander,
                WidgetValue::Bool(true)
            )))
        );

        let tabs = Element::Tabs {
            id: WidgetId::Tabs,
            labels: vec!["Tab 1".into(), "Tab 2".into(), "Tab 3".into()],
            active: 0,
            panes: vec![vec![], vec![], vec![]],
        };
        assert_eq!(
            element_command(&tabs, key(KeyCode::Right)),
            Some(Command::Interact(Interaction::Set(
                WidgetId::Tabs,
                WidgetValue::Index(1)
            )))
        );
    }
}
