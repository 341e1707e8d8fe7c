//! View tree produced by one render pass, and the [`Page`] builder that
//! section renderers use to emit it.
//!
//! `Page` is the primitive contract of the rendering host: interactive
//! primitives read the session store, fall back to their declared default and
//! hand the current value straight back to the caller.

use super::dataset::SampleDataset;
use super::session::SessionState;
use super::widgets::{Control, ControlState, UploadedFile, WidgetId, WidgetValue};
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ChartKind {
    #[strum(to_string = "line chart")]
    Line,
    #[strum(to_string = "bar chart")]
    Bar,
    #[strum(to_string = "area chart")]
    Area,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Title(String),
    Header(String),
    Subheader(String),
    Text(String),
    Info(String),
    Control(Control),
    Image {
        url: String,
        caption: Option<String>,
        fit_width: bool,
    },
    Audio {
        url: String,
    },
    Video {
        url: String,
    },
    Chart {
        kind: ChartKind,
        data: Arc<SampleDataset>,
    },
    Columns(Vec<Vec<Element>>),
    Tabs {
        id: WidgetId,
        labels: Vec<String>,
        active: usize,
        panes: Vec<Vec<Element>>,
    },
    Expander {
        id: WidgetId,
        label: String,
        expanded: bool,
        body: Vec<Element>,
    },
    DataGrid {
        id: WidgetId,
        data: Arc<SampleDataset>,
        offset: usize,
    },
    Table(SampleDataset),
    Progress(u8),
    Balloons,
    Code {
        language: String,
        source: String,
    },
    Json(serde_json::Value),
}

impl Element {
    /// Identity of the element when the user can interact with it.
    pub fn focus_id(&self) -> Option<WidgetId> {
        match self {
            Element::Control(control) => Some(control.id),
            Element::Tabs { id, .. } | Element::Expander { id, .. } | Element::DataGrid { id, .. } => {
                Some(*id)
            }
            _ => None,
        }
    }

    fn push_text(&self, out: &mut Vec<String>) {
        match self {
            Element::Title(text) => out.push(format!("# {}", text)),
            Element::Header(text) => out.push(format!("## {}", text)),
            Element::Subheader(text) => out.push(format!("### {}", text)),
            Element::Text(text) => out.push(text.clone()),
            Element::Info(text) => out.push(format!("ℹ {}", text)),
            Element::Control(control) => out.push(describe_control(control)),
            Element::Image { url, caption, .. } => {
                out.push(format!("[image] {}", url));
                if let Some(caption) = caption {
                    out.push(caption.clone());
                }
            }
            Element::Audio { url } => out.push(format!("[audio] {}", url)),
            Element::Video { url } => out.push(format!("[video] {}", url)),
            Element::Chart { kind, data } => out.push(format!(
                "[{}] {} rows x {}",
                kind,
                data.row_count(),
                data.columns().join(", ")
            )),
            Element::Columns(columns) => {
                for column in columns {
                    column.iter().for_each(|child| child.push_text(out));
                }
            }
            Element::Tabs {
                labels,
                active,
                panes,
                ..
            } => {
                let bar: Vec<String> = labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        if i == *active {
                            format!("[{}]", label)
                        } else {
                            label.clone()
                        }
                    })
                    .collect();
                out.push(bar.join(" | "));
                if let Some(pane) = panes.get(*active) {
                    pane.iter().for_each(|child| child.push_text(out));
                }
            }
            Element::Expander {
                label,
                expanded,
                body,
                ..
            } => {
                let marker = if *expanded { "▾" } else { "▸" };
                out.push(format!("{} {}", marker, label));
                if *expanded {
                    body.iter().for_each(|child| child.push_text(out));
                }
            }
            Element::DataGrid { data, .. } => push_table(data, out),
            Element::Table(data) => push_table(data, out),
            Element::Progress(percent) => out.push(format!("Progress: {}%", percent)),
            Element::Balloons => out.push("🎈 Balloons!".to_string()),
            Element::Code { language, source } => {
                out.push(format!("```{}", language));
                out.extend(source.lines().map(str::to_string));
                out.push("```".to_string());
            }
            Element::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                out.extend(pretty.lines().map(str::to_string));
            }
        }
    }
}

fn describe_control(control: &Control) -> String {
    let label = &control.label;
    match &control.state {
        ControlState::Button => format!("[ {} ]", label),
        ControlState::Checkbox(checked) => {
            format!("[{}] {}", if *checked { "x" } else { " " }, label)
        }
        ControlState::Radio { options, selected } | ControlState::Selectbox { options, selected } => {
            format!("{} {}", label, options.get(*selected).map_or("", String::as_str))
        }
        ControlState::Multiselect {
            options, selected, ..
        } => {
            let chosen: Vec<&str> = selected
                .iter()
                .filter_map(|&i| options.get(i).map(String::as_str))
                .collect();
            format!("{} {}", label, chosen.join(", "))
        }
        ControlState::Slider { value, .. } | ControlState::NumberInput { value, .. } => {
            format!("{} {}", label, value)
        }
        ControlState::TextInput(text) => format!("{} {}", label, text),
        ControlState::DateInput(date) => format!("{} {}", label, date.format("%Y-%m-%d")),
        ControlState::FileUploader(file) => match file {
            Some(file) => format!("{} {} ({} bytes)", label, file.name, file.size_bytes),
            None => format!("{} (no file)", label),
        },
    }
}

/// Format one table cell the way the grid and table views show numbers.
pub fn format_cell(value: f64) -> String {
    format!("{:.6}", value)
}

fn push_table(data: &SampleDataset, out: &mut Vec<String>) {
    let mut header = vec![String::new()];
    header.extend(data.columns().iter().cloned());
    out.push(header.join("\t"));
    for (index, row) in data.rows().iter().enumerate() {
        let mut cells = vec![index.to_string()];
        cells.extend(row.iter().map(|&v| format_cell(v)));
        out.push(cells.join("\t"));
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    elements: Vec<Element>,
}

impl View {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Interactive top-level elements in page order, with their positions.
    pub fn focusables(&self) -> Vec<(usize, WidgetId)> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| element.focus_id().map(|id| (index, id)))
            .collect()
    }

    /// Text a user can currently see, top to bottom. Inactive tab panes and
    /// collapsed expander bodies are left out.
    pub fn visible_text(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.elements.iter().for_each(|e| e.push_text(&mut out));
        out
    }

    pub fn has_progress(&self) -> bool {
        self.elements.iter().any(|e| matches!(e, Element::Progress(_)))
    }

    pub fn has_balloons(&self) -> bool {
        self.elements.iter().any(|e| matches!(e, Element::Balloons))
    }

    /// Update the progress indicator in place.
    pub fn set_progress(&mut self, percent: u8) {
        for element in &mut self.elements {
            if let Element::Progress(current) = element {
                *current = percent;
            }
        }
    }
}

#[cfg(test)]
impl View {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.visible_text().iter().any(|line| line.contains(needle))
    }

    pub fn charts(&self) -> Vec<(ChartKind, &Arc<SampleDataset>)> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Chart { kind, data } => Some((*kind, data)),
                _ => None,
            })
            .collect()
    }
}

/// Builder for one render pass.
pub struct Page<'s> {
    session: &'s SessionState,
    today: NaiveDate,
    elements: Vec<Element>,
}

impl<'s> Page<'s> {
    pub fn new(session: &'s SessionState, today: NaiveDate) -> Self {
        Self {
            session,
            today,
            elements: Vec::new(),
        }
    }

    pub fn finish(self) -> View {
        View {
            elements: self.elements,
        }
    }

    fn nested<F: FnOnce(&mut Page<'s>)>(&self, build: F) -> Vec<Element> {
        let mut child = Page::new(self.session, self.today);
        build(&mut child);
        child.elements
    }

    fn push_control(&mut self, id: WidgetId, label: &str, state: ControlState) {
        self.elements.push(Element::Control(Control {
            id,
            label: label.to_string(),
            state,
        }));
    }

    fn stored_index(&self, id: WidgetId, len: usize) -> usize {
        match self.session.value(id) {
            Some(WidgetValue::Index(i)) if *i < len => *i,
            _ => 0,
        }
    }

    fn stored_number(&self, id: WidgetId, min: i64, max: i64, default: i64) -> i64 {
        match self.session.value(id) {
            Some(WidgetValue::Number(n)) => (*n).clamp(min, max),
            _ => default.clamp(min, max),
        }
    }

    pub fn title(&mut self, text: &str) {
        self.elements.push(Element::Title(text.to_string()));
    }

    pub fn header(&mut self, text: &str) {
        self.elements.push(Element::Header(text.to_string()));
    }

    pub fn subheader(&mut self, text: &str) {
        self.elements.push(Element::Subheader(text.to_string()));
    }

    pub fn write<S: Into<String>>(&mut self, text: S) {
        self.elements.push(Element::Text(text.into()));
    }

    pub fn info(&mut self, text: &str) {
        self.elements.push(Element::Info(text.to_string()));
    }

    /// True only in the pass triggered by pressing this button.
    pub fn button(&mut self, id: WidgetId, label: &str) -> bool {
        self.push_control(id, label, ControlState::Button);
        self.session.was_clicked(id)
    }

    pub fn checkbox(&mut self, id: WidgetId, label: &str) -> bool {
        let checked = matches!(self.session.value(id), Some(WidgetValue::Bool(true)));
        self.push_control(id, label, ControlState::Checkbox(checked));
        checked
    }

    pub fn radio(&mut self, id: WidgetId, label: &str, options: &[&str]) -> String {
        let selected = self.stored_index(id, options.len());
        self.push_control(
            id,
            label,
            ControlState::Radio {
                options: to_owned(options),
                selected,
            },
        );
        options.get(selected).map(|s| s.to_string()).unwrap_or_default()
    }

    pub fn selectbox(&mut self, id: WidgetId, label: &str, options: &[&str]) -> String {
        let selected = self.stored_index(id, options.len());
        self.push_control(
            id,
            label,
            ControlState::Selectbox {
                options: to_owned(options),
                selected,
            },
        );
        options.get(selected).map(|s| s.to_string()).unwrap_or_default()
    }

    pub fn multiselect(&mut self, id: WidgetId, label: &str, options: &[&str]) -> Vec<String> {
        let selected: Vec<usize> = match self.session.value(id) {
            Some(WidgetValue::Indices(indices)) => indices
                .iter()
                .copied()
                .filter(|&i| i < options.len())
                .collect(),
            _ => Vec::new(),
        };
        let cursor = self.session.cursor(id).min(options.len().saturating_sub(1));
        let values = selected.iter().map(|&i| options[i].to_string()).collect();
        self.push_control(
            id,
            label,
            ControlState::Multiselect {
                options: to_owned(options),
                selected,
                cursor,
            },
        );
        values
    }

    pub fn slider(&mut self, id: WidgetId, label: &str, min: i64, max: i64, default: i64) -> i64 {
        let value = self.stored_number(id, min, max, default);
        self.push_control(id, label, ControlState::Slider { min, max, value });
        value
    }

    pub fn text_input(&mut self, id: WidgetId, label: &str) -> String {
        let text = match self.session.value(id) {
            Some(WidgetValue::Text(text)) => text.clone(),
            _ => String::new(),
        };
        self.push_control(id, label, ControlState::TextInput(text.clone()));
        text
    }

    pub fn number_input(
        &mut self,
        id: WidgetId,
        label: &str,
        min: i64,
        max: i64,
        default: i64,
    ) -> i64 {
        let value = self.stored_number(id, min, max, default);
        self.push_control(id, label, ControlState::NumberInput { min, max, value });
        value
    }

    /// Defaults to the render date until the user picks another day.
    pub fn date_input(&mut self, id: WidgetId, label: &str) -> NaiveDate {
        let date = match self.session.value(id) {
            Some(WidgetValue::Date(date)) => *date,
            _ => self.today,
        };
        self.push_control(id, label, ControlState::DateInput(date));
        date
    }

    pub fn file_uploader(&mut self, id: WidgetId, label: &str) -> Option<UploadedFile> {
        let file = match self.session.value(id) {
            Some(WidgetValue::File(file)) => file.clone(),
            _ => None,
        };
        self.push_control(id, label, ControlState::FileUploader(file.clone()));
        file
    }

    pub fn image(&mut self, url: &str, caption: Option<&str>, fit_width: bool) {
        self.elements.push(Element::Image {
            url: url.to_string(),
            caption: caption.map(str::to_string),
            fit_width,
        });
    }

    pub fn audio(&mut self, url: &str) {
        self.elements.push(Element::Audio {
            url: url.to_string(),
        });
    }

    pub fn video(&mut self, url: &str) {
        self.elements.push(Element::Video {
            url: url.to_string(),
        });
    }

    pub fn chart(&mut self, kind: ChartKind, data: &Arc<SampleDataset>) {
        self.elements.push(Element::Chart {
            kind,
            data: Arc::clone(data),
        });
    }

    /// Equal-width columns; `build` fills column `i`.
    pub fn columns<F: FnMut(usize, &mut Page<'s>)>(&mut self, count: usize, mut build: F) {
        let columns = (0..count)
            .map(|i| self.nested(|column| build(i, column)))
            .collect();
        self.elements.push(Element::Columns(columns));
    }

    /// Tabbed panes; only the selected one is shown. Defaults to the first tab.
    pub fn tabs<F: FnMut(usize, &mut Page<'s>)>(
        &mut self,
        id: WidgetId,
        labels: &[&str],
        mut build: F,
    ) {
        let active = self.stored_index(id, labels.len());
        let panes = (0..labels.len())
            .map(|i| self.nested(|pane| build(i, pane)))
            .collect();
        self.elements.push(Element::Tabs {
            id,
            labels: to_owned(labels),
            active,
            panes,
        });
    }

    /// Collapsible region, collapsed until the user opens it.
    pub fn expander<F: FnOnce(&mut Page<'s>)>(&mut self, id: WidgetId, label: &str, build: F) {
        let expanded = matches!(self.session.value(id), Some(WidgetValue::Bool(true)));
        let body = self.nested(build);
        self.elements.push(Element::Expander {
            id,
            label: label.to_string(),
            expanded,
            body,
        });
    }

    /// Scrollable grid over the whole dataset.
    pub fn dataframe(&mut self, id: WidgetId, data: &Arc<SampleDataset>) {
        let last_row = data.row_count().saturating_sub(1) as i64;
        let offset = self.stored_number(id, 0, last_row, 0) as usize;
        self.elements.push(Element::DataGrid {
            id,
            data: Arc::clone(data),
            offset,
        });
    }

    /// Static table of exactly the rows given.
    pub fn table(&mut self, data: SampleDataset) {
        self.elements.push(Element::Table(data));
    }

    pub fn progress(&mut self, percent: u8) {
        self.elements.push(Element::Progress(percent.min(100)));
    }

    pub fn balloons(&mut self) {
        self.elements.push(Element::Balloons);
    }

    pub fn code(&mut self, source: &str, language: &str) {
        self.elements.push(Element::Code {
            language: language.to_string(),
            source: source.to_string(),
        });
    }

    pub fn json(&mut self, value: serde_json::Value) {
        self.elements.push(Element::Json(value));
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
