//! Section dispatcher and widget catalog.
//!
//! A render pass is a pure function of the session state: it reads the active
//! section and the widget store and returns the view tree for that section
//! only. The host runs a new pass after every interaction.

pub mod dataset;
pub mod progress;
pub mod section;
pub mod sections;
pub mod session;
pub mod view;
pub mod widgets;

pub use dataset::SampleDataset;
pub use progress::ProgressTask;
pub use section::Section;
pub use session::{Interaction, SessionState};
pub use view::{ChartKind, Element, View, format_cell};
pub use widgets::{Control, ControlState, UploadedFile, WidgetId, WidgetValue};

use crate::consts::cli_consts::{NAV_INFO, PAGE_TITLE};
use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use view::Page;

/// Run one render pass for the active section.
///
/// `today` is the default of the date picker; `rng` feeds the sample datasets,
/// which are drawn fresh on every pass.
pub fn render<R: Rng + ?Sized>(session: &SessionState, today: NaiveDate, rng: &mut R) -> View {
    let section = session.section();
    debug!("Rendering section {}", section);

    let mut page = Page::new(session, today);
    page.title(PAGE_TITLE);
    page.header(section.heading());
    match section {
        Section::Widgets => sections::widgets::render(&mut page),
        Section::Media => sections::media::render(&mut page),
        Section::Charts => sections::charts::render(&mut page, rng),
        Section::Layout => sections::layout::render(&mut page),
        Section::DataFrames => sections::dataframes::render(&mut page, rng),
        Section::Utilities => sections::utilities::render(&mut page),
    }
    page.finish()
}

/// The static part of the navigation sidebar, shown under the section radio.
pub fn render_sidebar(session: &SessionState, today: NaiveDate) -> View {
    let mut page = Page::new(session, today);
    page.info(NAV_INFO);
    page.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn pass(session: &mut SessionState) -> View {
        let mut rng = StdRng::seed_from_u64(42);
        let view = render(session, today(), &mut rng);
        session.end_pass();
        view
    }

    fn at(section: Section) -> SessionState {
        let mut session = SessionState::new();
        session.apply(Interaction::Navigate(section));
        session
    }

    /// A line that only the given section ever renders.
    fn marker(section: Section) -> &'static str {
        match section {
            Section::Widgets => "Slider value:",
            Section::Media => "[audio]",
            Section::Charts => "### Area Chart",
            Section::Layout => "Column 2",
            Section::DataFrames => "### Static Table",
            Section::Utilities => "### Balloons",
        }
    }

    #[test]
    fn test_each_section_renders_only_its_own_content() {
        for section in Section::ALL {
            let view = pass(&mut at(section));
            assert!(view.contains_text(section.heading()));
            for other in Section::ALL {
                assert_eq!(
                    view.contains_text(marker(other)),
                    other == section,
                    "{} view vs {} marker",
                    section,
                    other
                );
            }
        }
    }

    #[test]
    fn test_sidebar_carries_the_info_box() {
        for section in Section::ALL {
            let sidebar = render_sidebar(&at(section), today());
            assert_eq!(
                sidebar.visible_text(),
                vec!["ℹ Explore different Streamlit API features!".to_string()]
            );
            assert!(sidebar.focusables().is_empty());
        }
    }

    #[test]
    fn test_text_input_echo() {
        let mut session = at(Section::Widgets);
        session.apply(Interaction::Set(
            WidgetId::Name,
            WidgetValue::Text("Ada".to_string()),
        ));
        assert!(pass(&mut session).contains_text("Hello, Ada!"));
    }

    #[test]
    // Re-rendering with no new input reproduces the same acknowledgments.
    fn test_echoes_are_idempotent() {
        let mut session = at(Section::Widgets);
        session.apply(Interaction::Set(WidgetId::Choice, WidgetValue::Index(2)));
        session.apply(Interaction::ToggleOption(WidgetId::Items, 1));
        session.apply(Interaction::Set(WidgetId::Value, WidgetValue::Number(73)));

        let first = pass(&mut session);
        let second = pass(&mut session);
        assert_eq!(first.visible_text(), second.visible_text());
        assert!(first.contains_text("You selected: Option 3"));
        assert!(first.contains_text("Selected items: ['Item 2']"));
        assert!(first.contains_text("Slider value: 73"));
    }

    #[test]
    fn test_widget_defaults() {
        let view = pass(&mut at(Section::Widgets));
        assert!(view.contains_text("You selected: Option 1"));
        assert!(view.contains_text("You selected: Item A"));
        assert!(view.contains_text("Selected items: []"));
        assert!(view.contains_text("Slider value: 50"));
        assert!(view.contains_text("Hello, !"));
        assert!(view.contains_text("Number entered: 50"));
        assert!(view.contains_text("Selected date: 2024-03-14"));
        assert!(!view.contains_text("Button clicked"));
        assert!(!view.contains_text("Thanks for agreeing"));
        assert!(!view.contains_text("Uploaded file name"));
    }

    #[test]
    fn test_button_echo_only_on_clicked_pass() {
        let mut session = at(Section::Widgets);
        session.apply(Interaction::Click(WidgetId::ClickMe));
        assert!(pass(&mut session).contains_text("🎉 Button clicked!"));
        assert!(!pass(&mut session).contains_text("🎉 Button clicked!"));
    }

    #[test]
    fn test_checkbox_and_upload_echoes() {
        let mut session = at(Section::Widgets);
        session.apply(Interaction::Set(WidgetId::Agree, WidgetValue::Bool(true)));
        session.apply(Interaction::Set(
            WidgetId::Upload,
            WidgetValue::File(Some(UploadedFile {
                name: "notes.txt".to_string(),
                size_bytes: 12,
            })),
        ));
        let view = pass(&mut session);
        assert!(view.contains_text("✅ Thanks for agreeing!"));
        assert!(view.contains_text("Uploaded file name: notes.txt"));

        session.apply(Interaction::Set(WidgetId::Agree, WidgetValue::Bool(false)));
        assert!(!pass(&mut session).contains_text("Thanks for agreeing"));
    }

    #[test]
    fn test_charts_share_one_dataset() {
        let view = pass(&mut at(Section::Charts));
        let charts = view.charts();
        assert_eq!(charts.len(), 3);
        let (_, first) = charts[0];
        assert_eq!(first.row_count(), 50);
        assert_eq!(first.columns(), ["A", "B", "C"]);
        assert!(charts.iter().all(|(_, data)| Arc::ptr_eq(*data, first)));
    }

    #[test]
    // Unrelated passes draw new data; nothing is cached between passes.
    fn test_chart_data_is_redrawn_each_pass() {
        let session = at(Section::Charts);
        let mut rng = StdRng::seed_from_u64(1);
        let first = render(&session, today(), &mut rng);
        let second = render(&session, today(), &mut rng);
        assert_ne!(first.charts()[0].1, second.charts()[0].1);
    }

    #[test]
    fn test_table_is_head_of_grid_dataset() {
        let view = pass(&mut at(Section::DataFrames));
        let grid = view
            .elements()
            .iter()
            .find_map(|e| match e {
                Element::DataGrid { data, .. } => Some(Arc::clone(data)),
                _ => None,
            })
            .unwrap();
        let table = view
            .elements()
            .iter()
            .find_map(|e| match e {
                Element::Table(data) => Some(data.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(grid.row_count(), 10);
        assert_eq!(grid.columns().len(), 5);
        assert_eq!(table.rows(), &grid.rows()[..5]);
    }

    #[test]
    fn test_layout_defaults() {
        let view = pass(&mut at(Section::Layout));
        let columns = view
            .elements()
            .iter()
            .find_map(|e| match e {
                Element::Columns(columns) => Some(columns.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(columns.len(), 3);
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(column, &vec![Element::Text(format!("Column {}", i + 1))]);
        }
        assert!(view.contains_text("[Tab 1] | Tab 2 | Tab 3"));
        assert!(view.contains_text("Content for Tab 1"));
        assert!(!view.contains_text("Content for Tab 2"));
        assert!(view.contains_text("▸ Click to expand"));
        assert!(!view.contains_text("Expanded content!"));
    }

    #[test]
    fn test_switching_tabs_shows_one_pane() {
        let mut session = at(Section::Layout);
        session.apply(Interaction::Set(WidgetId::Tabs, WidgetValue::Index(2)));
        let view = pass(&mut session);
        assert!(view.contains_text("Content for Tab 3"));
        assert!(!view.contains_text("Content for Tab 1"));
    }

    #[test]
    fn test_celebrate_triggers_once_per_click() {
        let mut session = at(Section::Utilities);
        assert!(!pass(&mut session).has_balloons());

        session.apply(Interaction::Click(WidgetId::Celebrate));
        assert!(pass(&mut session).has_balloons());
        assert!(!pass(&mut session).has_balloons());

        session.apply(Interaction::Click(WidgetId::Celebrate));
        assert!(pass(&mut session).has_balloons());

        session.apply(Interaction::Navigate(Section::Media));
        pass(&mut session);
        session.apply(Interaction::Navigate(Section::Utilities));
        assert!(!pass(&mut session).has_balloons());
    }

    #[test]
    fn test_utilities_static_content() {
        let view = pass(&mut at(Section::Utilities));
        assert!(view.has_progress());
        assert!(view.contains_text("Progress: 0%"));
        assert!(view.contains_text("```python"));
        assert!(view.contains_text("st.write('Hello, world!')"));
        let text = view.visible_text();
        let key = text.iter().position(|l| l.contains("\"key\": \"value\"")).unwrap();
        let foo = text.iter().position(|l| l.contains("\"foo\": \"bar\"")).unwrap();
        assert!(key < foo, "JSON keys keep their literal order");
    }

    #[test]
    fn test_media_embeds() {
        let view = pass(&mut at(Section::Media));
        assert!(view.contains_text("[image] https://via.placeholder.com/400"));
        assert!(view.contains_text("Sample Image"));
        assert!(view.contains_text("SoundHelix-Song-1.mp3"));
        assert!(view.contains_text("[video] https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(view.focusables().is_empty());
    }
}
