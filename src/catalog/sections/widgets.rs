//! Input widgets, each followed by an echo of its current value.

use crate::catalog::view::Page;
use crate::catalog::widgets::{WidgetId, format_list};

pub fn render(page: &mut Page<'_>) {
    if page.button(WidgetId::ClickMe, "Click Me") {
        page.write("🎉 Button clicked!");
    }

    if page.checkbox(WidgetId::Agree, "I agree") {
        page.write("✅ Thanks for agreeing!");
    }

    let choice = page.radio(
        WidgetId::Choice,
        "Choose an option:",
        &["Option 1", "Option 2", "Option 3"],
    );
    page.write(format!("You selected: {}", choice));

    let option = page.selectbox(
        WidgetId::Item,
        "Select an item:",
        &["Item A", "Item B", "Item C"],
    );
    page.write(format!("You selected: {}", option));

    let items = page.multiselect(
        WidgetId::Items,
        "Select multiple items:",
        &["Item 1", "Item 2", "Item 3"],
    );
    page.write(format!("Selected items: {}", format_list(&items[..])));

    let value = page.slider(WidgetId::Value, "Select a value:", 0, 100, 50);
    page.write(format!("Slider value: {}", value));

    let name = page.text_input(WidgetId::Name, "Enter your name:");
    page.write(format!("Hello, {}!", name));

    let number = page.number_input(WidgetId::Number, "Enter a number:", 0, 100, 50);
    page.write(format!("Number entered: {}", number));

    let date = page.date_input(WidgetId::Date, "Pick a date:");
    page.write(format!("Selected date: {}", date.format("%Y-%m-%d")));

    if let Some(file) = page.file_uploader(WidgetId::Upload, "Upload a file:") {
        page.write(format!("Uploaded file name: {}", file.name));
    }
}
