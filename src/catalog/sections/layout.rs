use crate::catalog::view::Page;
use crate::catalog::widgets::WidgetId;

pub fn render(page: &mut Page<'_>) {
    page.subheader("Columns");
    page.columns(3, |i, column| column.write(format!("Column {}", i + 1)));

    page.subheader("Tabs");
    page.tabs(WidgetId::Tabs, &["Tab 1", "Tab 2", "Tab 3"], |i, tab| {
        tab.write(format!("Content for Tab {}", i + 1))
    });

    page.subheader("Expander");
    page.expander(WidgetId::Expander, "Click to expand", |body| {
        body.write("Expanded content!")
    });
}
