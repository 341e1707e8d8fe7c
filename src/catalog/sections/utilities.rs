use crate::catalog::view::Page;
use crate::catalog::widgets::WidgetId;
use crate::consts::cli_consts::{CODE_LANGUAGE, CODE_SNIPPET};
use serde_json::json;

/// The progress bar starts at zero; the host advances it after the pass.
pub fn render(page: &mut Page<'_>) {
    page.subheader("Progress Bar");
    page.progress(0);

    page.subheader("Balloons");
    if page.button(WidgetId::Celebrate, "Celebrate!") {
        page.balloons();
    }

    page.subheader("Code");
    page.code(CODE_SNIPPET, CODE_LANGUAGE);

    page.subheader("JSON");
    page.json(json!({"key": "value", "foo": "bar"}));
}
