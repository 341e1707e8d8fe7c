use crate::catalog::dataset::SampleDataset;
use crate::catalog::view::Page;
use crate::catalog::widgets::WidgetId;
use crate::consts::cli_consts::dataframes::{COLUMNS, ROWS, TABLE_HEAD_ROWS};
use rand::Rng;
use std::sync::Arc;

/// The table shows the head of the same draw the grid shows.
pub fn render<R: Rng + ?Sized>(page: &mut Page<'_>, rng: &mut R) {
    let df = Arc::new(SampleDataset::standard_normal(rng, ROWS, &COLUMNS));

    page.subheader("Static DataFrame");
    page.dataframe(WidgetId::DataGrid, &df);

    page.subheader("Static Table");
    page.table(df.head(TABLE_HEAD_ROWS));
}
