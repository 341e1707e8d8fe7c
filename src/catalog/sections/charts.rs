use crate::catalog::dataset::SampleDataset;
use crate::catalog::view::{ChartKind, Page};
use crate::consts::cli_consts::charts::{COLUMNS, ROWS};
use rand::Rng;
use std::sync::Arc;

/// One dataset per pass, drawn three ways.
pub fn render<R: Rng + ?Sized>(page: &mut Page<'_>, rng: &mut R) {
    let data = Arc::new(SampleDataset::standard_normal(rng, ROWS, &COLUMNS));

    page.subheader("Line Chart");
    page.chart(ChartKind::Line, &data);

    page.subheader("Bar Chart");
    page.chart(ChartKind::Bar, &data);

    page.subheader("Area Chart");
    page.chart(ChartKind::Area, &data);
}
