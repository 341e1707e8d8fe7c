//! Random sample tables for the chart and dataframe demos.

use rand::Rng;
use rand_distr::StandardNormal;

/// A numeric table of standard normal draws. Regenerated on every render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDataset {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl SampleDataset {
    /// Draw `rows` x `columns.len()` independent samples from N(0, 1).
    pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R, rows: usize, columns: &[&str]) -> Self {
        let rows = (0..rows)
            .map(|_| {
                (0..columns.len())
                    .map(|_| rng.sample::<f64, _>(StandardNormal))
                    .collect()
            })
            .collect();
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column, in row order.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(index).copied()).collect()
    }

    /// Smallest and largest value in the table, `(0.0, 0.0)` when empty.
    pub fn bounds(&self) -> (f64, f64) {
        let mut values = self.rows.iter().flatten().copied();
        let Some(first) = values.next() else {
            return (0.0, 0.0);
        };
        values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// The first `n` rows, same order, same columns.
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
