//! # Dense columns
//!
//! Variables appearing in many rows make the constraint matrix dense.
use indexmap::IndexMap;
use itertools::Itertools;

use crate::data::linear_program::model::LPModel;

/// A variable together with the number of rows in which it has a coefficient.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColumnDensity<'a> {
    #[allow(missing_docs)]
    pub variable: &'a str,
    #[allow(missing_docs)]
    pub row_count: usize,
}

/// The `n` variables that appear in the most rows, the objective included.
///
/// Sorted by decreasing row count. Variables with equal counts keep the order in which they
/// were first seen.
pub fn densest_columns(model: &LPModel, n: usize) -> Vec<ColumnDensity<'_>> {
    let mut counts = IndexMap::<&str, usize>::new();
    for row in model.rows() {
        for variable in row.coefficients.keys() {
            *counts.entry(variable.as_str()).or_default() += 1;
        }
    }

    counts.into_iter()
        .map(|(variable, row_count)| ColumnDensity { variable, row_count })
        .sorted_by(|a, b| b.row_count.cmp(&a.row_count))
        .take(n)
        .collect()
}
