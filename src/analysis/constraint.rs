//! # Statistics per constraint type
//!
//! Rows are grouped by the part of their name before the index. Per type, the range of the
//! coefficients within single rows and the range of the right-hand sides are summarized.
use indexmap::IndexMap;

use crate::analysis::extrema::{MinMax, Spread};
use crate::analysis::split_type_and_index;
use crate::data::linear_program::model::LPModel;

/// Statistics on all rows of one type.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintStat<'a> {
    /// The row type, i.e. the name without its index.
    pub name: &'a str,
    /// Number of rows of this type.
    pub instance_count: usize,
    /// Stored coefficients per row, rounded down.
    pub average_nonzeros: usize,
    /// Coefficient magnitudes, located by variable name.
    pub coefficients: Spread<&'a str>,
    /// Right-hand side magnitudes, located by row index.
    pub rhs: Spread<&'a str>,
}

#[derive(Debug)]
struct Tally<'a> {
    rows: usize,
    coefficient_count: usize,
    coefficients: MinMax<&'a str>,
    rhs: MinMax<&'a str>,
}

impl<'a> Tally<'a> {
    fn new() -> Self {
        Self {
            rows: 0,
            coefficient_count: 0,
            coefficients: MinMax::new(),
            rhs: MinMax::new(),
        }
    }

    fn finish(&self, name: &'a str) -> ConstraintStat<'a> {
        debug_assert!(self.rows > 0);

        ConstraintStat {
            name,
            instance_count: self.rows,
            average_nonzeros: self.coefficient_count / self.rows,
            coefficients: self.coefficients.finish(),
            rhs: self.rhs.finish(),
        }
    }
}

/// Collect statistics for each row type, in the order in which the types are first seen.
///
/// Every row is considered, including the objective function. Its right-hand side is absent, so
/// it only contributes coefficients. Zero coefficients are skipped, but a zero right-hand side,
/// including the default of a row that never appears in the RHS section, is a valid minimum.
pub fn constraint_stats(model: &LPModel) -> Vec<ConstraintStat<'_>> {
    let mut tallies = IndexMap::<&str, Tally>::new();

    for row in model.rows() {
        let ((min_variable, min_value), (max_variable, max_value)) = row.coefficient_range();
        let (row_type, index) = split_type_and_index(&row.name);

        let tally = tallies.entry(row_type).or_insert_with(Tally::new);
        // Rows without nonzero coefficients report sentinels without a variable
        if let Some(variable) = min_variable {
            tally.coefficients.observe_min(min_value, variable);
        }
        if let Some(variable) = max_variable {
            tally.coefficients.observe_max(max_value, variable);
        }
        if let Some(rhs) = row.rhs_value {
            tally.rhs.observe(rhs.abs(), index);
        }
        tally.rows += 1;
        tally.coefficient_count += row.coefficients.len();
    }

    tallies.iter()
        .map(|(&name, tally)| tally.finish(name))
        .collect()
}
