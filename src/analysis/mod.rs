//! # Numerical conditioning of linear programs
//!
//! Badly scaled models, with coefficients and bounds spanning many orders of magnitude, cause
//! numerical trouble in solvers. This module groups the variables and rows of a model by type and
//! reports, per type, how far apart the magnitudes are.
//!
//! The model is only borrowed; the statistics refer to names owned by the model.
use std::time::Instant;

use tracing::debug;

use crate::data::linear_program::model::LPModel;

pub mod constraint;
pub mod density;
pub mod extrema;
pub mod variable;

pub use constraint::{ConstraintStat, constraint_stats};
pub use density::{ColumnDensity, densest_columns};
pub use extrema::{Extremum, GeometricMean, Spread};
pub use variable::{VariableStat, variable_stats};

/// Settings for an analysis run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AnalysisConfig {
    /// Whether the coefficients of the objective function count towards the variable statistics.
    pub include_objective_coefficients: bool,
    /// How many of the densest columns to report. Zero disables that report.
    pub densest_columns: usize,
}

/// Everything computed for a model.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis<'a> {
    /// One entry per variable type, in the order in which the types were first seen.
    pub variables: Vec<VariableStat<'a>>,
    /// One entry per row type, in the order in which the types were first seen.
    pub constraints: Vec<ConstraintStat<'a>>,
    /// Empty unless requested in the configuration.
    pub densest_columns: Vec<ColumnDensity<'a>>,
}

/// Compute the variable and constraint statistics of a model.
///
/// The model should be complete, i.e. produced by a successful read. Empty groups are reported
/// with absent values, never as errors.
pub fn analyze<'a>(model: &'a LPModel, config: &AnalysisConfig) -> Analysis<'a> {
    let start = Instant::now();
    let variables = variable_stats(model, config);
    debug!(
        component = "analysis",
        operation = "variables",
        types = variables.len() as u64,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Analyzed variable coefficients and bounds",
    );

    let start = Instant::now();
    let constraints = constraint_stats(model);
    debug!(
        component = "analysis",
        operation = "constraints",
        types = constraints.len() as u64,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Analyzed constraints",
    );

    let densest_columns = match config.densest_columns {
        0 => Vec::with_capacity(0),
        n => densest_columns(model, n),
    };

    Analysis { variables, constraints, densest_columns }
}

/// Split a name like `flow(1,2)` into its type `flow` and index `1,2`.
///
/// The type is everything before the first `(`, the index runs up to the first `)` after it, or
/// to the end of the name if there is none. A name without parentheses has an empty index.
pub fn split_type_and_index(name: &str) -> (&str, &str) {
    match name.split_once('(') {
        Some((name_type, rest)) => {
            let index = rest.split_once(')').map_or(rest, |(index, _)| index);
            (name_type, index)
        },
        None => (name, ""),
    }
}
