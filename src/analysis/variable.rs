//! # Statistics per variable type
//!
//! Variables are grouped by the part of their name before the index, e.g. `flow(1)` and `flow(2)`
//! are both of type `flow`. Per type, the coefficients in the constraint matrix and the bounds
//! are summarized.
use indexmap::{IndexMap, IndexSet};

use crate::analysis::AnalysisConfig;
use crate::analysis::extrema::{GeometricMean, LogSum, MinMax, Spread};
use crate::analysis::split_type_and_index;
use crate::data::linear_program::model::LPModel;

/// Statistics on all variables of one type.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableStat<'a> {
    /// The variable type, i.e. the name without its index.
    pub name: &'a str,
    /// Number of distinct indices with at least one nonzero coefficient.
    pub instance_count: usize,
    /// Nonzero coefficients per instance, rounded down. Absent for types only seen in bounds.
    pub average_nonzeros: Option<usize>,
    /// Coefficient magnitudes, located by the name of the row they appear in.
    pub coefficients: Spread<&'a str>,
    /// Nonzero bound magnitudes, lower and upper together, located by variable index.
    pub bounds: Spread<&'a str>,
    #[allow(missing_docs)]
    pub lower_bounds: GeometricMean,
    #[allow(missing_docs)]
    pub upper_bounds: GeometricMean,
}

/// Accumulates a `VariableStat` while the model is walked.
#[derive(Debug)]
struct Tally<'a> {
    indices: IndexSet<&'a str>,
    nonzeros: usize,
    coefficients: MinMax<&'a str>,
    bounds: MinMax<&'a str>,
    lower_bounds: LogSum,
    upper_bounds: LogSum,
}

impl<'a> Tally<'a> {
    fn new() -> Self {
        Self {
            indices: IndexSet::new(),
            nonzeros: 0,
            coefficients: MinMax::new(),
            bounds: MinMax::new(),
            lower_bounds: LogSum::default(),
            upper_bounds: LogSum::default(),
        }
    }

    fn add_coefficient(&mut self, value: f64, row_name: &'a str, index: &'a str) {
        self.coefficients.observe(value.abs(), row_name);
        self.indices.insert(index);
        self.nonzeros += 1;
    }

    /// Zero and missing bounds are skipped.
    fn add_bound(&mut self, value: Option<f64>, index: &'a str, is_lower: bool) {
        let magnitude = match value {
            Some(value) if value != 0.0 => value.abs(),
            _ => return,
        };

        self.bounds.observe(magnitude, index);
        if is_lower {
            self.lower_bounds.add(magnitude);
        } else {
            self.upper_bounds.add(magnitude);
        }
    }

    fn finish(&self, name: &'a str) -> VariableStat<'a> {
        let instance_count = self.indices.len();

        VariableStat {
            name,
            instance_count,
            average_nonzeros: (instance_count > 0).then(|| self.nonzeros / instance_count),
            coefficients: self.coefficients.finish(),
            bounds: self.bounds.finish(),
            lower_bounds: self.lower_bounds.finish(),
            upper_bounds: self.upper_bounds.finish(),
        }
    }
}

/// Collect statistics for each variable type, in the order in which the types are first seen.
///
/// The rows are walked first, then the bounds. Zero coefficients are skipped, as are the
/// coefficients of the objective function unless the configuration asks for them.
pub fn variable_stats<'a>(model: &'a LPModel, config: &AnalysisConfig) -> Vec<VariableStat<'a>> {
    let mut tallies = IndexMap::<&str, Tally>::new();

    let rows = model.rows()
        .filter(|row| config.include_objective_coefficients || !row.is_objective());
    for row in rows {
        for (variable, &value) in &row.coefficients {
            if value == 0.0 {
                continue;
            }

            let (variable_type, index) = split_type_and_index(variable);
            tallies.entry(variable_type).or_insert_with(Tally::new)
                .add_coefficient(value, &row.name, index);
        }
    }

    for bound in model.bounds() {
        let (variable_type, index) = split_type_and_index(&bound.name);
        let tally = tallies.entry(variable_type).or_insert_with(Tally::new);
        tally.add_bound(bound.lower, index, true);
        tally.add_bound(bound.upper, index, false);
    }

    tallies.iter()
        .map(|(&name, tally)| tally.finish(name))
        .collect()
}
