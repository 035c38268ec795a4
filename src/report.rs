//! # Rendering analysis results
//!
//! The statistics are rendered as GitHub flavored markdown tables. Empty cells stand for values
//! that were not observed, and `--` marks the minimum of a range that consists of a single value.
use std::path::{Path, PathBuf};

use tabled::Table;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::analysis::{Analysis, ColumnDensity, ConstraintStat, GeometricMean, Spread, VariableStat};

/// Extension of the report written next to the input file.
pub const REPORT_EXTENSION: &str = "txt";

/// Where the report goes when no path was given: the input path with a `.txt` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(REPORT_EXTENSION)
}

/// Render all tables of an analysis, separated by blank lines.
pub fn render(analysis: &Analysis) -> String {
    let mut tables = vec![
        variable_table(&analysis.variables).to_string(),
        constraint_table(&analysis.constraints).to_string(),
    ];
    if !analysis.densest_columns.is_empty() {
        tables.push(density_table(&analysis.densest_columns).to_string());
    }

    tables.join("\n\n") + "\n"
}

/// Lay out a header and rows of text cells as a GitHub markdown table.
fn markdown_table(header: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|cell| cell.to_string()));
    for row in rows {
        debug_assert_eq!(row.len(), header.len());
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::markdown());
    table
}

/// Table with one row per variable type.
pub fn variable_table(stats: &[VariableStat]) -> Table {
    markdown_table(&VARIABLE_HEADER, stats.iter().map(variable_row).collect())
}

const VARIABLE_HEADER: [&str; 15] = [
    "Var Name",
    "Col Count",
    "Avg Col Non-Zeroes",
    "Min coef",
    "Max coef",
    "Min Bound",
    "Max bound",
    "Min coef index",
    "Max coef index",
    "Min bound index",
    "Max bound index",
    "Lower Bound Count",
    "Lower Bound Geometric Mean",
    "Upper bound count",
    "Upper bound geometric mean",
];

fn variable_row(stat: &VariableStat) -> Vec<String> {
    let coefficients = SpreadCells::from(&stat.coefficients);
    let bounds = SpreadCells::from(&stat.bounds);
    let (lower_count, lower_mean) = mean_cells(&stat.lower_bounds);
    let (upper_count, upper_mean) = mean_cells(&stat.upper_bounds);

    vec![
        stat.name.to_string(),
        count_cell(stat.instance_count),
        stat.average_nonzeros.map(count_cell).unwrap_or_default(),
        coefficients.min_value,
        coefficients.max_value,
        bounds.min_value,
        bounds.max_value,
        coefficients.min_location,
        coefficients.max_location,
        bounds.min_location,
        bounds.max_location,
        lower_count,
        lower_mean,
        upper_count,
        upper_mean,
    ]
}

/// Table with one row per constraint type.
pub fn constraint_table(stats: &[ConstraintStat]) -> Table {
    markdown_table(&CONSTRAINT_HEADER, stats.iter().map(constraint_row).collect())
}

const CONSTRAINT_HEADER: [&str; 11] = [
    "Constraint Name",
    "Row count",
    "Avg row non-zeroes",
    "Min coef",
    "Max coef",
    "Min RHS",
    "Max RHS",
    "Min coef index",
    "Max coef index",
    "Min RHS index",
    "Max RHS index",
];

fn constraint_row(stat: &ConstraintStat) -> Vec<String> {
    let coefficients = SpreadCells::from(&stat.coefficients);
    let rhs = SpreadCells::from(&stat.rhs);

    vec![
        stat.name.to_string(),
        count_cell(stat.instance_count),
        count_cell(stat.average_nonzeros),
        coefficients.min_value,
        coefficients.max_value,
        rhs.min_value,
        rhs.max_value,
        coefficients.min_location,
        coefficients.max_location,
        rhs.min_location,
        rhs.max_location,
    ]
}

/// Table of the variables that appear in the most rows.
pub fn density_table(columns: &[ColumnDensity]) -> Table {
    let rows = columns.iter()
        .map(|column| vec![column.variable.to_string(), count_cell(column.row_count)])
        .collect();

    markdown_table(&["Variable", "Row Count"], rows)
}

/// Marks the minimum of a range with a single distinct value.
const DEGENERATE: &str = "--";

struct SpreadCells {
    min_value: String,
    max_value: String,
    min_location: String,
    max_location: String,
}

impl From<&Spread<&str>> for SpreadCells {
    fn from(spread: &Spread<&str>) -> Self {
        match spread {
            Spread::Empty => Self {
                min_value: String::new(),
                max_value: String::new(),
                min_location: String::new(),
                max_location: String::new(),
            },
            Spread::Degenerate(only) => Self {
                min_value: DEGENERATE.to_string(),
                max_value: number_cell(only.value),
                min_location: DEGENERATE.to_string(),
                max_location: only.location.to_string(),
            },
            Spread::MinOnly(min) => Self {
                min_value: number_cell(min.value),
                max_value: String::new(),
                min_location: min.location.to_string(),
                max_location: String::new(),
            },
            Spread::MaxOnly(max) => Self {
                min_value: String::new(),
                max_value: number_cell(max.value),
                min_location: String::new(),
                max_location: max.location.to_string(),
            },
            Spread::Range { min, max } => Self {
                min_value: number_cell(min.value),
                max_value: number_cell(max.value),
                min_location: min.location.to_string(),
                max_location: max.location.to_string(),
            },
        }
    }
}

fn mean_cells(mean: &GeometricMean) -> (String, String) {
    (count_cell(mean.count), mean.mean.map(number_cell).unwrap_or_default())
}

/// Zero counts are left empty.
fn count_cell(count: usize) -> String {
    if count == 0 { String::new() } else { count.to_string() }
}

/// Scientific notation with one decimal and a signed, two digit exponent, e.g. `1.5e-03`.
///
/// Zero and infinity are left empty, their locations are still reported.
fn number_cell(value: f64) -> String {
    if value == 0.0 || value.is_infinite() {
        return String::new();
    }

    let formatted = format!("{:.1e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        },
        None => formatted,
    }
}
