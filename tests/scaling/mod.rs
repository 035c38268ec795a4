//! # Scaling diagnostics of a small transportation model
//!
//! The model ships goods between two plants and two markets, with a few coefficients that are
//! deliberately orders of magnitude off.
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use lp_analyzer::analysis::{AnalysisConfig, Extremum, Spread, analyze};
use lp_analyzer::data::linear_program::elements::RowKind;
use lp_analyzer::io::error::{Cause, Import};
use lp_analyzer::io::import;
use lp_analyzer::report::{density_table, render};

/// Relative path of the folder where the mps files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("mps")
}

#[test]
fn read() {
    let model = import(&get_test_file_path("transport")).unwrap();

    assert_eq!(model.name(), Some("TRANSPORT"));
    let counts = model.row_counts();
    assert_eq!(counts[RowKind::Objective], 1);
    assert_eq!(counts[RowKind::LessEq], 2);
    assert_eq!(counts[RowKind::GreaterEq], 2);
    assert_eq!(counts[RowKind::Equal], 1);
    assert_eq!(model.objective().map(|row| row.name.as_str()), Some("cost"));
    // The free variable has no bound
    assert_eq!(model.bounds().len(), 4);
    assert_eq!(model.bound("ship(san-diego,new-york)"), None);
    assert_eq!(model.row("balance").unwrap().rhs_value, Some(0.0));
}

#[test]
fn variables() {
    let model = import(&get_test_file_path("transport")).unwrap();
    let analysis = analyze(&model, &AnalysisConfig::default());

    assert_eq!(analysis.variables.len(), 2);

    let ship = &analysis.variables[0];
    assert_eq!(ship.name, "ship");
    assert_eq!(ship.instance_count, 4);
    assert_eq!(ship.average_nonzeros, Some(2));
    assert_eq!(ship.coefficients, Spread::Range {
        min: Extremum { value: 0.001, location: "demand(chicago)" },
        max: Extremum { value: 1000.0, location: "demand(new-york)" },
    });
    assert_eq!(ship.bounds, Spread::Range {
        min: Extremum { value: 0.1, location: "san-diego,chicago" },
        max: Extremum { value: 1000.0, location: "seattle,new-york" },
    });
    assert_eq!(ship.lower_bounds.count, 1);
    assert_eq!(ship.upper_bounds.count, 2);
    assert!((ship.upper_bounds.mean.unwrap() - 100.0).abs() < 1e-9);

    let slack = &analysis.variables[1];
    assert_eq!(slack.name, "slack");
    assert_eq!(slack.coefficients, Spread::Degenerate(Extremum { value: 1.0, location: "balance" }));
    assert_eq!(slack.bounds, Spread::Degenerate(Extremum { value: 5.0, location: "" }));
}

#[test]
fn constraints() {
    let model = import(&get_test_file_path("transport")).unwrap();
    let analysis = analyze(&model, &AnalysisConfig::default());

    let names = analysis.constraints.iter().map(|stat| stat.name).collect::<Vec<_>>();
    assert_eq!(names, vec!["cost", "supply", "demand", "balance"]);

    let cost = &analysis.constraints[0];
    assert_eq!(cost.average_nonzeros, 5);
    assert_eq!(cost.rhs, Spread::Empty);
    assert_eq!(cost.coefficients, Spread::Range {
        min: Extremum { value: 0.2, location: "ship(seattle,chicago)" },
        max: Extremum { value: 0.3, location: "ship(san-diego,chicago)" },
    });

    let supply = &analysis.constraints[1];
    assert_eq!(supply.instance_count, 2);
    assert_eq!(supply.coefficients, Spread::Degenerate(Extremum { value: 1.0, location: "ship(seattle,new-york)" }));
    assert_eq!(supply.rhs, Spread::Range {
        min: Extremum { value: 350.0, location: "seattle" },
        max: Extremum { value: 600.0, location: "san-diego" },
    });

    let demand = &analysis.constraints[2];
    assert!((demand.coefficients.ratio().unwrap() - 1e6).abs() < 1e-3);
    assert_eq!(demand.rhs, Spread::Range {
        min: Extremum { value: 300.0, location: "chicago" },
        max: Extremum { value: 325.0, location: "new-york" },
    });

    // Only the default right-hand side of zero
    let balance = &analysis.constraints[3];
    assert_eq!(balance.rhs, Spread::MinOnly(Extremum { value: 0.0, location: "" }));
}

#[test]
fn report() {
    let model = import(&get_test_file_path("transport")).unwrap();
    let config = AnalysisConfig { densest_columns: 2, ..AnalysisConfig::default() };
    let analysis = analyze(&model, &config);

    let density = density_table(&analysis.densest_columns).to_string();
    let expected = [
        format!("| {:<22} | {:<9} |", "Variable", "Row Count"),
        format!("|{}|{}|", "-".repeat(24), "-".repeat(11)),
        format!("| {:<22} | {:<9} |", "ship(seattle,new-york)", "3"),
        format!("| {:<22} | {:<9} |", "ship(seattle,chicago)", "3"),
    ].join("\n");
    assert_eq!(density, expected);

    let report = render(&analysis);
    let tables = report.trim_end().split("\n\n").collect::<Vec<_>>();
    assert_eq!(tables.len(), 3);
    assert!(tables[0].starts_with("| Var Name "));
    assert!(tables[1].starts_with("| Constraint Name "));
    assert_eq!(tables[2], density);
    // Header, separator and one line per type
    assert_eq!(tables[0].lines().count(), 2 + 2);
    assert_eq!(tables[1].lines().count(), 2 + 4);

    let slack_line = tables[0].lines().find(|line| line.starts_with("| slack ")).unwrap();
    let cells = slack_line.split('|').map(str::trim).collect::<Vec<_>>();
    assert_eq!(&cells[1..cells.len() - 1], &[
        "slack", "1", "1", "--", "1.0e+00", "--", "5.0e+00", "--", "balance", "--", "", "1",
        "5.0e+00", "1", "5.0e+00",
    ]);
}

#[test]
fn missing_file() {
    let result = import(&get_test_file_path("does-not-exist"));
    assert!(matches!(result, Err(Import::IO(_))));
}

#[test]
fn broken_file() {
    let path = std::env::temp_dir().join("lp-analyzer-broken.mps");
    std::fs::write(&path, "ROWS\n N  cost\n L  c\nCOLUMNS\n    x  d  1\nENDATA\n").unwrap();

    match import(&path) {
        Err(Import::Parse(error)) => {
            assert_eq!(error.cause(), &Cause::UndefinedRowReference("d".to_string()));
            assert_eq!(error.location(), Some((5, "    x  d  1")));
        },
        other => panic!("expected a parse error, got {:?}", other),
    }
}
