//! # Importing MPS files
//!
//! Reading of `.mps` files, or files of the Mathematical Programming System format. Only the
//! free format is supported: fields are separated by whitespace, and a line holding a single
//! field announces a new section.
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::info;

use crate::data::linear_program::elements::RowKind;
use crate::data::linear_program::model::LPModel;
use crate::io::error::{Cause, Parse as ParseError};
use crate::io::mps::parse::Reader;
use crate::io::mps::token::{BOUNDS, COLUMNS, ENDATA, RHS, ROWS};

mod parse;
pub mod token;

/// Parse an MPS program, in string form, into an `LPModel`.
///
/// # Arguments
///
/// * `program`: The input in [MPS format](https://en.wikipedia.org/wiki/MPS_(format)).
///
/// # Errors
///
/// The first problem found in the file. There is no partial result.
pub fn parse(program: &str) -> Result<LPModel, ParseError> {
    parse_lines(program.lines())
}

/// Parse an MPS program from a sequence of lines.
///
/// # Errors
///
/// The first problem found, together with the line at which it was found.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<LPModel, ParseError> {
    let start = Instant::now();
    info!(component = "reader", operation = "load", "Loading model");

    let mut reader = Reader::new();
    for (number, line) in lines.into_iter().enumerate() {
        // Count from 1
        reader.read_line((number + 1, line))?;
    }
    let model = reader.finish()?;

    let counts = model.row_counts();
    info!(
        component = "reader",
        operation = "load",
        status = "success",
        objective = counts[RowKind::Objective] as u64,
        less_eq = counts[RowKind::LessEq] as u64,
        greater_eq = counts[RowKind::GreaterEq] as u64,
        equal = counts[RowKind::Equal] as u64,
        bounds = model.bounds().len() as u64,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Loaded model",
    );

    Ok(model)
}

/// MPS files are divided into sections.
///
/// # Note
///
/// The `Endata` variant (notice the odd spelling) denotes the end of the file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Section {
    /// Before the first section header, where e.g. the `NAME` line lives.
    Preamble,
    Rows,
    Columns,
    Rhs,
    Bounds,
    Endata,
}

impl FromStr for Section {
    type Err = Cause;

    /// Try to read a `Section` from the single field on a line.
    ///
    /// # Errors
    ///
    /// If the text is not one of the known section headers.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            ROWS => Ok(Section::Rows),
            COLUMNS => Ok(Section::Columns),
            RHS => Ok(Section::Rhs),
            BOUNDS => Ok(Section::Bounds),
            ENDATA => Ok(Section::Endata),
            _ => Err(Cause::MalformedSection(text.to_string())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Preamble => "preamble",
            Section::Rows => ROWS,
            Section::Columns => COLUMNS,
            Section::Rhs => RHS,
            Section::Bounds => BOUNDS,
            Section::Endata => ENDATA,
        })
    }
}

/// Integration testing the `io::mps` module.
#[cfg(test)]
pub(crate) mod test {
    use crate::data::linear_program::elements::RowKind;
    use crate::data::linear_program::model::{Bound, LPModel};
    use crate::io::error::Cause;
    use crate::io::mps::parse;

    /// A complete MPS file, in a static &str.
    pub const MPS_STRING: &str = "NAME          TESTPROB
ROWS
 N  COST
 L  LIM1
 G  LIM2
 E  MYEQN
COLUMNS
    XONE      COST                 1   LIM1                 1
    XONE      LIM2                 1
    YTWO      COST                 4   LIM1                 1
    YTWO      MYEQN               -1
    ZTHREE    COST                 9   LIM2                 1
    ZTHREE    MYEQN                1
RHS
    RHS1      LIM1                 5   LIM2                10
    RHS1      MYEQN                7
BOUNDS
 UP BND1      XONE                 4
 LO BND1      YTWO                -1
 UP BND1      YTWO                 1
ENDATA";

    /// Build the expected `LPModel`, corresponding to the MPS file string.
    pub fn lp_model() -> LPModel {
        let mut model = LPModel::new();
        model.set_name("TESTPROB");

        let cost = model.add_row("COST", RowKind::Objective).unwrap();
        cost.coefficients.insert("XONE".to_string(), 1.0);
        cost.coefficients.insert("YTWO".to_string(), 4.0);
        cost.coefficients.insert("ZTHREE".to_string(), 9.0);

        let lim1 = model.add_row("LIM1", RowKind::LessEq).unwrap();
        lim1.coefficients.insert("XONE".to_string(), 1.0);
        lim1.coefficients.insert("YTWO".to_string(), 1.0);
        lim1.rhs_value = Some(5.0);

        let lim2 = model.add_row("LIM2", RowKind::GreaterEq).unwrap();
        lim2.coefficients.insert("XONE".to_string(), 1.0);
        lim2.coefficients.insert("ZTHREE".to_string(), 1.0);
        lim2.rhs_value = Some(10.0);

        let myeqn = model.add_row("MYEQN", RowKind::Equal).unwrap();
        myeqn.coefficients.insert("YTWO".to_string(), -1.0);
        myeqn.coefficients.insert("ZTHREE".to_string(), 1.0);
        myeqn.rhs_value = Some(7.0);

        model.bound_or_insert("XONE").upper = Some(4.0);
        let ytwo = model.bound_or_insert("YTWO");
        ytwo.lower = Some(-1.0);
        ytwo.upper = Some(1.0);

        model
    }

    #[test]
    fn import() {
        assert_eq!(parse(MPS_STRING), Ok(lp_model()));
    }

    #[test]
    fn import_with_comments_and_blank_lines() {
        let program = format!("* generated\n\n{}\n\n", MPS_STRING.replace("RHS\n", "RHS\n* right-hand side\n"));
        assert_eq!(parse(&program), Ok(lp_model()));
    }

    #[test]
    fn bounds_section() {
        let program = "ROWS
 N  obj
 L  c
COLUMNS
    x(1)  c  1
    x(2)  c  1
RHS
    RHS   c  1
BOUNDS
 FR BND   x(1)
 LO BND   x(1)  2
 FX BND   x(2)  3
 MI BND   x(3)
 LO BND   x(3)  -5
 FR BND   x(4)
ENDATA
";
        let model = parse(program).unwrap();

        assert_eq!(model.bounds().map(|bound| bound.name.as_str()).collect::<Vec<_>>(), vec!["x(1)", "x(2)", "x(3)"]);
        // The free declaration did not leave anything behind
        assert_eq!(model.bound("x(1)"), Some(&Bound { name: "x(1)".to_string(), lower: Some(2.0), upper: None }));
        assert!(model.bound("x(2)").unwrap().is_fixed());
        // MI sets an upper bound of zero and leaves the lower bound alone
        assert_eq!(model.bound("x(3)"), Some(&Bound { name: "x(3)".to_string(), lower: Some(-5.0), upper: Some(0.0) }));
        assert_eq!(model.bound("x(4)"), None);
    }

    #[test]
    fn duplicate_objective() {
        let program = "ROWS\n N  a\n N  b\nCOLUMNS\nENDATA";
        let error = parse(program).unwrap_err();

        assert_eq!(error.cause(), &Cause::DuplicateObjective { existing: "a".to_string() });
        assert_eq!(error.location(), Some((3, " N  b")));
    }

    #[test]
    fn incomplete() {
        let program = MPS_STRING.trim_end_matches("ENDATA");
        let error = parse(program).unwrap_err();

        assert_eq!(error.cause(), &Cause::IncompleteInput { section: "BOUNDS".to_string() });
        assert_eq!(error.location(), None);

        assert!(matches!(parse("").unwrap_err().cause(), Cause::IncompleteInput { .. }));
    }

    #[test]
    fn unknown_section() {
        let program = MPS_STRING.replace("BOUNDS", "RANGES");
        let error = parse(&program).unwrap_err();

        assert_eq!(error.cause(), &Cause::MalformedSection("RANGES".to_string()));
        assert_eq!(error.location(), Some((17, "RANGES")));
    }
}
