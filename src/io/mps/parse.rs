//! # Reading MPS lines
//!
//! A line with a single field switches the section, any other line is handed to the reader of
//! the current section. This method is written to be fast: each line is split once and written
//! into the model directly.
use itertools::Itertools;
use tracing::{debug, trace};

use crate::data::linear_program::elements::{BoundType, RowKind};
use crate::data::linear_program::model::LPModel;
use crate::io::error::{Cause, FileLocation, Parse as ParseError, ParseResult};
use crate::io::mps::Section;
use crate::io::mps::token::{COMMENT_INDICATOR, NAME};

/// Builds an `LPModel` one line at a time.
#[derive(Debug)]
pub(crate) struct Reader {
    section: Section,
    model: LPModel,
}

impl Reader {
    pub fn new() -> Self {
        Self {
            section: Section::Preamble,
            model: LPModel::new(),
        }
    }

    /// Read the next line of the file.
    ///
    /// # Errors
    ///
    /// When the line can't be read in the current section. The error refers to the line.
    pub fn read_line(&mut self, location: FileLocation) -> ParseResult<()> {
        let (_, line) = location;
        if self.section == Section::Endata || line.trim_start().starts_with(COMMENT_INDICATOR) {
            return Ok(());
        }

        let fields = line.split_whitespace().collect::<Vec<_>>();
        let result = match fields[..] {
            [] => Ok(()),
            // An unnamed model
            [NAME] if self.section == Section::Preamble => Ok(()),
            [keyword] => keyword.parse().map(|section| self.switch_section(section)),
            _ => self.read_content(&fields),
        };

        result.map_err(|cause| ParseError::with_location(cause, location))
    }

    /// Hand over the model, if the end of the file was reached properly.
    ///
    /// # Errors
    ///
    /// If the ENDATA section header was never read.
    pub fn finish(self) -> ParseResult<LPModel> {
        match self.section {
            Section::Endata => Ok(self.model),
            section => Err(ParseError::new(Cause::IncompleteInput { section: section.to_string() })),
        }
    }

    fn switch_section(&mut self, section: Section) {
        debug!(component = "reader", from = %self.section, to = %section, "Switching section");
        self.section = section;
    }

    fn read_content(&mut self, fields: &[&str]) -> Result<(), Cause> {
        match self.section {
            Section::Preamble => {
                if fields[0] == NAME {
                    self.model.set_name(fields[1]);
                } else {
                    trace!(component = "reader", ?fields, "Ignoring line before the first section");
                }
                Ok(())
            },
            Section::Rows => self.read_row(fields),
            Section::Columns => self.read_column(fields),
            Section::Rhs => self.read_rhs(fields),
            Section::Bounds => self.read_bound(fields),
            Section::Endata => Ok(()),
        }
    }

    /// Read a line from the ROWS section.
    ///
    /// The first field is the kind, the second the name of the row.
    fn read_row(&mut self, fields: &[&str]) -> Result<(), Cause> {
        let kind = fields[0].parse::<RowKind>()?;
        self.model.add_row(fields[1], kind)?;

        Ok(())
    }

    /// Read a line from the COLUMNS section.
    ///
    /// The first field is the variable name, then it alternates between row name and coefficient.
    fn read_column(&mut self, fields: &[&str]) -> Result<(), Cause> {
        let variable = fields[0];
        for_each_pair(&fields[1..], |row_name, value| {
            self.model.row_mut(row_name)?
                .coefficients.insert(variable.to_string(), value);
            Ok(())
        })
    }

    /// Read a line from the RHS section.
    ///
    /// The first field is the name of the right-hand side vector and is dropped, then it
    /// alternates between row name and value.
    fn read_rhs(&mut self, fields: &[&str]) -> Result<(), Cause> {
        for_each_pair(&fields[1..], |row_name, value| {
            let row = self.model.row_mut(row_name)?;
            if row.is_objective() {
                trace!(component = "reader", row = row_name, "Ignoring right-hand side of the objective");
            } else {
                row.rhs_value = Some(value);
            }
            Ok(())
        })
    }

    /// Read a line from the BOUNDS section.
    ///
    /// The first field is the bound type, the second is not important, the third is the variable
    /// on which the bound applies and the fourth, if the bound type needs one, the value.
    fn read_bound(&mut self, fields: &[&str]) -> Result<(), Cause> {
        let code = fields[0];
        let value = match fields.get(3) {
            Some(text) if BoundType::code_needs_value(code) => Some(parse_value(text)?),
            _ => None,
        };

        let (lower, upper) = match BoundType::from_code(code, value)? {
            BoundType::Upper(value) => (None, Some(value)),
            BoundType::Lower(value) => (Some(value), None),
            BoundType::Fixed(value) => (Some(value), Some(value)),
            BoundType::MinusInfinity => (None, Some(0.0)),
            BoundType::Free => {
                trace!(component = "reader", ?fields, "Free variable, no bound recorded");
                return Ok(());
            },
        };

        let name = fields.get(2).ok_or(Cause::MissingField("bound variable name"))?;
        let bound = self.model.bound_or_insert(name);
        if lower.is_some() {
            bound.lower = lower;
        }
        if upper.is_some() {
            bound.upper = upper;
        }

        Ok(())
    }
}

/// Apply `f` to all (name, value) pairs in a sequence of fields.
///
/// # Errors
///
/// If a value can't be parsed, the fields can't be paired up, or when `f` fails.
fn for_each_pair<'a>(
    fields: &[&'a str],
    mut f: impl FnMut(&'a str, f64) -> Result<(), Cause>,
) -> Result<(), Cause> {
    let mut pairs = fields.iter().copied().tuples();
    for (name, value_text) in pairs.by_ref() {
        f(name, parse_value(value_text)?)?;
    }

    if pairs.into_buffer().next().is_some() {
        Err(Cause::MissingField("value following the row name"))
    } else {
        Ok(())
    }
}

fn parse_value(text: &str) -> Result<f64, Cause> {
    text.parse().map_err(|source| Cause::NumericParseFailure { text: text.to_string(), source })
}
