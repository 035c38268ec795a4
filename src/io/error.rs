//! # Error reporting for reading of linear program files
//!
//! A collection of types describing any problems encountered during reading and parsing. Every
//! problem is fatal: a read either produces a complete model, or one of these errors.
use std::error;
use std::fmt;
use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum Import {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be read into a model.
    #[error(transparent)]
    Parse(#[from] Parse),
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

/// Convenience alias for the results of reading single fields or lines.
pub type ParseResult<T> = Result<T, Parse>;

/// A failed read of a linear program.
///
/// Holds the offending line, when there is one, together with the underlying cause.
#[derive(Debug, PartialEq)]
pub struct Parse {
    location: Option<(usize, String)>,
    cause: Cause,
}

impl Parse {
    /// Create an error without a location, e.g. for when the input ended unexpectedly.
    pub fn new(cause: Cause) -> Self {
        Self { location: None, cause }
    }

    /// Create an error caused at a specific line.
    pub fn with_location(cause: Cause, (number, line): FileLocation) -> Self {
        Self {
            location: Some((number, line.to_string())),
            cause,
        }
    }

    /// What went wrong.
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Line number (counted from 1) and raw contents of the line that caused the error, if any.
    pub fn location(&self) -> Option<(usize, &str)> {
        self.location.as_ref().map(|(number, line)| (*number, line.as_str()))
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse MPS file: {}", self.cause)?;
        if let Some((number, line)) = &self.location {
            write!(f, "\n\tCaused at line\t{}:\t{}", number, line)?;
        }

        Ok(())
    }
}

impl error::Error for Parse {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Everything that can be wrong with a linear program file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Cause {
    /// A single word on a line that is not a known section header.
    #[error("unknown section header \"{0}\"")]
    MalformedSection(String),
    /// A second `N` row was declared.
    #[error("objective already defined by row \"{existing}\"")]
    DuplicateObjective {
        /// Name of the row that was declared as the objective first.
        existing: String,
    },
    /// The BOUNDS section contains a code that isn't supported.
    #[error("unknown bound type \"{0}\"")]
    UnknownBoundCode(String),
    /// The ROWS section contains a code other than `N`, `L`, `G` or `E`.
    #[error("unknown row type \"{0}\"")]
    UnknownRowKind(String),
    /// Two rows with the same name were declared.
    #[error("row \"{0}\" declared twice")]
    DuplicateRow(String),
    /// The COLUMNS or RHS section references a row that was not declared in the ROWS section.
    #[error("row \"{0}\" was not declared in the ROWS section")]
    UndefinedRowReference(String),
    /// A value could not be read as a floating point number.
    #[error("could not parse \"{text}\" as a number")]
    NumericParseFailure {
        /// The value as it appeared in the file.
        text: String,
        /// Why the standard library didn't accept it.
        #[source]
        source: ParseFloatError,
    },
    /// A line had fewer fields than needed.
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// The file ended before the ENDATA section header was read.
    #[error("input ended in the {section} section, before ENDATA was reached")]
    IncompleteInput {
        /// Section that was being read when the input ended.
        section: String,
    },
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::{Cause, Parse};

    #[test]
    fn display_contains_line() {
        let error = Parse::with_location(
            Cause::UnknownBoundCode("BV".to_string()),
            (12, " BV BND1      XONE"),
        );

        assert_eq!(
            error.to_string(),
            "Failed to parse MPS file: unknown bound type \"BV\"\n\tCaused at line\t12:\t BV BND1      XONE",
        );
        assert_eq!(error.location(), Some((12, " BV BND1      XONE")));
    }

    #[test]
    fn source_chain() {
        let failure = "abc".parse::<f64>().unwrap_err();
        let error = Parse::with_location(
            Cause::NumericParseFailure { text: "abc".to_string(), source: failure },
            (3, " XONE COST abc"),
        );

        let cause = error.source().unwrap();
        assert_eq!(cause.to_string(), "could not parse \"abc\" as a number");
        assert!(cause.source().is_some());
    }

    #[test]
    fn without_location() {
        let error = Parse::new(Cause::IncompleteInput { section: "COLUMNS".to_string() });

        assert_eq!(error.location(), None);
        assert_eq!(
            error.to_string(),
            "Failed to parse MPS file: input ended in the COLUMNS section, before ENDATA was reached",
        );
    }
}
