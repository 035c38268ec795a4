//! # Building blocks to describe linear programs.
use std::fmt;
use std::str::FromStr;

use enum_map::Enum;

use crate::io::error::Cause;

/// Every row is either the cost row or a constraint with some relation.
///
/// The letters used in MPS files to denote these kinds are `N`, `L`, `G` and `E`.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RowKind {
    LessEq,
    GreaterEq,
    Equal,
    Objective,
}

impl RowKind {
    /// Symbol used when printing a row.
    ///
    /// The right-hand side is printed on the left, hence why `>=` and `<=` are flipped.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            RowKind::LessEq => ">=",
            RowKind::GreaterEq => "<=",
            RowKind::Equal => "=",
            RowKind::Objective => "Obj:",
        }
    }

    /// The letter denoting this kind in the ROWS section.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            RowKind::LessEq => "L",
            RowKind::GreaterEq => "G",
            RowKind::Equal => "E",
            RowKind::Objective => "N",
        }
    }
}

impl FromStr for RowKind {
    type Err = Cause;

    /// Try to read a `RowKind` from a string slice.
    ///
    /// # Errors
    ///
    /// Anything other than exactly `N`, `L`, `G` or `E`.
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "N" => Ok(RowKind::Objective),
            "L" => Ok(RowKind::LessEq),
            "G" => Ok(RowKind::GreaterEq),
            "E" => Ok(RowKind::Equal),
            _ => Err(Cause::UnknownRowKind(word.to_string())),
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The bound types understood in the BOUNDS section.
///
/// # Note
///
/// `MI` does not describe `-inf < x`, it is read as an upper bound of zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundType {
    /// (0 <=) x <= b
    Upper(f64),
    /// b <= x
    Lower(f64),
    /// x = b
    Fixed(f64),
    /// x <= 0
    MinusInfinity,
    /// -inf < x < +inf, no bound is recorded
    Free,
}

impl BoundType {
    /// Whether the line needs a fourth field holding a value.
    #[must_use]
    pub fn code_needs_value(code: &str) -> bool {
        matches!(code, "UP" | "LO" | "FX")
    }

    /// Combine a bound code and, if the code needs one, its value.
    ///
    /// # Errors
    ///
    /// If the code is not one of `UP`, `LO`, `FX`, `MI` or `FR`.
    pub fn from_code(code: &str, value: Option<f64>) -> Result<Self, Cause> {
        match (code, value) {
            ("UP", Some(value)) => Ok(BoundType::Upper(value)),
            ("LO", Some(value)) => Ok(BoundType::Lower(value)),
            ("FX", Some(value)) => Ok(BoundType::Fixed(value)),
            ("UP" | "LO" | "FX", None) => Err(Cause::MissingField("bound value")),
            ("MI", _) => Ok(BoundType::MinusInfinity),
            ("FR", _) => Ok(BoundType::Free),
            _ => Err(Cause::UnknownBoundCode(code.to_string())),
        }
    }
}
