//! # In-memory model of a linear program
//!
//! The model is built incrementally while a file is read, and is only read from afterwards.
use std::fmt;

use enum_map::EnumMap;
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::data::linear_program::elements::RowKind;
use crate::io::error::Cause;

/// A constraint or the objective function in the model.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Unique within the model.
    pub name: String,
    /// Relation of the constraint, or whether this is the objective.
    pub kind: RowKind,
    /// Sparse coefficients, keyed by variable name. Setting a value twice overwrites.
    pub coefficients: IndexMap<String, f64>,
    /// Zero by default for constraints, always absent for the objective.
    pub rhs_value: Option<f64>,
}

impl Row {
    /// Create a row without any coefficients.
    pub fn new(name: impl Into<String>, kind: RowKind) -> Self {
        Self {
            name: name.into(),
            kind,
            coefficients: IndexMap::new(),
            rhs_value: match kind {
                RowKind::Objective => None,
                _ => Some(0.0),
            },
        }
    }

    /// Whether this row is the cost row.
    pub fn is_objective(&self) -> bool {
        self.kind == RowKind::Objective
    }

    /// The (variable, magnitude) pairs with the smallest and largest nonzero magnitude.
    ///
    /// Zero coefficients are skipped. When no coefficient is left, the sentinels `(None, +inf)`
    /// and `(None, 0)` are returned; these are not values that were actually observed. Ties are
    /// resolved in favor of the variable that was inserted first.
    pub fn coefficient_range(&self) -> ((Option<&str>, f64), (Option<&str>, f64)) {
        let mut min = (None, f64::INFINITY);
        let mut max = (None, 0.0);

        let magnitudes = self.coefficients.iter()
            .map(|(variable, value)| (variable.as_str(), value.abs()))
            .filter(|&(_, magnitude)| magnitude != 0.0);
        for (variable, magnitude) in magnitudes {
            if min.0.is_none() || magnitude < min.1 {
                min = (Some(variable), magnitude);
            }
            if max.0.is_none() || magnitude > max.1 {
                max = (Some(variable), magnitude);
            }
        }

        (min, max)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t", self.name)?;
        if let Some(rhs) = self.rhs_value {
            write!(f, "{}\t", rhs)?;
        }
        write!(f, "{} ", self.kind.symbol())?;
        for (variable, &coefficient) in &self.coefficients {
            if coefficient > 0.0 {
                f.write_str("+")?;
            }
            if coefficient == 1.0 {
                write!(f, "{}\t", variable)?;
            } else {
                write!(f, "{}*{}\t", coefficient, variable)?;
            }
        }

        Ok(())
    }
}

/// A lower and / or upper limit on a single variable.
///
/// A variable declared free has no `Bound` at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Bound {
    /// Name of the variable.
    pub name: String,
    /// Lower limit, if one was read.
    pub lower: Option<f64>,
    /// Upper limit, if one was read.
    pub upper: Option<f64>,
}

impl Bound {
    /// A bound for a variable without any limit recorded yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), lower: None, upper: None }
    }

    /// Both limits are known and have the same magnitude.
    pub fn is_fixed(&self) -> bool {
        matches!((self.lower, self.upper), (Some(lower), Some(upper)) if lower.abs() == upper.abs())
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => write!(f, "{} <= {} <= {}", lower, self.name, upper),
            (None, Some(upper)) => write!(f, "{} <= {}", self.name, upper),
            (Some(lower), None) => write!(f, "{} <= {}", lower, self.name),
            (None, None) => write!(f, "unbounded {}", self.name),
        }
    }
}

/// A linear program: all rows, including the objective, and all variable bounds.
///
/// Both collections remember the order in which their elements were first added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LPModel {
    name: Option<String>,
    /// Key of the objective row in `rows`.
    objective: Option<String>,
    rows: IndexMap<String, Row>,
    bounds: IndexMap<String, Bound>,
}

impl LPModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the program, as read from the `NAME` line.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Declare a new row.
    ///
    /// # Errors
    ///
    /// If a row with this name already exists, or when a second objective row is added.
    pub fn add_row(&mut self, name: &str, kind: RowKind) -> Result<&mut Row, Cause> {
        if kind == RowKind::Objective {
            if let Some(existing) = &self.objective {
                if existing != name {
                    return Err(Cause::DuplicateObjective { existing: existing.clone() });
                }
            }
        }

        match self.rows.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Cause::DuplicateRow(name.to_string())),
            Entry::Vacant(entry) => {
                if kind == RowKind::Objective {
                    self.objective = Some(name.to_string());
                }
                Ok(entry.insert(Row::new(name, kind)))
            }
        }
    }

    /// The objective row, if one was declared.
    pub fn objective(&self) -> Option<&Row> {
        self.objective.as_ref().and_then(|name| self.rows.get(name))
    }

    /// All rows, the objective included, in declaration order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &Row> {
        self.rows.values()
    }

    /// Look up a row by its name.
    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.get(name)
    }

    /// Look up a row by its name to modify it.
    ///
    /// # Errors
    ///
    /// If no row with this name was declared.
    pub fn row_mut(&mut self, name: &str) -> Result<&mut Row, Cause> {
        self.rows.get_mut(name).ok_or_else(|| Cause::UndefinedRowReference(name.to_string()))
    }

    /// All bounds in the order in which their variables were first mentioned.
    pub fn bounds(&self) -> impl ExactSizeIterator<Item = &Bound> {
        self.bounds.values()
    }

    /// Look up the bound of a variable.
    pub fn bound(&self, name: &str) -> Option<&Bound> {
        self.bounds.get(name)
    }

    /// Get the bound of a variable, creating an empty one if it doesn't exist yet.
    pub fn bound_or_insert(&mut self, name: &str) -> &mut Bound {
        self.bounds.entry(name.to_string()).or_insert_with(|| Bound::new(name))
    }

    /// Number of rows of each kind.
    pub fn row_counts(&self) -> EnumMap<RowKind, usize> {
        let mut counts = EnumMap::default();
        for row in self.rows.values() {
            counts[row.kind] += 1;
        }

        counts
    }
}

impl fmt::Display for LPModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OBJECTIVE")?;
        if let Some(objective) = self.objective() {
            writeln!(f, "{}", objective)?;
        }
        writeln!(f, "\nCONSTRAINTS")?;
        for row in self.rows.values().filter(|row| !row.is_objective()) {
            writeln!(f, "{}", row)?;
        }
        writeln!(f, "\nBOUNDS")?;
        for bound in self.bounds.values() {
            writeln!(f, "{}", bound)?;
        }

        Ok(())
    }
}
