//! # Running extrema and geometric means
//!
//! Magnitudes are collected one at a time. The smallest and largest are remembered together with
//! where they were observed; the first observation wins a tie.

/// A magnitude together with where it was observed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extremum<L> {
    #[allow(missing_docs)]
    pub value: f64,
    /// Row, variable or index at which `value` was observed.
    pub location: L,
}

/// Summary of all magnitudes observed for some statistic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Spread<L> {
    /// Nothing was observed.
    Empty,
    /// The minimum and maximum are the same observation, so there is no real range.
    ///
    /// Holds the only distinct value that was seen.
    Degenerate(Extremum<L>),
    /// Only a minimum was observed. This happens when every observation was zero, which never
    /// beats the starting maximum.
    MinOnly(Extremum<L>),
    /// Only a maximum was observed, i.e. every observation was infinite.
    MaxOnly(Extremum<L>),
    /// Distinct minimum and maximum.
    Range {
        #[allow(missing_docs)]
        min: Extremum<L>,
        #[allow(missing_docs)]
        max: Extremum<L>,
    },
}

impl<L> Spread<L> {
    /// The smallest observation, unless it is indistinguishable from the largest.
    pub fn min(&self) -> Option<&Extremum<L>> {
        match self {
            Spread::Range { min, .. } | Spread::MinOnly(min) => Some(min),
            Spread::Empty | Spread::Degenerate(_) | Spread::MaxOnly(_) => None,
        }
    }

    /// The largest observation, if there was any.
    pub fn max(&self) -> Option<&Extremum<L>> {
        match self {
            Spread::Range { max, .. } | Spread::Degenerate(max) | Spread::MaxOnly(max) => Some(max),
            Spread::Empty | Spread::MinOnly(_) => None,
        }
    }

    /// Ratio of the largest to the smallest magnitude.
    ///
    /// This is the number of orders of magnitude a statistic spans, as a factor. Absent when one
    /// of the two is missing or the minimum is zero.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Spread::Range { min, max } if min.value > 0.0 => Some(max.value / min.value),
            Spread::Degenerate(_) => Some(1.0),
            Spread::Range { .. } | Spread::MinOnly(_) | Spread::MaxOnly(_) | Spread::Empty => None,
        }
    }
}

/// Tracks the smallest and largest magnitude seen so far.
///
/// Starts from the sentinels `+inf` for the minimum and `0` for the maximum. Values are only
/// accepted when they are strictly better than the current extremum, so a zero magnitude never
/// becomes a maximum, an infinite one never a minimum, and earlier locations win ties.
#[derive(Clone, Debug)]
pub(crate) struct MinMax<L> {
    min: (f64, Option<L>),
    max: (f64, Option<L>),
}

impl<L: Copy + PartialEq> MinMax<L> {
    pub fn new() -> Self {
        Self {
            min: (f64::INFINITY, None),
            max: (0.0, None),
        }
    }

    pub fn observe(&mut self, value: f64, location: L) {
        self.observe_min(value, location);
        self.observe_max(value, location);
    }

    pub fn observe_min(&mut self, value: f64, location: L) {
        if value < self.min.0 {
            self.min = (value, Some(location));
        }
    }

    pub fn observe_max(&mut self, value: f64, location: L) {
        if value > self.max.0 {
            self.max = (value, Some(location));
        }
    }

    pub fn finish(&self) -> Spread<L> {
        let min = self.min.1.map(|location| Extremum { value: self.min.0, location });
        let max = self.max.1.map(|location| Extremum { value: self.max.0, location });

        match (min, max) {
            (Some(min), Some(max)) if min == max => Spread::Degenerate(max),
            (Some(min), Some(max)) => Spread::Range { min, max },
            (Some(min), None) => Spread::MinOnly(min),
            (None, Some(max)) => Spread::MaxOnly(max),
            (None, None) => Spread::Empty,
        }
    }
}

/// Count and geometric mean of a set of magnitudes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometricMean {
    /// Number of magnitudes that were observed.
    pub count: usize,
    /// `exp(mean(ln(v)))`, absent when nothing was observed.
    pub mean: Option<f64>,
}

/// Running sum of logarithms, from which a `GeometricMean` is computed.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LogSum {
    count: usize,
    sum: f64,
}

impl LogSum {
    /// Add a strictly positive magnitude.
    pub fn add(&mut self, magnitude: f64) {
        debug_assert!(magnitude > 0.0);

        self.count += 1;
        self.sum += magnitude.ln();
    }

    pub fn finish(&self) -> GeometricMean {
        GeometricMean {
            count: self.count,
            mean: (self.count > 0).then(|| (self.sum / self.count as f64).exp()),
        }
    }
}
