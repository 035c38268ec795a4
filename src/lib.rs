//! # Conditioning diagnostics for linear programs
//!
//! Linear programs are read from files in the MPS format. Variables and constraints are then
//! grouped by type, the part of their name before an index such as `(1,2)`, and the magnitudes of
//! their coefficients, bounds and right-hand sides are summarized per type. Types spanning many
//! orders of magnitude are a common cause of numerical trouble in solvers.
#![warn(missing_docs)]

pub mod analysis;
pub mod data;
pub mod io;
pub mod report;
