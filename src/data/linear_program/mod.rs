//! # Representing linear programs
//!
//! A linear program is read into an `LPModel`, which keeps rows and bounds by name. The elements
//! module holds the small enums used to describe rows and bound lines.
pub mod elements;
pub mod model;
