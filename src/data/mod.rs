//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory. The
//! analysis introduces its own data structures in `analysis`.

pub mod linear_program;
