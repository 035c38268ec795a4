//! # Reading linear programs
//!
//! This module provides read functionality for linear program formats.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::data::linear_program::model::LPModel;
use crate::io::error::Import;

pub mod error;
pub mod mps;

/// Import a problem from a file.
///
/// The file is read completely before parsing starts. Only the (free) MPS format is supported,
/// regardless of the file extension.
///
/// # Errors
///
/// When a file cannot be found or read, or when its contents are not a valid MPS program.
pub fn import(file_path: &Path) -> Result<LPModel, Import> {
    info!(component = "io", path = %file_path.display(), "Reading problem file");
    let program = fs::read_to_string(file_path)?;

    Ok(mps::parse(&program)?)
}
