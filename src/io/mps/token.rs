//! # Tokens used in MPS files

/// A line whose first non-blank character is this is skipped, in any section.
pub const COMMENT_INDICATOR: &str = "*";

/// Before the first section header, a line starting with this field names the model.
pub const NAME: &str = "NAME";

/// Section headers, each alone on a line.
pub const ROWS: &str = "ROWS";
#[allow(missing_docs)]
pub const COLUMNS: &str = "COLUMNS";
#[allow(missing_docs)]
pub const RHS: &str = "RHS";
#[allow(missing_docs)]
pub const BOUNDS: &str = "BOUNDS";

/// Marks the end of the file.
///
/// # Note
///
/// Nothing after this header is read.
pub const ENDATA: &str = "ENDATA";
