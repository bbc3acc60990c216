//! Domain models for the pharma-intel system.

mod medicine;
mod resolution;
mod scheme;

pub use medicine::*;
pub use resolution::*;
pub use scheme::*;

/// Treat empty and all-whitespace strings the same as missing values.
pub(crate) fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
