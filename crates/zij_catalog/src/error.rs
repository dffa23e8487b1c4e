//! Error types for catalog loading and star lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from catalog loading and star lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io { path: String, message: String },
    /// Malformed CSV or a field of the wrong type.
    Csv { line: Option<u64>, message: String },
    /// A field parsed but its value is out of range.
    InvalidField {
        star: String,
        field: &'static str,
        value: String,
    },
    /// Two rows share a name (compared case-insensitively).
    DuplicateStar(String),
    /// Two rows share a Hipparcos number; carries the number and the second star.
    DuplicateHip { hip: u32, star: String },
    /// No star with this name in the catalog.
    StarNotFound(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read catalog {path}: {message}"),
            Self::Csv {
                line: Some(line),
                message,
            } => write!(f, "catalog line {line}: {message}"),
            Self::Csv { line: None, message } => write!(f, "catalog: {message}"),
            Self::InvalidField { star, field, value } => {
                write!(f, "star {star}: invalid {field} {value:?}")
            }
            Self::DuplicateStar(name) => write!(f, "duplicate star in catalog: {name}"),
            Self::DuplicateHip { hip, star } => {
                write!(f, "duplicate HIP {hip} in catalog: {star}")
            }
            Self::StarNotFound(name) => write!(f, "star not found: {name}"),
        }
    }
}

impl Error for CatalogError {}

impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        Self::Csv {
            line: e.position().map(|p| p.line()),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let e = CatalogError::StarNotFound("Vega".into());
        assert_eq!(e.to_string(), "star not found: Vega");
    }

    #[test]
    fn display_invalid_field() {
        let e = CatalogError::InvalidField {
            star: "Spica".into(),
            field: "ra_hms",
            value: "25:00:00".into(),
        };
        assert_eq!(e.to_string(), "star Spica: invalid ra_hms \"25:00:00\"");
    }

    #[test]
    fn display_duplicate_hip() {
        let e = CatalogError::DuplicateHip {
            hip: 65474,
            star: "Azimech".into(),
        };
        assert_eq!(e.to_string(), "duplicate HIP 65474 in catalog: Azimech");
    }
}
