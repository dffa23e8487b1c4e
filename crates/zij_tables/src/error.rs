//! Error types for table generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use zij_catalog::CatalogError;

/// Errors from table generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TableError {
    /// A star position could not be obtained.
    Catalog(CatalogError),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "catalog error: {e}"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
        }
    }
}

impl From<CatalogError> for TableError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}
