//! Fixed-star catalog and positions of date.
//!
//! Stars are stored at J2000.0 (ICRS) with proper motion and parallax and
//! carried to any epoch through proper motion, IAU 2006 precession and
//! IAU 2000B nutation. Table generators reach positions through the
//! [`StarEphemeris`] trait so they can run against test doubles.

pub mod astrometry;
pub mod catalog;
pub mod ephemeris;
pub mod error;
mod record;

pub use astrometry::{StarPosition, distance_pc, position_of_date};
pub use catalog::{CatalogStar, StarCatalog, StarGroup};
pub use ephemeris::StarEphemeris;
pub use error::CatalogError;
pub use record::{parse_dms, parse_hms};
