//! Tropical boundaries of sidereal divisions.
//!
//! This crate provides the pure numeric core shared by every table:
//! - Longitude normalization into sign / degree / minute labels
//! - Ayanamsa estimation, from a fixed epoch value or from a reference star
//! - Projection of a star's hour circle onto the ecliptic
//! - Equal sidereal divisions and their tropical boundaries
//!
//! Nothing here touches a catalog or an ephemeris; callers supply star
//! positions.

pub mod ayanamsa;
pub mod division;
pub mod label;
pub mod projection;
pub mod sign;
pub mod util;

pub use ayanamsa::{
    AyanamsaSource, FAGAN_ALLEN_2019, FixedEpochAyanamsa, LAHIRI_SPICA, StarAnchor,
    sidereal_to_tropical, star_anchored_ayanamsa, tropical_to_sidereal,
};
pub use division::{Segment, SiderealDivision, boundary_spans};
pub use label::{DegMin, Dms, ZodiacLabel, deg_to_dms, zodiac_label};
pub use projection::{ecliptic_offset, hour_circle_longitude, hour_circle_longitude_at};
pub use sign::{ALL_SIGNS, Sign};
pub use util::{normalize_360, wrap_180};
