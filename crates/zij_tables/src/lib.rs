//! Tropical boundary tables for sidereal divisions.
//!
//! Each generator composes the numeric core in `zij_zodiac` with star
//! positions from a [`StarEphemeris`](zij_catalog::StarEphemeris):
//! - [`manzil_table`]: 28 Arabic mansions, Fagan-Allen ayanamsa
//! - [`rashi_nakshatra_table`]: 12 rāśi and 27 nakṣatra, Lahiri ayanamsa
//! - [`xiu_table`]: 28 Chinese lodges by hour-circle projection
//! - [`fixed_star_table`]: tropical longitudes of the catalog stars
//!
//! All positions are taken at 1 January, 0h TT of the requested year.

pub mod error;
pub mod fixed_stars;
pub mod manzil;
pub mod planet;
pub mod rashi_nakshatra;
pub mod xiu;

pub use error::TableError;
pub use fixed_stars::{FixedStarRow, FixedStarTable, fixed_star_rows, fixed_star_table};
pub use manzil::{MANAZIL, Manzil, ManzilRow, ManzilTable, manzil_table, manzil_table_with};
pub use planet::Planet;
pub use rashi_nakshatra::{
    NAKSHATRAS, Nakshatra, NakshatraRow, RASHIS, Rashi, RashiNakshatraTable, RashiRow,
    rashi_nakshatra_table, rashi_nakshatra_table_with,
};
pub use xiu::{ALL_PALACES, Palace, XIU, Xiu, XiuRow, XiuTable, xiu_table};
