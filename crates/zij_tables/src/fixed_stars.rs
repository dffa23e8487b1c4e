//! Tropical ecliptic longitudes of the catalog's named stars.

use zij_catalog::{CatalogStar, StarCatalog, StarEphemeris, StarGroup};
use zij_time::Epoch;
use zij_zodiac::{ZodiacLabel, zodiac_label};

use crate::error::TableError;

/// One star's position of date.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStarRow {
    pub name: String,
    pub hip: Option<u32>,
    pub group: StarGroup,
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub label: ZodiacLabel,
}

/// Every catalog star for one year, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStarTable {
    pub year: i32,
    pub rows: Vec<FixedStarRow>,
}

/// Positions of date of every star in `catalog`, placed by `ephem`.
pub fn fixed_star_table<E: StarEphemeris + ?Sized>(
    ephem: &E,
    catalog: &StarCatalog,
    year: i32,
) -> Result<FixedStarTable, TableError> {
    fixed_star_rows(ephem, catalog.iter(), year)
}

/// Like [`fixed_star_table`] for an arbitrary selection of stars.
pub fn fixed_star_rows<'a, E, I>(ephem: &E, stars: I, year: i32) -> Result<FixedStarTable, TableError>
where
    E: StarEphemeris + ?Sized,
    I: IntoIterator<Item = &'a CatalogStar>,
{
    let epoch = Epoch::new_year(year);
    let rows = stars
        .into_iter()
        .map(|star| -> Result<FixedStarRow, TableError> {
            let pos = ephem.position(&star.name, epoch)?;
            Ok(FixedStarRow {
                name: star.name.clone(),
                hip: star.hip,
                group: star.group,
                lon_deg: pos.ecl_lon_deg,
                lat_deg: pos.ecl_lat_deg,
                label: zodiac_label(pos.ecl_lon_deg),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(year, stars = rows.len(), "generated fixed star table");
    Ok(FixedStarTable { year, rows })
}
