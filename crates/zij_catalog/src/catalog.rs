//! The fixed-star catalog: J2000.0 positions, proper motions and parallaxes.
//!
//! A catalog is read once from CSV and then queried by name or Hipparcos
//! number. The crate bundles a default catalog covering every star the
//! tables need; a user-supplied file with the same columns can replace it.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::record::StarRecord;

const BUNDLED_CSV: &str = include_str!("../data/fixed_stars.csv");

/// Why a star is in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarGroup {
    /// The fifteen Behenian stars of medieval astrology.
    Behenian,
    /// Royal stars not already among the Behenian.
    Royal,
    /// Orion's shoulders and foot.
    Orion,
    /// The Gemini twins.
    Gemini,
    /// Other first-magnitude stars.
    Bright,
    /// Stars commonly cited in modern practice.
    Active,
    /// Added on request.
    Requested,
    /// Marker stars of the Arabic lunar mansions.
    Manzil,
    /// Determinative stars of the Chinese lodges.
    Xiu,
}

impl StarGroup {
    /// Lowercase group name as written in the CSV.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Behenian => "behenian",
            Self::Royal => "royal",
            Self::Orion => "orion",
            Self::Gemini => "gemini",
            Self::Bright => "bright",
            Self::Active => "active",
            Self::Requested => "requested",
            Self::Manzil => "manzil",
            Self::Xiu => "xiu",
        }
    }
}

/// A validated catalog entry with angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStar {
    pub name: String,
    pub hip: Option<u32>,
    pub group: StarGroup,
    /// Bayer or Flamsteed designation, e.g. `α Vir`.
    pub designation: String,
    /// Right ascension at J2000.0, degrees.
    pub ra_deg: f64,
    /// Declination at J2000.0, degrees.
    pub dec_deg: f64,
    /// Proper motion in RA, μα·cos δ, milliarcseconds per year.
    pub pm_ra_mas_yr: f64,
    /// Proper motion in declination, milliarcseconds per year.
    pub pm_dec_mas_yr: f64,
    /// Annual parallax, milliarcseconds.
    pub parallax_mas: f64,
}

/// An ordered, name-indexed set of catalog stars.
#[derive(Debug, Clone)]
pub struct StarCatalog {
    stars: Vec<CatalogStar>,
    by_name: HashMap<String, usize>,
    by_hip: HashMap<u32, usize>,
}

impl StarCatalog {
    /// Parse the catalog compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_reader(BUNDLED_CSV.as_bytes())
    }

    /// Load a catalog CSV from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let io_err = |e: std::io::Error| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        let file = File::open(path).map_err(io_err)?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), stars = catalog.len(), "loaded star catalog");
        Ok(catalog)
    }

    /// Parse CSV with a header row from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut stars = Vec::new();
        for row in csv_reader.deserialize::<StarRecord>() {
            stars.push(row?.into_star()?);
        }
        Self::from_stars(stars)
    }

    /// Build a catalog from already-validated stars, keeping their order.
    pub fn from_stars(stars: Vec<CatalogStar>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(stars.len());
        let mut by_hip = HashMap::new();
        for (i, star) in stars.iter().enumerate() {
            if by_name.insert(star.name.to_lowercase(), i).is_some() {
                return Err(CatalogError::DuplicateStar(star.name.clone()));
            }
            if let Some(hip) = star.hip {
                if by_hip.insert(hip, i).is_some() {
                    return Err(CatalogError::DuplicateHip {
                        hip,
                        star: star.name.clone(),
                    });
                }
            }
        }
        tracing::debug!(stars = stars.len(), "indexed star catalog");
        Ok(Self {
            stars,
            by_name,
            by_hip,
        })
    }

    /// Look up a star by name, ignoring ASCII and Unicode case.
    pub fn get(&self, name: &str) -> Option<&CatalogStar> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.stars[i])
    }

    /// Like [`get`](Self::get), but a missing star is an error.
    pub fn require(&self, name: &str) -> Result<&CatalogStar, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::StarNotFound(name.to_string()))
    }

    /// Look up a star by Hipparcos number.
    pub fn by_hip(&self, hip: u32) -> Option<&CatalogStar> {
        self.by_hip.get(&hip).map(|&i| &self.stars[i])
    }

    /// Stars in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogStar> {
        self.stars.iter()
    }

    /// Stars of one group, in catalog order.
    pub fn group(&self, group: StarGroup) -> impl Iterator<Item = &CatalogStar> {
        self.stars.iter().filter(move |s| s.group == group)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "name,hip,group,designation,ra_hms,dec_dms,pm_ra_mas_yr,pm_dec_mas_yr,parallax_mas\n";

    fn parse(rows: &str) -> Result<StarCatalog, CatalogError> {
        StarCatalog::from_reader(format!("{HEADER}{rows}").as_bytes())
    }

    #[test]
    fn parses_minimal_row() {
        let cat = parse("Spica,65474,behenian,α Vir,13:25:11.58,-11:09:40.8,-42.50,-31.73,13.06\n")
            .unwrap();
        assert_eq!(cat.len(), 1);
        let s = cat.get("spica").unwrap();
        assert_eq!(s.hip, Some(65474));
        assert_eq!(s.group, StarGroup::Behenian);
        assert!((s.ra_deg - 201.298_25).abs() < 1e-6);
    }

    #[test]
    fn empty_hip_is_none() {
        let cat = parse("Nameless,,bright,x,01:00:00,+01:00:00,0,0,0\n").unwrap();
        assert_eq!(cat.get("Nameless").unwrap().hip, None);
    }

    #[test]
    fn duplicate_names_rejected() {
        let rows = "Vega,91262,behenian,α Lyr,18:36:56.34,+38:47:01.3,0,0,0\n\
                    VEGA,1,bright,x,18:36:56.34,+38:47:01.3,0,0,0\n";
        assert_eq!(
            parse(rows).unwrap_err(),
            CatalogError::DuplicateStar("VEGA".into())
        );
    }

    #[test]
    fn duplicate_hip_rejected() {
        let rows = "Spica,65474,behenian,α Vir,13:25:11.58,-11:09:40.8,0,0,0\n\
                    Azimech,65474,manzil,α Vir,13:25:11.58,-11:09:40.8,0,0,0\n";
        assert_eq!(
            parse(rows).unwrap_err(),
            CatalogError::DuplicateHip {
                hip: 65474,
                star: "Azimech".into()
            }
        );
    }

    #[test]
    fn stars_without_hip_coexist() {
        let rows = "A,,bright,x,01:00:00,+00:00:00,0,0,0\n\
                    B,,bright,x,02:00:00,+00:00:00,0,0,0\n";
        assert_eq!(parse(rows).unwrap().len(), 2);
    }

    #[test]
    fn bad_ra_rejected() {
        let err = parse("Bad,1,bright,x,25:00:00,+00:00:00,0,0,0\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField { field: "ra_hms", .. }
        ));
    }

    #[test]
    fn unknown_group_is_csv_error() {
        let err = parse("Bad,1,planet,x,01:00:00,+00:00:00,0,0,0\n").unwrap_err();
        assert!(matches!(err, CatalogError::Csv { .. }));
    }

    #[test]
    fn missing_column_is_csv_error() {
        let err = parse("Bad,1,bright,x,01:00:00\n").unwrap_err();
        assert!(matches!(err, CatalogError::Csv { .. }));
    }

    #[test]
    fn require_reports_name() {
        let cat = parse("").unwrap();
        assert!(cat.is_empty());
        assert_eq!(
            cat.require("Nowhere").unwrap_err(),
            CatalogError::StarNotFound("Nowhere".into())
        );
    }

    #[test]
    fn group_names_round_trip_through_csv() {
        let groups = [
            StarGroup::Behenian,
            StarGroup::Royal,
            StarGroup::Orion,
            StarGroup::Gemini,
            StarGroup::Bright,
            StarGroup::Active,
            StarGroup::Requested,
            StarGroup::Manzil,
            StarGroup::Xiu,
        ];
        for g in groups {
            let row = format!("S,1,{},x,01:00:00,+00:00:00,0,0,0\n", g.name());
            assert_eq!(parse(&row).unwrap().get("s").unwrap().group, g);
        }
    }
}
