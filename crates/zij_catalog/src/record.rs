//! CSV row layout and sexagesimal field parsing.

use serde::Deserialize;

use crate::catalog::{CatalogStar, StarGroup};
use crate::error::CatalogError;

/// One row of the catalog CSV, as written on disk.
///
/// Right ascension and declination are sexagesimal strings at J2000.0 (ICRS).
/// `pm_ra_mas_yr` is μα·cos δ. An empty `hip` cell means no Hipparcos entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StarRecord {
    pub name: String,
    pub hip: Option<u32>,
    pub group: StarGroup,
    pub designation: String,
    pub ra_hms: String,
    pub dec_dms: String,
    pub pm_ra_mas_yr: f64,
    pub pm_dec_mas_yr: f64,
    pub parallax_mas: f64,
}

impl StarRecord {
    /// Validate the row and convert it to degrees.
    pub(crate) fn into_star(self) -> Result<CatalogStar, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::InvalidField {
                star: String::new(),
                field: "name",
                value: self.name,
            });
        }
        let invalid = |field: &'static str, value: &str| CatalogError::InvalidField {
            star: name.clone(),
            field,
            value: value.to_string(),
        };

        let ra_hours = parse_hms(&self.ra_hms).ok_or_else(|| invalid("ra_hms", &self.ra_hms))?;
        let dec_deg = parse_dms(&self.dec_dms).ok_or_else(|| invalid("dec_dms", &self.dec_dms))?;
        for (field, v) in [
            ("pm_ra_mas_yr", self.pm_ra_mas_yr),
            ("pm_dec_mas_yr", self.pm_dec_mas_yr),
            ("parallax_mas", self.parallax_mas),
        ] {
            if !v.is_finite() {
                return Err(invalid(field, &v.to_string()));
            }
        }

        Ok(CatalogStar {
            name,
            hip: self.hip,
            group: self.group,
            designation: self.designation.trim().to_string(),
            ra_deg: ra_hours * 15.0,
            dec_deg,
            pm_ra_mas_yr: self.pm_ra_mas_yr,
            pm_dec_mas_yr: self.pm_dec_mas_yr,
            parallax_mas: self.parallax_mas,
        })
    }
}

/// Split `a:b:c` into a whole first field, whole minutes and decimal seconds.
fn split_sexagesimal(s: &str) -> Option<(u32, u32, f64)> {
    let mut parts = s.split(':');
    let a = parts.next()?.trim().parse::<u32>().ok()?;
    let b = parts.next()?.trim().parse::<u32>().ok()?;
    let c = parts.next()?.trim().parse::<f64>().ok()?;
    if parts.next().is_some() || b >= 60 || !(0.0..60.0).contains(&c) {
        return None;
    }
    Some((a, b, c))
}

/// Parse `hh:mm:ss.s` into decimal hours in [0, 24).
pub fn parse_hms(s: &str) -> Option<f64> {
    let (h, m, sec) = split_sexagesimal(s.trim())?;
    if h >= 24 {
        return None;
    }
    Some(h as f64 + m as f64 / 60.0 + sec / 3600.0)
}

/// Parse `±dd:mm:ss.s` into decimal degrees in [−90, 90].
///
/// The sign applies to the whole value, so `-00:19:11.5` is negative.
pub fn parse_dms(s: &str) -> Option<f64> {
    let s = s.trim();
    let (negative, body) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (d, m, sec) = split_sexagesimal(body)?;
    let value = d as f64 + m as f64 / 60.0 + sec / 3600.0;
    if value > 90.0 {
        return None;
    }
    Some(if negative { -value } else { value })
}
