//! The seam between table generators and whatever supplies star positions.

use zij_time::Epoch;

use crate::astrometry::{StarPosition, position_of_date};
use crate::catalog::StarCatalog;
use crate::error::CatalogError;

/// Anything that can place a named star on the sky at an epoch.
///
/// The bundled [`StarCatalog`] implements this; tests substitute fixed
/// positions.
pub trait StarEphemeris {
    /// Position of date of the star called `name`.
    ///
    /// Unknown names yield [`CatalogError::StarNotFound`].
    fn position(&self, name: &str, epoch: Epoch) -> Result<StarPosition, CatalogError>;
}

impl StarEphemeris for StarCatalog {
    fn position(&self, name: &str, epoch: Epoch) -> Result<StarPosition, CatalogError> {
        let star = self.require(name)?;
        let pos = position_of_date(star, epoch);
        tracing::trace!(
            star = star.name.as_str(),
            jd_tt = epoch.as_jd_tt(),
            lon = pos.ecl_lon_deg,
            "star position of date"
        );
        Ok(pos)
    }
}

impl<T: StarEphemeris + ?Sized> StarEphemeris for &T {
    fn position(&self, name: &str, epoch: Epoch) -> Result<StarPosition, CatalogError> {
        (**self).position(name, epoch)
    }
}
