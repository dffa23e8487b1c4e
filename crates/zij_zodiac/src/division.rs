//! Equal sidereal divisions of the ecliptic and their tropical boundaries.
//!
//! A division splits the sidereal circle into `N` equal segments starting
//! at sidereal 0°. Each segment boundary is shifted by the ayanamsa to give
//! its tropical longitude. Star-defined divisions (the Chinese lodges) have
//! unequal spans and are handled by [`boundary_spans`].

use crate::util::normalize_360;

/// An equal N-fold division of the sidereal ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiderealDivision {
    count: u16,
}

/// One segment of a division, with both sidereal and tropical bounds.
///
/// Tropical bounds are normalized to [0, 360), so `tropical_end` may be
/// smaller than `tropical_start` for the segment that straddles 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// 0-based segment index.
    pub index: u16,
    /// Sidereal start, degrees.
    pub sidereal_start: f64,
    /// Sidereal end, degrees (360.0 for the last segment).
    pub sidereal_end: f64,
    /// Tropical start, degrees in [0, 360).
    pub tropical_start: f64,
    /// Tropical end, degrees in [0, 360).
    pub tropical_end: f64,
}

impl SiderealDivision {
    /// The 28 Arabic lunar mansions, 12°51′26″ each.
    pub const MANZIL: SiderealDivision = SiderealDivision { count: 28 };
    /// The 12 rāśi, 30° each.
    pub const RASHI: SiderealDivision = SiderealDivision { count: 12 };
    /// The 27 nakṣatra, 13°20′ each.
    pub const NAKSHATRA: SiderealDivision = SiderealDivision { count: 27 };

    /// A division into `count` segments, or `None` for zero.
    pub const fn new(count: u16) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(Self { count })
        }
    }

    /// Number of segments.
    pub const fn count(self) -> u16 {
        self.count
    }

    /// Width of every segment in degrees.
    pub fn width(self) -> f64 {
        360.0 / self.count as f64
    }

    /// Segment `index` (taken modulo `count`) under the given ayanamsa.
    pub fn segment(self, index: u16, ayanamsa_deg: f64) -> Segment {
        let index = index % self.count;
        let width = self.width();
        let sidereal_start = index as f64 * width;
        let sidereal_end = (index as f64 + 1.0) * width;
        Segment {
            index,
            sidereal_start,
            sidereal_end,
            tropical_start: normalize_360(sidereal_start + ayanamsa_deg),
            tropical_end: normalize_360(sidereal_end + ayanamsa_deg),
        }
    }

    /// All segments in order under the given ayanamsa.
    pub fn segments(self, ayanamsa_deg: f64) -> Vec<Segment> {
        (0..self.count)
            .map(|i| self.segment(i, ayanamsa_deg))
            .collect()
    }

    /// Index of the segment containing a sidereal longitude.
    pub fn segment_containing(self, sidereal_lon_deg: f64) -> u16 {
        let lon = normalize_360(sidereal_lon_deg);
        let idx = (lon / self.width()).floor() as u16;
        idx.min(self.count - 1)
    }
}

impl Segment {
    /// Angular width of the segment in degrees.
    pub fn width(&self) -> f64 {
        self.sidereal_end - self.sidereal_start
    }
}

/// Span from each boundary to the next, wrapping the last to the first.
///
/// `span_i = normalize_360(λ[(i+1) mod n] − λ[i])`. Boundaries need not be
/// equally spaced; if they are in increasing order around the circle the
/// spans sum to 360°. An empty input gives an empty result, and a single
/// boundary gives a zero span.
pub fn boundary_spans(boundaries_deg: &[f64]) -> Vec<f64> {
    let n = boundaries_deg.len();
    (0..n)
        .map(|i| normalize_360(boundaries_deg[(i + 1) % n] - boundaries_deg[i]))
        .collect()
}
