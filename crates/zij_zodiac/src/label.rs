//! Sign/degree/minute labels for ecliptic longitudes.
//!
//! A label rounds the position within its sign to the nearest arc-minute.
//! Rounding may carry: 59.5′ becomes the next degree, and 29°59.5′ becomes
//! 0°00′ of the following sign, so every label names a real point of the
//! sign it shows.

use std::fmt::{Display, Formatter};

use crate::sign::Sign;
use crate::util::normalize_360;

/// A tropical position rounded to the arc-minute, e.g. `25°04' Aries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZodiacLabel {
    /// The sign containing the rounded position.
    pub sign: Sign,
    /// Whole degrees within the sign, 0..=29.
    pub degrees: u8,
    /// Arc-minutes, 0..=59.
    pub minutes: u8,
}

impl ZodiacLabel {
    /// 0-based sign index (Aries = 0).
    pub const fn sign_index(&self) -> u8 {
        self.sign.index()
    }

    /// Longitude in degrees represented by the label, in [0, 360).
    pub fn to_degrees(&self) -> f64 {
        self.sign.start_longitude() + self.degrees as f64 + self.minutes as f64 / 60.0
    }
}

impl Display for ZodiacLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!(
            "{:02}°{:02}' {}",
            self.degrees,
            self.minutes,
            self.sign.name()
        ))
    }
}

/// Label an ecliptic longitude in degrees.
///
/// Any finite input is accepted and reduced modulo 360. Non-finite input
/// yields `00°00' Aries`.
pub fn zodiac_label(lon_deg: f64) -> ZodiacLabel {
    let lon = if lon_deg.is_finite() {
        normalize_360(lon_deg)
    } else {
        0.0
    };
    let sign_idx = ((lon / 30.0).floor() as u8).min(11);
    let remainder = lon - sign_idx as f64 * 30.0;
    let mut degrees = remainder.floor() as u8;
    let mut minutes = ((remainder - degrees as f64) * 60.0 + 0.5).floor() as u8;
    let mut sign = Sign::from_index(sign_idx);

    if minutes >= 60 {
        degrees += 1;
        minutes = 0;
    }
    if degrees >= 30 {
        degrees = 0;
        sign = sign.next();
    }

    ZodiacLabel {
        sign,
        degrees,
        minutes,
    }
}

/// An unsigned angle rounded to the nearest arc-minute, printed `DD°MM'`.
///
/// Used for ayanamsa values and mansion spans, which are not positions in
/// a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegMin {
    /// True when the source angle was negative.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u32,
    /// Arc-minutes, 0..=59.
    pub minutes: u8,
}

impl DegMin {
    /// Round `deg` to the nearest arc-minute, carrying into degrees.
    pub fn from_degrees(deg: f64) -> Self {
        let total = (deg.abs() * 60.0).round();
        let total = if total.is_finite() { total as u64 } else { 0 };
        Self {
            negative: deg < 0.0 && total > 0,
            degrees: (total / 60) as u32,
            minutes: (total % 60) as u8,
        }
    }

    /// Decimal degrees represented by the rounded value.
    pub fn to_degrees(&self) -> f64 {
        let v = self.degrees as f64 + self.minutes as f64 / 60.0;
        if self.negative { -v } else { v }
    }
}

impl Display for DegMin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        f.pad(&format!("{sign}{:02}°{:02}'", self.degrees, self.minutes))
    }
}

/// Degrees, arc-minutes and arc-seconds (tenths), printed `DD°MM'SS.S"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u32,
    /// Arc-minutes, 0..=59.
    pub minutes: u8,
    /// Arc-seconds rounded to 0.1, in [0.0, 60.0).
    pub seconds: f64,
}

/// Convert decimal degrees to DMS, rounding to a tenth of an arc-second.
///
/// Negative input is treated by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let tenths = (deg.abs() * 36_000.0).round();
    let tenths = if tenths.is_finite() { tenths as u64 } else { 0 };
    Dms {
        degrees: (tenths / 36_000) as u32,
        minutes: ((tenths / 600) % 60) as u8,
        seconds: (tenths % 600) as f64 / 10.0,
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!(
            "{}°{:02}'{:04.1}\"",
            self.degrees, self.minutes, self.seconds
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aries_start() {
        let l = zodiac_label(0.0);
        assert_eq!(l.sign, Sign::Aries);
        assert_eq!((l.degrees, l.minutes), (0, 0));
        assert_eq!(l.to_string(), "00°00' Aries");
    }

    #[test]
    fn mid_sign() {
        let l = zodiac_label(45.5);
        assert_eq!(l.sign, Sign::Taurus);
        assert_eq!((l.degrees, l.minutes), (15, 30));
    }

    #[test]
    fn minutes_round_half_up() {
        // 10°00'30" rounds up to 10°01'
        let l = zodiac_label(10.0 + 30.0 / 3600.0 + 1e-9);
        assert_eq!((l.degrees, l.minutes), (10, 1));
        let l = zodiac_label(10.0 + 29.0 / 3600.0);
        assert_eq!((l.degrees, l.minutes), (10, 0));
    }

    #[test]
    fn minute_carry_into_degree() {
        let l = zodiac_label(12.0 - 10.0 / 3600.0);
        assert_eq!(l.sign, Sign::Aries);
        assert_eq!((l.degrees, l.minutes), (12, 0));
    }

    #[test]
    fn degree_carry_into_next_sign() {
        let l = zodiac_label(29.9999);
        assert_eq!(l.sign, Sign::Taurus);
        assert_eq!((l.degrees, l.minutes), (0, 0));
        assert_eq!(l.to_string(), "00°00' Taurus");
    }

    #[test]
    fn pisces_carries_into_aries() {
        let l = zodiac_label(359.9999);
        assert_eq!(l.sign, Sign::Aries);
        assert_eq!((l.degrees, l.minutes), (0, 0));
    }

    #[test]
    fn negative_and_large_inputs() {
        assert_eq!(zodiac_label(-10.0), zodiac_label(350.0));
        assert_eq!(zodiac_label(725.0), zodiac_label(5.0));
    }

    #[test]
    fn non_finite_is_aries() {
        assert_eq!(zodiac_label(f64::NAN), zodiac_label(0.0));
        assert_eq!(zodiac_label(f64::INFINITY), zodiac_label(0.0));
    }

    #[test]
    fn display_respects_padding() {
        let s = format!("[{:<16}]", zodiac_label(37.857_143));
        assert_eq!(s, "[07°51' Taurus   ]");
    }

    #[test]
    fn degmin_rounding() {
        let d = DegMin::from_degrees(25.0 + 5.0 * 50.29 / 3600.0);
        assert_eq!(d.to_string(), "25°04'");
        let d = DegMin::from_degrees(12.999_99);
        assert_eq!((d.degrees, d.minutes), (13, 0));
    }

    #[test]
    fn degmin_negative() {
        let d = DegMin::from_degrees(-0.75);
        assert!(d.negative);
        assert_eq!(d.to_string(), "-00°45'");
        assert!(!DegMin::from_degrees(-0.001).negative);
    }

    #[test]
    fn dms_obliquity() {
        // 23.435390° = 23°26'07.4"
        let d = deg_to_dms(23.435_39);
        assert_eq!((d.degrees, d.minutes), (23, 26));
        assert!((d.seconds - 7.4).abs() < 1e-9);
        assert_eq!(d.to_string(), "23°26'07.4\"");
    }

    #[test]
    fn dms_seconds_carry() {
        let d = deg_to_dms(10.0 - 0.01 / 3600.0);
        assert_eq!((d.degrees, d.minutes), (10, 0));
        assert_eq!(d.seconds, 0.0);
    }
}
