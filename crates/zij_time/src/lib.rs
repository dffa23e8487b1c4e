//! Time handling for the zij tables.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversion
//! - An `Epoch` type holding a Terrestrial Time (TT) Julian Date
//!
//! TT and TDB differ by at most ~1.7 ms, far below the arc-minute resolution
//! of the tables, so TT centuries are used wherever an IAU polynomial asks
//! for TDB.

pub mod error;
pub mod julian;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_YEAR, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
    jd_to_julian_years,
};

/// An instant on the TT time scale, stored as a Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    jd_tt: f64,
}

impl Epoch {
    /// The J2000.0 epoch.
    pub const J2000: Epoch = Epoch { jd_tt: J2000_JD };

    /// Create an epoch from a Julian Date in TT.
    pub fn from_jd_tt(jd_tt: f64) -> Self {
        Self { jd_tt }
    }

    /// Create an epoch from a TT calendar date and time of day.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDay { month, day });
        }
        if hour > 23 {
            return Err(TimeError::InvalidTimeOfDay("hour"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidTimeOfDay("minute"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTimeOfDay("second"));
        }
        let day_frac =
            day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0 + second / 86_400.0;
        Ok(Self::from_jd_tt(calendar_to_jd(year, month, day_frac)))
    }

    /// 0h TT on January 1st of `year`, the instant every table is computed for.
    pub fn new_year(year: i32) -> Self {
        Self::from_jd_tt(calendar_to_jd(year, 1, 1.0))
    }

    /// Julian Date in TT.
    pub fn as_jd_tt(self) -> f64 {
        self.jd_tt
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(self) -> f64 {
        jd_to_centuries(self.jd_tt)
    }

    /// Julian years since J2000.0.
    pub fn julian_years(self) -> f64 {
        jd_to_julian_years(self.jd_tt)
    }

    /// Decimal Julian epoch year, e.g. 2024.0 near the start of 2024.
    pub fn julian_epoch_year(self) -> f64 {
        2000.0 + self.julian_years()
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[.s]`, all TT.
impl FromStr for Epoch {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = |what: &str| TimeError::DateParse(format!("bad {what} in {s:?}"));
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let (negative, date) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date),
        };
        let parts: Vec<&str> = date.split('-').collect();
        if parts.len() != 3 {
            return Err(bad("date"));
        }
        let year: i32 = parts[0].parse().map_err(|_| bad("year"))?;
        let year = if negative { -year } else { year };
        let month: u32 = parts[1].parse().map_err(|_| bad("month"))?;
        let day: u32 = parts[2].parse().map_err(|_| bad("day"))?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let fields: Vec<&str> = t.split(':').collect();
                if !(2..=3).contains(&fields.len()) {
                    return Err(bad("time"));
                }
                let hour: u32 = fields[0].parse().map_err(|_| bad("hour"))?;
                let minute: u32 = fields[1].parse().map_err(|_| bad("minute"))?;
                let second: f64 = match fields.get(2) {
                    Some(f) => f.parse().map_err(|_| bad("second"))?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };
        Self::from_calendar(year, month, day, hour, minute, second)
    }
}

/// Formats as `YYYY-MM-DD hh:mm TT`, rounded to the minute.
impl Display for Epoch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // whole minutes since the JD day boundary at midnight
        let minutes = ((self.jd_tt + 0.5) * 1440.0).round() as i64;
        let (year, month, day) = jd_to_calendar(minutes.div_euclid(1440) as f64 - 0.5);
        let of_day = minutes.rem_euclid(1440);
        write!(
            f,
            "{year:04}-{month:02}-{:02} {:02}:{:02} TT",
            day.floor() as u32,
            of_day / 60,
            of_day % 60
        )
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_is_zero_centuries() {
        assert_eq!(Epoch::J2000.centuries(), 0.0);
    }

    #[test]
    fn new_year_matches_calendar() {
        let e = Epoch::new_year(2024);
        assert_eq!(e.as_jd_tt(), 2_460_310.5);
        assert!((e.julian_epoch_year() - 2023.9986).abs() < 1e-3);
    }

    #[test]
    fn from_calendar_noon() {
        let e = Epoch::from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(e, Epoch::J2000);
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            Epoch::from_calendar(2024, 13, 1, 0, 0, 0.0),
            Err(TimeError::InvalidMonth(13))
        );
    }

    #[test]
    fn rejects_feb_30() {
        assert!(Epoch::from_calendar(2024, 2, 30, 0, 0, 0.0).is_err());
        assert!(Epoch::from_calendar(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(Epoch::from_calendar(2023, 2, 29, 0, 0, 0.0).is_err());
    }

    #[test]
    fn parses_date_and_time() {
        let e: Epoch = "2000-01-01T12:00".parse().unwrap();
        assert_eq!(e, Epoch::J2000);
        let e: Epoch = "2024-01-01".parse().unwrap();
        assert_eq!(e, Epoch::new_year(2024));
        let e: Epoch = "2024-03-20 03:06:40".parse().unwrap();
        assert_eq!(e.to_string(), "2024-03-20 03:07 TT");
    }

    #[test]
    fn parse_goes_through_calendar_checks() {
        assert_eq!(
            "2023-02-29".parse::<Epoch>(),
            Err(TimeError::InvalidDay { month: 2, day: 29 })
        );
        assert_eq!(
            "2024-01-01T25:00".parse::<Epoch>(),
            Err(TimeError::InvalidTimeOfDay("hour"))
        );
        assert!(matches!(
            "2024/01/01".parse::<Epoch>(),
            Err(TimeError::DateParse(_))
        ));
        assert!(matches!(
            "2024-01-xx".parse::<Epoch>(),
            Err(TimeError::DateParse(_))
        ));
    }

    #[test]
    fn display_new_year() {
        assert_eq!(Epoch::new_year(2030).to_string(), "2030-01-01 00:00 TT");
        assert_eq!(Epoch::J2000.to_string(), "2000-01-01 12:00 TT");
    }

    #[test]
    fn display_rounds_into_next_day() {
        let e = Epoch::from_calendar(2024, 12, 31, 23, 59, 59.0).unwrap();
        assert_eq!(e.to_string(), "2025-01-01 00:00 TT");
    }

    #[test]
    fn rejects_bad_time_of_day() {
        assert_eq!(
            Epoch::from_calendar(2024, 1, 1, 24, 0, 0.0),
            Err(TimeError::InvalidTimeOfDay("hour"))
        );
        assert!(Epoch::from_calendar(2024, 1, 1, 0, 0, 60.0).is_err());
    }
}
