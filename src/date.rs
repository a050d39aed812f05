//! Calendar-independant date.

use std::ops::{Add, Sub};

/// A calendar-independant date.
///
/// Backed by a signed Julian day number, so every proleptic Gregorian date is
/// representable, including those before the JDN epoch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i64,
}

/// Days between the JDN epoch and 0000-03-01, proleptic Gregorian.
const MARCH_EPOCH: i64 = 1721120;
/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146097;

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i64) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i64 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// `day` is not checked against the length of `month`; an overflowing day
    /// simply counts on into the following month.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        let (m, d) = (i64::from(month), i64::from(day));
        // Years start in March so the leap day closes the year.
        let y = i64::from(year) - i64::from(m <= 2);
        let era = y.div_euclid(400);
        let yoe = y.rem_euclid(400);
        let mp = (m + 9).rem_euclid(12);
        let doy = (153 * mp + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        Self::from_jdn(era * DAYS_PER_ERA + doe + MARCH_EPOCH)
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let z = self.jdn - MARCH_EPOCH;
        let era = z.div_euclid(DAYS_PER_ERA);
        let doe = z.rem_euclid(DAYS_PER_ERA);
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = era * 400 + yoe + i64::from(month <= 2);
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`), or `None` for any other month.
    ///
    /// ```
    /// use sizhu::YearType;
    ///
    /// assert_eq!(Some(29), YearType::Leap.days_in_month(2));
    /// assert_eq!(Some(28), YearType::Common.days_in_month(2));
    /// assert_eq!(None, YearType::Common.days_in_month(13));
    /// ```
    pub fn days_in_month(&self, month: i32) -> Option<i32> {
        Some(match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 28 + self.is_leap() as i32,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1);
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8);
        assert_eq!(2459466, date.jdn());
        let date = Date::from_gregorian(1900, 1, 1);
        assert_eq!(2415021, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn before_epoch() {
        // 4714-11-24 BC, proleptic Gregorian, is JDN 0.
        let date = Date::from_gregorian(-4713, 11, 24);
        assert_eq!(0, date.jdn());
        let date = Date::from_jdn(-1);
        assert_eq!((-4713, 11, 23), date.gregorian());
    }

    #[test]
    fn century_leap_rule() {
        for (y, days) in [(1900, 365), (2000, 366), (2100, 365), (2024, 366), (2023, 365)] {
            let len = Date::from_gregorian(y + 1, 1, 1) - Date::from_gregorian(y, 1, 1);
            assert_eq!(days, len, "{y}");
        }
    }

    #[test]
    fn overflowing_day() {
        assert_eq!(
            Date::from_gregorian(2023, 3, 1),
            Date::from_gregorian(2023, 2, 29)
        );
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 2, 28);
        assert_eq!("2024-02-29", (date + 1).iso_gregorian());
        assert_eq!("2024-03-01", (date + 2).iso_gregorian());
        assert_eq!("2023-12-31", (Date::from_gregorian(2024, 1, 1) + -1).iso_gregorian());
        assert_eq!(
            32872,
            Date::from_gregorian(1990, 1, 1) - Date::from_gregorian(1900, 1, 1)
        );
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).iso_gregorian()
        );
    }

    #[test]
    fn month_lengths() {
        use YearType::*;
        let total: i32 = (1..=12).filter_map(|m| Leap.days_in_month(m)).sum();
        assert_eq!(366, total);
        let total: i32 = (1..=12).filter_map(|m| Common.days_in_month(m)).sum();
        assert_eq!(365, total);
        assert_eq!(None, Common.days_in_month(0));
    }
}
