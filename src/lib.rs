//! Four-pillar (Bazi) charts from Gregorian birth moments.
//!
//! Converts a birth date and time into the year, month, day and hour pillars
//! of the Chinese sexagenary cycle, and derives the decade-cycle onset age,
//! its direction and the first decade-cycle pillar.
//!
//! Solar terms come from a fixed month/day table shared by every year rather
//! than from astronomical data, so dates within a day of a term boundary may
//! land on the wrong side of it. A more precise source can be plugged in
//! through [`bazi::SolarTermProvider`].
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use sizhu::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1);
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!("2000-01-02", (date + 1).iso_gregorian());
//! ```
//!
//! Four pillars and a full chart:
//!
//! ```
//! use sizhu::bazi::{BirthMoment, Chart, Gender};
//!
//! let moment: BirthMoment = "1990-01-01 08:30".parse().unwrap();
//! let chart = Chart::compute(moment, Gender::Female);
//!
//! assert_eq!("己巳 丙子 壬辰 甲辰", chart.pillars.to_string());
//! assert_eq!("己卯", chart.first_cycle.to_string());
//! ```
//!
//! Nothing here validates calendar fields unless asked to: the pillar
//! functions accept any integers and out-of-range input yields meaningless
//! but well-defined pillars. Use [`bazi::BirthMoment::checked`] to validate
//! first.

pub mod bazi;
pub mod date;
pub mod error;

pub use date::{Date, YearType};
pub use error::{BirthMomentError, ParsePillarError, SolarTermTableError};
