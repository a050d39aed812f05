//! Error types for the sizhu crate.
//!
//! The pillar arithmetic itself is total and never fails. Errors only arise
//! at the edges: parsing pillar labels, validating caller input, and loading
//! solar-term tables.

use crate::bazi::SolarTerm;

/// Error returned when a text label is not one of the 60 sexagenary pillars.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePillarError {
    /// The label is not exactly two glyphs.
    #[error("pillar label must be two glyphs, got {len}")]
    Length {
        /// Number of glyphs found.
        len: usize,
    },

    /// The first glyph is not a heavenly stem.
    #[error("unknown stem {0:?}")]
    UnknownStem(char),

    /// The second glyph is not an earthly branch.
    #[error("unknown branch {0:?}")]
    UnknownBranch(char),

    /// Stem and branch are both valid but never pair in the 60-cycle.
    #[error("{stem}{branch} is not in the sexagenary cycle")]
    ParityMismatch {
        /// The stem glyph.
        stem: char,
        /// The branch glyph.
        branch: char,
    },
}

/// Error returned by the checked [`BirthMoment`](crate::bazi::BirthMoment)
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BirthMomentError {
    /// Month outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month.
        month: i32,
    },

    /// Day outside the length of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The rejected day.
        day: i32,
        /// Month the day was checked against.
        month: i32,
        /// Last day of that month in that year.
        max_day: i32,
    },

    /// Hour outside `0..=23`.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The rejected hour.
        hour: i32,
    },

    /// Minute outside `0..=59`.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The rejected minute.
        minute: i32,
    },

    /// Text that is not of the form `YYYY-MM-DD HH:MM`.
    #[error("malformed birth moment {0:?} (expected YYYY-MM-DD HH:MM)")]
    Malformed(String),
}

/// Error returned when loading a solar-term table from TOML.
#[derive(Debug, thiserror::Error)]
pub enum SolarTermTableError {
    /// The document is not valid TOML or does not have the table shape.
    #[error("failed to parse solar-term table: {0}")]
    Toml(#[from] toml::de::Error),

    /// A term was placed in a month other than the one its slot requires.
    #[error("{term:?} must fall in month {expected}, got {month}")]
    InvalidMonth {
        /// The offending term.
        term: SolarTerm,
        /// Month the term must fall in.
        expected: i32,
        /// Month given in the table.
        month: i32,
    },

    /// A term day outside `1..=31`.
    #[error("{term:?} has invalid day {day}")]
    InvalidDay {
        /// The offending term.
        term: SolarTerm,
        /// Day given in the table.
        day: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        for (std, err) in [
            (
                "pillar label must be two glyphs, got 3",
                ParsePillarError::Length { len: 3 },
            ),
            ("unknown stem 'x'", ParsePillarError::UnknownStem('x')),
            ("unknown branch '甲'", ParsePillarError::UnknownBranch('甲')),
            (
                "甲丑 is not in the sexagenary cycle",
                ParsePillarError::ParityMismatch {
                    stem: '甲',
                    branch: '丑',
                },
            ),
        ] {
            assert_eq!(std, err.to_string());
        }
    }

    #[test]
    fn birth_moment_messages() {
        assert_eq!(
            "invalid day: 30 for month 2 (max 29)",
            BirthMomentError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29
            }
            .to_string()
        );
        assert_eq!(
            "invalid minute: 60 (must be 0..=59)",
            BirthMomentError::InvalidMinute { minute: 60 }.to_string()
        );
    }

    #[test]
    fn table_messages() {
        let err = SolarTermTableError::InvalidMonth {
            term: SolarTerm::StartOfSpring,
            expected: 2,
            month: 3,
        };
        assert_eq!("StartOfSpring must fall in month 2, got 3", err.to_string());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ParsePillarError>();
        assert_impl::<BirthMomentError>();
        assert_impl::<SolarTermTableError>();
    }
}
