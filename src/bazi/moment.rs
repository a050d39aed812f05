//! 出生時刻

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::YearType;
use crate::error::BirthMomentError;

/// 出生時刻，公曆（前推格里曆）年月日時分。
///
/// [`BirthMoment::new`] 不作任何檢查，範圍外的輸入照算不誤，但結果無意義；
/// 調用方可改用 [`BirthMoment::checked`] 或 [`str::parse`] 先行驗證。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl BirthMoment {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// 同 [`new`](Self::new)，但檢查月、日（含大小月及閏年）、時、分是否在範圍內。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::bazi::BirthMoment;
    ///
    /// assert!(BirthMoment::checked(2024, 2, 29, 12, 0).is_ok());
    /// assert!(BirthMoment::checked(2023, 2, 29, 12, 0).is_err());
    /// ```
    pub fn checked(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
    ) -> Result<Self, BirthMomentError> {
        use BirthMomentError::*;
        let max_day = YearType::from_gregorian(year)
            .days_in_month(month)
            .ok_or(InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(InvalidDay {
                day,
                month,
                max_day,
            });
        }
        if !(0..=23).contains(&hour) {
            return Err(InvalidHour { hour });
        }
        if !(0..=59).contains(&minute) {
            return Err(InvalidMinute { minute });
        }
        Ok(Self::new(year, month, day, hour, minute))
    }
}

/// 解析 `YYYY-MM-DD HH:MM`，日期與時間之間亦可用 `T`。
///
/// ```
/// use sizhu::bazi::BirthMoment;
///
/// let m: BirthMoment = "1990-01-01 08:30".parse().unwrap();
/// assert_eq!(BirthMoment::new(1990, 1, 1, 8, 30), m);
/// ```
impl FromStr for BirthMoment {
    type Err = BirthMomentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BirthMomentError::Malformed(s.to_owned());
        let s = s.trim();
        let (date, time) = s.split_once([' ', 'T']).ok_or_else(malformed)?;
        // 自右切分，以容許負年份
        let mut ymd = date.rsplitn(3, '-');
        let (Some(d), Some(m), Some(y)) = (ymd.next(), ymd.next(), ymd.next()) else {
            return Err(malformed());
        };
        let (h, min) = time.trim().split_once(':').ok_or_else(malformed)?;
        let num = |v: &str| v.parse::<i32>().map_err(|_| malformed());
        Self::checked(num(y)?, num(m)?, num(d)?, num(h)?, num(min)?)
    }
}

impl fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
