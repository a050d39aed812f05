//! 四柱：年柱、月柱、日柱、時柱
//!
//! 各函數皆為純函數，輸入範圍外的月日時亦照常計算，不作檢查。
//! 帶 `_with` 後綴者可指定節氣數據，其餘使用 [`FIXED_TABLE`]。

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::ganzhi::{Pillar, pillar_at};
use super::moment::BirthMoment;
use super::solar_terms::{FIXED_TABLE, SolarTerm, SolarTermProvider};
use crate::date::Date;

/// 年柱起算年，該年為庚子年。
pub const ANCHOR_YEAR: i32 = 1900;
/// 1900 年 1 月 1 日，日柱起算日。
pub const ANCHOR_DATE: (i32, i32, i32) = (1900, 1, 1);
/// 起算年、起算日的六十甲子序號。
pub const ANCHOR_INDEX: i64 = 36;

/// 四柱
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{BirthMoment, FourPillars};
///
/// let p = FourPillars::compute(BirthMoment::new(1990, 1, 1, 8, 30));
/// assert_eq!("己巳", p.year.to_string());
/// assert_eq!("丙子", p.month.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn compute(moment: BirthMoment) -> Self {
        Self::compute_with(&FIXED_TABLE, moment)
    }

    /// 依次計算年、月、日、時四柱：月柱依年干，時柱依日干。
    pub fn compute_with<P: SolarTermProvider + ?Sized>(terms: &P, moment: BirthMoment) -> Self {
        let BirthMoment {
            year: y,
            month: m,
            day: d,
            hour,
            minute,
        } = moment;
        let year = year_pillar_with(terms, y, m, d);
        let month = month_pillar_with(terms, y, m, d);
        let day = day_pillar(y, m, d);
        let hour = hour_pillar(day, hour, minute);
        let rt = Self {
            year,
            month,
            day,
            hour,
        };
        debug!(%moment, pillars = %rt, "computed four pillars");
        rt
    }

    /// 依年、月、日、時排列
    pub fn to_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// 取得四柱，參數依次為公曆年、月、日、時、分。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::pillars;
///
/// let p = pillars(1990, 1, 1, 8, 30);
/// assert_eq!("甲辰", p.hour.to_string());
/// ```
pub fn pillars(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> FourPillars {
    FourPillars::compute(BirthMoment::new(year, month, day, hour, minute))
}

/// 以立春為歲首的干支紀年：立春前屬上一年。
pub fn effective_year_with<P: SolarTermProvider + ?Sized>(
    terms: &P,
    year: i32,
    month: i32,
    day: i32,
) -> i32 {
    let lichun = terms.term_date(year, SolarTerm::StartOfSpring);
    if lichun.reached_by(month, day) {
        year
    } else {
        year - 1
    }
}

pub fn year_pillar_with<P: SolarTermProvider + ?Sized>(
    terms: &P,
    year: i32,
    month: i32,
    day: i32,
) -> Pillar {
    let y = effective_year_with(terms, year, month, day);
    trace!(year, month, day, effective_year = y);
    pillar_at(ANCHOR_INDEX + i64::from(y) - i64::from(ANCHOR_YEAR))
}

/// 年柱
///
/// # 用例
///
/// ```
/// use sizhu::bazi::year_pillar;
///
/// assert_eq!("己亥", year_pillar(2020, 2, 3).to_string());
/// assert_eq!("庚子", year_pillar(2020, 2, 4).to_string());
/// ```
pub fn year_pillar(year: i32, month: i32, day: i32) -> Pillar {
    year_pillar_with(&FIXED_TABLE, year, month, day)
}

/// 月序，`0..12`，0 為立春起的寅月，11 為小寒起的丑月。
///
/// 公曆每月恰含一節：已交該節則屬該節所起之月，否則屬前一月。
/// 一月例外，以立春之「日」為界：該日及以後屬丑月，之前屬子月。
pub fn month_slot_with<P: SolarTermProvider + ?Sized>(
    terms: &P,
    year: i32,
    month: i32,
    day: i32,
) -> u32 {
    let term = SolarTerm::in_month(month);
    let opens = (term.slot() as i32 - 1).rem_euclid(12);
    let reached = if term == SolarTerm::MinorCold {
        day >= terms.term_date(year, SolarTerm::StartOfSpring).day
    } else {
        terms.term_date(year, term).reached_by(month, day)
    };
    let slot = if reached {
        opens
    } else {
        (opens - 1).rem_euclid(12)
    };
    trace!(year, month, day, ?term, slot);
    slot as u32
}

pub fn month_pillar_with<P: SolarTermProvider + ?Sized>(
    terms: &P,
    year: i32,
    month: i32,
    day: i32,
) -> Pillar {
    let slot = i64::from(month_slot_with(terms, year, month, day));
    let year_stem = i64::from(year_pillar_with(terms, year, month, day).stem().index());
    // 甲己之年丙作首：寅月天干為年干兩倍加二
    let stem = year_stem * 2 + slot + 2;
    let branch = slot + 2;
    pillar_at(6 * stem - 5 * branch)
}

/// 月柱
///
/// # 用例
///
/// ```
/// use sizhu::bazi::month_pillar;
///
/// assert_eq!("戊寅", month_pillar(2020, 2, 4).to_string());
/// assert_eq!("丁丑", month_pillar(2020, 2, 3).to_string());
/// ```
pub fn month_pillar(year: i32, month: i32, day: i32) -> Pillar {
    month_pillar_with(&FIXED_TABLE, year, month, day)
}

/// 自 1900 年 1 月 1 日起的日數，之前為負。
pub fn day_count(year: i32, month: i32, day: i32) -> i64 {
    let (y, m, d) = ANCHOR_DATE;
    Date::from_gregorian(year, month, day) - Date::from_gregorian(y, m, d)
}

/// 日柱
///
/// # 用例
///
/// ```
/// use sizhu::bazi::day_pillar;
///
/// assert_eq!(36, day_pillar(1900, 1, 1).index());
/// assert_eq!(35, day_pillar(1899, 12, 31).index());
/// ```
pub fn day_pillar(year: i32, month: i32, day: i32) -> Pillar {
    let days = day_count(year, month, day);
    trace!(year, month, day, days);
    pillar_at(ANCHOR_INDEX + days)
}

/// 時辰序號，`0..12`：23 時與 0 時為子（0），1、2 時為丑（1），餘類推。
pub fn double_hour(hour: i32) -> u32 {
    match hour {
        23 | 0 => 0,
        1 => 1,
        h => (h + 1).div_euclid(2).rem_euclid(12) as u32,
    }
}

/// 時柱，依日干起時干（甲己還加甲）。分鐘不影響結果。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{day_pillar, hour_pillar};
///
/// let day = day_pillar(1990, 1, 1);
/// assert_eq!(hour_pillar(day, 23, 0), hour_pillar(day, 0, 0));
/// ```
pub fn hour_pillar(day: Pillar, hour: i32, minute: i32) -> Pillar {
    let slot = i64::from(double_hour(hour));
    let day_stem = i64::from(day.stem().index());
    trace!(hour, minute, slot);
    let stem = day_stem * 2 + slot;
    pillar_at(6 * stem - 5 * slot)
}
