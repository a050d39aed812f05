//! 大運：起運歲數、順逆與各步大運
//!
//! 注意：本模塊沿用簡化算法。
//!
//! - 起運歲數按出生季節取基數，再依出生日與該季首節的「日」之差每十日加一歲，
//!   不計跨月日數，亦不論性別。
//! - 首步大運固定為月柱順推或逆推三位，而非依出生至交節的日數折算。

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::fmt;
use super::ganzhi::{Pillar, Polarity, Stem};
use super::solar_terms::{FIXED_TABLE, SolarTerm, SolarTermProvider};

/// 首步大運與月柱的距離
pub const FIRST_CYCLE_STEPS: i64 = 3;
/// 每步大運的年數
pub const CYCLE_YEARS: u32 = 10;
/// 預設排出的大運步數
pub const DEFAULT_CYCLE_COUNT: usize = 10;

/// 性別
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// 大運順逆
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// 每步在六十甲子中移動的位數，順行為 1，逆行為 -1。
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
    /// 「順行」或「逆行」
    pub fn name(self) -> &'static str {
        fmt::direction(self)
    }
}

/// 出生季節，以四立劃分。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// 起運歲數基數
    pub fn base_age(self) -> u32 {
        match self {
            Season::Spring => 1,
            Season::Summer => 3,
            Season::Autumn => 5,
            Season::Winter => 7,
        }
    }
    /// 季首之節
    pub fn opening_term(self) -> SolarTerm {
        match self {
            Season::Spring => SolarTerm::StartOfSpring,
            Season::Summer => SolarTerm::StartOfSummer,
            Season::Autumn => SolarTerm::StartOfAutumn,
            Season::Winter => SolarTerm::StartOfWinter,
        }
    }
}

/// 出生季節：立春前或立冬後（含當日）皆屬冬。
pub fn season_with<P: SolarTermProvider + ?Sized>(
    terms: &P,
    year: i32,
    month: i32,
    day: i32,
) -> Season {
    let reached = |s: Season| terms.term_date(year, s.opening_term()).reached_by(month, day);
    if !reached(Season::Spring) || reached(Season::Winter) {
        Season::Winter
    } else if !reached(Season::Summer) {
        Season::Spring
    } else if !reached(Season::Autumn) {
        Season::Summer
    } else {
        Season::Autumn
    }
}

/// 起運歲數（虛歲），`gender` 不影響結果。
pub fn cycle_onset_age_with<P: SolarTermProvider + ?Sized>(
    terms: &P,
    year: i32,
    month: i32,
    day: i32,
    _gender: Gender,
) -> u32 {
    let season = season_with(terms, year, month, day);
    let boundary = terms.term_date(year, season.opening_term());
    let diff = (day - boundary.day).unsigned_abs();
    trace!(year, month, day, ?season, diff);
    season.base_age() + diff / 10
}

/// 起運歲數
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{Gender, cycle_onset_age};
///
/// assert_eq!(1, cycle_onset_age(2000, 2, 4, Gender::Male));
/// assert_eq!(3, cycle_onset_age(2000, 4, 25, Gender::Female)); // 春，差 21 日
/// ```
pub fn cycle_onset_age(year: i32, month: i32, day: i32, gender: Gender) -> u32 {
    cycle_onset_age_with(&FIXED_TABLE, year, month, day, gender)
}

/// 大運順逆：陽男陰女順行，陰男陽女逆行。年柱未知則順行。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{Direction, Gender, cycle_direction};
///
/// let jia = "甲子".parse().ok();
/// assert_eq!(Direction::Forward, cycle_direction(jia, Gender::Male));
/// assert_eq!(Direction::Backward, cycle_direction(jia, Gender::Female));
/// assert_eq!(Direction::Forward, cycle_direction(None, Gender::Female));
/// ```
pub fn cycle_direction(year: Option<Pillar>, gender: Gender) -> Direction {
    match year {
        Some(year) => stem_direction(year.stem(), gender),
        None => Direction::Forward,
    }
}

/// 同 [`cycle_direction`]，年柱以文本給出，只看首字天干，單字天干亦可。
/// 空白或首字非天干者按未知處理，順行。
pub fn cycle_direction_for_label(label: &str, gender: Gender) -> Direction {
    let Some(first) = label.trim().chars().next() else {
        return Direction::Forward;
    };
    match Stem::from_char(first) {
        Some(stem) => stem_direction(stem, gender),
        None => {
            warn!(label, "unknown year stem, defaulting to forward");
            Direction::Forward
        }
    }
}

fn stem_direction(stem: Stem, gender: Gender) -> Direction {
    match (stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Direction::Forward,
        (Polarity::Yin, Gender::Male) | (Polarity::Yang, Gender::Female) => Direction::Backward,
    }
}

/// 首步大運
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{Direction, Pillar, first_cycle_pillar};
///
/// let month: Pillar = "丙寅".parse().unwrap();
/// assert_eq!("己巳", first_cycle_pillar(month, Direction::Forward).to_string());
/// assert_eq!("癸亥", first_cycle_pillar(month, Direction::Backward).to_string());
/// ```
pub fn first_cycle_pillar(month: Pillar, direction: Direction) -> Pillar {
    month.offset(FIRST_CYCLE_STEPS * direction.step())
}

/// 同 [`first_cycle_pillar`]，月柱以文本給出；不在六十甲子者返回 `None`。
pub fn first_cycle_pillar_for_label(label: &str, direction: Direction) -> Option<Pillar> {
    match label.parse::<Pillar>() {
        Ok(month) => Some(first_cycle_pillar(month, direction)),
        Err(e) => {
            warn!(label, error = %e, "unknown month pillar");
            None
        }
    }
}

/// 起運信息
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CycleOnset {
    pub age: u32,
    pub direction: Direction,
}

/// 一步大運，涵蓋虛歲 `start_age..=end_age`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LuckCycle {
    /// 第幾步，自 0 起
    pub index: u32,
    pub start_age: u32,
    pub end_age: u32,
    pub pillar: Pillar,
}

/// 排出自首步起的 `count` 步大運。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{CycleOnset, Direction, Pillar, luck_cycles};
///
/// let onset = CycleOnset { age: 3, direction: Direction::Forward };
/// let first: Pillar = "己巳".parse().unwrap();
/// let cycles = luck_cycles(onset, first, 2);
/// assert_eq!((3, 12, "己巳".to_owned()), (cycles[0].start_age, cycles[0].end_age, cycles[0].pillar.to_string()));
/// assert_eq!((13, 22, "庚午".to_owned()), (cycles[1].start_age, cycles[1].end_age, cycles[1].pillar.to_string()));
/// ```
pub fn luck_cycles(onset: CycleOnset, first: Pillar, count: usize) -> Vec<LuckCycle> {
    (0u32..)
        .take(count)
        .map(|i| LuckCycle::nth(onset, first, i))
        .collect()
}

impl LuckCycle {
    /// 自首步 `first` 起的第 `index` 步。歲數在 `u32::MAX` 處飽和。
    pub fn nth(onset: CycleOnset, first: Pillar, index: u32) -> Self {
        let start_age = onset.age.saturating_add(index.saturating_mul(CYCLE_YEARS));
        LuckCycle {
            index,
            start_age,
            end_age: start_age.saturating_add(CYCLE_YEARS - 1),
            pillar: first.offset(i64::from(index) * onset.direction.step()),
        }
    }
}

/// 某一歲所行之運
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LuckPeriod {
    /// 起運前的「童限」
    Childhood,
    Cycle(LuckCycle),
}

impl LuckPeriod {
    /// 在已排出的 `cycles` 中查找虛歲 `age` 所在之運；超出所排範圍則返回 `None`。
    pub fn for_age(cycles: &[LuckCycle], age: u32) -> Option<Self> {
        let first = cycles.first()?;
        if age < first.start_age {
            return Some(LuckPeriod::Childhood);
        }
        cycles
            .iter()
            .find(|c| (c.start_age..=c.end_age).contains(&age))
            .map(|&c| LuckPeriod::Cycle(c))
    }
}
