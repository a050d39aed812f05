//! 命盤：四柱連同起運信息

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ganzhi::{Pillar, Polarity};
use super::luck::{self, CycleOnset, Gender, LuckCycle, LuckPeriod};
use super::moment::BirthMoment;
use super::pillars::FourPillars;
use super::solar_terms::{FIXED_TABLE, SolarTermProvider};

/// 命盤
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{BirthMoment, Chart, Direction, Gender};
///
/// let chart = Chart::compute(BirthMoment::new(1990, 1, 1, 8, 30), Gender::Male);
/// assert_eq!("己巳", chart.pillars.year.to_string());
/// assert_eq!(Direction::Backward, chart.onset.direction); // 陰男
/// assert_eq!(7, chart.onset.age);
/// assert_eq!("癸酉", chart.first_cycle.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub moment: BirthMoment,
    pub gender: Gender,
    pub pillars: FourPillars,
    /// 年干陰陽
    pub year_polarity: Polarity,
    pub onset: CycleOnset,
    /// 首步大運
    pub first_cycle: Pillar,
}

impl Chart {
    pub fn compute(moment: BirthMoment, gender: Gender) -> Self {
        Self::compute_with(&FIXED_TABLE, moment, gender)
    }

    pub fn compute_with<P: SolarTermProvider + ?Sized>(
        terms: &P,
        moment: BirthMoment,
        gender: Gender,
    ) -> Self {
        let pillars = FourPillars::compute_with(terms, moment);
        let age =
            luck::cycle_onset_age_with(terms, moment.year, moment.month, moment.day, gender);
        let direction = luck::cycle_direction(Some(pillars.year), gender);
        let first_cycle = luck::first_cycle_pillar(pillars.month, direction);
        debug!(%moment, ?gender, age, ?direction, %first_cycle, "computed chart");
        Self {
            moment,
            gender,
            pillars,
            year_polarity: pillars.year.stem().polarity(),
            onset: CycleOnset { age, direction },
            first_cycle,
        }
    }

    /// 排出 `count` 步大運
    pub fn luck_cycles(&self, count: usize) -> Vec<LuckCycle> {
        luck::luck_cycles(self.onset, self.first_cycle, count)
    }

    /// 虛歲 `age` 所行之運，童限或某步大運。
    pub fn luck_period(&self, age: u32) -> LuckPeriod {
        if age < self.onset.age {
            return LuckPeriod::Childhood;
        }
        let index = (age - self.onset.age) / luck::CYCLE_YEARS;
        LuckPeriod::Cycle(LuckCycle::nth(self.onset, self.first_cycle, index))
    }
}
