//! 八字四柱
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊依公曆出生時刻排出年、月、日、時四柱，並推算起運歲數、大運順逆與首步大運。
//!
//! 節氣採用固定的近似月日（見 [`solar_terms`]），不作天文計算，
//! 亦不考慮時區、閏秒及曆法改革；全部計算皆為純函數，可在多線程中自由調用。
//!
//! # 用例
//!
//! ```
//! use sizhu::bazi::{self, Gender};
//!
//! let p = bazi::pillars(1990, 1, 1, 8, 30);
//! assert_eq!("己巳 丙子 壬辰 甲辰", p.to_string());
//!
//! let age = bazi::cycle_onset_age(1990, 1, 1, Gender::Male);
//! let dir = bazi::cycle_direction(Some(p.year), Gender::Male);
//! let first = bazi::first_cycle_pillar(p.month, dir);
//! assert_eq!((7, "逆行", "癸酉".to_owned()), (age, dir.name(), first.to_string()));
//! ```

mod chart;
pub mod fmt;
mod ganzhi;
mod luck;
mod moment;
mod pillars;
pub mod solar_terms;

pub use chart::Chart;
pub use ganzhi::{Branch, Pillar, Polarity, SEXAGENARY, Stem, pillar_at};
pub use luck::{
    CYCLE_YEARS, CycleOnset, DEFAULT_CYCLE_COUNT, Direction, FIRST_CYCLE_STEPS, Gender, LuckCycle,
    LuckPeriod, Season, cycle_direction, cycle_direction_for_label, cycle_onset_age,
    cycle_onset_age_with, first_cycle_pillar, first_cycle_pillar_for_label, luck_cycles,
    season_with,
};
pub use moment::BirthMoment;
pub use pillars::{
    ANCHOR_DATE, ANCHOR_INDEX, ANCHOR_YEAR, FourPillars, day_count, day_pillar, double_hour,
    effective_year_with, hour_pillar, month_pillar, month_pillar_with, month_slot_with, pillars,
    year_pillar, year_pillar_with,
};
pub use solar_terms::{FIXED_TABLE, SolarTerm, SolarTermProvider, SolarTermTable, TermDate};
