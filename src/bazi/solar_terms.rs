//! 節氣日期表
//!
//! 本程序僅用十二「節」劃分月份，且每節取固定的公曆月日，不隨年份變動。
//! 實際交節日期每年可差一日左右，臨界日期的結果因此可能有誤。
//!
//! 如需更精確的數據，可實現 [`SolarTermProvider`] 並傳入各 `*_with` 函數。

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fmt;
use crate::error::SolarTermTableError;

/// 十二「節」，依公曆月份排列，[`MinorCold`](Self::MinorCold)（小寒）在一月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    MinorCold,
    StartOfSpring,
    AwakeningOfInsects,
    PureBrightness,
    StartOfSummer,
    GrainInEar,
    MinorHeat,
    StartOfAutumn,
    WhiteDew,
    ColdDew,
    StartOfWinter,
    MajorSnow,
}

impl SolarTerm {
    /// 全部十二節，第 `i` 項在公曆 `i + 1` 月。
    pub const ALL: [SolarTerm; 12] = [
        SolarTerm::MinorCold,
        SolarTerm::StartOfSpring,
        SolarTerm::AwakeningOfInsects,
        SolarTerm::PureBrightness,
        SolarTerm::StartOfSummer,
        SolarTerm::GrainInEar,
        SolarTerm::MinorHeat,
        SolarTerm::StartOfAutumn,
        SolarTerm::WhiteDew,
        SolarTerm::ColdDew,
        SolarTerm::StartOfWinter,
        SolarTerm::MajorSnow,
    ];

    /// 表中位置，`0..12`
    pub fn slot(self) -> usize {
        self as usize
    }
    /// 交節所在公曆月份
    pub fn month(self) -> i32 {
        self as i32 + 1
    }
    /// 取得公曆 `month` 月內的節，按 12 取模。
    pub fn in_month(month: i32) -> Self {
        Self::ALL[(month - 1).rem_euclid(12) as usize]
    }
    /// 名稱，如「立春」
    pub fn name(self) -> &'static str {
        fmt::solar_term(self)
    }
}

/// 公曆月日
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermDate {
    pub month: i32,
    pub day: i32,
}

impl TermDate {
    pub const fn new(month: i32, day: i32) -> Self {
        Self { month, day }
    }
    /// 公曆 `month` 月 `day` 日是否已到交節日（含當日）。
    pub fn reached_by(&self, month: i32, day: i32) -> bool {
        (month, day) >= (self.month, self.day)
    }
}

/// 提供某年某節的交節日期。
pub trait SolarTermProvider {
    fn term_date(&self, year: i32, term: SolarTerm) -> TermDate;
}

/// 與年份無關的固定節氣表。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{SolarTerm, SolarTermProvider, SolarTermTable, TermDate};
///
/// let table = SolarTermTable::default();
/// assert_eq!(TermDate::new(2, 4), table.term_date(1990, SolarTerm::StartOfSpring));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SolarTermTable {
    dates: [TermDate; 12],
}

/// 預設節氣表
pub const FIXED_TABLE: SolarTermTable = SolarTermTable {
    dates: [
        TermDate::new(1, 6),
        TermDate::new(2, 4),
        TermDate::new(3, 6),
        TermDate::new(4, 5),
        TermDate::new(5, 6),
        TermDate::new(6, 6),
        TermDate::new(7, 7),
        TermDate::new(8, 8),
        TermDate::new(9, 8),
        TermDate::new(10, 8),
        TermDate::new(11, 7),
        TermDate::new(12, 7),
    ],
};

impl Default for SolarTermTable {
    fn default() -> Self {
        FIXED_TABLE
    }
}

impl SolarTermProvider for SolarTermTable {
    fn term_date(&self, _year: i32, term: SolarTerm) -> TermDate {
        self.dates[term.slot()]
    }
}

/// TOML 文檔結構，鍵為各節拼音。
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    terms: RawTerms,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTerms {
    xiaohan: TermDate,
    lichun: TermDate,
    jingzhe: TermDate,
    qingming: TermDate,
    lixia: TermDate,
    mangzhong: TermDate,
    xiaoshu: TermDate,
    liqiu: TermDate,
    bailu: TermDate,
    hanlu: TermDate,
    lidong: TermDate,
    daxue: TermDate,
}

impl SolarTermTable {
    /// 自 TOML 文本讀入節氣表，十二節須全部給出，且各節須在其所屬月份。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::bazi::{SolarTerm, SolarTermProvider, SolarTermTable, TermDate};
    ///
    /// let doc = r#"
    /// [terms]
    /// xiaohan = { month = 1, day = 5 }
    /// lichun = { month = 2, day = 4 }
    /// jingzhe = { month = 3, day = 5 }
    /// qingming = { month = 4, day = 4 }
    /// lixia = { month = 5, day = 5 }
    /// mangzhong = { month = 6, day = 5 }
    /// xiaoshu = { month = 7, day = 7 }
    /// liqiu = { month = 8, day = 7 }
    /// bailu = { month = 9, day = 7 }
    /// hanlu = { month = 10, day = 8 }
    /// lidong = { month = 11, day = 7 }
    /// daxue = { month = 12, day = 7 }
    /// "#;
    /// let table = SolarTermTable::from_toml_str(doc).unwrap();
    /// assert_eq!(TermDate::new(1, 5), table.term_date(2024, SolarTerm::MinorCold));
    /// ```
    pub fn from_toml_str(doc: &str) -> Result<Self, SolarTermTableError> {
        let raw: RawTable = toml::from_str(doc)?;
        let t = raw.terms;
        let dates = [
            t.xiaohan,
            t.lichun,
            t.jingzhe,
            t.qingming,
            t.lixia,
            t.mangzhong,
            t.xiaoshu,
            t.liqiu,
            t.bailu,
            t.hanlu,
            t.lidong,
            t.daxue,
        ];
        for (term, date) in SolarTerm::ALL.into_iter().zip(&dates) {
            if date.month != term.month() {
                return Err(SolarTermTableError::InvalidMonth {
                    term,
                    expected: term.month(),
                    month: date.month,
                });
            }
            if !(1..=31).contains(&date.day) {
                return Err(SolarTermTableError::InvalidDay {
                    term,
                    day: date.day,
                });
            }
        }
        debug!(?dates, "loaded solar-term table");
        Ok(Self { dates })
    }

    /// 各節交節日期，依 [`SolarTerm::ALL`] 排列。
    pub fn dates(&self) -> &[TermDate; 12] {
        &self.dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
[terms]
xiaohan = { month = 1, day = 6 }
lichun = { month = 2, day = 4 }
jingzhe = { month = 3, day = 6 }
qingming = { month = 4, day = 5 }
lixia = { month = 5, day = 6 }
mangzhong = { month = 6, day = 6 }
xiaoshu = { month = 7, day = 7 }
liqiu = { month = 8, day = 8 }
bailu = { month = 9, day = 8 }
hanlu = { month = 10, day = 8 }
lidong = { month = 11, day = 7 }
daxue = { month = 12, day = 7 }
"#;

    #[test]
    fn fixed_table() {
        for (term, date) in SolarTerm::ALL.into_iter().zip(FIXED_TABLE.dates()) {
            assert_eq!(term.month(), date.month);
            assert_eq!(*date, FIXED_TABLE.term_date(1900, term));
            assert_eq!(*date, FIXED_TABLE.term_date(2100, term));
        }
        assert_eq!(
            TermDate::new(2, 4),
            FIXED_TABLE.term_date(2000, SolarTerm::StartOfSpring)
        );
    }

    #[test]
    fn in_month() {
        assert_eq!(SolarTerm::MinorCold, SolarTerm::in_month(1));
        assert_eq!(SolarTerm::MajorSnow, SolarTerm::in_month(12));
        assert_eq!(SolarTerm::MinorCold, SolarTerm::in_month(13));
        assert_eq!(SolarTerm::MajorSnow, SolarTerm::in_month(0));
    }

    #[test]
    fn reached_by() {
        let lichun = TermDate::new(2, 4);
        for ((m, d), std) in [
            ((1, 31), false),
            ((2, 3), false),
            ((2, 4), true),
            ((2, 5), true),
            ((3, 1), true),
        ] {
            assert_eq!(std, lichun.reached_by(m, d), "{m}-{d}");
        }
    }

    #[test]
    fn load_toml() {
        let table = SolarTermTable::from_toml_str(DOC).unwrap();
        assert_eq!(FIXED_TABLE, table);
    }

    #[test]
    fn load_toml_wrong_month() {
        let doc = DOC.replace("lichun = { month = 2, day = 4 }", "lichun = { month = 3, day = 4 }");
        let err = SolarTermTable::from_toml_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            SolarTermTableError::InvalidMonth {
                term: SolarTerm::StartOfSpring,
                expected: 2,
                month: 3,
            }
        ));
    }

    #[test]
    fn load_toml_bad_day() {
        let doc = DOC.replace("day = 8 }\nhanlu", "day = 0 }\nhanlu");
        let err = SolarTermTable::from_toml_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            SolarTermTableError::InvalidDay {
                term: SolarTerm::WhiteDew,
                day: 0,
            }
        ));
    }

    #[test]
    fn load_toml_missing_and_unknown() {
        let doc = DOC.replace("daxue = { month = 12, day = 7 }\n", "");
        assert!(matches!(
            SolarTermTable::from_toml_str(&doc),
            Err(SolarTermTableError::Toml(_))
        ));
        let doc = format!("{DOC}dongzhi = {{ month = 12, day = 22 }}\n");
        assert!(matches!(
            SolarTermTable::from_toml_str(&doc),
            Err(SolarTermTableError::Toml(_))
        ));
    }
}
