//! 天干、地支與六十甲子

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fmt as text;
use crate::error::ParsePillarError;

/// 天干，序號 `0..10`，0 為「甲」。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Stem(u8);

/// 地支，序號 `0..12`，0 為「子」。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Branch(u8);

/// 陰陽。天干序號為偶數者屬陽，奇數者屬陰。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Stem {
    /// 依序號取得天干，按 10 取模。
    pub fn new(index: i64) -> Self {
        Self(index.rem_euclid(10) as u8)
    }
    /// 依文字取得天干，非天干則返回 `None`。
    pub fn from_char(c: char) -> Option<Self> {
        text::STEM_NAMES
            .iter()
            .position(|&n| n == c)
            .map(|i| Self(i as u8))
    }
    /// 序號
    pub fn index(&self) -> u32 {
        u32::from(self.0)
    }
    /// 陰陽
    pub fn polarity(&self) -> Polarity {
        if self.0 % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
    /// 文字
    pub fn name(&self) -> char {
        text::stem(*self)
    }
}

impl Branch {
    /// 依序號取得地支，按 12 取模。
    pub fn new(index: i64) -> Self {
        Self(index.rem_euclid(12) as u8)
    }
    /// 依文字取得地支，非地支則返回 `None`。
    pub fn from_char(c: char) -> Option<Self> {
        text::BRANCH_NAMES
            .iter()
            .position(|&n| n == c)
            .map(|i| Self(i as u8))
    }
    /// 序號
    pub fn index(&self) -> u32 {
        u32::from(self.0)
    }
    /// 文字
    pub fn name(&self) -> char {
        text::branch(*self)
    }
    /// 生肖
    pub fn zodiac(&self) -> &'static str {
        text::zodiac(*self)
    }
}

/// 「柱」，即一組干支，以其在六十甲子中的序號 `0..60` 表示。
///
/// 序號 `i` 的天干為 `i % 10`、地支為 `i % 12`，故干支序號奇偶必同；
/// 奇偶不同的干支組合不存在於六十甲子，亦無法構造。
///
/// 序列化時使用兩字文本形式，如 `"庚子"`。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::Pillar;
///
/// let p: Pillar = "丙寅".parse().unwrap();
/// assert_eq!(2, p.index());
/// assert_eq!("丙寅", p.to_string());
/// assert!("甲丑".parse::<Pillar>().is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar(u8);

/// 六十甲子表，第 `i` 項的序號即為 `i`。
pub static SEXAGENARY: [Pillar; 60] = {
    let mut table = [Pillar(0); 60];
    let mut i = 0;
    while i < 60 {
        table[i] = Pillar(i as u8);
        i += 1;
    }
    table
};

/// 取得序號為 `i` 的柱，按 60 取模，負數亦然。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::pillar_at;
///
/// assert_eq!("庚子", pillar_at(36).to_string());
/// assert_eq!(pillar_at(-1), pillar_at(59));
/// ```
pub fn pillar_at(i: i64) -> Pillar {
    SEXAGENARY[i.rem_euclid(60) as usize]
}

impl Pillar {
    /// 由天干地支組成一柱，奇偶不同則返回 `None`。
    pub fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.0 % 2 != branch.0 % 2 {
            return None;
        }
        // 同餘 i ≡ s (mod 10)、i ≡ b (mod 12) 之解
        let i = 6 * i64::from(stem.0) - 5 * i64::from(branch.0);
        Some(pillar_at(i))
    }
    /// 六十甲子序號
    pub fn index(&self) -> u32 {
        u32::from(self.0)
    }
    /// 天干
    pub fn stem(&self) -> Stem {
        Stem(self.0 % 10)
    }
    /// 地支
    pub fn branch(&self) -> Branch {
        Branch(self.0 % 12)
    }
    /// 沿六十甲子前進 `steps` 步，負數則後退。
    pub fn offset(&self, steps: i64) -> Self {
        pillar_at(i64::from(self.0) + steps)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem().name(), self.branch().name())
    }
}

impl FromStr for Pillar {
    type Err = ParsePillarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParsePillarError::*;
        let chars: Vec<char> = s.trim().chars().collect();
        let &[gan, zhi] = chars.as_slice() else {
            return Err(Length { len: chars.len() });
        };
        let stem = Stem::from_char(gan).ok_or(UnknownStem(gan))?;
        let branch = Branch::from_char(zhi).ok_or(UnknownBranch(zhi))?;
        Self::from_parts(stem, branch).ok_or(ParityMismatch {
            stem: gan,
            branch: zhi,
        })
    }
}

impl TryFrom<String> for Pillar {
    type Error = ParsePillarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> String {
        p.to_string()
    }
}
