//! 格式化干支相關功能

use super::{Branch, Direction, Polarity, SolarTerm, Stem};

/// 十天干，第 0 項為「甲」。
pub const STEM_NAMES: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// 十二地支，第 0 項為「子」。
pub const BRANCH_NAMES: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// 干支序號轉為文本形式，0 為「甲子」，59 為「癸亥」，超出範圍者按 60 取模。
///
/// # 用例
///
/// ```
/// use sizhu::bazi;
///
/// assert_eq!("庚子", bazi::fmt::sexagenary(36));
/// assert_eq!("癸亥", bazi::fmt::sexagenary(-1));
/// ```
pub fn sexagenary(num: i64) -> String {
    let mut rt = String::with_capacity(6);
    rt.push(STEM_NAMES[num.rem_euclid(10) as usize]);
    rt.push(BRANCH_NAMES[num.rem_euclid(12) as usize]);
    rt
}

/// 天干文字
pub fn stem(s: Stem) -> char {
    STEM_NAMES[s.index() as usize]
}

/// 地支文字
pub fn branch(b: Branch) -> char {
    BRANCH_NAMES[b.index() as usize]
}

/// 地支所屬生肖。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{self, Branch};
///
/// assert_eq!("虎", bazi::fmt::zodiac(Branch::new(2)));
/// ```
pub fn zodiac(b: Branch) -> &'static str {
    const NAMES: [&str; 12] = [
        "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
    ];
    NAMES[b.index() as usize]
}

/// 陰陽
pub fn polarity(p: Polarity) -> &'static str {
    match p {
        Polarity::Yang => "陽",
        Polarity::Yin => "陰",
    }
}

/// 大運順逆
pub fn direction(d: Direction) -> &'static str {
    match d {
        Direction::Forward => "順行",
        Direction::Backward => "逆行",
    }
}

/// 節氣名稱。
///
/// # 用例
///
/// ```
/// use sizhu::bazi::{self, SolarTerm};
///
/// assert_eq!("驚蟄", bazi::fmt::solar_term(SolarTerm::AwakeningOfInsects));
/// ```
pub fn solar_term(term: SolarTerm) -> &'static str {
    const NAMES: [&str; 12] = [
        "小寒", "立春", "驚蟄", "清明", "立夏", "芒種", "小暑", "立秋", "白露", "寒露", "立冬",
        "大雪",
    ];
    NAMES[term.slot()]
}
