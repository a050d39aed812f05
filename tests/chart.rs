use sizhu::bazi::{
    self, ANCHOR_INDEX, BirthMoment, Chart, DEFAULT_CYCLE_COUNT, Direction, FourPillars, Gender,
    LuckPeriod, Pillar, SolarTerm, SolarTermProvider, TermDate, pillar_at,
};

#[test]
fn end_to_end_1990() {
    let p = bazi::pillars(1990, 1, 1, 8, 30);
    // 1 月 1 日在立春前，屬 1989 年
    assert_eq!(pillar_at(ANCHOR_INDEX + (1989 - 1900)), p.year);
    assert_eq!(bazi::double_hour(8), 4);
    assert_eq!(4, p.hour.branch().index());
    assert_eq!(p.day, bazi::day_pillar(1990, 1, 1));
    assert_eq!(p.hour, bazi::hour_pillar(p.day, 8, 30));
}

#[test]
fn charts() {
    let data = [
        (
            "2000-06-15 14:20",
            Gender::Male,
            ("庚辰", "壬午", 3, Direction::Forward, "乙酉"),
        ),
        (
            "2000-06-15 14:20",
            Gender::Female,
            ("庚辰", "壬午", 3, Direction::Backward, "己卯"),
        ),
        (
            "1985-11-20 23:45",
            Gender::Male,
            ("乙丑", "丁亥", 8, Direction::Backward, "甲申"),
        ),
        (
            "2024-02-04 00:10",
            Gender::Female,
            ("甲辰", "丙寅", 1, Direction::Backward, "癸亥"),
        ),
    ];
    for (moment, gender, (year, month, age, direction, first)) in data {
        let chart = Chart::compute(moment.parse().unwrap(), gender);
        assert_eq!(year, chart.pillars.year.to_string(), "{moment}");
        assert_eq!(month, chart.pillars.month.to_string(), "{moment}");
        assert_eq!(age, chart.onset.age, "{moment}");
        assert_eq!(direction, chart.onset.direction, "{moment}");
        assert_eq!(first, chart.first_cycle.to_string(), "{moment}");
    }
}

#[test]
fn chart_cycles() {
    let chart = Chart::compute(BirthMoment::new(2000, 6, 15, 14, 20), Gender::Male);
    let cycles = chart.luck_cycles(DEFAULT_CYCLE_COUNT);
    assert_eq!(10, cycles.len());
    assert_eq!(chart.first_cycle, cycles[0].pillar);
    assert_eq!("甲午", cycles[9].pillar.to_string());
    assert_eq!(LuckPeriod::Childhood, chart.luck_period(2));
    assert_eq!(LuckPeriod::Cycle(cycles[1]), chart.luck_period(13));
}

#[test]
fn json_shape() {
    let p = bazi::pillars(1990, 1, 1, 8, 30);
    let v = serde_json::to_value(p).unwrap();
    assert_eq!(
        serde_json::json!({
            "year": "己巳",
            "month": "丙子",
            "day": "壬辰",
            "hour": "甲辰",
        }),
        v
    );
    let back: FourPillars = serde_json::from_value(v).unwrap();
    assert_eq!(p, back);

    let bad = serde_json::json!({
        "year": "乙寅",
        "month": "丙子",
        "day": "壬辰",
        "hour": "甲辰",
    });
    assert!(serde_json::from_value::<FourPillars>(bad).is_err());
}

#[test]
fn chart_json() {
    let chart = Chart::compute(BirthMoment::new(1990, 1, 1, 8, 30), Gender::Male);
    let v = serde_json::to_value(chart).unwrap();
    assert_eq!("Backward", v["onset"]["direction"]);
    assert_eq!(7, v["onset"]["age"]);
    assert_eq!("癸酉", v["first_cycle"]);
    assert_eq!("Yin", v["year_polarity"]);
    assert_eq!(1990, v["moment"]["year"]);
    let back: Chart = serde_json::from_value(v).unwrap();
    assert_eq!(chart, back);
}

/// 立春提前一日的數據源
struct EarlySpring;

impl SolarTermProvider for EarlySpring {
    fn term_date(&self, year: i32, term: SolarTerm) -> TermDate {
        match term {
            SolarTerm::StartOfSpring => TermDate::new(2, 3),
            _ => bazi::FIXED_TABLE.term_date(year, term),
        }
    }
}

#[test]
fn custom_provider() {
    let moment = BirthMoment::new(2020, 2, 3, 12, 0);
    let fixed = FourPillars::compute(moment);
    let early = FourPillars::compute_with(&EarlySpring, moment);
    assert_eq!("己亥", fixed.year.to_string());
    assert_eq!("庚子", early.year.to_string());
    assert_eq!("戊寅", early.month.to_string());
    assert_eq!(fixed.day, early.day);

    let dyn_provider: &dyn SolarTermProvider = &EarlySpring;
    assert_eq!(early, FourPillars::compute_with(dyn_provider, moment));
}

#[test]
fn label_entry_points() {
    assert_eq!(
        Direction::Forward,
        bazi::cycle_direction_for_label("", Gender::Female)
    );
    assert_eq!(
        Some("己巳".parse::<Pillar>().unwrap()),
        bazi::first_cycle_pillar_for_label("丙寅", Direction::Forward)
    );
    assert_eq!(
        None,
        bazi::first_cycle_pillar_for_label("not a pillar", Direction::Forward)
    );
}
