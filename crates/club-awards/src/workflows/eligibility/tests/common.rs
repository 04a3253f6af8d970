use chrono::NaiveDate;

use crate::workflows::eligibility::{
    AchievementTable, EligibilityEngine, EvaluationClock, SeniorTable, SeniorThresholdRow,
    Session, SessionSummary, Shooter, ShooterId, ThresholdCell, ThresholdRow, ThresholdTriple,
};

pub(super) const EVALUATION_YEAR: i32 = 2025;

pub(super) fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

/// A series with a single shot fired at 19:30 on the given date.
pub(super) fn session_on(date: NaiveDate, score: u32) -> Session {
    Session {
        score: Some(score),
        best_divider: Some(120.5),
        shots: vec![date.and_hms_opt(19, 30, 0).expect("valid time")],
    }
}

pub(super) fn summary(date: NaiveDate, score: u32) -> SessionSummary {
    SessionSummary {
        date,
        score,
        best_divider: 120.5,
        attendance: 1,
    }
}

/// Five series on five different March evenings.
pub(super) fn five_evenings(scores: [u32; 5]) -> Vec<Session> {
    [4, 11, 18, 25, 31]
        .into_iter()
        .zip(scores)
        .map(|(date, score)| session_on(day(3, date), score))
        .collect()
}

pub(super) fn shooter(id: &str, category: &str, birth_year: i32, sessions: Vec<Session>) -> Shooter {
    Shooter {
        id: ShooterId(id.to_string()),
        last_name: "Keller".to_string(),
        first_name: "Anna".to_string(),
        category: category.to_string(),
        membership: "SV Tell 1892".to_string(),
        birth_date: NaiveDate::from_ymd_opt(birth_year, 6, 15).expect("valid birth date"),
        best_divider: Some(48.3),
        sessions,
    }
}

pub(super) fn triple(first: ThresholdCell, second: ThresholdCell, third: ThresholdCell) -> ThresholdTriple {
    ThresholdTriple {
        first,
        second,
        third,
    }
}

pub(super) fn min(value: f64) -> ThresholdCell {
    ThresholdCell::Minimum(value)
}

/// Gold: 95/93/90 under fifty, 92/90/- from fifty on.
pub(super) fn gold_row() -> ThresholdRow {
    ThresholdRow {
        award: "Gold".to_string(),
        under_fifty: triple(min(95.0), min(93.0), min(90.0)),
        fifty_and_over: triple(min(92.0), min(90.0), ThresholdCell::NotRequired),
    }
}

pub(super) fn silver_row() -> ThresholdRow {
    ThresholdRow {
        award: "Silver".to_string(),
        under_fifty: triple(min(90.0), min(88.0), min(85.0)),
        fifty_and_over: triple(min(88.0), min(85.0), min(80.0)),
    }
}

pub(super) fn achievement_table() -> AchievementTable {
    AchievementTable::new(vec![gold_row(), silver_row()])
}

pub(super) fn senior_table() -> SeniorTable {
    SeniorTable::new(
        (60..=70)
            .map(|age| SeniorThresholdRow {
                age,
                cumulative_score: 440.0 - f64::from(age - 60),
            })
            .collect(),
    )
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(
        achievement_table(),
        senior_table(),
        EvaluationClock::new(EVALUATION_YEAR),
    )
}
