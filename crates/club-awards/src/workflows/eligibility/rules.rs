use super::domain::{SeniorBonus, SessionSummary};
use super::tables::{SeniorTable, ThresholdCell, ThresholdRow};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Distinct training dates required by both awards.
pub const MINIMUM_ATTENDANCE: u32 = 5;
pub const SENIOR_MINIMUM_AGE: i32 = 60;

/// Outcome of checking one best-three score against one threshold cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Met,
    Missed,
    NotRequired,
    NotComparable,
}

impl Comparison {
    pub const fn satisfied(self) -> bool {
        matches!(self, Self::Met | Self::NotRequired)
    }
}

pub fn compare_score(score: u32, cell: &ThresholdCell) -> Comparison {
    match cell {
        ThresholdCell::NotRequired => Comparison::NotRequired,
        ThresholdCell::Minimum(minimum) if minimum.is_finite() => {
            if f64::from(score) >= *minimum {
                Comparison::Met
            } else {
                Comparison::Missed
            }
        }
        ThresholdCell::Minimum(_) | ThresholdCell::Unreadable(_) => Comparison::NotComparable,
    }
}

/// Pairs each best-three score with the age band's threshold cell.
pub fn threshold_checks(age: i32, scores: [u32; 3], row: &ThresholdRow) -> [Comparison; 3] {
    let cells = row.triple_for_age(age).cells();
    [
        compare_score(scores[0], cells[0]),
        compare_score(scores[1], cells[1]),
        compare_score(scores[2], cells[2]),
    ]
}

/// Achievement rule. Attendance is checked before any score; a cell that
/// cannot be compared fails the whole rule.
pub fn evaluate_achievement(
    age: i32,
    scores: [u32; 3],
    attendance: u32,
    row: &ThresholdRow,
) -> bool {
    if attendance < MINIMUM_ATTENDANCE {
        return false;
    }

    threshold_checks(age, scores, row)
        .iter()
        .all(|comparison| comparison.satisfied())
}

/// Cumulative totals over one series per distinct date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CumulativeRecord {
    pub score: u64,
    pub attendance: u32,
}

/// The first series seen for a date represents it; later series on the same
/// date are ignored.
pub fn cumulative_record(summaries: &[SessionSummary]) -> CumulativeRecord {
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut record = CumulativeRecord::default();
    for summary in summaries {
        if seen.insert(summary.date) {
            record.score += u64::from(summary.score);
            record.attendance += summary.attendance;
        }
    }
    record
}

pub fn evaluate_senior_bonus(
    age: i32,
    summaries: &[SessionSummary],
    table: &SeniorTable,
) -> SeniorBonus {
    if age < SENIOR_MINIMUM_AGE {
        return SeniorBonus::NotApplicable;
    }
    let Some(row) = table.get(age) else {
        return SeniorBonus::NotApplicable;
    };

    let record = cumulative_record(summaries);
    if record.score as f64 >= row.cumulative_score && record.attendance >= MINIMUM_ATTENDANCE {
        SeniorBonus::Met
    } else {
        SeniorBonus::NotMet
    }
}
