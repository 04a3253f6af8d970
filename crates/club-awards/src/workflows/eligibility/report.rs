use super::domain::{EligibilityVerdict, SeniorBonus, UnmatchedShooter};
use serde::Serialize;

/// Everything produced by one pass over a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRun {
    pub evaluation_year: i32,
    pub verdicts: Vec<EligibilityVerdict>,
    pub unmatched: Vec<UnmatchedShooter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    pub shooters: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub achievements_met: usize,
    pub senior_bonuses_met: usize,
}

impl EvaluationRun {
    pub(crate) fn new(evaluation_year: i32) -> Self {
        Self {
            evaluation_year,
            verdicts: Vec::new(),
            unmatched: Vec::new(),
        }
    }

    /// One human-readable line per unmatched shooter.
    pub fn diagnostics(&self) -> Vec<String> {
        self.unmatched.iter().map(ToString::to_string).collect()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            shooters: self.verdicts.len() + self.unmatched.len(),
            matched: self.verdicts.len(),
            unmatched: self.unmatched.len(),
            achievements_met: self
                .verdicts
                .iter()
                .filter(|verdict| verdict.achievement_met)
                .count(),
            senior_bonuses_met: self
                .verdicts
                .iter()
                .filter(|verdict| verdict.senior_bonus == SeniorBonus::Met)
                .count(),
        }
    }
}
