//! Award eligibility for a season snapshot.
//!
//! Each shooter is evaluated independently: its series are reduced to one
//! summary per series, the best three distinct-date scores are checked
//! against the age band of its award row, and shooters aged 60 or more are
//! additionally checked against the senior table.

pub mod domain;
mod report;
mod rules;
mod sessions;
pub mod tables;

#[cfg(test)]
mod tests;

pub use domain::{
    BestThree, BestThreeEntry, EligibilityVerdict, EvaluationClock, SeniorBonus, Session,
    SessionSummary, Shooter, ShooterId, TieBreak, UnmatchedShooter, DEFAULT_BEST_DIVIDER,
};
pub use report::{EvaluationRun, RunSummary};
pub use rules::{
    compare_score, cumulative_record, evaluate_achievement, evaluate_senior_bonus,
    threshold_checks, Comparison, CumulativeRecord, MINIMUM_ATTENDANCE, SENIOR_MINIMUM_AGE,
};
pub use sessions::{distinct_attendance, select_best_three, summarize_sessions, total_score};
pub use tables::{
    AchievementTable, SeniorTable, SeniorThresholdRow, ThresholdCell, ThresholdRow,
    ThresholdTriple,
};

use tracing::{debug, info, warn};

/// Per-shooter result of [`EligibilityEngine::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShooterOutcome {
    Evaluated(EligibilityVerdict),
    Unmatched(UnmatchedShooter),
}

/// Stateless evaluator over read-only reference tables.
pub struct EligibilityEngine {
    achievements: AchievementTable,
    seniors: SeniorTable,
    clock: EvaluationClock,
}

impl EligibilityEngine {
    pub fn new(achievements: AchievementTable, seniors: SeniorTable, clock: EvaluationClock) -> Self {
        Self {
            achievements,
            seniors,
            clock,
        }
    }

    pub fn evaluate(&self, shooter: &Shooter) -> ShooterOutcome {
        let Some(row) = self.achievements.get(&shooter.category) else {
            warn!(
                shooter_id = %shooter.id,
                category = %shooter.category,
                "no achievement row for category"
            );
            return ShooterOutcome::Unmatched(UnmatchedShooter {
                shooter_id: shooter.id.clone(),
                last_name: shooter.last_name.clone(),
                first_name: shooter.first_name.clone(),
                category: shooter.category.clone(),
            });
        };

        let age = self.clock.age_of(shooter.birth_date);
        let summaries = summarize_sessions(&shooter.sessions);
        let best_three = select_best_three(&summaries);
        let attendance = distinct_attendance(&summaries);
        let achievement_met = evaluate_achievement(age, best_three.scores(), attendance, row);
        let senior_bonus = evaluate_senior_bonus(age, &summaries, &self.seniors);

        debug!(
            shooter_id = %shooter.id,
            age,
            attendance,
            scores = ?best_three.scores(),
            achievement_met,
            senior_bonus = senior_bonus.label(),
            "shooter evaluated"
        );

        ShooterOutcome::Evaluated(EligibilityVerdict {
            shooter_id: shooter.id.clone(),
            category: shooter.category.clone(),
            membership: shooter.membership.clone(),
            birth_date: shooter.birth_date,
            last_name: shooter.last_name.clone(),
            first_name: shooter.first_name.clone(),
            best_divider: shooter.best_divider(),
            total_score: total_score(&summaries),
            best_three,
            attendance,
            achievement_met,
            senior_bonus,
        })
    }

    /// Evaluates every shooter in export order.
    pub fn run(&self, shooters: &[Shooter]) -> EvaluationRun {
        let mut run = EvaluationRun::new(self.clock.year());
        for shooter in shooters {
            match self.evaluate(shooter) {
                ShooterOutcome::Evaluated(verdict) => run.verdicts.push(verdict),
                ShooterOutcome::Unmatched(unmatched) => run.unmatched.push(unmatched),
            }
        }

        let summary = run.summary();
        info!(
            evaluation_year = run.evaluation_year,
            shooters = summary.shooters,
            matched = summary.matched,
            unmatched = summary.unmatched,
            achievements = summary.achievements_met,
            senior_bonuses = summary.senior_bonuses_met,
            "eligibility run complete"
        );
        run
    }
}
