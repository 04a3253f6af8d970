use super::domain::{BestThree, BestThreeEntry, Session, SessionSummary};
use chrono::NaiveDate;
use std::collections::HashSet;

pub(crate) const BEST_THREE_LEN: usize = 3;

/// One summary per series that has at least one shot, in export order.
pub fn summarize_sessions(sessions: &[Session]) -> Vec<SessionSummary> {
    sessions
        .iter()
        .filter_map(|session| {
            let date = session.date()?;
            Some(SessionSummary {
                date,
                score: session.score(),
                best_divider: session.best_divider(),
                attendance: 1,
            })
        })
        .collect()
}

/// Picks the highest-scoring series per distinct date until three dates are
/// taken. A date is claimed by its best series; equal scores keep export order.
pub fn select_best_three(summaries: &[SessionSummary]) -> BestThree {
    let mut ranked: Vec<&SessionSummary> = summaries.iter().collect();
    ranked.sort_by(|left, right| right.score.cmp(&left.score));

    let mut claimed: HashSet<NaiveDate> = HashSet::new();
    let mut picked = Vec::with_capacity(BEST_THREE_LEN);
    for summary in ranked {
        if picked.len() == BEST_THREE_LEN {
            break;
        }
        if claimed.insert(summary.date) {
            picked.push(BestThreeEntry::from_summary(summary));
        }
    }

    let mut picked = picked.into_iter();
    let mut next = || picked.next().unwrap_or_else(BestThreeEntry::placeholder);
    BestThree::new([next(), next(), next()])
}

/// Number of distinct dates across the whole history.
pub fn distinct_attendance(summaries: &[SessionSummary]) -> u32 {
    summaries
        .iter()
        .map(|summary| summary.date)
        .collect::<HashSet<_>>()
        .len() as u32
}

/// Sum of every series score, without date deduplication.
pub fn total_score(summaries: &[SessionSummary]) -> u64 {
    summaries
        .iter()
        .map(|summary| u64::from(summary.score))
        .sum()
}
