use super::common::*;
use crate::workflows::eligibility::{
    distinct_attendance, select_best_three, summarize_sessions, total_score, Session, TieBreak,
};

#[test]
fn sessions_without_shots_are_dropped() {
    let sessions = vec![
        session_on(day(3, 4), 91),
        Session {
            score: Some(100),
            best_divider: None,
            shots: Vec::new(),
        },
        session_on(day(3, 11), 87),
    ];

    let summaries = summarize_sessions(&sessions);

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].score, 91);
    assert_eq!(summaries[1].score, 87);
    assert!(summaries.iter().all(|summary| summary.attendance == 1));
}

#[test]
fn missing_score_and_divider_fall_back_to_defaults() {
    let sessions = vec![Session {
        score: None,
        best_divider: None,
        shots: vec![day(4, 2).and_hms_opt(18, 0, 0).expect("valid time")],
    }];

    let summaries = summarize_sessions(&sessions);

    assert_eq!(summaries[0].score, 0);
    assert_eq!(summaries[0].best_divider, 99999.0);
}

#[test]
fn session_date_comes_from_first_recorded_shot() {
    let late = day(3, 4).and_hms_opt(23, 59, 0).expect("valid time");
    let after_midnight = day(3, 5).and_hms_opt(0, 1, 0).expect("valid time");
    let sessions = vec![Session {
        score: Some(90),
        best_divider: None,
        shots: vec![late, after_midnight],
    }];

    let summaries = summarize_sessions(&sessions);

    assert_eq!(summaries[0].date, day(3, 4));
}

#[test]
fn best_three_keeps_one_series_per_date() {
    let summaries = vec![
        summary(day(3, 4), 97),
        summary(day(3, 4), 96),
        summary(day(3, 11), 88),
        summary(day(3, 18), 92),
        summary(day(3, 25), 85),
    ];

    let best = select_best_three(&summaries);

    assert_eq!(best.scores(), [97, 92, 88]);
    let dates: Vec<_> = best.dates().collect();
    assert_eq!(dates, vec![day(3, 4), day(3, 18), day(3, 11)]);
}

#[test]
fn best_three_pads_with_placeholders() {
    let summaries = vec![summary(day(3, 4), 90), summary(day(3, 11), 94)];

    let best = select_best_three(&summaries);

    assert_eq!(best.scores(), [94, 90, 0]);
    let placeholder = &best.entries()[2];
    assert!(placeholder.is_placeholder());
    assert_eq!(placeholder.tie_break, TieBreak::NotApplicable);
    assert_eq!(placeholder.attendance, 0);
    assert_eq!(placeholder.tie_break.to_string(), "-");
}

#[test]
fn best_three_of_empty_history_is_all_placeholders() {
    let best = select_best_three(&[]);

    assert_eq!(best.scores(), [0, 0, 0]);
    assert!(best.entries().iter().all(|entry| entry.is_placeholder()));
}

#[test]
fn equal_scores_keep_export_order() {
    let mut first = summary(day(3, 4), 90);
    first.best_divider = 10.0;
    let mut second = summary(day(3, 11), 90);
    second.best_divider = 20.0;
    let mut third = summary(day(3, 18), 90);
    third.best_divider = 30.0;
    let fourth = summary(day(3, 25), 90);

    let best = select_best_three(&[first, second, third, fourth]);

    let ties: Vec<_> = best
        .entries()
        .iter()
        .map(|entry| entry.tie_break)
        .collect();
    assert_eq!(
        ties,
        vec![
            TieBreak::Divider(10.0),
            TieBreak::Divider(20.0),
            TieBreak::Divider(30.0)
        ]
    );
}

#[test]
fn best_three_invariants_hold_for_mixed_history() {
    let histories = vec![
        vec![],
        vec![summary(day(1, 9), 70)],
        vec![
            summary(day(1, 9), 70),
            summary(day(1, 9), 99),
            summary(day(1, 9), 80),
        ],
        vec![
            summary(day(2, 1), 81),
            summary(day(2, 8), 95),
            summary(day(2, 1), 96),
            summary(day(2, 15), 79),
            summary(day(2, 22), 95),
            summary(day(2, 8), 60),
        ],
    ];

    for history in histories {
        let best = select_best_three(&history);
        let real: Vec<_> = best
            .entries()
            .iter()
            .filter(|entry| !entry.is_placeholder())
            .collect();

        assert_eq!(best.entries().len(), 3);
        assert!(real.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert!(best.entries()[real.len()..]
            .iter()
            .all(|entry| entry.is_placeholder()));

        let mut dates: Vec<_> = best.dates().collect();
        let taken = dates.len();
        dates.sort();
        dates.dedup();
        assert_eq!(dates.len(), taken, "best three reuses a date");

        assert!(distinct_attendance(&history) as usize >= taken);
    }
}

#[test]
fn attendance_counts_distinct_dates_across_full_history() {
    let summaries = vec![
        summary(day(3, 4), 97),
        summary(day(3, 4), 96),
        summary(day(3, 11), 88),
        summary(day(3, 18), 92),
        summary(day(3, 25), 85),
        summary(day(3, 31), 70),
    ];

    assert_eq!(distinct_attendance(&summaries), 5);
    assert_eq!(distinct_attendance(&[]), 0);
}

#[test]
fn total_score_sums_every_series() {
    let summaries = vec![
        summary(day(3, 4), 97),
        summary(day(3, 4), 96),
        summary(day(3, 11), 88),
    ];

    assert_eq!(total_score(&summaries), 281);
}
