use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Divider reported when the range software did not record one.
pub const DEFAULT_BEST_DIVIDER: f64 = 99999.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShooterId(pub String);

impl fmt::Display for ShooterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A club member together with every session exported for the season.
#[derive(Debug, Clone, PartialEq)]
pub struct Shooter {
    pub id: ShooterId,
    pub last_name: String,
    pub first_name: String,
    /// Award category label exactly as exported ("clubsname").
    pub category: String,
    pub membership: String,
    pub birth_date: NaiveDate,
    pub best_divider: Option<f64>,
    pub sessions: Vec<Session>,
}

impl Shooter {
    pub fn best_divider(&self) -> f64 {
        self.best_divider.unwrap_or(DEFAULT_BEST_DIVIDER)
    }
}

/// One scored series. The shots only anchor the series to a calendar date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub score: Option<u32>,
    pub best_divider: Option<f64>,
    pub shots: Vec<NaiveDateTime>,
}

impl Session {
    pub fn score(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    pub fn best_divider(&self) -> f64 {
        self.best_divider.unwrap_or(DEFAULT_BEST_DIVIDER)
    }

    /// Date of the first recorded shot; `None` for an empty series.
    pub fn date(&self) -> Option<NaiveDate> {
        self.shots.first().map(|shot| shot.date())
    }
}

/// The calendar year ages are computed against.
///
/// Ages are plain year differences and ignore month and day, so a shooter
/// born in December counts as a year older for the whole evaluation year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationClock {
    year: i32,
}

impl EvaluationClock {
    pub const fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn from_local_time() -> Self {
        Self::new(Local::now().year())
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub fn age_of(self, birth_date: NaiveDate) -> i32 {
        self.year - birth_date.year()
    }
}

/// Per-series aggregate produced before any date deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub date: NaiveDate,
    pub score: u32,
    pub best_divider: f64,
    pub attendance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TieBreak {
    Divider(f64),
    NotApplicable,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Divider(value) => write!(f, "{value}"),
            TieBreak::NotApplicable => f.write_str("-"),
        }
    }
}

impl Serialize for TieBreak {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TieBreak::Divider(value) => serializer.serialize_f64(*value),
            TieBreak::NotApplicable => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestThreeEntry {
    pub score: u32,
    pub tie_break: TieBreak,
    pub attendance: u32,
    pub date: Option<NaiveDate>,
}

impl BestThreeEntry {
    pub(crate) fn from_summary(summary: &SessionSummary) -> Self {
        Self {
            score: summary.score,
            tie_break: TieBreak::Divider(summary.best_divider),
            attendance: summary.attendance,
            date: Some(summary.date),
        }
    }

    pub const fn placeholder() -> Self {
        Self {
            score: 0,
            tie_break: TieBreak::NotApplicable,
            attendance: 0,
            date: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }
}

/// Exactly three entries, best first, placeholders last.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BestThree([BestThreeEntry; 3]);

impl BestThree {
    pub(crate) fn new(entries: [BestThreeEntry; 3]) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[BestThreeEntry; 3] {
        &self.0
    }

    pub fn scores(&self) -> [u32; 3] {
        [self.0[0].score, self.0[1].score, self.0[2].score]
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().filter_map(|entry| entry.date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorBonus {
    NotApplicable,
    Met,
    NotMet,
}

impl SeniorBonus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "-",
            Self::Met => "met",
            Self::NotMet => "not_met",
        }
    }
}

/// Result row for a shooter whose category exists in the achievement table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityVerdict {
    pub shooter_id: ShooterId,
    pub category: String,
    pub membership: String,
    #[serde(serialize_with = "serialize_day_first")]
    pub birth_date: NaiveDate,
    pub last_name: String,
    pub first_name: String,
    pub best_divider: f64,
    pub best_three: BestThree,
    pub total_score: u64,
    pub attendance: u32,
    pub achievement_met: bool,
    pub senior_bonus: SeniorBonus,
}

impl EligibilityVerdict {
    pub fn birth_date_label(&self) -> String {
        format_day_first(self.birth_date)
    }
}

/// A shooter skipped because its category has no achievement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedShooter {
    pub shooter_id: ShooterId,
    pub last_name: String,
    pub first_name: String,
    pub category: String,
}

impl fmt::Display for UnmatchedShooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Not found: {} - {}, {} (category: {})",
            self.shooter_id, self.last_name, self.first_name, self.category
        )
    }
}

pub(crate) fn format_day_first(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn serialize_day_first<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_day_first(*date))
}
