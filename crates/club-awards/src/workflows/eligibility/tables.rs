use std::collections::HashMap;

/// Minimum score for one best-three slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdCell {
    Minimum(f64),
    NotRequired,
    /// Text that is neither a number nor the `-` marker. Never satisfied.
    Unreadable(String),
}

impl ThresholdCell {
    pub const NOT_REQUIRED_MARKER: &'static str = "-";

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == Self::NOT_REQUIRED_MARKER {
            return Self::NotRequired;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Minimum(value),
            _ => Self::Unreadable(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTriple {
    pub first: ThresholdCell,
    pub second: ThresholdCell,
    pub third: ThresholdCell,
}

impl ThresholdTriple {
    pub fn cells(&self) -> [&ThresholdCell; 3] {
        [&self.first, &self.second, &self.third]
    }
}

/// Achievement requirements for one award category.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRow {
    pub award: String,
    pub under_fifty: ThresholdTriple,
    pub fifty_and_over: ThresholdTriple,
}

impl ThresholdRow {
    pub const AGE_BAND_SPLIT: i32 = 50;

    pub fn triple_for_age(&self, age: i32) -> &ThresholdTriple {
        if age < Self::AGE_BAND_SPLIT {
            &self.under_fifty
        } else {
            &self.fifty_and_over
        }
    }
}

/// Rows keyed by award label. Lookups are exact and case-sensitive; the
/// first row wins when a label repeats.
#[derive(Debug, Clone, Default)]
pub struct AchievementTable {
    rows: Vec<ThresholdRow>,
    index: HashMap<String, usize>,
}

impl AchievementTable {
    pub fn new(rows: Vec<ThresholdRow>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            index.entry(row.award.clone()).or_insert(position);
        }
        Self { rows, index }
    }

    pub fn get(&self, award: &str) -> Option<&ThresholdRow> {
        self.index.get(award).map(|&position| &self.rows[position])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeniorThresholdRow {
    pub age: i32,
    pub cumulative_score: f64,
}

/// Senior thresholds keyed by exact age. No nearest-age fallback.
#[derive(Debug, Clone, Default)]
pub struct SeniorTable {
    rows: Vec<SeniorThresholdRow>,
    index: HashMap<i32, usize>,
}

impl SeniorTable {
    pub fn new(rows: Vec<SeniorThresholdRow>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            index.entry(row.age).or_insert(position);
        }
        Self { rows, index }
    }

    pub fn get(&self, age: i32) -> Option<&SeniorThresholdRow> {
        self.index.get(&age).map(|&position| &self.rows[position])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
