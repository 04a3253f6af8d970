use crate::workflows::eligibility::{SeniorThresholdRow, ThresholdCell, ThresholdRow, ThresholdTriple};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_achievement_rows<R: Read>(reader: R) -> Result<Vec<ThresholdRow>, csv::Error> {
    let mut csv_reader = reader_for(reader);
    csv_reader
        .deserialize::<AchievementCsvRow>()
        .map(|row| row.map(AchievementCsvRow::into_row))
        .collect()
}

pub(crate) fn parse_senior_rows<R: Read>(reader: R) -> Result<Vec<SeniorThresholdRow>, csv::Error> {
    let mut csv_reader = reader_for(reader);
    csv_reader
        .deserialize::<SeniorCsvRow>()
        .map(|row| {
            row.map(|row| SeniorThresholdRow {
                age: row.age,
                cumulative_score: row.cumulative_score,
            })
        })
        .collect()
}

fn reader_for<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

#[derive(Debug, Deserialize)]
struct AchievementCsvRow {
    #[serde(rename = "award", alias = "Auszeichnung")]
    award: String,
    #[serde(rename = "under50_first", alias = "BNEins", deserialize_with = "cell")]
    under50_first: ThresholdCell,
    #[serde(rename = "under50_second", alias = "BNZwei", deserialize_with = "cell")]
    under50_second: ThresholdCell,
    #[serde(rename = "under50_third", alias = "BNDrei", deserialize_with = "cell")]
    under50_third: ThresholdCell,
    #[serde(rename = "over50_first", alias = "SNEins", deserialize_with = "cell")]
    over50_first: ThresholdCell,
    #[serde(rename = "over50_second", alias = "SNZwei", deserialize_with = "cell")]
    over50_second: ThresholdCell,
    #[serde(rename = "over50_third", alias = "SNDrei", deserialize_with = "cell")]
    over50_third: ThresholdCell,
}

impl AchievementCsvRow {
    fn into_row(self) -> ThresholdRow {
        ThresholdRow {
            award: self.award,
            under_fifty: ThresholdTriple {
                first: self.under50_first,
                second: self.under50_second,
                third: self.under50_third,
            },
            fifty_and_over: ThresholdTriple {
                first: self.over50_first,
                second: self.over50_second,
                third: self.over50_third,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeniorCsvRow {
    #[serde(rename = "age", alias = "Alter")]
    age: i32,
    #[serde(rename = "cumulative_score", alias = "Ringzahl")]
    cumulative_score: f64,
}

/// Cells are read as text so an odd value becomes `Unreadable` instead of
/// rejecting the whole table.
fn cell<'de, D>(deserializer: D) -> Result<ThresholdCell, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(ThresholdCell::parse(&raw))
}
