//! Loading of the award and senior threshold tables.

mod parser;

use crate::workflows::eligibility::{AchievementTable, SeniorTable};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ReferenceTableError {
    #[error("failed to read {table} table: {source}")]
    Io {
        table: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {table} table CSV: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("{table} table has no rows")]
    Empty { table: &'static str },
}

const ACHIEVEMENT: &str = "achievement";
const SENIOR: &str = "senior";

/// Both tables, loaded once per run and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub achievements: AchievementTable,
    pub seniors: SeniorTable,
}

impl ReferenceTables {
    pub fn load<P, Q>(achievement_path: P, senior_path: Q) -> Result<Self, ReferenceTableError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let achievements = open(achievement_path.as_ref(), ACHIEVEMENT)
            .and_then(load_achievement_table)?;
        let seniors = open(senior_path.as_ref(), SENIOR).and_then(load_senior_table)?;
        Ok(Self {
            achievements,
            seniors,
        })
    }

    pub fn from_readers<A: Read, S: Read>(
        achievements: A,
        seniors: S,
    ) -> Result<Self, ReferenceTableError> {
        Ok(Self {
            achievements: load_achievement_table(achievements)?,
            seniors: load_senior_table(seniors)?,
        })
    }
}

pub fn load_achievement_table<R: Read>(reader: R) -> Result<AchievementTable, ReferenceTableError> {
    let rows = parser::parse_achievement_rows(reader).map_err(|source| {
        ReferenceTableError::Csv {
            table: ACHIEVEMENT,
            source,
        }
    })?;
    if rows.is_empty() {
        return Err(ReferenceTableError::Empty { table: ACHIEVEMENT });
    }

    info!(rows = rows.len(), "achievement table loaded");
    Ok(AchievementTable::new(rows))
}

pub fn load_senior_table<R: Read>(reader: R) -> Result<SeniorTable, ReferenceTableError> {
    let rows = parser::parse_senior_rows(reader).map_err(|source| ReferenceTableError::Csv {
        table: SENIOR,
        source,
    })?;
    if rows.is_empty() {
        return Err(ReferenceTableError::Empty { table: SENIOR });
    }

    info!(rows = rows.len(), "senior table loaded");
    Ok(SeniorTable::new(rows))
}

fn open(path: &Path, table: &'static str) -> Result<std::fs::File, ReferenceTableError> {
    std::fs::File::open(path).map_err(|source| ReferenceTableError::Io { table, source })
}
