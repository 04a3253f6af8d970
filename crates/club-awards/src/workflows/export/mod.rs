//! Result files written after a batch run.

use crate::workflows::eligibility::{EligibilityVerdict, EvaluationRun, UnmatchedShooter};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ERROR_LOG_HEADER: &str =
    "The following shooters had no matching entry in the achievement table:";
pub const NO_ERRORS_MARKER: &str = "No errors - every shooter was matched to an award.";

const HEADER: [&str; 14] = [
    "shooter_id",
    "category",
    "membership",
    "birth_date",
    "last_name",
    "first_name",
    "best_divider",
    "best_score",
    "second_score",
    "third_score",
    "total_score",
    "attendance",
    "achievement_met",
    "senior_bonus",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode results: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the verdicts as `;`-separated CSV with a header row.
pub fn write_verdicts_csv<W: Write>(
    writer: W,
    verdicts: &[EligibilityVerdict],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for verdict in verdicts {
        let [best, second, third] = verdict.best_three.scores();
        csv_writer.write_record([
            verdict.shooter_id.0.clone(),
            verdict.category.clone(),
            verdict.membership.clone(),
            verdict.birth_date_label(),
            verdict.last_name.clone(),
            verdict.first_name.clone(),
            verdict.best_divider.to_string(),
            best.to_string(),
            second.to_string(),
            third.to_string(),
            verdict.total_score.to_string(),
            verdict.attendance.to_string(),
            verdict.achievement_met.to_string(),
            verdict.senior_bonus.label().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn render_error_log(unmatched: &[UnmatchedShooter]) -> String {
    if unmatched.is_empty() {
        return format!("{NO_ERRORS_MARKER}\n");
    }

    let mut log = format!("{ERROR_LOG_HEADER}\n\n");
    for shooter in unmatched {
        log.push_str(&shooter.to_string());
        log.push('\n');
    }
    log
}

pub struct ResultExporter;

impl ResultExporter {
    pub fn write(
        results_path: &Path,
        error_log_path: &Path,
        run: &EvaluationRun,
    ) -> Result<(), ExportError> {
        let results = std::fs::File::create(results_path).map_err(|source| ExportError::Io {
            path: results_path.to_path_buf(),
            source,
        })?;
        write_verdicts_csv(std::io::BufWriter::new(results), &run.verdicts)?;

        std::fs::write(error_log_path, render_error_log(&run.unmatched)).map_err(|source| {
            ExportError::Io {
                path: error_log_path.to_path_buf(),
                source,
            }
        })?;

        info!(
            results = %results_path.display(),
            error_log = %error_log_path.display(),
            verdicts = run.verdicts.len(),
            unmatched = run.unmatched.len(),
            "evaluation files written"
        );
        Ok(())
    }
}
