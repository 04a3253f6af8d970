use crate::infra::evaluation_clock;
use clap::Args;
use club_awards::config::{AppConfig, EvaluationSettings};
use club_awards::error::AppError;
use club_awards::telemetry;
use club_awards::workflows::eligibility::{EligibilityEngine, EvaluationClock, EvaluationRun};
use club_awards::workflows::export::ResultExporter;
use club_awards::workflows::reference::ReferenceTables;
use club_awards::workflows::roster::RosterImporter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Roster XML to evaluate (defaults to the newest export in the export directory)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Directory searched for the newest XML export
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Achievement threshold table (CSV)
    #[arg(long)]
    pub(crate) achievement_table: Option<PathBuf>,
    /// Senior threshold table (CSV)
    #[arg(long)]
    pub(crate) senior_table: Option<PathBuf>,
    /// Destination for the `;`-separated results file
    #[arg(long)]
    pub(crate) results: Option<PathBuf>,
    /// Destination for the unmatched-shooter log
    #[arg(long)]
    pub(crate) error_log: Option<PathBuf>,
    /// Calendar year used for age calculations (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

impl EvaluateArgs {
    fn apply(&mut self, settings: &mut EvaluationSettings) {
        if let Some(dir) = self.export_dir.take() {
            settings.export_dir = dir;
        }
        if let Some(path) = self.achievement_table.take() {
            settings.achievement_table = path;
        }
        if let Some(path) = self.senior_table.take() {
            settings.senior_table = path;
        }
        if let Some(path) = self.results.take() {
            settings.results_path = path;
        }
        if let Some(path) = self.error_log.take() {
            settings.error_log_path = path;
        }
        if let Some(year) = self.year.take() {
            settings.evaluation_year = Some(year);
        }
    }
}

pub(crate) fn run_evaluation(mut args: EvaluateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    args.apply(&mut config.evaluation);

    let settings = config.evaluation;
    let clock = evaluation_clock(settings.evaluation_year);
    let roster = match args.roster.take() {
        Some(path) => path,
        None => RosterImporter::newest_export(&settings.export_dir)?,
    };

    let run = evaluate_snapshot(&settings, &roster, clock)?;
    ResultExporter::write(&settings.results_path, &settings.error_log_path, &run)?;
    render_summary(&run, &roster, &settings);

    Ok(())
}

/// Loads the tables, then the roster, and evaluates every shooter.
pub(crate) fn evaluate_snapshot(
    settings: &EvaluationSettings,
    roster: &Path,
    clock: EvaluationClock,
) -> Result<EvaluationRun, AppError> {
    let tables = ReferenceTables::load(&settings.achievement_table, &settings.senior_table)?;
    info!(roster = %roster.display(), year = clock.year(), "evaluating season export");
    let shooters = RosterImporter::from_path(roster)?;

    let engine = EligibilityEngine::new(tables.achievements, tables.seniors, clock);
    Ok(engine.run(&shooters))
}

fn render_summary(run: &EvaluationRun, roster: &Path, settings: &EvaluationSettings) {
    let summary = run.summary();

    println!("Award evaluation {}", run.evaluation_year);
    println!("Roster: {}", roster.display());
    println!(
        "Shooters: {} evaluated, {} without matching award",
        summary.matched, summary.unmatched
    );
    println!("Achievements met: {}", summary.achievements_met);
    println!("Senior bonuses met: {}", summary.senior_bonuses_met);

    if !run.unmatched.is_empty() {
        println!("\nUnmatched shooters");
        for line in run.diagnostics() {
            println!("- {line}");
        }
    }

    println!(
        "\n{} and {} were written.",
        settings.results_path.display(),
        settings.error_log_path.display()
    );
}
