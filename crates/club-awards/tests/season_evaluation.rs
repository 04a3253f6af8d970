use club_awards::workflows::eligibility::{EligibilityEngine, EvaluationClock, SeniorBonus};
use club_awards::workflows::export::{render_error_log, write_verdicts_csv, ResultExporter};
use club_awards::workflows::reference::ReferenceTables;
use club_awards::workflows::roster::RosterImporter;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn season_engine() -> EligibilityEngine {
    let tables = ReferenceTables::load(
        fixture("achievement_thresholds.csv"),
        fixture("senior_thresholds.csv"),
    )
    .expect("reference tables load");
    EligibilityEngine::new(tables.achievements, tables.seniors, EvaluationClock::new(2025))
}

#[test]
fn season_export_produces_expected_verdicts() {
    let shooters =
        RosterImporter::from_path(fixture("season_export.xml")).expect("export imports");
    assert_eq!(shooters.len(), 4);

    let run = season_engine().run(&shooters);

    let ids: Vec<_> = run
        .verdicts
        .iter()
        .map(|verdict| verdict.shooter_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["101", "102", "104"]);

    let brandt = &run.verdicts[0];
    assert_eq!(brandt.best_three.scores(), [95, 92, 90]);
    assert_eq!(brandt.attendance, 5);
    assert_eq!(brandt.total_score, 450);
    assert!(brandt.achievement_met);
    assert_eq!(brandt.senior_bonus, SeniorBonus::Met);

    let roth = &run.verdicts[1];
    assert_eq!(roth.best_three.scores(), [96, 89, 0]);
    assert_eq!(roth.attendance, 2);
    assert_eq!(roth.total_score, 278);
    assert!(!roth.achievement_met);
    assert_eq!(roth.senior_bonus, SeniorBonus::NotApplicable);
    assert_eq!(roth.best_divider, 99999.0);

    let huber = &run.verdicts[2];
    assert_eq!(huber.best_three.scores(), [86, 84, 83]);
    assert_eq!(huber.attendance, 5);
    assert!(huber.achievement_met);

    assert_eq!(
        run.diagnostics(),
        vec!["Not found: 103 - Vogt, Lena (category: silver)".to_string()]
    );
}

#[test]
fn rendered_outputs_are_identical_across_runs() {
    let shooters =
        RosterImporter::from_path(fixture("season_export.xml")).expect("export imports");
    let engine = season_engine();

    let render = || {
        let run = engine.run(&shooters);
        let mut csv = Vec::new();
        write_verdicts_csv(&mut csv, &run.verdicts).expect("csv renders");
        (csv, render_error_log(&run.unmatched))
    };

    assert_eq!(render(), render());
}

#[test]
fn batch_run_from_export_directory_writes_results() {
    let workspace = tempfile::tempdir().expect("temp dir");
    let export_dir = workspace.path().join("export");
    std::fs::create_dir(&export_dir).expect("export dir");
    std::fs::copy(fixture("season_export.xml"), export_dir.join("season.xml"))
        .expect("copy export");

    let export = RosterImporter::newest_export(&export_dir).expect("export discovered");
    let shooters = RosterImporter::from_path(export).expect("export imports");
    let run = season_engine().run(&shooters);

    let results = workspace.path().join("results.csv");
    let errors = workspace.path().join("errors.txt");
    ResultExporter::write(&results, &errors, &run).expect("results written");

    let csv = std::fs::read_to_string(results).expect("results readable");
    let rows: Vec<_> = csv.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("101;Gold;SV Tell 1892;14/05/1960;Brandt;Jonas;35.7;95;92;90;450;5;true;met"));

    let log = std::fs::read_to_string(errors).expect("log readable");
    assert!(log.contains("Not found: 103 - Vogt, Lena (category: silver)"));
}
