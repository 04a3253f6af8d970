use club_awards::workflows::eligibility::EvaluationClock;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Pinned year when given, otherwise the local calendar year.
pub(crate) fn evaluation_clock(year: Option<i32>) -> EvaluationClock {
    year.map(EvaluationClock::new)
        .unwrap_or_else(EvaluationClock::from_local_time)
}
