use fitmatch::config::EngineConfig;
use fitmatch::error::AppError;
use fitmatch::workflows::consultation::domain::AnswerSet;
use fitmatch::workflows::consultation::ScoringConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Maps deployment switches onto the engine's scoring weights. Weights stay at
/// their defaults; only the capping behavior is operator-tunable.
pub(crate) fn scoring_config(engine: &EngineConfig) -> ScoringConfig {
    ScoringConfig {
        cap_boosted_scores: engine.cap_boosted_scores,
        ..ScoringConfig::default()
    }
}

/// Reads a questionnaire answers file (JSON, camelCase keys) from disk.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
