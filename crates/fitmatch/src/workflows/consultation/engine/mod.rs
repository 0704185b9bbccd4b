pub(crate) mod boosts;
pub(crate) mod config;
pub(crate) mod scoring;

use serde::Serialize;

pub use config::ScoringConfig;

use super::catalog::{ProgramCatalog, ProgramCriteria, ProgramRecommendation};
use super::domain::AnswerSet;
use super::{narrative, ranking};

/// Full payload returned for one consultation: the best-fit program, up to two
/// runners-up, and the narrative wrapped around them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub top_recommendation: ProgramRecommendation,
    pub alternative_recommendations: Vec<ProgramRecommendation>,
    pub personalized_message: String,
    pub next_steps: Vec<String>,
}

/// Scores the program catalog against questionnaire answers and assembles the
/// recommendation payload.
///
/// The engine is read-only after construction and safe to share behind an
/// `Arc` across concurrent requests. Each call works on fresh per-request
/// copies of the catalog entries.
pub struct RecommendationEngine {
    config: ScoringConfig,
    catalog: ProgramCatalog,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_catalog(config, ProgramCatalog::standard())
    }

    pub fn with_catalog(config: ScoringConfig, catalog: ProgramCatalog) -> Self {
        Self { config, catalog }
    }

    /// Produces a complete recommendation for one answer set.
    ///
    /// Always returns a result: unanswered questions lower scores but never
    /// fail the evaluation, and the catalog is non-empty by construction.
    pub fn recommend(&self, answers: &AnswerSet) -> RecommendationResult {
        let scored: Vec<ProgramRecommendation> = self
            .catalog
            .programs()
            .iter()
            .map(|template| {
                let mut recommendation = template.to_recommendation();
                recommendation.score =
                    scoring::base_fit_score(answers, &template.criteria, &self.config);
                boosts::apply(&mut recommendation, answers, &self.config);
                recommendation
            })
            .collect();

        let ranked = ranking::rank(scored).expect("catalog guarantees at least one program");

        let personalized_message = narrative::personalized_message(answers, &ranked.top);
        let next_steps = narrative::next_steps(answers);

        RecommendationResult {
            top_recommendation: ranked.top,
            alternative_recommendations: ranked.alternatives,
            personalized_message,
            next_steps,
        }
    }

    /// Normalized base fit of one set of criteria, before boosts.
    pub fn fit_score(&self, answers: &AnswerSet, criteria: &ProgramCriteria) -> f32 {
        scoring::base_fit_score(answers, criteria, &self.config)
    }
}
