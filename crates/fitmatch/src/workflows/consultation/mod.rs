//! Consultation questionnaire workflow: program catalog, fit scoring, and the
//! recommendation payload assembled from a client's answers.
//!
//! Answers arrive as a [`domain::AnswerSet`], every catalog program is scored
//! against its own criteria, boost rules reward strong situational matches,
//! and the ranked outcome is wrapped in a personalized narrative. Scoring is
//! additive and total: missing answers lower scores, they never fail a
//! consultation.

pub mod catalog;
pub mod domain;
mod engine;
mod narrative;
mod ranking;
mod router;

#[cfg(test)]
mod tests;

pub use engine::{RecommendationEngine, RecommendationResult, ScoringConfig};
pub use router::consultation_router;
