use super::config::ScoringConfig;
use crate::workflows::consultation::catalog::ProgramCriteria;
use crate::workflows::consultation::domain::AnswerSet;

/// Normalized base fit of one program for one answer set, on a 0-100 scale.
///
/// Each criteria dimension contributes its weight to the possible total only
/// when the program defines the dimension and the client answered it; skipped
/// questions neither earn nor cost points. Frequency and goals always count
/// toward the possible total, so a silent client drifts toward zero rather
/// than an inflated partial match.
pub(crate) fn base_fit_score(
    answers: &AnswerSet,
    criteria: &ProgramCriteria,
    config: &ScoringConfig,
) -> f32 {
    let mut earned = 0.0_f32;
    let mut possible = 0.0_f32;

    if let (Some(levels), Some(level)) = (&criteria.fitness_levels, answers.fitness_level) {
        possible += config.fitness_level_weight;
        if levels.contains(&level) {
            earned += config.fitness_level_weight;
        }
    }

    if let (Some(formats), Some(format)) = (&criteria.training_formats, answers.training_format) {
        possible += config.training_format_weight;
        if formats.contains(&format) {
            earned += config.training_format_weight;
        }
    }

    if let (Some(tiers), Some(tier)) = (&criteria.investment_tiers, answers.monthly_investment) {
        possible += config.investment_weight;
        if tiers.contains(&tier) {
            earned += config.investment_weight;
        }
    }

    if let (Some(levels), Some(level)) = (&criteria.support_levels, answers.support_level) {
        possible += config.support_level_weight;
        if levels.contains(&level) {
            earned += config.support_level_weight;
        }
    }

    possible += config.frequency_points;
    if answers.workout_frequency.is_some() {
        earned += config.frequency_points;
    }

    possible += config.goals_points;
    if !answers.fitness_goals.is_empty() {
        earned += config.goals_points;
    }

    if possible > 0.0 {
        earned / possible * 100.0
    } else {
        0.0
    }
}
