use super::config::ScoringConfig;
use crate::workflows::consultation::catalog::{ProgramId, ProgramRecommendation};
use crate::workflows::consultation::domain::{AccountabilityMethod, AnswerSet, WorkoutLocation};

/// Applies the cross-cutting boost rules to an already base-scored program.
///
/// Boosts stack additively on top of the normalized base score and are not
/// re-normalized, so a strong match with several boosts lands above 100.
/// `cap_boosted_scores` clamps the final value back to 100 for deployments
/// that present scores as percentages.
pub(crate) fn apply(
    recommendation: &mut ProgramRecommendation,
    answers: &AnswerSet,
    config: &ScoringConfig,
) {
    if answers
        .accountability_methods
        .contains(&AccountabilityMethod::GroupCommunity)
        && recommendation.id.is_group_oriented()
    {
        recommendation.score += config.community_boost;
    }

    match answers.workout_location {
        Some(WorkoutLocation::HomeOnly) => {
            if recommendation.id.is_fully_remote() {
                recommendation.score += config.location_boost;
            }
        }
        Some(WorkoutLocation::GymOnly) => {
            if recommendation.id.includes_in_person() {
                recommendation.score += config.location_boost;
            }
        }
        Some(WorkoutLocation::Outdoors) | Some(WorkoutLocation::MixOfLocations) | None => {}
    }

    let starting_out = answers
        .fitness_level
        .is_some_and(|level| level.is_starting_out());
    let wants_close_contact = answers
        .support_level
        .is_some_and(|level| level.wants_close_contact());
    if starting_out && wants_close_contact && recommendation.id == ProgramId::OneOnOne {
        recommendation.score += config.beginner_support_boost;
    }

    if config.cap_boosted_scores {
        recommendation.score = recommendation.score.min(100.0);
    }
}
