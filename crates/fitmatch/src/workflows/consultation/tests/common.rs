use crate::workflows::consultation::catalog::{
    ProgramCriteria, ProgramId, ProgramRecommendation,
};
use crate::workflows::consultation::domain::{
    AnswerSet, FitnessGoal, FitnessLevel, MonthlyInvestment, NutritionInterest, StartTimeline,
    SupportLevel, TrainingFormat, WorkoutFrequency,
};
use crate::workflows::consultation::{RecommendationEngine, ScoringConfig};

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        fitness_level_weight: 25.0,
        training_format_weight: 20.0,
        investment_weight: 20.0,
        support_level_weight: 15.0,
        frequency_points: 10.0,
        goals_points: 10.0,
        location_boost: 15.0,
        community_boost: 15.0,
        beginner_support_boost: 20.0,
        cap_boosted_scores: false,
    }
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(scoring_config())
}

/// Beginner who wants hybrid training, a mid-range budget, and close support.
/// A perfect match for every criteria dimension of the one-on-one program.
pub(super) fn beginner_answers() -> AnswerSet {
    AnswerSet {
        contact_name: "Jordan Rivera".to_string(),
        contact_phone: "555-0117".to_string(),
        contact_email: "jordan.rivera@example.com".to_string(),
        fitness_level: Some(FitnessLevel::CompleteBeginner),
        training_format: Some(TrainingFormat::Hybrid),
        monthly_investment: Some(MonthlyInvestment::From250To350),
        support_level: Some(SupportLevel::FrequentContact),
        workout_frequency: Some(WorkoutFrequency::ThreeTimesPerWeek),
        fitness_goals: vec![FitnessGoal::WeightManagement, FitnessGoal::BuildingStrength],
        start_timeline: Some(StartTimeline::ThisWeek),
        nutrition_interest: Some(NutritionInterest::MacroCoaching),
        ..AnswerSet::default()
    }
}

/// Criteria that accept every answer in [`beginner_answers`].
pub(super) fn full_match_criteria() -> ProgramCriteria {
    ProgramCriteria {
        fitness_levels: Some(vec![
            FitnessLevel::CompleteBeginner,
            FitnessLevel::ReturningAfterBreak,
        ]),
        training_formats: Some(vec![TrainingFormat::Hybrid, TrainingFormat::NoPreference]),
        investment_tiers: Some(vec![MonthlyInvestment::From250To350]),
        support_levels: Some(vec![
            SupportLevel::FrequentContact,
            SupportLevel::DailyAccountability,
        ]),
    }
}

pub(super) fn scored(id: ProgramId, title: &'static str, score: f32) -> ProgramRecommendation {
    ProgramRecommendation {
        id,
        title,
        description: "",
        ideal_for: Vec::new(),
        format: "",
        price_range: "",
        score,
    }
}
