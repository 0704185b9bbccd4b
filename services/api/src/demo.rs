use crate::infra::load_answers;
use chrono::Local;
use clap::Args;
use fitmatch::error::AppError;
use fitmatch::workflows::consultation::domain::{
    AccountabilityMethod, AnswerSet, Challenge, FitnessGoal, FitnessLevel, LastWorkoutTime,
    MonthlyInvestment, Motivation, NutritionInterest, PaymentStructure, PhysicalConsideration,
    StartTimeline, SupportLevel, TrainingFormat, WellnessArea, WorkoutFrequency, WorkoutLocation,
    WorkoutTime,
};
use fitmatch::workflows::consultation::{
    RecommendationEngine, RecommendationResult, ScoringConfig,
};
use std::path::PathBuf;

const QUESTION_COUNT: usize = 17;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answers file (JSON, camelCase keys). Defaults to a built-in sample client.
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Clamp boosted fit scores back to 100 before rendering.
    #[arg(long)]
    pub(crate) cap_scores: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Answers file (JSON, camelCase keys)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Clamp boosted fit scores back to 100 in the payload
    #[arg(long)]
    pub(crate) cap_scores: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        cap_scores,
    } = args;

    let answers = load_answers(&answers)?;
    let engine = RecommendationEngine::new(demo_scoring_config(cap_scores));
    let result = engine.recommend(&answers);

    let payload = serde_json::to_string_pretty(&result)?;
    println!("{payload}");
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answers,
        cap_scores,
    } = args;

    let answers = match answers {
        Some(path) => load_answers(&path)?,
        None => sample_answers(),
    };
    let engine = RecommendationEngine::new(demo_scoring_config(cap_scores));

    println!("Coaching consultation demo ({})", Local::now().date_naive());
    render_client_summary(&answers);

    let result = engine.recommend(&answers);
    render_recommendation(&result);

    Ok(())
}

fn demo_scoring_config(cap_scores: bool) -> ScoringConfig {
    ScoringConfig {
        cap_boosted_scores: cap_scores,
        ..ScoringConfig::default()
    }
}

fn render_client_summary(answers: &AnswerSet) {
    let client = answers.contact_name.trim();
    if client.is_empty() {
        println!("\nClient: (no name given)");
    } else {
        println!("\nClient: {client}");
    }
    println!(
        "- Questions answered: {} of {QUESTION_COUNT}",
        answered_count(answers)
    );
    if let Some(level) = answers.fitness_level {
        println!("- Fitness level: {}", level.label());
    }
    if !answers.fitness_goals.is_empty() {
        let labels: Vec<&str> = answers
            .fitness_goals
            .iter()
            .map(|goal| goal.label())
            .collect();
        println!("- Goals: {}", labels.join(", "));
    }
    if let Some(timeline) = answers.start_timeline {
        println!("- Wants to start: {}", timeline.label());
    }
}

fn render_recommendation(result: &RecommendationResult) {
    let top = &result.top_recommendation;
    println!("\nTop recommendation: {} (fit score {:.1})", top.title, top.score);
    println!("  {}", top.description);
    println!("  Format: {}", top.format);
    println!("  Pricing: {}", top.price_range);
    println!("  Ideal for:");
    for line in &top.ideal_for {
        println!("    - {line}");
    }

    if !result.alternative_recommendations.is_empty() {
        println!("\nAlternatives:");
        for program in &result.alternative_recommendations {
            println!(
                "  - {} (fit score {:.1}) | {}",
                program.title, program.score, program.price_range
            );
        }
    }

    println!("\n{}", result.personalized_message);
    println!("\nNext steps:");
    for (position, step) in result.next_steps.iter().enumerate() {
        println!("  {}. {}", position + 1, step);
    }
}

fn answered_count(answers: &AnswerSet) -> usize {
    let single_choice = [
        answers.fitness_level.is_some(),
        answers.last_workout_time.is_some(),
        answers.motivation.is_some(),
        answers.workout_time.is_some(),
        answers.workout_frequency.is_some(),
        answers.workout_location.is_some(),
        answers.support_level.is_some(),
        answers.nutrition_interest.is_some(),
        answers.monthly_investment.is_some(),
        answers.training_format.is_some(),
        answers.payment_structure.is_some(),
        answers.start_timeline.is_some(),
    ];
    let multi_choice = [
        !answers.fitness_goals.is_empty(),
        !answers.challenges.is_empty(),
        !answers.physical_considerations.is_empty(),
        !answers.accountability_methods.is_empty(),
        !answers.wellness_areas.is_empty(),
    ];

    single_choice
        .into_iter()
        .chain(multi_choice)
        .filter(|answered| *answered)
        .count()
}

/// Returning exerciser with a gym habit to rebuild. Strong one-on-one match
/// with hybrid coaching close behind, so the demo shows a contested ranking.
fn sample_answers() -> AnswerSet {
    AnswerSet {
        contact_name: "Maya Torres".to_string(),
        contact_phone: "555-0142".to_string(),
        contact_email: "maya.torres@example.com".to_string(),
        fitness_level: Some(FitnessLevel::ReturningAfterBreak),
        last_workout_time: Some(LastWorkoutTime::SixToTwelveMonthsAgo),
        motivation: Some(Motivation::KeepUpWithLife),
        workout_time: Some(WorkoutTime::EarlyMorning),
        workout_frequency: Some(WorkoutFrequency::ThreeTimesPerWeek),
        workout_location: Some(WorkoutLocation::GymOnly),
        support_level: Some(SupportLevel::FrequentContact),
        nutrition_interest: Some(NutritionInterest::FullMealPlan),
        monthly_investment: Some(MonthlyInvestment::From250To350),
        training_format: Some(TrainingFormat::Hybrid),
        payment_structure: Some(PaymentStructure::MonthlySubscription),
        start_timeline: Some(StartTimeline::NextOneToTwoWeeks),
        fitness_goals: vec![FitnessGoal::BuildingStrength, FitnessGoal::OverallHealth],
        challenges: vec![Challenge::LimitedTime, Challenge::StayingMotivated],
        physical_considerations: vec![PhysicalConsideration::KneeIssues],
        accountability_methods: vec![
            AccountabilityMethod::CoachCheckins,
            AccountabilityMethod::ProgressTracking,
        ],
        wellness_areas: vec![
            WellnessArea::SleepQuality,
            WellnessArea::StressManagement,
        ],
    }
}
