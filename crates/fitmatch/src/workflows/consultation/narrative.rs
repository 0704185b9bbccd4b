use super::catalog::ProgramRecommendation;
use super::domain::{AnswerSet, StartTimeline};

/// Greeting paragraph tying the client's own words to the top program.
///
/// Every fragment has a neutral fallback, so the message reads naturally even
/// for a nearly empty answer set.
pub(crate) fn personalized_message(answers: &AnswerSet, top: &ProgramRecommendation) -> String {
    let first_name = answers.first_name().unwrap_or("there");

    let journey = answers
        .fitness_level
        .map(|level| level.journey_phrase())
        .unwrap_or("ready to invest in your fitness");

    let focus = match answers.fitness_goals.as_slice() {
        [] => "your overall health".to_string(),
        [only] => only.label().to_string(),
        [first, second, ..] => format!("{} and {}", first.label(), second.label()),
    };

    format!(
        "Hi {first_name}! You're {journey}, and with your focus on {focus}, \
         the {title} program lines up best with what you told us.",
        title = top.title,
    )
}

/// Ordered follow-up guidance shown under the recommendation.
///
/// The review line always opens and the free-consultation line always closes;
/// timeline and nutrition lines appear in between when the answers call for
/// them.
pub(crate) fn next_steps(answers: &AnswerSet) -> Vec<String> {
    let mut steps = vec![
        "Our coaching team will review your answers and reach out within 24 hours.".to_string(),
    ];

    match answers.start_timeline {
        Some(StartTimeline::ThisWeek) => {
            steps.push(
                "Since you're ready to start right away, we'll prioritize scheduling your \
                 kickoff call this week."
                    .to_string(),
            );
        }
        Some(StartTimeline::NextOneToTwoWeeks) => {
            steps.push(
                "We'll line up start dates with plenty of scheduling flexibility over the \
                 next two weeks."
                    .to_string(),
            );
        }
        Some(StartTimeline::WithinAMonth) | Some(StartTimeline::JustExploring) | None => {}
    }

    if answers
        .nutrition_interest
        .is_some_and(|interest| interest.is_high_engagement())
    {
        steps.push(
            "Jot down any nutrition questions you have so we can cover them in your first \
             session."
                .to_string(),
        );
    }

    steps.push("Your first consultation is free, with zero pressure to commit.".to_string());

    steps
}
