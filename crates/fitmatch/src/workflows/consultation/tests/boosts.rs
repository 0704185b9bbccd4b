use super::common::*;
use crate::workflows::consultation::catalog::ProgramId;
use crate::workflows::consultation::domain::{
    AccountabilityMethod, AnswerSet, FitnessLevel, SupportLevel, WorkoutLocation,
};
use crate::workflows::consultation::engine::boosts;
use crate::workflows::consultation::ScoringConfig;

#[test]
fn community_boost_rewards_group_programs_only() {
    let config = scoring_config();
    let answers = AnswerSet {
        accountability_methods: vec![AccountabilityMethod::GroupCommunity],
        ..AnswerSet::default()
    };

    let mut group = scored(ProgramId::SmallGroup, "Small Group Training", 50.0);
    let mut solo = scored(ProgramId::OneOnOne, "One-on-One Coaching", 50.0);
    boosts::apply(&mut group, &answers, &config);
    boosts::apply(&mut solo, &answers, &config);

    assert_eq!(group.score, 65.0);
    assert_eq!(solo.score, 50.0);
}

#[test]
fn home_only_clients_push_remote_up() {
    let config = scoring_config();
    let answers = AnswerSet {
        workout_location: Some(WorkoutLocation::HomeOnly),
        ..AnswerSet::default()
    };

    let mut remote = scored(ProgramId::Remote, "Online Coaching", 50.0);
    let mut hybrid = scored(ProgramId::Hybrid, "Hybrid Coaching", 50.0);
    boosts::apply(&mut remote, &answers, &config);
    boosts::apply(&mut hybrid, &answers, &config);

    assert_eq!(remote.score, 65.0);
    assert_eq!(hybrid.score, 50.0);
}

#[test]
fn gym_only_clients_push_in_person_programs_up() {
    let config = scoring_config();
    let answers = AnswerSet {
        workout_location: Some(WorkoutLocation::GymOnly),
        ..AnswerSet::default()
    };

    for id in [ProgramId::OneOnOne, ProgramId::Hybrid, ProgramId::SmallGroup] {
        let mut program = scored(id, "in-person", 50.0);
        boosts::apply(&mut program, &answers, &config);
        assert_eq!(program.score, 65.0, "expected location boost for {id:?}");
    }

    let mut remote = scored(ProgramId::Remote, "Online Coaching", 50.0);
    boosts::apply(&mut remote, &answers, &config);
    assert_eq!(remote.score, 50.0);
}

#[test]
fn neutral_locations_change_nothing() {
    let config = scoring_config();

    for location in [WorkoutLocation::Outdoors, WorkoutLocation::MixOfLocations] {
        let answers = AnswerSet {
            workout_location: Some(location),
            ..AnswerSet::default()
        };
        let mut remote = scored(ProgramId::Remote, "Online Coaching", 50.0);
        let mut solo = scored(ProgramId::OneOnOne, "One-on-One Coaching", 50.0);
        boosts::apply(&mut remote, &answers, &config);
        boosts::apply(&mut solo, &answers, &config);
        assert_eq!(remote.score, 50.0, "unexpected boost for {location:?}");
        assert_eq!(solo.score, 50.0, "unexpected boost for {location:?}");
    }
}

#[test]
fn new_clients_wanting_close_support_favor_one_on_one() {
    let config = scoring_config();
    let answers = AnswerSet {
        fitness_level: Some(FitnessLevel::ReturningAfterBreak),
        support_level: Some(SupportLevel::DailyAccountability),
        ..AnswerSet::default()
    };

    let mut solo = scored(ProgramId::OneOnOne, "One-on-One Coaching", 50.0);
    let mut hybrid = scored(ProgramId::Hybrid, "Hybrid Coaching", 50.0);
    boosts::apply(&mut solo, &answers, &config);
    boosts::apply(&mut hybrid, &answers, &config);

    assert_eq!(solo.score, 70.0);
    assert_eq!(hybrid.score, 50.0);
}

#[test]
fn close_support_alone_does_not_earn_the_beginner_boost() {
    let config = scoring_config();
    let experienced = AnswerSet {
        fitness_level: Some(FitnessLevel::RegularlyActive),
        support_level: Some(SupportLevel::DailyAccountability),
        ..AnswerSet::default()
    };
    let hands_off = AnswerSet {
        fitness_level: Some(FitnessLevel::CompleteBeginner),
        support_level: Some(SupportLevel::WeeklyCheckins),
        ..AnswerSet::default()
    };

    for answers in [experienced, hands_off] {
        let mut solo = scored(ProgramId::OneOnOne, "One-on-One Coaching", 50.0);
        boosts::apply(&mut solo, &answers, &config);
        assert_eq!(solo.score, 50.0);
    }
}

#[test]
fn boosts_stack_and_may_pass_one_hundred() {
    let config = scoring_config();
    let answers = AnswerSet {
        fitness_level: Some(FitnessLevel::CompleteBeginner),
        support_level: Some(SupportLevel::DailyAccountability),
        workout_location: Some(WorkoutLocation::GymOnly),
        accountability_methods: vec![AccountabilityMethod::GroupCommunity],
        ..AnswerSet::default()
    };

    let mut solo = scored(ProgramId::OneOnOne, "One-on-One Coaching", 100.0);
    let mut group = scored(ProgramId::SmallGroup, "Small Group Training", 90.0);
    boosts::apply(&mut solo, &answers, &config);
    boosts::apply(&mut group, &answers, &config);

    assert_eq!(solo.score, 135.0);
    assert_eq!(group.score, 120.0);
}

#[test]
fn cap_flag_clamps_final_scores() {
    let config = ScoringConfig {
        cap_boosted_scores: true,
        ..scoring_config()
    };
    let answers = AnswerSet {
        fitness_level: Some(FitnessLevel::CompleteBeginner),
        support_level: Some(SupportLevel::DailyAccountability),
        workout_location: Some(WorkoutLocation::GymOnly),
        ..AnswerSet::default()
    };

    let mut solo = scored(ProgramId::OneOnOne, "One-on-One Coaching", 100.0);
    let mut hybrid = scored(ProgramId::Hybrid, "Hybrid Coaching", 40.0);
    boosts::apply(&mut solo, &answers, &config);
    boosts::apply(&mut hybrid, &answers, &config);

    assert_eq!(solo.score, 100.0);
    assert_eq!(hybrid.score, 55.0);
}
