use super::common::*;
use crate::workflows::consultation::catalog::ProgramId;
use crate::workflows::consultation::ranking::rank;

#[test]
fn orders_programs_best_first() {
    let scored = vec![
        scored(ProgramId::Hybrid, "Hybrid Coaching", 40.0),
        scored(ProgramId::OneOnOne, "One-on-One Coaching", 90.0),
        scored(ProgramId::Remote, "Online Coaching", 70.0),
        scored(ProgramId::SmallGroup, "Small Group Training", 10.0),
    ];

    let ranked = rank(scored).expect("candidates present");

    assert_eq!(ranked.top.id, ProgramId::OneOnOne);
    let alternative_ids: Vec<ProgramId> = ranked
        .alternatives
        .iter()
        .map(|program| program.id)
        .collect();
    assert_eq!(alternative_ids, vec![ProgramId::Remote, ProgramId::Hybrid]);
}

#[test]
fn never_returns_more_than_two_alternatives() {
    let scored = vec![
        scored(ProgramId::OneOnOne, "One-on-One Coaching", 90.0),
        scored(ProgramId::Remote, "Online Coaching", 80.0),
        scored(ProgramId::Hybrid, "Hybrid Coaching", 70.0),
        scored(ProgramId::SmallGroup, "Small Group Training", 60.0),
    ];

    let ranked = rank(scored).expect("candidates present");

    assert_eq!(ranked.alternatives.len(), 2);
}

#[test]
fn fewer_candidates_mean_fewer_alternatives() {
    let pair = vec![
        scored(ProgramId::OneOnOne, "One-on-One Coaching", 90.0),
        scored(ProgramId::Remote, "Online Coaching", 80.0),
    ];
    let ranked = rank(pair).expect("candidates present");
    assert_eq!(ranked.alternatives.len(), 1);

    let single = vec![scored(ProgramId::OneOnOne, "One-on-One Coaching", 90.0)];
    let ranked = rank(single).expect("candidates present");
    assert!(ranked.alternatives.is_empty());
}

#[test]
fn tied_scores_keep_their_input_order() {
    let scored = vec![
        scored(ProgramId::OneOnOne, "One-on-One Coaching", 80.0),
        scored(ProgramId::Remote, "Online Coaching", 80.0),
        scored(ProgramId::Hybrid, "Hybrid Coaching", 80.0),
    ];

    let ranked = rank(scored).expect("candidates present");

    assert_eq!(ranked.top.id, ProgramId::OneOnOne);
    let alternative_ids: Vec<ProgramId> = ranked
        .alternatives
        .iter()
        .map(|program| program.id)
        .collect();
    assert_eq!(alternative_ids, vec![ProgramId::Remote, ProgramId::Hybrid]);
}

#[test]
fn no_candidates_means_no_ranking() {
    assert!(rank(Vec::new()).is_none());
}
