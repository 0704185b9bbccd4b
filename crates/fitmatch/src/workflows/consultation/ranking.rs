use super::catalog::ProgramRecommendation;

/// Outcome of ordering scored programs: one top pick plus up to two runners-up.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPrograms {
    pub top: ProgramRecommendation,
    pub alternatives: Vec<ProgramRecommendation>,
}

/// Orders scored programs best-first and splits off the recommendation set.
///
/// Sorting is stable, so programs with identical scores keep their catalog
/// order and repeated calls over the same input agree. Returns `None` only
/// when there are no candidates at all.
pub(crate) fn rank(mut scored: Vec<ProgramRecommendation>) -> Option<RankedPrograms> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut programs = scored.into_iter();
    let top = programs.next()?;
    let alternatives: Vec<ProgramRecommendation> = programs.take(2).collect();

    Some(RankedPrograms { top, alternatives })
}
