/// Weights and boost values used when scoring programs against an answer set.
///
/// Dimension weights feed the normalized base score. Boost values are added
/// after normalization, so a boosted score can sit above 100 unless
/// `cap_boosted_scores` is enabled.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub fitness_level_weight: f32,
    pub training_format_weight: f32,
    pub investment_weight: f32,
    pub support_level_weight: f32,
    pub frequency_points: f32,
    pub goals_points: f32,
    pub location_boost: f32,
    pub community_boost: f32,
    pub beginner_support_boost: f32,
    pub cap_boosted_scores: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
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
}
