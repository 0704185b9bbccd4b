use serde::Serialize;

use super::domain::{FitnessLevel, MonthlyInvestment, SupportLevel, TrainingFormat};

/// Closed identity for every program the catalog can offer.
///
/// Boost rules and tests dispatch on this enum instead of comparing titles,
/// so adding a program forces every match site to take a position on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramId {
    OneOnOne,
    Remote,
    Hybrid,
    SmallGroup,
}

impl ProgramId {
    /// Programs delivered without any in-person component.
    pub const fn is_fully_remote(self) -> bool {
        match self {
            Self::Remote => true,
            Self::OneOnOne | Self::Hybrid | Self::SmallGroup => false,
        }
    }

    /// Programs with at least one in-person session per cycle.
    pub const fn includes_in_person(self) -> bool {
        match self {
            Self::OneOnOne | Self::Hybrid | Self::SmallGroup => true,
            Self::Remote => false,
        }
    }

    /// Programs built around training in a group.
    pub const fn is_group_oriented(self) -> bool {
        match self {
            Self::SmallGroup => true,
            Self::OneOnOne | Self::Remote | Self::Hybrid => false,
        }
    }
}

/// Static matching criteria for one program.
///
/// A `None` dimension is omitted from scoring for that program entirely: it
/// never enters the possible-points denominator, no matter what the client
/// answered. An empty `Some` list still enters the denominator once the
/// dimension is answered, it just cannot be earned.
#[derive(Debug, Clone, Default)]
pub struct ProgramCriteria {
    pub fitness_levels: Option<Vec<FitnessLevel>>,
    pub training_formats: Option<Vec<TrainingFormat>>,
    pub investment_tiers: Option<Vec<MonthlyInvestment>>,
    pub support_levels: Option<Vec<SupportLevel>>,
}

/// Catalog entry: display copy plus the criteria it is scored against.
#[derive(Debug, Clone)]
pub struct ProgramTemplate {
    pub id: ProgramId,
    pub title: &'static str,
    pub description: &'static str,
    pub ideal_for: Vec<&'static str>,
    pub format: &'static str,
    pub price_range: &'static str,
    pub criteria: ProgramCriteria,
}

impl ProgramTemplate {
    /// Fresh scored instance for one recommendation pass. The shared catalog
    /// template is never mutated during scoring.
    pub(crate) fn to_recommendation(&self) -> ProgramRecommendation {
        ProgramRecommendation {
            id: self.id,
            title: self.title,
            description: self.description,
            ideal_for: self.ideal_for.clone(),
            format: self.format,
            price_range: self.price_range,
            score: 0.0,
        }
    }
}

/// Per-request scored view of a program, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecommendation {
    pub id: ProgramId,
    pub title: &'static str,
    pub description: &'static str,
    pub ideal_for: Vec<&'static str>,
    pub format: &'static str,
    pub price_range: &'static str,
    pub score: f32,
}

/// Error raised when a catalog cannot back a recommendation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("program catalog requires at least one program")]
    Empty,
}

/// Fixed list of candidate programs, guaranteed non-empty so ranking always
/// has a top pick.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    programs: Vec<ProgramTemplate>,
}

impl ProgramCatalog {
    pub fn standard() -> Self {
        Self {
            programs: standard_program_templates(),
        }
    }

    pub fn try_new(programs: Vec<ProgramTemplate>) -> Result<Self, CatalogError> {
        if programs.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { programs })
    }

    pub fn programs(&self) -> &[ProgramTemplate] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_program_templates() -> Vec<ProgramTemplate> {
    vec![
        ProgramTemplate {
            id: ProgramId::OneOnOne,
            title: "One-on-One Coaching",
            description: "Fully personalized training with your own coach, programmed session \
                          by session around your goals, schedule, and physical considerations.",
            ideal_for: vec![
                "Complete beginners who want expert guidance from day one",
                "Anyone returning to training after a long break",
                "Clients who want maximum accountability and support",
            ],
            format: "1:1 sessions in person or hybrid, with app support between sessions",
            price_range: "$250-500+ per month",
            criteria: ProgramCriteria {
                fitness_levels: Some(vec![
                    FitnessLevel::CompleteBeginner,
                    FitnessLevel::ReturningAfterBreak,
                    FitnessLevel::SomewhatActive,
                ]),
                training_formats: Some(vec![
                    TrainingFormat::InPersonOnly,
                    TrainingFormat::Hybrid,
                    TrainingFormat::NoPreference,
                ]),
                investment_tiers: Some(vec![
                    MonthlyInvestment::From250To350,
                    MonthlyInvestment::From350To500,
                    MonthlyInvestment::Above500,
                ]),
                support_levels: Some(vec![
                    SupportLevel::FrequentContact,
                    SupportLevel::DailyAccountability,
                ]),
            },
        },
        ProgramTemplate {
            id: ProgramId::Remote,
            title: "Online Coaching",
            description: "Remote programming, weekly video check-ins, and habit tracking \
                          delivered entirely through the coaching app. Train anywhere, on \
                          your own schedule.",
            ideal_for: vec![
                "Self-motivated clients with busy or unpredictable schedules",
                "Home and travel workouts with minimal equipment",
                "Experienced lifters who mainly want programming",
            ],
            format: "Fully remote",
            price_range: "$150-350 per month",
            criteria: ProgramCriteria {
                fitness_levels: Some(vec![
                    FitnessLevel::SomewhatActive,
                    FitnessLevel::RegularlyActive,
                    FitnessLevel::VeryAthletic,
                ]),
                training_formats: Some(vec![
                    TrainingFormat::OnlineOnly,
                    TrainingFormat::NoPreference,
                ]),
                investment_tiers: Some(vec![
                    MonthlyInvestment::From150To250,
                    MonthlyInvestment::From250To350,
                ]),
                support_levels: Some(vec![
                    SupportLevel::MinimalCheckins,
                    SupportLevel::WeeklyCheckins,
                ]),
            },
        },
        ProgramTemplate {
            id: ProgramId::Hybrid,
            title: "Hybrid Coaching",
            description: "Regular in-person sessions to refine technique, with the rest of \
                          your training programmed through the app and reviewed on weekly \
                          check-ins.",
            ideal_for: vec![
                "Clients who want hands-on form coaching without full 1:1 pricing",
                "Returning exercisers rebuilding a consistent routine",
                "Gym members who want structure behind their sessions",
            ],
            format: "In-person sessions + online programming",
            price_range: "$250-450 per month",
            criteria: ProgramCriteria {
                fitness_levels: Some(vec![
                    FitnessLevel::ReturningAfterBreak,
                    FitnessLevel::SomewhatActive,
                    FitnessLevel::RegularlyActive,
                ]),
                training_formats: Some(vec![
                    TrainingFormat::Hybrid,
                    TrainingFormat::NoPreference,
                ]),
                investment_tiers: Some(vec![
                    MonthlyInvestment::From250To350,
                    MonthlyInvestment::From350To500,
                ]),
                support_levels: Some(vec![
                    SupportLevel::WeeklyCheckins,
                    SupportLevel::FrequentContact,
                ]),
            },
        },
        ProgramTemplate {
            id: ProgramId::SmallGroup,
            title: "Small Group Training",
            description: "Coach-led sessions in groups of four to six, with the energy of a \
                          community and a lower price point than private coaching.",
            ideal_for: vec![
                "Clients who thrive on group energy",
                "Budget-conscious beginners",
                "Anyone who wants workouts to feel social",
            ],
            format: "In-person group sessions",
            price_range: "$120-200 per month",
            criteria: ProgramCriteria {
                fitness_levels: Some(vec![
                    FitnessLevel::CompleteBeginner,
                    FitnessLevel::ReturningAfterBreak,
                    FitnessLevel::SomewhatActive,
                ]),
                training_formats: Some(vec![TrainingFormat::SmallGroup]),
                investment_tiers: Some(vec![
                    MonthlyInvestment::Under150,
                    MonthlyInvestment::From150To250,
                ]),
                // The group itself is the support model, so desired support
                // level says nothing about fit here and stays unscored.
                support_levels: None,
            },
        },
    ]
}
