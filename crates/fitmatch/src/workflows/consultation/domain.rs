use serde::{Deserialize, Serialize};

/// Questionnaire response collected by the consultation UI.
///
/// Field names and enum values follow the questionnaire's JSON contract:
/// struct fields serialize camelCase and every categorical value keeps its
/// kebab-case questionnaire literal. A freshly created set has every
/// single-choice field `None`, every multi-choice field empty, and empty
/// identity strings, which is exactly what `Default` (and a partial JSON
/// payload) produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerSet {
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub fitness_level: Option<FitnessLevel>,
    pub last_workout_time: Option<LastWorkoutTime>,
    pub motivation: Option<Motivation>,
    pub workout_time: Option<WorkoutTime>,
    pub workout_frequency: Option<WorkoutFrequency>,
    pub workout_location: Option<WorkoutLocation>,
    pub support_level: Option<SupportLevel>,
    pub nutrition_interest: Option<NutritionInterest>,
    pub monthly_investment: Option<MonthlyInvestment>,
    pub training_format: Option<TrainingFormat>,
    pub payment_structure: Option<PaymentStructure>,
    pub start_timeline: Option<StartTimeline>,
    pub fitness_goals: Vec<FitnessGoal>,
    pub challenges: Vec<Challenge>,
    pub physical_considerations: Vec<PhysicalConsideration>,
    pub accountability_methods: Vec<AccountabilityMethod>,
    pub wellness_areas: Vec<WellnessArea>,
}

impl AnswerSet {
    /// First whitespace-separated token of the contact name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.contact_name.split_whitespace().next()
    }
}

/// Self-assessed starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    CompleteBeginner,
    ReturningAfterBreak,
    SomewhatActive,
    RegularlyActive,
    VeryAthletic,
}

impl FitnessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompleteBeginner => "Complete Beginner",
            Self::ReturningAfterBreak => "Returning After a Break",
            Self::SomewhatActive => "Somewhat Active",
            Self::RegularlyActive => "Regularly Active",
            Self::VeryAthletic => "Very Athletic",
        }
    }

    /// Phrase completing "You're ..." in the personalized message.
    pub const fn journey_phrase(self) -> &'static str {
        match self {
            Self::CompleteBeginner => "just starting your fitness journey",
            Self::ReturningAfterBreak => "getting back into training after some time away",
            Self::SomewhatActive => "already moving and ready for more structure",
            Self::RegularlyActive => "consistent and ready to push further",
            Self::VeryAthletic => "training at a high level and looking for an edge",
        }
    }

    /// Levels that benefit most from close coaching guidance.
    pub const fn is_starting_out(self) -> bool {
        matches!(self, Self::CompleteBeginner | Self::ReturningAfterBreak)
    }
}

/// How recently the client last trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LastWorkoutTime {
    WithinLastWeek,
    WithinLastMonth,
    #[serde(rename = "1-6-months-ago")]
    OneToSixMonthsAgo,
    #[serde(rename = "6-12-months-ago")]
    SixToTwelveMonthsAgo,
    OverAYearAgo,
}

/// Primary reason for reaching out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motivation {
    LookAndFeelBetter,
    UpcomingEvent,
    HealthConcerns,
    AthleticPerformance,
    KeepUpWithLife,
}

/// Preferred time of day to train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutTime {
    EarlyMorning,
    MidMorning,
    Lunchtime,
    Afternoon,
    Evening,
}

/// Sessions per week the client can commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutFrequency {
    #[serde(rename = "1-2x-per-week")]
    OnceOrTwicePerWeek,
    #[serde(rename = "3x-per-week")]
    ThreeTimesPerWeek,
    #[serde(rename = "4-5x-per-week")]
    FourToFiveTimesPerWeek,
    #[serde(rename = "daily")]
    Daily,
}

/// Where the client wants to train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutLocation {
    HomeOnly,
    GymOnly,
    Outdoors,
    MixOfLocations,
}

/// How much coach contact the client is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportLevel {
    MinimalCheckins,
    WeeklyCheckins,
    FrequentContact,
    DailyAccountability,
}

impl SupportLevel {
    /// Levels that signal a desire for hands-on coaching.
    pub const fn wants_close_contact(self) -> bool {
        matches!(self, Self::FrequentContact | Self::DailyAccountability)
    }
}

/// Appetite for nutrition coaching alongside training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutritionInterest {
    NotRightNow,
    GeneralTips,
    MacroCoaching,
    FullMealPlan,
}

impl NutritionInterest {
    /// True for the two answers that ask for structured nutrition work.
    pub const fn is_high_engagement(self) -> bool {
        matches!(self, Self::MacroCoaching | Self::FullMealPlan)
    }
}

/// Monthly budget band in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthlyInvestment {
    #[serde(rename = "under-150")]
    Under150,
    #[serde(rename = "150-250")]
    From150To250,
    #[serde(rename = "250-350")]
    From250To350,
    #[serde(rename = "350-500")]
    From350To500,
    #[serde(rename = "500-plus")]
    Above500,
}

/// Delivery format the client prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingFormat {
    InPersonOnly,
    OnlineOnly,
    Hybrid,
    SmallGroup,
    NoPreference,
}

/// How the client prefers to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStructure {
    MonthlySubscription,
    PackageUpfront,
    PayPerSession,
}

/// How soon the client wants to begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartTimeline {
    #[serde(rename = "this-week")]
    ThisWeek,
    #[serde(rename = "next-1-2-weeks")]
    NextOneToTwoWeeks,
    #[serde(rename = "within-a-month")]
    WithinAMonth,
    #[serde(rename = "just-exploring")]
    JustExploring,
}

impl StartTimeline {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThisWeek => "this week",
            Self::NextOneToTwoWeeks => "in the next 1-2 weeks",
            Self::WithinAMonth => "within a month",
            Self::JustExploring => "just exploring",
        }
    }
}

/// Training outcomes the client selected (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    WeightManagement,
    BuildingStrength,
    MuscleDefinition,
    CardioEndurance,
    FlexibilityMobility,
    OverallHealth,
    SportSpecific,
}

impl FitnessGoal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightManagement => "weight management",
            Self::BuildingStrength => "building strength",
            Self::MuscleDefinition => "muscle definition",
            Self::CardioEndurance => "cardio endurance",
            Self::FlexibilityMobility => "flexibility and mobility",
            Self::OverallHealth => "overall health",
            Self::SportSpecific => "sport-specific training",
        }
    }
}

/// Obstacles the client expects to face (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Challenge {
    LimitedTime,
    StayingMotivated,
    PastInjuries,
    UnpredictableSchedule,
    NoEquipment,
    NotSureWhereToStart,
}

/// Physical limitations a coach needs to program around (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalConsideration {
    KneeIssues,
    BackIssues,
    ShoulderIssues,
    PregnancyPostpartum,
    ChronicCondition,
    None,
}

/// What keeps the client on track (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountabilityMethod {
    GroupCommunity,
    CoachCheckins,
    ProgressTracking,
    WorkoutPartner,
}

/// Wellness areas beyond training the client flagged (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WellnessArea {
    SleepQuality,
    StressManagement,
    NutritionHabits,
    EnergyLevels,
    Mindset,
}
