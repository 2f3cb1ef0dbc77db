pub mod fields;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use fields::{
    ActivityType, BudgetRange, BusinessStage, BusinessType, Cleanliness, CommitmentLevel,
    CompanionPreference, DateActivity, Gender, InvestmentRange, LeaseDuration, Lifestyle,
    PersonalityPreference, RelationshipType, TimeOfDay, Timeline, TravelStyle, WorkSchedule,
};

/// One partition of the request domain, each with its own field set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Travel,
    Roommate,
    Business,
    Dating,
    Social,
}

impl Category {
    /// Display order of the connections tabs.
    pub const ALL: [Category; 5] = [
        Category::Travel,
        Category::Roommate,
        Category::Business,
        Category::Dating,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Travel => "travel",
            Category::Roommate => "roommate",
            Category::Business => "business",
            Category::Dating => "dating",
            Category::Social => "social",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::Roommate => "Roommate",
            Category::Business => "Business",
            Category::Dating => "Dating",
            Category::Social => "Social",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn empty_message(&self) -> String {
        format!("No {} requests yet", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Active,
    Matched,
    Closed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Active => "active",
            RequestStatus::Matched => "matched",
            RequestStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RequestStatus::Active),
            "matched" => Ok(RequestStatus::Matched),
            "closed" => Ok(RequestStatus::Closed),
            other => Err(AppError::UnknownStatus(other.to_string())),
        }
    }
}

/// Calendar dates as `YYYY-MM-DD` text, where a blank (or null) value
/// means "not set". `None` is written back as `""`.
mod blank_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.collect_str(&d.format(FORMAT)),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Listing order over `created_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl OrderBy {
    pub fn as_key(&self) -> &'static str {
        match self {
            OrderBy::NewestFirst => "-created_date",
            OrderBy::OldestFirst => "created_date",
        }
    }

    /// Stable in-place sort of `records` by creation time.
    pub fn sort(&self, records: &mut [RequestRecord]) {
        match self {
            OrderBy::NewestFirst => records.sort_by(|a, b| b.created_date.cmp(&a.created_date)),
            OrderBy::OldestFirst => records.sort_by(|a, b| a.created_date.cmp(&b.created_date)),
        }
    }
}

impl FromStr for OrderBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-created_date" => Ok(OrderBy::NewestFirst),
            "created_date" => Ok(OrderBy::OldestFirst),
            other => Err(AppError::UnknownOrder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelDetails {
    pub destination: String,
    #[serde(with = "blank_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "blank_date")]
    pub end_date: Option<NaiveDate>,
    pub budget_min: f64,
    pub budget_max: f64,
    pub preferred_gender: Gender,
    pub travel_style: TravelStyle,
    pub interests: Vec<String>,
    pub group_size: u32,
}

impl Default for TravelDetails {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: None,
            end_date: None,
            budget_min: 0.0,
            budget_max: 0.0,
            preferred_gender: Gender::default(),
            travel_style: TravelStyle::default(),
            interests: Vec::new(),
            group_size: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoommateDetails {
    pub budget_min: f64,
    pub budget_max: f64,
    pub preferred_locations: Vec<String>,
    pub preferred_gender: Gender,
    pub work_schedule: WorkSchedule,
    pub cleanliness_level: Cleanliness,
    pub lifestyle: Lifestyle,
    #[serde(with = "blank_date")]
    pub move_in_date: Option<NaiveDate>,
    pub lease_duration: LeaseDuration,
    pub pets: bool,
    pub smoking: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDetails {
    pub business_type: BusinessType,
    pub business_idea: String,
    pub skills_i_bring: Vec<String>,
    pub skills_needed: Vec<String>,
    pub commitment_level: CommitmentLevel,
    pub business_stage: BusinessStage,
    pub investment_range: InvestmentRange,
    pub timeline: Timeline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatingDetails {
    pub age_min: u8,
    pub age_max: u8,
    pub preferred_gender: Gender,
    pub relationship_type: RelationshipType,
    pub interests: Vec<String>,
    pub location_preference: String,
    pub date_activity: DateActivity,
    pub personality_preference: PersonalityPreference,
}

impl Default for DatingDetails {
    fn default() -> Self {
        Self {
            age_min: 18,
            age_max: 35,
            preferred_gender: Gender::default(),
            relationship_type: RelationshipType::default(),
            interests: Vec::new(),
            location_preference: String::new(),
            date_activity: DateActivity::default(),
            personality_preference: PersonalityPreference::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialDetails {
    pub activity_type: ActivityType,
    #[serde(with = "blank_date")]
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: TimeOfDay,
    pub location: String,
    pub group_size: u32,
    pub budget_range: BudgetRange,
    pub companion_preference: CompanionPreference,
    pub gender_preference: Gender,
    pub activity_details: String,
}

impl SocialDetails {
    pub fn for_activity(activity_type: ActivityType) -> Self {
        Self {
            activity_type,
            preferred_date: None,
            preferred_time: TimeOfDay::default(),
            location: String::new(),
            group_size: 1,
            budget_range: BudgetRange::default(),
            companion_preference: CompanionPreference::default(),
            gender_preference: Gender::default(),
            activity_details: String::new(),
        }
    }
}

impl Default for SocialDetails {
    fn default() -> Self {
        Self::for_activity(ActivityType::default())
    }
}

/// Category-specific payload of a request, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestDetails {
    Travel(TravelDetails),
    Roommate(RoommateDetails),
    Business(BusinessDetails),
    Dating(DatingDetails),
    Social(SocialDetails),
}

impl RequestDetails {
    pub fn category(&self) -> Category {
        match self {
            RequestDetails::Travel(_) => Category::Travel,
            RequestDetails::Roommate(_) => Category::Roommate,
            RequestDetails::Business(_) => Category::Business,
            RequestDetails::Dating(_) => Category::Dating,
            RequestDetails::Social(_) => Category::Social,
        }
    }
}

/// A single submitted request as a source hands it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: i64,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_date: DateTime<Utc>,
    #[serde(flatten)]
    pub details: RequestDetails,
}

impl RequestRecord {
    /// Attaches the fields a source assigns on creation.
    pub fn created(id: i64, details: RequestDetails) -> Self {
        Self {
            id,
            status: RequestStatus::Active,
            created_date: Utc::now(),
            details,
        }
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }
}
