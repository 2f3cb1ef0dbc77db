use clap::{Args, Subcommand};

use crate::form::{
    DEFAULT_AGE_MAX, DEFAULT_AGE_MIN, add_tag, parse_age, parse_budget, parse_date, validate,
};
use crate::request::fields::{
    ActivityType, BudgetRange, BusinessStage, BusinessType, Cleanliness, CommitmentLevel,
    CompanionPreference, DateActivity, Gender, InvestmentRange, LeaseDuration, Lifestyle,
    PersonalityPreference, RelationshipType, TimeOfDay, Timeline, TravelStyle, WorkSchedule,
};
use crate::request::{
    BusinessDetails, DatingDetails, RequestDetails, RoommateDetails, SocialDetails, TravelDetails,
};
use crate::source::SourceSet;

#[derive(Subcommand)]
pub enum SubmitCommand {
    /// Find a travel buddy
    Travel(TravelArgs),
    /// Find a roommate
    Roommate(RoommateArgs),
    /// Find a business partner
    Business(BusinessArgs),
    /// Find a date
    Dating(DatingArgs),
    /// Find company for a social activity
    Social(SocialArgs),
}

#[derive(Args)]
pub struct TravelArgs {
    /// Where you are going
    #[arg(long)]
    pub destination: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,
    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: String,
    #[arg(long, default_value = "")]
    pub budget_min: String,
    #[arg(long, default_value = "")]
    pub budget_max: String,
    #[arg(long, value_enum, default_value_t = Gender::default())]
    pub preferred_gender: Gender,
    #[arg(long, value_enum, default_value_t = TravelStyle::default())]
    pub travel_style: TravelStyle,
    /// Repeat for several interests
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    #[arg(long, default_value_t = 1)]
    pub group_size: u32,
}

#[derive(Args)]
pub struct RoommateArgs {
    /// Monthly budget, lower bound
    #[arg(long)]
    pub budget_min: String,
    /// Monthly budget, upper bound
    #[arg(long)]
    pub budget_max: String,
    /// Repeat for several areas
    #[arg(long = "location")]
    pub preferred_locations: Vec<String>,
    #[arg(long, value_enum, default_value_t = Gender::default())]
    pub preferred_gender: Gender,
    #[arg(long, value_enum, default_value_t = WorkSchedule::default())]
    pub work_schedule: WorkSchedule,
    #[arg(long, value_enum, default_value_t = Cleanliness::default())]
    pub cleanliness_level: Cleanliness,
    #[arg(long, value_enum, default_value_t = Lifestyle::default())]
    pub lifestyle: Lifestyle,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub move_in_date: String,
    #[arg(long, value_enum, default_value_t = LeaseDuration::default())]
    pub lease_duration: LeaseDuration,
    #[arg(long)]
    pub pets: bool,
    #[arg(long)]
    pub smoking: bool,
}

#[derive(Args)]
pub struct BusinessArgs {
    /// What you want to build
    #[arg(long)]
    pub idea: String,
    #[arg(long, value_enum, default_value_t = BusinessType::default())]
    pub business_type: BusinessType,
    /// Repeat for several skills
    #[arg(long = "skill-i-bring")]
    pub skills_i_bring: Vec<String>,
    /// Repeat for several skills
    #[arg(long = "skill-needed")]
    pub skills_needed: Vec<String>,
    #[arg(long, value_enum, default_value_t = CommitmentLevel::default())]
    pub commitment_level: CommitmentLevel,
    #[arg(long, value_enum, default_value_t = BusinessStage::default())]
    pub business_stage: BusinessStage,
    #[arg(long, value_enum, default_value_t = InvestmentRange::default())]
    pub investment_range: InvestmentRange,
    #[arg(long, value_enum, default_value_t = Timeline::default())]
    pub timeline: Timeline,
}

#[derive(Args)]
pub struct DatingArgs {
    #[arg(long, default_value = "")]
    pub age_min: String,
    #[arg(long, default_value = "")]
    pub age_max: String,
    #[arg(long, value_enum, default_value_t = Gender::default())]
    pub preferred_gender: Gender,
    #[arg(long, value_enum, default_value_t = RelationshipType::default())]
    pub relationship_type: RelationshipType,
    /// Repeat for several interests
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    #[arg(long, default_value = "")]
    pub location_preference: String,
    #[arg(long, value_enum, default_value_t = DateActivity::default())]
    pub date_activity: DateActivity,
    #[arg(long, value_enum, default_value_t = PersonalityPreference::default())]
    pub personality_preference: PersonalityPreference,
}

#[derive(Args)]
pub struct SocialArgs {
    #[arg(long, value_enum)]
    pub activity: ActivityType,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long, value_enum, default_value_t = TimeOfDay::default())]
    pub time: TimeOfDay,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value_t = 1)]
    pub group_size: u32,
    #[arg(long, value_enum, default_value_t = BudgetRange::default())]
    pub budget_range: BudgetRange,
    #[arg(long, value_enum, default_value_t = CompanionPreference::default())]
    pub companion_preference: CompanionPreference,
    #[arg(long, value_enum, default_value_t = Gender::default())]
    pub gender_preference: Gender,
    /// Anything else people should know
    #[arg(long, default_value = "")]
    pub details: String,
}

fn tag_list(values: &[String]) -> Vec<String> {
    let mut tags = Vec::new();
    for v in values {
        add_tag(&mut tags, v);
    }
    tags
}

impl SubmitCommand {
    /// Turns command-line input into request details, applying the same
    /// coercions as the submission forms.
    pub fn into_details(self) -> anyhow::Result<RequestDetails> {
        let details = match self {
            SubmitCommand::Travel(a) => RequestDetails::Travel(TravelDetails {
                destination: a.destination.trim().to_string(),
                start_date: parse_date("start_date", &a.start_date)?,
                end_date: parse_date("end_date", &a.end_date)?,
                budget_min: parse_budget(&a.budget_min),
                budget_max: parse_budget(&a.budget_max),
                preferred_gender: a.preferred_gender,
                travel_style: a.travel_style,
                interests: tag_list(&a.interests),
                group_size: a.group_size,
            }),
            SubmitCommand::Roommate(a) => RequestDetails::Roommate(RoommateDetails {
                budget_min: parse_budget(&a.budget_min),
                budget_max: parse_budget(&a.budget_max),
                preferred_locations: tag_list(&a.preferred_locations),
                preferred_gender: a.preferred_gender,
                work_schedule: a.work_schedule,
                cleanliness_level: a.cleanliness_level,
                lifestyle: a.lifestyle,
                move_in_date: parse_date("move_in_date", &a.move_in_date)?,
                lease_duration: a.lease_duration,
                pets: a.pets,
                smoking: a.smoking,
            }),
            SubmitCommand::Business(a) => RequestDetails::Business(BusinessDetails {
                business_type: a.business_type,
                business_idea: a.idea.trim().to_string(),
                skills_i_bring: tag_list(&a.skills_i_bring),
                skills_needed: tag_list(&a.skills_needed),
                commitment_level: a.commitment_level,
                business_stage: a.business_stage,
                investment_range: a.investment_range,
                timeline: a.timeline,
            }),
            SubmitCommand::Dating(a) => RequestDetails::Dating(DatingDetails {
                age_min: parse_age(&a.age_min, DEFAULT_AGE_MIN),
                age_max: parse_age(&a.age_max, DEFAULT_AGE_MAX),
                preferred_gender: a.preferred_gender,
                relationship_type: a.relationship_type,
                interests: tag_list(&a.interests),
                location_preference: a.location_preference.trim().to_string(),
                date_activity: a.date_activity,
                personality_preference: a.personality_preference,
            }),
            SubmitCommand::Social(a) => RequestDetails::Social(SocialDetails {
                preferred_date: parse_date("preferred_date", &a.date)?,
                preferred_time: a.time,
                location: a.location.trim().to_string(),
                group_size: a.group_size,
                budget_range: a.budget_range,
                companion_preference: a.companion_preference,
                gender_preference: a.gender_preference,
                activity_details: a.details,
                ..SocialDetails::for_activity(a.activity)
            }),
        };
        validate(&details)?;
        Ok(details)
    }
}

pub async fn submit(sources: &SourceSet, request: SubmitCommand) -> anyhow::Result<()> {
    let details = request.into_details()?;
    let category = details.category();
    let source = sources.get(category);

    let record = source.create(details).await?;
    tracing::info!("Created {} request {} via {}", category, record.id, source.name());

    println!("Created {} request #{}:", category, record.id);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};
    use crate::request::Category;

    fn parse(args: &[&str]) -> SubmitCommand {
        let mut argv = vec!["socialsphere", "submit"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Submit { request } => request,
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_travel_defaults_and_coercion() {
        let cmd = parse(&[
            "travel",
            "--destination",
            " Lisbon ",
            "--start-date",
            "2024-05-01",
            "--end-date",
            "2024-05-08",
            "--budget-min",
            "abc",
            "--budget-max",
            "1200",
            "--interest",
            "food",
            "--interest",
            " food ",
            "--interest",
            "surf",
        ]);
        let RequestDetails::Travel(t) = cmd.into_details().unwrap() else {
            panic!("expected travel");
        };
        assert_eq!(t.destination, "Lisbon");
        assert_eq!(t.budget_min, 0.0);
        assert_eq!(t.budget_max, 1200.0);
        assert_eq!(t.interests, vec!["food", "surf"]);
        assert_eq!(t.travel_style, TravelStyle::Comfortable);
        assert_eq!(t.group_size, 1);
    }

    #[test]
    fn test_roommate_literal_enum_values() {
        let cmd = parse(&[
            "roommate",
            "--budget-min",
            "900",
            "--budget-max",
            "1400",
            "--work-schedule",
            "night_shift",
            "--lease-duration",
            "6_months",
            "--pets",
        ]);
        let RequestDetails::Roommate(r) = cmd.into_details().unwrap() else {
            panic!("expected roommate");
        };
        assert_eq!(r.work_schedule, WorkSchedule::NightShift);
        assert_eq!(r.lease_duration, LeaseDuration::SixMonths);
        assert!(r.pets);
        assert!(!r.smoking);
        assert!(r.move_in_date.is_none());
    }

    #[test]
    fn test_dating_age_fallbacks() {
        let cmd = parse(&["dating", "--age-min", "x"]);
        let RequestDetails::Dating(d) = cmd.into_details().unwrap() else {
            panic!("expected dating");
        };
        assert_eq!((d.age_min, d.age_max), (18, 35));
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let cmd = parse(&["business", "--idea", "   "]);
        let err = cmd.into_details().unwrap_err();
        assert!(err.to_string().contains("business_idea"));
    }

    #[tokio::test]
    async fn test_submit_social_to_mock_source() {
        let sources = crate::source::build_mock_sources().unwrap();
        let cmd = parse(&[
            "social",
            "--activity",
            "long_drive",
            "--date",
            "2024-02-10",
            "--group-size",
            "3",
        ]);
        let details = cmd.into_details().unwrap();
        assert_eq!(details.category(), Category::Social);
        let record = sources.get(Category::Social).create(details.clone()).await.unwrap();
        assert_eq!(record.details, details);
    }
}
