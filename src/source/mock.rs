use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::{RequestSource, ensure_category};
use crate::request::fields::{
    ActivityType, BudgetRange, BusinessStage, BusinessType, Cleanliness, CommitmentLevel,
    CompanionPreference, DateActivity, Gender, InvestmentRange, LeaseDuration, Lifestyle,
    PersonalityPreference, RelationshipType, TimeOfDay, Timeline, TravelStyle, WorkSchedule,
};
use crate::request::{
    BusinessDetails, Category, DatingDetails, OrderBy, RequestDetails, RequestRecord,
    RequestStatus, RoommateDetails, SocialDetails, TravelDetails,
};

/// A demo source with fixed sample data.
/// `create` echoes the submission back without storing it, so `list` never
/// changes.
pub struct MockSource {
    category: Category,
    name: String,
    records: Vec<RequestRecord>,
}

impl MockSource {
    pub fn seeded(category: Category) -> Self {
        Self::with_records(category, seed_records(category))
    }

    #[cfg(test)]
    pub fn empty(category: Category) -> Self {
        Self::with_records(category, Vec::new())
    }

    pub fn with_records(category: Category, records: Vec<RequestRecord>) -> Self {
        Self {
            category,
            name: format!("Demo {} requests", category),
            records,
        }
    }
}

#[async_trait]
impl RequestSource for MockSource {
    fn category(&self) -> Category {
        self.category
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, order: OrderBy) -> anyhow::Result<Vec<RequestRecord>> {
        let mut records = self.records.clone();
        order.sort(&mut records);
        Ok(records)
    }

    async fn create(&self, details: RequestDetails) -> anyhow::Result<RequestRecord> {
        ensure_category(self.category, &details)?;
        tracing::info!("Creating {} request (demo source, not stored)", self.category);
        Ok(RequestRecord::created(Utc::now().timestamp_millis(), details))
    }
}

fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or_default()
}

fn day(s: &str) -> Option<NaiveDate> {
    s.parse().ok()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn active(id: i64, created: &str, details: RequestDetails) -> RequestRecord {
    RequestRecord {
        id,
        status: RequestStatus::Active,
        created_date: timestamp(created),
        details,
    }
}

/// Sample requests the demo source starts with.
pub fn seed_records(category: Category) -> Vec<RequestRecord> {
    match category {
        Category::Travel => vec![
            active(
                1,
                "2024-01-15T10:30:00Z",
                RequestDetails::Travel(TravelDetails {
                    destination: "Tokyo, Japan".into(),
                    start_date: day("2024-03-15"),
                    end_date: day("2024-03-22"),
                    budget_min: 1500.0,
                    budget_max: 2500.0,
                    preferred_gender: Gender::Any,
                    travel_style: TravelStyle::Comfortable,
                    interests: tags(&["culture", "food", "temples"]),
                    group_size: 2,
                }),
            ),
            active(
                2,
                "2024-01-10T14:20:00Z",
                RequestDetails::Travel(TravelDetails {
                    destination: "Bali, Indonesia".into(),
                    start_date: day("2024-04-10"),
                    end_date: day("2024-04-17"),
                    budget_min: 800.0,
                    budget_max: 1200.0,
                    preferred_gender: Gender::Any,
                    travel_style: TravelStyle::Budget,
                    interests: tags(&["beaches", "yoga", "nature"]),
                    group_size: 1,
                }),
            ),
        ],
        Category::Roommate => vec![active(
            1,
            "2024-01-12T09:15:00Z",
            RequestDetails::Roommate(RoommateDetails {
                budget_min: 1200.0,
                budget_max: 1800.0,
                preferred_locations: tags(&["katraj", "swargate"]),
                preferred_gender: Gender::Any,
                work_schedule: WorkSchedule::NineToFive,
                cleanliness_level: Cleanliness::Clean,
                lifestyle: Lifestyle::Quiet,
                move_in_date: day("2024-02-01"),
                lease_duration: LeaseDuration::OneYear,
                pets: false,
                smoking: false,
            }),
        )],
        Category::Business => vec![active(
            1,
            "2024-01-08T16:45:00Z",
            RequestDetails::Business(BusinessDetails {
                business_type: BusinessType::TechStartup,
                business_idea: "AI-powered fitness app that creates personalized workout plans"
                    .into(),
                skills_i_bring: tags(&["Frontend Development", "UI/UX Design"]),
                skills_needed: tags(&["Backend Development", "Machine Learning"]),
                commitment_level: CommitmentLevel::FullTime,
                business_stage: BusinessStage::Idea,
                investment_range: InvestmentRange::UpTo1k,
                timeline: Timeline::ThreeMonths,
            }),
        )],
        Category::Dating => vec![active(
            1,
            "2024-01-14T11:30:00Z",
            RequestDetails::Dating(DatingDetails {
                age_min: 22,
                age_max: 30,
                preferred_gender: Gender::Any,
                relationship_type: RelationshipType::Dating,
                interests: tags(&["music", "art", "coffee"]),
                location_preference: "Manhattan".into(),
                date_activity: DateActivity::Coffee,
                personality_preference: PersonalityPreference::Balanced,
            }),
        )],
        Category::Social => vec![active(
            1,
            "2024-01-16T13:20:00Z",
            RequestDetails::Social(SocialDetails {
                activity_type: ActivityType::Coffee,
                preferred_date: day("2024-01-20"),
                preferred_time: TimeOfDay::Afternoon,
                location: "Central Park Coffee".into(),
                group_size: 2,
                budget_range: BudgetRange::Moderate,
                companion_preference: CompanionPreference::SimilarAge,
                gender_preference: Gender::Any,
                activity_details: "Looking for someone to chat about books and life".into(),
            }),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_list_is_newest_first() {
        let source = MockSource::seeded(Category::Travel);
        let records = source.list(OrderBy::NewestFirst).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert!(records[0].created_date > records[1].created_date);

        let oldest = source.list(OrderBy::OldestFirst).await.unwrap();
        assert_eq!(oldest[0].id, 2);
    }

    #[tokio::test]
    async fn test_every_category_has_seed_data() {
        for category in Category::ALL {
            let records = MockSource::seeded(category)
                .list(OrderBy::NewestFirst)
                .await
                .unwrap();
            assert!(!records.is_empty());
            assert!(records.iter().all(|r| r.category() == category));
            assert!(records.iter().all(|r| r.status == RequestStatus::Active));
        }
    }

    #[tokio::test]
    async fn test_create_echoes_submission() {
        let source = MockSource::seeded(Category::Social);
        let details = RequestDetails::Social(SocialDetails {
            location: "Riverside Park".into(),
            group_size: 4,
            ..SocialDetails::for_activity(ActivityType::Hiking)
        });

        let before = Utc::now();
        let created = source.create(details.clone()).await.unwrap();
        assert_eq!(created.details, details);
        assert_eq!(created.status, RequestStatus::Active);
        assert!(created.created_date >= before);
        assert!(created.id > 0);

        // Not stored.
        let records = source.list(OrderBy::NewestFirst).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_other_category() {
        let source = MockSource::empty(Category::Roommate);
        let result = source
            .create(RequestDetails::Travel(TravelDetails::default()))
            .await;
        assert!(result.is_err());
    }
}
