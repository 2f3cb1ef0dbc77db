use async_trait::async_trait;
use serde_json::Value;

use super::{RequestSource, ensure_category};
use crate::error::AppError;
use crate::request::{Category, OrderBy, RequestDetails, RequestRecord};

/// Talks to a REST backend exposing `/requests/{category}`.
pub struct RemoteSource {
    category: Category,
    name: String,
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSource {
    pub fn new(category: Category, client: reqwest::Client, base_url: &str) -> Self {
        Self {
            category,
            name: format!("Remote {} requests", category),
            client,
            endpoint: endpoint(base_url, category),
        }
    }
}

fn endpoint(base_url: &str, category: Category) -> String {
    format!("{}/requests/{}", base_url.trim_end_matches('/'), category)
}

/// Records without a `type` tag belong to the endpoint's category.
fn parse_record(category: Category, mut value: Value) -> anyhow::Result<RequestRecord> {
    if let Some(object) = value.as_object_mut() {
        object
            .entry("type")
            .or_insert_with(|| Value::String(category.as_str().to_string()));
    }
    Ok(serde_json::from_value(value).map_err(AppError::from)?)
}

fn parse_list(category: Category, body: &str) -> anyhow::Result<Vec<RequestRecord>> {
    let values: Vec<Value> = serde_json::from_str(body).map_err(AppError::from)?;
    let records = values
        .into_iter()
        .map(|v| parse_record(category, v))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if let Some(stray) = records.iter().find(|r| r.category() != category) {
        anyhow::bail!(
            "{} endpoint returned a {} request (id {})",
            category,
            stray.category(),
            stray.id
        );
    }
    Ok(records)
}

fn parse_created(category: Category, body: &str) -> anyhow::Result<RequestRecord> {
    let value: Value = serde_json::from_str(body).map_err(AppError::from)?;
    let record = parse_record(category, value)?;
    ensure_category(category, &record.details)?;
    Ok(record)
}

#[async_trait]
impl RequestSource for RemoteSource {
    fn category(&self) -> Category {
        self.category
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, order: OrderBy) -> anyhow::Result<Vec<RequestRecord>> {
        tracing::debug!("GET {} order={}", self.endpoint, order.as_key());
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("order", order.as_key())])
            .send()
            .await
            .map_err(AppError::from)?;

        if !resp.status().is_success() {
            anyhow::bail!("Failed to list {} requests: HTTP {}", self.category, resp.status());
        }

        let body = resp.text().await.map_err(AppError::from)?;
        parse_list(self.category, &body)
    }

    async fn create(&self, details: RequestDetails) -> anyhow::Result<RequestRecord> {
        ensure_category(self.category, &details)?;
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&details)
            .send()
            .await
            .map_err(AppError::from)?;

        if !resp.status().is_success() {
            anyhow::bail!("Failed to create {} request: HTTP {}", self.category, resp.status());
        }

        let body = resp.text().await.map_err(AppError::from)?;
        parse_created(self.category, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::fields::{Gender, LeaseDuration, WorkSchedule};
    use crate::request::{RequestStatus, TravelDetails};

    #[test]
    fn test_endpoint_joins_base_and_category() {
        assert_eq!(
            endpoint("http://localhost:8080/api/", Category::Dating),
            "http://localhost:8080/api/requests/dating"
        );
        assert_eq!(
            endpoint("https://example.com", Category::Social),
            "https://example.com/requests/social"
        );
    }

    #[tokio::test]
    async fn test_create_checks_category_before_sending() {
        let source = RemoteSource::new(
            Category::Roommate,
            reqwest::Client::new(),
            "http://127.0.0.1:9",
        );
        let err = source
            .create(RequestDetails::Travel(TravelDetails::default()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot accept"));
    }

    #[test]
    fn test_parse_untagged_listing() {
        let body = r#"[
            {
                "id": 1,
                "budget_min": 1200,
                "budget_max": 1800,
                "preferred_locations": ["katraj", "swargate"],
                "preferred_gender": "any",
                "work_schedule": "9-5",
                "cleanliness_level": "clean",
                "lifestyle": "quiet",
                "move_in_date": "",
                "lease_duration": "1_year",
                "pets": false,
                "smoking": false,
                "status": "active",
                "created_date": "2024-01-12T09:15:00Z"
            }
        ]"#;
        let records = parse_list(Category::Roommate, body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].status, RequestStatus::Active);
        let RequestDetails::Roommate(r) = &records[0].details else {
            panic!("expected roommate");
        };
        assert_eq!(r.preferred_locations, vec!["katraj", "swargate"]);
        assert_eq!(r.preferred_gender, Gender::Any);
        assert_eq!(r.work_schedule, WorkSchedule::NineToFive);
        assert_eq!(r.lease_duration, LeaseDuration::OneYear);
        assert!(r.move_in_date.is_none());
    }

    #[test]
    fn test_parse_rejects_other_category() {
        let body = r#"[
            {"id": 1, "destination": "Oslo", "created_date": "2024-01-10T00:00:00Z"},
            {"id": 2, "type": "dating", "created_date": "2024-01-11T00:00:00Z"}
        ]"#;
        let err = parse_list(Category::Travel, body).unwrap_err();
        assert!(err.to_string().contains("dating request (id 2)"));
    }

    #[test]
    fn test_parse_minimal_record_and_unknown_fields() {
        let body = r#"[{
            "id": 9,
            "destination": "Lima",
            "created_date": "2024-02-01T08:00:00Z",
            "created_by": "someone@example.com"
        }]"#;
        let records = parse_list(Category::Travel, body).unwrap();
        assert_eq!(records[0].status, RequestStatus::Active);
        let RequestDetails::Travel(t) = &records[0].details else {
            panic!("expected travel");
        };
        assert_eq!(t.destination, "Lima");
        assert_eq!(t.group_size, 1);
        assert!(t.interests.is_empty());
        assert!(t.start_date.is_none());
    }

    #[test]
    fn test_parse_created_echo() {
        let body = r#"{
            "id": 1705312200000,
            "destination": "Tokyo, Japan",
            "start_date": "2024-03-15",
            "end_date": "2024-03-22",
            "status": "active",
            "created_date": "2024-01-15T10:30:00.000Z"
        }"#;
        let record = parse_created(Category::Travel, body).unwrap();
        assert_eq!(record.id, 1705312200000);
        assert_eq!(record.category(), Category::Travel);

        let stray = r#"{"id": 1, "type": "travel", "created_date": "2024-01-15T10:30:00Z"}"#;
        assert!(parse_created(Category::Social, stray).is_err());
        assert!(parse_list(Category::Travel, "not json").is_err());
    }
}
