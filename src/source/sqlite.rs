use std::sync::Arc;

use async_trait::async_trait;

use super::{RequestSource, ensure_category};
use crate::db::Database;
use crate::request::{Category, OrderBy, RequestDetails, RequestRecord};

/// Persists one category's requests in the local database.
pub struct SqliteSource {
    category: Category,
    name: String,
    db: Arc<Database>,
}

impl SqliteSource {
    pub fn new(category: Category, db: Arc<Database>) -> Self {
        Self {
            category,
            name: format!("Local {} requests", category),
            db,
        }
    }
}

#[async_trait]
impl RequestSource for SqliteSource {
    fn category(&self) -> Category {
        self.category
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, order: OrderBy) -> anyhow::Result<Vec<RequestRecord>> {
        self.db.list_requests(self.category, order)
    }

    async fn create(&self, details: RequestDetails) -> anyhow::Result<RequestRecord> {
        ensure_category(self.category, &details)?;
        let mut record = RequestRecord::created(0, details);
        record.id = self
            .db
            .insert_request(&record.details, record.status, &record.created_date)?;
        tracing::info!("Stored {} request {}", self.category, record.id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::request::fields::{BusinessStage, InvestmentRange};
    use crate::request::{BusinessDetails, RequestStatus, TravelDetails};

    fn source(category: Category) -> SqliteSource {
        let db = Arc::new(Database::open_in_memory().unwrap());
        SqliteSource::new(category, db)
    }

    #[tokio::test]
    async fn test_create_assigns_fields_and_persists() {
        let source = source(Category::Business);
        let details = RequestDetails::Business(BusinessDetails {
            business_idea: "Neighbourhood tool library".into(),
            skills_i_bring: vec!["Operations".into()],
            business_stage: BusinessStage::Prototype,
            investment_range: InvestmentRange::From1kTo10k,
            ..BusinessDetails::default()
        });

        let before = Utc::now();
        let created = source.create(details.clone()).await.unwrap();
        assert_eq!(created.details, details);
        assert_eq!(created.status, RequestStatus::Active);
        assert!(created.created_date >= before);

        let listed = source.list(OrderBy::NewestFirst).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].details, details);
    }

    #[tokio::test]
    async fn test_newest_first_after_several_creates() {
        let source = source(Category::Travel);
        let mut ids = Vec::new();
        for destination in ["Oslo", "Quito", "Hanoi"] {
            let created = source
                .create(RequestDetails::Travel(TravelDetails {
                    destination: destination.into(),
                    ..TravelDetails::default()
                }))
                .await
                .unwrap();
            ids.push(created.id);
        }

        let listed: Vec<_> = source
            .list(OrderBy::NewestFirst)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.reverse();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_create_rejects_other_category() {
        let source = source(Category::Travel);
        let result = source
            .create(RequestDetails::Business(BusinessDetails::default()))
            .await;
        assert!(result.is_err());
        assert!(source.list(OrderBy::NewestFirst).await.unwrap().is_empty());
    }
}
