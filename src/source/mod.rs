pub mod mock;
pub mod remote;
pub mod sqlite;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::db::Database;
use crate::error::AppError;
use crate::request::{Category, OrderBy, RequestDetails, RequestRecord};

/// Data provider for a single category.
///
/// `list` hands records back in the requested order; the aggregator relies on
/// that and never re-sorts. `create` assigns `id`, `status` and
/// `created_date` and echoes every submitted field back unchanged.
#[async_trait]
pub trait RequestSource: Send + Sync {
    fn category(&self) -> Category;
    fn name(&self) -> &str;
    async fn list(&self, order: OrderBy) -> anyhow::Result<Vec<RequestRecord>>;
    async fn create(&self, details: RequestDetails) -> anyhow::Result<RequestRecord>;
}

/// Rejects details that belong to another category.
pub fn ensure_category(expected: Category, details: &RequestDetails) -> Result<(), AppError> {
    let given = details.category();
    if given != expected {
        return Err(AppError::CategoryMismatch {
            source_category: expected,
            given,
        });
    }
    Ok(())
}

/// Exactly one source per category.
#[derive(Clone)]
pub struct SourceSet {
    sources: [Arc<dyn RequestSource>; 5],
}

impl SourceSet {
    /// Slots each source by its category. Fails if a category is missing or
    /// claimed twice.
    pub fn new(sources: Vec<Arc<dyn RequestSource>>) -> anyhow::Result<Self> {
        let mut slots: [Option<Arc<dyn RequestSource>>; 5] = Default::default();
        for source in sources {
            let slot = &mut slots[source.category().index()];
            if slot.is_some() {
                return Err(AppError::Config(format!(
                    "More than one source registered for {}",
                    source.category()
                ))
                .into());
            }
            *slot = Some(source);
        }

        let [travel, roommate, business, dating, social] = slots;
        let missing = |c: Category| AppError::Config(format!("No source registered for {c}"));
        Ok(Self {
            sources: [
                travel.ok_or_else(|| missing(Category::Travel))?,
                roommate.ok_or_else(|| missing(Category::Roommate))?,
                business.ok_or_else(|| missing(Category::Business))?,
                dating.ok_or_else(|| missing(Category::Dating))?,
                social.ok_or_else(|| missing(Category::Social))?,
            ],
        })
    }

    pub fn get(&self, category: Category) -> &Arc<dyn RequestSource> {
        &self.sources[category.index()]
    }

    /// Sources in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn RequestSource>> {
        self.sources.iter()
    }
}

/// In-memory demo sources seeded with sample requests.
pub fn build_mock_sources() -> anyhow::Result<SourceSet> {
    SourceSet::new(
        Category::ALL
            .iter()
            .map(|&c| Arc::new(mock::MockSource::seeded(c)) as Arc<dyn RequestSource>)
            .collect(),
    )
}

/// Sources persisting into the local database.
pub fn build_sqlite_sources(db: Arc<Database>) -> anyhow::Result<SourceSet> {
    SourceSet::new(
        Category::ALL
            .iter()
            .map(|&c| Arc::new(sqlite::SqliteSource::new(c, db.clone())) as Arc<dyn RequestSource>)
            .collect(),
    )
}

/// Sources backed by a REST API rooted at `base_url`.
pub fn build_remote_sources(base_url: &str, timeout: Duration) -> anyhow::Result<SourceSet> {
    let client = reqwest::Client::builder()
        .user_agent("socialsphere")
        .timeout(timeout)
        .build()
        .map_err(AppError::from)?;

    SourceSet::new(
        Category::ALL
            .iter()
            .map(|&c| {
                Arc::new(remote::RemoteSource::new(c, client.clone(), base_url))
                    as Arc<dyn RequestSource>
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{DatingDetails, TravelDetails};

    #[test]
    fn test_build_mock_sources() {
        let sources = build_mock_sources().unwrap();
        for category in Category::ALL {
            assert_eq!(sources.get(category).category(), category);
        }
        let order: Vec<_> = sources.iter().map(|s| s.category()).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_source_set_rejects_duplicates_and_gaps() {
        let mut sources: Vec<Arc<dyn RequestSource>> = Category::ALL
            .iter()
            .map(|&c| Arc::new(mock::MockSource::empty(c)) as Arc<dyn RequestSource>)
            .collect();
        sources.push(Arc::new(mock::MockSource::empty(Category::Travel)));
        assert!(SourceSet::new(sources).is_err());

        let partial: Vec<Arc<dyn RequestSource>> =
            vec![Arc::new(mock::MockSource::empty(Category::Travel))];
        let err = SourceSet::new(partial).err().unwrap();
        assert!(err.to_string().contains("roommate"));
    }

    #[test]
    fn test_ensure_category() {
        let travel = RequestDetails::Travel(TravelDetails::default());
        assert!(ensure_category(Category::Travel, &travel).is_ok());

        let dating = RequestDetails::Dating(DatingDetails::default());
        assert!(matches!(
            ensure_category(Category::Travel, &dating),
            Err(AppError::CategoryMismatch {
                source_category: Category::Travel,
                given: Category::Dating,
            })
        ));
    }
}
