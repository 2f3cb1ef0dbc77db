use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::request::{RequestDetails, RequestRecord};

/// A `requests` row before decoding.
#[derive(Debug, Clone)]
pub struct StoredRequest {
    pub id: i64,
    pub category: String,
    pub status: String,
    pub details: String,
    pub created_date: String,
}

impl StoredRequest {
    pub fn into_record(self) -> anyhow::Result<RequestRecord> {
        let details: RequestDetails =
            serde_json::from_str(&self.details).map_err(AppError::from)?;
        if details.category().as_str() != self.category {
            anyhow::bail!(
                "Request {} is stored as {} but holds {} details",
                self.id,
                self.category,
                details.category()
            );
        }

        let created_date = DateTime::parse_from_rfc3339(&self.created_date)
            .map_err(|e| anyhow::anyhow!("Request {} has a bad created_date: {e}", self.id))?
            .with_timezone(&Utc);

        Ok(RequestRecord {
            id: self.id,
            status: self.status.parse()?,
            created_date,
            details,
        })
    }
}
