use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{OptionalExtension, params};

use super::Database;
use super::models::StoredRequest;
use crate::error::AppError;
use crate::profile::UserProfile;
use crate::request::{Category, OrderBy, RequestDetails, RequestRecord, RequestStatus};

/// Fixed-width RFC 3339 so that text ordering equals time ordering.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl Database {
    // --- Requests ---

    pub fn insert_request(
        &self,
        details: &RequestDetails,
        status: RequestStatus,
        created_date: &DateTime<Utc>,
    ) -> anyhow::Result<i64> {
        let json = serde_json::to_string(details).map_err(AppError::from)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO requests (category, status, details, created_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                details.category().as_str(),
                status.as_str(),
                json,
                format_timestamp(created_date),
            ],
        )
        .map_err(AppError::from)?;
        Ok(conn.last_insert_rowid())
    }

    pub fn list_requests(
        &self,
        category: Category,
        order: OrderBy,
    ) -> anyhow::Result<Vec<RequestRecord>> {
        let sql = match order {
            OrderBy::NewestFirst => {
                "SELECT id, category, status, details, created_date
                 FROM requests WHERE category = ?1 ORDER BY created_date DESC, id DESC"
            }
            OrderBy::OldestFirst => {
                "SELECT id, category, status, details, created_date
                 FROM requests WHERE category = ?1 ORDER BY created_date ASC, id ASC"
            }
        };

        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql).map_err(AppError::from)?;
        let rows = stmt
            .query_map(params![category.as_str()], |row| {
                Ok(StoredRequest {
                    id: row.get(0)?,
                    category: row.get(1)?,
                    status: row.get(2)?,
                    details: row.get(3)?,
                    created_date: row.get(4)?,
                })
            })
            .map_err(AppError::from)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(AppError::from)?.into_record()?);
        }
        Ok(records)
    }

    // --- Profile ---

    pub fn get_profile(&self) -> anyhow::Result<Option<UserProfile>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT id, full_name, email, age, location, occupation, personality_type, bio, interests, profile_photo
                 FROM profile ORDER BY id LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<u8>>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, Option<String>>(5)?,
                        row.get::<_, Option<String>>(6)?,
                        row.get::<_, Option<String>>(7)?,
                        row.get::<_, String>(8)?,
                        row.get::<_, Option<String>>(9)?,
                    ))
                },
            )
            .optional()
            .map_err(AppError::from)?;

        let Some((
            id,
            full_name,
            email,
            age,
            location,
            occupation,
            personality_type,
            bio,
            interests,
            profile_photo,
        )) = row
        else {
            return Ok(None);
        };

        let personality_type = match personality_type {
            Some(p) => serde_json::from_value(serde_json::Value::String(p))
                .map_err(AppError::from)?,
            None => Default::default(),
        };

        Ok(Some(UserProfile {
            id,
            full_name,
            email,
            age,
            location: location.unwrap_or_default(),
            occupation: occupation.unwrap_or_default(),
            personality_type,
            bio: bio.unwrap_or_default(),
            interests: serde_json::from_str(&interests).map_err(AppError::from)?,
            profile_photo,
        }))
    }

    pub fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        let interests = serde_json::to_string(&profile.interests).map_err(AppError::from)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO profile (id, full_name, email, age, location, occupation, personality_type, bio, interests, profile_photo, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(id) DO UPDATE SET
                full_name = excluded.full_name,
                email = excluded.email,
                age = excluded.age,
                location = excluded.location,
                occupation = excluded.occupation,
                personality_type = excluded.personality_type,
                bio = excluded.bio,
                interests = excluded.interests,
                profile_photo = excluded.profile_photo,
                updated_at = excluded.updated_at",
            params![
                profile.id,
                profile.full_name,
                profile.email,
                profile.age,
                profile.location,
                profile.occupation,
                profile.personality_type.as_str(),
                profile.bio,
                interests,
                profile.profile_photo,
                format_timestamp(&Utc::now()),
            ],
        )
        .map_err(AppError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{RoommateDetails, TravelDetails};

    fn test_db() -> Database {
        Database::open_in_memory().expect("Failed to create test database")
    }

    fn travel(destination: &str) -> RequestDetails {
        RequestDetails::Travel(TravelDetails {
            destination: destination.into(),
            ..TravelDetails::default()
        })
    }

    #[test]
    fn test_request_insert_and_read_back() {
        let db = test_db();
        let at: DateTime<Utc> = "2024-01-15T10:30:00Z".parse().unwrap();
        let id = db
            .insert_request(&travel("Lisbon"), RequestStatus::Active, &at)
            .unwrap();

        let listed = db.list_requests(Category::Travel, OrderBy::NewestFirst).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].status, RequestStatus::Active);
        assert_eq!(listed[0].created_date, at);
        assert_eq!(listed[0].details, travel("Lisbon"));

        assert!(
            db.list_requests(Category::Roommate, OrderBy::NewestFirst)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_list_requests_orders_and_filters() {
        let db = test_db();
        let times: Vec<DateTime<Utc>> = [
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
            "2024-01-12T00:00:00Z",
        ]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
        for (i, at) in times.iter().enumerate() {
            db.insert_request(&travel(&format!("city-{i}")), RequestStatus::Active, at)
                .unwrap();
        }
        db.insert_request(
            &RequestDetails::Roommate(RoommateDetails::default()),
            RequestStatus::Active,
            &times[0],
        )
        .unwrap();

        let newest = db
            .list_requests(Category::Travel, OrderBy::NewestFirst)
            .unwrap();
        let destinations: Vec<_> = newest
            .iter()
            .map(|r| match &r.details {
                RequestDetails::Travel(t) => t.destination.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(destinations, vec!["city-1", "city-2", "city-0"]);

        let oldest = db
            .list_requests(Category::Travel, OrderBy::OldestFirst)
            .unwrap();
        assert_eq!(oldest.first().unwrap().created_date, times[0]);

        assert_eq!(
            db.list_requests(Category::Roommate, OrderBy::NewestFirst)
                .unwrap()
                .len(),
            1
        );
        assert!(
            db.list_requests(Category::Social, OrderBy::NewestFirst)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_profile_upsert() {
        let db = test_db();
        assert!(db.get_profile().unwrap().is_none());

        let mut profile = UserProfile::demo();
        db.save_profile(&profile).unwrap();
        assert_eq!(db.get_profile().unwrap().unwrap(), profile);

        profile.occupation = "Chef".into();
        profile.profile_photo = Some("https://example.com/me.png".into());
        db.save_profile(&profile).unwrap();
        let stored = db.get_profile().unwrap().unwrap();
        assert_eq!(stored.occupation, "Chef");
        assert_eq!(stored.profile_photo.as_deref(), Some("https://example.com/me.png"));
    }
}
