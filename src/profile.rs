use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::AppError;
use crate::form::{add_tag, remove_tag};
use crate::request::fields::PersonalityType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub age: Option<u8>,
    pub location: String,
    pub occupation: String,
    pub personality_type: PersonalityType,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_photo: Option<String>,
}

impl UserProfile {
    /// Shown until the user saves a profile of their own.
    pub fn demo() -> Self {
        Self {
            id: 1,
            full_name: "Alex Morgan".into(),
            email: "user@example.com".into(),
            age: Some(25),
            location: "Pune, India".into(),
            occupation: "Product Designer".into(),
            personality_type: PersonalityType::Extrovert,
            bio: "Loves meeting new people, weekend hikes and good coffee.".into(),
            interests: vec!["hiking".into(), "standup".into(), "coffee".into()],
            profile_photo: None,
        }
    }
}

/// Partial profile edit. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u8>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub personality_type: Option<PersonalityType>,
    pub bio: Option<String>,
    pub add_interests: Vec<String>,
    pub remove_interests: Vec<String>,
    pub profile_photo: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.location.is_none()
            && self.occupation.is_none()
            && self.personality_type.is_none()
            && self.bio.is_none()
            && self.add_interests.is_empty()
            && self.remove_interests.is_empty()
            && self.profile_photo.is_none()
    }

    pub fn apply(self, mut profile: UserProfile) -> Result<UserProfile, AppError> {
        if let Some(name) = self.full_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("full_name", "must not be empty"));
            }
            profile.full_name = name.to_string();
        }
        if let Some(email) = self.email {
            let email = email.trim();
            if !email.contains('@') {
                return Err(AppError::validation(
                    "email",
                    format!("'{email}' is not an email address"),
                ));
            }
            profile.email = email.to_string();
        }
        if let Some(age) = self.age {
            if age < 18 {
                return Err(AppError::validation("age", "must be at least 18"));
            }
            profile.age = Some(age);
        }
        if let Some(location) = self.location {
            profile.location = location.trim().to_string();
        }
        if let Some(occupation) = self.occupation {
            profile.occupation = occupation.trim().to_string();
        }
        if let Some(personality_type) = self.personality_type {
            profile.personality_type = personality_type;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        for interest in &self.add_interests {
            add_tag(&mut profile.interests, interest);
        }
        for interest in &self.remove_interests {
            remove_tag(&mut profile.interests, interest);
        }
        if let Some(photo) = self.profile_photo {
            profile.profile_photo = Some(photo).filter(|p| !p.trim().is_empty());
        }
        Ok(profile)
    }
}

/// The current user's profile.
pub fn me(db: &Database) -> anyhow::Result<UserProfile> {
    Ok(db.get_profile()?.unwrap_or_else(UserProfile::demo))
}

/// Applies `update` to the current profile and stores the result.
pub fn update_my_user_data(db: &Database, update: ProfileUpdate) -> anyhow::Result<UserProfile> {
    let updated = update.apply(me(db)?)?;
    db.save_profile(&updated)?;
    tracing::info!("Updated profile for {}", updated.full_name);
    Ok(updated)
}
