//! Submission input handling: tag lists, lenient number parsing, and the
//! checks a request must pass before it is handed to a source.

use chrono::NaiveDate;

use crate::error::AppError;
use crate::request::fields::ActivityType;
use crate::request::{Category, RequestDetails};

pub const DEFAULT_AGE_MIN: u8 = 18;
pub const DEFAULT_AGE_MAX: u8 = 35;

/// Appends `value` trimmed. Blank values and duplicates are ignored.
/// Returns whether the list changed.
pub fn add_tag(tags: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || tags.iter().any(|t| t == value) {
        return false;
    }
    tags.push(value.to_string());
    true
}

pub fn remove_tag(tags: &mut Vec<String>, value: &str) -> bool {
    let before = tags.len();
    tags.retain(|t| t != value);
    tags.len() != before
}

/// Budget text as typed. Anything unparsable counts as zero.
pub fn parse_budget(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

pub fn parse_age(input: &str, fallback: u8) -> u8 {
    input.trim().parse().unwrap_or(fallback)
}

/// `YYYY-MM-DD`, or nothing when left blank.
pub fn parse_date(field: &'static str, input: &str) -> Result<Option<NaiveDate>, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::validation(field, format!("'{input}' is not a YYYY-MM-DD date")))
}

fn check_budget(min: f64, max: f64) -> Result<(), AppError> {
    if min > 0.0 && max > 0.0 && min > max {
        return Err(AppError::validation(
            "budget",
            format!("minimum {min} is above maximum {max}"),
        ));
    }
    Ok(())
}

fn check_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(AppError::validation(
            "end_date",
            format!("{end} is before start date {start}"),
        ));
    }
    Ok(())
}

/// Rejects submissions no source should store.
pub fn validate(details: &RequestDetails) -> Result<(), AppError> {
    match details {
        RequestDetails::Travel(t) => {
            if t.destination.trim().is_empty() {
                return Err(AppError::validation("destination", "must not be empty"));
            }
            if t.start_date.is_none() {
                return Err(AppError::validation("start_date", "is required"));
            }
            if t.end_date.is_none() {
                return Err(AppError::validation("end_date", "is required"));
            }
            if t.group_size == 0 {
                return Err(AppError::validation("group_size", "must be at least 1"));
            }
            check_budget(t.budget_min, t.budget_max)?;
            check_date_range(t.start_date, t.end_date)
        }
        RequestDetails::Roommate(r) => check_budget(r.budget_min, r.budget_max),
        RequestDetails::Business(b) => {
            if b.business_idea.trim().is_empty() {
                return Err(AppError::validation("business_idea", "must not be empty"));
            }
            Ok(())
        }
        RequestDetails::Dating(d) => {
            if d.age_min < DEFAULT_AGE_MIN {
                return Err(AppError::validation(
                    "age_min",
                    format!("must be at least {DEFAULT_AGE_MIN}"),
                ));
            }
            if d.age_min > d.age_max {
                return Err(AppError::validation(
                    "age_max",
                    format!("{} is below minimum age {}", d.age_max, d.age_min),
                ));
            }
            Ok(())
        }
        RequestDetails::Social(s) => {
            if s.preferred_date.is_none() {
                return Err(AppError::validation("preferred_date", "is required"));
            }
            if s.group_size == 0 {
                return Err(AppError::validation("group_size", "must be at least 1"));
            }
            Ok(())
        }
    }
}

pub struct ConnectionType {
    pub category: Category,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

/// Request kinds offered on the home screen. Social requests start from
/// [`SOCIAL_ACTIVITIES`] instead.
pub const CONNECTION_TYPES: &[ConnectionType] = &[
    ConnectionType {
        category: Category::Travel,
        title: "Find Travel Buddy",
        subtitle: "Explore the world together",
        description: "Find someone to share your next adventure with",
    },
    ConnectionType {
        category: Category::Roommate,
        title: "Find Roommate",
        subtitle: "Share a perfect living space",
        description: "Connect with compatible people to share rent and memories",
    },
    ConnectionType {
        category: Category::Business,
        title: "Business Partner",
        subtitle: "Build something amazing",
        description: "Find a co-founder or business partner who shares your vision",
    },
    ConnectionType {
        category: Category::Dating,
        title: "Find a Date",
        subtitle: "Meet someone special",
        description: "Connect with people for meaningful relationships",
    },
];

pub const SOCIAL_ACTIVITIES: &[(ActivityType, &str)] = &[
    (ActivityType::Dinner, "Go for Dinner"),
    (ActivityType::Shopping, "Go Shopping"),
    (ActivityType::Movie, "Watch a Movie"),
    (ActivityType::Sports, "Play Sports"),
    (ActivityType::LongDrive, "Long Drive"),
    (ActivityType::Gaming, "Gaming Session"),
    (ActivityType::Coffee, "Coffee Chat"),
    (ActivityType::Hiking, "Hiking Trip"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{DatingDetails, SocialDetails, TravelDetails};

    #[test]
    fn test_add_tag_trims_and_dedupes() {
        let mut tags = Vec::new();
        assert!(add_tag(&mut tags, "  yoga "));
        assert!(!add_tag(&mut tags, "yoga"));
        assert!(!add_tag(&mut tags, "   "));
        assert!(add_tag(&mut tags, "beaches"));
        assert_eq!(tags, vec!["yoga", "beaches"]);

        assert!(remove_tag(&mut tags, "yoga"));
        assert!(!remove_tag(&mut tags, "temples"));
        assert_eq!(tags, vec!["beaches"]);
    }

    #[test]
    fn test_lenient_numbers() {
        assert_eq!(parse_budget("1500"), 1500.0);
        assert_eq!(parse_budget(" 99.5 "), 99.5);
        assert_eq!(parse_budget(""), 0.0);
        assert_eq!(parse_budget("lots"), 0.0);
        assert_eq!(parse_budget("-20"), 0.0);

        assert_eq!(parse_age("27", DEFAULT_AGE_MIN), 27);
        assert_eq!(parse_age("", DEFAULT_AGE_MIN), 18);
        assert_eq!(parse_age("old", DEFAULT_AGE_MAX), 35);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("start_date", "").unwrap(), None);
        assert_eq!(
            parse_date("start_date", "2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(parse_date("start_date", "15/03/2024").is_err());
    }

    #[test]
    fn test_validate_travel() {
        let mut travel = TravelDetails::default();
        assert!(validate(&RequestDetails::Travel(travel.clone())).is_err());

        travel.destination = "Tokyo, Japan".into();
        assert!(validate(&RequestDetails::Travel(travel.clone())).is_err());

        travel.start_date = NaiveDate::from_ymd_opt(2024, 3, 15);
        travel.end_date = NaiveDate::from_ymd_opt(2024, 3, 22);
        travel.budget_min = 2500.0;
        travel.budget_max = 1500.0;
        let err = validate(&RequestDetails::Travel(travel.clone())).unwrap_err();
        assert!(err.to_string().contains("budget"));

        travel.budget_max = 0.0;
        assert!(validate(&RequestDetails::Travel(travel.clone())).is_ok());

        travel.start_date = NaiveDate::from_ymd_opt(2024, 3, 22);
        travel.end_date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert!(validate(&RequestDetails::Travel(travel)).is_err());
    }

    #[test]
    fn test_validate_dating_ages() {
        assert!(validate(&RequestDetails::Dating(DatingDetails::default())).is_ok());

        let dating = DatingDetails {
            age_min: 40,
            age_max: 30,
            ..DatingDetails::default()
        };
        assert!(validate(&RequestDetails::Dating(dating)).is_err());

        let dating = DatingDetails {
            age_min: 16,
            ..DatingDetails::default()
        };
        assert!(validate(&RequestDetails::Dating(dating)).is_err());
    }

    #[test]
    fn test_validate_social_needs_date() {
        let mut social = SocialDetails::for_activity(ActivityType::Movie);
        assert!(validate(&RequestDetails::Social(social.clone())).is_err());
        social.preferred_date = NaiveDate::from_ymd_opt(2024, 1, 20);
        assert!(validate(&RequestDetails::Social(social)).is_ok());
    }

    #[test]
    fn test_catalogs() {
        assert_eq!(CONNECTION_TYPES.len(), 4);
        assert!(CONNECTION_TYPES.iter().all(|t| t.category != Category::Social));
        assert_eq!(SOCIAL_ACTIVITIES.len(), 8);
    }
}
