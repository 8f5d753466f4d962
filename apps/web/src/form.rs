use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::{AdSchedule, CheckRequest, ContentMetadata};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a country")]
    MissingCountry,
    #[error("Please enter a content title")]
    MissingTitle,
    #[error("Invalid ad date: {0}")]
    InvalidAdDate(String),
    #[error("Invalid ad time: {0}")]
    InvalidAdTime(String),
}

/// Raw values of the check form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckForm {
    pub country: String,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub tags: String,
    pub has_ads: bool,
    pub ad_date: String,
    pub ad_time: String,
}

impl CheckForm {
    pub fn into_request(self) -> Result<CheckRequest, FormError> {
        let country = self.country.trim().to_string();
        if country.is_empty() {
            return Err(FormError::MissingCountry);
        }
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let ad_schedule = if self.has_ads {
            ad_schedule(&self.ad_date, &self.ad_time)?
        } else {
            None
        };

        Ok(CheckRequest {
            country,
            content_metadata: ContentMetadata {
                title,
                genre: self.genre,
                description: self.description,
                tags: parse_tags(&self.tags),
                features: Vec::new(),
            },
            ad_schedule,
        })
    }
}

/// Split a comma separated tag field, trimming each entry.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

// A schedule exists only when both halves were supplied.
fn ad_schedule(date: &str, time: &str) -> Result<Option<AdSchedule>, FormError> {
    let (date, time) = (date.trim(), time.trim());
    if date.is_empty() || time.is_empty() {
        return Ok(None);
    }

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidAdDate(date.to_string()))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| FormError::InvalidAdTime(time.to_string()))?;

    Ok(Some(AdSchedule {
        scheduled_time: date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CheckForm {
        CheckForm {
            country: "south_korea".to_string(),
            title: "Show A".to_string(),
            genre: "drama".to_string(),
            ..CheckForm::default()
        }
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn schedule_requires_date_and_time() {
        let request = CheckForm {
            has_ads: true,
            ad_date: "2025-03-01".to_string(),
            ..form()
        }
        .into_request()
        .unwrap();
        assert!(request.ad_schedule.is_none());

        let request = CheckForm {
            has_ads: true,
            ad_date: "2025-03-01".to_string(),
            ad_time: "22:30".to_string(),
            ..form()
        }
        .into_request()
        .unwrap();
        assert_eq!(
            request.ad_schedule.unwrap().scheduled_time,
            "2025-03-01T22:30:00"
        );
    }

    #[test]
    fn schedule_is_ignored_when_ads_are_off() {
        let request = CheckForm {
            has_ads: false,
            ad_date: "2025-03-01".to_string(),
            ad_time: "22:30".to_string(),
            ..form()
        }
        .into_request()
        .unwrap();
        assert!(request.ad_schedule.is_none());
    }

    #[test]
    fn invalid_schedule_is_reported() {
        let err = CheckForm {
            has_ads: true,
            ad_date: "2025-13-01".to_string(),
            ad_time: "22:30".to_string(),
            ..form()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(err, FormError::InvalidAdDate("2025-13-01".to_string()));
    }

    #[test]
    fn country_and_title_are_required() {
        let err = CheckForm {
            country: "  ".to_string(),
            ..form()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(err, FormError::MissingCountry);

        let err = CheckForm {
            title: String::new(),
            ..form()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(err, FormError::MissingTitle);
    }

    #[test]
    fn request_carries_form_values() {
        let request = CheckForm {
            tags: "a,b".to_string(),
            ..form()
        }
        .into_request()
        .unwrap();

        assert_eq!(request.country, "south_korea");
        assert_eq!(request.content_metadata.title, "Show A");
        assert_eq!(request.content_metadata.tags, vec!["a", "b"]);
        assert!(request.content_metadata.features.is_empty());
    }
}
