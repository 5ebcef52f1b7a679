use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::utils::error::AppError;

/// 파티 생성 폼
///
/// `<input type="date">`, `<input type="time">` 값이 문자열로 들어옵니다.
#[derive(Debug, Deserialize, Validate)]
pub struct PartyForm {
    pub party_date: String,
    pub party_time: String,
    #[validate(length(min = 10, message = "Invitation must be at least 10 characters."))]
    pub invitation: String,
    #[validate(length(min = 1, max = 100, message = "Venue must be 1 to 100 characters."))]
    pub venue: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewParty {
    pub party_date: NaiveDate,
    pub party_time: NaiveTime,
    pub invitation: String,
    pub venue: String,
}

impl PartyForm {
    pub fn into_new_party(self) -> Result<NewParty, AppError> {
        let form = PartyForm {
            venue: self.venue.trim().to_string(),
            ..self
        };
        form.validate()?;

        Ok(NewParty {
            party_date: parse_date(&form.party_date)?,
            party_time: parse_time(&form.party_time)?,
            invitation: form.invitation,
            venue: form.venue,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation_error("Date must be in YYYY-MM-DD format."))
}

/// `HH:MM`과 `HH:MM:SS` 둘 다 허용
fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| AppError::validation_error("Time must be in HH:MM format."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PartyForm {
        PartyForm {
            party_date: "2026-12-31".to_string(),
            party_time: "20:30".to_string(),
            invitation: "Come celebrate the new year with us!".to_string(),
            venue: " Rooftop Bar ".to_string(),
        }
    }

    #[test]
    fn should_parse_valid_form() {
        let party = form().into_new_party().unwrap();

        assert_eq!(party.party_date, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        assert_eq!(party.party_time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(party.venue, "Rooftop Bar");
    }

    #[test]
    fn should_accept_time_with_seconds() {
        let party = PartyForm {
            party_time: "07:05:09".to_string(),
            ..form()
        }
        .into_new_party()
        .unwrap();

        assert_eq!(party.party_time, NaiveTime::from_hms_opt(7, 5, 9).unwrap());
    }

    #[test]
    fn should_reject_short_invitation() {
        let result = PartyForm {
            invitation: "Hi all!".to_string(),
            ..form()
        }
        .into_new_party();

        assert!(matches!(result, Err(AppError::ValidationError(ref m)) if m.contains("Invitation")));
    }

    #[test]
    fn should_accept_invitation_of_exactly_min_length() {
        let result = PartyForm {
            invitation: "0123456789".to_string(),
            ..form()
        }
        .into_new_party();

        assert!(result.is_ok());
    }

    #[test]
    fn should_reject_long_venue() {
        let result = PartyForm {
            venue: "v".repeat(101),
            ..form()
        }
        .into_new_party();

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_malformed_date_and_time() {
        let bad_date = PartyForm {
            party_date: "31/12/2026".to_string(),
            ..form()
        }
        .into_new_party();
        let bad_time = PartyForm {
            party_time: "25:00".to_string(),
            ..form()
        }
        .into_new_party();

        assert!(matches!(bad_date, Err(AppError::ValidationError(ref m)) if m.contains("Date")));
        assert!(matches!(bad_time, Err(AppError::ValidationError(ref m)) if m.contains("Time")));
    }
}
