use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{ClientPayload, NewClient, SimulationInput, SimulationPayload};

/// Spanish DNI format: 8 digits plus one check letter. I, O and U are never
/// used as check letters. This is a format check only; the numeric part is
/// not verified against the letter.
static DNI_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{8}[A-HJ-NP-TV-Z]$").expect("invalid DNI pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for field: {0}")]
    InvalidRange(&'static str),
}

/// True iff the string has the shape of a Spanish DNI.
pub fn is_valid_national_id(id: &str) -> bool {
    DNI_FORMAT.is_match(id)
}

/// Check a create body for presence and basic ranges, producing the typed
/// field set on success.
pub fn validate_client_payload(payload: ClientPayload) -> Result<NewClient, ValidationError> {
    let name = payload.name.ok_or(ValidationError::MissingField("name"))?;
    let national_id = payload
        .national_id
        .ok_or(ValidationError::MissingField("nationalId"))?;
    let email = payload.email.ok_or(ValidationError::MissingField("email"))?;
    let capital = payload
        .capital
        .ok_or(ValidationError::MissingField("capital"))?;

    if name.is_empty() {
        return Err(ValidationError::InvalidRange("name"));
    }
    if national_id.is_empty() {
        return Err(ValidationError::InvalidRange("nationalId"));
    }
    if email.is_empty() {
        return Err(ValidationError::InvalidRange("email"));
    }
    if capital <= 0.0 {
        return Err(ValidationError::InvalidRange("capital"));
    }

    Ok(NewClient {
        name,
        national_id,
        email,
        capital,
    })
}

/// Check a simulation body: positive capital, non-negative rate and a term
/// that is a positive whole number of years.
pub fn validate_simulation_payload(
    payload: SimulationPayload,
) -> Result<SimulationInput, ValidationError> {
    let capital = payload
        .capital
        .ok_or(ValidationError::MissingField("capital"))?;
    let rate = payload.rate.ok_or(ValidationError::MissingField("rate"))?;
    let term = payload.term.ok_or(ValidationError::MissingField("term"))?;

    if capital <= 0.0 {
        return Err(ValidationError::InvalidRange("capital"));
    }
    if rate < 0.0 || !rate.is_finite() {
        return Err(ValidationError::InvalidRange("rate"));
    }
    if term <= 0.0 || term.fract() != 0.0 || term > f64::from(u32::MAX) {
        return Err(ValidationError::InvalidRange("term"));
    }

    Ok(SimulationInput {
        capital,
        rate,
        term_years: term as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_dni() {
        assert!(is_valid_national_id("12345678Z"));
        assert!(is_valid_national_id("00000000A"));
        assert!(is_valid_national_id("99999999H"));
    }

    #[test]
    fn rejects_unused_check_letters() {
        // I, O and U are never issued as DNI check letters.
        assert!(!is_valid_national_id("12345678I"));
        assert!(!is_valid_national_id("12345678O"));
        assert!(!is_valid_national_id("12345678U"));
    }

    #[test]
    fn rejects_malformed_dni() {
        assert!(!is_valid_national_id(""));
        assert!(!is_valid_national_id("1234567Z"));
        assert!(!is_valid_national_id("123456789Z"));
        assert!(!is_valid_national_id("12345678z"));
        assert!(!is_valid_national_id("12345678Z "));
        assert!(!is_valid_national_id("A2345678Z"));
        assert!(!is_valid_national_id("12345678"));
    }

    fn full_payload() -> ClientPayload {
        ClientPayload {
            name: Some("Julia".to_string()),
            national_id: Some("12345678Z".to_string()),
            email: Some("julia@example.com".to_string()),
            capital: Some(100_000.0),
        }
    }

    #[test]
    fn client_payload_passes_when_complete() {
        let fields = validate_client_payload(full_payload()).expect("valid payload");
        assert_eq!(fields.national_id, "12345678Z");
        assert_eq!(fields.capital, 100_000.0);
    }

    #[test]
    fn client_payload_reports_missing_fields() {
        let payload = ClientPayload {
            name: None,
            ..full_payload()
        };
        assert_eq!(
            validate_client_payload(payload),
            Err(ValidationError::MissingField("name"))
        );

        let payload = ClientPayload {
            capital: None,
            ..full_payload()
        };
        assert_eq!(
            validate_client_payload(payload),
            Err(ValidationError::MissingField("capital"))
        );
    }

    #[test]
    fn client_payload_rejects_empty_strings_and_bad_capital() {
        let payload = ClientPayload {
            email: Some(String::new()),
            ..full_payload()
        };
        assert_eq!(
            validate_client_payload(payload),
            Err(ValidationError::InvalidRange("email"))
        );

        let payload = ClientPayload {
            capital: Some(0.0),
            ..full_payload()
        };
        assert_eq!(
            validate_client_payload(payload),
            Err(ValidationError::InvalidRange("capital"))
        );

        let payload = ClientPayload {
            capital: Some(-5.0),
            ..full_payload()
        };
        assert_eq!(
            validate_client_payload(payload),
            Err(ValidationError::InvalidRange("capital"))
        );
    }

    #[test]
    fn simulation_payload_accepts_zero_rate() {
        let input = validate_simulation_payload(SimulationPayload {
            capital: Some(120_000.0),
            rate: Some(0.0),
            term: Some(10.0),
        })
        .expect("valid payload");
        assert_eq!(input.term_years, 10);
        assert_eq!(input.rate, 0.0);
    }

    #[test]
    fn simulation_payload_rejects_bad_ranges() {
        let base = SimulationPayload {
            capital: Some(100_000.0),
            rate: Some(3.5),
            term: Some(30.0),
        };

        let payload = SimulationPayload {
            capital: Some(0.0),
            ..base
        };
        assert_eq!(
            validate_simulation_payload(payload),
            Err(ValidationError::InvalidRange("capital"))
        );

        let payload = SimulationPayload {
            rate: Some(-1.0),
            ..base
        };
        assert_eq!(
            validate_simulation_payload(payload),
            Err(ValidationError::InvalidRange("rate"))
        );

        let payload = SimulationPayload {
            term: Some(2.5),
            ..base
        };
        assert_eq!(
            validate_simulation_payload(payload),
            Err(ValidationError::InvalidRange("term"))
        );

        let payload = SimulationPayload { term: Some(0.0), ..base };
        assert_eq!(
            validate_simulation_payload(payload),
            Err(ValidationError::InvalidRange("term"))
        );
    }

    #[test]
    fn simulation_payload_reports_missing_fields() {
        assert_eq!(
            validate_simulation_payload(SimulationPayload::default()),
            Err(ValidationError::MissingField("capital"))
        );

        let payload = SimulationPayload {
            capital: Some(1000.0),
            rate: None,
            term: Some(5.0),
        };
        assert_eq!(
            validate_simulation_payload(payload),
            Err(ValidationError::MissingField("rate"))
        );
    }
}
