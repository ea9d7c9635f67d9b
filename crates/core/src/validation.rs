//! Request payload validation.
//!
//! Payload structs derive [`validator::Validate`]; [`validate_input`] runs
//! the rules and folds any failure into a single [`CoreError::Validation`]
//! that names every offending field.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Validate a payload, mapping failures to [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| missing_fields_error(&errors))
}

/// Build the client-facing message for a set of field failures.
///
/// Field names are sorted so the message is stable across runs.
pub fn missing_fields_error(errors: &ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields.dedup();

    CoreError::Validation(format!("Missing required fields: {}", fields.join(", ")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Payload {
        #[validate(required, length(min = 1))]
        title: Option<String>,
        #[validate(required, length(min = 1))]
        mood: Option<String>,
    }

    #[test]
    fn complete_payload_passes() {
        let payload = Payload {
            title: Some("Static Bloom".into()),
            mood: Some("synthwave".into()),
        };
        assert!(validate_input(&payload).is_ok());
    }

    #[test]
    fn every_missing_field_is_named() {
        let payload = Payload {
            title: None,
            mood: None,
        };
        let err = validate_input(&payload).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Missing required fields: mood, title");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let payload = Payload {
            title: Some(String::new()),
            mood: Some("lofi".into()),
        };
        let err = validate_input(&payload).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.ends_with(": title"));
    }
}
