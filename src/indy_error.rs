use std::error::Error;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::codes::error_name;
use crate::errors::error::prelude::*;

/// Discriminant the libindy bindings put on their error values.
pub const INDY_ERROR_NAME: &str = "IndyError";

/// Error payload surfaced by the libindy bindings.
///
/// Some binding environments strip `indyName` and only keep the numeric
/// error code as a decimal string in `message`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndyErrorDetails {
    pub name: String,
    pub message: String,
    #[serde(rename = "indyName")]
    pub indy_name: Option<String>,
}

impl IndyErrorDetails {
    /// Runtime shape check: `Some` iff `value` is an object carrying the
    /// libindy discriminant and a string message.
    pub fn from_value(value: &Value) -> Option<IndyErrorDetails> {
        let details = IndyErrorDetails::deserialize(value).ok()?;
        if details.name == INDY_ERROR_NAME {
            Some(details)
        } else {
            None
        }
    }
}

impl fmt::Display for IndyErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for IndyErrorDetails {}

/// Classifies `value` as a libindy error, optionally matching it against a
/// specific symbolic error name from the registry.
///
/// When the symbolic name is missing, classification falls back to resolving
/// the numeric code carried in the message. An unresolvable name is a hard
/// failure rather than `Ok(false)`: the caller cannot tell a mismatch from
/// an unknown error.
pub fn is_indy_error(value: &Value, expected_name: Option<&str>) -> IndySdkResult<bool> {
    let details = match IndyErrorDetails::from_value(value) {
        Some(details) => details,
        None => return Ok(false),
    };

    let expected_name = match expected_name {
        Some(expected_name) => expected_name,
        None => return Ok(true),
    };

    match &details.indy_name {
        Some(indy_name) => Ok(indy_name == expected_name),
        None => match details.message.parse::<u32>().ok().and_then(error_name) {
            Some(resolved) => {
                warn!(
                    "indy error without indyName, resolved code {} to {}",
                    details.message, resolved
                );
                Ok(resolved == expected_name)
            }
            None => {
                error!(
                    "could not determine errorName of indy error {}",
                    details.message
                );
                Err(err_msg(
                    IndySdkErrorKind::UnknownLibindyError,
                    format!(
                        "Could not determine errorName of indyError {}",
                        details.message
                    ),
                ))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_non_objects_are_not_indy_errors() {
        assert!(!is_indy_error(&json!(null), None).unwrap());
        assert!(!is_indy_error(&json!(204), None).unwrap());
        assert!(!is_indy_error(&json!("IndyError"), None).unwrap());
        assert!(!is_indy_error(&json!([]), None).unwrap());
    }

    #[test]
    fn test_marker_without_filter_matches() {
        let value = json!({ "name": "IndyError", "message": "x" });
        assert!(is_indy_error(&value, None).unwrap());
    }

    #[test]
    fn test_foreign_error_does_not_match() {
        let value = json!({ "name": "Other", "message": "x" });
        assert!(!is_indy_error(&value, None).unwrap());
        assert!(!is_indy_error(&value, Some("WalletNotFoundError")).unwrap());
    }

    #[test]
    fn test_object_without_message_does_not_match() {
        let value = json!({ "name": "IndyError" });
        assert!(!is_indy_error(&value, None).unwrap());
    }

    #[test]
    fn test_indy_name_is_matched_against_filter() {
        let value = json!({
            "name": "IndyError",
            "message": "x",
            "indyName": "WalletNotFoundError"
        });
        assert!(is_indy_error(&value, Some("WalletNotFoundError")).unwrap());
        assert!(!is_indy_error(&value, Some("WalletAlreadyExistsError")).unwrap());
    }

    #[test]
    fn test_missing_indy_name_is_recovered_from_code_in_message() {
        let value = json!({ "name": "IndyError", "message": "204" });
        assert!(is_indy_error(&value, Some("WalletNotFoundError")).unwrap());
        assert!(!is_indy_error(&value, Some("WalletItemNotFound")).unwrap());
    }

    #[test]
    fn test_non_numeric_message_without_indy_name_is_a_hard_failure() {
        let value = json!({ "name": "IndyError", "message": "not-a-number" });
        match is_indy_error(&value, Some("WalletNotFoundError")) {
            Err(err) => assert_eq!(err.kind(), IndySdkErrorKind::UnknownLibindyError),
            Ok(_) => panic!("Should fail to determine error name"),
        }
    }

    #[test]
    fn test_unregistered_code_without_indy_name_is_a_hard_failure() {
        let value = json!({ "name": "IndyError", "message": "999999" });
        match is_indy_error(&value, Some("WalletNotFoundError")) {
            Err(err) => assert_eq!(err.kind(), IndySdkErrorKind::UnknownLibindyError),
            Ok(_) => panic!("Should fail to determine error name"),
        }
    }

    #[test]
    fn test_shape_check_returns_details() {
        let value = json!({
            "name": "IndyError",
            "message": "boom",
            "indyName": "WalletNotFoundError"
        });
        let details = IndyErrorDetails::from_value(&value).unwrap();
        assert_eq!(details.name, INDY_ERROR_NAME);
        assert_eq!(details.message, "boom");
        assert_eq!(details.indy_name.as_deref(), Some("WalletNotFoundError"));
    }
}
