use crate::errors::error::{IndySdkError, IndySdkErrorKind};
use crate::indy_error::IndyErrorDetails;

impl IndySdkError {
    /// Wraps a classified libindy error, keeping the original payload as the
    /// causal source.
    pub fn from_indy_error(indy_error: IndyErrorDetails, context: Option<&str>) -> IndySdkError {
        let base = format!(
            "{}({}): {}",
            indy_error.indy_name.as_deref().unwrap_or("unknown"),
            indy_error.name,
            indy_error.message
        );
        let msg = match context {
            Some(context) => format!("{context}: {base}"),
            None => base,
        };
        IndySdkError::from_source(IndySdkErrorKind::IndyError, msg, indy_error)
    }
}

impl From<IndyErrorDetails> for IndySdkError {
    fn from(indy_error: IndyErrorDetails) -> IndySdkError {
        IndySdkError::from_indy_error(indy_error, None)
    }
}

impl From<serde_json::Error> for IndySdkError {
    fn from(err: serde_json::Error) -> IndySdkError {
        IndySdkError::from_msg(IndySdkErrorKind::InvalidJson, err.to_string())
    }
}
