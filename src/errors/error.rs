use std::error::Error;
use std::fmt;

pub mod prelude {
    pub use super::{err_msg, IndySdkError, IndySdkErrorKind, IndySdkResult};
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum IndySdkErrorKind {
    #[error("Error originating from libindy")]
    IndyError,
    #[error("Unknown libindy error")]
    UnknownLibindyError,
    #[error("Invalid JSON string")]
    InvalidJson,
    #[error("Invalid input parameter")]
    InvalidInput,
}

#[derive(Debug, thiserror::Error)]
pub struct IndySdkError {
    msg: String,
    kind: IndySdkErrorKind,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl fmt::Display for IndySdkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Error: {}", self.msg)?;
        let mut current = self.source();
        while let Some(cause) = current {
            writeln!(f, "Caused by:\n\t{cause}")?;
            current = cause.source();
        }
        Ok(())
    }
}

impl IndySdkError {
    pub fn from_msg<D>(kind: IndySdkErrorKind, msg: D) -> IndySdkError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        IndySdkError {
            msg: msg.to_string(),
            kind,
            source: None,
        }
    }

    pub fn from_source<D, E>(kind: IndySdkErrorKind, msg: D, source: E) -> IndySdkError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
        E: Error + Send + Sync + 'static,
    {
        IndySdkError {
            msg: msg.to_string(),
            kind,
            source: Some(Box::new(source)),
        }
    }

    pub fn kind(&self) -> IndySdkErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

pub fn err_msg<D>(kind: IndySdkErrorKind, msg: D) -> IndySdkError
where
    D: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    IndySdkError::from_msg(kind, msg)
}

pub type IndySdkResult<T> = Result<T, IndySdkError>;
