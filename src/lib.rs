#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod codes;
pub mod errors;
pub mod indy_error;

pub use codes::{error_name, INDY_ERROR_NAMES};
pub use errors::error::{IndySdkError, IndySdkErrorKind, IndySdkResult};
pub use indy_error::{is_indy_error, IndyErrorDetails, INDY_ERROR_NAME};
