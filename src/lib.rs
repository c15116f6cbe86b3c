pub mod error;
pub mod fatal;
pub mod logger;
pub mod validation;

pub use error::{ErrorCode, InvalidArgument, PortalError};
pub use fatal::{is_fatal, FatalCondition, FatalError};
pub use validation::{
    add_detail, ensure_http_success, validate_non_empty, validate_phone_number,
    validate_positive_decimal, validate_positive_int, validate_required,
};
