//! Purchase registration
//! Turns a raw form snapshot into a validated, immutable `PurchaseRecord`.
//! Nothing in here touches storage.

pub mod error;
pub mod suggestion;
pub mod validator;

pub use error::{Field, ValidationError};
pub use suggestion::{suggest_for_plan, PlanSuggestion};
pub use validator::{
    build_record, build_record_as_of, check_identity, parse_date, DATE_FORMAT, ITEM_NAME_MAX_CHARS,
    SERIAL_NUMBER_MAX_CHARS,
};
