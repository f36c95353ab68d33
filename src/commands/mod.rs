// Command handlers - one file per domain
pub mod plans;
pub mod purchases;
pub mod settings;

use crate::catalog::CatalogError;
use crate::registration::ValidationError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid warranty plans: {0}")]
    InvalidPlans(CatalogError),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
    #[error("unknown warranty plan {0:?}")]
    UnknownPlan(String),
}
