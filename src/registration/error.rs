use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Form fields a validation error can point back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ItemName,
    SerialNumber,
    PurchaseDate,
    PurchasePrice,
    WarrantyExpirationDate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ItemName => "itemName",
            Self::SerialNumber => "serialNumber",
            Self::PurchaseDate => "purchaseDate",
            Self::PurchasePrice => "purchasePrice",
            Self::WarrantyExpirationDate => "warrantyExpirationDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a registration form was rejected. Only the first failing rule is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: Field, max: usize },
    #[error("{0} is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(Field),
    #[error("please enter a valid purchase price greater than 0")]
    InvalidPrice,
    #[error("warranty expiration date cannot be earlier than purchase date")]
    ExpirationBeforePurchase,
    #[error("purchase date cannot be in the future")]
    FutureDatedPurchase,
}

impl ValidationError {
    /// The field a form should highlight for this error.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField(field) | Self::InvalidDate(field) => *field,
            Self::FieldTooLong { field, .. } => *field,
            Self::InvalidPrice => Field::PurchasePrice,
            Self::ExpirationBeforePurchase => Field::WarrantyExpirationDate,
            Self::FutureDatedPurchase => Field::PurchaseDate,
        }
    }
}
