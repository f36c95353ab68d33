//! Warranty plan catalog
//! Installed once at startup from settings, read-only afterwards.

use crate::models::WarrantyPlan;
use log::debug;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use thiserror::Error;

static CATALOG: OnceLock<Vec<WarrantyPlan>> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("warranty plan catalog is empty")]
    Empty,
    #[error("plan {label:?} must last at least one day")]
    ZeroDuration { label: String },
    #[error("plan {label:?} has a negative fee")]
    NegativeFee { label: String },
    #[error("every plan needs a label")]
    MissingLabel,
    #[error("warranty plan catalog was already initialized")]
    AlreadyInitialized,
}

/// Sample offering used when settings do not configure any plans.
pub fn default_plans() -> Vec<WarrantyPlan> {
    vec![
        WarrantyPlan::new(30, Decimal::new(799, 2), "30 Day Warranty"),
        WarrantyPlan::new(60, Decimal::new(1499, 2), "60 Day Warranty"),
        WarrantyPlan::new(90, Decimal::new(2499, 2), "90 Day Warranty"),
    ]
}

pub fn validate_plans(plans: &[WarrantyPlan]) -> Result<(), CatalogError> {
    if plans.is_empty() {
        return Err(CatalogError::Empty);
    }

    for plan in plans {
        if plan.label.trim().is_empty() {
            return Err(CatalogError::MissingLabel);
        }
        if plan.duration_days == 0 {
            return Err(CatalogError::ZeroDuration {
                label: plan.label.clone(),
            });
        }
        if plan.fee < Decimal::ZERO {
            return Err(CatalogError::NegativeFee {
                label: plan.label.clone(),
            });
        }
    }

    Ok(())
}

pub fn install_catalog(plans: Vec<WarrantyPlan>) -> Result<(), CatalogError> {
    validate_plans(&plans)?;

    let count = plans.len();
    CATALOG
        .set(plans)
        .map_err(|_| CatalogError::AlreadyInitialized)?;

    debug!("Installed warranty catalog with {} plans", count);
    Ok(())
}

pub fn list_plans() -> &'static [WarrantyPlan] {
    CATALOG.get_or_init(default_plans)
}

/// Finds a plan by its duration in days ("60") or by label, ignoring case.
pub fn find_plan(query: &str) -> Option<&'static WarrantyPlan> {
    find_in(list_plans(), query)
}

fn find_in<'a>(plans: &'a [WarrantyPlan], query: &str) -> Option<&'a WarrantyPlan> {
    let query = query.trim();
    if let Ok(days) = query.parse::<u32>() {
        return plans.iter().find(|p| p.duration_days == days);
    }
    plans.iter().find(|p| p.label.eq_ignore_ascii_case(query))
}
