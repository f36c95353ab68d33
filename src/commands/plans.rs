// Warranty plan command handlers
use super::CommandError;
use crate::catalog;
use crate::models::WarrantyPlan;
use crate::registration::{parse_date, suggest_for_plan, Field, PlanSuggestion, ValidationError};

pub fn list_plans() -> Vec<WarrantyPlan> {
    catalog::list_plans().to_vec()
}

/// Resolves a plan name or duration typed by the user.
pub fn resolve_plan(query: &str) -> Result<WarrantyPlan, CommandError> {
    catalog::find_plan(query)
        .cloned()
        .ok_or_else(|| CommandError::UnknownPlan(query.to_string()))
}

/// What the form should prefill once `plan` is picked for a purchase made on
/// `purchase_date_text`.
pub fn suggest_warranty(
    purchase_date_text: &str,
    plan: &str,
) -> Result<PlanSuggestion, CommandError> {
    let purchase_date = parse_date(purchase_date_text, Field::PurchaseDate)?;
    let plan = resolve_plan(plan)?;

    suggest_for_plan(purchase_date, &plan)
        .ok_or(CommandError::Validation(ValidationError::InvalidDate(
            Field::WarrantyExpirationDate,
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_suggest_by_days() {
        let suggestion = suggest_warranty("2024-01-01", "30").unwrap();
        assert_eq!(suggestion.expiration, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(suggestion.fee.to_string(), "7.99");
    }

    #[test]
    fn test_unknown_plan() {
        assert!(matches!(
            suggest_warranty("2024-01-01", "lifetime"),
            Err(CommandError::UnknownPlan(_))
        ));
    }

    #[test]
    fn test_bad_purchase_date() {
        assert!(matches!(
            suggest_warranty("soon", "30"),
            Err(CommandError::Validation(ValidationError::InvalidDate(Field::PurchaseDate)))
        ));
    }
}
