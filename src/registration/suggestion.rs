// Display-only values shown when a plan is picked on the form
use crate::models::WarrantyPlan;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSuggestion {
    pub expiration: NaiveDate,
    pub fee: Decimal,
}

/// Expiration date and fee a form should prefill after `plan` is chosen.
/// The submitted form is still validated on its own.
pub fn suggest_for_plan(purchase_date: NaiveDate, plan: &WarrantyPlan) -> Option<PlanSuggestion> {
    let expiration = plan_expiration(purchase_date, plan)?;
    Some(PlanSuggestion {
        expiration,
        fee: plan.fee,
    })
}

pub(crate) fn plan_expiration(purchase_date: NaiveDate, plan: &WarrantyPlan) -> Option<NaiveDate> {
    purchase_date.checked_add_days(Days::new(u64::from(plan.duration_days)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_follows_plan() {
        let plan = WarrantyPlan::new(90, Decimal::new(2499, 2), "90 Day Warranty");
        let purchased = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let suggestion = suggest_for_plan(purchased, &plan).unwrap();
        assert_eq!(suggestion.expiration, NaiveDate::from_ymd_opt(2024, 4, 14).unwrap());
        assert_eq!(suggestion.fee, Decimal::new(2499, 2));
    }

    #[test]
    fn test_suggestion_out_of_range() {
        let plan = WarrantyPlan::new(30, Decimal::ZERO, "30 Day Warranty");
        assert!(suggest_for_plan(NaiveDate::MAX, &plan).is_none());
    }
}
