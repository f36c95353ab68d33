// Registration form validation and record construction
use super::error::{Field, ValidationError};
use super::suggestion::plan_expiration;
use crate::models::{PurchaseRecord, RawInput};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

pub const ITEM_NAME_MAX_CHARS: usize = 100;
pub const SERIAL_NUMBER_MAX_CHARS: usize = 50;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates `input` against today's local date and builds the record.
pub fn build_record(input: &RawInput) -> Result<PurchaseRecord, ValidationError> {
    build_record_as_of(input, Local::now().date_naive())
}

/// Same as [`build_record`] with the current date supplied by the caller.
/// Rules run in a fixed order and the first failure is returned.
pub fn build_record_as_of(
    input: &RawInput,
    today: NaiveDate,
) -> Result<PurchaseRecord, ValidationError> {
    let (item_name, serial_number) = check_identity(input)?;
    let purchase_price = parse_price(&input.purchase_price_text)?;

    let purchase_date = parse_date(&input.purchase_date_text, Field::PurchaseDate)?;
    let expiration = match &input.selected_plan {
        Some(plan) => plan_expiration(purchase_date, plan)
            .ok_or(ValidationError::InvalidDate(Field::WarrantyExpirationDate))?,
        None => parse_date(
            &input.warranty_expiration_date_text,
            Field::WarrantyExpirationDate,
        )?,
    };
    if expiration < purchase_date {
        return Err(ValidationError::ExpirationBeforePurchase);
    }

    if purchase_date > today {
        return Err(ValidationError::FutureDatedPurchase);
    }

    let warranty_fee = input
        .selected_plan
        .as_ref()
        .map_or(Decimal::ZERO, |plan| plan.fee);

    Ok(PurchaseRecord::from_parts(
        item_name.to_string(),
        serial_number.to_string(),
        purchase_date,
        purchase_price,
        input.selected_plan.clone(),
        Some(expiration),
        warranty_fee,
        input.notes.clone(),
    ))
}

/// Runs the item name and serial number rules on their own and returns the
/// trimmed values. Callers that resolve extra form state (such as a typed
/// plan name) run this first so these errors keep their precedence.
pub fn check_identity(input: &RawInput) -> Result<(&str, &str), ValidationError> {
    let item_name = required_text(&input.item_name, Field::ItemName, ITEM_NAME_MAX_CHARS)?;
    let serial_number = required_text(
        &input.serial_number,
        Field::SerialNumber,
        SERIAL_NUMBER_MAX_CHARS,
    )?;
    Ok((item_name, serial_number))
}

fn required_text(value: &str, field: Field, max: usize) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(trimmed)
}

fn parse_price(text: &str) -> Result<Decimal, ValidationError> {
    match Decimal::from_str(text.trim()) {
        Ok(price) if price > Decimal::ZERO => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

/// Parses an ISO date, treating blank text as a missing field.
pub fn parse_date(text: &str, field: Field) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(field))
}
