//! Parsing and checks applied to earnings before they reach a store.

use chrono::{Datelike, NaiveDate};
use earnings_domain::{NewEarning, MAX_YEAR, MIN_YEAR};

use crate::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(ValidationError::InvalidDate(trimmed.to_string()));
    }
    Ok(date)
}

/// Parses a floating-point amount; NaN and infinities are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    ensure_finite(amount)
}

pub fn ensure_finite(amount: f64) -> Result<f64, ValidationError> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount(amount.to_string()))
    }
}

/// Checks an earning that was built from already-typed values.
pub fn validate(earning: &NewEarning) -> Result<(), ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&earning.date.year()) {
        return Err(ValidationError::InvalidDate(earning.date.to_string()));
    }
    ensure_finite(earning.amount)?;
    Ok(())
}

/// Parses optional raw parameters as sent by a client. The date is checked first.
pub fn parse_earning(date: Option<&str>, amount: Option<&str>) -> Result<NewEarning, ValidationError> {
    let date = date.ok_or(ValidationError::MissingField("date"))?;
    let date = parse_date(date)?;
    let amount = amount.ok_or(ValidationError::MissingField("amount"))?;
    let amount = parse_amount(amount)?;
    Ok(NewEarning::new(date, amount))
}
