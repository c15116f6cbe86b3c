//! Guard helpers for portal request preconditions.
//!
//! Each guard checks one precondition and fails fast with an
//! [`InvalidArgument`] naming the offending field; callers decide whether to
//! abort or continue.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ErrorCode, InvalidArgument, PortalError};

/// US phone numbers: optional leading 0/1, area code with first digit 2-9
/// (optionally parenthesized), exchange, line number, separated by space,
/// hyphen or period.
static US_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[01]?[- .]?(\([2-9]\d{2}\)|[2-9]\d{2})[- .]?\d{3}[- .]?\d{4}$").unwrap()
});

/// Validate that a required value is present.
///
/// Returns a reference to the inner value so callers can keep working with it.
pub fn validate_required<'a, T>(
    field: &str,
    value: &'a Option<T>,
) -> Result<&'a T, InvalidArgument> {
    value
        .as_ref()
        .ok_or_else(|| InvalidArgument::new(format!("{} is required", field)))
}

/// Validate that a string is present and not empty or whitespace-only.
pub fn validate_non_empty(field: &str, value: Option<&str>) -> Result<(), InvalidArgument> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(InvalidArgument::new(format!(
            "{} cannot be empty or whitespace-only",
            field
        ))),
    }
}

/// Validate that a string is a well-formed US phone number.
///
/// Pattern-only: does not verify the number is reachable or allocated.
pub fn validate_phone_number(field: &str, value: Option<&str>) -> Result<(), InvalidArgument> {
    let number = *validate_required(field, &value)?;
    if !US_PHONE.is_match(number) {
        return Err(InvalidArgument::new(format!(
            "{} is not a valid US phone number",
            field
        )));
    }
    Ok(())
}

/// Validate that an integer is strictly positive (zero is rejected).
pub fn validate_positive_int(field: &str, value: i64) -> Result<(), InvalidArgument> {
    if value <= 0 {
        return Err(InvalidArgument::new(format!(
            "{} must be positive",
            field
        )));
    }
    Ok(())
}

/// Validate that a decimal amount is strictly positive (zero is rejected).
pub fn validate_positive_decimal(field: &str, value: f64) -> Result<(), InvalidArgument> {
    if value <= 0.0 || value.is_nan() {
        return Err(InvalidArgument::new(format!(
            "{} must be positive",
            field
        )));
    }
    Ok(())
}

/// Attach a diagnostic detail entry to a portal error.
///
/// Overwrites an existing entry with the same key and hands back the same
/// error value so enrichment can be chained at the raise site.
pub fn add_detail<'a>(
    error: &'a mut PortalError,
    key: &str,
    value: &str,
) -> Result<&'a mut PortalError, InvalidArgument> {
    if key.is_empty() {
        return Err(InvalidArgument::new("detail key cannot be empty"));
    }
    if value.is_empty() {
        return Err(InvalidArgument::new("detail value cannot be empty"));
    }
    error.details.insert(key.to_string(), value.to_string());
    Ok(error)
}

/// Assert that an upstream HTTP exchange succeeded.
///
/// Succeeds for status codes in the conventional 200-299 range. Otherwise
/// raises a [`PortalError`] built from `code` and `message`, with the response
/// body attached under the `ResponseBody` detail key when one was captured.
pub fn ensure_http_success(
    status: u16,
    code: ErrorCode,
    message: &str,
    body: Option<&str>,
) -> Result<(), PortalError> {
    tracing::debug!("upstream response status: {}", status);
    if (200..=299).contains(&status) {
        return Ok(());
    }

    let body = body.unwrap_or_default();
    tracing::warn!("upstream request failed with status: {}", status);
    let mut error = PortalError::new(
        code,
        format!(
            "{}. Response code: {}. Response body: {}.",
            message, status, body
        ),
    );
    if !body.is_empty() {
        error
            .details
            .insert("ResponseBody".to_string(), body.to_string());
    }
    Err(error)
}
