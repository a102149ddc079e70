//! Field-level validation helpers shared by every create/update DTO.
//!
//! DTOs derive [`validator::Validate`]; this module turns the resulting
//! [`ValidationErrors`] tree into a flat, stable list of [`FieldIssue`]s
//! that the API layer can serialize next to the error message.

use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// One failing field and a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Flatten validator errors into `FieldIssue`s, sorted by field name.
///
/// Field names are reported in camelCase so they match the JSON payload
/// the client sent rather than the Rust struct field.
pub fn collect_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter().map(move |err| FieldIssue {
                field: field.clone(),
                message: describe(err),
            })
        })
        .collect();
    issues.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    issues
}

/// Run `Validate::validate` and convert a failure into [`CoreError::InvalidFields`].
pub fn validate_input<T: Validate>(input: &T, message: &str) -> Result<(), CoreError> {
    input.validate().map_err(|errors| CoreError::InvalidFields {
        message: message.to_string(),
        issues: collect_issues(&errors),
    })
}

/// Largest accepted money amount: eight integer digits, two decimals.
pub const MAX_PRICE: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 2);

/// Prices are non-negative, at most [`MAX_PRICE`] and carry at most two
/// decimal places.
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > MAX_PRICE {
        let mut err = ValidationError::new("range");
        err.message = Some(format!("must be between 0 and {MAX_PRICE}").into());
        return Err(err);
    }
    if value.normalize().scale() > 2 {
        let mut err = ValidationError::new("precision");
        err.message = Some("must have at most 2 decimal places".into());
        return Err(err);
    }
    Ok(())
}

/// Ratings are on a 0 to 5 scale with at most one decimal place.
pub fn validate_rating(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::from(5) {
        let mut err = ValidationError::new("range");
        err.message = Some("must be between 0 and 5".into());
        return Err(err);
    }
    if value.normalize().scale() > 1 {
        let mut err = ValidationError::new("precision");
        err.message = Some("must have at most 1 decimal place".into());
        return Err(err);
    }
    Ok(())
}

fn describe(err: &ValidationError) -> String {
    if let Some(msg) = &err.message {
        return msg.to_string();
    }
    match err.code.as_ref() {
        "required" => "is required".to_string(),
        "email" => "must be a valid email address".to_string(),
        "length" => match (err.params.get("min"), err.params.get("max")) {
            (Some(min), None) => format!("must be at least {min} characters"),
            (None, Some(max)) => format!("must be at most {max} characters"),
            (Some(min), Some(max)) => format!("must be between {min} and {max} characters"),
            (None, None) => "has an invalid length".to_string(),
        },
        "range" => match (err.params.get("min"), err.params.get("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (None, None) => "is out of range".to_string(),
        },
        other => format!("failed the '{other}' check"),
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
