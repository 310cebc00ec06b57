use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};
use strum::VariantArray;
use validator::{Validate, ValidationError};

use crate::{Field, FormFields};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Shape check only: `local@domain.tld`, no whitespace and a single `@`.
/// The empty string does not match.
pub fn validate_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

pub(crate) fn check_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

pub(crate) fn check_email_field(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed(EMAIL_REQUIRED_MESSAGE)));
    }

    if !validate_email(value) {
        return Err(ValidationError::new("email")
            .with_message(Cow::Borrowed(INVALID_EMAIL_MESSAGE)));
    }

    Ok(())
}

/// Verdict of one validation pass. `errors` and `invalid` follow field order.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub invalid: Vec<Field>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }
}

/// Runs every check against `fields` without touching any view.
pub fn validate(fields: &FormFields) -> ValidationResult {
    let Err(report) = fields.validate() else {
        return ValidationResult::default();
    };

    let by_field = report.field_errors();
    let mut result = ValidationResult::default();

    for field in Field::VARIANTS {
        let Some(errors) = by_field.get(field.key()) else {
            continue;
        };

        result.invalid.push(*field);
        result.errors.extend(errors.iter().map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        }));
    }

    result
}
