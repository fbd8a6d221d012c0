use std::sync::OnceLock;

use fractic_server_error::ServerError;
use regex::Regex;

use crate::{entities::RegistrationForm, errors::InvalidFormField};

/// Field values that passed shape-checking, parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CheckedValues {
    pub value: f64,
    pub duration_months: Option<u32>,
}

fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("hardcoded regex should be valid")
    })
}

/// Shape-checks the registration form. Anything beyond shape (limits,
/// ownership, duplicates) is the backend's job.
pub(crate) struct RegistrationValidator<'a> {
    form: &'a RegistrationForm,
}

impl<'a> RegistrationValidator<'a> {
    pub(crate) fn new(form: &'a RegistrationForm) -> Self {
        Self { form }
    }

    pub(crate) fn process(self) -> Result<CheckedValues, ServerError> {
        let f = self.form;
        require_text("description", &f.description)?;
        let value = f
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| InvalidFormField::new("value", "expected a number greater than zero"))?;
        if !iso_date_pattern().is_match(f.date.trim()) {
            return Err(InvalidFormField::new("date", "expected YYYY-MM-DD"));
        }
        require_text("personId", &f.person_id)?;
        require_text("familyId", &f.family_id)?;
        let duration_months = match f.duration_months.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u32>()
                    .ok()
                    .filter(|m| *m > 0)
                    .ok_or_else(|| {
                        InvalidFormField::new("durationMonths", "expected a positive whole number")
                    })?,
            ),
        };
        Ok(CheckedValues {
            value,
            duration_months,
        })
    }
}

/// Family and member names only need to be non-blank.
pub(crate) fn validate_name(field: &str, name: &str) -> Result<(), ServerError> {
    require_text(field, name)
}

fn require_text(field: &str, value: &str) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(InvalidFormField::new(field, "must not be empty"));
    }
    Ok(())
}
