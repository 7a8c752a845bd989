//! Controlled add-forms and their validation.
//!
//! Each form holds raw field text the way a user typed it. `validate()` either
//! returns the store input record or a [`FormErrors`] with one message per
//! invalid field, in form order. Validation happens here and only here: the
//! store accepts whatever it is given.

mod campaign;
mod client;
mod compliance_rule;
mod lead;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::CoreError;

pub use campaign::CampaignForm;
pub use client::ClientForm;
pub use compliance_rule::ComplianceRuleForm;
pub use lead::LeadForm;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+$").unwrap_or_else(|error| panic!("email pattern must compile: {error}"))
});

/// Message shown when an email does not match the pattern.
pub const INVALID_EMAIL: &str = "Invalid email address";

/// A single rejected field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors of one submission. Never empty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("form rejected: {}", join_errors(.0))]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for `field`, if that field was rejected.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates field errors while a form is being checked.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Trimmed text, or an error when blank.
    pub(crate) fn required(&mut self, field: &str, raw: &str, message: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            self.reject(field, message);
            return None;
        }
        Some(value.to_string())
    }

    /// Trimmed text, `None` when blank. Never rejects.
    pub(crate) fn optional(raw: Option<&str>) -> Option<String> {
        raw.map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
    }

    /// Required text matching the email pattern.
    pub(crate) fn email(&mut self, field: &str, raw: &str, message: &str) -> Option<String> {
        let value = self.required(field, raw, message)?;
        if !EMAIL_PATTERN.is_match(&value) {
            self.reject(field, INVALID_EMAIL);
            return None;
        }
        Some(value)
    }

    /// Required number no smaller than `min`.
    pub(crate) fn amount(
        &mut self,
        field: &str,
        raw: &str,
        message: &str,
        min: f64,
        min_message: &str,
    ) -> Option<f64> {
        let value = self.required(field, raw, message)?;
        let Ok(amount) = value.parse::<f64>() else {
            self.reject(field, "Must be a number");
            return None;
        };
        if !amount.is_finite() {
            self.reject(field, "Must be a number");
            return None;
        }
        if amount < min {
            self.reject(field, min_message);
            return None;
        }
        Some(amount)
    }

    /// Required record id picked from a list.
    pub(crate) fn id(&mut self, field: &str, raw: &str, message: &str) -> Option<u32> {
        let value = self.required(field, raw, message)?;
        match value.parse::<u32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                self.reject(field, message);
                None
            }
        }
    }

    /// Required label of enum `T`.
    pub(crate) fn label<T>(&mut self, field: &str, raw: &str, message: &str) -> Option<T>
    where
        T: FromStr<Err = CoreError>,
    {
        let value = self.required(field, raw, message)?;
        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                self.reject(field, error.to_string());
                None
            }
        }
    }

    /// Required `YYYY-MM-DD` date.
    pub(crate) fn date(&mut self, field: &str, raw: &str, message: &str) -> Option<NaiveDate> {
        let value = self.required(field, raw, message)?;
        if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Some(date)
        } else {
            self.reject(field, "Must be a date (YYYY-MM-DD)");
            None
        }
    }

    /// Record a rule that does not map to a single parsed value.
    pub(crate) fn ensure(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.reject(field, message);
        }
    }

    pub(crate) fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn into_errors(self) -> FormErrors {
        FormErrors(self.errors)
    }
}
