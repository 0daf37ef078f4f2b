//! Client-side form validation.
//!
//! Forms describe each field with [`ValidationRules`] and collect the
//! failures into [`ValidationErrors`], which the views render next to the
//! offending input. A form with errors is never submitted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Rules for a single text field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Regular expression the whole value must match
    pub pattern: Option<&'static str>,
    /// Message shown when `pattern` does not match
    pub pattern_error: Option<&'static str>,
    /// Apply length checks to the trimmed value
    pub trim: bool,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            pattern_error: None,
            trim: false,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    pub const fn pattern(mut self, pattern: &'static str, error: &'static str) -> Self {
        self.pattern = Some(pattern);
        self.pattern_error = Some(error);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let checked = if self.trim { value.trim() } else { value };

        if value.trim().is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        if let Some(min) = self.min_length {
            if checked.chars().count() < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if checked.chars().count() > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        if let Some(pattern) = self.pattern {
            let matches = Regex::new(pattern)
                .map(|re| re.is_match(checked))
                .unwrap_or(false);
            if !matches {
                return Err(self
                    .pattern_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} has an invalid format", field_label)));
            }
        }

        Ok(())
    }
}

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failures of a form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Run `rules` against `value` and record the failure, if any.
    pub fn check(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        rules: ValidationRules,
    ) {
        if let Err(message) = rules.validate_string(value, label) {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message suitable for a single banner or toast.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ValidationErrors {}

pub const GMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@gmail\.com$";

static GMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(GMAIL_PATTERN).ok());

/// Accounts are restricted to Gmail addresses.
pub fn is_gmail_address(value: &str) -> bool {
    GMAIL_RE
        .as_ref()
        .map_or(false, |re| re.is_match(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_length() {
        let rules = ValidationRules::required().min_length(2).trimmed();
        assert!(rules.validate_string("", "Name").is_err());
        assert!(rules.validate_string(" a ", "Name").is_err());
        assert!(rules.validate_string("Al", "Name").is_ok());
    }

    #[test]
    fn test_optional_empty_passes() {
        let rules = ValidationRules::none().min_length(5);
        assert!(rules.validate_string("   ", "Notes").is_ok());
    }

    #[test]
    fn test_pattern_uses_custom_message() {
        let rules = ValidationRules::required().pattern(r"^\d+$", "Digits only");
        assert_eq!(
            rules.validate_string("12a", "Phone"),
            Err("Digits only".to_string())
        );
        assert!(rules.validate_string("123", "Phone").is_ok());
    }

    #[test]
    fn test_errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        errors.check("name", "Name", "", ValidationRules::required());
        errors.check("dept", "Department", "Ops", ValidationRules::required());
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("dept"), None);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_gmail_address() {
        assert!(is_gmail_address("jane.doe+x@gmail.com"));
        assert!(!is_gmail_address("jane@example.com"));
        assert!(!is_gmail_address("@gmail.com"));
        assert!(!is_gmail_address("jane@gmail.com.evil"));
    }
}
