//! Validation rules for field descriptors
//!
//! Every field descriptor may carry one [`ValidationRule`]. The form and
//! table generators merge those per-field rules into a single schema pass
//! via [`validate_fields`], mirroring how each screen declares one rule
//! per input and submits only when the merged schema passes.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::field::FieldDescriptor;

/// Indian mobile numbers: ten digits starting 6-9
const PHONE_PATTERN: &str = r"^[6-9]\d{9}$";

/// Pragmatic email shape check; the backend does the authoritative one
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

// ============================================================================
// ValidationRule
// ============================================================================

/// A validation rule attached to one field, carrying its error message
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// Value must be non-empty after trimming
    Required { message: String },
    /// Value must look like an email address (empty passes; combine with
    /// `Required` when the field is mandatory)
    Email { message: String },
    /// Value must be a valid mobile number (empty passes)
    Phone { message: String },
    /// Value must be at least this many characters (empty passes)
    MinLen { min: usize, message: String },
    /// Value must match the given pattern (empty passes)
    Matches { pattern: String, message: String },
    /// All rules must pass; the first failure wins
    All(Vec<ValidationRule>),
}

impl ValidationRule {
    pub fn required(message: impl Into<String>) -> Self {
        ValidationRule::Required {
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        ValidationRule::Email {
            message: message.into(),
        }
    }

    pub fn phone(message: impl Into<String>) -> Self {
        ValidationRule::Phone {
            message: message.into(),
        }
    }

    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        ValidationRule::MinLen {
            min,
            message: message.into(),
        }
    }

    pub fn matches(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationRule::Matches {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn all(rules: impl IntoIterator<Item = ValidationRule>) -> Self {
        ValidationRule::All(rules.into_iter().collect())
    }

    /// A required email field with the usual pair of messages
    pub fn required_email(field_label: &str) -> Self {
        ValidationRule::all([
            ValidationRule::required(format!("{field_label} is required")),
            ValidationRule::email("Enter a valid email address"),
        ])
    }

    /// Validate a single value against this rule in isolation
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            ValidationRule::Required { message } => {
                if value.trim().is_empty() {
                    Err(message.clone())
                } else {
                    Ok(())
                }
            }
            ValidationRule::Email { message } => {
                if value.is_empty() || email_regex().is_match(value) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            ValidationRule::Phone { message } => {
                if value.is_empty() || phone_regex().is_match(value) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            ValidationRule::MinLen { min, message } => {
                if value.is_empty() || value.chars().count() >= *min {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            ValidationRule::Matches { pattern, message } => {
                if value.is_empty() {
                    return Ok(());
                }
                match Regex::new(pattern) {
                    Ok(re) if re.is_match(value) => Ok(()),
                    Ok(_) => Err(message.clone()),
                    // A malformed caller pattern should read as a rule
                    // failure, not a silent pass.
                    Err(_) => Err(message.clone()),
                }
            }
            ValidationRule::All(rules) => {
                for rule in rules {
                    rule.validate(value)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Merged Schema Pass
// ============================================================================

/// Validate every descriptor-carried rule against the supplied values.
///
/// Returns a map of field key to error message; an empty map means the
/// merged schema passed. Fields without a rule never contribute errors,
/// and a missing value validates as the empty string.
pub fn validate_fields(
    descriptors: &[FieldDescriptor],
    values: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    for descriptor in descriptors {
        let Some(rule) = &descriptor.rule else {
            continue;
        };
        let value = values
            .get(&descriptor.key)
            .map(String::as_str)
            .unwrap_or("");
        if let Err(message) = rule.validate(value) {
            errors.insert(descriptor.key.clone(), message);
        }
    }
    errors
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDescriptor, InputKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_rejects_blank() {
        let rule = ValidationRule::required("Country Name is required");
        assert_eq!(
            rule.validate("   "),
            Err("Country Name is required".to_string())
        );
        assert_eq!(rule.validate("India"), Ok(()));
    }

    #[test]
    fn test_email_rule() {
        let rule = ValidationRule::email("Enter a valid email address");
        assert!(rule.validate("user@example.com").is_ok());
        assert!(rule.validate("not-an-email").is_err());
        // Empty values are the Required rule's concern
        assert!(rule.validate("").is_ok());
    }

    #[test]
    fn test_phone_rule() {
        let rule = ValidationRule::phone("Enter a valid mobile number");
        assert!(rule.validate("9876543210").is_ok());
        assert!(rule.validate("1234567890").is_err());
        assert!(rule.validate("98765").is_err());
    }

    #[test]
    fn test_all_reports_first_failure() {
        let rule = ValidationRule::required_email("Email");
        assert_eq!(rule.validate(""), Err("Email is required".to_string()));
        assert_eq!(
            rule.validate("nope"),
            Err("Enter a valid email address".to_string())
        );
        assert!(rule.validate("a@b.co").is_ok());
    }

    #[test]
    fn test_merged_schema_city_scenario() {
        // City form: cityName required, stateId required selection.
        let descriptors = vec![
            FieldDescriptor::new("cityName", "City Name", InputKind::text())
                .with_rule(ValidationRule::required("City Name is required")),
            FieldDescriptor::new("stateId", "State", InputKind::Select)
                .with_rule(ValidationRule::required("State is required")),
        ];
        let mut values = BTreeMap::new();
        values.insert("cityName".to_string(), "Springfield".to_string());
        values.insert("stateId".to_string(), String::new());

        let errors = validate_fields(&descriptors, &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("stateId"), Some(&"State is required".to_string()));
    }

    #[test]
    fn test_merged_schema_reports_exactly_one_error_per_field() {
        let descriptors = vec![FieldDescriptor::new("name", "Name", InputKind::text())
            .with_rule(ValidationRule::all([
                ValidationRule::required("Name is required"),
                ValidationRule::min_len(3, "Name is too short"),
            ]))];
        let errors = validate_fields(&descriptors, &BTreeMap::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(&"Name is required".to_string()));
    }

    #[test]
    fn test_fields_without_rules_never_error() {
        let descriptors = vec![FieldDescriptor::new("$id", "ID", InputKind::text())];
        assert!(validate_fields(&descriptors, &BTreeMap::new()).is_empty());
    }
}
