//! Contact form validation rules

use super::field::FieldName;
use thiserror::Error;

/// Minimum trimmed length of the name field
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed length of the message field
pub const MESSAGE_MIN_CHARS: usize = 20;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: FieldName },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: FieldName, min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Validate one field's value against its rule
pub fn validate_field(field: FieldName, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }

    match field {
        FieldName::Name => min_chars(field, trimmed, NAME_MIN_CHARS),
        FieldName::Email => {
            if is_valid_email(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        FieldName::Message => min_chars(field, trimmed, MESSAGE_MIN_CHARS),
    }
}

fn min_chars(field: FieldName, trimmed: &str, min: usize) -> Result<(), ValidationError> {
    if trimmed.chars().count() < min {
        Err(ValidationError::TooShort { field, min })
    } else {
        Ok(())
    }
}

/// Loose `local@domain.tld` check: no whitespace, exactly one `@`, and a `.`
/// inside the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
