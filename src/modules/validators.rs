//! Custom validation functions for `validator`-derived structs.
//!
//! Each function applies one of the crate's anchored patterns and is meant
//! for `#[validate(custom(...))]` rules; `regex(path = ...)` rules can point
//! at the statics in `crate::shared::validation` directly. Optionality is
//! expressed with `Option<String>` fields, which the derive skips when
//! `None`.

use std::borrow::Cow;

use regex::Regex;
use validator::ValidationError;

use crate::shared::constants::{
    ALIEN_PASSPORT_NUMBER_INVALID, PASSPORT_NUMBER_INVALID, POSTAL_CODE_INVALID,
};
use crate::shared::validation::{
    ALIEN_PASSPORT_NUMBER_REGEX, PASSPORT_NUMBER_REGEX, POSTAL_CODE_REGEX,
};

/// Validate a Russian postal code (XXXXXX).
pub fn validate_postal_code(value: &str) -> Result<(), ValidationError> {
    check(&POSTAL_CODE_REGEX, value, POSTAL_CODE_INVALID)
}

/// Validate a Russian internal passport number (XXXX XXXXXX).
pub fn validate_passport_number(value: &str) -> Result<(), ValidationError> {
    check(&PASSPORT_NUMBER_REGEX, value, PASSPORT_NUMBER_INVALID)
}

/// Validate a Russian alien's passport number (XX XXXXXXX).
pub fn validate_alien_passport_number(value: &str) -> Result<(), ValidationError> {
    check(&ALIEN_PASSPORT_NUMBER_REGEX, value, ALIEN_PASSPORT_NUMBER_INVALID)
}

fn check(pattern: &Regex, value: &str, message: &'static str) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid");
        error.message = Some(Cow::Borrowed(message));
        Err(error)
    }
}
