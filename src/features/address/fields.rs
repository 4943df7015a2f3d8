use crate::core::field::RegexField;
use crate::shared::constants::POSTAL_CODE_INVALID;
use crate::shared::validation::POSTAL_CODE_REGEX;

/// Russian postal code field. Format: XXXXXX, where X is any digit.
pub fn postal_code_field() -> RegexField {
    RegexField::new(&POSTAL_CODE_REGEX, POSTAL_CODE_INVALID)
}
