use crate::core::field::RegexField;
use crate::shared::constants::{ALIEN_PASSPORT_NUMBER_INVALID, PASSPORT_NUMBER_INVALID};
use crate::shared::validation::{ALIEN_PASSPORT_NUMBER_REGEX, PASSPORT_NUMBER_REGEX};

/// Russian internal passport number field. Format: XXXX XXXXXX, where X is
/// any digit.
pub fn passport_number_field() -> RegexField {
    RegexField::new(&PASSPORT_NUMBER_REGEX, PASSPORT_NUMBER_INVALID)
}

/// Russian alien's passport number field. Format: XX XXXXXXX, where X is
/// any digit.
pub fn alien_passport_number_field() -> RegexField {
    RegexField::new(&ALIEN_PASSPORT_NUMBER_REGEX, ALIEN_PASSPORT_NUMBER_INVALID)
}
