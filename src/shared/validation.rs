use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for Russian postal codes: exactly six digits.
    /// - Valid: "123456", "630090"
    /// - Invalid: "12345", "1234567", "1234a6"
    pub static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^\d{6}$").unwrap();

    /// Regex for internal passport numbers: four digits, a space, six digits.
    /// - Valid: "1234 567890"
    /// - Invalid: "1234567890", "12345 67890"
    pub static ref PASSPORT_NUMBER_REGEX: Regex = Regex::new(r"^\d{4} \d{6}$").unwrap();

    /// Regex for alien's passport numbers: two digits, a space, seven digits.
    /// - Valid: "12 3456789"
    /// - Invalid: "123 456789", "12 345678"
    pub static ref ALIEN_PASSPORT_NUMBER_REGEX: Regex = Regex::new(r"^\d{2} \d{7}$").unwrap();

    /// Regex for phone numbers as dialed digits: an optional 7/8 country
    /// prefix, then 3-3-4 digit groups separated by optional hyphens or dots.
    /// Exported for reuse; no field in this crate applies it.
    /// - Valid: "8-495-123-4567", "4951234567", "7-495-123-4567"
    /// - Invalid: "123-4567", "84951234567890"
    pub static ref PHONE_DIGITS_REGEX: Regex =
        Regex::new(r"^(?:[78]-?)?(\d{3})[-.]?(\d{3})[-.]?(\d{4})$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_regex_valid() {
        assert!(POSTAL_CODE_REGEX.is_match("123456"));
        assert!(POSTAL_CODE_REGEX.is_match("000000"));
        assert!(POSTAL_CODE_REGEX.is_match("630090"));
    }

    #[test]
    fn test_postal_code_regex_invalid() {
        assert!(!POSTAL_CODE_REGEX.is_match("12345")); // too short
        assert!(!POSTAL_CODE_REGEX.is_match("1234567")); // too long
        assert!(!POSTAL_CODE_REGEX.is_match("1234a6")); // letter
        assert!(!POSTAL_CODE_REGEX.is_match("123 456")); // space
        assert!(!POSTAL_CODE_REGEX.is_match(""));
    }

    #[test]
    fn test_passport_number_regex_valid() {
        assert!(PASSPORT_NUMBER_REGEX.is_match("1234 567890"));
        assert!(PASSPORT_NUMBER_REGEX.is_match("0000 000000"));
    }

    #[test]
    fn test_passport_number_regex_invalid() {
        assert!(!PASSPORT_NUMBER_REGEX.is_match("1234567890")); // no space
        assert!(!PASSPORT_NUMBER_REGEX.is_match("12345 67890")); // wrong split
        assert!(!PASSPORT_NUMBER_REGEX.is_match("1234 56789")); // too few digits
        assert!(!PASSPORT_NUMBER_REGEX.is_match("1234  567890")); // double space
    }

    #[test]
    fn test_alien_passport_number_regex_valid() {
        assert!(ALIEN_PASSPORT_NUMBER_REGEX.is_match("12 3456789"));
        assert!(ALIEN_PASSPORT_NUMBER_REGEX.is_match("00 0000000"));
    }

    #[test]
    fn test_alien_passport_number_regex_invalid() {
        assert!(!ALIEN_PASSPORT_NUMBER_REGEX.is_match("123 456789")); // wrong split
        assert!(!ALIEN_PASSPORT_NUMBER_REGEX.is_match("12 345678")); // too few digits
        assert!(!ALIEN_PASSPORT_NUMBER_REGEX.is_match("123456789")); // no space
    }

    #[test]
    fn test_phone_digits_regex_valid() {
        assert!(PHONE_DIGITS_REGEX.is_match("8-495-123-4567"));
        assert!(PHONE_DIGITS_REGEX.is_match("7-495-123-4567"));
        assert!(PHONE_DIGITS_REGEX.is_match("4951234567"));
        assert!(PHONE_DIGITS_REGEX.is_match("495.123.4567"));
        assert!(PHONE_DIGITS_REGEX.is_match("84951234567"));
    }

    #[test]
    fn test_phone_digits_regex_invalid() {
        assert!(!PHONE_DIGITS_REGEX.is_match("123-4567")); // too few digits
        assert!(!PHONE_DIGITS_REGEX.is_match("84951234567890")); // too many digits
        assert!(!PHONE_DIGITS_REGEX.is_match("9-495-123-4567")); // bad prefix
        assert!(!PHONE_DIGITS_REGEX.is_match("495 123 4567")); // spaces
    }

    #[test]
    fn test_phone_digits_regex_captures_groups() {
        let caps = PHONE_DIGITS_REGEX.captures("8-495-123-4567").unwrap();
        assert_eq!(&caps[1], "495");
        assert_eq!(&caps[2], "123");
        assert_eq!(&caps[3], "4567");
    }
}
