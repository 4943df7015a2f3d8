// =============================================================================
// FIELD ERROR MESSAGES
// =============================================================================

/// Invalid-input message for the postal code field
pub const POSTAL_CODE_INVALID: &str = "Enter a postal code in the format XXXXXX.";

/// Invalid-input message for the internal passport number field
pub const PASSPORT_NUMBER_INVALID: &str = "Enter a passport number in the format XXXX XXXXXX.";

/// Invalid-input message for the alien's passport number field
pub const ALIEN_PASSPORT_NUMBER_INVALID: &str = "Enter a passport number in the format XX XXXXXXX.";

// =============================================================================
// CHOICE SOURCE NAMES
// =============================================================================

/// Registry name of the bundled federal district (county) list
pub const COUNTY_SOURCE: &str = "ru_counties";

/// Registry name of the bundled federal subject (region) list
pub const REGION_SOURCE: &str = "ru_regions";
