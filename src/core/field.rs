use regex::Regex;

use crate::core::error::{FormError, Result};
use crate::shared::types::Attrs;

/// A text input whose sole acceptance criterion is a full-string match
/// against one fixed, anchored pattern.
///
/// Every locale field is an instance of this type configured with a pattern
/// and an invalid-input message; there are no per-field subtypes. An empty
/// value is accepted unless the field is marked required, and length bounds
/// are checked before the pattern.
#[derive(Debug, Clone)]
pub struct RegexField {
    pattern: &'static Regex,
    invalid_message: &'static str,
    required: bool,
    max_length: Option<usize>,
    min_length: Option<usize>,
    attrs: Option<Attrs>,
}

impl RegexField {
    pub fn new(pattern: &'static Regex, invalid_message: &'static str) -> Self {
        Self {
            pattern,
            invalid_message,
            required: false,
            max_length: None,
            min_length: None,
            attrs: None,
        }
    }

    /// Reject empty values instead of accepting them.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Presentation attributes handed through to the rendered control unchanged.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    /// Validate a submitted value, returning it unchanged on success.
    pub fn clean(&self, value: &str) -> Result<String> {
        if value.is_empty() {
            if self.required {
                return Err(FormError::Required);
            }
            return Ok(String::new());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(FormError::MinLength { min, len });
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(FormError::MaxLength { max, len });
            }
        }

        if !self.pattern.is_match(value) {
            return Err(FormError::Invalid(self.invalid_message.to_string()));
        }

        Ok(value.to_string())
    }
}
