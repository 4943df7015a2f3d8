use crate::core::error::{FormError, Result};
use crate::shared::types::{Attrs, Choice};

/// A selection control restricted to a fixed, ordered list of choices.
///
/// The widget offers exactly the list it was built with; submitted values
/// are checked for membership by code and nothing else.
#[derive(Debug, Clone)]
pub struct Select {
    choices: &'static [Choice],
    attrs: Option<Attrs>,
}

impl Select {
    pub fn new(choices: &'static [Choice]) -> Self {
        Self {
            choices,
            attrs: None,
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// The offered options, in source order.
    pub fn choices(&self) -> &'static [Choice] {
        self.choices
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    /// Check a submitted code against the offered options.
    pub fn validate(&self, code: &str) -> Result<&'static Choice> {
        self.choices
            .iter()
            .find(|choice| choice.code == code)
            .ok_or_else(|| FormError::InvalidChoice(code.to_string()))
    }
}
