use thiserror::Error;

/// Errors raised while cleaning a field value or building a widget.
///
/// Each validation failure carries exactly one human-readable message;
/// failures are not aggregated within a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(String),

    #[error("This field is required.")]
    Required,

    #[error("Ensure this value has at least {min} characters (it has {len}).")]
    MinLength { min: usize, len: usize },

    #[error("Ensure this value has at most {max} characters (it has {len}).")]
    MaxLength { max: usize, len: usize },

    #[error("Select a valid choice. {0} is not one of the available choices.")]
    InvalidChoice(String),

    #[error("Unknown choice source: {0}")]
    UnknownChoiceSource(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
