//! Russian-specific form fields and widgets.
//!
//! Pattern-validated text fields for Russian postal codes and passport
//! numbers, plus select widgets backed by the bundled county and region
//! choice lists. Every field is an instance of one generic `RegexField`;
//! every widget resolves its choice list through a `ChoiceRegistry` when it
//! is built.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::error::{FormError, Result};
pub use crate::core::field::RegexField;
pub use crate::core::registry::ChoiceRegistry;
pub use crate::core::select::Select;
pub use crate::features::address::{county_select, postal_code_field, region_select};
pub use crate::features::identity::{alien_passport_number_field, passport_number_field};
pub use crate::shared::types::{Attrs, Choice};
