//! Russian address inputs.
//!
//! Provides the postal code field plus select widgets for the federal
//! districts (counties) and federal subjects (regions).

pub mod fields;
pub mod widgets;

pub use fields::postal_code_field;
pub use widgets::{county_select, region_select};
