//! Russian identity-document inputs: internal and alien passport numbers.

pub mod fields;

pub use fields::{alien_passport_number_field, passport_number_field};
