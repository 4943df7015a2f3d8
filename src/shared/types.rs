use std::collections::HashMap;

use serde::Serialize;

/// Presentation attributes handed through to the rendered control unchanged.
pub type Attrs = HashMap<String, String>;

/// One selectable option: a stored code and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}
