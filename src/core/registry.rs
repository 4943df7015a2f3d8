use std::collections::HashMap;

use crate::core::error::{FormError, Result};
use crate::shared::constants::{COUNTY_SOURCE, REGION_SOURCE};
use crate::shared::ru_regions::{RU_COUNTY_CHOICES, RU_REGIONS_CHOICES};
use crate::shared::types::Choice;

/// Registry of named choice sources, resolved when a widget is built.
///
/// Replaces the late-bound lookup of the original choice data: an
/// application builds one registry at startup and hands it to widget
/// constructors. Resolving an unregistered name fails construction.
#[derive(Debug, Clone, Default)]
pub struct ChoiceRegistry {
    sources: HashMap<&'static str, &'static [Choice]>,
}

impl ChoiceRegistry {
    /// An empty registry with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the bundled county and region lists.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(COUNTY_SOURCE, RU_COUNTY_CHOICES);
        registry.register(REGION_SOURCE, RU_REGIONS_CHOICES);
        registry
    }

    /// Register a source under a name, replacing any previous list.
    pub fn register(&mut self, name: &'static str, choices: &'static [Choice]) {
        tracing::debug!(
            "Registered choice source '{}' ({} choices)",
            name,
            choices.len()
        );
        self.sources.insert(name, choices);
    }

    /// Resolve a source by name.
    pub fn resolve(&self, name: &str) -> Result<&'static [Choice]> {
        self.sources.get(name).copied().ok_or_else(|| {
            tracing::debug!("Choice source '{}' is not registered", name);
            FormError::UnknownChoiceSource(name.to_string())
        })
    }
}
