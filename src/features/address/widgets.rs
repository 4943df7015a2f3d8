use crate::core::error::Result;
use crate::core::registry::ChoiceRegistry;
use crate::core::select::Select;
use crate::shared::constants::{COUNTY_SOURCE, REGION_SOURCE};
use crate::shared::types::Attrs;

/// Select widget offering the Russian federal districts as its choices.
///
/// The list is resolved from the registry when the widget is built; an
/// unregistered source fails construction.
pub fn county_select(registry: &ChoiceRegistry, attrs: Option<Attrs>) -> Result<Select> {
    build_select(registry, COUNTY_SOURCE, attrs)
}

/// Select widget offering the Russian federal subjects as its choices.
pub fn region_select(registry: &ChoiceRegistry, attrs: Option<Attrs>) -> Result<Select> {
    build_select(registry, REGION_SOURCE, attrs)
}

fn build_select(registry: &ChoiceRegistry, source: &str, attrs: Option<Attrs>) -> Result<Select> {
    let select = Select::new(registry.resolve(source)?);
    Ok(match attrs {
        Some(attrs) => select.with_attrs(attrs),
        None => select,
    })
}
