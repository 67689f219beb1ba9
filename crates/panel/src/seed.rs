//! Catalog seed loading for the terminal frontend.
//!
//! The catalog is populated externally; a JSON seed file (or the built-in
//! demo set) stands in for the warehouse data source.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// One catalog entry from a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub quantity: u32,
}

/// Load seed items from a JSON array of `{name, unit_price, quantity}`.
pub fn load(path: &Path) -> anyhow::Result<Vec<SeedItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog seed {}", path.display()))?;
    let items = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog seed {}", path.display()))?;
    Ok(items)
}

/// Built-in demo catalog for running without a seed file.
pub fn demo() -> Vec<SeedItem> {
    [
        ("Lays chips", 110_u64, 15_u32),
        ("Chupa-chups", 25, 40),
        ("Frankfurters", 290, 12),
        ("Mineral water", 95, 30),
    ]
    .into_iter()
    .map(|(name, unit_price, quantity)| SeedItem {
        name: name.to_string(),
        unit_price,
        quantity,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_items_parse_from_json() {
        let raw = r#"[{"name": "Widget", "unit_price": 250, "quantity": 5}]"#;
        let items: Vec<SeedItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Widget");
        assert_eq!(items[0].unit_price, 250);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn demo_catalog_has_unique_names() {
        let items = demo();
        assert!(!items.is_empty());

        let mut names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }
}
