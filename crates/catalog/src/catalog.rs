use std::collections::HashMap;

use crate::item::StockItem;

/// Name-indexed, insertion-ordered collection of stock items.
///
/// Lookup is by name (the unique key the purchase dialog selects on);
/// enumeration preserves registration order for display. Name uniqueness is
/// enforced at decision time in the checkout; the mutators here are the
/// infallible state-evolution half and quietly ignore unknown names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<StockItem>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up an item by its unique name.
    pub fn get(&self, name: &str) -> Option<&StockItem> {
        self.by_name.get(name).map(|&idx| &self.items[idx])
    }

    /// All item names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name())
    }

    /// All items, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StockItem> {
        self.items.iter()
    }

    /// Insert an item, or replace the one already registered under the same
    /// name (position preserved).
    pub fn put(&mut self, item: StockItem) {
        match self.by_name.get(item.name()) {
            Some(&idx) => self.items[idx] = item,
            None => {
                self.by_name.insert(item.name().to_string(), self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Remove `qty` units from an item's stock.
    pub fn deduct(&mut self, name: &str, qty: u32) {
        if let Some(&idx) = self.by_name.get(name) {
            let item = &mut self.items[idx];
            item.adjust_quantity(item.quantity() - qty);
        }
    }

    /// Return `qty` units to an item's stock.
    pub fn receive(&mut self, name: &str, qty: u32) {
        if let Some(&idx) = self.by_name.get(name) {
            let item = &mut self.items[idx];
            item.adjust_quantity(item.quantity() + qty);
        }
    }
}
