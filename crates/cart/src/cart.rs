use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Cart line: item name, unit price, quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    /// Price in smallest currency unit (e.g., cents), captured from the
    /// catalog when the line was first added.
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// The shopping cart: insertion-ordered lines, at most one per item name.
///
/// The name index keeps "is this item already in the cart" O(1) while the
/// line order stays stable for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    by_name: HashMap<String, usize>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lines, in the order items were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity carried for `name`, zero if the item is not in the cart.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.by_name
            .get(name)
            .map(|&idx| self.lines[idx].quantity)
            .unwrap_or(0)
    }

    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Merge `qty` into the existing line for `name`, or append a new line.
    ///
    /// An existing line keeps the unit price captured on first add.
    pub fn add(&mut self, name: &str, unit_price: u64, qty: u32) {
        match self.by_name.get(name) {
            Some(&idx) => self.lines[idx].quantity += qty,
            None => {
                self.by_name.insert(name.to_string(), self.lines.len());
                self.lines.push(CartLine {
                    name: name.to_string(),
                    unit_price,
                    quantity: qty,
                });
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.by_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_new_lines_in_order() {
        let mut cart = Cart::new();
        cart.add("Chips", 110, 2);
        cart.add("Beer", 220, 1);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Chips", "Beer"]);
    }

    #[test]
    fn add_merges_into_existing_line() {
        let mut cart = Cart::new();
        cart.add("Chips", 110, 2);
        cart.add("Chips", 110, 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("Chips"), 5);
    }

    #[test]
    fn merged_line_keeps_first_unit_price() {
        let mut cart = Cart::new();
        cart.add("Chips", 110, 1);
        cart.add("Chips", 999, 1);

        assert_eq!(cart.lines()[0].unit_price, 110);
    }

    #[test]
    fn totals_sum_over_lines() {
        let mut cart = Cart::new();
        cart.add("Chips", 110, 2);
        cart.add("Beer", 220, 3);

        assert_eq!(cart.total_cents(), 2 * 110 + 3 * 220);
    }

    #[test]
    fn clear_empties_lines_and_index() {
        let mut cart = Cart::new();
        cart.add("Chips", 110, 2);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("Chips"), 0);

        // A fresh add after clearing starts a new line.
        cart.add("Chips", 110, 1);
        assert_eq!(cart.quantity_of("Chips"), 1);
    }
}
