use serde::{Deserialize, Serialize};

use till_core::{AggregateId, Entity};

/// Stock item identifier (rendered as the bar code in the purchase dialog).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockItemId(pub AggregateId);

impl StockItemId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for StockItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A purchasable item with its remaining warehouse stock.
///
/// The name is the unique lookup key used by the purchase dialog; the
/// quantity is mutated only through [`Catalog::deduct`] and
/// [`Catalog::receive`] as checkout events are applied.
///
/// [`Catalog::deduct`]: crate::Catalog::deduct
/// [`Catalog::receive`]: crate::Catalog::receive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    id: StockItemId,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    quantity: u32,
}

impl StockItem {
    pub fn new(id: StockItemId, name: impl Into<String>, unit_price: u64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn id_typed(&self) -> StockItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Units currently available for sale.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn adjust_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
