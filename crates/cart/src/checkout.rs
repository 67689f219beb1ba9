use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use till_catalog::{Catalog, StockItem, StockItemId};
use till_core::{Aggregate, AggregateId, AggregateRoot, DomainError};
use till_events::Event;

use crate::cart::Cart;
use crate::quantity::Quantity;

/// Checkout identifier (one per register session).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutId(pub AggregateId);

impl CheckoutId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CheckoutId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Checkout.
///
/// Owns the catalog and the cart; every mutation of either flows through
/// `handle`/`apply`, so the add-to-cart step (validate, reconcile the cart
/// line, decrement stock) is a single indivisible transition. Observers get
/// read-only snapshots via [`catalog`](Checkout::catalog) and
/// [`cart`](Checkout::cart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    id: CheckoutId,
    catalog: Catalog,
    cart: Cart,
    version: u64,
}

impl Checkout {
    /// Create a checkout with an empty catalog and an empty cart.
    pub fn new(id: CheckoutId) -> Self {
        Self {
            id,
            catalog: Catalog::new(),
            cart: Cart::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CheckoutId {
        self.id
    }

    /// Read-only view of the warehouse catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl AggregateRoot for Checkout {
    type Id = CheckoutId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: RegisterItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterItem {
    pub checkout_id: CheckoutId,
    pub item_id: StockItemId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub checkout_id: CheckoutId,
    /// The selected catalog name (unique lookup key).
    pub name: String,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Command: CommitSale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSale {
    pub checkout_id: CheckoutId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: CancelSale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSale {
    pub checkout_id: CheckoutId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutCommand {
    RegisterItem(RegisterItem),
    AddToCart(AddToCart),
    CommitSale(CommitSale),
    CancelSale(CancelSale),
}

/// Event: ItemRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRegistered {
    pub checkout_id: CheckoutId,
    pub item_id: StockItemId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemAddedToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAddedToCart {
    pub checkout_id: CheckoutId,
    pub name: String,
    /// Price captured from the catalog at add time.
    pub unit_price: u64,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleCommitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCommitted {
    pub checkout_id: CheckoutId,
    pub total_cents: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleCancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCancelled {
    pub checkout_id: CheckoutId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutEvent {
    ItemRegistered(ItemRegistered),
    ItemAddedToCart(ItemAddedToCart),
    SaleCommitted(SaleCommitted),
    SaleCancelled(SaleCancelled),
}

impl Event for CheckoutEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CheckoutEvent::ItemRegistered(_) => "checkout.item.registered",
            CheckoutEvent::ItemAddedToCart(_) => "checkout.cart.item_added",
            CheckoutEvent::SaleCommitted(_) => "checkout.sale.committed",
            CheckoutEvent::SaleCancelled(_) => "checkout.sale.cancelled",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CheckoutEvent::ItemRegistered(e) => e.occurred_at,
            CheckoutEvent::ItemAddedToCart(e) => e.occurred_at,
            CheckoutEvent::SaleCommitted(e) => e.occurred_at,
            CheckoutEvent::SaleCancelled(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Checkout {
    type Command = CheckoutCommand;
    type Event = CheckoutEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CheckoutEvent::ItemRegistered(e) => {
                self.catalog.put(StockItem::new(
                    e.item_id,
                    e.name.clone(),
                    e.unit_price,
                    e.quantity,
                ));
            }
            CheckoutEvent::ItemAddedToCart(e) => {
                self.cart.add(&e.name, e.unit_price, e.quantity);
                self.catalog.deduct(&e.name, e.quantity);
            }
            CheckoutEvent::SaleCommitted(_) => {
                self.cart.clear();
            }
            CheckoutEvent::SaleCancelled(_) => {
                for line in self.cart.lines() {
                    self.catalog.receive(&line.name, line.quantity);
                }
                self.cart.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CheckoutCommand::RegisterItem(cmd) => self.handle_register(cmd),
            CheckoutCommand::AddToCart(cmd) => self.handle_add_to_cart(cmd),
            CheckoutCommand::CommitSale(cmd) => self.handle_commit(cmd),
            CheckoutCommand::CancelSale(cmd) => self.handle_cancel(cmd),
        }
    }
}

impl Checkout {
    fn ensure_checkout_id(&self, checkout_id: CheckoutId) -> Result<(), DomainError> {
        if self.id != checkout_id {
            return Err(DomainError::invariant("checkout_id mismatch"));
        }
        Ok(())
    }

    fn handle_register(&self, cmd: &RegisterItem) -> Result<Vec<CheckoutEvent>, DomainError> {
        self.ensure_checkout_id(cmd.checkout_id)?;

        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.catalog.contains(&cmd.name) {
            return Err(DomainError::conflict(format!(
                "item '{}' is already registered",
                cmd.name
            )));
        }

        Ok(vec![CheckoutEvent::ItemRegistered(ItemRegistered {
            checkout_id: cmd.checkout_id,
            item_id: cmd.item_id,
            name: cmd.name.clone(),
            unit_price: cmd.unit_price,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_to_cart(&self, cmd: &AddToCart) -> Result<Vec<CheckoutEvent>, DomainError> {
        self.ensure_checkout_id(cmd.checkout_id)?;

        let item = self.catalog.get(&cmd.name).ok_or(DomainError::NotFound)?;

        let requested = cmd.quantity.get();
        if requested > item.quantity() {
            return Err(DomainError::insufficient_stock(item.name(), item.quantity()));
        }

        Ok(vec![CheckoutEvent::ItemAddedToCart(ItemAddedToCart {
            checkout_id: cmd.checkout_id,
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity: requested,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_commit(&self, cmd: &CommitSale) -> Result<Vec<CheckoutEvent>, DomainError> {
        self.ensure_checkout_id(cmd.checkout_id)?;

        if self.cart.is_empty() {
            return Err(DomainError::validation("cannot commit an empty sale"));
        }

        Ok(vec![CheckoutEvent::SaleCommitted(SaleCommitted {
            checkout_id: cmd.checkout_id,
            total_cents: self.cart.total_cents(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_cancel(&self, cmd: &CancelSale) -> Result<Vec<CheckoutEvent>, DomainError> {
        self.ensure_checkout_id(cmd.checkout_id)?;

        // Nothing to undo.
        if self.cart.is_empty() {
            return Ok(vec![]);
        }

        Ok(vec![CheckoutEvent::SaleCancelled(SaleCancelled {
            checkout_id: cmd.checkout_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
