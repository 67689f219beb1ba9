use chrono::Utc;

use till_cart::{
    AddToCart, CancelSale, Checkout, CheckoutCommand, CheckoutEvent, CommitSale, Quantity,
    RegisterItem,
};
use till_catalog::StockItemId;
use till_core::{AggregateId, DomainResult};
use till_events::{Event, EventBus, InMemoryEventBus, Subscription, execute};

/// Dialog field state, as a display layer would render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFields {
    /// Selected item name; empty when nothing is selected.
    pub name: String,
    /// Bar code of the selected item (its id), read-only.
    pub bar_code: String,
    /// Unit price of the selected item, read-only display text.
    pub price: String,
    /// Free-form quantity entry; prefilled with "1".
    pub quantity_text: String,
}

impl Default for DialogFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            bar_code: String::new(),
            price: String::new(),
            quantity_text: "1".to_string(),
        }
    }
}

/// The purchase panel: a checkout plus the dialog state driving it.
///
/// Every failure surfaces as a `DomainError` value for the frontend to
/// display; nothing is swallowed here and nothing propagates past this
/// boundary. State changes reach display layers through the event bus, never
/// through shared mutable models.
#[derive(Debug)]
pub struct PurchasePanel {
    checkout: Checkout,
    bus: InMemoryEventBus<CheckoutEvent>,
    dialog: DialogFields,
}

impl PurchasePanel {
    pub fn new(checkout: Checkout) -> Self {
        Self {
            checkout,
            bus: InMemoryEventBus::new(),
            dialog: DialogFields::default(),
        }
    }

    /// Subscribe a display layer to checkout events.
    pub fn subscribe(&self) -> Subscription<CheckoutEvent> {
        self.bus.subscribe()
    }

    /// Read-only snapshot of the checkout (catalog + cart).
    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    /// Current dialog field state.
    pub fn dialog(&self) -> &DialogFields {
        &self.dialog
    }

    /// Catalog names for the selection widget, in registration order.
    pub fn item_names(&self) -> Vec<String> {
        self.checkout.catalog().names().map(String::from).collect()
    }

    /// Register a new catalog item (the external population hook).
    pub fn register_item(&mut self, name: &str, unit_price: u64, quantity: u32) -> DomainResult<()> {
        let cmd = CheckoutCommand::RegisterItem(RegisterItem {
            checkout_id: self.checkout.id_typed(),
            item_id: StockItemId::new(AggregateId::new()),
            name: name.to_string(),
            unit_price,
            quantity,
            occurred_at: Utc::now(),
        });
        self.run(cmd)
    }

    /// Prefill the dialog from the selected catalog entry.
    ///
    /// An unknown selection resets the fields.
    pub fn select_item(&mut self, name: &str) {
        match self.checkout.catalog().get(name) {
            Some(item) => {
                self.dialog = DialogFields {
                    name: item.name().to_string(),
                    bar_code: item.id_typed().to_string(),
                    price: format_price(item.unit_price()),
                    quantity_text: "1".to_string(),
                };
            }
            None => self.reset(),
        }
    }

    /// Overwrite the quantity entry text.
    pub fn set_quantity_text(&mut self, text: &str) {
        self.dialog.quantity_text = text.to_string();
    }

    /// Add the selected item to the cart.
    ///
    /// Parses the quantity text, then runs the add through the checkout as
    /// one atomic step. On success the quantity entry resets to "1".
    pub fn add_item(&mut self) -> DomainResult<()> {
        let quantity: Quantity = self.dialog.quantity_text.parse()?;

        let cmd = CheckoutCommand::AddToCart(AddToCart {
            checkout_id: self.checkout.id_typed(),
            name: self.dialog.name.clone(),
            quantity,
            occurred_at: Utc::now(),
        });
        self.run(cmd)?;

        self.dialog.quantity_text = "1".to_string();
        Ok(())
    }

    /// Finalize the purchase; returns the sale total in cents.
    pub fn commit_sale(&mut self) -> DomainResult<u64> {
        let cmd = CheckoutCommand::CommitSale(CommitSale {
            checkout_id: self.checkout.id_typed(),
            occurred_at: Utc::now(),
        });

        let events = execute(&mut self.checkout, &cmd)?;
        let total = events
            .iter()
            .find_map(|ev| match ev {
                CheckoutEvent::SaleCommitted(e) => Some(e.total_cents),
                _ => None,
            })
            .unwrap_or(0);
        self.publish(events);
        self.reset();
        Ok(total)
    }

    /// Abandon the purchase, returning reserved stock to the catalog.
    pub fn cancel_sale(&mut self) -> DomainResult<()> {
        let cmd = CheckoutCommand::CancelSale(CancelSale {
            checkout_id: self.checkout.id_typed(),
            occurred_at: Utc::now(),
        });
        self.run(cmd)?;
        self.reset();
        Ok(())
    }

    /// Clear the dialog fields (quantity back to "1").
    pub fn reset(&mut self) {
        self.dialog = DialogFields::default();
    }

    fn run(&mut self, cmd: CheckoutCommand) -> DomainResult<()> {
        let events = execute(&mut self.checkout, &cmd)?;
        self.publish(events);
        Ok(())
    }

    fn publish(&self, events: Vec<CheckoutEvent>) {
        for ev in events {
            tracing::debug!(event_type = ev.event_type(), "checkout event");
            // Observers fall back to snapshots if the bus drops a message.
            let _ = self.bus.publish(ev);
        }
    }
}

/// Format a smallest-currency-unit amount for display ("250" → "2.50").
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
