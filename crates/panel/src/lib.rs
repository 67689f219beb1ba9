//! Purchase panel adapter.
//!
//! Models the *behavior* of the purchase pane - selection prefill, quantity
//! entry, the add-to-cart action, reset - without any GUI toolkit. Window
//! layout belongs to whichever frontend drives the panel; the terminal
//! frontend in `src/main.rs` is one such driver.

pub mod panel;
pub mod seed;

pub use panel::{DialogFields, PurchasePanel, format_price};
