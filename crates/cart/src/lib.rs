//! Cart domain module.
//!
//! This crate contains the shopping cart and the checkout: the business rules
//! for adding catalog items to the cart while keeping cart and stock
//! consistent, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod cart;
pub mod checkout;
pub mod quantity;

pub use cart::{Cart, CartLine};
pub use checkout::{
    AddToCart, CancelSale, Checkout, CheckoutCommand, CheckoutEvent, CheckoutId, CommitSale,
    ItemAddedToCart, ItemRegistered, RegisterItem, SaleCancelled, SaleCommitted,
};
pub use quantity::Quantity;
