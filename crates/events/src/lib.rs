//! `till-events` — event mechanics for the checkout domain.
//!
//! The `Event` trait, the pub/sub `EventBus` abstraction (the contract by
//! which presentation layers observe state changes), an in-memory bus, and
//! the `execute` helper that runs one command through an aggregate as a
//! single indivisible decide→apply step.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
