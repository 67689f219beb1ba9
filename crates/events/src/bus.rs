//! Event publishing/subscription abstraction (mechanics only).
//!
//! This module provides the **event bus pattern** - a pub/sub mechanism for
//! distributing events to consumers (display layers, loggers, etc.).
//!
//! ## Design Philosophy
//!
//! The bus is intentionally **lightweight** and makes minimal assumptions:
//!
//! - **Transport-agnostic**: works with in-memory channels or anything else
//! - **Broadcast semantics**: each subscriber gets a copy of every message
//! - **No persistence**: the bus distributes; the aggregate is the source of
//!   truth. Events are applied to the checkout *first*, then published, so a
//!   subscriber can always re-read a consistent snapshot.
//!
//! Consumers should be idempotent - the bus does not deduplicate.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of all events published to the bus after the
/// subscription was created (broadcast semantics). Subscriptions are designed
/// for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// The bus sits between the checkout core and its observers:
///
/// ```text
/// Command → Checkout (decide + apply) → Event Bus (publish) → Observers
///                                                                ├─ Display layers
///                                                                └─ Loggers
/// ```
///
/// This replaces the shared-mutable-display-model coupling of classic desktop
/// panels: the presentation layer never mutates core entities, it observes
/// published events and re-reads read-only snapshots.
///
/// ## Error Handling
///
/// `publish()` can fail; failures are surfaced to the caller. Since the
/// aggregate state is already updated, the caller may retry publication or
/// let observers fall back to polling snapshots.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
