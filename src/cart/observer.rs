//! Cart Observers

use std::sync::{Arc, mpsc};

use slotmap::new_key_type;

use crate::cart::CartItem;

/// Immutable view of the whole cart at one point in time.
pub type CartSnapshot = Arc<[CartItem]>;

new_key_type! {
    /// Handle returned by [`CartLedger::subscribe`](crate::cart::CartLedger::subscribe)
    pub struct SubscriptionKey;
}

/// Outcome of delivering a snapshot to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The observer took the snapshot and wants further updates.
    Delivered,

    /// The observer is gone and should be dropped by the ledger.
    Disconnected,
}

/// Receives every published cart state.
///
/// Observers are called synchronously, in subscription order, from inside the
/// mutating ledger call.
pub trait CartObserver {
    /// Called with the full cart after every change, and once on subscribe.
    fn on_change(&mut self, items: &CartSnapshot) -> Delivery;
}

impl<F> CartObserver for F
where
    F: FnMut(&[CartItem]),
{
    fn on_change(&mut self, items: &CartSnapshot) -> Delivery {
        self(items);
        Delivery::Delivered
    }
}

/// Forwards snapshots into a channel; disconnects once the receiver is dropped.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: mpsc::Sender<CartSnapshot>,
}

impl ChannelObserver {
    /// Create an observer and the receiving half of its stream.
    pub fn new() -> (Self, mpsc::Receiver<CartSnapshot>) {
        let (sender, receiver) = mpsc::channel();

        (Self { sender }, receiver)
    }
}

impl CartObserver for ChannelObserver {
    fn on_change(&mut self, items: &CartSnapshot) -> Delivery {
        match self.sender.send(Arc::clone(items)) {
            Ok(()) => Delivery::Delivered,
            Err(_) => Delivery::Disconnected,
        }
    }
}
