//! Cart

use std::{fmt, sync::Arc, sync::mpsc};

use rusty_money::{Money, iso::Currency};
use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::products::{Product, ProductId, rubles};

pub mod observer;

pub use observer::{CartObserver, CartSnapshot, ChannelObserver, Delivery, SubscriptionKey};

/// A product in the cart with its quantity.
///
/// Quantity is always at least one; the ledger removes an entry instead of
/// letting it reach zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Product,
    qty: u32,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    /// The product this line is for.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Number of units.
    pub fn qty(&self) -> u32 {
        self.qty
    }

    /// Unit price times quantity, in rubles.
    pub fn line_total(&self) -> u64 {
        self.product.price_rub.saturating_mul(u64::from(self.qty))
    }
}

/// Cart Ledger
///
/// The authoritative list of cart lines for one shopping session. Every change
/// swaps in a complete new [`CartSnapshot`] and publishes it to all observers
/// before the mutating call returns.
pub struct CartLedger {
    items: CartSnapshot,
    observers: SlotMap<SubscriptionKey, Box<dyn CartObserver>>,
    // Delivery order; slotmap iteration follows slot reuse, not insertion.
    order: Vec<SubscriptionKey>,
}

impl CartLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            observers: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Add one unit of a product, creating the line if needed.
    pub fn add(&mut self, product: &Product) {
        let mut items = self.items.to_vec();

        let qty = if let Some(item) = items.iter_mut().find(|item| item.product.id == product.id) {
            item.qty = item.qty.saturating_add(1);
            item.qty
        } else {
            items.push(CartItem::new(product.clone()));
            1
        };

        debug!(product_id = %product.id, qty, "added product to cart");

        self.replace(items);
    }

    /// Add one unit to an existing line. Unknown products are ignored.
    pub fn increment(&mut self, product_id: ProductId) {
        let Some(index) = self.position(product_id) else {
            debug!(%product_id, "increment ignored, product not in cart");
            return;
        };

        let mut items = self.items.to_vec();

        if let Some(item) = items.get_mut(index) {
            item.qty = item.qty.saturating_add(1);
            debug!(%product_id, qty = item.qty, "incremented cart line");
        }

        self.replace(items);
    }

    /// Remove one unit from a line, dropping the line when it reaches zero.
    /// Unknown products are ignored.
    pub fn decrement(&mut self, product_id: ProductId) {
        let Some(index) = self.position(product_id) else {
            debug!(%product_id, "decrement ignored, product not in cart");
            return;
        };

        let mut items = self.items.to_vec();

        match items.get_mut(index) {
            Some(item) if item.qty > 1 => {
                item.qty -= 1;
                debug!(%product_id, qty = item.qty, "decremented cart line");
            }
            _ => {
                items.remove(index);
                debug!(%product_id, "removed cart line");
            }
        }

        self.replace(items);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "cleared cart");

        self.replace(Vec::new());
    }

    /// Sum of all line totals, in rubles.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(0, u64::saturating_add)
    }

    /// [`CartLedger::total`] as money.
    pub fn total_money(&self) -> Money<'static, Currency> {
        rubles(self.total())
    }

    /// Current cart contents.
    pub fn items(&self) -> CartSnapshot {
        Arc::clone(&self.items)
    }

    /// Iterate the current lines in cart order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// The line for a product, if it is in the cart.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Units of a product in the cart; zero when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, CartItem::qty)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Register an observer.
    ///
    /// The observer immediately receives the current contents, then every later
    /// change until it is unsubscribed or reports [`Delivery::Disconnected`].
    pub fn subscribe(&mut self, mut observer: impl CartObserver + 'static) -> SubscriptionKey {
        let delivery = observer.on_change(&self.items);
        let key = self.observers.insert(Box::new(observer));

        if delivery == Delivery::Disconnected {
            self.observers.remove(key);
        } else {
            self.order.push(key);
        }

        key
    }

    /// Subscribe a channel and return its receiving end.
    ///
    /// The current contents are already queued on the returned receiver.
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<CartSnapshot> {
        let (observer, receiver) = ChannelObserver::new();

        self.subscribe(observer);

        receiver
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.order.retain(|k| *k != key);
        self.observers.remove(key).is_some()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product_id)
    }

    fn replace(&mut self, items: Vec<CartItem>) {
        self.items = Arc::from(items);
        self.publish();
    }

    fn publish(&mut self) {
        let mut disconnected: SmallVec<[SubscriptionKey; 4]> = SmallVec::new();

        for key in &self.order {
            let Some(observer) = self.observers.get_mut(*key) else {
                continue;
            };

            if observer.on_change(&self.items) == Delivery::Disconnected {
                disconnected.push(*key);
            }
        }

        for key in disconnected {
            debug!(?key, "dropping disconnected cart observer");
            self.unsubscribe(key);
        }
    }
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartLedger")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}
