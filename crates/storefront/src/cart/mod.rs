//! The Cart Store.
//!
//! Owns the visitor's list of selected products for the duration of a page
//! view. Durable storage is the only state that outlives a page view: every
//! operation reads the slot afresh, and every mutation writes the whole cart
//! back before returning. A renderer registered with the store is notified
//! after each successful mutation, so it always sees what storage holds.

mod storage;

use std::num::IntErrorKind;

use serde_json::Value;
use tracing::instrument;
use vitrine_core::{CartItem, ProductId};

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};

use crate::error::CartError;
use crate::render::CartRenderer;

/// Default storage slot name.
pub const DEFAULT_SLOT: &str = "cart";

/// An ordered cart: insertion order, unique product IDs.
pub type Cart = Vec<CartItem>;

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Item was appended and persisted.
    Added,
    /// An item with the same ID is already in the cart. Nothing was written.
    AlreadyPresent,
}

/// Result of [`CartStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item at the index was deleted and the cart persisted.
    Removed(CartItem),
    /// The index was outside `0..len`. Nothing was written.
    OutOfRange,
}

/// Cart state machine over an injected storage backend.
pub struct CartStore<S> {
    storage: S,
    slot: String,
    renderer: Option<Box<dyn CartRenderer>>,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store using the default `"cart"` slot.
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    /// Create a store using a named slot.
    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
            renderer: None,
        }
    }

    /// Register the renderer notified after each mutation.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl CartRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// The storage slot this store reads and writes.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Borrow the storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, ending this page view.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Ensure the slot holds a cart.
    ///
    /// Writes an empty cart if the slot is absent. An existing value is left
    /// alone, even if it is malformed or not text; [`load`](Self::load)
    /// treats that as empty and the next mutation overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written.
    #[instrument(skip(self), fields(slot = %self.slot))]
    pub fn initialize(&mut self) -> Result<(), CartError> {
        match self.storage.read_slot(&self.slot) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                tracing::debug!("creating empty cart");
                self.storage.write_slot(&self.slot, "[]")?;
                Ok(())
            }
            Err(e) if e.is_corrupt() => {
                tracing::warn!(error = %e, "leaving corrupt cart for the next mutation");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read the persisted cart.
    ///
    /// Absent, unreadable, or malformed storage yields an empty cart.
    #[must_use]
    pub fn load(&self) -> Cart {
        match self.read_cart() {
            Ok(cart) => cart,
            Err(e) if e.is_corrupt() => {
                tracing::warn!(slot = %self.slot, error = %e, "discarding corrupt cart");
                Cart::new()
            }
            Err(e) => {
                tracing::warn!(slot = %self.slot, error = %e, "failed to read cart, using empty cart");
                Cart::new()
            }
        }
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Append an item unless one with the same ID is already present.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the cart cannot be
    /// persisted. Corrupt content is not an error; it is replaced.
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub fn add(&mut self, item: CartItem) -> Result<AddOutcome, CartError> {
        let mut cart = self.load_for_update()?;

        if cart.iter().any(|existing| existing.same_product(&item)) {
            tracing::debug!("item already in cart");
            return Ok(AddOutcome::AlreadyPresent);
        }

        cart.push(item);
        self.persist(&cart)?;
        self.notify(&cart);
        Ok(AddOutcome::Added)
    }

    /// Add an untyped item record, as read from page markup.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidInput`] if the record is not an object
    /// with a non-empty string `id`; storage is not touched in that case.
    pub fn add_raw(&mut self, record: Value) -> Result<AddOutcome, CartError> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| CartError::InvalidInput("item is missing a string id".to_string()))?;
        ProductId::parse(id).map_err(|e| CartError::InvalidInput(e.to_string()))?;

        let item: CartItem = serde_json::from_value(record)
            .map_err(|e| CartError::InvalidInput(format!("malformed item: {e}")))?;
        self.add(item)
    }

    /// Delete the item at `index` in current cart order.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the cart cannot be
    /// persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> Result<RemoveOutcome, CartError> {
        let mut cart = self.load_for_update()?;

        if index >= cart.len() {
            tracing::debug!(len = cart.len(), "remove index out of range");
            return Ok(RemoveOutcome::OutOfRange);
        }

        let removed = cart.remove(index);
        self.persist(&cart)?;
        self.notify(&cart);
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Remove by an index string, as rendered into a `data-index` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidInput`] if `index` is not an integer.
    /// A negative or past-the-end index, of any magnitude, is
    /// [`RemoveOutcome::OutOfRange`], not an error.
    pub fn remove_raw(&mut self, index: &str) -> Result<RemoveOutcome, CartError> {
        let trimmed = index.trim();
        let n = match trimmed.parse::<i64>() {
            Ok(n) => n,
            Err(e)
                if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) =>
            {
                tracing::debug!(index = trimmed, "remove index overflows");
                return Ok(RemoveOutcome::OutOfRange);
            }
            Err(_) => {
                return Err(CartError::InvalidInput(format!(
                    "cart index must be an integer, got {trimmed:?}"
                )));
            }
        };
        match usize::try_from(n) {
            Ok(i) => self.remove(i),
            Err(_) => Ok(RemoveOutcome::OutOfRange),
        }
    }

    /// Re-render the current cart without mutating it.
    pub fn refresh(&self) {
        let cart = self.load();
        self.notify(&cart);
    }

    fn read_cart(&self) -> Result<Cart, StorageError> {
        match self.storage.read_slot(&self.slot)? {
            Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Corrupt),
            None => Ok(Cart::new()),
        }
    }

    /// Cart to mutate. Corrupt content is replaced, but a slot that cannot
    /// be read at all must not be overwritten.
    fn load_for_update(&self) -> Result<Cart, CartError> {
        match self.read_cart() {
            Ok(cart) => Ok(cart),
            Err(e) if e.is_corrupt() => {
                tracing::warn!(slot = %self.slot, error = %e, "replacing corrupt cart");
                Ok(Cart::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&mut self, cart: &[CartItem]) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart).map_err(StorageError::Serialize)?;
        self.storage.write_slot(&self.slot, &raw)?;
        tracing::debug!(slot = %self.slot, len = cart.len(), "cart persisted");
        Ok(())
    }

    fn notify(&self, cart: &[CartItem]) {
        if let Some(renderer) = &self.renderer
            && let Err(e) = renderer.render(cart)
        {
            tracing::warn!(error = %e, "cart render failed");
        }
    }
}
