//! Cart store: in-memory lines synchronized with durable storage.

use serde::{Deserialize, Serialize};

use zentro_catalog::Product;
use zentro_core::{
    find_by_id, find_by_id_mut, AuthState, DomainError, DomainResult, Entity, LoginRedirect,
    ProductId,
};
use zentro_storage::KeyValueStore;

/// Fixed storage key for the persisted cart.
pub const CART_STORAGE_KEY: &str = "zentro_cart";

/// One product-and-quantity entry within the cart.
///
/// `price` is a snapshot of the product's unit price at the time of first
/// add; it is not live-updated if the catalog price changes later. Prices
/// are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_ref: String,
    pub quantity: u32,
}

impl CartLine {
    /// Build a line from a product, snapshotting its current price.
    ///
    /// Rejects blank product ids and zero quantities; a cart never holds a
    /// line violating either invariant.
    pub fn from_product(product: &Product, quantity: u32) -> DomainResult<Self> {
        if !product.id.is_valid() {
            return Err(DomainError::invalid_id("product has a blank identifier"));
        }
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image_ref: product.images.clone(),
            quantity,
        })
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Result of an [`CartStore::add_item`] call.
///
/// `LoginRequired` is a control-flow branch, not a failure: the login
/// redirect has already been fired and the cart was left untouched.
/// `Rejected` means the input was invalid (blank id, zero quantity) and the
/// call was a logged no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    LoginRequired,
    Rejected,
}

/// Authoritative in-memory cart, synchronized with durable storage.
///
/// Every mutation persists the full line list synchronously; there is no
/// write-behind buffering. Storage failures are logged and the in-memory
/// state stays authoritative for the rest of the session.
#[derive(Debug)]
pub struct CartStore<S, A, R>
where
    S: KeyValueStore,
    A: AuthState,
    R: LoginRedirect,
{
    lines: Vec<CartLine>,
    storage: S,
    auth: A,
    redirect: R,
}

impl<S, A, R> CartStore<S, A, R>
where
    S: KeyValueStore,
    A: AuthState,
    R: LoginRedirect,
{
    /// Create an empty cart with injected collaborators.
    pub fn new(storage: S, auth: A, redirect: R) -> Self {
        Self {
            lines: Vec::new(),
            storage,
            auth,
            redirect,
        }
    }

    /// Load the persisted cart from storage.
    ///
    /// Missing key: state is left unchanged. Corrupt payload: logged, the
    /// stored entry is removed, and the cart resets to empty; no error
    /// reaches the caller. A payload that parses but violates invariants is
    /// repaired (offending lines dropped, duplicates collapsed to the first
    /// occurrence) and the repaired cart re-persisted.
    pub fn load(&mut self) {
        let raw = match self.storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!("failed to read cart from storage: {err}");
                return;
            }
        };

        match serde_json::from_str::<Vec<CartLine>>(&raw) {
            Ok(lines) => {
                let (lines, repaired) = sanitize(lines);
                self.lines = lines;
                if repaired {
                    tracing::warn!("persisted cart violated invariants, repaired on load");
                    self.persist();
                }
            }
            Err(err) => {
                tracing::warn!("corrupt cart payload, resetting to empty: {err}");
                self.lines.clear();
                if let Err(err) = self.storage.remove(CART_STORAGE_KEY) {
                    tracing::warn!("failed to remove corrupt cart entry: {err}");
                }
            }
        }
    }

    /// Add a product to the cart.
    ///
    /// Unauthenticated callers are routed to the login flow and the cart is
    /// left untouched. If a line for the product already exists its quantity
    /// is incremented (the price snapshot is NOT retaken); otherwise a new
    /// line is appended with the product's current price.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> AddOutcome {
        if !self.auth.is_authenticated() {
            tracing::debug!(
                product_id = %product.id,
                "add_item blocked: caller not authenticated, redirecting to login"
            );
            self.redirect.redirect_to_login();
            return AddOutcome::LoginRequired;
        }

        let line = match CartLine::from_product(product, quantity) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(product_id = %product.id, "add_item ignored: {err}");
                return AddOutcome::Rejected;
            }
        };

        match find_by_id_mut(&mut self.lines, &line.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
            }
            None => self.lines.push(line),
        }

        self.persist();
        AddOutcome::Added
    }

    /// Remove the line for `product_id`. Absent ids are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product_id != product_id);
        self.persist();
    }

    /// Set the quantity of a line to an absolute value.
    ///
    /// Zero behaves as removal; unknown ids are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = find_by_id_mut(&mut self.lines, product_id) {
            line.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart and delete the storage entry entirely.
    pub fn clear(&mut self) {
        self.lines.clear();
        if let Err(err) = self.storage.remove(CART_STORAGE_KEY) {
            tracing::warn!("failed to remove cart entry from storage: {err}");
        }
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities, recomputed on every call.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines, recomputed on every call.
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total_price(&self) -> u64 {
        self.lines.iter().fold(0u64, |acc, l| {
            acc.saturating_add(l.price.saturating_mul(u64::from(l.quantity)))
        })
    }

    /// Write the full line list to storage. Best-effort: failures are
    /// logged and the in-memory state remains authoritative.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.lines) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!("failed to serialize cart: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(CART_STORAGE_KEY, &payload) {
            tracing::warn!("failed to persist cart, continuing in-memory only: {err}");
        }
    }
}

/// Enforce cart invariants on a deserialized line list.
///
/// Drops lines with a blank product id or zero quantity and collapses
/// duplicate product ids to their first occurrence. Returns whether
/// anything had to change.
fn sanitize(lines: Vec<CartLine>) -> (Vec<CartLine>, bool) {
    let before = lines.len();
    let mut kept: Vec<CartLine> = Vec::with_capacity(before);
    for line in lines {
        if !line.product_id.is_valid() || line.quantity == 0 {
            continue;
        }
        if find_by_id(&kept, line.id()).is_some() {
            continue;
        }
        kept.push(line);
    }
    let repaired = kept.len() != before;
    (kept, repaired)
}
