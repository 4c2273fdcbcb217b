//! Cart operations and command dispatch.
//!
//! Every operation is a full read-modify-write cycle: load the persisted
//! cart, transform it, save it whole. Nothing is cached between calls, so
//! each call sees exactly what the previous one stored.
//!
//! [`CartService::dispatch`] is the single entry point for the presentation
//! layer. It never returns an error: failures are logged, reported as
//! [`Outcome::Rejected`], and the caller still receives a freshly rendered
//! view of whatever is persisted.

use thiserror::Error;
use tracing::{debug, error, instrument};

use cart_state_core::{Cart, CartItem, ItemId, NewItem, Quantity};

use crate::catalog::{CatalogEntry, CatalogError};
use crate::render::{CartView, ViewRenderer};
use crate::repository::{CartRepository, RepositoryError};
use crate::storage::PersistedStore;

/// Errors from a single cart operation.
#[derive(Debug, Error)]
pub enum CartError {
    /// The catalog entry was incomplete or its price invalid.
    #[error("rejected catalog entry: {0}")]
    Catalog(#[from] CatalogError),

    /// The updated cart could not be persisted.
    #[error("failed to persist cart: {0}")]
    Repository(#[from] RepositoryError),
}

/// A user intent, as produced by the presentation layer.
///
/// Fields carry raw input; validation and clamping happen in dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of a catalog product.
    AddItem(CatalogEntry),
    /// Set a line's quantity from raw input (clamped to at least one).
    SetQuantity { id: String, quantity: Option<String> },
    /// Remove a line.
    RemoveItem { id: String },
    /// Re-render without changing anything.
    Refresh,
}

/// What a dispatched command did to the stored cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The cart changed.
    Applied,
    /// The command was valid but changed nothing (e.g. unknown id).
    Unchanged,
    /// The command failed; the stored cart is as it was.
    Rejected(String),
}

/// Result of a dispatch: the outcome plus the re-synchronized view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resync {
    pub outcome: Outcome,
    pub view: CartView,
}

/// Cart business logic over a repository.
#[derive(Debug)]
pub struct CartService<S> {
    repository: CartRepository<S>,
    renderer: ViewRenderer,
}

impl<S: PersistedStore> CartService<S> {
    /// Create a service rendering with the default money format.
    #[must_use]
    pub fn new(repository: CartRepository<S>) -> Self {
        Self {
            repository,
            renderer: ViewRenderer::default(),
        }
    }

    /// Replace the renderer used by [`dispatch`](Self::dispatch).
    #[must_use]
    pub fn with_renderer(mut self, renderer: ViewRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// The currently persisted cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.repository.load()
    }

    /// Add one unit of `item`.
    ///
    /// An existing line with the same id gains one unit and keeps its
    /// original name, image and price. Otherwise a new line with quantity
    /// one is appended.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the cart cannot be saved.
    #[instrument(skip_all, fields(item_id = %item.id))]
    pub fn add_item(&mut self, item: NewItem) -> Result<Outcome, CartError> {
        let mut cart = self.repository.load();
        if let Some(existing) = cart.get_mut(&item.id) {
            existing.increment();
            debug!(quantity = %existing.quantity(), "incremented existing line");
        } else {
            debug!(unit_price = %item.unit_price, "added new line");
            cart.insert(CartItem::new(item, Quantity::ONE));
        }
        self.repository.save(&cart)?;
        Ok(Outcome::Applied)
    }

    /// Set the quantity of an existing line.
    ///
    /// An unknown id leaves the cart as it is. The cart is saved either way.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the cart cannot be saved.
    #[instrument(skip_all, fields(item_id = %id, quantity = %quantity))]
    pub fn set_quantity(&mut self, id: &ItemId, quantity: Quantity) -> Result<Outcome, CartError> {
        let mut cart = self.repository.load();
        let outcome = match cart.get_mut(id) {
            Some(line) if line.quantity() == quantity => Outcome::Unchanged,
            Some(line) => {
                line.set_quantity(quantity);
                Outcome::Applied
            }
            None => {
                debug!("no line with this id");
                Outcome::Unchanged
            }
        };
        self.repository.save(&cart)?;
        Ok(outcome)
    }

    /// Remove the line with this id.
    ///
    /// Removing an unknown id is a no-op. The cart is saved either way.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the cart cannot be saved.
    #[instrument(skip_all, fields(item_id = %id))]
    pub fn remove_item(&mut self, id: &ItemId) -> Result<Outcome, CartError> {
        let mut cart = self.repository.load();
        let outcome = if cart.remove(id).is_some() {
            Outcome::Applied
        } else {
            debug!("no line with this id");
            Outcome::Unchanged
        };
        self.repository.save(&cart)?;
        Ok(outcome)
    }

    /// Apply a command, then re-render the persisted cart in full.
    pub fn dispatch(&mut self, command: Command) -> Resync {
        let outcome = self.apply(command).unwrap_or_else(|e| {
            error!(error = %e, "cart command rejected");
            Outcome::Rejected(e.to_string())
        });
        let cart = self.repository.load();
        Resync {
            outcome,
            view: self.renderer.render(&cart),
        }
    }

    fn apply(&mut self, command: Command) -> Result<Outcome, CartError> {
        match command {
            Command::AddItem(entry) => self.add_item(NewItem::try_from(entry)?),
            Command::SetQuantity { id, quantity } => match ItemId::parse(&id) {
                Ok(id) => self.set_quantity(&id, Quantity::from_input(quantity.as_deref())),
                Err(_) => Ok(Outcome::Unchanged),
            },
            Command::RemoveItem { id } => match ItemId::parse(&id) {
                Ok(id) => self.remove_item(&id),
                Err(_) => Ok(Outcome::Unchanged),
            },
            Command::Refresh => Ok(Outcome::Unchanged),
        }
    }
}
