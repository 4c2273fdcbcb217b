//! Cart State - a persisted shopping cart kept in sync with its views.
//!
//! A cart lives in a single named slot of a [`PersistedStore`]. Every user
//! action is a [`Command`] handed to [`CartService::dispatch`], which loads
//! the slot, applies the change, saves the whole cart back and re-renders
//! the full [`CartView`] (line rows plus count and total).
//!
//! # Modules
//!
//! - [`storage`] - `PersistedStore` trait with in-memory and file backends
//! - [`repository`] - Typed load/save of the cart slot, failing open on bad data
//! - [`catalog`] - Validation of raw catalog entries into addable items
//! - [`service`] - Add / set quantity / remove, and command dispatch
//! - [`aggregate`] - Item count and total value
//! - [`render`] - Row and summary descriptors, money formatting, HTML table
//!
//! # Example
//!
//! ```
//! use cart_state::{CartRepository, CartService, CatalogEntry, Command, MemoryStore};
//!
//! let mut service = CartService::new(CartRepository::new(MemoryStore::new()));
//! let resync = service.dispatch(Command::AddItem(CatalogEntry {
//!     id: Some("A".into()),
//!     name: Some("Widget".into()),
//!     image: Some("w.png".into()),
//!     price: Some("R$ 10,00".into()),
//! }));
//!
//! assert_eq!(resync.view.summary.count, 1);
//! assert_eq!(resync.view.summary.total_display, "R$ 10,00");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod catalog;
pub mod render;
pub mod repository;
pub mod service;
pub mod storage;

pub use catalog::{CatalogEntry, CatalogError};
pub use render::{CartView, MoneyFormat, RowView, SummaryView, ViewRenderer};
pub use repository::{CartRepository, DEFAULT_SLOT_KEY, RepositoryError};
pub use service::{CartError, CartService, Command, Outcome, Resync};
pub use storage::{FileStore, MemoryStore, PersistedStore, StoreError};
