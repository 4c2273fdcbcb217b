//! Dispatching one cart event against the file-backed store.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a catalog product
//! cart-cli add --id A --name "Widget" --image w.png --price "R$ 10,00"
//!
//! # Change a quantity (non-numeric or non-positive input becomes 1)
//! cart-cli set A 5
//!
//! # Remove a line
//! cart-cli remove A
//!
//! # Print the cart, as text or as the HTML table
//! cart-cli show --html
//! ```

use cart_state::{
    CartRepository, CartService, Command, FileStore, MoneyFormat, Outcome, Resync, ViewRenderer,
};

use crate::config::CliConfig;

/// Build a service over the configured store file and slot.
#[must_use]
pub fn open(config: &CliConfig) -> CartService<FileStore> {
    let store = FileStore::new(&config.store_path);
    let repository = CartRepository::with_key(store, config.storage_key.clone());
    let renderer = ViewRenderer::new(MoneyFormat::new(config.currency_prefix.clone()));
    CartService::new(repository).with_renderer(renderer)
}

/// Dispatch a single command and return the re-synchronized view.
#[must_use]
pub fn execute(config: &CliConfig, command: Command) -> Resync {
    let mut service = open(config);
    let resync = service.dispatch(command);

    match &resync.outcome {
        Outcome::Applied => tracing::info!(
            lines = resync.view.rows.len(),
            count = resync.view.summary.count,
            "cart updated"
        ),
        Outcome::Unchanged => tracing::info!("cart unchanged"),
        Outcome::Rejected(reason) => tracing::warn!(%reason, "cart command rejected"),
    }
    resync
}
