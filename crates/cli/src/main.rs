//! Cart CLI - drive the persisted cart from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a product (price as shown in the catalog)
//! cart-cli add --id A --name "Widget" --image w.png --price "R$ 10,00"
//!
//! # Set a quantity
//! cart-cli set A 5
//!
//! # Remove a line
//! cart-cli remove A
//!
//! # Show the cart
//! cart-cli show
//! cart-cli show --html
//!
//! # Use another store file or slot
//! cart-cli --store /tmp/cart.json --key cart show
//! ```
//!
//! # Commands
//!
//! - `add` - Add one unit of a catalog product
//! - `set` - Set the quantity of a line
//! - `remove` - Remove a line
//! - `show` - Print the cart without changing it

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use cart_state::{CatalogEntry, Command};
use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::output::{self, Format};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "Persisted shopping cart tools")]
struct Cli {
    /// Store file (overrides `CART_STORE_PATH`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Slot key inside the store (overrides `CART_STORAGE_KEY`)
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a catalog product
    Add {
        /// Catalog id
        #[arg(long)]
        id: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Image reference
        #[arg(long)]
        image: Option<String>,

        /// Price as shown in the catalog, e.g. "R$ 1.234,56"
        #[arg(long)]
        price: Option<String>,
    },
    /// Set the quantity of a line
    Set {
        /// Catalog id of the line
        id: String,

        /// New quantity (invalid or non-positive values become 1)
        quantity: Option<String>,
    },
    /// Remove a line
    Remove {
        /// Catalog id of the line
        id: String,
    },
    /// Print the cart
    Show {
        /// Print the HTML table instead of text
        #[arg(long)]
        html: bool,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cart_state=info,cart_state_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_overrides(cli.store, cli.key)?;
    tracing::debug!(?config, "configuration loaded");

    let (command, format) = match cli.command {
        Commands::Add {
            id,
            name,
            image,
            price,
        } => (
            Command::AddItem(CatalogEntry {
                id,
                name,
                image,
                price,
            }),
            Format::Text,
        ),
        Commands::Set { id, quantity } => (Command::SetQuantity { id, quantity }, Format::Text),
        Commands::Remove { id } => (Command::RemoveItem { id }, Format::Text),
        Commands::Show { html } => (
            Command::Refresh,
            if html { Format::Html } else { Format::Text },
        ),
    };

    let resync = commands::cart::execute(&config, command);
    output::write_view(&mut std::io::stdout().lock(), &resync.view, format)?;
    Ok(())
}
