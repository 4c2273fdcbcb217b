//! Cart State Core - Shared types library.
//!
//! This crate provides the value types the cart state manager is built from:
//! - `cart-state` - Persistence, cart operations, aggregates and rendering
//! - `cart-state-cli` - Command-line front end over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. Every invariant of a cart line (unique id, quantity of at least
//! one, price fixed at insertion) is enforced here by construction.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for item ids, money, quantities and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
