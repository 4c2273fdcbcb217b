//! Cart commands.
//!
//! Each invocation of the binary is one user event: it opens the store,
//! dispatches a single [`cart_state::Command`] and prints the re-rendered
//! cart.

pub mod cart;
pub mod output;
