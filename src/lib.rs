//! Weather widget - look up current conditions for a place name
//!
//! The library holds the state machine, provider client and components;
//! `main.rs` wires them to a terminal.

pub mod action;
pub mod components;
pub mod effect;
pub mod error;
pub mod logging;
pub mod messages;
pub mod provider;
pub mod reducer;
pub mod state;
