//! AirSign simulation core library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! embedding. All I/O lives behind the port traits in [`app::ports`];
//! the [`adapters`] module holds the stock implementations the demo
//! binary wires together.

#![deny(unused_must_use)]

pub mod alerts;
pub mod analysis;
pub mod app;
pub mod config;
pub mod health;
pub mod inbox;
pub mod scheduler;
pub mod systems;
pub mod telemetry;

pub mod adapters;
