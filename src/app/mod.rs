//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the AirSign simulation:
//! telemetry generation, health scoring, alert derivation and lifecycle,
//! and advisory analysis. All interaction with the outside world happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without a host loop or a live weather source.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
