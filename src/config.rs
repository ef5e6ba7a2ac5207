//! Simulation configuration parameters
//!
//! All tunable parameters for the AirSign simulation core.
//! Values can be overridden by passing a JSON config file to the binary.

use serde::{Deserialize, Serialize};

/// Core simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    // --- Engine thresholds ---
    /// Engine temperature (Fahrenheit) considered elevated
    pub engine_temp_warn_f: f32,
    /// Engine temperature (Fahrenheit) that raises an engine-failure alert
    pub engine_temp_crit_f: f32,
    /// Oil pressure (PSI) below which engine lubrication is compromised
    pub oil_pressure_crit_psi: f32,
    /// Vibration level above which structural concern is raised
    pub vibration_crit: f32,

    // --- Cabin thresholds ---
    /// Cabin pressure (PSI) considered declining
    pub cabin_pressure_warn_psi: f32,
    /// Cabin pressure (PSI) that raises a pressure-loss alert
    pub cabin_pressure_crit_psi: f32,

    // --- Fuel ---
    /// Fuel quantity (percent) considered low
    pub fuel_low_pct: f32,

    // --- Timing ---
    /// Simulation tick interval (milliseconds)
    pub tick_interval_ms: u32,

    // --- Risk assessment ---
    /// Passengers plus crew, reported by the risk assessment
    pub souls_on_board: u16,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Engine
            engine_temp_warn_f: 400.0,
            engine_temp_crit_f: 450.0,
            oil_pressure_crit_psi: 30.0,
            vibration_crit: 8.0,

            // Cabin
            cabin_pressure_warn_psi: 10.5,
            cabin_pressure_crit_psi: 10.0,

            // Fuel
            fuel_low_pct: 30.0,

            // Timing
            tick_interval_ms: 2000, // 0.5 Hz

            // Risk
            souls_on_board: 186, // 180 passengers + 6 crew
        }
    }
}
