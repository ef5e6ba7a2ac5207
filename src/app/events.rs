//! Outbound simulation events and feed records.
//!
//! The [`SimulationService`](super::service::SimulationService) emits
//! [`SimEvent`]s through the [`EventSink`](super::ports::EventSink)
//! port. Adapters on the other side decide what to do with them — write
//! log lines, stream JSON, update a cockpit display, etc.

use serde::Serialize;

use crate::alerts::{AlertCategory, CriticalAlert, CrewAlert};
use crate::analysis::{MaintenanceOutlook, PredictiveReport, RiskAssessment};
use crate::health::SystemHealth;
use crate::systems::{LifeSavingSystem, SystemActivation};
use crate::telemetry::{Mode, SensorReading};

use super::ports::WeatherReport;

/// Structured events emitted by the simulation core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimEvent {
    /// The simulation service has started (carries the initial mode).
    Started(Mode),

    /// The flight mode changed.
    ModeChanged { from: Mode, to: Mode },

    /// Per-tick telemetry summary.
    Telemetry(TelemetrySummary),

    /// A critical alert opened.
    AlertRaised {
        id: String,
        category: AlertCategory,
        severity: u8,
    },

    /// All alerts were cleared by a return to normal operations.
    AlertsCleared,

    /// A life-saving system was activated.
    SystemActivated(SystemActivation),

    /// A checklist step was completed.
    ProcedureCompleted { alert_id: String, step: u8 },
}

/// A point-in-time telemetry summary suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetrySummary {
    pub mode: Mode,
    pub tick: u64,
    pub engine_temp_f: f32,
    pub vibration_level: f32,
    pub oil_pressure_psi: f32,
    pub cabin_pressure_psi: f32,
    pub fuel_quantity_pct: f32,
    pub airspeed_kt: f32,
    pub altitude_ft: f32,
    pub open_alerts: usize,
    pub overall_health_pct: u8,
}

/// Full simulation state at one instant, cloned out of the service for
/// feeds and dashboards. Never aliases internal state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub tick: u64,
    pub mode: Mode,
    pub reading: SensorReading,
    pub health: SystemHealth,
    pub critical_alerts: Vec<CriticalAlert>,
    pub crew_alerts: Vec<CrewAlert>,
    pub systems: LifeSavingSystem,
    pub predictive: PredictiveReport,
    pub risk: Option<RiskAssessment>,
    pub outlook: Option<MaintenanceOutlook>,
    pub weather: Option<WeatherReport>,
}
