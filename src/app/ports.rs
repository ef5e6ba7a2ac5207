//! Port traits — the hexagonal boundary between the simulation core and
//! the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SimulationService (domain)
//! ```
//!
//! Driven adapters (weather sources, event sinks) implement these
//! traits. The [`SimulationService`](super::service::SimulationService)
//! consumes them via generics, so the core never touches a socket or
//! the wall clock directly.
//!
//! All port errors are typed — callers must handle every variant
//! explicitly. The core itself treats a failing port as degraded input,
//! never as a reason to abort a tick.

use serde::Serialize;

use crate::telemetry::Mode;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / feeds)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`SimEvent`](super::events::SimEvent)s
/// through this port. Adapters decide where they go (log lines, JSON
/// stream, cockpit display, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::SimEvent);
}

// ───────────────────────────────────────────────────────────────
// Weather port (driven adapter: ambient conditions → domain)
// ───────────────────────────────────────────────────────────────

/// Ambient conditions along the simulated route. Enrichment only:
/// alert derivation never depends on a report being available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub turbulence: f32,
    pub wind_speed_kt: f32,
    pub visibility_sm: f32,
    pub temperature_f: f32,
    pub humidity_pct: f32,
    pub lightning_risk: f32,
    pub pressure_hpa: f32,
    pub wind_direction_deg: f32,
    pub cloud_cover_pct: f32,
    pub weather_alerts: Vec<&'static str>,
}

/// Read-side port: the domain polls this once per tick.
pub trait WeatherPort {
    /// Current conditions along the route.
    fn current_conditions(&mut self) -> Result<WeatherReport, WeatherError>;
}

// ───────────────────────────────────────────────────────────────
// Scenario delegate (decouples the script from the command path)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the scenario script invokes when a step fires.
///
/// This decouples the [`ScenarioScript`](crate::scheduler::ScenarioScript)
/// from the command inbox. The main loop implements this by queueing a
/// [`SimCommand::SetMode`](super::commands::SimCommand), but the script
/// itself knows nothing about commands or queues.
pub trait ScenarioDelegate {
    /// Called when a scripted step fires.
    ///
    /// * `label` — the human-readable label of the step that fired.
    /// * `mode`  — the mode the step requests.
    fn on_mode_scheduled(&mut self, label: &str, mode: Mode);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`WeatherPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherError {
    /// Upstream source unreachable.
    Unavailable,
    /// Source answered too slowly to be useful this tick.
    Timeout,
    /// Response could not be parsed.
    Malformed,
}

impl core::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "weather source unavailable"),
            Self::Timeout => write!(f, "weather source timed out"),
            Self::Malformed => write!(f, "weather response malformed"),
        }
    }
}

impl std::error::Error for WeatherError {}
