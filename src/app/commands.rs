//! Inbound commands to the simulation service.
//!
//! These represent actions requested by the outside world (scenario
//! script, cockpit UI, feed consumer) that the
//! [`SimulationService`](super::service::SimulationService) interprets
//! and acts upon.

use crate::systems::SystemActivation;
use crate::telemetry::Mode;

/// Commands that external adapters can send into the simulation core.
#[derive(Debug, Clone, PartialEq)]
pub enum SimCommand {
    /// Switch the flight mode. Takes effect on the next tick.
    SetMode(Mode),

    /// Mark a critical alert acknowledged (the alert stays open).
    AcknowledgeAlert(String),

    /// Dismiss a crew directive.
    AcknowledgeCrewAlert(String),

    /// Activate a life-saving system.
    ActivateSystem(SystemActivation),

    /// Mark one checklist step of a critical alert completed.
    CompleteProcedure { alert_id: String, step: u8 },
}
