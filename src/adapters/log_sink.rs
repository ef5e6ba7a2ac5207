//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured simulation events to
//! the logger (console output in the demo binary). A future websocket
//! or MQTT adapter would implement the same trait.

use log::info;

use crate::app::events::SimEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`SimEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &SimEvent) {
        match event {
            SimEvent::Telemetry(t) => {
                info!(
                    "TELEM | {:?} t{} | EGT={:.0}F vib={:.1} oil={:.0}psi | \
                     cabin={:.1}psi fuel={:.0}% | {:.0}kt FL{:.0} | \
                     alerts={} health={}%",
                    t.mode,
                    t.tick,
                    t.engine_temp_f,
                    t.vibration_level,
                    t.oil_pressure_psi,
                    t.cabin_pressure_psi,
                    t.fuel_quantity_pct,
                    t.airspeed_kt,
                    t.altitude_ft / 100.0,
                    t.open_alerts,
                    t.overall_health_pct,
                );
            }
            SimEvent::ModeChanged { from, to } => {
                info!("MODE  | {from:?} -> {to:?}");
            }
            SimEvent::AlertRaised {
                id,
                category,
                severity,
            } => {
                info!("ALERT | raised {id} [{category:?}] severity={severity}");
            }
            SimEvent::AlertsCleared => {
                info!("ALERT | all cleared");
            }
            SimEvent::SystemActivated(activation) => {
                info!("SYS   | activated {activation:?}");
            }
            SimEvent::ProcedureCompleted { alert_id, step } => {
                info!("PROC  | {alert_id} step {step} complete");
            }
            SimEvent::Started(mode) => {
                info!("START | initial_mode={mode:?}");
            }
        }
    }
}
