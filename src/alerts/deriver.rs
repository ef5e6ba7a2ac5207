//! Alert derivation.
//!
//! Pure evaluation of one reading against the active mode and the
//! configured thresholds. No I/O, no stored state: the lifecycle
//! store decides what a derivation means for already-open alerts.
//!
//! Normal mode derives nothing regardless of the reading. Emergency
//! mode gates each critical alert on its thresholds and always issues
//! the two crew directives for the scripted dual failure.

use crate::analysis::PredictiveReport;
use crate::config::SimConfig;
use crate::telemetry::{Mode, SensorReading};

use super::{AlertCategory, CriticalAlert, CrewAlert, CrewPriority, airports, procedures};

/// Everything one tick derives from a reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub critical: Vec<CriticalAlert>,
    pub crew: Vec<CrewAlert>,
    pub predictive: PredictiveReport,
}

/// Derives alerts and the predictive report for one reading.
pub fn derive(reading: &SensorReading, mode: Mode, cfg: &SimConfig) -> Derivation {
    if mode == Mode::Normal {
        return Derivation {
            critical: Vec::new(),
            crew: Vec::new(),
            predictive: PredictiveReport::normal(),
        };
    }

    let now = reading.timestamp_ms;
    let mut critical = Vec::new();

    if reading.engine_temp_f > cfg.engine_temp_crit_f
        || reading.oil_pressure_psi < cfg.oil_pressure_crit_psi
    {
        critical.push(CriticalAlert {
            id: format!("{}-{now}", AlertCategory::EngineFailure.slug()),
            category: AlertCategory::EngineFailure,
            severity: 5,
            title: "ENGINE #1 FAILURE - IMMEDIATE ACTION REQUIRED".to_owned(),
            message: "Engine #1 has failed. Oil pressure critical, temperature exceeding \
                      limits. Immediate emergency procedures required."
                .to_owned(),
            timestamp_ms: now,
            acknowledged: false,
            time_to_action_secs: 180,
            confidence_pct: 98.7,
            procedures: procedures::checklist(AlertCategory::EngineFailure),
            nearest_airports: airports::diversion_candidates(),
            evacuation_required: false,
            oxygen_masks_deployed: false,
        });
    }

    if reading.cabin_pressure_psi < cfg.cabin_pressure_crit_psi {
        // Staggered one second after the engine alert as the failures cascade.
        critical.push(CriticalAlert {
            id: format!("{}-{now}", AlertCategory::CabinPressure.slug()),
            category: AlertCategory::CabinPressure,
            severity: 5,
            title: "CABIN PRESSURE LOSS - DEPLOY OXYGEN MASKS".to_owned(),
            message: "Rapid cabin pressure loss detected. Passenger oxygen masks must be \
                      deployed immediately."
                .to_owned(),
            timestamp_ms: now + 1000,
            acknowledged: false,
            time_to_action_secs: 20,
            confidence_pct: 99.2,
            procedures: procedures::checklist(AlertCategory::CabinPressure),
            nearest_airports: airports::diversion_candidates(),
            evacuation_required: false,
            oxygen_masks_deployed: false,
        });
    }

    let crew = vec![
        CrewAlert {
            id: format!("crew-engine-{now}"),
            priority: CrewPriority::Immediate,
            message: "ENGINE FAILURE - EXECUTE ENGINE FIRE/FAILURE CHECKLIST".to_owned(),
            voice_alert: true,
            visual_cue: "RED MASTER WARNING - ENGINE FIRE/FAIL".to_owned(),
            timestamp_ms: now,
            procedure_required: true,
            time_limit_secs: Some(180),
        },
        CrewAlert {
            id: format!("crew-pressure-{now}"),
            priority: CrewPriority::Immediate,
            message: "CABIN PRESSURE LOSS - DON OXYGEN MASKS - DEPLOY PAX MASKS".to_owned(),
            voice_alert: true,
            visual_cue: "AMBER CABIN ALTITUDE WARNING".to_owned(),
            timestamp_ms: now + 1000,
            procedure_required: true,
            time_limit_secs: Some(20),
        },
    ];

    Derivation {
        critical,
        crew,
        predictive: PredictiveReport::emergency(),
    }
}
