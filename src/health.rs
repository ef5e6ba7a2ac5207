//! Subsystem health scoring.
//!
//! Maps the flight mode to a fixed set of subsystem health percentages.
//! Scores depend on the mode alone; individual sensor readings do not
//! feed back into them, so repeated scoring within a mode is stable and
//! the dashboard always shows one coherent posture per mode.

use serde::{Deserialize, Serialize};

use crate::telemetry::Mode;

/// Health percentages for the monitored aircraft subsystems (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemHealth {
    pub overall: u8,
    pub engines: u8,
    pub hydraulics: u8,
    pub electrical: u8,
    pub avionics: u8,
    pub flight_controls: u8,
    pub navigation: u8,
    pub communication: u8,
    pub fuel_system: u8,
    pub landing_gear: u8,
    pub pressurization: u8,
    pub fire_detection: u8,
}

impl SystemHealth {
    /// Field values in declaration order, for range checks and feeds.
    pub fn values(&self) -> [u8; 12] {
        [
            self.overall,
            self.engines,
            self.hydraulics,
            self.electrical,
            self.avionics,
            self.flight_controls,
            self.navigation,
            self.communication,
            self.fuel_system,
            self.landing_gear,
            self.pressurization,
            self.fire_detection,
        ]
    }
}

/// All systems nominal in cruise.
const NOMINAL: SystemHealth = SystemHealth {
    overall: 94,
    engines: 96,
    hydraulics: 98,
    electrical: 92,
    avionics: 95,
    flight_controls: 97,
    navigation: 99,
    communication: 96,
    fuel_system: 94,
    landing_gear: 100,
    pressurization: 98,
    fire_detection: 100,
};

/// Dual-failure posture: engines and pressurization collapsed, knock-on
/// load on electrical and fuel systems.
const DEGRADED: SystemHealth = SystemHealth {
    overall: 18,
    engines: 12,
    hydraulics: 35,
    electrical: 78,
    avionics: 89,
    flight_controls: 65,
    navigation: 95,
    communication: 88,
    fuel_system: 72,
    landing_gear: 100,
    pressurization: 15,
    fire_detection: 100,
};

/// Scores every subsystem for the given mode. Replaces the previous
/// score wholesale; there is no blending between modes.
pub fn score(mode: Mode) -> SystemHealth {
    match mode {
        Mode::Normal => NOMINAL,
        Mode::Emergency => DEGRADED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_stay_within_percent_range() {
        for mode in [Mode::Normal, Mode::Emergency] {
            for v in score(mode).values() {
                assert!(v <= 100, "{mode:?} produced {v}%");
            }
        }
    }

    #[test]
    fn normal_mode_reads_healthy() {
        let h = score(Mode::Normal);
        assert!(h.values().iter().all(|&v| v >= 90));
        assert_eq!(h.landing_gear, 100);
    }

    #[test]
    fn emergency_collapses_engines_and_pressurization() {
        let h = score(Mode::Emergency);
        assert!(h.engines < 20);
        assert!(h.pressurization < 20);
        assert!(h.overall < 20);
        // Unaffected subsystems keep reading healthy.
        assert_eq!(h.landing_gear, 100);
        assert_eq!(h.fire_detection, 100);
    }

    #[test]
    fn scoring_is_stable_within_a_mode() {
        assert_eq!(score(Mode::Emergency), score(Mode::Emergency));
        assert_eq!(score(Mode::Normal), score(Mode::Normal));
    }
}
