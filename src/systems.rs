//! Life-saving system aggregate.
//!
//! Cabin-safety state grouped into four blocks: oxygen, fire
//! suppression, evacuation and communications. Updates are partial; an
//! activation or posture change touches only the fields it names and
//! leaves the rest of the aggregate alone, so manual activations
//! survive later posture changes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// VFR transponder code squawked in normal operations.
pub const SQUAWK_VFR: &str = "1200";
/// General emergency transponder code.
pub const SQUAWK_EMERGENCY: &str = "7700";

/// Passenger and crew oxygen delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OxygenSystem {
    pub passenger_masks: bool,
    pub crew_masks: bool,
    pub oxygen_pressure_psi: u16,
    pub estimated_duration_min: u16,
}

/// Engine, cargo and lavatory fire coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireSuppression {
    pub engine_fire_bottles: u8,
    pub cargo_fire_suppression: bool,
    pub lavatory_fire_detection: bool,
}

/// Evacuation readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyEvacuation {
    pub slides_armed: bool,
    pub emergency_lighting: bool,
    pub exit_path_illumination: bool,
    pub crew_stations: bool,
}

/// Transponder and distress-call state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationSystems {
    pub mayday_transmitted: bool,
    pub squawk_code: String,
    pub atc_contact: bool,
    pub emergency_frequency: bool,
}

/// Full cabin-safety aggregate. `Default` is the documented baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSavingSystem {
    pub oxygen: OxygenSystem,
    pub fire_suppression: FireSuppression,
    pub evacuation: EmergencyEvacuation,
    pub comms: CommunicationSystems,
}

impl Default for LifeSavingSystem {
    fn default() -> Self {
        Self {
            oxygen: OxygenSystem {
                passenger_masks: false,
                crew_masks: false,
                oxygen_pressure_psi: 1850,
                estimated_duration_min: 22,
            },
            fire_suppression: FireSuppression {
                engine_fire_bottles: 2,
                cargo_fire_suppression: true,
                lavatory_fire_detection: true,
            },
            evacuation: EmergencyEvacuation {
                slides_armed: false,
                emergency_lighting: false,
                exit_path_illumination: false,
                crew_stations: false,
            },
            comms: CommunicationSystems {
                mayday_transmitted: false,
                squawk_code: SQUAWK_VFR.to_owned(),
                atc_contact: true,
                emergency_frequency: false,
            },
        }
    }
}

impl LifeSavingSystem {
    /// Applies the named activation to its block.
    pub fn activate(&mut self, activation: SystemActivation) {
        match activation {
            SystemActivation::OxygenMasks => {
                self.oxygen.passenger_masks = true;
                self.oxygen.crew_masks = true;
            }
            SystemActivation::EvacuationPrep => {
                self.evacuation = EmergencyEvacuation {
                    slides_armed: true,
                    emergency_lighting: true,
                    exit_path_illumination: true,
                    crew_stations: true,
                };
            }
            SystemActivation::Mayday => {
                self.comms.mayday_transmitted = true;
                self.comms.emergency_frequency = true;
            }
        }
    }

    /// Degraded posture held while a pressure-loss emergency is active:
    /// oxygen reserve bleeding down, transponder on the emergency code,
    /// guard frequency up. Mask, fire and evacuation state is left
    /// untouched.
    pub fn apply_emergency_pressure_loss(&mut self) {
        self.oxygen.oxygen_pressure_psi = 1650;
        self.oxygen.estimated_duration_min = 18;
        self.comms.squawk_code = SQUAWK_EMERGENCY.to_owned();
        self.comms.emergency_frequency = true;
    }
}

/// Life-saving systems a crew action can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemActivation {
    OxygenMasks,
    EvacuationPrep,
    Mayday,
}

/// Raised when an activation name at the string boundary is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSystem;

impl core::fmt::Display for UnknownSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown life-saving system")
    }
}

impl FromStr for SystemActivation {
    type Err = UnknownSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oxygen_masks" => Ok(Self::OxygenMasks),
            "evacuation_prep" => Ok(Self::EvacuationPrep),
            "mayday" => Ok(Self::Mayday),
            _ => Err(UnknownSystem),
        }
    }
}
