//! Alert records shared across derivation, lifecycle and presentation.
//!
//! Two alert streams exist. Critical alerts carry the full response
//! package (checklist, diversion airports, countdown) and stay open
//! until the situation resolves; crew alerts are short attention
//! directives that disappear once acknowledged. Both are plain data,
//! produced by [`deriver`] and owned by [`store::AlertStore`].

pub mod airports;
pub mod deriver;
pub mod procedures;
pub mod store;

use serde::Serialize;

/// Category of a critical alert. At most one open alert exists per
/// category at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    EngineFailure,
    CabinPressure,
    Fire,
    FuelEmergency,
    Structural,
    SevereWeather,
}

impl AlertCategory {
    /// Hyphenated slug used as the alert id prefix.
    pub fn slug(self) -> &'static str {
        match self {
            Self::EngineFailure => "engine-failure",
            Self::CabinPressure => "cabin-pressure",
            Self::Fire => "fire",
            Self::FuelEmergency => "fuel-emergency",
            Self::Structural => "structural",
            Self::SevereWeather => "severe-weather",
        }
    }
}

/// One checklist step inside a critical alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyProcedure {
    pub step: u8,
    pub action: &'static str,
    pub time_limit_secs: u32,
    pub completed: bool,
    /// Critical steps must be done for the response to count; the rest
    /// are strongly advised.
    pub critical: bool,
}

/// Diversion candidate attached to a critical alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NearestAirport {
    pub code: &'static str,
    pub name: &'static str,
    pub distance_nm: u16,
    pub bearing_deg: u16,
    pub runway_length_ft: u16,
    pub emergency_services: bool,
    pub weather: &'static str,
    pub eta_min: u16,
}

/// Full-package alert for a condition that threatens the flight.
///
/// `id` embeds the category slug and the raising timestamp, so ids are
/// unique across an entire run. `acknowledged` and per-step `completed`
/// flags only ever move false to true while the alert is open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalAlert {
    pub id: String,
    pub category: AlertCategory,
    /// 1 (advisory) through 5 (catastrophic).
    pub severity: u8,
    pub title: String,
    pub message: String,
    pub timestamp_ms: u64,
    pub acknowledged: bool,
    /// Seconds available to complete the critical response.
    pub time_to_action_secs: u32,
    pub confidence_pct: f32,
    pub procedures: Vec<EmergencyProcedure>,
    pub nearest_airports: Vec<NearestAirport>,
    pub evacuation_required: bool,
    pub oxygen_masks_deployed: bool,
}

/// Urgency of a crew alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewPriority {
    Immediate,
    Urgent,
    Advisory,
}

/// Short attention directive for the flight crew. Acknowledging one
/// removes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrewAlert {
    pub id: String,
    pub priority: CrewPriority,
    pub message: String,
    pub voice_alert: bool,
    pub visual_cue: String,
    pub timestamp_ms: u64,
    pub procedure_required: bool,
    pub time_limit_secs: Option<u32>,
}
