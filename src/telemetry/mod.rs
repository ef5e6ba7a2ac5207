//! Synthetic flight telemetry.
//!
//! Produces one full sensor sweep per tick from the active mode's
//! statistical profile and retains a fixed-size history ring for trend
//! displays. Randomness and timestamps are injected by the caller, so a
//! seeded run is fully reproducible.

pub mod profile;

use heapless::HistoryBuffer;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Readings retained for trend displays.
pub const HISTORY_CAP: usize = 30;

/// Flight mode driving profile selection, health scoring and alert
/// derivation. Exactly one mode governs each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Normal,
    Emergency,
}

/// One synthetic sensor sweep. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp_ms: u64,
    pub engine_temp_f: f32,
    pub vibration_level: f32,
    pub oil_pressure_psi: f32,
    pub fuel_flow_lb_hr: f32,
    pub hydraulic_pressure_psi: f32,
    pub electrical_load_pct: f32,
    pub g_force: f32,
    pub cabin_pressure_psi: f32,
    pub wing_stress_pct: f32,
    pub fuel_quantity_pct: f32,
    pub engine_rpm: f32,
    pub airspeed_kt: f32,
    pub altitude_ft: f32,
}

impl SensorReading {
    /// Jitter-free cruise values, shown before the first tick lands.
    pub fn cruise_baseline(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            engine_temp_f: 420.0,
            vibration_level: 3.2,
            oil_pressure_psi: 45.0,
            fuel_flow_lb_hr: 2800.0,
            hydraulic_pressure_psi: 3000.0,
            electrical_load_pct: 85.0,
            g_force: 1.0,
            cabin_pressure_psi: 11.3,
            wing_stress_pct: 15.0,
            fuel_quantity_pct: 85.0,
            engine_rpm: 2400.0,
            airspeed_kt: 520.0,
            altitude_ft: 35000.0,
        }
    }
}

/// Profile-driven reading source with bounded history.
pub struct TelemetryGenerator {
    history: HistoryBuffer<SensorReading, HISTORY_CAP>,
}

impl TelemetryGenerator {
    pub fn new() -> Self {
        Self {
            history: HistoryBuffer::new(),
        }
    }

    /// Samples a full reading from the mode's profile and appends it to
    /// the history ring. The oldest entry is evicted once the ring holds
    /// [`HISTORY_CAP`] readings.
    pub fn tick(&mut self, mode: Mode, now_ms: u64, rng: &mut impl Rng) -> SensorReading {
        let p = profile::for_mode(mode);
        let reading = SensorReading {
            timestamp_ms: now_ms,
            engine_temp_f: p.engine_temp_f.sample(rng),
            vibration_level: p.vibration_level.sample(rng),
            oil_pressure_psi: p.oil_pressure_psi.sample(rng),
            fuel_flow_lb_hr: p.fuel_flow_lb_hr.sample(rng),
            hydraulic_pressure_psi: p.hydraulic_pressure_psi.sample(rng),
            electrical_load_pct: p.electrical_load_pct.sample(rng),
            g_force: p.g_force.sample(rng),
            cabin_pressure_psi: p.cabin_pressure_psi.sample(rng),
            wing_stress_pct: p.wing_stress_pct.sample(rng),
            fuel_quantity_pct: p.fuel_quantity_pct.sample(rng),
            engine_rpm: p.engine_rpm.sample(rng),
            airspeed_kt: p.airspeed_kt.sample(rng),
            altitude_ft: p.altitude_ft.sample(rng),
        };
        self.history.write(reading);
        reading
    }

    /// Oldest-first walk over the retained readings.
    pub fn history(&self) -> impl Iterator<Item = &SensorReading> {
        self.history.oldest_ordered()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recent reading, if any tick has run.
    pub fn latest(&self) -> Option<&SensorReading> {
        self.history.recent()
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn history_is_bounded() {
        let mut telem = TelemetryGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..40u64 {
            telem.tick(Mode::Normal, i * 2000, &mut rng);
        }
        assert_eq!(telem.history_len(), HISTORY_CAP);
        // Ticks 0..=9 were evicted; the oldest survivor is tick 10.
        let oldest = telem.history().next().unwrap();
        assert_eq!(oldest.timestamp_ms, 10 * 2000);
    }

    #[test]
    fn latest_tracks_last_tick() {
        let mut telem = TelemetryGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(telem.latest().is_none());
        let r = telem.tick(Mode::Normal, 1234, &mut rng);
        assert_eq!(telem.latest().unwrap().timestamp_ms, r.timestamp_ms);
    }

    #[test]
    fn normal_reading_stays_in_cruise_envelope() {
        let mut telem = TelemetryGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);
        for i in 0..200u64 {
            let r = telem.tick(Mode::Normal, i, &mut rng);
            assert!(r.engine_temp_f >= 412.5 && r.engine_temp_f <= 427.5);
            assert!(r.cabin_pressure_psi >= 11.2 && r.cabin_pressure_psi <= 11.4);
            assert!(r.altitude_ft >= 34950.0 && r.altitude_ft <= 35050.0);
        }
    }

    #[test]
    fn emergency_reading_reflects_dual_failure() {
        let mut telem = TelemetryGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);
        for i in 0..200u64 {
            let r = telem.tick(Mode::Emergency, i, &mut rng);
            assert!(r.engine_temp_f > 450.0, "engine temp must read critical");
            assert!(r.cabin_pressure_psi < 10.0, "cabin pressure must read critical");
            assert!(r.vibration_level > 8.0, "vibration must read severe");
        }
    }

    #[test]
    fn baseline_matches_normal_profile_centres() {
        let b = SensorReading::cruise_baseline(0);
        assert!((b.engine_temp_f - profile::NORMAL.engine_temp_f.base).abs() < f32::EPSILON);
        assert!(
            (b.cabin_pressure_psi - profile::NORMAL.cabin_pressure_psi.base).abs() < f32::EPSILON
        );
        assert!((b.engine_rpm - profile::NORMAL.engine_rpm.base).abs() < f32::EPSILON);
    }
}
