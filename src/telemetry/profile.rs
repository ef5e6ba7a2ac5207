//! Per-field statistical profiles for synthetic telemetry.
//!
//! Each field samples uniformly inside `base ± jitter` (half-width
//! convention) with an optional physical floor applied afterwards.
//! Two fixed profiles exist, one per flight mode: steady cruise, and a
//! dual-failure scenario (engine fire with cabin pressure loss).

use rand::Rng;

use super::Mode;

/// Sampling parameters for one telemetry field.
#[derive(Debug, Clone, Copy)]
pub struct FieldProfile {
    /// Centre of the sampled band.
    pub base: f32,
    /// Half-width of the uniform jitter band.
    pub jitter: f32,
    /// Physical lower bound, applied after jitter.
    pub floor: Option<f32>,
}

impl FieldProfile {
    const fn new(base: f32, jitter: f32) -> Self {
        Self {
            base,
            jitter,
            floor: None,
        }
    }

    const fn with_floor(base: f32, jitter: f32, floor: f32) -> Self {
        Self {
            base,
            jitter,
            floor: Some(floor),
        }
    }

    /// Draws one sample, uniform in `[base - jitter, base + jitter]`.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        let v = self.base + rng.gen_range(-1.0f32..1.0) * self.jitter;
        match self.floor {
            Some(floor) => v.max(floor),
            None => v,
        }
    }
}

/// Full set of field profiles for one flight mode.
#[derive(Debug, Clone, Copy)]
pub struct ReadingProfile {
    pub engine_temp_f: FieldProfile,
    pub vibration_level: FieldProfile,
    pub oil_pressure_psi: FieldProfile,
    pub fuel_flow_lb_hr: FieldProfile,
    pub hydraulic_pressure_psi: FieldProfile,
    pub electrical_load_pct: FieldProfile,
    pub g_force: FieldProfile,
    pub cabin_pressure_psi: FieldProfile,
    pub wing_stress_pct: FieldProfile,
    pub fuel_quantity_pct: FieldProfile,
    pub engine_rpm: FieldProfile,
    pub airspeed_kt: FieldProfile,
    pub altitude_ft: FieldProfile,
}

/// Steady cruise at FL350.
pub const NORMAL: ReadingProfile = ReadingProfile {
    engine_temp_f: FieldProfile::with_floor(420.0, 7.5, 200.0),
    vibration_level: FieldProfile::with_floor(3.2, 0.25, 0.0),
    oil_pressure_psi: FieldProfile::with_floor(45.0, 1.5, 20.0),
    fuel_flow_lb_hr: FieldProfile::new(2800.0, 50.0),
    hydraulic_pressure_psi: FieldProfile::new(3000.0, 25.0),
    electrical_load_pct: FieldProfile::new(85.0, 2.5),
    g_force: FieldProfile::new(1.0, 0.05),
    cabin_pressure_psi: FieldProfile::new(11.3, 0.1),
    wing_stress_pct: FieldProfile::new(15.0, 1.0),
    fuel_quantity_pct: FieldProfile::new(85.0, 1.0),
    engine_rpm: FieldProfile::new(2400.0, 25.0),
    airspeed_kt: FieldProfile::new(520.0, 5.0),
    altitude_ft: FieldProfile::new(35000.0, 50.0),
};

/// Engine #1 failure with rapid cabin pressure loss.
pub const EMERGENCY: ReadingProfile = ReadingProfile {
    engine_temp_f: FieldProfile::with_floor(520.0, 15.0, 200.0),
    vibration_level: FieldProfile::with_floor(9.2, 0.5, 0.0),
    oil_pressure_psi: FieldProfile::with_floor(28.0, 2.5, 20.0),
    fuel_flow_lb_hr: FieldProfile::new(2200.0, 100.0),
    hydraulic_pressure_psi: FieldProfile::new(2400.0, 100.0),
    electrical_load_pct: FieldProfile::new(98.0, 2.5),
    g_force: FieldProfile::new(1.4, 0.15),
    cabin_pressure_psi: FieldProfile::new(8.2, 0.25),
    wing_stress_pct: FieldProfile::new(28.0, 2.5),
    fuel_quantity_pct: FieldProfile::new(65.0, 2.5),
    engine_rpm: FieldProfile::new(1800.0, 100.0),
    airspeed_kt: FieldProfile::new(480.0, 10.0),
    altitude_ft: FieldProfile::new(34500.0, 250.0),
};

/// Profile governing the given mode.
pub fn for_mode(mode: Mode) -> &'static ReadingProfile {
    match mode {
        Mode::Normal => &NORMAL,
        Mode::Emergency => &EMERGENCY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_stays_inside_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = FieldProfile::new(100.0, 10.0);
        for _ in 0..1000 {
            let v = p.sample(&mut rng);
            assert!(v >= 90.0 && v <= 110.0, "sample {v} escaped the band");
        }
    }

    #[test]
    fn floor_clamps_low_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = FieldProfile::with_floor(1.0, 5.0, 0.0);
        for _ in 0..1000 {
            assert!(p.sample(&mut rng) >= 0.0);
        }
    }

    #[test]
    fn normal_band_stays_clear_of_critical_thresholds() {
        // Worst-case normal excursions must not look like an emergency.
        assert!(NORMAL.engine_temp_f.base + NORMAL.engine_temp_f.jitter < 450.0);
        assert!(NORMAL.cabin_pressure_psi.base - NORMAL.cabin_pressure_psi.jitter > 10.5);
        assert!(NORMAL.oil_pressure_psi.base - NORMAL.oil_pressure_psi.jitter > 30.0);
        assert!(NORMAL.vibration_level.base + NORMAL.vibration_level.jitter < 8.0);
    }

    #[test]
    fn emergency_band_always_trips_both_alerts() {
        // Best-case emergency excursions must still cross the thresholds
        // that raise the engine and cabin alerts.
        assert!(EMERGENCY.engine_temp_f.base - EMERGENCY.engine_temp_f.jitter > 450.0);
        assert!(EMERGENCY.cabin_pressure_psi.base + EMERGENCY.cabin_pressure_psi.jitter < 10.0);
    }
}
