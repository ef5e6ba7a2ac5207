//! Weather adapters.
//!
//! [`SyntheticWeather`] synthesizes plausible cruise-altitude
//! conditions from an injected jitter source — the same ranges a
//! grounded forecast feed would report on a quiet day over the
//! southwest. [`FallbackWeather`] wraps a primary source and degrades
//! to synthesis when it fails, so the simulation always has fresh
//! conditions to report.

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::ports::{WeatherError, WeatherPort, WeatherReport};

/// Advisory issued when the synthesized sky turns bumpy.
const TURBULENCE_ADVISORY: &str = "Light turbulence ahead";

// ── Synthetic source ────────────────────────────────────────────

/// Port adapter that synthesizes en-route conditions.
pub struct SyntheticWeather<R: Rng> {
    rng: R,
}

impl<R: Rng> SyntheticWeather<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl SyntheticWeather<StdRng> {
    /// Deterministic source for tests and replayable demos.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> WeatherPort for SyntheticWeather<R> {
    fn current_conditions(&mut self) -> Result<WeatherReport, WeatherError> {
        let r = &mut self.rng;
        Ok(WeatherReport {
            turbulence: r.gen_range(15.0..35.0),
            wind_speed_kt: r.gen_range(25.0..45.0),
            visibility_sm: r.gen_range(8.0..12.0),
            temperature_f: r.gen_range(-45.0..-35.0),
            humidity_pct: r.gen_range(15.0..35.0),
            lightning_risk: r.gen_range(0.0..15.0),
            pressure_hpa: r.gen_range(1010.0..1020.0),
            wind_direction_deg: r.gen_range(0.0..360.0),
            cloud_cover_pct: r.gen_range(0.0..60.0),
            weather_alerts: if r.gen_bool(0.3) {
                vec![TURBULENCE_ADVISORY]
            } else {
                Vec::new()
            },
        })
    }
}

// ── Fallback wrapper ────────────────────────────────────────────

/// Wrapper that covers a flaky primary source with synthesis.
///
/// A failed primary poll is logged and answered from the synthetic
/// generator, so callers only ever see `Ok`.
pub struct FallbackWeather<W: WeatherPort> {
    primary: W,
    fallback: SyntheticWeather<StdRng>,
}

impl<W: WeatherPort> FallbackWeather<W> {
    pub fn new(primary: W) -> Self {
        Self {
            primary,
            fallback: SyntheticWeather::from_entropy(),
        }
    }
}

impl<W: WeatherPort> WeatherPort for FallbackWeather<W> {
    fn current_conditions(&mut self) -> Result<WeatherReport, WeatherError> {
        match self.primary.current_conditions() {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!("primary weather source failed ({e}), synthesizing conditions");
                self.fallback.current_conditions()
            }
        }
    }
}
