//! Simulation service — the hexagonal core.
//!
//! [`SimulationService`] owns the telemetry generator, the alert store,
//! and the analysis state. It exposes a clean, I/O-free API. All output
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  WeatherPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                  │   SimulationService    │
//!  SimCommand ──▶  │ Telemetry·Alerts·Risk  │
//!                  └────────────────────────┘
//! ```

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alerts::store::AlertStore;
use crate::alerts::{CriticalAlert, CrewAlert, deriver};
use crate::analysis::{self, MaintenanceOutlook, PredictiveReport, RiskAssessment};
use crate::config::SimConfig;
use crate::health::{self, SystemHealth};
use crate::systems::LifeSavingSystem;
use crate::telemetry::{Mode, SensorReading, TelemetryGenerator};

use super::commands::SimCommand;
use super::events::{SimEvent, StatusSnapshot, TelemetrySummary};
use super::ports::{EventSink, WeatherPort, WeatherReport};

// ───────────────────────────────────────────────────────────────
// SimulationService
// ───────────────────────────────────────────────────────────────

/// The simulation service orchestrates all domain logic.
pub struct SimulationService<R: Rng> {
    mode: Mode,
    generator: TelemetryGenerator,
    store: AlertStore,
    config: SimConfig,
    rng: R,
    /// Most recent reading (the cruise baseline before the first tick).
    latest: SensorReading,
    health: SystemHealth,
    predictive: PredictiveReport,
    risk: Option<RiskAssessment>,
    outlook: Option<MaintenanceOutlook>,
    latest_weather: Option<WeatherReport>,
    tick_count: u64,
}

impl<R: Rng> SimulationService<R> {
    /// Construct the service from configuration and a jitter source.
    ///
    /// Starts in [`Mode::Normal`] with no open alerts — call [`start`]
    /// and then drive it with [`tick`].
    ///
    /// [`start`]: Self::start
    /// [`tick`]: Self::tick
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self {
            mode: Mode::Normal,
            generator: TelemetryGenerator::new(),
            store: AlertStore::new(),
            config,
            rng,
            latest: SensorReading::cruise_baseline(0),
            health: health::score(Mode::Normal),
            predictive: PredictiveReport::normal(),
            risk: None,
            outlook: None,
            latest_weather: None,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup. Does not advance the simulation — [`tick`]
    /// does that.
    ///
    /// [`tick`]: Self::tick
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&SimEvent::Started(self.mode));
        info!("SimulationService started in {:?} mode", self.mode);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full simulation cycle: sample telemetry → score health →
    /// derive and reconcile alerts → assess risk → poll weather.
    pub fn tick(
        &mut self,
        now_ms: u64,
        weather: &mut impl WeatherPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sample one reading from the active mode's profile
        let reading = self.generator.tick(self.mode, now_ms, &mut self.rng);
        self.latest = reading;

        // 2. Score subsystem health
        self.health = health::score(self.mode);

        // 3. Derive the alert picture and reconcile the store
        let derivation = deriver::derive(&reading, self.mode, &self.config);
        self.predictive = derivation.predictive;
        match self.mode {
            Mode::Emergency => {
                for opened in self.store.merge_critical(derivation.critical) {
                    sink.emit(&SimEvent::AlertRaised {
                        id: opened.id.clone(),
                        category: opened.category,
                        severity: opened.severity,
                    });
                }
                self.store.replace_crew(derivation.crew);
                self.store.apply_emergency_pressure_loss();
            }
            Mode::Normal => {
                if self.store.reset_to_normal() {
                    sink.emit(&SimEvent::AlertsCleared);
                }
            }
        }

        // 4. Risk and maintenance analysis over the fresh reading
        self.risk = Some(analysis::assess(
            &reading,
            &self.config,
            &mut self.rng,
            now_ms,
        ));
        self.outlook = Some(analysis::maintenance_outlook(&reading, &self.config));

        // 5. Poll the weather port; a failed poll keeps the last report
        match weather.current_conditions() {
            Ok(report) => self.latest_weather = Some(report),
            Err(e) => warn!("weather source failed ({e}), keeping last report"),
        }

        // 6. Emit the per-tick telemetry summary
        sink.emit(&SimEvent::Telemetry(self.telemetry_summary()));
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (from the scenario script, a feed
    /// consumer, serial, etc.).
    pub fn handle_command(&mut self, cmd: SimCommand, sink: &mut impl EventSink) {
        match cmd {
            SimCommand::SetMode(target) => {
                if target == self.mode {
                    return;
                }
                let from = self.mode;
                self.mode = target;
                info!("mode change: {from:?} -> {target:?}");
                sink.emit(&SimEvent::ModeChanged { from, to: target });
            }
            SimCommand::AcknowledgeAlert(id) => {
                self.store.acknowledge_critical(&id);
            }
            SimCommand::AcknowledgeCrewAlert(id) => {
                self.store.acknowledge_crew(&id);
            }
            SimCommand::ActivateSystem(activation) => {
                self.store.activate_system(activation);
                sink.emit(&SimEvent::SystemActivated(activation));
            }
            SimCommand::CompleteProcedure { alert_id, step } => {
                if self.store.complete_procedure(&alert_id, step) {
                    sink.emit(&SimEvent::ProcedureCompleted { alert_id, step });
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Total simulation ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Most recent sensor reading.
    pub fn latest_reading(&self) -> &SensorReading {
        &self.latest
    }

    /// Subsystem health scores for the active mode.
    pub fn health(&self) -> &SystemHealth {
        &self.health
    }

    /// Live configuration (thresholds, cadence, souls on board).
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Open critical alerts, oldest first.
    pub fn critical_alerts(&self) -> &[CriticalAlert] {
        self.store.critical_alerts()
    }

    /// Open crew directives.
    pub fn crew_alerts(&self) -> &[CrewAlert] {
        self.store.crew_alerts()
    }

    /// Whether any open critical alert still awaits acknowledgement.
    /// Drives attention-demanding displays; acknowledged alerts stay
    /// open but stop counting here.
    pub fn has_unacknowledged_critical(&self) -> bool {
        self.store.has_unacknowledged_critical()
    }

    /// Life-saving system posture.
    pub fn systems(&self) -> &LifeSavingSystem {
        self.store.systems()
    }

    /// Retained readings, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &SensorReading> {
        self.generator.history()
    }

    /// Build a full point-in-time snapshot for the status feed.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            tick: self.tick_count,
            mode: self.mode,
            reading: self.latest,
            health: self.health,
            critical_alerts: self.store.critical_alerts().to_vec(),
            crew_alerts: self.store.crew_alerts().to_vec(),
            systems: self.store.systems().clone(),
            predictive: self.predictive.clone(),
            risk: self.risk.clone(),
            outlook: self.outlook.clone(),
            weather: self.latest_weather.clone(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Flat per-tick summary from the current state.
    fn telemetry_summary(&self) -> TelemetrySummary {
        TelemetrySummary {
            mode: self.mode,
            tick: self.tick_count,
            engine_temp_f: self.latest.engine_temp_f,
            vibration_level: self.latest.vibration_level,
            oil_pressure_psi: self.latest.oil_pressure_psi,
            cabin_pressure_psi: self.latest.cabin_pressure_psi,
            fuel_quantity_pct: self.latest.fuel_quantity_pct,
            airspeed_kt: self.latest.airspeed_kt,
            altitude_ft: self.latest.altitude_ft,
            open_alerts: self.store.critical_alerts().len(),
            overall_health_pct: self.health.overall,
        }
    }
}

impl SimulationService<StdRng> {
    /// Service with a deterministic jitter source. Every run from the
    /// same seed produces the same readings.
    pub fn seeded(config: SimConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Service seeded from operating-system entropy.
    pub fn from_entropy(config: SimConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}
