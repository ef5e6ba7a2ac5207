//! Integration tests: SimulationService → alert store → snapshot feed.

use airsign::app::commands::SimCommand;
use airsign::app::events::SimEvent;
use airsign::app::ports::{EventSink, WeatherError, WeatherPort, WeatherReport};
use airsign::app::service::SimulationService;
use airsign::config::SimConfig;
use airsign::systems::{SQUAWK_EMERGENCY, SQUAWK_VFR, SystemActivation};
use airsign::telemetry::Mode;
use rand::rngs::StdRng;

// ── Mock implementations ──────────────────────────────────────

struct CalmWeather;

impl WeatherPort for CalmWeather {
    fn current_conditions(&mut self) -> Result<WeatherReport, WeatherError> {
        Ok(WeatherReport {
            turbulence: 12.0,
            wind_speed_kt: 28.0,
            visibility_sm: 10.0,
            temperature_f: -42.0,
            humidity_pct: 18.0,
            lightning_risk: 2.0,
            pressure_hpa: 1014.0,
            wind_direction_deg: 260.0,
            cloud_cover_pct: 10.0,
            weather_alerts: Vec::new(),
        })
    }
}

struct FailingWeather;

impl WeatherPort for FailingWeather {
    fn current_conditions(&mut self) -> Result<WeatherReport, WeatherError> {
        Err(WeatherError::Unavailable)
    }
}

struct LogSink {
    events: Vec<String>,
}
impl LogSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}
impl EventSink for LogSink {
    fn emit(&mut self, e: &SimEvent) {
        self.events.push(format!("{e:?}"));
    }
}

fn count(sink: &LogSink, needle: &str) -> usize {
    sink.events.iter().filter(|e| e.contains(needle)).count()
}

fn make_sim() -> (SimulationService<StdRng>, CalmWeather, LogSink) {
    let mut sim = SimulationService::seeded(SimConfig::default(), 42);
    let weather = CalmWeather;
    let mut sink = LogSink::new();
    sim.start(&mut sink);
    (sim, weather, sink)
}

// ── Quiet cruise ──────────────────────────────────────────────

#[test]
fn cruise_ticks_stay_inside_the_envelope() {
    let (mut sim, mut weather, mut sink) = make_sim();
    assert_eq!(count(&sink, "Started"), 1);

    for i in 1..=3u64 {
        sim.tick(i * 2_000, &mut weather, &mut sink);
    }

    assert!(sim.critical_alerts().is_empty());
    assert!(sim.crew_alerts().is_empty());
    assert_eq!(sim.history().count(), 3);
    assert_eq!(count(&sink, "Telemetry"), 3);

    let cfg = sim.config().clone();
    let r = *sim.latest_reading();
    assert!(r.engine_temp_f < cfg.engine_temp_crit_f);
    assert!(r.oil_pressure_psi > cfg.oil_pressure_crit_psi);
    assert!(r.cabin_pressure_psi > cfg.cabin_pressure_crit_psi);
    assert!(r.vibration_level < cfg.vibration_crit);

    assert_eq!(sim.systems().comms.squawk_code, SQUAWK_VFR);
}

// ── Emergency derivation ──────────────────────────────────────

#[test]
fn emergency_raises_both_alerts_with_checklists() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);

    let critical = sim.critical_alerts();
    assert_eq!(critical.len(), 2);
    assert_eq!(critical[0].id, "engine-failure-10000");
    assert_eq!(critical[1].id, "cabin-pressure-10000");
    assert_eq!(critical[1].timestamp_ms, 11_000, "cabin alert lags by 1s");
    for alert in critical {
        assert_eq!(alert.severity, 5);
        assert!(!alert.acknowledged);
        assert_eq!(alert.procedures.len(), 5);
        assert_eq!(alert.nearest_airports.len(), 3);
    }
    assert_eq!(critical[0].nearest_airports[0].code, "LAX");

    assert_eq!(sim.crew_alerts().len(), 2);
    assert_eq!(count(&sink, "AlertRaised"), 2);

    // Pressure-loss posture: bleeding oxygen, transponder on 7700.
    let systems = sim.systems();
    assert_eq!(systems.comms.squawk_code, SQUAWK_EMERGENCY);
    assert!(systems.comms.emergency_frequency);
    assert_eq!(systems.oxygen.oxygen_pressure_psi, 1650);
    assert_eq!(systems.oxygen.estimated_duration_min, 18);
}

#[test]
fn sustained_emergency_does_not_duplicate_alerts() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    for i in 0..4u64 {
        sim.tick(10_000 + i * 2_000, &mut weather, &mut sink);
    }

    assert_eq!(sim.critical_alerts().len(), 2);
    assert_eq!(
        sim.critical_alerts()[0].id,
        "engine-failure-10000",
        "the first derivation's alert must stay open under re-derivation"
    );
    assert_eq!(sim.crew_alerts().len(), 2);
    assert_eq!(count(&sink, "AlertRaised"), 2);
}

// ── Crew actions ──────────────────────────────────────────────

#[test]
fn acknowledgement_sticks_through_rederivation() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);
    assert!(sim.has_unacknowledged_critical());

    sim.handle_command(
        SimCommand::AcknowledgeAlert("engine-failure-10000".into()),
        &mut sink,
    );
    assert!(sim.critical_alerts()[0].acknowledged);
    assert!(sim.has_unacknowledged_critical(), "the cabin alert is still unacknowledged");

    // Unknown ids are a quiet no-op.
    sim.handle_command(SimCommand::AcknowledgeAlert("no-such-alert".into()), &mut sink);

    sim.tick(12_000, &mut weather, &mut sink);
    sim.tick(14_000, &mut weather, &mut sink);
    assert!(
        sim.critical_alerts()[0].acknowledged,
        "re-derivation must not reset the acknowledgement"
    );
    assert_eq!(sim.critical_alerts().len(), 2);

    sim.handle_command(
        SimCommand::AcknowledgeAlert("cabin-pressure-10000".into()),
        &mut sink,
    );
    assert!(!sim.has_unacknowledged_critical(), "both alerts acknowledged");
}

#[test]
fn crew_directives_return_after_acknowledgement() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);

    sim.handle_command(
        SimCommand::AcknowledgeCrewAlert("crew-engine-10000".into()),
        &mut sink,
    );
    assert_eq!(sim.crew_alerts().len(), 1);

    // The next derivation replaces the crew set wholesale, so the
    // acknowledged directive comes back while the condition persists.
    sim.tick(12_000, &mut weather, &mut sink);
    assert_eq!(sim.crew_alerts().len(), 2);
}

#[test]
fn activations_layer_on_the_emergency_posture() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);

    sim.handle_command(
        SimCommand::ActivateSystem(SystemActivation::OxygenMasks),
        &mut sink,
    );
    sim.handle_command(
        SimCommand::ActivateSystem(SystemActivation::Mayday),
        &mut sink,
    );
    assert!(sim.systems().oxygen.passenger_masks);
    assert!(sim.systems().oxygen.crew_masks);
    assert!(sim.systems().comms.mayday_transmitted);
    assert!(!sim.systems().evacuation.slides_armed, "evacuation untouched");
    assert_eq!(count(&sink, "SystemActivated"), 2);

    // Manual activations survive the next tick's posture update.
    sim.tick(12_000, &mut weather, &mut sink);
    assert!(sim.systems().oxygen.passenger_masks);
    assert!(sim.systems().comms.mayday_transmitted);
    assert_eq!(sim.systems().comms.squawk_code, SQUAWK_EMERGENCY);
}

#[test]
fn procedure_completion_reports_exactly_once() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);

    let complete = SimCommand::CompleteProcedure {
        alert_id: "engine-failure-10000".into(),
        step: 2,
    };
    sim.handle_command(complete.clone(), &mut sink);
    assert!(sim.critical_alerts()[0].procedures[1].completed);
    assert_eq!(count(&sink, "ProcedureCompleted"), 1);

    // Completing a completed step is a quiet no-op.
    sim.handle_command(complete, &mut sink);
    assert_eq!(count(&sink, "ProcedureCompleted"), 1);
}

// ── Recovery ──────────────────────────────────────────────────

#[test]
fn recovery_clears_alerts_and_restores_the_baseline_once() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);
    sim.tick(12_000, &mut weather, &mut sink);
    sim.handle_command(
        SimCommand::ActivateSystem(SystemActivation::OxygenMasks),
        &mut sink,
    );

    sim.handle_command(SimCommand::SetMode(Mode::Normal), &mut sink);
    sim.tick(14_000, &mut weather, &mut sink);

    assert!(sim.critical_alerts().is_empty());
    assert!(sim.crew_alerts().is_empty());
    let systems = sim.systems();
    assert_eq!(systems.comms.squawk_code, SQUAWK_VFR);
    assert_eq!(systems.oxygen.oxygen_pressure_psi, 1850);
    assert_eq!(systems.oxygen.estimated_duration_min, 22);
    assert!(!systems.oxygen.passenger_masks);
    assert_eq!(count(&sink, "AlertsCleared"), 1);

    // Later normal ticks have nothing left to clear.
    sim.tick(16_000, &mut weather, &mut sink);
    assert_eq!(count(&sink, "AlertsCleared"), 1);

    assert_eq!(count(&sink, "ModeChanged"), 2);
}

// ── Retention and degradation ─────────────────────────────────

#[test]
fn history_retains_only_the_newest_thirty_readings() {
    let (mut sim, mut weather, mut sink) = make_sim();

    for i in 1..=40u64 {
        sim.tick(i * 2_000, &mut weather, &mut sink);
    }

    assert_eq!(sim.history().count(), 30);
    let oldest = sim.history().next().unwrap().timestamp_ms;
    assert_eq!(oldest, 11 * 2_000, "the first ten readings must be evicted");
    assert_eq!(sim.latest_reading().timestamp_ms, 80_000);
}

#[test]
fn weather_outage_degrades_gracefully() {
    let mut sim = SimulationService::seeded(SimConfig::default(), 42);
    let mut weather = FailingWeather;
    let mut sink = LogSink::new();
    sim.start(&mut sink);

    sim.tick(2_000, &mut weather, &mut sink);
    sim.tick(4_000, &mut weather, &mut sink);

    assert!(sim.snapshot().weather.is_none());
    assert_eq!(count(&sink, "Telemetry"), 2, "ticks proceed without weather");
}

// ── Snapshot wire shape ───────────────────────────────────────

#[test]
fn snapshot_serializes_the_wire_shape() {
    let (mut sim, mut weather, mut sink) = make_sim();

    sim.handle_command(SimCommand::SetMode(Mode::Emergency), &mut sink);
    sim.tick(10_000, &mut weather, &mut sink);

    let v = serde_json::to_value(sim.snapshot()).expect("snapshot must serialize");
    assert_eq!(v["mode"], "emergency");
    assert_eq!(v["tick"], 1);
    assert_eq!(v["critical_alerts"].as_array().unwrap().len(), 2);
    assert_eq!(v["critical_alerts"][0]["category"], "engine_failure");
    assert_eq!(v["systems"]["comms"]["squawk_code"], "7700");
    assert_eq!(v["risk"]["risk_level"], "CRITICAL");
    assert_eq!(v["risk"]["lives_at_risk"], 186);
    assert_eq!(v["predictive"]["risk_score"], 87);
    assert!(v["reading"]["engine_temp_f"].is_number());
    assert!(v["weather"]["visibility_sm"].is_number());
    assert!(v["outlook"]["risk_projection"].is_string());
}
