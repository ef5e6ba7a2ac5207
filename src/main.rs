//! AirSign — cockpit telemetry and alert simulation demo.
//!
//! Wires the simulation core to the stock adapters and runs a scripted
//! flight: quiet cruise, a dual engine/pressure failure, recovery.
//! Human-readable logs go to stderr; a JSON snapshot feed goes to
//! stdout.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  SyntheticWeather     LogEventSink      JsonFeed         │
//! │  (WeatherPort)        (EventSink)       (stdout feed)    │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ─────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │           SimulationService (pure logic)           │  │
//! │  │  Telemetry · Alerts · Risk                         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  ScenarioScript (delegate-driven) · CommandInbox         │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use airsign::adapters::clock;
use airsign::adapters::json_feed::JsonFeed;
use airsign::adapters::log_sink::LogEventSink;
use airsign::adapters::weather::SyntheticWeather;
use airsign::app::commands::SimCommand;
use airsign::app::ports::ScenarioDelegate;
use airsign::app::service::SimulationService;
use airsign::config::SimConfig;
use airsign::inbox::CommandInbox;
use airsign::scheduler::{ScenarioScript, ScenarioStep};
use airsign::telemetry::Mode;

/// Ticks the demo runs before exiting.
const DEMO_TICKS: u64 = 16;
/// Snapshot cadence on the stdout feed, in ticks.
const SNAPSHOT_EVERY: u64 = 5;

// ── Scenario delegate ─────────────────────────────────────────
//
// Bridges the scenario script (which knows nothing about commands)
// to the inbox. The script calls `on_mode_scheduled`, and this impl
// translates that into a `SimCommand::SetMode` the next drain picks
// up.

struct InboxDelegate<'a> {
    inbox: &'a mut CommandInbox,
}

impl ScenarioDelegate for InboxDelegate<'_> {
    fn on_mode_scheduled(&mut self, label: &str, mode: Mode) {
        info!("Scenario '{label}' requests {mode:?}");
        if !self.inbox.push(SimCommand::SetMode(mode)) {
            warn!("scenario command dropped, inbox full");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging (stderr; stdout belongs to the JSON feed) ──
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("╔══════════════════════════════════════╗");
    info!("║  AirSign v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Load config (JSON file argument, or defaults) ──────
    let config = load_config()?;
    let tick_secs = config.tick_interval_ms as f32 / 1000.0;
    let tick_interval = Duration::from_millis(u64::from(config.tick_interval_ms));

    // ── 3. Construct adapters ─────────────────────────────────
    let mut log_sink = LogEventSink::new();
    let mut weather = SyntheticWeather::from_entropy();
    let mut feed = JsonFeed::new(io::stdout());

    // ── 4. Scenario script: cruise → dual failure → recovery ──
    let mut inbox = CommandInbox::new();
    let mut script = ScenarioScript::new();
    script.add(ScenarioStep {
        label: "engine failure",
        after_secs: 6,
        mode: Mode::Emergency,
        enabled: true,
    });
    script.add(ScenarioStep {
        label: "recovery",
        after_secs: 20,
        mode: Mode::Normal,
        enabled: true,
    });

    // ── 5. Construct the simulation service ───────────────────
    let mut sim = SimulationService::from_entropy(config);
    sim.start(&mut log_sink);

    info!("Simulation ready: {DEMO_TICKS} ticks at {tick_secs:.1}s cadence");

    // ── 6. Tick loop ──────────────────────────────────────────
    for _ in 0..DEMO_TICKS {
        script.tick(tick_secs, &mut InboxDelegate { inbox: &mut inbox });
        inbox.drain(|cmd| sim.handle_command(cmd, &mut log_sink));
        sim.tick(clock::now_epoch_millis(), &mut weather, &mut log_sink);

        if sim.tick_count() % SNAPSHOT_EVERY == 0 {
            if let Err(e) = feed.write_snapshot(&sim.snapshot()) {
                warn!("snapshot write failed: {e}");
            }
        }

        thread::sleep(tick_interval);
    }

    info!(
        "Simulation complete: {} ticks, {} feed lines written",
        sim.tick_count(),
        feed.lines_written()
    );
    Ok(())
}

// ── Config loading ────────────────────────────────────────────

/// First CLI argument names a JSON config file; without one the
/// defaults apply.
fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        info!("No config file given, using defaults");
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    info!("Config loaded from {path}");
    Ok(config)
}
