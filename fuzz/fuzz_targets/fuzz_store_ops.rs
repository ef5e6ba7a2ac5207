//! Fuzz target: `AlertStore` lifecycle
//!
//! Drives arbitrary merge / acknowledge / activate / complete / reset
//! sequences against the alert store and verifies:
//! - No panics under arbitrary op sequences
//! - At most one open alert per category
//! - The transponder only ever shows 1200 or 7700
//! - Acknowledgements stick while the alert stays open
//!
//! cargo fuzz run fuzz_store_ops

#![no_main]

use libfuzzer_sys::fuzz_target;

use airsign::alerts::AlertCategory;
use airsign::alerts::deriver::derive;
use airsign::alerts::store::AlertStore;
use airsign::config::SimConfig;
use airsign::systems::{SQUAWK_EMERGENCY, SQUAWK_VFR, SystemActivation};
use airsign::telemetry::{Mode, SensorReading};
use std::collections::HashSet;

/// A reading past every critical threshold, timestamped per op so each
/// derivation carries fresh ids.
fn failing_reading(ts: u64) -> SensorReading {
    let mut r = SensorReading::cruise_baseline(ts);
    r.engine_temp_f = 520.0;
    r.oil_pressure_psi = 28.0;
    r.cabin_pressure_psi = 8.2;
    r.vibration_level = 9.2;
    r
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let cfg = SimConfig::default();
    let mut store = AlertStore::new();
    let mut acked: HashSet<String> = HashSet::new();

    for (i, &byte) in data.iter().enumerate().take(64) {
        let ts = (i as u64 + 1) * 1000;
        match byte % 8 {
            0 => {
                let d = derive(&failing_reading(ts), Mode::Emergency, &cfg);
                store.merge_critical(d.critical);
                store.replace_crew(d.crew);
                store.apply_emergency_pressure_loss();
            }
            1 => {
                store.reset_to_normal();
                acked.clear();
            }
            2 => {
                if let Some(id) = store.critical_alerts().first().map(|a| a.id.clone()) {
                    store.acknowledge_critical(&id);
                    acked.insert(id);
                }
            }
            3 => {
                // Unknown ids must be a quiet no-op.
                store.acknowledge_critical("no-such-alert-0");
                store.acknowledge_crew("no-such-crew-0");
            }
            4 => {
                if let Some(id) = store.crew_alerts().first().map(|a| a.id.clone()) {
                    store.acknowledge_crew(&id);
                }
            }
            5 => {
                let activation = match (byte / 8) % 3 {
                    0 => SystemActivation::OxygenMasks,
                    1 => SystemActivation::EvacuationPrep,
                    _ => SystemActivation::Mayday,
                };
                store.activate_system(activation);
            }
            6 => {
                // Step numbers past the checklist must be ignored.
                let step = byte / 8;
                if let Some(id) = store.critical_alerts().first().map(|a| a.id.clone()) {
                    store.complete_procedure(&id, step);
                }
            }
            _ => {
                store.activate_system_by_name("warp_drive");
            }
        }

        // One open alert per category, at any point in the sequence.
        let categories: HashSet<AlertCategory> =
            store.critical_alerts().iter().map(|a| a.category).collect();
        assert_eq!(
            categories.len(),
            store.critical_alerts().len(),
            "duplicate category among open alerts"
        );

        // Crew directives are replaced wholesale, never accumulated.
        assert!(
            store.crew_alerts().len() <= 2,
            "crew directive set grew past the scripted pair"
        );

        let squawk = store.systems().comms.squawk_code.as_str();
        assert!(
            squawk == SQUAWK_VFR || squawk == SQUAWK_EMERGENCY,
            "unexpected squawk code {squawk}"
        );

        // Acknowledgements only ever move false -> true while open.
        for alert in store.critical_alerts() {
            if acked.contains(&alert.id) {
                assert!(alert.acknowledged, "acknowledgement lost on {}", alert.id);
            }
        }
    }
});
