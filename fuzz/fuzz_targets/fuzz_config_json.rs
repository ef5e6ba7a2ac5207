//! Fuzz target: configuration JSON parsing
//!
//! Feeds arbitrary bytes to the `SimConfig` deserializer and verifies:
//! - No panics on malformed or hostile input
//! - Any accepted config serializes back out without error
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use airsign::config::SimConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Garbage must come back as an error, never a panic.
    let Ok(cfg) = serde_json::from_slice::<SimConfig>(data) else {
        return;
    };

    // Whatever parsed must serialize again (non-finite floats become
    // JSON null, which is still a successful write).
    let value = serde_json::to_value(&cfg).expect("accepted config failed to serialize");
    assert_eq!(value["tick_interval_ms"], u64::from(cfg.tick_interval_ms));
    assert_eq!(value["souls_on_board"], u64::from(cfg.souls_on_board));
});
