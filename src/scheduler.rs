//! Scenario script engine.
//!
//! Drives demo runs by flipping the flight mode at scripted offsets.
//! The script notifies a [`ScenarioDelegate`] when a step fires; the
//! main loop implements the delegate to push a mode command into the
//! inbox.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   ScenarioScript.tick()                    │
//! │                                                            │
//! │   step "engine failure" ─┐                                 │
//! │   step "recovery"       ─┼──▶ ScenarioDelegate             │
//! │   (one-shot, labelled)  ─┘    (main loop pushes SetMode    │
//! │                                into the CommandInbox)      │
//! │                                        │                   │
//! │                                        ▼                   │
//! │                  SimulationService.handle_command()        │
//! └────────────────────────────────────────────────────────────┘
//! ```

use crate::app::ports::ScenarioDelegate;
use crate::telemetry::Mode;
use log::info;

// ═══════════════════════════════════════════════════════════════
//  Step types
// ═══════════════════════════════════════════════════════════════

/// A single scripted mode change. Fires once, then auto-disables.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioStep {
    /// Human-readable label (e.g., "engine failure").
    pub label: &'static str,
    /// Seconds after script start at which the step fires.
    pub after_secs: u32,
    /// Mode to request when the step fires.
    pub mode: Mode,
    /// Whether this step is currently enabled.
    pub enabled: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Script engine
// ═══════════════════════════════════════════════════════════════

/// Maximum number of scripted steps (stack-allocated).
const MAX_STEPS: usize = 4;

/// The scenario script engine.
///
/// This struct is intentionally decoupled from the command path.
/// When a step fires, it invokes the [`ScenarioDelegate`] callback
/// rather than directly queueing commands. This makes the script
/// independently testable and reusable across different hosts.
pub struct ScenarioScript {
    /// Scripted steps.
    steps: [Option<StepEntry>; MAX_STEPS],
    /// Global enable flag.
    enabled: bool,
}

/// Internal bookkeeping for a live step.
#[derive(Debug, Clone)]
struct StepEntry {
    step: ScenarioStep,
    /// Ticks elapsed since the script started.
    elapsed_ticks: u64,
    /// Whether the step has fired.
    fired: bool,
}

impl ScenarioScript {
    pub fn new() -> Self {
        Self {
            steps: [None, None, None, None],
            enabled: true,
        }
    }

    /// Add a step. Returns the slot index, or `None` if full.
    pub fn add(&mut self, step: ScenarioStep) -> Option<usize> {
        for (i, slot) in self.steps.iter_mut().enumerate() {
            if slot.is_none() {
                info!("Scenario: added '{}' at slot {}", step.label, i);
                *slot = Some(StepEntry {
                    step,
                    elapsed_ticks: 0,
                    fired: false,
                });
                return Some(i);
            }
        }
        None // All slots full.
    }

    /// Remove a step by slot index.
    pub fn remove(&mut self, slot: usize) {
        if slot < MAX_STEPS {
            if let Some(entry) = &self.steps[slot] {
                info!("Scenario: removed '{}' from slot {}", entry.step.label, slot);
            }
            self.steps[slot] = None;
        }
    }

    /// Enable or disable the entire script.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Tick the script. Call once per simulation tick.
    ///
    /// When a step fires, `delegate.on_mode_scheduled()` is called with
    /// the step label and requested mode. The caller decides what to do
    /// with the notification (e.g., queue a command, log, etc.).
    ///
    /// # Parameters
    ///
    /// * `tick_secs` — duration of one tick in seconds.
    /// * `delegate` — receives fire notifications.
    pub fn tick(&mut self, tick_secs: f32, delegate: &mut dyn ScenarioDelegate) {
        if !self.enabled {
            return;
        }

        for slot in self.steps.iter_mut() {
            let entry = match slot {
                Some(e) if e.step.enabled => e,
                _ => continue,
            };

            entry.elapsed_ticks += 1;
            let elapsed_secs = entry.elapsed_ticks as f32 * tick_secs;

            if !entry.fired && elapsed_secs >= entry.step.after_secs as f32 {
                info!(
                    "Scenario: '{}' fired (after {}s) -> {:?}",
                    entry.step.label, entry.step.after_secs, entry.step.mode
                );
                delegate.on_mode_scheduled(entry.step.label, entry.step.mode);
                entry.fired = true;
                entry.step.enabled = false; // Auto-disable.
            }
        }
    }

    /// Number of steps still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.as_ref().is_some_and(|e| e.step.enabled))
            .count()
    }
}

impl Default for ScenarioScript {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Test delegate that records fire events.
    struct RecordingDelegate {
        fires: Vec<(String, Mode)>,
    }

    impl RecordingDelegate {
        fn new() -> Self {
            Self { fires: Vec::new() }
        }
    }

    impl ScenarioDelegate for RecordingDelegate {
        fn on_mode_scheduled(&mut self, label: &str, mode: Mode) {
            self.fires.push((label.to_string(), mode));
        }
    }

    #[test]
    fn step_fires_once_at_its_delay() {
        let mut script = ScenarioScript::new();
        let mut delegate = RecordingDelegate::new();

        script.add(ScenarioStep {
            label: "test-emergency",
            after_secs: 5,
            mode: Mode::Emergency,
            enabled: true,
        });

        for _ in 0..4 {
            script.tick(1.0, &mut delegate);
        }
        assert!(delegate.fires.is_empty());

        // 5th tick — fires.
        script.tick(1.0, &mut delegate);
        assert_eq!(delegate.fires.len(), 1);
        assert_eq!(delegate.fires[0].0, "test-emergency");
        assert_eq!(delegate.fires[0].1, Mode::Emergency);

        // Subsequent ticks — no more fires.
        for _ in 0..10 {
            script.tick(1.0, &mut delegate);
        }
        assert_eq!(delegate.fires.len(), 1);
        assert_eq!(script.pending_count(), 0);
    }

    #[test]
    fn steps_fire_in_delay_order() {
        let mut script = ScenarioScript::new();
        let mut delegate = RecordingDelegate::new();

        script.add(ScenarioStep {
            label: "recovery",
            after_secs: 8,
            mode: Mode::Normal,
            enabled: true,
        });
        script.add(ScenarioStep {
            label: "failure",
            after_secs: 3,
            mode: Mode::Emergency,
            enabled: true,
        });

        for _ in 0..10 {
            script.tick(1.0, &mut delegate);
        }
        assert_eq!(delegate.fires.len(), 2);
        assert_eq!(delegate.fires[0].0, "failure");
        assert_eq!(delegate.fires[1].0, "recovery");
    }

    #[test]
    fn slots_are_bounded() {
        let mut script = ScenarioScript::new();
        let step = ScenarioStep {
            label: "filler",
            after_secs: 1,
            mode: Mode::Normal,
            enabled: true,
        };
        for _ in 0..MAX_STEPS {
            assert!(script.add(step).is_some());
        }
        assert!(script.add(step).is_none(), "fifth step must be rejected");

        script.remove(0);
        assert!(script.add(step).is_some(), "freed slot must be reusable");
    }

    #[test]
    fn disabled_script_does_nothing() {
        let mut script = ScenarioScript::new();
        let mut delegate = RecordingDelegate::new();

        script.add(ScenarioStep {
            label: "test-disabled",
            after_secs: 1,
            mode: Mode::Emergency,
            enabled: true,
        });
        script.set_enabled(false);

        for _ in 0..10 {
            script.tick(1.0, &mut delegate);
        }
        assert!(delegate.fires.is_empty());
    }
}
