//! Alert lifecycle store.
//!
//! Owns the open alert sets and the life-saving-system aggregate, and
//! applies every mutation the simulation supports. Mutations are
//! idempotent where repeat delivery is possible: re-derived alerts
//! merge instead of duplicating, acknowledgements stick, and the
//! normal-mode reset is safe to run every tick.

use log::{debug, error, info, warn};

use crate::systems::{LifeSavingSystem, SystemActivation};

use super::{CriticalAlert, CrewAlert};

/// Open alerts plus cabin-safety state.
pub struct AlertStore {
    critical: Vec<CriticalAlert>,
    crew: Vec<CrewAlert>,
    systems: LifeSavingSystem,
}

impl AlertStore {
    pub fn new() -> Self {
        Self {
            critical: Vec::new(),
            crew: Vec::new(),
            systems: LifeSavingSystem::default(),
        }
    }

    // ── Derivation intake ────────────────────────────────────────────────

    /// Merges a fresh derivation into the open set, keyed by category.
    /// An open alert suppresses the derived one in its category, keeping
    /// its acknowledgement and checklist progress. Returns the alerts
    /// that actually opened.
    pub fn merge_critical(&mut self, derived: Vec<CriticalAlert>) -> Vec<CriticalAlert> {
        let mut opened = Vec::new();
        for alert in derived {
            if self.critical.iter().any(|a| a.category == alert.category) {
                continue;
            }
            error!("CRITICAL ALERT RAISED: {} [{}]", alert.title, alert.id);
            opened.push(alert.clone());
            self.critical.push(alert);
        }
        opened
    }

    /// Replaces the crew directives wholesale. An acknowledged (removed)
    /// directive therefore returns with the next emergency derivation.
    pub fn replace_crew(&mut self, derived: Vec<CrewAlert>) {
        self.crew = derived;
    }

    // ── Crew actions ─────────────────────────────────────────────────────

    /// Marks the alert acknowledged. Unknown ids are ignored; the alert
    /// itself stays open either way.
    pub fn acknowledge_critical(&mut self, id: &str) -> bool {
        match self.critical.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                if !alert.acknowledged {
                    info!("alert {} acknowledged", alert.id);
                }
                alert.acknowledged = true;
                true
            }
            None => {
                debug!("acknowledge for unknown alert {id}, ignoring");
                false
            }
        }
    }

    /// Removes the crew directive. Unknown ids are ignored.
    pub fn acknowledge_crew(&mut self, id: &str) -> bool {
        let before = self.crew.len();
        self.crew.retain(|a| a.id != id);
        let removed = self.crew.len() != before;
        if !removed {
            debug!("acknowledge for unknown crew alert {id}, ignoring");
        }
        removed
    }

    /// Applies a typed activation to the aggregate.
    pub fn activate_system(&mut self, activation: SystemActivation) {
        info!("life-saving system activated: {activation:?}");
        self.systems.activate(activation);
    }

    /// String-boundary variant: unknown names are a logged no-op.
    pub fn activate_system_by_name(&mut self, name: &str) {
        match name.parse::<SystemActivation>() {
            Ok(activation) => self.activate_system(activation),
            Err(_) => warn!("unknown life-saving system '{name}', ignoring"),
        }
    }

    /// Marks one checklist step completed. Returns whether a step
    /// actually flipped; unknown alert ids and step numbers are ignored.
    pub fn complete_procedure(&mut self, alert_id: &str, step: u8) -> bool {
        let Some(alert) = self.critical.iter_mut().find(|a| a.id == alert_id) else {
            debug!("procedure completion for unknown alert {alert_id}, ignoring");
            return false;
        };
        match alert.procedures.iter_mut().find(|p| p.step == step) {
            Some(p) if !p.completed => {
                p.completed = true;
                info!("procedure step {step} of {alert_id} completed");
                true
            }
            _ => false,
        }
    }

    // ── Mode posture ─────────────────────────────────────────────────────

    /// Emergency-tick posture for the aggregate (oxygen bleeding down,
    /// transponder on 7700). Idempotent.
    pub fn apply_emergency_pressure_loss(&mut self) {
        self.systems.apply_emergency_pressure_loss();
    }

    /// Clears both alert sets and restores the aggregate baseline.
    /// Returns whether any alert was actually cleared, so the caller can
    /// report the transition exactly once. Safe to run every tick.
    pub fn reset_to_normal(&mut self) -> bool {
        let cleared = !self.critical.is_empty() || !self.crew.is_empty();
        self.critical.clear();
        self.crew.clear();
        self.systems = LifeSavingSystem::default();
        if cleared {
            info!("ALERTS CLEARED: normal operations restored");
        }
        cleared
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn critical_alerts(&self) -> &[CriticalAlert] {
        &self.critical
    }

    pub fn crew_alerts(&self) -> &[CrewAlert] {
        &self.crew
    }

    pub fn systems(&self) -> &LifeSavingSystem {
        &self.systems
    }

    pub fn has_unacknowledged_critical(&self) -> bool {
        self.critical.iter().any(|a| !a.acknowledged)
    }
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}
