//! Emergency checklists, one per alert category.
//!
//! Step numbers and time limits mirror the printed quick-reference
//! cards; steps marked critical must be completed for the response to
//! count. Categories without a dedicated card share a generic
//! assess-execute-communicate checklist.

use super::{AlertCategory, EmergencyProcedure};

const fn step(
    step: u8,
    action: &'static str,
    time_limit_secs: u32,
    critical: bool,
) -> EmergencyProcedure {
    EmergencyProcedure {
        step,
        action,
        time_limit_secs,
        completed: false,
        critical,
    }
}

/// Checklist for the given category, every step still open.
pub fn checklist(category: AlertCategory) -> Vec<EmergencyProcedure> {
    match category {
        AlertCategory::EngineFailure => vec![
            step(1, "Maintain aircraft control", 10, true),
            step(2, "Engine fire/failure checklist", 30, true),
            step(3, "Declare emergency with ATC", 60, true),
            step(4, "Configure for single engine approach", 300, false),
            step(5, "Brief cabin crew and passengers", 180, false),
        ],
        AlertCategory::CabinPressure => vec![
            step(1, "Don oxygen masks immediately", 5, true),
            step(2, "Establish crew communications", 10, true),
            step(3, "Begin emergency descent", 15, true),
            step(4, "Deploy passenger oxygen masks", 20, true),
            step(5, "Declare emergency with ATC", 30, true),
        ],
        AlertCategory::Fire => vec![
            step(1, "Identify fire location", 10, true),
            step(2, "Execute fire checklist", 30, true),
            step(3, "Discharge fire extinguisher", 45, true),
            step(4, "Prepare for emergency landing", 120, true),
            step(5, "Alert emergency services", 60, false),
        ],
        AlertCategory::FuelEmergency | AlertCategory::Structural | AlertCategory::SevereWeather => {
            vec![
                step(1, "Assess situation", 30, true),
                step(2, "Execute appropriate checklist", 60, true),
                step(3, "Communicate with ATC", 90, false),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_consecutively_from_one() {
        for category in [
            AlertCategory::EngineFailure,
            AlertCategory::CabinPressure,
            AlertCategory::Fire,
            AlertCategory::FuelEmergency,
        ] {
            let list = checklist(category);
            assert!(!list.is_empty());
            for (i, p) in list.iter().enumerate() {
                assert_eq!(p.step as usize, i + 1, "{category:?} misnumbered");
                assert!(!p.completed, "fresh checklists start open");
            }
        }
    }

    #[test]
    fn cabin_pressure_card_is_fully_critical() {
        assert!(checklist(AlertCategory::CabinPressure).iter().all(|p| p.critical));
    }

    #[test]
    fn engine_failure_card_matches_quick_reference() {
        let list = checklist(AlertCategory::EngineFailure);
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].action, "Maintain aircraft control");
        assert_eq!(list[0].time_limit_secs, 10);
        assert!(list[0].critical);
        assert_eq!(list[3].action, "Configure for single engine approach");
        assert!(!list[3].critical);
    }

    #[test]
    fn uncarded_categories_share_the_generic_checklist() {
        assert_eq!(
            checklist(AlertCategory::Structural),
            checklist(AlertCategory::SevereWeather)
        );
        assert_eq!(checklist(AlertCategory::FuelEmergency).len(), 3);
    }
}
