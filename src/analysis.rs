//! Predictive analysis over the latest reading.
//!
//! Three products, all pure data for the dashboard: an additive risk
//! assessment (scored per metric, tiered into an overall level), a
//! maintenance outlook (trend and recommendation strings), and the
//! per-mode predictive report attached to each derivation. Scores are
//! advisory; alerting decisions never depend on this module.

use rand::Rng;
use serde::Serialize;

use crate::config::SimConfig;
use crate::telemetry::SensorReading;

/// Overall risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl core::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

/// Scored assessment of the current reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub confidence_pct: f32,
    pub recommendation: &'static str,
    pub time_to_action_secs: Option<u32>,
    pub predicted_failure: Option<&'static str>,
    pub risk_factors: Vec<&'static str>,
    pub lives_at_risk: u16,
    pub analyzed_at_ms: u64,
}

// Brackets beyond the alerting thresholds, used only for scoring.
const ENGINE_TEMP_EXTREME_F: f32 = 500.0;
const CABIN_PRESSURE_SEVERE_PSI: f32 = 9.0;
const VIBRATION_ELEVATED: f32 = 6.0;
const OIL_PRESSURE_LOW_PSI: f32 = 40.0;
const FUEL_CRITICAL_PCT: f32 = 20.0;
const FUEL_PLANNING_PCT: f32 = 40.0;

/// Scores the reading metric by metric. Within a metric only the worst
/// bracket contributes; across metrics the contributions add up.
pub fn assess(
    reading: &SensorReading,
    cfg: &SimConfig,
    rng: &mut impl Rng,
    now_ms: u64,
) -> RiskAssessment {
    let mut score: u8 = 0;
    let mut factors: Vec<&'static str> = Vec::new();

    if reading.engine_temp_f > ENGINE_TEMP_EXTREME_F {
        score += 40;
        factors.push("Engine temperature critical - immediate failure risk");
    } else if reading.engine_temp_f > cfg.engine_temp_crit_f {
        score += 25;
        factors.push("Engine temperature elevated - bearing degradation likely");
    } else if reading.engine_temp_f > cfg.engine_temp_warn_f {
        score += 10;
        factors.push("Engine temperature above normal - monitor closely");
    }

    if reading.cabin_pressure_psi < CABIN_PRESSURE_SEVERE_PSI {
        score += 50;
        factors.push("Severe cabin pressure loss - oxygen masks required");
    } else if reading.cabin_pressure_psi < cfg.cabin_pressure_crit_psi {
        score += 30;
        factors.push("Cabin pressure declining - prepare emergency descent");
    } else if reading.cabin_pressure_psi < cfg.cabin_pressure_warn_psi {
        score += 15;
        factors.push("Cabin pressure below normal - monitor systems");
    }

    if reading.vibration_level > cfg.vibration_crit {
        score += 20;
        factors.push("Severe vibration detected - structural concern");
    } else if reading.vibration_level > VIBRATION_ELEVATED {
        score += 10;
        factors.push("Elevated vibration - engine imbalance possible");
    }

    if reading.oil_pressure_psi < cfg.oil_pressure_crit_psi {
        score += 25;
        factors.push("Low oil pressure - engine lubrication compromised");
    } else if reading.oil_pressure_psi < OIL_PRESSURE_LOW_PSI {
        score += 10;
        factors.push("Oil pressure below optimal - monitor engine health");
    }

    if reading.fuel_quantity_pct < FUEL_CRITICAL_PCT {
        score += 30;
        factors.push("Critical fuel level - immediate diversion required");
    } else if reading.fuel_quantity_pct < FUEL_PLANNING_PCT {
        score += 15;
        factors.push("Low fuel - plan for nearest suitable airport");
    }

    let (risk_level, recommendation, time_to_action_secs, predicted_failure) = if score >= 70 {
        (
            RiskLevel::Critical,
            "DECLARE EMERGENCY - Land immediately at nearest airport",
            Some(180),
            Some("Multiple system failure imminent"),
        )
    } else if score >= 40 {
        (
            RiskLevel::High,
            "Divert to nearest suitable airport - Prepare emergency procedures",
            Some(900),
            Some("Engine failure likely within 30 minutes"),
        )
    } else if score >= 20 {
        (
            RiskLevel::Medium,
            "Increase monitoring - Consider precautionary landing",
            Some(1800),
            None,
        )
    } else {
        (
            RiskLevel::Low,
            "Continue normal operations with standard monitoring",
            None,
            None,
        )
    };

    let raw = 75.0 + factors.len() as f32 * 5.0 + rng.gen_range(0.0f32..10.0);
    let confidence_pct = ((raw.min(95.0)) * 10.0).round() / 10.0;

    RiskAssessment {
        risk_level,
        risk_score: score,
        confidence_pct,
        recommendation,
        time_to_action_secs,
        predicted_failure,
        risk_factors: factors,
        lives_at_risk: cfg.souls_on_board,
        analyzed_at_ms: now_ms,
    }
}

/// Maintenance-facing read of the current trends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceOutlook {
    pub trend_analysis: Vec<&'static str>,
    pub maintenance_recommendations: Vec<&'static str>,
    pub risk_projection: &'static str,
}

/// Trend rules fire independently; the projection flips as soon as a
/// reading crosses an alerting threshold.
pub fn maintenance_outlook(reading: &SensorReading, cfg: &SimConfig) -> MaintenanceOutlook {
    let mut trends = Vec::new();
    let mut recs = Vec::new();

    if reading.engine_temp_f > 420.0 {
        trends.push("Engine temperature trending upward - thermal stress increasing");
        recs.push("Schedule engine inspection within 48 hours");
    }
    if reading.vibration_level > 4.0 {
        trends.push("Vibration levels above baseline - potential imbalance developing");
        recs.push("Check engine mounts and fan blade condition");
    }
    if reading.oil_pressure_psi < 45.0 {
        trends.push("Oil pressure declining - lubrication system degrading");
        recs.push("Verify oil quantity and filter condition");
    }

    let risk_projection = if reading.engine_temp_f > cfg.engine_temp_crit_f
        || reading.cabin_pressure_psi < cfg.cabin_pressure_crit_psi
    {
        "High probability of emergency within next flight segment"
    } else {
        "Normal operational risk profile for next 24-48 hours"
    };

    MaintenanceOutlook {
        trend_analysis: trends,
        maintenance_recommendations: recs,
        risk_projection,
    }
}

/// Per-mode predictive summary attached to every derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictiveReport {
    pub risk_score: u8,
    pub confidence_pct: f32,
    pub time_to_failure_hours: Option<f32>,
    pub maintenance_window_hours: f32,
    pub anomalies: Vec<&'static str>,
    pub improving: Vec<&'static str>,
    pub degrading: Vec<&'static str>,
}

impl PredictiveReport {
    /// Quiet cruise outlook.
    pub fn normal() -> Self {
        Self {
            risk_score: 12,
            confidence_pct: 94.7,
            time_to_failure_hours: None,
            maintenance_window_hours: 2.3,
            anomalies: Vec::new(),
            improving: vec!["Fuel efficiency", "Electrical stability"],
            degrading: Vec::new(),
        }
    }

    /// Active-failure outlook.
    pub fn emergency() -> Self {
        Self {
            risk_score: 87,
            confidence_pct: 96.3,
            time_to_failure_hours: Some(0.2),
            maintenance_window_hours: 0.1,
            anomalies: vec![
                "Engine bearing degradation",
                "Abnormal vibration pattern",
                "Temperature spike",
            ],
            improving: Vec::new(),
            degrading: vec![
                "Engine performance",
                "Bearing condition",
                "Thermal efficiency",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::SensorReading;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cfg() -> SimConfig {
        SimConfig::default()
    }

    #[test]
    fn cruise_baseline_scores_low() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = SensorReading::cruise_baseline(0);
        let a = assess(&r, &cfg(), &mut rng, 0);
        assert_eq!(a.risk_level, RiskLevel::Low);
        assert_eq!(a.risk_score, 0);
        assert!(a.risk_factors.is_empty());
        assert!(a.time_to_action_secs.is_none());
        assert!(a.predicted_failure.is_none());
        assert_eq!(a.lives_at_risk, 186);
    }

    #[test]
    fn dual_failure_scores_critical() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut r = SensorReading::cruise_baseline(0);
        r.engine_temp_f = 520.0;
        r.cabin_pressure_psi = 8.2;
        r.vibration_level = 9.2;
        r.oil_pressure_psi = 28.0;
        let a = assess(&r, &cfg(), &mut rng, 42);
        // 40 + 50 + 20 + 25
        assert_eq!(a.risk_score, 135);
        assert_eq!(a.risk_level, RiskLevel::Critical);
        assert_eq!(
            a.recommendation,
            "DECLARE EMERGENCY - Land immediately at nearest airport"
        );
        assert_eq!(a.time_to_action_secs, Some(180));
        assert_eq!(a.predicted_failure, Some("Multiple system failure imminent"));
        assert_eq!(a.analyzed_at_ms, 42);
    }

    #[test]
    fn worst_bracket_wins_within_a_metric() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut r = SensorReading::cruise_baseline(0);
        r.engine_temp_f = 520.0;
        let a = assess(&r, &cfg(), &mut rng, 0);
        assert_eq!(a.risk_score, 40, "only the extreme bracket may fire");
        assert_eq!(a.risk_factors.len(), 1);
    }

    #[test]
    fn mid_tiers_map_to_high_and_medium() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut r = SensorReading::cruise_baseline(0);
        r.engine_temp_f = 460.0; // +25
        r.vibration_level = 6.5; // +10
        r.oil_pressure_psi = 38.0; // +10
        let a = assess(&r, &cfg(), &mut rng, 0);
        assert_eq!(a.risk_score, 45);
        assert_eq!(a.risk_level, RiskLevel::High);
        assert_eq!(a.time_to_action_secs, Some(900));

        let mut r = SensorReading::cruise_baseline(0);
        r.engine_temp_f = 430.0; // +10
        r.oil_pressure_psi = 38.0; // +10
        let a = assess(&r, &cfg(), &mut rng, 0);
        assert_eq!(a.risk_score, 20);
        assert_eq!(a.risk_level, RiskLevel::Medium);
        assert!(a.predicted_failure.is_none());
    }

    #[test]
    fn confidence_stays_between_75_and_95() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut worst = SensorReading::cruise_baseline(0);
        worst.engine_temp_f = 520.0;
        worst.cabin_pressure_psi = 8.0;
        worst.vibration_level = 9.0;
        worst.oil_pressure_psi = 25.0;
        worst.fuel_quantity_pct = 10.0;
        for _ in 0..200 {
            let calm = assess(&SensorReading::cruise_baseline(0), &cfg(), &mut rng, 0);
            assert!(calm.confidence_pct >= 75.0 && calm.confidence_pct <= 95.0);
            let dire = assess(&worst, &cfg(), &mut rng, 0);
            assert!((dire.confidence_pct - 95.0).abs() < f32::EPSILON, "five factors must cap out");
        }
    }

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn outlook_rules_fire_independently() {
        let quiet = SensorReading::cruise_baseline(0);
        let mut r = quiet;
        r.engine_temp_f = 425.0;
        let o = maintenance_outlook(&r, &cfg());
        assert_eq!(o.trend_analysis.len(), 1);
        assert_eq!(o.maintenance_recommendations.len(), 1);
        assert_eq!(
            o.risk_projection,
            "Normal operational risk profile for next 24-48 hours"
        );

        let mut r = quiet;
        r.vibration_level = 4.5;
        r.oil_pressure_psi = 42.0;
        let o = maintenance_outlook(&r, &cfg());
        assert_eq!(o.trend_analysis.len(), 2);

        let mut r = quiet;
        r.cabin_pressure_psi = 9.5;
        let o = maintenance_outlook(&r, &cfg());
        assert_eq!(
            o.risk_projection,
            "High probability of emergency within next flight segment"
        );
    }

    #[test]
    fn predictive_fixtures_match_modes() {
        let n = PredictiveReport::normal();
        assert_eq!(n.risk_score, 12);
        assert!(n.time_to_failure_hours.is_none());
        assert_eq!(n.improving.len(), 2);

        let e = PredictiveReport::emergency();
        assert_eq!(e.risk_score, 87);
        assert_eq!(e.time_to_failure_hours, Some(0.2));
        assert_eq!(e.anomalies.len(), 3);
        assert!(e.improving.is_empty());
    }
}
