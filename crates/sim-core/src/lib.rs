#![deny(warnings)]

//! Core domain model and invariants for Venture Sim.
//!
//! This crate defines the serializable simulation state shared across the
//! workspace, the nine-dimensional clamped metrics vector with its update
//! rule, and the immutable reference catalogs (decisions, market events,
//! industry benchmarks, phase names).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

mod catalog;
mod setup;

pub use catalog::{decision_catalog, default_phases, event_catalog, industry_benchmarks};
pub use setup::{
    capital_score, experience_score, feasibility_score, found_startup, industry_difficulty,
    risk_tolerance_score, FounderProfile, IndustryDifficulty,
};

/// Lower bound of every metric.
pub const METRIC_MIN: f64 = 0.0;
/// Upper bound of every metric.
pub const METRIC_MAX: f64 = 100.0;

/// Clamp a raw metric value into the closed [0, 100] range.
pub fn clamp_metric(value: f64) -> f64 {
    value.clamp(METRIC_MIN, METRIC_MAX)
}

/// The closed set of health metric names.
///
/// Effect maps are keyed by this enum, so a delta targeting an unknown
/// metric is unrepresentable. `ALL` fixes the catalog order used wherever
/// metrics are listed for humans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    MarketFit,
    TeamStrength,
    Growth,
    Revenue,
    Risk,
    BurnRate,
    Runway,
    Brand,
    Scalability,
}

impl Metric {
    /// All metrics in catalog order.
    pub const ALL: [Metric; 9] = [
        Metric::MarketFit,
        Metric::TeamStrength,
        Metric::Growth,
        Metric::Revenue,
        Metric::Risk,
        Metric::BurnRate,
        Metric::Runway,
        Metric::Brand,
        Metric::Scalability,
    ];

    /// Human-readable name, e.g. "Market Fit".
    pub fn display_name(self) -> &'static str {
        match self {
            Metric::MarketFit => "Market Fit",
            Metric::TeamStrength => "Team Strength",
            Metric::Growth => "Growth",
            Metric::Revenue => "Revenue",
            Metric::Risk => "Risk",
            Metric::BurnRate => "Burn Rate",
            Metric::Runway => "Runway",
            Metric::Brand => "Brand",
            Metric::Scalability => "Scalability",
        }
    }
}

/// A sparse set of metric deltas; absent keys mean "no change".
pub type MetricDeltas = BTreeMap<Metric, f64>;

/// The nine scored health dimensions, each held in [0, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub market_fit: f64,
    pub team_strength: f64,
    pub growth: f64,
    pub revenue: f64,
    pub risk: f64,
    pub burn_rate: f64,
    pub runway: f64,
    pub brand: f64,
    pub scalability: f64,
}

impl Metrics {
    /// Read one metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MarketFit => self.market_fit,
            Metric::TeamStrength => self.team_strength,
            Metric::Growth => self.growth,
            Metric::Revenue => self.revenue,
            Metric::Risk => self.risk,
            Metric::BurnRate => self.burn_rate,
            Metric::Runway => self.runway,
            Metric::Brand => self.brand,
            Metric::Scalability => self.scalability,
        }
    }

    /// Write one metric, clamping into [0, 100].
    pub fn set(&mut self, metric: Metric, value: f64) {
        let v = clamp_metric(value);
        match metric {
            Metric::MarketFit => self.market_fit = v,
            Metric::TeamStrength => self.team_strength = v,
            Metric::Growth => self.growth = v,
            Metric::Revenue => self.revenue = v,
            Metric::Risk => self.risk = v,
            Metric::BurnRate => self.burn_rate = v,
            Metric::Runway => self.runway = v,
            Metric::Brand => self.brand = v,
            Metric::Scalability => self.scalability = v,
        }
    }

    /// Apply a delta map, clamping each touched metric into [0, 100].
    ///
    /// Metrics absent from `deltas` are unchanged. Total and pure: there is
    /// no failure mode, regardless of delta magnitude.
    pub fn apply_deltas(&self, deltas: &MetricDeltas) -> Metrics {
        let mut next = *self;
        for (&metric, &delta) in deltas {
            next.set(metric, next.get(metric) + delta);
        }
        next
    }
}

/// Terminal classification of a run. Write-once: `Active` may move to
/// `Failed` or `Success`, after which the scheduler locks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VentureStatus {
    Active,
    Failed,
    Success,
}

impl VentureStatus {
    /// Whether the run has reached a terminal classification.
    pub fn is_terminal(self) -> bool {
        matches!(self, VentureStatus::Failed | VentureStatus::Success)
    }
}

/// The venture being simulated. Created once at setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    /// Company name.
    pub name: String,
    /// Industry catalog key, e.g. "saas".
    pub industry: String,
    /// Starting capital in currency units.
    pub capital: Decimal,
    /// Founder experience, 0..=10.
    pub experience: u8,
    /// Founder risk tolerance, 0..=100.
    pub risk_tolerance: f64,
    /// Run classification.
    pub status: VentureStatus,
}

/// A metric delta queued to fire when a specific phase is entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureEffect {
    /// Phase index at which the effects apply.
    pub target_phase: usize,
    pub effects: MetricDeltas,
}

/// Immutable record of the metrics at the moment a phase was entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub phase: usize,
    pub metrics: Metrics,
    pub timestamp: DateTime<Utc>,
}

/// A user-selectable action with a fixed effect on metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Stable catalog id, e.g. "cut_costs".
    pub id: String,
    pub title: String,
    pub effects: MetricDeltas,
}

/// A randomly injected market occurrence with a fixed effect on metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketEvent {
    pub name: String,
    pub effects: MetricDeltas,
}

/// Per-industry reference figures, consumed by setup-time scoring only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBenchmark {
    pub avg_margin: f64,
    pub avg_failure_rate: f64,
    pub avg_break_even_months: u32,
    pub risk_base: f64,
}

/// The sole owned aggregate: everything a run persists.
///
/// Treated as an immutable value throughout the workspace: mutating
/// operations return a fresh state, so previously held snapshots stay
/// valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub startup: Startup,
    pub metrics: Metrics,
    pub current_phase: usize,
    /// Append-only audit trail, one snapshot per successful advance.
    pub history: Vec<HistorySnapshot>,
    /// Append-only log of event names and advisory text.
    pub insights: Vec<String>,
    /// Queued deltas, consumed when their target phase is entered.
    pub future_effects: Vec<FutureEffect>,
}

impl Default for SimulationState {
    fn default() -> Self {
        SimulationState {
            startup: Startup {
                name: String::new(),
                industry: String::new(),
                capital: Decimal::ZERO,
                experience: 0,
                risk_tolerance: 0.0,
                status: VentureStatus::Active,
            },
            metrics: Metrics::default(),
            current_phase: 0,
            history: Vec::new(),
            insights: Vec::new(),
            future_effects: Vec::new(),
        }
    }
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A metric lies outside [0, 100] or is not finite.
    #[error("metric {0} out of range: {1}")]
    MetricOutOfRange(&'static str, f64),
    /// Experience must be within 0..=10.
    #[error("experience {0} out of range [0, 10]")]
    ExperienceOutOfRange(u8),
    /// Risk tolerance must be within [0, 100].
    #[error("risk tolerance {0} out of range [0, 100]")]
    RiskToleranceOutOfRange(f64),
}

/// Validate that every metric is finite and within [0, 100].
pub fn validate_metrics(metrics: &Metrics) -> Result<(), ValidationError> {
    for metric in Metric::ALL {
        let v = metrics.get(metric);
        if !v.is_finite() || !(METRIC_MIN..=METRIC_MAX).contains(&v) {
            return Err(ValidationError::MetricOutOfRange(metric.display_name(), v));
        }
    }
    Ok(())
}

/// Validate a full state, including the history trail.
pub fn validate_state(state: &SimulationState) -> Result<(), ValidationError> {
    if state.startup.experience > 10 {
        return Err(ValidationError::ExperienceOutOfRange(state.startup.experience));
    }
    if !state.startup.risk_tolerance.is_finite()
        || !(0.0..=100.0).contains(&state.startup.risk_tolerance)
    {
        return Err(ValidationError::RiskToleranceOutOfRange(
            state.startup.risk_tolerance,
        ));
    }
    validate_metrics(&state.metrics)?;
    for snapshot in &state.history {
        validate_metrics(&snapshot.metrics)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_metrics() -> Metrics {
        Metrics {
            market_fit: 40.0,
            team_strength: 55.0,
            growth: 20.0,
            revenue: 10.0,
            risk: 35.0,
            burn_rate: 30.0,
            runway: 12.0,
            brand: 5.0,
            scalability: 15.0,
        }
    }

    #[test]
    fn apply_deltas_moves_only_touched_metrics() {
        let before = sample_metrics();
        let deltas = MetricDeltas::from([(Metric::Growth, 15.0), (Metric::Risk, -10.0)]);
        let after = before.apply_deltas(&deltas);
        assert_eq!(after.growth, 35.0);
        assert_eq!(after.risk, 25.0);
        assert_eq!(after.market_fit, before.market_fit);
        assert_eq!(after.burn_rate, before.burn_rate);
    }

    #[test]
    fn apply_deltas_clamps_at_both_bounds() {
        let deltas = MetricDeltas::from([(Metric::Brand, 500.0), (Metric::Revenue, -500.0)]);
        let after = sample_metrics().apply_deltas(&deltas);
        assert_eq!(after.brand, METRIC_MAX);
        assert_eq!(after.revenue, METRIC_MIN);
    }

    #[test]
    fn state_serde_roundtrip_uses_camel_case() {
        let state = SimulationState {
            startup: Startup {
                name: "Acme".to_string(),
                industry: "saas".to_string(),
                capital: Decimal::new(50_000, 0),
                experience: 5,
                risk_tolerance: 40.0,
                status: VentureStatus::Active,
            },
            metrics: sample_metrics(),
            ..SimulationState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"currentPhase\""));
        assert!(json.contains("\"futureEffects\""));
        assert!(json.contains("\"marketFit\""));
        assert!(json.contains("\"riskTolerance\""));
        assert!(json.contains("\"status\":\"active\""));
        let back: SimulationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn validate_state_rejects_out_of_range_fields() {
        let mut state = SimulationState::default();
        state.startup.experience = 11;
        assert_eq!(
            validate_state(&state),
            Err(ValidationError::ExperienceOutOfRange(11))
        );

        let mut state = SimulationState::default();
        state.metrics.risk = 130.0;
        assert!(matches!(
            validate_state(&state),
            Err(ValidationError::MetricOutOfRange("Risk", _))
        ));
    }

    #[test]
    fn status_terminality() {
        assert!(!VentureStatus::Active.is_terminal());
        assert!(VentureStatus::Failed.is_terminal());
        assert!(VentureStatus::Success.is_terminal());
    }

    proptest! {
        #[test]
        fn clamp_invariant_holds_for_arbitrary_deltas(
            base in -50.0f64..150.0,
            d1 in -200.0f64..200.0,
            d2 in -200.0f64..200.0,
        ) {
            let mut metrics = Metrics::default();
            metrics.set(Metric::Growth, base);
            let deltas = MetricDeltas::from([(Metric::Growth, d1), (Metric::Risk, d2)]);
            let after = metrics.apply_deltas(&deltas);
            prop_assert!(validate_metrics(&after).is_ok());
        }

        #[test]
        fn untouched_metrics_are_stable(delta in -200.0f64..200.0) {
            let before = sample_metrics();
            let deltas = MetricDeltas::from([(Metric::MarketFit, delta)]);
            let after = before.apply_deltas(&deltas);
            for metric in Metric::ALL {
                if metric != Metric::MarketFit {
                    prop_assert_eq!(after.get(metric), before.get(metric));
                }
            }
        }
    }
}
