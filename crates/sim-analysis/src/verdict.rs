//! Final verdict: the derived confidence and survival scores shown on the
//! outcome report, independent of the engine's terminal classification.

use serde::{Deserialize, Serialize};
use sim_core::{clamp_metric, Metrics};

/// Qualitative rating bands for the confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VentureRating {
    HighPotential,
    ModeratePotential,
    HighRisk,
    Unstable,
}

impl VentureRating {
    /// Report label, e.g. "HIGH POTENTIAL".
    pub fn label(self) -> &'static str {
        match self {
            VentureRating::HighPotential => "HIGH POTENTIAL",
            VentureRating::ModeratePotential => "MODERATE POTENTIAL",
            VentureRating::HighRisk => "HIGH RISK",
            VentureRating::Unstable => "UNSTABLE MODEL",
        }
    }
}

/// Return-on-investment outlook derived from survival probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoiOutlook {
    Favorable,
    Moderate,
    HighRisk,
}

/// Survival probabilities across the scenario spread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioBand {
    pub worst_case: u32,
    pub expected_case: u32,
    pub best_case: u32,
}

/// The derived verdict for a finished (or abandoned) run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentureVerdict {
    pub market_score: f64,
    pub team_score: f64,
    pub finance_score: f64,
    /// Inverted risk: higher means safer.
    pub risk_score: f64,
    pub growth_score: f64,
    pub scalability_score: f64,
    pub execution_score: f64,
    pub confidence_score: u32,
    pub rating: VentureRating,
    pub survival_probability: u32,
    pub roi_outlook: RoiOutlook,
    pub scenarios: ScenarioBand,
}

/// Assess a metrics snapshot into the report verdict.
///
/// Execution blends team and growth; confidence averages market, finance,
/// inverted risk, and execution. Survival probability weighs finance 30%,
/// growth 20%, safety 15%, and market-plus-team 35%.
pub fn assess_venture(metrics: &Metrics) -> VentureVerdict {
    let market_score = clamp_metric(metrics.market_fit);
    let team_score = clamp_metric(metrics.team_strength);
    let finance_score = clamp_metric(metrics.runway);
    let risk_score = clamp_metric(100.0 - metrics.risk);
    let growth_score = clamp_metric(metrics.growth);
    let scalability_score = clamp_metric(metrics.scalability);

    let execution_score = ((team_score + growth_score) / 2.0).round();
    let confidence_score =
        ((market_score + finance_score + risk_score + execution_score) / 4.0).round() as u32;

    let rating = if confidence_score >= 72 {
        VentureRating::HighPotential
    } else if confidence_score >= 50 {
        VentureRating::ModeratePotential
    } else if confidence_score >= 30 {
        VentureRating::HighRisk
    } else {
        VentureRating::Unstable
    };

    let survival_probability = ((finance_score / 100.0) * 30.0
        + (growth_score / 100.0) * 20.0
        + (risk_score / 100.0) * 15.0
        + ((market_score + team_score) / 200.0) * 35.0)
        .round()
        .clamp(0.0, 100.0) as u32;

    let roi_outlook = if survival_probability > 60 {
        RoiOutlook::Favorable
    } else if survival_probability > 35 {
        RoiOutlook::Moderate
    } else {
        RoiOutlook::HighRisk
    };

    let scenarios = ScenarioBand {
        worst_case: survival_probability.saturating_sub(30),
        expected_case: survival_probability,
        best_case: (survival_probability + 25).min(100),
    };

    VentureVerdict {
        market_score,
        team_score,
        finance_score,
        risk_score,
        growth_score,
        scalability_score,
        execution_score,
        confidence_score,
        rating,
        survival_probability,
        roi_outlook,
        scenarios,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: f64) -> Metrics {
        Metrics {
            market_fit: value,
            team_strength: value,
            growth: value,
            revenue: value,
            risk: 100.0 - value,
            burn_rate: value,
            runway: value,
            brand: value,
            scalability: value,
        }
    }

    #[test]
    fn balanced_metrics_rate_moderate() {
        let verdict = assess_venture(&uniform(50.0));
        assert_eq!(verdict.confidence_score, 50);
        assert_eq!(verdict.rating, VentureRating::ModeratePotential);
        assert_eq!(verdict.survival_probability, 50);
        assert_eq!(verdict.roi_outlook, RoiOutlook::Moderate);
        assert_eq!(
            verdict.scenarios,
            ScenarioBand {
                worst_case: 20,
                expected_case: 50,
                best_case: 75,
            }
        );
    }

    #[test]
    fn strong_metrics_rate_high_potential() {
        let verdict = assess_venture(&uniform(80.0));
        assert_eq!(verdict.execution_score, 80.0);
        assert_eq!(verdict.confidence_score, 80);
        assert_eq!(verdict.rating, VentureRating::HighPotential);
        assert_eq!(verdict.survival_probability, 80);
        assert_eq!(verdict.roi_outlook, RoiOutlook::Favorable);
        assert_eq!(verdict.scenarios.best_case, 100);
    }

    #[test]
    fn collapsed_metrics_rate_unstable() {
        let verdict = assess_venture(&uniform(10.0));
        assert_eq!(verdict.confidence_score, 10);
        assert_eq!(verdict.rating, VentureRating::Unstable);
        assert_eq!(verdict.roi_outlook, RoiOutlook::HighRisk);
        assert_eq!(verdict.scenarios.worst_case, 0);
    }

    #[test]
    fn rating_labels_match_the_report() {
        assert_eq!(VentureRating::HighPotential.label(), "HIGH POTENTIAL");
        assert_eq!(VentureRating::Unstable.label(), "UNSTABLE MODEL");
    }
}
