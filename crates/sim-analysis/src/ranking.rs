//! Decision ranking: scores each catalog decision against the current
//! metrics so the caller can surface the highest-impact moves first.

use serde::{Deserialize, Serialize};
use sim_core::{Decision, Metric, Metrics};

/// A decision with its computed impact and confidence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDecision {
    pub decision: Decision,
    pub impact_score: i32,
    /// Integer percentage in [30, 95].
    pub confidence: u32,
}

/// Weight one effect delta against the current metrics.
///
/// Deltas on metrics that are currently weak count extra; risk reductions
/// are rewarded and risk increases penalized; everything else sits at a
/// 0.8 baseline.
fn weigh_effect(metrics: &Metrics, metric: Metric, delta: f64) -> f64 {
    let magnitude = delta.abs();
    match metric {
        Metric::MarketFit if metrics.market_fit < 50.0 => magnitude * 1.3,
        Metric::Growth if metrics.growth < 40.0 => magnitude * 1.2,
        Metric::TeamStrength if metrics.team_strength < 40.0 => magnitude * 1.1,
        Metric::Revenue if metrics.revenue < 40.0 => magnitude * 1.2,
        Metric::Risk => {
            if delta < 0.0 {
                magnitude * 0.9
            } else {
                -delta * 0.4
            }
        }
        Metric::Scalability if metrics.scalability < 40.0 => magnitude,
        _ => magnitude * 0.8,
    }
}

fn score_decision(metrics: &Metrics, decision: &Decision) -> RankedDecision {
    let impact: f64 = decision
        .effects
        .iter()
        .map(|(&metric, &delta)| weigh_effect(metrics, metric, delta))
        .sum();
    let confidence = (55.0 + (impact * 0.6).round()).clamp(30.0, 95.0) as u32;
    RankedDecision {
        decision: decision.clone(),
        impact_score: impact.round() as i32,
        confidence,
    }
}

/// Rank decisions by impact against the current metrics, best first.
///
/// The sort is stable, so equal scores keep their catalog order.
pub fn rank_decisions(metrics: &Metrics, catalog: &[Decision]) -> Vec<RankedDecision> {
    let mut ranked: Vec<RankedDecision> = catalog
        .iter()
        .map(|decision| score_decision(metrics, decision))
        .collect();
    ranked.sort_by(|a, b| b.impact_score.cmp(&a.impact_score));
    ranked
}
