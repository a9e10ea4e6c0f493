//! Outcome projection: a best/expected/worst band from the current metrics.

use serde::{Deserialize, Serialize};
use sim_core::{clamp_metric, Metrics};

/// Projected score band, each value in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeProjection {
    pub best_case: f64,
    pub expected_case: f64,
    pub worst_case: f64,
}

/// Project a score band from the nine metrics.
///
/// Risk and burn rate are inverted (100 − value) so that "lower is better"
/// dimensions pull in the same direction as the rest; the base score is
/// the plain mean of the resulting vector.
pub fn predict_outcomes(metrics: &Metrics) -> OutcomeProjection {
    let values = [
        metrics.market_fit,
        metrics.team_strength,
        metrics.growth,
        metrics.revenue,
        100.0 - metrics.risk,
        100.0 - metrics.burn_rate,
        metrics.runway,
        metrics.brand,
        metrics.scalability,
    ];
    let base_score = values.iter().sum::<f64>() / values.len() as f64;
    OutcomeProjection {
        best_case: clamp_metric(base_score + 15.0),
        expected_case: clamp_metric(base_score),
        worst_case: clamp_metric(base_score - 20.0),
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
            risk: value,
            burn_rate: value,
            runway: value,
            brand: value,
            scalability: value,
        }
    }

    #[test]
    fn all_fifty_projects_the_reference_band() {
        // Inversion cancels at 50, so the base score is exactly 50.
        let band = predict_outcomes(&uniform(50.0));
        assert_eq!(band.best_case, 65.0);
        assert_eq!(band.expected_case, 50.0);
        assert_eq!(band.worst_case, 30.0);
    }

    #[test]
    fn band_is_clamped_at_the_extremes() {
        let mut top = uniform(100.0);
        top.risk = 0.0;
        top.burn_rate = 0.0;
        let band = predict_outcomes(&top);
        assert_eq!(band.best_case, 100.0);
        assert_eq!(band.expected_case, 100.0);
        assert_eq!(band.worst_case, 80.0);

        let mut bottom = uniform(0.0);
        bottom.risk = 100.0;
        bottom.burn_rate = 100.0;
        let band = predict_outcomes(&bottom);
        assert_eq!(band.best_case, 15.0);
        assert_eq!(band.expected_case, 0.0);
        assert_eq!(band.worst_case, 0.0);
    }
}
