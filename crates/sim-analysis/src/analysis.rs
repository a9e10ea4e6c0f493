//! Health analysis: an overall status plus warnings, strengths, and
//! weaknesses derived from threshold checks.

use serde::{Deserialize, Serialize};
use sim_core::{Metric, Metrics};

/// Overall health classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Moderate,
    Unstable,
}

/// Result of [`analyze_startup`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupAnalysis {
    pub health_status: HealthStatus,
    pub warnings: Vec<String>,
    /// Display names of metrics above 70, in catalog order.
    pub strengths: Vec<String>,
    /// Display names of metrics below 30, in catalog order.
    pub weaknesses: Vec<String>,
}

/// Summarize the venture's health from a metrics snapshot.
///
/// `Unstable` (risk above 70) takes precedence over `Healthy` (growth
/// above 70 with risk under 40); everything else is `Moderate`. Warnings
/// accumulate independently, so several can apply at once.
pub fn analyze_startup(metrics: &Metrics) -> StartupAnalysis {
    let health_status = if metrics.risk > 70.0 {
        HealthStatus::Unstable
    } else if metrics.growth > 70.0 && metrics.risk < 40.0 {
        HealthStatus::Healthy
    } else {
        HealthStatus::Moderate
    };

    let mut warnings = Vec::new();
    if metrics.runway < 3.0 {
        warnings.push("Low runway".to_string());
    }
    if metrics.risk > 60.0 {
        warnings.push("Risk rising".to_string());
    }
    if metrics.growth < 30.0 {
        warnings.push("Growth slowing".to_string());
    }

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for metric in Metric::ALL {
        let value = metrics.get(metric);
        if value > 70.0 {
            strengths.push(metric.display_name().to_string());
        }
        if value < 30.0 {
            weaknesses.push(metric.display_name().to_string());
        }
    }

    StartupAnalysis {
        health_status,
        warnings,
        strengths,
        weaknesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Metrics {
        Metrics {
            market_fit: 50.0,
            team_strength: 50.0,
            growth: 50.0,
            revenue: 50.0,
            risk: 50.0,
            burn_rate: 50.0,
            runway: 50.0,
            brand: 50.0,
            scalability: 50.0,
        }
    }

    #[test]
    fn unstable_takes_precedence_over_healthy() {
        let metrics = Metrics {
            risk: 75.0,
            growth: 90.0,
            ..base()
        };
        assert_eq!(analyze_startup(&metrics).health_status, HealthStatus::Unstable);
    }

    #[test]
    fn healthy_needs_growth_and_contained_risk() {
        let metrics = Metrics {
            growth: 80.0,
            risk: 30.0,
            ..base()
        };
        assert_eq!(analyze_startup(&metrics).health_status, HealthStatus::Healthy);

        let metrics = Metrics {
            growth: 80.0,
            risk: 45.0,
            ..base()
        };
        assert_eq!(analyze_startup(&metrics).health_status, HealthStatus::Moderate);
    }

    #[test]
    fn warnings_accumulate_independently() {
        let metrics = Metrics {
            runway: 2.0,
            risk: 65.0,
            growth: 20.0,
            ..base()
        };
        assert_eq!(
            analyze_startup(&metrics).warnings,
            vec!["Low runway", "Risk rising", "Growth slowing"]
        );
        assert!(analyze_startup(&base()).warnings.is_empty());
    }

    #[test]
    fn strengths_and_weaknesses_follow_catalog_order() {
        let metrics = Metrics {
            market_fit: 80.0,
            team_strength: 20.0,
            brand: 90.0,
            scalability: 10.0,
            ..base()
        };
        let report = analyze_startup(&metrics);
        assert_eq!(report.strengths, vec!["Market Fit", "Brand"]);
        assert_eq!(report.weaknesses, vec!["Team Strength", "Scalability"]);
    }
}
