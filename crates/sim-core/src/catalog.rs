//! Immutable reference data: the decision and event catalogs, industry
//! benchmarks, and the default phase timeline.

use crate::{Decision, IndustryBenchmark, MarketEvent, Metric, MetricDeltas};
use std::collections::BTreeMap;

fn decision(id: &str, title: &str, effects: MetricDeltas) -> Decision {
    Decision {
        id: id.to_string(),
        title: title.to_string(),
        effects,
    }
}

/// The fixed catalog of eight player decisions, in presentation order.
pub fn decision_catalog() -> Vec<Decision> {
    vec![
        decision(
            "hire_senior_dev",
            "Hire a Senior Developer",
            MetricDeltas::from([
                (Metric::TeamStrength, 15.0),
                (Metric::BurnRate, 12.0),
                (Metric::Scalability, 10.0),
            ]),
        ),
        decision(
            "launch_ad_campaign",
            "Launch Paid Ad Campaign",
            MetricDeltas::from([
                (Metric::Brand, 20.0),
                (Metric::Growth, 10.0),
                (Metric::BurnRate, 8.0),
                (Metric::Revenue, 5.0),
            ]),
        ),
        decision(
            "pivot_product",
            "Pivot the Product",
            MetricDeltas::from([
                (Metric::MarketFit, 25.0),
                (Metric::Risk, 15.0),
                (Metric::Growth, -10.0),
                (Metric::Brand, -5.0),
            ]),
        ),
        decision(
            "raise_funding",
            "Raise a Funding Round",
            MetricDeltas::from([
                (Metric::Growth, 15.0),
                (Metric::Scalability, 12.0),
                (Metric::Risk, 10.0),
                (Metric::BurnRate, 5.0),
            ]),
        ),
        decision(
            "cut_costs",
            "Cut Operational Costs",
            MetricDeltas::from([
                (Metric::BurnRate, -20.0),
                (Metric::TeamStrength, -10.0),
                (Metric::Risk, -5.0),
            ]),
        ),
        decision(
            "expand_market",
            "Expand to New Market",
            MetricDeltas::from([
                (Metric::MarketFit, 10.0),
                (Metric::Growth, 20.0),
                (Metric::Risk, 18.0),
                (Metric::Revenue, 12.0),
                (Metric::Brand, 8.0),
            ]),
        ),
        decision(
            "build_partnerships",
            "Build Strategic Partnerships",
            MetricDeltas::from([
                (Metric::Brand, 12.0),
                (Metric::Scalability, 15.0),
                (Metric::Revenue, 8.0),
                (Metric::Risk, -5.0),
            ]),
        ),
        decision(
            "improve_product",
            "Invest in Product Quality",
            MetricDeltas::from([
                (Metric::MarketFit, 18.0),
                (Metric::Brand, 10.0),
                (Metric::BurnRate, 6.0),
                (Metric::Growth, 5.0),
                (Metric::Scalability, 8.0),
            ]),
        ),
    ]
}

/// The fixed catalog of three random market events.
pub fn event_catalog() -> Vec<MarketEvent> {
    vec![
        MarketEvent {
            name: "Competitor Entered Market".to_string(),
            effects: MetricDeltas::from([(Metric::Risk, 10.0)]),
        },
        MarketEvent {
            name: "Viral Growth".to_string(),
            effects: MetricDeltas::from([(Metric::Growth, 15.0)]),
        },
        MarketEvent {
            name: "Supplier Cost Increase".to_string(),
            effects: MetricDeltas::from([(Metric::BurnRate, 10.0)]),
        },
    ]
}

/// Reference figures per industry key, for setup-time scoring.
pub fn industry_benchmarks() -> BTreeMap<String, IndustryBenchmark> {
    BTreeMap::from([
        (
            "restaurant".to_string(),
            IndustryBenchmark {
                avg_margin: 6.0,
                avg_failure_rate: 60.0,
                avg_break_even_months: 18,
                risk_base: 55.0,
            },
        ),
        (
            "saas".to_string(),
            IndustryBenchmark {
                avg_margin: 72.0,
                avg_failure_rate: 42.0,
                avg_break_even_months: 24,
                risk_base: 40.0,
            },
        ),
        (
            "retail".to_string(),
            IndustryBenchmark {
                avg_margin: 10.0,
                avg_failure_rate: 50.0,
                avg_break_even_months: 14,
                risk_base: 48.0,
            },
        ),
    ])
}

/// The default six-stage phase timeline. The scheduler only consumes the
/// length and labels, so callers may supply their own list instead.
pub fn default_phases() -> Vec<String> {
    ["Ideation", "Validation", "Build", "Launch", "Growth", "Scale"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
