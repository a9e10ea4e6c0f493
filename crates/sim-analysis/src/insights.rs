//! Advisory insight strings from independent threshold checks.

use sim_core::Metrics;

/// Generate advisory messages for the insight feed.
///
/// The checks run in a fixed order and are not mutually exclusive; every
/// matching message is included.
pub fn generate_insights(metrics: &Metrics) -> Vec<String> {
    let mut messages = Vec::new();
    if metrics.risk > 70.0 {
        messages.push("Warning: Risk level is high".to_string());
    }
    if metrics.growth < 30.0 {
        messages.push("Growth is weak".to_string());
    }
    if metrics.market_fit < 40.0 {
        messages.push("Market demand is low".to_string());
    }
    if metrics.runway < 3.0 {
        messages.push("Runway critically low".to_string());
    }
    if metrics.revenue > 70.0 {
        messages.push("Revenue performing strongly".to_string());
    }
    messages
}
