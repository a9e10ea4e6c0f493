//! Setup-time derivations: founder profile scoring and initial state
//! construction. These run once before the first phase and never again.

use crate::{clamp_metric, Metrics, SimulationState, Startup, VentureStatus};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Inputs gathered from the founder before the run starts.
#[derive(Clone, Debug)]
pub struct FounderProfile {
    pub name: String,
    pub industry: String,
    pub capital: Decimal,
    /// Years-of-experience band, 0..=10.
    pub experience: u8,
    /// Self-reported risk appetite, 0..=100.
    pub risk_tolerance: f64,
}

/// Difficulty tier of an industry, for setup feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndustryDifficulty {
    High,
    Medium,
    Low,
}

/// Banded score for starting capital.
pub fn capital_score(capital: Decimal) -> u32 {
    if capital < Decimal::new(10_000, 0) {
        20
    } else if capital < Decimal::new(50_000, 0) {
        40
    } else if capital < Decimal::new(200_000, 0) {
        60
    } else {
        80
    }
}

/// Score for founder experience (ten points per band).
pub fn experience_score(experience: u8) -> u32 {
    u32::from(experience) * 10
}

/// Score for risk tolerance; a middling appetite scores best.
pub fn risk_tolerance_score(risk_tolerance: f64) -> u32 {
    if risk_tolerance <= 30.0 {
        60
    } else if risk_tolerance <= 70.0 {
        80
    } else {
        50
    }
}

/// Overall feasibility: rounded mean of the three profile scores, in [0, 100].
pub fn feasibility_score(profile: &FounderProfile) -> u32 {
    let sum = capital_score(profile.capital)
        + experience_score(profile.experience)
        + risk_tolerance_score(profile.risk_tolerance);
    let mean = (f64::from(sum) / 3.0).round();
    mean.clamp(0.0, 100.0) as u32
}

/// Difficulty tier for an industry key.
pub fn industry_difficulty(industry: &str) -> IndustryDifficulty {
    match industry {
        "ai" | "fintech" | "manufacturing" => IndustryDifficulty::High,
        "saas" | "marketplace" | "healthcare" => IndustryDifficulty::Medium,
        _ => IndustryDifficulty::Low,
    }
}

/// Build the initial simulation state for a founder profile.
///
/// Team strength and risk seed directly from the profile; runway starts at
/// one point per 10k of capital (capped at 100); every other metric starts
/// at zero and must be earned through decisions.
pub fn found_startup(profile: FounderProfile) -> SimulationState {
    let runway = if profile.capital > Decimal::ZERO {
        let points = (profile.capital / Decimal::new(10_000, 0))
            .round()
            .to_f64()
            .unwrap_or(0.0);
        points.min(100.0)
    } else {
        0.0
    };
    let metrics = Metrics {
        team_strength: clamp_metric(f64::from(profile.experience) * 10.0),
        risk: clamp_metric(profile.risk_tolerance),
        runway,
        ..Metrics::default()
    };
    SimulationState {
        startup: Startup {
            name: profile.name,
            industry: profile.industry,
            capital: profile.capital,
            experience: profile.experience,
            risk_tolerance: profile.risk_tolerance,
            status: VentureStatus::Active,
        },
        metrics,
        ..SimulationState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_state;

    fn profile(capital: i64, experience: u8, risk_tolerance: f64) -> FounderProfile {
        FounderProfile {
            name: "Acme".to_string(),
            industry: "saas".to_string(),
            capital: Decimal::new(capital, 0),
            experience,
            risk_tolerance,
        }
    }

    #[test]
    fn capital_score_bands() {
        assert_eq!(capital_score(Decimal::new(5_000, 0)), 20);
        assert_eq!(capital_score(Decimal::new(10_000, 0)), 40);
        assert_eq!(capital_score(Decimal::new(199_999, 0)), 60);
        assert_eq!(capital_score(Decimal::new(200_000, 0)), 80);
    }

    #[test]
    fn risk_score_rewards_the_middle_band() {
        assert_eq!(risk_tolerance_score(30.0), 60);
        assert_eq!(risk_tolerance_score(50.0), 80);
        assert_eq!(risk_tolerance_score(71.0), 50);
    }

    #[test]
    fn feasibility_is_a_rounded_mean() {
        // 40 (capital) + 50 (experience) + 80 (risk) = 170 / 3 -> 57
        assert_eq!(feasibility_score(&profile(20_000, 5, 50.0)), 57);
    }

    #[test]
    fn industry_tiers() {
        assert_eq!(industry_difficulty("fintech"), IndustryDifficulty::High);
        assert_eq!(industry_difficulty("saas"), IndustryDifficulty::Medium);
        assert_eq!(industry_difficulty("restaurant"), IndustryDifficulty::Low);
    }

    #[test]
    fn founding_seeds_metrics_from_the_profile() {
        let state = found_startup(profile(120_000, 6, 45.0));
        assert_eq!(state.metrics.team_strength, 60.0);
        assert_eq!(state.metrics.risk, 45.0);
        assert_eq!(state.metrics.runway, 12.0);
        assert_eq!(state.metrics.growth, 0.0);
        assert_eq!(state.current_phase, 0);
        assert_eq!(state.startup.status, VentureStatus::Active);
        assert!(state.history.is_empty());
        validate_state(&state).unwrap();
    }

    #[test]
    fn founding_with_no_capital_has_zero_runway() {
        let state = found_startup(profile(0, 3, 20.0));
        assert_eq!(state.metrics.runway, 0.0);
    }

    #[test]
    fn runway_is_capped() {
        let state = found_startup(profile(5_000_000, 3, 20.0));
        assert_eq!(state.metrics.runway, 100.0);
    }
}
