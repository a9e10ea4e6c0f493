#![deny(warnings)]

//! Headless CLI: founds a startup, plays the top-ranked decision each
//! phase, advances to a terminal state, and prints the outcome report.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use persistence::{JsonFileStore, StateStore};
use sim_analysis::{analyze_startup, assess_venture, predict_outcomes, rank_decisions};
use sim_core::{
    decision_catalog, default_phases, feasibility_score, found_startup, industry_difficulty,
    FounderProfile, FutureEffect, Metric, MetricDeltas, VentureStatus,
};
use sim_engine::{advance_phase, process_decision, PhaseOutcome};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    name: String,
    industry: String,
    capital: i64,
    experience: u8,
    risk_tolerance: f64,
    seed: u64,
    save_dir: String,
}

fn parse_args() -> Args {
    let mut args = Args {
        name: "NewCo".to_string(),
        industry: "saas".to_string(),
        capital: 50_000,
        experience: 5,
        risk_tolerance: 40.0,
        seed: 42,
        save_dir: "./saves".to_string(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--name" => args.name = it.next().unwrap_or(args.name),
            "--industry" => args.industry = it.next().unwrap_or(args.industry),
            "--capital" => {
                args.capital = it.next().and_then(|s| s.parse().ok()).unwrap_or(args.capital)
            }
            "--experience" => {
                args.experience = it
                    .next()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(args.experience)
            }
            "--risk-tolerance" => {
                args.risk_tolerance = it
                    .next()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(args.risk_tolerance)
            }
            "--seed" => args.seed = it.next().and_then(|s| s.parse().ok()).unwrap_or(args.seed),
            "--save-dir" => args.save_dir = it.next().unwrap_or(args.save_dir),
            _ => {}
        }
    }
    args
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    let profile = FounderProfile {
        name: args.name.clone(),
        industry: args.industry.clone(),
        capital: Decimal::new(args.capital, 0),
        experience: args.experience.min(10),
        risk_tolerance: args.risk_tolerance.clamp(0.0, 100.0),
    };
    info!(
        name = %profile.name,
        industry = %profile.industry,
        feasibility = feasibility_score(&profile),
        difficulty = ?industry_difficulty(&profile.industry),
        seed = args.seed,
        "founding startup"
    );

    let mut state = found_startup(profile);
    // A marketing push that pays off once the venture reaches Build.
    state.future_effects.push(FutureEffect {
        target_phase: 2,
        effects: MetricDeltas::from([(Metric::Brand, 5.0), (Metric::Growth, 5.0)]),
    });

    let phases = default_phases();
    let catalog = decision_catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    loop {
        let ranked = rank_decisions(&state.metrics, &catalog);
        let best = &ranked[0];
        info!(
            phase = state.current_phase,
            decision = %best.decision.id,
            impact = best.impact_score,
            confidence = best.confidence,
            "taking top-ranked decision"
        );
        state = process_decision(&state, &best.decision);

        match advance_phase(&state, &phases, &mut rng)? {
            PhaseOutcome::Completed => {
                println!("Timeline complete after phase {}.", state.current_phase);
                break;
            }
            PhaseOutcome::Advanced(next) => {
                let band = predict_outcomes(&next.metrics);
                let health = analyze_startup(&next.metrics);
                println!(
                    "Phase {} ({}) | health: {:?} | expected: {:.0} | growth: {:.0} | risk: {:.0}",
                    next.current_phase,
                    phases[next.current_phase],
                    health.health_status,
                    band.expected_case,
                    next.metrics.growth,
                    next.metrics.risk,
                );
                let terminal = next.startup.status.is_terminal();
                state = next;
                if terminal {
                    break;
                }
            }
        }
    }

    let verdict = assess_venture(&state.metrics);
    let status = match state.startup.status {
        VentureStatus::Active => "still standing",
        VentureStatus::Failed => "failed",
        VentureStatus::Success => "successful",
    };
    println!(
        "Venture {} | verdict: {} | confidence: {}% | survival: {}% | ROI outlook: {:?}",
        status,
        verdict.rating.label(),
        verdict.confidence_score,
        verdict.survival_probability,
        verdict.roi_outlook,
    );
    for insight in &state.insights {
        println!("  insight: {insight}");
    }

    let mut store = JsonFileStore::new(&args.save_dir);
    store.save(&state)?;
    println!("Saved run to {}", store.path().display());

    Ok(())
}
