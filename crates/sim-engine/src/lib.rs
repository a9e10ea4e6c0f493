#![deny(warnings)]

//! The simulation mutators: decision application, the stochastic market
//! event roll, terminal outcome evaluation, and the phase scheduler.
//!
//! Everything here follows copy-on-write discipline: `process_decision` and
//! `advance_phase` take a state by reference and return a fresh one, so the
//! caller's history snapshots and any earlier states stay untouched.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use sim_core::{
    event_catalog, Decision, HistorySnapshot, MarketEvent, Metrics, SimulationState,
    VentureStatus,
};
use thiserror::Error;
use tracing::{debug, info};

/// Chance, in percent, that a market event fires on any one advance.
pub const EVENT_CHANCE_PCT: u32 = 20;

/// Apply a decision's effect deltas to the state's metrics.
///
/// Every other field is carried over unchanged. Pure and deterministic.
pub fn process_decision(state: &SimulationState, decision: &Decision) -> SimulationState {
    SimulationState {
        metrics: state.metrics.apply_deltas(&decision.effects),
        ..state.clone()
    }
}

/// Roll for a random market event.
///
/// Draws an integer uniformly from [1, 100]; a draw of `EVENT_CHANCE_PCT`
/// or less selects one of the three catalog events uniformly. The
/// randomness source is the caller's, so a seeded `ChaCha8Rng` makes the
/// roll fully deterministic under test; production callers pass
/// `rand::thread_rng()`.
pub fn roll_market_event<R: Rng>(rng: &mut R) -> Option<MarketEvent> {
    let roll: u32 = rng.gen_range(1..=100);
    if roll > EVENT_CHANCE_PCT {
        return None;
    }
    let mut catalog = event_catalog();
    let index = rng.gen_range(0..catalog.len());
    Some(catalog.swap_remove(index))
}

/// Whether the venture has failed: capital exhausted, risk runaway, or
/// growth collapse.
pub fn check_failure(metrics: &Metrics, capital: Decimal) -> bool {
    capital <= Decimal::ZERO || metrics.risk > 90.0 || metrics.growth < 10.0
}

/// Whether the venture has succeeded: strong growth with contained risk
/// and real revenue.
pub fn check_success(metrics: &Metrics) -> bool {
    metrics.growth > 80.0 && metrics.risk < 40.0 && metrics.revenue > 50.0
}

/// Classify a post-clamp metrics snapshot.
///
/// The predicates are not mutually exclusive; failure is evaluated first
/// and wins when both hold.
pub fn evaluate_outcome(metrics: &Metrics, capital: Decimal) -> Option<VentureStatus> {
    if check_failure(metrics, capital) {
        Some(VentureStatus::Failed)
    } else if check_success(metrics) {
        Some(VentureStatus::Success)
    } else {
        None
    }
}

/// Result of one `advance_phase` call.
#[derive(Clone, Debug, PartialEq)]
pub enum PhaseOutcome {
    /// The timeline is exhausted; nothing was mutated. The caller should
    /// route to the outcome report.
    Completed,
    /// One phase was entered and committed. The contained state may carry
    /// a terminal status when an outcome predicate fired.
    Advanced(SimulationState),
}

/// Errors from the phase scheduler.
#[derive(Debug, Error, PartialEq)]
pub enum AdvanceError {
    /// The run already reached a terminal status; the machine is locked.
    #[error("run is already over with status {0:?}")]
    RunOver(VentureStatus),
}

/// Advance the simulation by exactly one phase.
///
/// Consumes queued future effects targeting the entered phase, rolls the
/// event engine, appends a history snapshot, then evaluates the terminal
/// predicates. Either a fully updated state or `Completed` comes back;
/// a call on a terminal run is rejected.
pub fn advance_phase<R: Rng>(
    state: &SimulationState,
    phases: &[String],
    rng: &mut R,
) -> Result<PhaseOutcome, AdvanceError> {
    let event = roll_market_event(rng);
    advance_phase_with_event(state, phases, event)
}

/// Deterministic core of [`advance_phase`]: the market event (or its
/// absence) is supplied by the caller. Useful for replays and tests.
pub fn advance_phase_with_event(
    state: &SimulationState,
    phases: &[String],
    event: Option<MarketEvent>,
) -> Result<PhaseOutcome, AdvanceError> {
    if state.startup.status.is_terminal() {
        return Err(AdvanceError::RunOver(state.startup.status));
    }

    let next = state.current_phase + 1;
    if next >= phases.len() {
        return Ok(PhaseOutcome::Completed);
    }

    // Consume exactly the effects queued for the phase being entered.
    let (matched, remaining): (Vec<_>, Vec<_>) = state
        .future_effects
        .iter()
        .cloned()
        .partition(|effect| effect.target_phase == next);

    let mut metrics = state.metrics;
    for effect in &matched {
        metrics = metrics.apply_deltas(&effect.effects);
    }

    let mut insights = state.insights.clone();
    if let Some(event) = event {
        debug!(event = %event.name, phase = next, "market event injected");
        metrics = metrics.apply_deltas(&event.effects);
        insights.push(event.name);
    }

    let mut history = state.history.clone();
    history.push(HistorySnapshot {
        phase: next,
        metrics,
        timestamp: Utc::now(),
    });

    let mut startup = state.startup.clone();
    if let Some(status) = evaluate_outcome(&metrics, startup.capital) {
        info!(phase = next, ?status, "run reached a terminal state");
        startup.status = status;
    }

    Ok(PhaseOutcome::Advanced(SimulationState {
        startup,
        metrics,
        current_phase: next,
        history,
        insights,
        future_effects: remaining,
    }))
}
