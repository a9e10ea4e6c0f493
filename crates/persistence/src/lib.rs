#![deny(warnings)]

//! State persistence: the whole run is one JSON blob under one well-known
//! key. Only this crate talks to storage; the engine never performs I/O
//! and the load path is fail-soft by contract.

use sim_core::{validate_state, SimulationState};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// The well-known key the state blob is stored under.
pub const STATE_KEY: &str = "venture_sim_state";

/// Errors surfaced by `save`. Loading never errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save capability for the simulation state.
pub trait StateStore {
    /// Load the persisted state.
    ///
    /// Fail-soft: an absent, unparseable, or out-of-range blob yields the
    /// default initial state instead of an error.
    fn load(&self) -> SimulationState;

    /// Persist the state, replacing any previous blob.
    fn save(&mut self, state: &SimulationState) -> Result<(), StoreError>;
}

/// Parse and validate a raw blob, falling back to the default state.
fn decode(blob: &str) -> SimulationState {
    match serde_json::from_str::<SimulationState>(blob) {
        Ok(state) => match validate_state(&state) {
            Ok(()) => state,
            Err(err) => {
                warn!(%err, "persisted state failed validation, starting fresh");
                SimulationState::default()
            }
        },
        Err(err) => {
            warn!(%err, "persisted state failed to parse, starting fresh");
            SimulationState::default()
        }
    }
}

/// File-backed store: `<dir>/<STATE_KEY>.json`, pretty-printed.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. Nothing is touched until `save`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        JsonFileStore {
            path: dir.as_ref().join(format!("{STATE_KEY}.json")),
        }
    }

    /// The file the blob lives in.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> SimulationState {
        match fs::read_to_string(&self.path) {
            Ok(blob) => decode(&blob),
            Err(_) => SimulationState::default(),
        }
    }

    fn save(&mut self, state: &SimulationState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-process key-value store, handy as a test double for the browser
/// storage the original design persisted into.
#[derive(Default)]
pub struct MemoryStore {
    blobs: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw blob under the well-known key, bypassing `save`.
    pub fn insert_raw(&mut self, blob: &str) {
        self.blobs.insert(STATE_KEY.to_string(), blob.to_string());
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> SimulationState {
        match self.blobs.get(STATE_KEY) {
            Some(blob) => decode(blob),
            None => SimulationState::default(),
        }
    }

    fn save(&mut self, state: &SimulationState) -> Result<(), StoreError> {
        let blob = serde_json::to_string_pretty(state)?;
        self.blobs.insert(STATE_KEY.to_string(), blob);
        Ok(())
    }
}
