use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pairgrowth_core::{Asset, PairError, PriceSource, RawObservation};

use crate::fixtures;

/// Instruction for how `daily_history` should behave for a given asset.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the provided observations.
    Return(Vec<RawObservation>),
    /// Fail with the provided error.
    Fail(PairError),
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<Asset, MockBehavior>,
    requests: Vec<Asset>,
}

fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior of `daily_history` calls for `asset`.
    pub fn set_behavior(&self, asset: Asset, behavior: MockBehavior) {
        lock(&self.state).rules.insert(asset, behavior);
    }

    /// Assets requested so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<Asset> {
        lock(&self.state).requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub fn clear_all_behaviors(&self) {
        let mut guard = lock(&self.state);
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
///
/// Assets without a configured behavior fall back to the generated fixture.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn PriceSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn PriceSource>, controller)
    }
}

impl PriceSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn daily_history(&self, asset: Asset) -> Result<Vec<RawObservation>, PairError> {
        let behavior = {
            let mut guard = lock(&self.state);
            guard.requests.push(asset);
            guard.rules.get(&asset).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(obs)) => Ok(obs),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Ok(fixtures::history::daily(asset)),
        }
    }
}
