use crate::{events::VmEvents, provider::Provider, state::StateManager};
use std::sync::Arc;

/// The `evm` member of the legacy VM shape
#[derive(Clone)]
pub struct MinimalEvm {
    /// Hook dispatcher; always present, even though nothing here emits
    pub events: Arc<VmEvents>,
}

/// Reduced VM object kept for plugins that reach into `vm.evm.events` and
/// `vm.stateManager`
///
/// Only the members those plugins use are provided. Everything is backed by a
/// shared provider; the VM itself holds no chain state.
#[derive(Clone)]
pub struct MinimalVm {
    pub evm: MinimalEvm,
    pub state_manager: StateManager,
}

impl MinimalVm {
    /// Build the VM facade on top of a provider
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            evm: MinimalEvm {
                events: Arc::new(VmEvents::new()),
            },
            state_manager: StateManager::new(provider),
        }
    }
}
