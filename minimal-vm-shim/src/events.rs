//! Lifecycle hooks of the legacy VM shape
//!
//! Plugins written against the old EthereumJS VM subscribe to
//! `beforeMessage`, `afterMessage` and `step` on `vm.evm.events`. The
//! provider-backed VM never produces these events, but the dispatcher has to
//! exist and accept listeners so those plugins keep loading. `emit` is kept
//! so an external driver can feed it.
//!
//! Listeners come in two flavours:
//! - plain listeners, called with the payload and done;
//! - resolving listeners, which also receive a [`Resolver`]. Emission waits
//!   for that resolver before calling the next listener.

use crate::models::vm::{MinimalEvmResult, MinimalInterpreterStep, MinimalMessage};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::oneshot;
use tracing::debug;

/// Handle a resolving listener uses to let emission continue
///
/// Dropping it without calling [`Resolver::resolve`] also releases the
/// emitter.
#[derive(Debug)]
pub struct Resolver {
    tx: oneshot::Sender<()>,
}

impl Resolver {
    pub fn resolve(self) {
        // The emitter may have been dropped mid-emission
        let _ = self.tx.send(());
    }
}

type PlainListener<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ResolvingListener<T> = Arc<dyn Fn(&T, Resolver) + Send + Sync>;

enum Listener<T> {
    Plain(PlainListener<T>),
    Resolving(ResolvingListener<T>),
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        match self {
            Listener::Plain(f) => Listener::Plain(Arc::clone(f)),
            Listener::Resolving(f) => Listener::Resolving(Arc::clone(f)),
        }
    }
}

/// Ordered listener list for one hook kind
pub struct HookChannel<T> {
    listeners: RwLock<Vec<Listener<T>>>,
}

impl<T> Default for HookChannel<T> {
    fn default() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }
}

impl<T> HookChannel<T> {
    fn push(&self, listener: Listener<T>) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    fn snapshot(&self) -> Vec<Listener<T>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every listener in registration order
    ///
    /// The list is snapshotted first, so listeners registered during emission
    /// only see later events.
    async fn emit(&self, name: &'static str, data: &T) {
        let listeners = self.snapshot();
        debug!("Emitting {} to {} listener(s)", name, listeners.len());

        for listener in listeners {
            match listener {
                Listener::Plain(f) => f(data),
                Listener::Resolving(f) => {
                    let (tx, rx) = oneshot::channel();
                    f(data, Resolver { tx });
                    if rx.await.is_err() {
                        debug!("{} listener dropped its resolver", name);
                    }
                }
            }
        }
    }
}

/// A hook kind: its wire name, payload type and channel on [`VmEvents`]
pub trait Hook {
    const NAME: &'static str;
    type Payload;

    fn channel(events: &VmEvents) -> &HookChannel<Self::Payload>;
}

/// Fired before a message is executed
pub struct BeforeMessage;

/// Fired after a message has finished executing
pub struct AfterMessage;

/// Fired at each interpreter step
pub struct Step;

impl Hook for BeforeMessage {
    const NAME: &'static str = "beforeMessage";
    type Payload = MinimalMessage;

    fn channel(events: &VmEvents) -> &HookChannel<MinimalMessage> {
        &events.before_message
    }
}

impl Hook for AfterMessage {
    const NAME: &'static str = "afterMessage";
    type Payload = MinimalEvmResult;

    fn channel(events: &VmEvents) -> &HookChannel<MinimalEvmResult> {
        &events.after_message
    }
}

impl Hook for Step {
    const NAME: &'static str = "step";
    type Payload = MinimalInterpreterStep;

    fn channel(events: &VmEvents) -> &HookChannel<MinimalInterpreterStep> {
        &events.step
    }
}

/// Typed event dispatcher exposed as `vm.evm.events`
#[derive(Default)]
pub struct VmEvents {
    before_message: HookChannel<MinimalMessage>,
    after_message: HookChannel<MinimalEvmResult>,
    step: HookChannel<MinimalInterpreterStep>,
}

impl VmEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener that is called with the payload of each `H` event
    pub fn subscribe<H, F>(&self, listener: F)
    where
        H: Hook,
        F: Fn(&H::Payload) + Send + Sync + 'static,
    {
        H::channel(self).push(Listener::Plain(Arc::new(listener)));
    }

    /// Register a listener that must resolve before emission moves on
    pub fn subscribe_with_resolve<H, F>(&self, listener: F)
    where
        H: Hook,
        F: Fn(&H::Payload, Resolver) + Send + Sync + 'static,
    {
        H::channel(self).push(Listener::Resolving(Arc::new(listener)));
    }

    /// Deliver `data` to every `H` listener in registration order
    pub async fn emit<H: Hook>(&self, data: &H::Payload) {
        H::channel(self).emit(H::NAME, data).await;
    }

    pub fn listener_count<H: Hook>(&self) -> usize {
        H::channel(self).len()
    }
}
