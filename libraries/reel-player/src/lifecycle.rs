//! App-lifecycle signal plumbing
//!
//! The embedding platform posts foreground/background transitions into a
//! [`LifecycleHub`]; a [`LifecycleBridge`] forwards them to a controller's
//! play/pause. Subscriptions are explicit RAII handles released on drop on
//! all exit paths.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::controller::PlaybackController;
use crate::types::LifecycleScope;

/// App-lifecycle transition delivered by the embedding platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// The application became active (foreground)
    BecameActive,

    /// The application is about to resign active (background)
    WillResignActive,
}

type Observer = Box<dyn FnMut(LifecycleSignal)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: Vec<(u64, Observer)>,
    /// Ids unsubscribed while the observer list was checked out by a
    /// delivery in flight
    tombstones: Vec<u64>,
}

/// Single-threaded registry of lifecycle observers
///
/// Clones share one registry. [`LifecycleHub::post`] delivers the signal
/// to every observer alive at the time of the call, each exactly once, on
/// the posting thread. Observers may subscribe or unsubscribe during a
/// delivery without affecting that delivery.
#[derive(Clone, Default)]
pub struct LifecycleHub {
    registry: Rc<RefCell<Registry>>,
}

impl LifecycleHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer
    ///
    /// The observer stays registered until the returned subscription is
    /// dropped.
    pub fn subscribe(
        &self,
        observer: impl FnMut(LifecycleSignal) + 'static,
    ) -> LifecycleSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.observers.push((id, Box::new(observer)));

        LifecycleSubscription {
            registry: Rc::clone(&self.registry),
            id,
        }
    }

    /// Deliver `signal` to every current observer
    pub fn post(&self, signal: LifecycleSignal) {
        // Check the observer list out of the registry so observers may
        // subscribe or unsubscribe mid-delivery without a re-borrow.
        let mut observers = std::mem::take(&mut self.registry.borrow_mut().observers);

        for (_, observer) in &mut observers {
            observer(signal);
        }

        let mut registry = self.registry.borrow_mut();
        let tombstones = std::mem::take(&mut registry.tombstones);
        observers.retain(|(id, _)| !tombstones.contains(id));
        // Observers added during delivery landed in the registry; keep them.
        observers.append(&mut registry.observers);
        registry.observers = observers;
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().observers.len()
    }
}

/// Handle to a hub registration
///
/// Dropping the handle unsubscribes the observer; no weak references are
/// involved.
pub struct LifecycleSubscription {
    registry: Rc<RefCell<Registry>>,
    id: u64,
}

impl Drop for LifecycleSubscription {
    fn drop(&mut self) {
        let mut registry = self.registry.borrow_mut();
        let before = registry.observers.len();
        registry.observers.retain(|(id, _)| *id != self.id);
        if registry.observers.len() == before {
            // The observer list is checked out by a delivery in flight.
            registry.tombstones.push(self.id);
        }
    }
}

/// Forwards hub signals into a shared controller's play/pause
///
/// Subscribes once at construction; dropping the bridge tears the
/// subscription down. Forwarding is unconditional under
/// [`LifecycleScope::Global`] (the player need not be the visible screen)
/// and gated on the controller's visibility flag under
/// [`LifecycleScope::VisibleOnly`].
pub struct LifecycleBridge {
    _subscription: LifecycleSubscription,
}

impl LifecycleBridge {
    /// Subscribe `player` to `hub`
    pub fn install(hub: &LifecycleHub, player: Rc<RefCell<PlaybackController>>) -> Self {
        let subscription = hub.subscribe(move |signal| {
            let mut player = player.borrow_mut();
            if player.config().lifecycle_scope == LifecycleScope::VisibleOnly
                && !player.is_visible()
            {
                debug!(?signal, "lifecycle signal ignored while not visible");
                return;
            }
            match signal {
                LifecycleSignal::BecameActive => player.play(),
                LifecycleSignal::WillResignActive => player.pause(),
            }
        });

        Self {
            _subscription: subscription,
        }
    }
}
