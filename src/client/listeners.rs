//! Listeners - subscription registry for change notifications.
//!
//! Callbacks are invoked synchronously, in registration order, on the
//! thread that calls `emit`.

use std::sync::Arc;

use parking_lot::RwLock;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by `Listeners::on`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct Listeners<T> {
    inner: RwLock<Registry<T>>,
}

struct Registry<T> {
    next_id: u64,
    callbacks: Vec<(ListenerId, Callback<T>)>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry {
                next_id: 0,
                callbacks: Vec::new(),
            }),
        }
    }

    /// Register a callback. It stays registered until `off` is called with
    /// the returned id.
    pub fn on<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut registry = self.inner.write();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.callbacks.push((id, Arc::new(listener)));
        id
    }

    /// Unregister a callback. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut registry = self.inner.write();
        let before = registry.callbacks.len();
        registry.callbacks.retain(|(existing, _)| *existing != id);
        registry.callbacks.len() != before
    }

    /// Call every registered callback with `value`.
    ///
    /// The registry is not locked while callbacks run, so a callback may
    /// subscribe or unsubscribe.
    pub fn emit(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .inner
            .read()
            .callbacks
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
