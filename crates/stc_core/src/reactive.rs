//! Versioned reactive signals
//!
//! Signals hold a type-erased value and a version counter bumped on every
//! `set`. Readers compare versions to notice changes.
//!
//! # State
//!
//! The [`State<T>`] type wraps a signal with thread-safe access to a shared
//! graph. Components accept a `State<T>` when the host owns the value
//! (controlled mode).
//!
//! ```ignore
//! use stc_core::reactive::StateScope;
//!
//! let scope = StateScope::new();
//! let fruit = scope.use_state_keyed("fruit", || "apple".to_string());
//!
//! fruit.set("banana".to_string());
//! assert_eq!(fruit.get(), "banana");
//! ```

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::any::{Any, TypeId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Slot of a signal in its graph
    pub struct SignalId;
}

/// Typed handle to a signal; `Copy` regardless of `T`
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    pub fn id(&self) -> SignalId {
        self.id
    }
}

struct SignalNode {
    value: Box<dyn Any + Send>,
    /// Bumped on every `set`
    version: u64,
}

/// The reactive graph that owns all signals
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
        }
    }

    // =========================================================================
    // SIGNALS
    // =========================================================================

    /// Store `initial` in a new signal
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
        });
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Clone of the value, `None` if `signal` is not in this graph
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal and bump its version
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        if let Some(node) = self.signals.get_mut(signal.id) {
            node.value = Box::new(value);
            node.version += 1;
        }
    }

    /// Replace the value with `f(old)`
    pub fn update<T: Clone + Send + 'static, F: FnOnce(T) -> T>(
        &mut self,
        signal: Signal<T>,
        f: F,
    ) {
        if let Some(current) = self.get(signal) {
            self.set(signal, f(current));
        }
    }

    /// Number of `set` calls seen by the signal
    pub fn signal_version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|n| n.version)
    }

    /// Number of live signals
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Graph shared between state handles
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Shared dirty flag set when a change requires the host to re-render
pub type DirtyFlag = Arc<AtomicBool>;

/// Handle to one value in a shared graph
///
/// This is the handle components accept for controlled values. Cloning a
/// `State` yields another handle to the same signal.
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    reactive: SharedReactiveGraph,
    dirty_flag: DirtyFlag,
}

impl<T> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("signal", &self.signal.id)
            .finish()
    }
}

impl<T: Clone + Send + 'static> State<T> {
    pub fn new(signal: Signal<T>, reactive: SharedReactiveGraph, dirty_flag: DirtyFlag) -> Self {
        Self {
            signal,
            reactive,
            dirty_flag,
        }
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.try_get().unwrap_or_default()
    }

    /// Get the current value, or None when the signal belongs to another graph
    pub fn try_get(&self) -> Option<T> {
        self.reactive.lock().unwrap().get(self.signal)
    }

    /// Set a new value without requesting a re-render
    pub fn set(&self, value: T) {
        self.reactive.lock().unwrap().set(self.signal, value);
    }

    /// Set a new value AND mark the host dirty
    pub fn set_rebuild(&self, value: T) {
        self.set(value);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Replace the value with `f(old)`
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.reactive.lock().unwrap().update(self.signal, f);
    }

    /// Current version of the underlying signal
    pub fn version(&self) -> u64 {
        self.reactive
            .lock()
            .unwrap()
            .signal_version(self.signal.id())
            .unwrap_or_default()
    }

    /// Get the underlying signal
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }

    /// Get the signal ID
    pub fn signal_id(&self) -> SignalId {
        self.signal.id()
    }
}

/// Name and value type of a keyed state
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    name: String,
    type_id: TypeId,
}

impl StateKey {
    pub fn new<T: 'static>(name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_id: TypeId::of::<T>(),
        }
    }
}

/// Owner of a reactive graph plus keyed state storage
///
/// Hosts create one scope per view tree; keyed state survives rebuilds
/// because the same key always returns the same signal.
#[derive(Clone, Default)]
pub struct StateScope {
    reactive: SharedReactiveGraph,
    dirty_flag: DirtyFlag,
    keyed: Arc<Mutex<FxHashMap<StateKey, SignalId>>>,
}

impl StateScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unkeyed state value
    pub fn use_state<T: Clone + Send + 'static>(&self, initial: T) -> State<T> {
        let signal = self.reactive.lock().unwrap().create_signal(initial);
        State::new(signal, self.reactive.clone(), self.dirty_flag.clone())
    }

    /// Get or create a state value identified by `key`
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::new::<T>(key);
        let mut keyed = self.keyed.lock().unwrap();
        let mut graph = self.reactive.lock().unwrap();

        if let Some(&id) = keyed.get(&state_key) {
            if graph.signal_version(id).is_some() {
                let signal = Signal {
                    id,
                    _marker: std::marker::PhantomData,
                };
                return State::new(signal, self.reactive.clone(), self.dirty_flag.clone());
            }
        }

        let signal = graph.create_signal(init());
        keyed.insert(state_key, signal.id());
        State::new(signal, self.reactive.clone(), self.dirty_flag.clone())
    }

    /// Return and clear the dirty flag
    pub fn take_dirty(&self) -> bool {
        self.dirty_flag.swap(false, Ordering::SeqCst)
    }

    /// The shared graph backing this scope
    pub fn graph(&self) -> SharedReactiveGraph {
        self.reactive.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bumps_version() {
        let mut graph = ReactiveGraph::new();
        let label = graph.create_signal("a".to_string());

        assert_eq!(graph.signal_version(label.id()), Some(0));
        graph.set(label, "b".to_string());
        graph.update(label, |s| s + "c");

        assert_eq!(graph.get(label).as_deref(), Some("bc"));
        assert_eq!(graph.signal_version(label.id()), Some(2));
    }

    #[test]
    fn test_foreign_signal_reads_none() {
        let mut a = ReactiveGraph::new();
        let mut b = ReactiveGraph::new();
        let first = a.create_signal(1u32);
        b.create_signal(2u32);
        let second = a.create_signal(3u32);

        assert_eq!(a.get(first), Some(1));
        assert_eq!(b.get(second), None);
    }

    #[test]
    fn test_state_handles_share_value() {
        let scope = StateScope::new();
        let a = scope.use_state(vec![1u8]);
        let b = a.clone();

        b.update(|mut v| {
            v.push(2);
            v
        });
        assert_eq!(a.get(), vec![1, 2]);
        assert_eq!(a.version(), 1);
        assert_eq!(scope.graph().lock().unwrap().len(), 1);
    }

    #[test]
    fn test_state_keyed_returns_same_signal() {
        let scope = StateScope::new();

        let a = scope.use_state_keyed("fruit", || "apple".to_string());
        a.set("banana".to_string());

        let b = scope.use_state_keyed("fruit", || "cherry".to_string());
        assert_eq!(b.get(), "banana");
        assert_eq!(a.signal_id(), b.signal_id());
    }

    #[test]
    fn test_set_rebuild_marks_dirty() {
        let scope = StateScope::new();
        let state = scope.use_state(false);

        state.set(true);
        assert!(!scope.take_dirty());

        state.set_rebuild(false);
        assert!(scope.take_dirty());
        assert!(!scope.take_dirty());
    }
}
