//! Document-level pointer listeners
//!
//! A [`Document`] stands in for the host's window/document event target.
//! Components that dismiss on outside interaction register a listener when
//! they mount and drop the returned [`ListenerHandle`] when they unmount.
//!
//! ```ignore
//! let document = Document::new();
//! let handle = document.add_click_listener(|event| {
//!     println!("clicked at {:?}", event.position);
//! });
//!
//! document.dispatch_click(&PointerEvent::click(10.0, 10.0));
//! drop(handle); // deregistered
//! ```

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

use crate::error::{CoreError, Result};
use crate::events::PointerEvent;

new_key_type! {
    /// Identifier of a registered document listener
    pub struct ListenerId;
}

/// Listener invoked for every pointer click on the document
pub type PointerListener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    listeners: SlotMap<ListenerId, PointerListener>,
}

/// Process-wide event target shared by all mounted components
#[derive(Clone, Default)]
pub struct Document {
    registry: Arc<Mutex<Registry>>,
}

impl Document {
    /// Create a document with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click listener
    ///
    /// The listener stays registered until the returned handle is dropped
    /// or removed.
    #[must_use = "dropping the handle removes the listener"]
    pub fn add_click_listener<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&PointerEvent) + Send + Sync + 'static,
    {
        let id = self
            .registry
            .lock()
            .unwrap()
            .listeners
            .insert(Arc::new(listener));
        tracing::trace!(?id, "document listener registered");
        ListenerHandle {
            id: Some(id),
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a click to every registered listener
    ///
    /// Listeners are invoked outside the registry lock, so a listener may
    /// register or remove listeners while handling the event. Returns the
    /// number of listeners invoked.
    pub fn dispatch_click(&self, event: &PointerEvent) -> usize {
        let listeners: Vec<PointerListener> = self
            .registry
            .lock()
            .unwrap()
            .listeners
            .values()
            .cloned()
            .collect();
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.registry.lock().unwrap().listeners.len()
    }
}

/// Registration of a document listener; removes the listener on drop
pub struct ListenerHandle {
    id: Option<ListenerId>,
    registry: Weak<Mutex<Registry>>,
}

impl ListenerHandle {
    /// The listener's identifier
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Remove the listener, reporting why removal was not possible
    pub fn remove(mut self) -> Result<()> {
        let id = self.id.take().ok_or(CoreError::RegistryClosed)?;
        let registry = self.registry.upgrade().ok_or(CoreError::RegistryClosed)?;
        let removed = registry.lock().unwrap().listeners.remove(id);
        match removed {
            Some(_) => Ok(()),
            None => Err(CoreError::UnknownListener(format!("{:?}", id))),
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let (Some(id), Some(registry)) = (self.id.take(), self.registry.upgrade()) {
            if let Ok(mut registry) = registry.lock() {
                registry.listeners.remove(id);
                tracing::trace!(?id, "document listener removed");
            }
        }
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_dispatch_reaches_listeners() {
        let document = Document::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_a = hits.clone();
        let _a = document.add_click_listener(move |_| {
            hits_a.fetch_add(1, Ordering::SeqCst);
        });
        let hits_b = hits.clone();
        let _b = document.add_click_listener(move |_| {
            hits_b.fetch_add(10, Ordering::SeqCst);
        });

        assert_eq!(document.dispatch_click(&PointerEvent::click(0.0, 0.0)), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn test_drop_deregisters() {
        let document = Document::new();
        let handle = document.add_click_listener(|_| {});
        assert_eq!(document.listener_count(), 1);

        drop(handle);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.dispatch_click(&PointerEvent::click(0.0, 0.0)), 0);
    }

    #[test]
    fn test_remove_after_document_dropped() {
        let document = Document::new();
        let handle = document.add_click_listener(|_| {});
        drop(document);

        assert_eq!(handle.remove(), Err(CoreError::RegistryClosed));
    }

    #[test]
    fn test_explicit_remove() {
        let document = Document::new();
        let handle = document.add_click_listener(|_| {});
        assert!(handle.remove().is_ok());
        assert_eq!(document.listener_count(), 0);
    }
}
