//! stc Core Runtime
//!
//! This crate provides the foundational primitives shared by the stc
//! component crates:
//!
//! - **Reactive State**: versioned signals with change subscriptions and the
//!   [`State<T>`] handle used for controlled component values
//! - **Document Listeners**: process-wide pointer listeners used for
//!   click-outside dismissal, registered on mount and removed on unmount
//! - **Hit Regions**: the "is this point inside my rendered region" capability
//!   delegated to the hosting framework
//! - **Accessibility**: ordered ARIA attribute sets exposed by component views
//!
//! # Example
//!
//! ```rust
//! use stc_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! let count = graph.create_signal(0i32);
//! graph.set(count, 5);
//! assert_eq!(graph.get(count), Some(5));
//! ```

pub mod a11y;
pub mod document;
pub mod error;
pub mod events;
pub mod id;
pub mod reactive;

pub use a11y::{AriaAttributes, Role};
pub use document::{Document, ListenerHandle, ListenerId, PointerListener};
pub use error::{CoreError, Result};
pub use events::{Bounds, FocusCallback, HitRegion, Point, PointerEvent, SharedBounds};
pub use id::{next_instance_id, InstanceId};
pub use reactive::{
    DirtyFlag, ReactiveGraph, SharedReactiveGraph, Signal, SignalId, State, StateKey, StateScope,
};
