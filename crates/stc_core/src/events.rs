//! Pointer events and hit regions
//!
//! Components never perform hit-testing themselves. The host framework
//! describes where a component was rendered through a [`HitRegion`], and
//! forwards pointer events with logical coordinates.

use serde::Serialize;
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};

/// A point in logical coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of a rendered element
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Bounds {
    /// X position (absolute, after layout)
    pub x: f32,
    /// Y position (absolute, after layout)
    pub y: f32,
    /// Computed width
    pub width: f32,
    /// Computed height
    pub height: f32,
}

impl Bounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside the bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// A pointer interaction forwarded by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    /// A click at `(x, y)`
    pub fn click(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// Region test for "did this interaction originate inside my rendered area"
pub trait HitRegion: Send + Sync {
    fn contains(&self, point: Point) -> bool;
}

impl HitRegion for Bounds {
    fn contains(&self, point: Point) -> bool {
        Bounds::contains(self, point.x, point.y)
    }
}

impl<F> HitRegion for F
where
    F: Fn(Point) -> bool + Send + Sync,
{
    fn contains(&self, point: Point) -> bool {
        self(point)
    }
}

/// Bounds updated by the host after each layout pass
///
/// A component region usually spans the trigger and the open dropdown, so
/// the host may record several rectangles.
#[derive(Clone, Debug, Default)]
pub struct SharedBounds {
    rects: Arc<RwLock<SmallVec<[Bounds; 2]>>>,
}

impl SharedBounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recorded rectangles
    pub fn set(&self, rects: impl IntoIterator<Item = Bounds>) {
        *self.rects.write().unwrap() = rects.into_iter().collect();
    }

    /// Current rectangles
    pub fn get(&self) -> Vec<Bounds> {
        self.rects.read().unwrap().to_vec()
    }
}

impl HitRegion for SharedBounds {
    fn contains(&self, point: Point) -> bool {
        self.rects
            .read()
            .unwrap()
            .iter()
            .any(|b| b.contains(point.x, point.y))
    }
}

/// Callback for focus management
/// Called with Some(id) to focus an element, None to clear focus
pub type FocusCallback = Arc<dyn Fn(Option<&str>) + Send + Sync>;
