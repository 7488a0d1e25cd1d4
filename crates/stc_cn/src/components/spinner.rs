//! Spinner component for loading states
//!
//! # Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! cn::spinner()
//!     .size(ComponentSize::Large)
//!     .speed(SpinSpeed::new(8)?)
//! ```

use serde::Serialize;

use crate::error::{ComponentError, Result};
use crate::size::ComponentSize;

/// Radius of the arc within the 100x100 view box
pub const ARC_RADIUS: f32 = 40.0;
/// Dash pattern producing the visible arc
pub const ARC_DASH_ARRAY: &str = "164.93361431346415 56.97787143782138";
/// Starting rotation of the arc in degrees
pub const ARC_ROTATION: f32 = 159.821;

/// Rotation speed, 1 (slowest) to 10 (fastest)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpinSpeed(u8);

impl SpinSpeed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(speed: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&speed) {
            Ok(Self(speed))
        } else {
            Err(ComponentError::InvalidSpinSpeed(speed))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for SpinSpeed {
    fn default() -> Self {
        Self(5)
    }
}

/// Spinner component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spinner {
    size: ComponentSize,
    speed: SpinSpeed,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn speed(mut self, speed: SpinSpeed) -> Self {
        self.speed = speed;
        self
    }

    /// SVG markup of the arc
    pub fn svg(&self) -> String {
        format!(
            r#"<svg width="16" height="16" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle cx="50" cy="50" fill="none" stroke="currentColor" stroke-width="var(--stroke-width)" r="{}" stroke-dasharray="{}" transform="rotate({} 50 50)"></circle></svg>"#,
            ARC_RADIUS, ARC_DASH_ARRAY, ARC_ROTATION
        )
    }

    pub fn view(&self) -> SpinnerView {
        SpinnerView {
            spin_speed: self.speed,
            size: self.size,
            svg: self.svg(),
        }
    }
}

/// Render description of a [`Spinner`]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpinnerView {
    #[serde(rename = "data-spin-speed")]
    pub spin_speed: SpinSpeed,
    #[serde(rename = "data-size")]
    pub size: ComponentSize,
    pub svg: String,
}

/// Create a spinner with default size and speed
pub fn spinner() -> Spinner {
    Spinner::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_speed_range() {
        assert_eq!(SpinSpeed::default().get(), 5);
        assert!(SpinSpeed::new(1).is_ok());
        assert!(SpinSpeed::new(10).is_ok());
        assert_eq!(SpinSpeed::new(0), Err(ComponentError::InvalidSpinSpeed(0)));
        assert_eq!(SpinSpeed::new(11), Err(ComponentError::InvalidSpinSpeed(11)));
    }

    #[test]
    fn test_spinner_view() {
        let view = spinner().size(ComponentSize::Small).view();
        assert!(view.svg.contains(r#"r="40""#));
        assert!(view.svg.contains(ARC_DASH_ARRAY));
        assert!(view.svg.contains("rotate(159.821 50 50)"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["data-spin-speed"], 5);
        assert_eq!(json["data-size"], "small");
    }
}
