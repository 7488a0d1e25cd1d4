use serde::{Deserialize, Serialize};

/// Size shared by every component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ComponentSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentSize::Small => "small",
            ComponentSize::Medium => "medium",
            ComponentSize::Large => "large",
        }
    }

    /// Pixel size used for icons inside a component of this size
    pub fn icon_px(&self) -> f32 {
        match self {
            ComponentSize::Small => 12.0,
            ComponentSize::Medium => 16.0,
            ComponentSize::Large => 20.0,
        }
    }
}

impl From<ComponentSize> for stc_widgets::InputSize {
    fn from(size: ComponentSize) -> Self {
        match size {
            ComponentSize::Small => stc_widgets::InputSize::Small,
            ComponentSize::Medium => stc_widgets::InputSize::Medium,
            ComponentSize::Large => stc_widgets::InputSize::Large,
        }
    }
}
