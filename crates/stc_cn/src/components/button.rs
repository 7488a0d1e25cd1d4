//! Button component with variants, shapes and a loading indicator
//!
//! # Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! // Default button
//! cn::button("Save")
//!
//! // Primary button with a click handler
//! cn::button("Submit")
//!     .variant(ButtonVariant::Primary)
//!     .on_click(|| println!("Submitted!"))
//!
//! // Loading state with the spinner on the right
//! cn::button("Uploading")
//!     .loading(true)
//!     .loading_position(LoaderPosition::Right)
//!
//! // Rendered inside a link
//! cn::button("Docs").href("https://example.com/docs")
//! ```

use serde::Serialize;
use std::sync::Arc;

use stc_core::{AriaAttributes, Role};

use super::spinner::{Spinner, SpinnerView};
use crate::size::ComponentSize;

/// Button visual variants
///
/// A button without a variant uses the default bordered style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the primary color
    Primary,
    /// Dashed border
    Dashed,
    /// Looks like a link
    Link,
    /// Text only, no border
    Text,
}

/// Button outline shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    Circle,
    Pill,
}

/// Side of the label the loading indicator sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderPosition {
    #[default]
    Left,
    Right,
}

/// What a loading button shows next to its label
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LoaderView {
    Spinner(SpinnerView),
    Custom { content: String },
}

/// Render description of a [`Button`]
#[derive(Clone, Debug, Serialize)]
pub struct ButtonView {
    pub label: String,
    pub variant: Option<ButtonVariant>,
    pub size: ComponentSize,
    pub shape: Option<ButtonShape>,
    pub disabled: bool,
    pub loading: bool,
    pub loader_position: LoaderPosition,
    pub loader: Option<LoaderView>,
    /// Anchor wrapping the button
    pub href: Option<String>,
    pub attrs: AriaAttributes,
}

/// Click handler
pub type ClickCallback = Arc<dyn Fn() + Send + Sync>;

/// Button component
#[derive(Clone, Default)]
pub struct Button {
    label: String,
    variant: Option<ButtonVariant>,
    size: ComponentSize,
    shape: Option<ButtonShape>,
    disabled: bool,
    loading: bool,
    loader_position: LoaderPosition,
    loading_content: Option<String>,
    spinner: Spinner,
    href: Option<String>,
    aria_label: Option<String>,
    on_click: Option<ClickCallback>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_position(mut self, position: LoaderPosition) -> Self {
        self.loader_position = position;
        self
    }

    /// Replace the default spinner with custom content
    pub fn loading_content(mut self, content: impl Into<String>) -> Self {
        self.loading_content = Some(content.into());
        self
    }

    /// Configure the default spinner
    pub fn spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self
    }

    /// Wrap the button in a link
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Activate the button; disabled buttons swallow the click
    pub fn click(&self) -> bool {
        if self.disabled {
            tracing::trace!(label = %self.label, "click ignored on disabled button");
            return false;
        }
        if let Some(ref on_click) = self.on_click {
            on_click();
        }
        true
    }

    pub fn view(&self) -> ButtonView {
        let loader = self.loading.then(|| match self.loading_content {
            Some(ref content) => LoaderView::Custom {
                content: content.clone(),
            },
            None => LoaderView::Spinner(self.spinner.view()),
        });

        ButtonView {
            label: self.label.clone(),
            variant: self.variant,
            size: self.size,
            shape: self.shape,
            disabled: self.disabled,
            loading: self.loading,
            loader_position: self.loader_position,
            loader,
            href: self.href.clone(),
            attrs: AriaAttributes::with_role(Role::Button)
                .flag("disabled", self.disabled)
                .attr_opt("aria-label", self.aria_label.clone()),
        }
    }
}

/// Create a button with the given label
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}
