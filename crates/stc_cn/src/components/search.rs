//! Search box: a labelled text input with a submit button
//!
//! # Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! let mut search = cn::search()?
//!     .placeholder("Find a user")
//!     .primary(true)
//!     .on_search(|query| println!("searching for {}", query));
//!
//! search.input_mut().insert_text("ada");
//! search.submit();
//! ```

use serde::Serialize;
use std::sync::Arc;

use stc_core::{next_instance_id, AriaAttributes, InstanceId, Role};
use stc_widgets::{TextInput, TextInputConfig, TextInputView};

use super::button::{button, ButtonVariant, ButtonView};
use crate::error::Result;
use crate::size::ComponentSize;

/// Callback receiving the submitted query
pub type SearchCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Render description of a [`SearchBox`]
#[derive(Clone, Debug, Serialize)]
pub struct SearchView {
    /// Attributes of the enclosing form
    pub attrs: AriaAttributes,
    /// Input id the visually hidden label points at
    pub label_for: String,
    pub label_text: String,
    pub no_divider: bool,
    pub input: TextInputView,
    pub button: ButtonView,
}

/// Search box component
pub struct SearchBox {
    id: InstanceId,
    input: TextInput,
    size: ComponentSize,
    is_primary: bool,
    no_divider: bool,
    button_content: String,
    on_search: Option<SearchCallback>,
}

impl std::fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBox")
            .field("id", &self.id)
            .field("value", &self.input.value())
            .finish_non_exhaustive()
    }
}

impl SearchBox {
    /// Create a search box with a generated `search-input-<n>` id
    pub fn new() -> Result<Self> {
        Ok(Self::with_id(next_instance_id("search-input")?))
    }

    /// Create a search box with an explicit input id
    pub fn with_id(id: InstanceId) -> Self {
        let input = TextInput::with_config(TextInputConfig::new().id(id.as_str()));
        Self {
            id,
            input,
            size: ComponentSize::default(),
            is_primary: false,
            no_divider: false,
            button_content: "Search".to_string(),
            on_search: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input = self.rebuild_input(|config| config.placeholder(placeholder));
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self.input = self.rebuild_input(|config| config.size(size.into()));
        self
    }

    /// Use the primary button variant
    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Hide the divider between input and button
    pub fn no_divider(mut self, no_divider: bool) -> Self {
        self.no_divider = no_divider;
        self
    }

    pub fn button_content(mut self, content: impl Into<String>) -> Self {
        self.button_content = content.into();
        self
    }

    pub fn on_search<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_search = Some(Arc::new(f));
        self
    }

    fn rebuild_input(&self, f: impl FnOnce(TextInputConfig) -> TextInputConfig) -> TextInput {
        let config = f(self.input.config().clone()).value(self.input.value());
        TextInput::with_config(config)
    }

    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Submit the form, reporting the current query (empty when blank)
    pub fn submit(&self) -> String {
        let query = self.input.value().to_string();
        tracing::debug!(search = %self.id, query = %query, "search submitted");
        if let Some(ref on_search) = self.on_search {
            on_search(&query);
        }
        query
    }

    pub fn view(&self) -> SearchView {
        let mut submit = button(self.button_content.as_str()).size(self.size);
        if self.is_primary {
            submit = submit.variant(ButtonVariant::Primary);
        }

        SearchView {
            attrs: AriaAttributes::with_role(Role::Search),
            label_for: self.id.to_string(),
            label_text: "Search:".to_string(),
            no_divider: self.no_divider,
            input: self.input.view(),
            button: submit.view(),
        }
    }
}

/// Create a search box with a generated id
pub fn search() -> Result<SearchBox> {
    SearchBox::new()
}
