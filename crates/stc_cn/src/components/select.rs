//! Select component for single and multi value selection
//!
//! A headless select/combobox. [`SelectEngine`] is the interaction state
//! machine (open state, selection, search text, clear). [`Select`] wraps an
//! engine with an instance id, a hit region for click-outside dismissal and
//! focus management, and produces a serializable [`SelectView`] for the host
//! to render.
//!
//! # Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! let document = Document::new();
//! let bounds = SharedBounds::new();
//!
//! let mut fruit = cn::select([
//!         SelectOption::new("apple", "Apple"),
//!         SelectOption::new("banana", "Banana"),
//!     ])
//!     .searchable(true)
//!     .allow_clear(true)
//!     .placeholder("Choose a fruit...")
//!     .region(bounds.clone())
//!     .on_change(|value| println!("Selected: {:?}", value))
//!     .build()?;
//!
//! fruit.mount(&document);
//! fruit.click_trigger();
//! fruit.select("banana");
//! ```

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use stc_core::{
    next_instance_id, AriaAttributes, Document, FocusCallback, HitRegion, InstanceId,
    ListenerHandle, Point, Role, State,
};
use stc_icons::IconName;

use crate::error::Result;
use crate::size::ComponentSize;

// =============================================================================
// Values and options
// =============================================================================

/// Current selection; the shape is fixed by the select's `multi` flag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    Single(String),
    Multi(Vec<String>),
}

impl Default for SelectValue {
    fn default() -> Self {
        SelectValue::Single(String::new())
    }
}

impl SelectValue {
    /// Empty value of the given shape (`""` or `[]`)
    pub fn empty(multi: bool) -> Self {
        if multi {
            SelectValue::Multi(Vec::new())
        } else {
            SelectValue::Single(String::new())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(value) => value.is_empty(),
            SelectValue::Multi(values) => values.is_empty(),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, SelectValue::Multi(_))
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            SelectValue::Single(selected) => !selected.is_empty() && selected == value,
            SelectValue::Multi(selected) => selected.iter().any(|v| v == value),
        }
    }

    /// The selected value of a non-empty single selection
    pub fn as_single(&self) -> Option<&str> {
        match self {
            SelectValue::Single(value) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Selected values in order
    pub fn values(&self) -> Vec<&str> {
        match self {
            SelectValue::Single(value) if value.is_empty() => Vec::new(),
            SelectValue::Single(value) => vec![value.as_str()],
            SelectValue::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Convert to the given shape, keeping whatever fits
    fn into_shape(self, multi: bool) -> Self {
        match (self, multi) {
            (SelectValue::Single(value), true) if value.is_empty() => SelectValue::Multi(Vec::new()),
            (SelectValue::Single(value), true) => SelectValue::Multi(vec![value]),
            (SelectValue::Multi(values), false) => {
                SelectValue::Single(values.into_iter().next().unwrap_or_default())
            }
            (value, _) => value,
        }
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        SelectValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for SelectValue {
    fn from(values: Vec<String>) -> Self {
        SelectValue::Multi(values)
    }
}

/// An option in the select dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The value (reported when selected)
    pub value: String,
    /// The display label, also used for filtering
    pub label: String,
}

impl SelectOption {
    /// Create a new option with value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Case-insensitive label match against an already lowercased query
    fn matches(&self, query_lower: &str) -> bool {
        query_lower.is_empty() || self.label.to_lowercase().contains(query_lower)
    }
}

/// User-facing strings of a select
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectTexts {
    pub placeholder: String,
    pub search_placeholder: String,
    pub no_options_text: String,
    pub clear_label: String,
    pub deselect_prefix: String,
}

impl Default for SelectTexts {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            search_placeholder: "Search...".to_string(),
            no_options_text: "No options available".to_string(),
            clear_label: "Clear selection".to_string(),
            deselect_prefix: "Deselect".to_string(),
        }
    }
}

/// Callback receiving the new selection
pub type SelectChangeCallback = Arc<dyn Fn(&SelectValue) + Send + Sync>;

// =============================================================================
// Engine
// =============================================================================

/// What the trigger area shows
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayContent {
    /// The user typed a search and nothing is selected
    None,
    /// Nothing selected
    Placeholder { text: String },
    /// Searchable single select with a value; the search field shows its label
    SearchField,
    /// Multi select tags
    Tags { tags: Vec<TagView> },
    /// Label of the single selected option
    Single { label: String },
}

/// A selected value shown as a removable tag
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TagView {
    pub value: String,
    pub label: String,
    /// Accessible text of the tag's remove button
    pub deselect_text: String,
    pub icon: IconName,
}

/// Select interaction state machine
///
/// Every entry point is synchronous. Disabled selects ignore all
/// interaction. Change callbacks run while the engine is borrowed, so they
/// must not call back into the same engine.
pub struct SelectEngine {
    options: Vec<SelectOption>,
    multi: bool,
    searchable: bool,
    allow_clear: bool,
    disabled: bool,
    is_open: bool,
    search: String,
    internal: SelectValue,
    external: Option<State<SelectValue>>,
    on_change: Option<SelectChangeCallback>,
}

impl std::fmt::Debug for SelectEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectEngine")
            .field("options", &self.options.len())
            .field("multi", &self.multi)
            .field("searchable", &self.searchable)
            .field("is_open", &self.is_open)
            .field("search", &self.search)
            .field("internal", &self.internal)
            .field("controlled", &self.external.is_some())
            .finish()
    }
}

impl SelectEngine {
    /// Create an engine over `options`
    pub fn new(options: impl IntoIterator<Item = SelectOption>, multi: bool) -> Self {
        Self {
            options: options.into_iter().collect(),
            multi,
            searchable: false,
            allow_clear: false,
            disabled: false,
            is_open: false,
            search: String::new(),
            internal: SelectValue::empty(multi),
            external: None,
            on_change: None,
        }
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Initial uncontrolled value
    pub fn default_value(mut self, value: SelectValue) -> Self {
        self.internal = value.into_shape(self.multi);
        self
    }

    /// Supply an externally owned (controlled) value
    pub fn value_state(mut self, state: &State<SelectValue>) -> Self {
        self.external = Some(state.clone());
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SelectValue) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace the option list
    pub fn set_options(&mut self, options: impl IntoIterator<Item = SelectOption>) {
        self.options = options.into_iter().collect();
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn allows_clear(&self) -> bool {
        self.allow_clear
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Enable or disable; disabling closes the dropdown
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.is_open {
            self.close();
        }
    }

    /// Effective selection: the controlled value when supplied and non-empty,
    /// otherwise the internal copy
    pub fn selection(&self) -> SelectValue {
        self.external
            .as_ref()
            .and_then(State::try_get)
            .filter(|value| !value.is_empty())
            .map(|value| value.into_shape(self.multi))
            .unwrap_or_else(|| self.internal.clone())
    }

    /// Label of the option with `value`
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selection().contains(&option.value)
    }

    /// Options whose label contains the search text, case-insensitively,
    /// in their original order
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        let query = self.search.to_lowercase();
        let filtered: Vec<&SelectOption> =
            self.options.iter().filter(|o| o.matches(&query)).collect();
        tracing::trace!(
            query = %self.search,
            matched = filtered.len(),
            total = self.options.len(),
            "select options filtered"
        );
        filtered
    }

    /// Open the dropdown; returns false when disabled
    pub fn open(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        if !self.is_open {
            tracing::debug!("select opened");
        }
        self.is_open = true;
        true
    }

    /// Flip the dropdown; returns the new open state
    pub fn toggle(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        if self.is_open {
            self.close();
        } else {
            self.is_open = true;
        }
        tracing::debug!(open = self.is_open, "select toggled");
        self.is_open
    }

    /// Close the dropdown and put the selected label back in the search field
    fn close(&mut self) {
        self.is_open = false;
        self.sync_search_with_selection();
    }

    /// Trigger click: searchable selects open, others toggle
    ///
    /// Returns true when the dropdown ended up open.
    pub fn activate(&mut self) -> bool {
        if self.searchable {
            self.open()
        } else {
            self.toggle()
        }
    }

    /// Search text edited by the user
    ///
    /// In a searchable single select typing invalidates the previous pick.
    pub fn on_search_text_changed(&mut self, text: &str) {
        if self.disabled {
            return;
        }
        self.search = text.to_string();
        if self.searchable && !self.multi {
            self.emit(SelectValue::Single(String::new()));
        }
    }

    /// Select (or in multi mode toggle) an option
    pub fn select_option(&mut self, option: &SelectOption) -> bool {
        if self.disabled {
            return false;
        }

        if self.multi {
            let mut values: Vec<String> = self
                .selection()
                .values()
                .into_iter()
                .map(str::to_string)
                .collect();
            match values.iter().position(|v| *v == option.value) {
                Some(index) => {
                    values.remove(index);
                }
                None => values.push(option.value.clone()),
            }
            self.emit(SelectValue::Multi(values));
            self.search.clear();
        } else {
            self.emit(SelectValue::Single(option.value.clone()));
            self.search = if self.searchable {
                option.label.clone()
            } else {
                String::new()
            };
            self.is_open = false;
        }
        true
    }

    /// Select the option with `value`; false when no such option exists
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().find(|o| o.value == value).cloned() {
            Some(option) => self.select_option(&option),
            None => {
                tracing::debug!(value, "select ignored unknown value");
                false
            }
        }
    }

    /// Remove a tag in multi mode without opening the dropdown
    pub fn remove_tag(&mut self, value: &str) -> bool {
        if self.disabled || !self.multi {
            return false;
        }
        let selection = self.selection();
        if !selection.contains(value) {
            return false;
        }
        let values = selection
            .values()
            .into_iter()
            .filter(|v| *v != value)
            .map(str::to_string)
            .collect();
        self.emit(SelectValue::Multi(values));
        true
    }

    /// Clear the selection; needs `allow_clear` and a non-empty selection
    pub fn clear_all(&mut self) -> bool {
        if self.disabled || !self.allow_clear || self.selection().is_empty() {
            return false;
        }
        if self.searchable {
            self.search.clear();
        }
        tracing::debug!("select cleared");
        self.emit(SelectValue::empty(self.multi));
        true
    }

    /// Pointer interaction outside the component while open
    pub fn handle_outside_interaction(&mut self) {
        if !self.is_open {
            return;
        }
        self.close();
        tracing::debug!(search = %self.search, "select dismissed by outside click");
    }

    /// Show the selected label in the search field of a searchable single
    /// select, or clear the search text otherwise
    pub fn sync_search_with_selection(&mut self) {
        let label = match self.selection() {
            SelectValue::Single(value) if self.searchable && !value.is_empty() => {
                Some(self.label_for(&value).unwrap_or_default().to_string())
            }
            _ => None,
        };
        self.search = label.unwrap_or_default();
    }

    /// What the trigger shows
    pub fn display_content(&self, texts: &SelectTexts) -> DisplayContent {
        let selection = self.selection();

        if !self.search.is_empty() && selection.is_empty() {
            return DisplayContent::None;
        }
        if selection.is_empty() {
            return DisplayContent::Placeholder {
                text: texts.placeholder.clone(),
            };
        }
        if self.searchable && !self.multi {
            return DisplayContent::SearchField;
        }

        match selection {
            SelectValue::Multi(values) => DisplayContent::Tags {
                tags: values
                    .into_iter()
                    .map(|value| {
                        let label = self.label_for(&value).unwrap_or_default().to_string();
                        TagView {
                            deselect_text: format!("{} {}", texts.deselect_prefix, label),
                            value,
                            label,
                            icon: IconName::Close,
                        }
                    })
                    .collect(),
            },
            SelectValue::Single(value) => DisplayContent::Single {
                label: self.label_for(&value).unwrap_or_default().to_string(),
            },
        }
    }

    fn emit(&mut self, value: SelectValue) {
        tracing::debug!(value = ?value, "select value changed");
        self.internal = value.clone();
        if let Some(ref callback) = self.on_change {
            callback(&value);
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// Icon at the end of the trigger
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrailingIcon {
    /// Clear button
    Clear { icon: IconName, label: String },
    /// Dropdown caret
    Caret { icon: IconName },
}

/// Search text field inside the trigger
#[derive(Clone, Debug, Serialize)]
pub struct SearchFieldView {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub attrs: AriaAttributes,
}

/// One row of the listbox
#[derive(Clone, Debug, Serialize)]
pub struct OptionView {
    pub id: String,
    pub value: String,
    pub label: String,
    pub selected: bool,
    /// Check mark for selected rows of a multi select
    pub check: Option<IconName>,
    pub attrs: AriaAttributes,
}

/// The dropdown list
#[derive(Clone, Debug, Serialize)]
pub struct ListboxView {
    pub id: String,
    pub attrs: AriaAttributes,
    pub options: Vec<OptionView>,
    /// Shown instead of rows when nothing matches
    pub empty_text: Option<String>,
}

/// Render description of a [`Select`]
#[derive(Clone, Debug, Serialize)]
pub struct SelectView {
    pub id: String,
    pub size: ComponentSize,
    pub loading: bool,
    pub disabled: bool,
    pub multi: bool,
    pub searchable: bool,
    pub open: bool,
    pub trigger: AriaAttributes,
    pub display: DisplayContent,
    pub search: Option<SearchFieldView>,
    pub trailing: TrailingIcon,
    pub listbox: ListboxView,
}

// =============================================================================
// Mounted select
// =============================================================================

/// Select component
///
/// Holds its engine behind a shared lock so the document listener installed
/// by [`Select::mount`] can dismiss it.
pub struct Select {
    id: InstanceId,
    engine: Arc<Mutex<SelectEngine>>,
    region: Option<Arc<dyn HitRegion>>,
    on_focus: Option<FocusCallback>,
    listener: Option<ListenerHandle>,
    texts: SelectTexts,
    size: ComponentSize,
    loading: bool,
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("mounted", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Select {
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    /// Id of the dropdown list
    pub fn listbox_id(&self) -> String {
        format!("listbox-{}", self.id)
    }

    /// Id of the search field
    pub fn search_id(&self) -> String {
        self.id.child("search")
    }

    /// Id of an option row
    pub fn option_id(&self, value: &str) -> String {
        self.id.child(&format!("option-{}", value))
    }

    /// Lock the engine for direct access
    pub fn engine(&self) -> MutexGuard<'_, SelectEngine> {
        self.engine.lock().unwrap()
    }

    pub fn texts(&self) -> &SelectTexts {
        &self.texts
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Register the outside-click listener and sync the search text
    pub fn mount(&mut self, document: &Document) {
        self.engine().sync_search_with_selection();

        let Some(region) = self.region.clone() else {
            tracing::warn!(select = %self.id, "select mounted without a hit region; outside clicks are not detected");
            return;
        };

        let engine = Arc::clone(&self.engine);
        let id = self.id.clone();
        let handle = document.add_click_listener(move |event| {
            if region.contains(event.position) {
                return;
            }
            let mut engine = engine.lock().unwrap();
            if engine.is_open() {
                tracing::trace!(select = %id, "outside click");
                engine.handle_outside_interaction();
            }
        });
        self.listener = Some(handle);
        tracing::debug!(select = %self.id, "select mounted");
    }

    /// Remove the outside-click listener
    pub fn unmount(&mut self) {
        if self.listener.take().is_some() {
            tracing::debug!(select = %self.id, "select unmounted");
        }
    }

    /// Whether `point` is inside the rendered region
    pub fn contains(&self, point: Point) -> bool {
        self.region
            .as_ref()
            .map_or(false, |region| region.contains(point))
    }

    /// Open the dropdown, focusing the search field when searchable
    pub fn open(&self) -> bool {
        let (opened, searchable) = {
            let mut engine = self.engine();
            (engine.open(), engine.is_searchable())
        };
        if opened && searchable {
            self.focus_search();
        }
        opened
    }

    /// Flip the dropdown
    pub fn toggle(&self) -> bool {
        self.engine().toggle()
    }

    /// Click on the trigger
    pub fn click_trigger(&self) -> bool {
        let (open, searchable) = {
            let mut engine = self.engine();
            (engine.activate(), engine.is_searchable())
        };
        if open && searchable {
            self.focus_search();
        }
        open
    }

    pub fn search(&self, text: &str) {
        self.engine().on_search_text_changed(text);
    }

    pub fn select(&self, value: &str) -> bool {
        self.engine().select_value(value)
    }

    pub fn remove_tag(&self, value: &str) -> bool {
        self.engine().remove_tag(value)
    }

    pub fn clear(&self) -> bool {
        self.engine().clear_all()
    }

    pub fn is_open(&self) -> bool {
        self.engine().is_open()
    }

    pub fn selection(&self) -> SelectValue {
        self.engine().selection()
    }

    pub fn search_text(&self) -> String {
        self.engine().search_text().to_string()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.engine().set_disabled(disabled);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn focus_search(&self) {
        if let Some(ref focus) = self.on_focus {
            focus(Some(&self.search_id()));
        }
    }

    /// Describe the select for rendering
    pub fn view(&self) -> SelectView {
        let engine = self.engine();
        let selection = engine.selection();
        let listbox_id = self.listbox_id();

        let trigger = AriaAttributes::with_role(Role::Combobox)
            .attr("id", self.id.as_str())
            .attr("aria-controls", listbox_id.as_str())
            .attr("aria-haspopup", "listbox")
            .attr("tabindex", "0")
            .flag("aria-expanded", engine.is_open())
            .flag("aria-disabled", engine.is_disabled())
            .attr_opt(
                "aria-activedescendant",
                selection.as_single().map(|value| self.option_id(value)),
            );

        let search = engine.is_searchable().then(|| {
            let show_placeholder = !engine.search_text().is_empty()
                || (engine.is_multi() && !selection.is_empty());
            SearchFieldView {
                id: self.search_id(),
                value: engine.search_text().to_string(),
                placeholder: if show_placeholder {
                    self.texts.search_placeholder.clone()
                } else {
                    String::new()
                },
                attrs: AriaAttributes::with_role(Role::Searchbox)
                    .flag("disabled", engine.is_disabled())
                    .flag("aria-disabled", engine.is_disabled()),
            }
        });

        let trailing = if engine.allows_clear() && !selection.is_empty() {
            TrailingIcon::Clear {
                icon: IconName::Close,
                label: self.texts.clear_label.clone(),
            }
        } else {
            TrailingIcon::Caret {
                icon: IconName::CaretDown,
            }
        };

        let options: Vec<OptionView> = engine
            .filtered_options()
            .into_iter()
            .map(|option| {
                let selected = selection.contains(&option.value);
                let id = self.option_id(&option.value);
                OptionView {
                    attrs: AriaAttributes::with_role(Role::Option)
                        .attr("id", id.as_str())
                        .attr("title", option.label.as_str())
                        .flag("aria-selected", selected),
                    id,
                    value: option.value.clone(),
                    label: option.label.clone(),
                    selected,
                    check: (engine.is_multi() && selected).then_some(IconName::Check),
                }
            })
            .collect();

        let listbox = ListboxView {
            attrs: AriaAttributes::with_role(Role::Listbox)
                .attr("id", listbox_id.as_str())
                .flag("aria-multiselectable", engine.is_multi())
                .flag("aria-hidden", !engine.is_open()),
            id: listbox_id,
            empty_text: options
                .is_empty()
                .then(|| self.texts.no_options_text.clone()),
            options,
        };

        SelectView {
            id: self.id.to_string(),
            size: self.size,
            loading: self.loading,
            disabled: engine.is_disabled(),
            multi: engine.is_multi(),
            searchable: engine.is_searchable(),
            open: engine.is_open(),
            trigger,
            display: engine.display_content(&self.texts),
            search,
            trailing,
            listbox,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Select`]
pub struct SelectBuilder {
    engine: SelectEngine,
    id: Option<String>,
    region: Option<Arc<dyn HitRegion>>,
    on_focus: Option<FocusCallback>,
    texts: SelectTexts,
    size: ComponentSize,
    loading: bool,
}

impl SelectBuilder {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            engine: SelectEngine::new(options, false),
            id: None,
            region: None,
            on_focus: None,
            texts: SelectTexts::default(),
            size: ComponentSize::default(),
            loading: false,
        }
    }

    /// Allow several values; fixes the selection shape
    pub fn multi(mut self, multi: bool) -> Self {
        self.engine.multi = multi;
        self.engine.internal = std::mem::take(&mut self.engine.internal).into_shape(multi);
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.engine = self.engine.searchable(searchable);
        self
    }

    pub fn allow_clear(mut self, allow_clear: bool) -> Self {
        self.engine = self.engine.allow_clear(allow_clear);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.engine = self.engine.disabled(disabled);
        self
    }

    pub fn default_value(mut self, value: impl Into<SelectValue>) -> Self {
        self.engine = self.engine.default_value(value.into());
        self
    }

    pub fn value_state(mut self, state: &State<SelectValue>) -> Self {
        self.engine = self.engine.value_state(state);
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SelectValue) + Send + Sync + 'static,
    {
        self.engine = self.engine.on_change(callback);
        self
    }

    /// Set the element id instead of generating `select-<n>`
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Region used to detect outside clicks
    pub fn region(mut self, region: impl HitRegion + 'static) -> Self {
        self.region = Some(Arc::new(region));
        self
    }

    /// Called with the search field id when a searchable select opens
    pub fn on_focus<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.on_focus = Some(Arc::new(callback));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.texts.placeholder = placeholder.into();
        self
    }

    pub fn texts(mut self, texts: SelectTexts) -> Self {
        self.texts = texts;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Build the select, generating an id when none was given
    pub fn build(self) -> Result<Select> {
        let id = match self.id {
            Some(id) => InstanceId::new(id),
            None => next_instance_id("select")?,
        };
        Ok(Select {
            id,
            engine: Arc::new(Mutex::new(self.engine)),
            region: self.region,
            on_focus: self.on_focus,
            listener: None,
            texts: self.texts,
            size: self.size,
            loading: self.loading,
        })
    }
}

/// Create a select over `options`
///
/// # Example
///
/// ```ignore
/// cn::select([SelectOption::new("1", "A"), SelectOption::new("2", "B")])
///     .multi(true)
///     .build()?
/// ```
pub fn select(options: impl IntoIterator<Item = SelectOption>) -> SelectBuilder {
    SelectBuilder::new(options)
}
