//! Single-line text input
//!
//! A [`TextInput`] pairs a [`TextInputConfig`] (type, adornments, number
//! constraints) with a [`TextInputState`] holding the value and an
//! anchor/caret selection measured in characters.
//!
//! Hosts deliver edits either as whole-value changes with a selection
//! ([`TextInput::handle_change`], matching a platform text field's change
//! event) or as key-level operations ([`TextInput::insert_text`],
//! [`TextInput::delete_backward`]). Both paths end in the same commit.
//!
//! A currency field is a text input with an injected [`CurrencyFormatter`]:
//!
//! ```ignore
//! let mut input = TextInput::with_config(TextInputConfig::new().step(5.0))
//!     .currency(CurrencyFormatter::new(CurrencyFormat::default()));
//! input.step(StepDirection::Up);
//! assert_eq!(input.value(), "5");
//! ```

use serde::Serialize;
use std::sync::Arc;

use stc_core::AriaAttributes;
use stc_icons::IconName;

use crate::currency::{CurrencyFormatter, CursorWindow};
use crate::error::{Result, WidgetError};

// =============================================================================
// Input types
// =============================================================================

/// Kind of value the field holds, named after the HTML input types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Password,
    Email,
    Tel,
    Url,
    Search,
}

impl InputType {
    /// Whether `c` may be typed into a field of this type
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputType::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            InputType::Tel => c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '),
            InputType::Email => !c.is_whitespace(),
            InputType::Url => !c.is_control() && c != ' ',
            InputType::Text | InputType::Password | InputType::Search => !c.is_control(),
        }
    }

    /// Problem with a complete, non-empty value, if any
    pub fn problem(&self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            return None;
        }
        let ok = match self {
            InputType::Number => value.parse::<f64>().is_ok(),
            InputType::Email => value
                .split_once('@')
                .is_some_and(|(user, host)| !user.is_empty() && host.contains('.') && !host.contains('@')),
            InputType::Url => value.starts_with("http://") || value.starts_with("https://"),
            _ => true,
        };
        (!ok).then(|| match self {
            InputType::Number => "Please enter a number",
            InputType::Email => "Please enter an email address",
            InputType::Url => "Please enter a URL",
            _ => "Invalid value",
        })
    }

    /// Password fields render their value masked
    pub fn is_masked(&self) -> bool {
        *self == InputType::Password
    }

    pub fn is_numeric(&self) -> bool {
        *self == InputType::Number
    }
}

/// Visual size of an input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Direction of a step button press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    /// Apply one step of `size` to `value`
    pub fn apply(self, value: f64, size: f64) -> f64 {
        match self {
            StepDirection::Up => value + size,
            StepDirection::Down => value - size,
        }
    }
}

/// `min`, `max` and `step` of numeric and currency fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct NumberConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Step size; also enables the step buttons
    pub step: Option<f64>,
}

impl NumberConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Lower bound, `-inf` when unset
    pub fn lower(&self) -> f64 {
        self.min.unwrap_or(f64::NEG_INFINITY)
    }

    /// Upper bound, `+inf` when unset
    pub fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    /// Whether `value` lies within the bounds
    pub fn contains(&self, value: f64) -> bool {
        (self.lower()..=self.upper()).contains(&value)
    }

    /// Pull `value` into the bounds like a native number field
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower()).min(self.upper())
    }

    /// Reject unusable constraints (non-positive step, inverted range)
    pub fn check(&self) -> Result<()> {
        match self.step {
            Some(step) if !(step.is_finite() && step > 0.0) => {
                return Err(WidgetError::InvalidStep(step.to_string()));
            }
            _ => {}
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(WidgetError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn out_of_range_message(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Enter a value from {} to {}", min, max),
            (Some(min), None) => format!("Enter a value of {} or more", min),
            (None, Some(max)) => format!("Enter a value of {} or less", max),
            (None, None) => "Invalid value".to_string(),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Static settings of a [`TextInput`]
#[derive(Clone, Debug, Default)]
pub struct TextInputConfig {
    pub id: Option<String>,
    pub placeholder: String,
    /// Value the field starts with
    pub value: String,
    pub input_type: InputType,
    pub number_constraints: NumberConstraints,
    pub size: InputSize,
    pub borderless: bool,
    /// Adornment rendered before the field
    pub prefix: Option<String>,
    /// Adornment rendered after the field
    pub suffix: Option<String>,
    pub disabled: bool,
    pub required: bool,
    /// Character limit, 0 for none
    pub max_length: usize,
}

impl TextInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn value(mut self, text: impl Into<String>) -> Self {
        self.value = text.into();
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Shorthand for `input_type(InputType::Number)`
    pub fn number(self) -> Self {
        self.input_type(InputType::Number)
    }

    /// Shorthand for `input_type(InputType::Password)`
    pub fn password(self) -> Self {
        self.input_type(InputType::Password)
    }

    pub fn min(mut self, min: f64) -> Self {
        self.number_constraints = self.number_constraints.min(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.number_constraints = self.number_constraints.max(max);
        self
    }

    /// Step size; shows step buttons on number and currency fields
    pub fn step(mut self, step: f64) -> Self {
        self.number_constraints = self.number_constraints.step(step);
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn borderless(mut self, borderless: bool) -> Self {
        self.borderless = borderless;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

// =============================================================================
// Editing state
// =============================================================================

/// Value and selection of a text field
///
/// The selection runs between `anchor` (where it started) and `caret`
/// (where the cursor is); both are character offsets. They are equal when
/// nothing is selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextInputState {
    pub value: String,
    anchor: usize,
    caret: usize,
    /// Message for the last failed validation
    pub error: Option<String>,
}

impl TextInputState {
    /// State with the caret after the last character
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let end = value.chars().count();
        Self {
            value,
            anchor: end,
            caret: end,
            error: None,
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Value parsed as a number
    pub fn number(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }

    /// Cursor position in characters
    pub fn caret(&self) -> usize {
        self.caret.min(self.len())
    }

    /// Selection ordered start to end, clamped to the current value
    pub fn selection_window(&self) -> CursorWindow {
        CursorWindow::new(self.anchor.min(self.caret), self.anchor.max(self.caret))
            .clamped(self.len())
    }

    /// Restore a selection, clamped to the value
    pub fn set_selection_range(&mut self, window: CursorWindow) {
        let window = window.clamped(self.len());
        self.anchor = window.start;
        self.caret = window.end;
    }

    pub fn has_selection(&self) -> bool {
        let window = self.selection_window();
        window.start != window.end
    }

    pub fn selected_text(&self) -> Option<&str> {
        if !self.has_selection() {
            return None;
        }
        let window = self.selection_window();
        Some(&self.value[self.byte_offset(window.start)..self.byte_offset(window.end)])
    }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.caret = self.len();
    }

    /// Collapse the selection to a caret after the last character
    pub fn caret_to_end(&mut self) {
        let end = self.len();
        self.anchor = end;
        self.caret = end;
    }

    /// Replace the characters in `start..end` and put the caret after the
    /// inserted text
    fn splice(&mut self, start: usize, end: usize, text: &str) {
        let range = self.byte_offset(start)..self.byte_offset(end);
        self.value.replace_range(range, text);
        self.caret = start + text.chars().count();
        self.anchor = self.caret;
    }

    /// Type `text` over the selection
    ///
    /// Characters `input_type` rejects are dropped, and the insertion is cut
    /// short at `max_length` characters (0 for no limit). Returns whether
    /// the value changed.
    pub fn replace_selection(&mut self, text: &str, input_type: InputType, max_length: usize) -> bool {
        let window = self.selection_window();
        let kept = self.len() - (window.end - window.start);
        let room = match max_length {
            0 => usize::MAX,
            limit => limit.saturating_sub(kept),
        };
        let typed: String = text.chars().filter(|c| input_type.accepts(*c)).take(room).collect();

        if typed.is_empty() && !self.has_selection() {
            return false;
        }
        self.splice(window.start, window.end, &typed);
        true
    }

    /// Backspace: remove the selection or the character before the caret
    pub fn delete_backward(&mut self) -> bool {
        let window = self.selection_window();
        match (self.has_selection(), window.start) {
            (true, _) => self.splice(window.start, window.end, ""),
            (false, 0) => return false,
            (false, at) => self.splice(at - 1, at, ""),
        }
        true
    }

    /// Delete key: remove the selection or the character after the caret
    pub fn delete_forward(&mut self) -> bool {
        let window = self.selection_window();
        if self.has_selection() {
            self.splice(window.start, window.end, "");
            return true;
        }
        if window.end >= self.len() {
            return false;
        }
        self.splice(window.end, window.end + 1, "");
        true
    }

    /// Re-run validation for the given settings
    pub fn validate(&mut self, config: &TextInputConfig) {
        self.error = if config.required && self.value.is_empty() {
            Some("This field is required".to_string())
        } else if let Some(problem) = config.input_type.problem(&self.value) {
            Some(problem.to_string())
        } else {
            match self.number() {
                Some(n) if config.input_type.is_numeric() && !config.number_constraints.contains(n) => {
                    Some(config.number_constraints.out_of_range_message())
                }
                _ => None,
            }
        };
    }
}

// =============================================================================
// Views
// =============================================================================

/// Callback receiving the committed text value
pub type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Up/down buttons rendered beside the field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepButtonsView {
    pub up_icon: IconName,
    pub down_icon: IconName,
    pub step: f64,
    pub disabled: bool,
}

/// Render description of a [`TextInput`]
#[derive(Clone, Debug, Serialize)]
pub struct TextInputView {
    pub id: Option<String>,
    pub input_type: InputType,
    pub value: String,
    pub placeholder: String,
    pub size: InputSize,
    pub borderless: bool,
    pub disabled: bool,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Adornments or step buttons need a wrapping element
    pub wrapper: bool,
    pub step_buttons: Option<StepButtonsView>,
    pub selection: CursorWindow,
    pub error: Option<String>,
    pub attrs: AriaAttributes,
}

// =============================================================================
// TextInput
// =============================================================================

/// Text field controller
pub struct TextInput {
    config: TextInputConfig,
    state: TextInputState,
    currency: Option<CurrencyFormatter>,
    on_change: Option<ChangeCallback>,
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInput")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self::with_config(TextInputConfig::default())
    }

    pub fn with_config(config: TextInputConfig) -> Self {
        Self {
            state: TextInputState::new(config.value.as_str()),
            config,
            currency: None,
            on_change: None,
        }
    }

    /// Called with the value after every accepted plain-text edit
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Route edits through a currency formatter
    ///
    /// The field type becomes text. The initial value is formatted without
    /// reporting a change.
    pub fn currency(mut self, mut formatter: CurrencyFormatter) -> Self {
        self.config.input_type = InputType::Text;
        self.state = TextInputState::new(formatter.reset(&self.state.value));
        self.currency = Some(formatter);
        self
    }

    pub fn config(&self) -> &TextInputConfig {
        &self.config
    }

    pub fn state(&self) -> &TextInputState {
        &self.state
    }

    /// Displayed value
    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn is_currency(&self) -> bool {
        self.currency.is_some()
    }

    pub fn currency_formatter(&self) -> Option<&CurrencyFormatter> {
        self.currency.as_ref()
    }

    /// A step is set and the field is a number or currency field
    pub fn show_step_buttons(&self) -> bool {
        self.config.number_constraints.step.is_some()
            && (self.config.input_type.is_numeric() || self.is_currency())
    }

    /// Prefix, suffix or step buttons are present
    pub fn has_wrapper(&self) -> bool {
        self.show_step_buttons() || self.config.prefix.is_some() || self.config.suffix.is_some()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Apply a whole-value change from the host
    ///
    /// `selection` is the host's selection after the edit. Returns false
    /// when the input is disabled.
    pub fn handle_change(&mut self, text: &str, selection: CursorWindow) -> bool {
        if self.config.disabled {
            tracing::trace!("change ignored on disabled input");
            return false;
        }

        if let Some(formatter) = self.currency.as_mut() {
            let edit = formatter.handle_edit(text, selection);
            // Display commits before the selection is restored against it
            self.state.value = edit.display;
            self.state.set_selection_range(edit.cursor);
            return true;
        }

        let input_type = self.config.input_type;
        let limit = match self.config.max_length {
            0 => usize::MAX,
            n => n,
        };
        self.state.value = text.chars().filter(|c| input_type.accepts(*c)).take(limit).collect();
        self.state.set_selection_range(selection);
        self.commit();
        true
    }

    /// Type `text` at the caret, replacing any selection
    pub fn insert_text(&mut self, text: &str) -> bool {
        // Currency fields filter in the formatter
        let input_type = if self.is_currency() {
            InputType::Text
        } else {
            self.config.input_type
        };
        let max_length = self.config.max_length;
        self.edit(|state| state.replace_selection(text, input_type, max_length))
    }

    pub fn delete_backward(&mut self) -> bool {
        self.edit(TextInputState::delete_backward)
    }

    pub fn delete_forward(&mut self) -> bool {
        self.edit(TextInputState::delete_forward)
    }

    /// Run a key-level edit on a copy and feed the result to `handle_change`
    fn edit(&mut self, f: impl FnOnce(&mut TextInputState) -> bool) -> bool {
        let mut next = self.state.clone();
        f(&mut next) && self.handle_change(&next.value, next.selection_window())
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
    }

    pub fn set_selection_range(&mut self, window: CursorWindow) {
        self.state.set_selection_range(window);
    }

    /// Press a step button
    ///
    /// Currency fields step through their formatter and reject results
    /// outside `[min, max]`. Number fields clamp like a native number field.
    /// Returns the new value when one was applied.
    pub fn step(&mut self, direction: StepDirection) -> Option<f64> {
        if self.config.disabled {
            return None;
        }

        let constraints = self.config.number_constraints;
        let size = constraints.step.unwrap_or(1.0);

        if let Some(formatter) = self.currency.as_mut() {
            let value = formatter.step_by(direction, size, constraints.min, constraints.max)?;
            self.state.value = formatter.display().to_string();
            self.state.caret_to_end();
            return Some(value);
        }

        if !self.config.input_type.is_numeric() {
            return None;
        }

        let current = self.state.number().unwrap_or(0.0);
        let next = constraints.clamp(direction.apply(current, size));
        tracing::debug!(?direction, current, next, "number field stepped");

        self.state.value = next.to_string();
        self.state.caret_to_end();
        self.commit();
        Some(next)
    }

    fn commit(&mut self) {
        self.state.validate(&self.config);
        if let Some(ref callback) = self.on_change {
            callback(&self.state.value);
        }
    }

    /// Describe the input for rendering
    pub fn view(&self) -> TextInputView {
        let config = &self.config;
        let value = if config.input_type.is_masked() {
            "•".repeat(self.state.value.chars().count())
        } else {
            self.state.value.clone()
        };

        TextInputView {
            id: config.id.clone(),
            input_type: config.input_type,
            value,
            placeholder: config.placeholder.clone(),
            size: config.size,
            borderless: config.borderless,
            disabled: config.disabled,
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            wrapper: self.has_wrapper(),
            step_buttons: self.show_step_buttons().then(|| StepButtonsView {
                up_icon: IconName::CaretUp,
                down_icon: IconName::CaretDown,
                step: config.number_constraints.step.unwrap_or(1.0),
                disabled: config.disabled,
            }),
            selection: self.state.selection_window(),
            error: self.state.error.clone(),
            attrs: AriaAttributes::new()
                .attr_opt("id", config.id.as_deref())
                .flag("aria-disabled", config.disabled)
                .flag("aria-invalid", !self.state.is_valid())
                .flag("aria-required", config.required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyFormat;
    use std::sync::Mutex;

    fn dollars() -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyFormat::default())
    }

    #[test]
    fn test_typing_and_selection_replace() {
        let mut state = TextInputState::new("");
        assert!(state.replace_selection("héllo", InputType::Text, 0));
        assert_eq!(state.selection_window(), CursorWindow::caret(5));

        state.set_selection_range(CursorWindow::new(1, 4));
        assert_eq!(state.selected_text(), Some("éll"));

        state.replace_selection("a", InputType::Text, 0);
        assert_eq!(state.value, "hao");
        assert_eq!(state.selection_window(), CursorWindow::caret(2));
    }

    #[test]
    fn test_max_length_counts_replaced_text() {
        let mut state = TextInputState::new("abcd");
        assert!(!state.replace_selection("x", InputType::Text, 4));

        state.set_selection_range(CursorWindow::new(0, 2));
        state.replace_selection("xyz", InputType::Text, 4);
        assert_eq!(state.value, "xycd");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = TextInputState::new("abc");
        assert!(state.delete_backward());
        assert_eq!(state.value, "ab");
        assert!(!state.delete_forward());

        state.set_selection_range(CursorWindow::caret(0));
        assert!(!state.delete_backward());
        assert!(state.delete_forward());
        assert_eq!(state.value, "b");

        state.select_all();
        assert!(state.delete_backward());
        assert_eq!(state.value, "");
    }

    #[test]
    fn test_set_selection_range_clamps() {
        let mut state = TextInputState::new("abc");
        state.set_selection_range(CursorWindow::new(1, 10));
        assert_eq!(state.selection_window(), CursorWindow::new(1, 3));
    }

    #[test]
    fn test_shortened_value_keeps_selection_in_bounds() {
        let mut state = TextInputState::new("abcdef");
        state.set_selection_range(CursorWindow::new(2, 6));
        state.value = "ab".to_string();

        assert_eq!(state.selection_window(), CursorWindow::caret(2));
        assert!(!state.has_selection());
        assert_eq!(state.caret(), 2);

        assert!(state.replace_selection("c", InputType::Text, 3));
        assert_eq!(state.value, "abc");
        assert_eq!(state.caret(), 3);
    }

    #[test]
    fn test_type_filtering_and_problems() {
        let mut input = TextInput::with_config(TextInputConfig::new().number());
        input.insert_text("1a2.5");
        assert_eq!(input.value(), "12.5");

        assert_eq!(InputType::Email.problem("a@b.c"), None);
        assert!(InputType::Email.problem("a@b@c.d").is_some());
        assert!(InputType::Url.problem("ftp://x").is_some());
        assert!(InputType::Tel.accepts('('));
        assert!(!InputType::Tel.accepts('x'));
    }

    #[test]
    fn test_validation_messages() {
        let mut input = TextInput::with_config(TextInputConfig::new().number().min(1.0).max(5.0));
        input.insert_text("9");
        assert_eq!(input.state().error.as_deref(), Some("Enter a value from 1 to 5"));

        let mut required = TextInput::with_config(TextInputConfig::new().required(true).value("a"));
        required.delete_backward();
        assert_eq!(required.state().error.as_deref(), Some("This field is required"));
        assert!(required.view().attrs.is_true("aria-invalid"));
    }

    #[test]
    fn test_on_change_reports_committed_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let mut input =
            TextInput::new().on_change(move |v| seen_clone.lock().unwrap().push(v.to_string()));

        input.insert_text("ab");
        input.delete_backward();

        assert_eq!(*seen.lock().unwrap(), vec!["ab".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_disabled_input_ignores_edits() {
        let mut input = TextInput::with_config(TextInputConfig::new().value("x").disabled(true));
        assert!(!input.insert_text("y"));
        assert_eq!(input.value(), "x");
        assert_eq!(input.step(StepDirection::Up), None);
    }

    #[test]
    fn test_step_buttons_visibility() {
        assert!(!TextInput::with_config(TextInputConfig::new().number()).show_step_buttons());
        assert!(TextInput::with_config(TextInputConfig::new().number().step(1.0)).show_step_buttons());
        assert!(!TextInput::with_config(TextInputConfig::new().step(1.0)).show_step_buttons());

        let currency = TextInput::with_config(TextInputConfig::new().step(5.0)).currency(dollars());
        assert!(currency.show_step_buttons());
        assert!(currency.has_wrapper());

        assert!(TextInput::with_config(TextInputConfig::new().suffix("kg")).has_wrapper());
        assert!(!TextInput::new().has_wrapper());
    }

    #[test]
    fn test_number_step_clamps() {
        let mut input =
            TextInput::with_config(TextInputConfig::new().number().step(2.0).min(0.0).max(3.0));

        assert_eq!(input.step(StepDirection::Up), Some(2.0));
        assert_eq!(input.step(StepDirection::Up), Some(3.0));
        assert_eq!(input.value(), "3");
        assert_eq!(input.step(StepDirection::Down), Some(1.0));
        assert_eq!(input.step(StepDirection::Down), Some(0.0));
    }

    #[test]
    fn test_currency_keystrokes_group_and_report() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let formatter = dollars().on_currency_change(move |v| seen_clone.lock().unwrap().push(v));
        let mut input = TextInput::new().currency(formatter);

        for c in ["1", "0", "0", "0"] {
            input.insert_text(c);
        }

        assert_eq!(input.value(), "1,000");
        assert_eq!(input.state().selection_window(), CursorWindow::caret(5));
        assert_eq!(*seen.lock().unwrap(), vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_currency_backspace_keeps_caret_on_digit() {
        let mut input = TextInput::new().currency(dollars());
        input.insert_text("12345");
        assert_eq!(input.value(), "12,345");

        input.delete_backward();
        assert_eq!(input.value(), "1,234");
        assert_eq!(input.state().caret(), 5);
    }

    #[test]
    fn test_currency_initial_value_is_formatted() {
        let input =
            TextInput::with_config(TextInputConfig::new().value("1000000.23")).currency(dollars());
        assert_eq!(input.value(), "1,000,000.23");
        assert_eq!(input.config().input_type, InputType::Text);
    }

    #[test]
    fn test_currency_step_rejects_past_max() {
        let mut input =
            TextInput::with_config(TextInputConfig::new().step(5.0).max(10.0)).currency(dollars());

        assert_eq!(input.step(StepDirection::Up), Some(5.0));
        assert_eq!(input.step(StepDirection::Up), Some(10.0));
        assert_eq!(input.step(StepDirection::Up), None);
        assert_eq!(input.value(), "10");
    }

    #[test]
    fn test_view_masks_password_and_lists_step_icons() {
        let view = TextInput::with_config(TextInputConfig::new().password().value("abc")).view();
        assert_eq!(view.value, "•••");
        assert!(view.step_buttons.is_none());

        let view = TextInput::with_config(TextInputConfig::new().number().step(1.0)).view();
        let buttons = view.step_buttons.clone().expect("step buttons");
        assert_eq!(buttons.up_icon, IconName::CaretUp);
        assert_eq!(buttons.down_icon, IconName::CaretDown);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["input_type"], "number");
        assert_eq!(json["attrs"]["aria-disabled"], "false");
    }

    #[test]
    fn test_constraints_check() {
        assert!(NumberConstraints::new().step(0.5).min(0.0).max(1.0).check().is_ok());
        assert_eq!(
            NumberConstraints::new().step(0.0).check(),
            Err(WidgetError::InvalidStep("0".to_string()))
        );
        assert!(NumberConstraints::new().min(2.0).max(1.0).check().is_err());
    }
}
