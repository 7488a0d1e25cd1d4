//! Currency formatting for text inputs
//!
//! Turns raw text edits into a grouped display string, a numeric value and a
//! cursor window that stays next to the same digit while separators appear
//! and disappear.
//!
//! # Example
//!
//! ```ignore
//! use stc_widgets::currency::{CurrencyFormat, CurrencyFormatter, CursorWindow};
//!
//! let mut formatter = CurrencyFormatter::new(CurrencyFormat::default())
//!     .on_currency_change(|value| println!("amount: {}", value));
//!
//! let edit = formatter.handle_edit("1000", CursorWindow::caret(4));
//! assert_eq!(edit.display, "1,000");
//! assert_eq!(edit.cursor, CursorWindow::caret(5));
//! ```
//!
//! # Zero on empty
//!
//! [`convert_to_number`] distinguishes "no number" (`None`) from zero, but
//! the change callback always receives a number: an empty or unparsable
//! field reports `0.0`. Consumers that must tell "cleared" from "zero" read
//! [`CurrencyFormatter::value`] instead.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{Result, WidgetError};
use crate::text_input::StepDirection;

/// Keep only ASCII digits
fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Insert `separator` before every digit that has a positive multiple of
/// three digits to its right
fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + (len / 3) * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Format raw currency text
///
/// The integer/fraction split always happens on `.`; callers using another
/// decimal separator normalize first (see [`CurrencyFormat::normalize`]).
/// The fraction is truncated, never rounded. A trailing `decimal_separator`
/// is kept so the user can continue typing decimals, and the separator stays
/// whenever fraction digits were typed, even if none survive truncation.
pub fn format_currency(
    value: &str,
    decimal_separator: &str,
    thousand_separator: &str,
    decimal_places: usize,
) -> String {
    let decimal_last = !decimal_separator.is_empty() && value.ends_with(decimal_separator);
    compose(
        value,
        decimal_last,
        decimal_separator,
        thousand_separator,
        decimal_places,
    )
}

/// `[sign][grouped integer][separator][truncated fraction]`
fn compose(
    value: &str,
    decimal_last: bool,
    decimal_separator: &str,
    thousand_separator: &str,
    decimal_places: usize,
) -> String {
    let is_negative = value.starts_with('-');

    let mut parts = value.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = digits_only(parts.next().unwrap_or_default());

    let grouped = group_thousands(&digits_only(integer), thousand_separator);

    let mut formatted = String::with_capacity(value.len() + 4);
    if is_negative {
        formatted.push('-');
    }
    formatted.push_str(&grouped);
    if !fraction.is_empty() || decimal_last {
        formatted.push_str(decimal_separator);
        formatted.extend(fraction.chars().take(decimal_places));
    }
    formatted
}

/// Parse formatted currency text
///
/// Returns `None` when nothing numeric remains (e.g. empty input or a lone
/// `-`), which is distinct from zero.
pub fn convert_to_number(
    value: &str,
    decimal_separator: &str,
    thousand_separator: &str,
    decimal_places: usize,
) -> Option<f64> {
    let is_negative = value.starts_with('-');

    let mut cleaned = if thousand_separator.is_empty() {
        value.to_string()
    } else {
        value.replace(thousand_separator, "")
    };
    if !decimal_separator.is_empty() && decimal_separator != "." {
        cleaned = cleaned.replace(decimal_separator, ".");
    }

    let mut parts = cleaned.split('.');
    let integer = digits_only(parts.next().unwrap_or_default());

    let mut number = String::with_capacity(cleaned.len() + 1);
    if is_negative {
        number.push('-');
    }
    number.push_str(&integer);
    if let Some(fraction) = parts.next().filter(|f| !f.is_empty()) {
        number.push('.');
        number.extend(digits_only(fraction).chars().take(decimal_places));
    }

    number.parse::<f64>().ok()
}

/// Separator and precision settings for a currency input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Grouping separator inserted every three integer digits
    pub thousand_separator: String,
    /// Separator between integer and fraction
    pub decimal_separator: String,
    /// Maximum number of fraction digits kept (truncated)
    pub decimal_places: usize,
    /// Rewrite a non-`.` decimal separator to `.` before formatting
    pub normalize_decimal_separator: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            thousand_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimal_places: 2,
            normalize_decimal_separator: true,
        }
    }
}

impl CurrencyFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thousand separator
    pub fn thousand_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousand_separator = separator.into();
        self
    }

    /// Set the decimal separator
    pub fn decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Set the number of fraction digits
    pub fn decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Enable or disable decimal separator normalization
    pub fn normalize_decimal_separator(mut self, normalize: bool) -> Self {
        self.normalize_decimal_separator = normalize;
        self
    }

    /// Check the separators can be told apart from digits and each other
    pub fn validate(&self) -> Result<()> {
        for (name, sep) in [
            ("thousand_separator", &self.thousand_separator),
            ("decimal_separator", &self.decimal_separator),
        ] {
            if sep.is_empty() {
                return Err(WidgetError::InvalidSeparator {
                    field: name,
                    reason: "must not be empty".to_string(),
                });
            }
            if sep.chars().any(|c| c.is_ascii_digit() || c == '-') {
                return Err(WidgetError::InvalidSeparator {
                    field: name,
                    reason: format!("{:?} contains a digit or '-'", sep),
                });
            }
        }
        if self.thousand_separator == self.decimal_separator {
            return Err(WidgetError::InvalidSeparator {
                field: "decimal_separator",
                reason: "must differ from thousand_separator".to_string(),
            });
        }
        Ok(())
    }

    /// Drop every character other than digits, `-` and the separators
    pub fn filter_raw(&self, text: &str) -> String {
        let allowed = |c: char| {
            c.is_ascii_digit()
                || c == '-'
                || self.thousand_separator.contains(c)
                || self.decimal_separator.contains(c)
        };
        text.chars().filter(|c| allowed(*c)).collect()
    }

    /// Rewrite raw text to the internal `.`-split representation
    pub fn normalize(&self, raw: &str) -> String {
        if !self.normalize_decimal_separator || self.decimal_separator == "." {
            return raw.to_string();
        }
        let without_groups = if self.thousand_separator.is_empty() {
            raw.to_string()
        } else {
            raw.replace(self.thousand_separator.as_str(), "")
        };
        without_groups.replace(self.decimal_separator.as_str(), ".")
    }

    /// Format raw text with these settings
    ///
    /// Decimal-last is read from `raw` before normalization rewrites the
    /// separator.
    pub fn format(&self, raw: &str) -> String {
        let decimal_last =
            !self.decimal_separator.is_empty() && raw.ends_with(self.decimal_separator.as_str());
        compose(
            &self.normalize(raw),
            decimal_last,
            &self.decimal_separator,
            &self.thousand_separator,
            self.decimal_places,
        )
    }

    /// Parse formatted text with these settings
    pub fn parse(&self, formatted: &str) -> Option<f64> {
        convert_to_number(
            formatted,
            &self.decimal_separator,
            &self.thousand_separator,
            self.decimal_places,
        )
    }

    /// Number of thousand separators in a formatted string
    pub fn separator_count(&self, formatted: &str) -> usize {
        if self.thousand_separator.is_empty() {
            0
        } else {
            formatted.matches(self.thousand_separator.as_str()).count()
        }
    }
}

/// Selection range (in characters) to restore after reformatting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorWindow {
    pub start: usize,
    pub end: usize,
}

impl CursorWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at `pos`
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    fn shifted_right(self) -> Self {
        Self::new(self.start + 1, self.end + 1)
    }

    fn shifted_left(self) -> Self {
        Self::new(self.start.saturating_sub(1), self.end.saturating_sub(1))
    }

    /// Clamp both ends to `len` characters
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// Bookkeeping carried from one currency edit to the next
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CurrencyState {
    /// Display string produced by the last accepted edit or step
    pub formatted: String,
    /// Selection to restore after the display commits
    pub cursor: CursorWindow,
    /// Thousand separators in `formatted`
    pub comma_count: usize,
}

/// Result of applying one edit
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurrencyEdit {
    /// New display string
    pub display: String,
    /// Selection to restore once `display` is committed
    pub cursor: CursorWindow,
    /// Parsed value; `None` when the field holds no number
    pub value: Option<f64>,
    /// Value reported to the change callback (`None` flattened to zero)
    pub reported: f64,
}

impl CurrencyState {
    /// Apply a raw text edit
    ///
    /// `selection` is the host's selection after the keystroke, measured
    /// against the unformatted text. It moves one position right when the
    /// reformat added a separator and one left when it removed one. Only a
    /// single separator change per keystroke is corrected.
    pub fn apply_edit(
        &mut self,
        format: &CurrencyFormat,
        text: &str,
        selection: CursorWindow,
    ) -> CurrencyEdit {
        let raw = format.filter_raw(text);
        let value = format.parse(&raw);
        let display = if raw.is_empty() {
            String::new()
        } else {
            format.format(&raw)
        };

        let comma_count = format.separator_count(&display);
        let cursor = match comma_count.cmp(&self.comma_count) {
            std::cmp::Ordering::Greater => selection.shifted_right(),
            std::cmp::Ordering::Less => selection.shifted_left(),
            std::cmp::Ordering::Equal => selection,
        };

        self.comma_count = comma_count;
        self.formatted = display.clone();
        self.cursor = cursor;

        CurrencyEdit {
            display,
            cursor,
            value,
            reported: value.unwrap_or(0.0),
        }
    }

    /// Step the current value by `step`
    ///
    /// An empty or unparsable field counts as zero. Returns `None` without
    /// touching the state when the result falls outside `[min, max]`.
    pub fn step_by(
        &mut self,
        format: &CurrencyFormat,
        direction: StepDirection,
        step: f64,
        min: f64,
        max: f64,
    ) -> Option<f64> {
        let current = format.parse(&self.formatted).unwrap_or(0.0);
        let next = direction.apply(current, step);

        if next < min || next > max {
            return None;
        }

        // f64 Display never uses exponent notation, so the digits survive formatting
        self.formatted = format_currency(
            &next.to_string(),
            &format.decimal_separator,
            &format.thousand_separator,
            format.decimal_places,
        );
        self.comma_count = format.separator_count(&self.formatted);
        let len = self.formatted.chars().count();
        self.cursor = CursorWindow::caret(len);
        Some(next)
    }
}

/// Callback receiving the numeric value after each accepted edit or step
pub type CurrencyChangeCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Currency behavior injected into a [`crate::TextInput`]
#[derive(Clone)]
pub struct CurrencyFormatter {
    format: CurrencyFormat,
    state: CurrencyState,
    on_currency_change: Option<CurrencyChangeCallback>,
}

impl std::fmt::Debug for CurrencyFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyFormatter")
            .field("format", &self.format)
            .field("state", &self.state)
            .field("on_currency_change", &self.on_currency_change.is_some())
            .finish()
    }
}

impl CurrencyFormatter {
    /// Create a formatter with an empty display
    pub fn new(format: CurrencyFormat) -> Self {
        Self {
            format,
            state: CurrencyState::default(),
            on_currency_change: None,
        }
    }

    /// Set the numeric change callback
    pub fn on_currency_change<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_currency_change = Some(Arc::new(f));
        self
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    pub fn state(&self) -> &CurrencyState {
        &self.state
    }

    /// Current display string
    pub fn display(&self) -> &str {
        &self.state.formatted
    }

    /// Current numeric value, `None` when the field is empty
    pub fn value(&self) -> Option<f64> {
        self.format.parse(&self.state.formatted)
    }

    /// Replace the display without reporting a change
    pub fn reset(&mut self, text: &str) -> &str {
        let len = text.chars().count();
        self.state = CurrencyState::default();
        self.state
            .apply_edit(&self.format, text, CursorWindow::caret(len));
        self.state.cursor = CursorWindow::caret(self.state.formatted.chars().count());
        &self.state.formatted
    }

    /// Apply a raw edit and report the new value
    pub fn handle_edit(&mut self, text: &str, selection: CursorWindow) -> CurrencyEdit {
        let edit = self.state.apply_edit(&self.format, text, selection);
        tracing::debug!(
            display = %edit.display,
            value = ?edit.value,
            "currency edit accepted"
        );
        if let Some(ref callback) = self.on_currency_change {
            callback(edit.reported);
        }
        edit
    }

    /// Step the value, reporting it when accepted
    ///
    /// `min`/`max` default to unbounded.
    pub fn step_by(
        &mut self,
        direction: StepDirection,
        step: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Option<f64> {
        let min = min.unwrap_or(f64::NEG_INFINITY);
        let max = max.unwrap_or(f64::INFINITY);
        match self.state.step_by(&self.format, direction, step, min, max) {
            Some(value) => {
                tracing::debug!(value, display = %self.state.formatted, "currency step accepted");
                if let Some(ref callback) = self.on_currency_change {
                    callback(value);
                }
                Some(value)
            }
            None => {
                tracing::debug!(?direction, step, min, max, "currency step out of range");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<f64>>>, impl Fn(f64) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        (seen, move |v| seen_clone.lock().unwrap().push(v))
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_currency("1000000.23", ".", ",", 2), "1,000,000.23");
        assert_eq!(format_currency("100", ".", ",", 2), "100");
        assert_eq!(format_currency("1234", ".", ",", 2), "1,234");
        assert_eq!(format_currency("123456", ".", " ", 2), "123 456");
    }

    #[test]
    fn test_format_strips_existing_separators() {
        assert_eq!(format_currency("1,0000", ".", ",", 2), "10,000");
        assert_eq!(format_currency("12a3b4", ".", ",", 2), "1,234");
    }

    #[test]
    fn test_format_truncates_fraction() {
        assert_eq!(format_currency("1.239", ".", ",", 2), "1.23");
        assert_eq!(format_currency("1.999", ".", ",", 0), "1.");
        assert_eq!(format_currency("0.5", ".", ",", 3), "0.5");
    }

    #[test]
    fn test_format_decimal_last() {
        assert_eq!(format_currency("1234.", ".", ",", 2), "1,234.");
        assert_eq!(format_currency("12.", ".", ",", 0), "12.");
    }

    #[test]
    fn test_format_zero_places_keeps_separator() {
        let mut formatter = CurrencyFormatter::new(CurrencyFormat::new().decimal_places(0));
        let edit = formatter.handle_edit("12.", CursorWindow::caret(3));
        assert_eq!(edit.display, "12.");
        assert_eq!(edit.value, Some(12.0));

        let edit = formatter.handle_edit("12.5", CursorWindow::caret(4));
        assert_eq!(edit.display, "12.");
        assert_eq!(edit.value, Some(12.0));
    }

    #[test]
    fn test_trailing_thousand_separator_is_not_decimal_last() {
        assert_eq!(format_currency("1.", ",", ".", 2), "1");
        assert_eq!(format_currency("1,", ",", ".", 2), "1,");

        let format = CurrencyFormat::new()
            .thousand_separator(".")
            .decimal_separator(",");
        assert_eq!(format.format("1.234,"), "1.234,");
        assert_eq!(format.format("1.234."), "1.234");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency("-1234.5", ".", ",", 2), "-1,234.5");
        assert_eq!(format_currency("-", ".", ",", 2), "-");
    }

    #[test]
    fn test_format_extra_dots_are_dropped() {
        assert_eq!(format_currency("1.2.3", ".", ",", 2), "1.2");
    }

    #[test]
    fn test_convert_to_number() {
        assert_eq!(convert_to_number("1,000,000.23", ".", ",", 2), Some(1_000_000.23));
        assert_eq!(convert_to_number("-1,234.5", ".", ",", 2), Some(-1234.5));
        assert_eq!(convert_to_number("1.239", ".", ",", 2), Some(1.23));
        assert_eq!(convert_to_number("1.", ".", ",", 2), Some(1.0));
        assert_eq!(convert_to_number(".5", ".", ",", 2), Some(0.5));
    }

    #[test]
    fn test_convert_distinguishes_empty_from_zero() {
        assert_eq!(convert_to_number("", ".", ",", 2), None);
        assert_eq!(convert_to_number("-", ".", ",", 2), None);
        assert_eq!(convert_to_number("0", ".", ",", 2), Some(0.0));
    }

    #[test]
    fn test_convert_custom_separators() {
        assert_eq!(convert_to_number("1.234.567,89", ",", ".", 2), Some(1_234_567.89));
    }

    #[test]
    fn test_round_trip_truncates() {
        for (raw, expected) in [
            ("1234.5678", 1234.56),
            ("0.019", 0.01),
            ("-98765.4", -98765.4),
            ("42", 42.0),
        ] {
            let formatted = format_currency(raw, ".", ",", 2);
            assert_eq!(convert_to_number(&formatted, ".", ",", 2), Some(expected));
        }
    }

    #[test]
    fn test_custom_separators_with_normalization() {
        let format = CurrencyFormat::new()
            .thousand_separator(".")
            .decimal_separator(",");

        assert_eq!(format.format("1234567,891"), "1.234.567,89");
        assert_eq!(format.format("1.234,"), "1.234,");
        assert_eq!(format.parse("1.234.567,89"), Some(1_234_567.89));
    }

    #[test]
    fn test_validate_separators() {
        assert!(CurrencyFormat::default().validate().is_ok());
        assert!(CurrencyFormat::new().thousand_separator("").validate().is_err());
        assert!(CurrencyFormat::new().decimal_separator(",").validate().is_err());
        assert!(CurrencyFormat::new().thousand_separator("1").validate().is_err());
    }

    #[test]
    fn test_filter_raw() {
        let format = CurrencyFormat::default();
        assert_eq!(format.filter_raw("$ -1,2a34.5"), "-1,234.5");
    }

    #[test]
    fn test_cursor_moves_right_when_separator_added() {
        let format = CurrencyFormat::default();
        let mut state = CurrencyState::default();

        state.apply_edit(&format, "100", CursorWindow::caret(3));
        let edit = state.apply_edit(&format, "1000", CursorWindow::caret(4));

        assert_eq!(edit.display, "1,000");
        assert_eq!(edit.cursor, CursorWindow::caret(5));
        assert_eq!(state.comma_count, 1);
    }

    #[test]
    fn test_cursor_range_shifts_with_separator_count() {
        let format = CurrencyFormat::default();
        let mut state = CurrencyState::default();

        state.apply_edit(&format, "100", CursorWindow::caret(3));
        let edit = state.apply_edit(&format, "1000", CursorWindow::new(1, 4));
        assert_eq!(edit.display, "1,000");
        assert_eq!(edit.cursor, CursorWindow::new(2, 5));

        let edit = state.apply_edit(&format, "1,00", CursorWindow::new(1, 3));
        assert_eq!(edit.display, "100");
        assert_eq!(edit.cursor, CursorWindow::new(0, 2));
        assert_eq!(state.cursor, CursorWindow::new(0, 2));
    }

    #[test]
    fn test_cursor_moves_left_when_separator_removed() {
        let format = CurrencyFormat::default();
        let mut state = CurrencyState::default();

        state.apply_edit(&format, "1000", CursorWindow::caret(4));
        // Backspace at the end of "1,000"
        let edit = state.apply_edit(&format, "1,00", CursorWindow::caret(4));

        assert_eq!(edit.display, "100");
        assert_eq!(edit.cursor, CursorWindow::caret(3));
    }

    #[test]
    fn test_cursor_unchanged_without_separator_change() {
        let format = CurrencyFormat::default();
        let mut state = CurrencyState::default();

        state.apply_edit(&format, "1000", CursorWindow::caret(4));
        let edit = state.apply_edit(&format, "1,0005", CursorWindow::new(2, 4));

        assert_eq!(edit.display, "10,005");
        assert_eq!(edit.cursor, CursorWindow::new(2, 4));
    }

    #[test]
    fn test_cursor_never_negative() {
        let format = CurrencyFormat::default();
        let mut state = CurrencyState {
            comma_count: 2,
            ..Default::default()
        };
        let edit = state.apply_edit(&format, "", CursorWindow::caret(0));
        assert_eq!(edit.cursor, CursorWindow::caret(0));
    }

    #[test]
    fn test_edit_reports_zero_for_empty() {
        let (seen, record) = recorder();
        let mut formatter = CurrencyFormatter::new(CurrencyFormat::default()).on_currency_change(record);

        let edit = formatter.handle_edit("12", CursorWindow::caret(2));
        assert_eq!(edit.value, Some(12.0));

        let edit = formatter.handle_edit("", CursorWindow::caret(0));
        assert_eq!(edit.value, None);
        assert_eq!(edit.reported, 0.0);
        assert_eq!(formatter.value(), None);

        assert_eq!(*seen.lock().unwrap(), vec![12.0, 0.0]);
    }

    #[test]
    fn test_step_from_empty() {
        let (seen, record) = recorder();
        let mut formatter = CurrencyFormatter::new(CurrencyFormat::default()).on_currency_change(record);

        for _ in 0..3 {
            formatter.step_by(StepDirection::Up, 5.0, None, None);
        }

        assert_eq!(*seen.lock().unwrap(), vec![5.0, 10.0, 15.0]);
        assert_eq!(formatter.display(), "15");
    }

    #[test]
    fn test_step_rejects_out_of_range() {
        let (seen, record) = recorder();
        let mut formatter = CurrencyFormatter::new(CurrencyFormat::default()).on_currency_change(record);

        assert_eq!(formatter.step_by(StepDirection::Up, 5.0, Some(0.0), Some(8.0)), Some(5.0));
        assert_eq!(formatter.step_by(StepDirection::Up, 5.0, Some(0.0), Some(8.0)), None);
        assert_eq!(formatter.display(), "5");
        assert_eq!(formatter.step_by(StepDirection::Down, 10.0, Some(0.0), Some(8.0)), None);
        assert_eq!(formatter.display(), "5");

        assert_eq!(*seen.lock().unwrap(), vec![5.0]);
    }

    #[test]
    fn test_step_regroups_large_values() {
        let mut formatter = CurrencyFormatter::new(CurrencyFormat::default());
        formatter.handle_edit("999.5", CursorWindow::caret(5));
        assert_eq!(formatter.step_by(StepDirection::Up, 1.0, None, None), Some(1000.5));
        assert_eq!(formatter.display(), "1,000.5");
        assert_eq!(formatter.state().comma_count, 1);
    }
}
