//! stc Widget Library
//!
//! Stateful building blocks shared by the stc components:
//!
//! - [`TextInput`]: single-line input with typed filtering, selection
//!   editing, step buttons and optional currency formatting
//! - [`CurrencyFormatter`]: thousand grouping, decimal truncation and
//!   cursor correction for money fields
//!
//! # Example
//!
//! ```ignore
//! use stc_widgets::prelude::*;
//!
//! let mut input = TextInput::with_config(TextInputConfig::new().step(1.0))
//!     .currency(CurrencyFormatter::new(CurrencyFormat::default()));
//!
//! input.insert_text("1234");
//! assert_eq!(input.value(), "1,234");
//! ```

pub mod currency;
pub mod error;
pub mod text_input;

pub use currency::{
    convert_to_number, format_currency, CurrencyChangeCallback, CurrencyEdit, CurrencyFormat,
    CurrencyFormatter, CurrencyState, CursorWindow,
};
pub use error::{Result, WidgetError};
pub use text_input::{
    InputSize, InputType, NumberConstraints, StepButtonsView, StepDirection, TextInput,
    TextInputConfig, TextInputState, TextInputView,
};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::currency::{CurrencyFormat, CurrencyFormatter, CursorWindow};
    pub use crate::text_input::{
        InputSize, InputType, NumberConstraints, StepDirection, TextInput, TextInputConfig,
    };
}
