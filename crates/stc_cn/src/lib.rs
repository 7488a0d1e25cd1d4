//! # stc Component Library (stc_cn)
//!
//! Headless UI components built on `stc_core` state and `stc_widgets`
//! inputs. Components own their interaction state and expose serializable
//! views; the hosting framework renders those views and forwards events.
//!
//! ## Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! let select = cn::select([
//!         SelectOption::new("1", "A"),
//!         SelectOption::new("2", "B"),
//!     ])
//!     .on_change(|value| println!("Selected: {:?}", value))
//!     .build()?;
//!
//! select.click_trigger();
//! select.select("2");
//! assert!(!select.is_open());
//! ```
//!
//! ## Components
//!
//! - **Select** - single/multi select with search, clear and outside dismissal
//! - **Button** - variants, shapes, loading indicator, link wrapper
//! - **Pagination** - page list with ellipses and item totals
//! - **SearchBox** - labelled search input with submit button
//! - **Spinner** - loading arc
//! - **Icon** - named glyphs with loading and error states
//!
//! Currency inputs are `stc_widgets::TextInput` with an injected
//! `CurrencyFormatter`; see [`currency_input`].

pub mod components;
pub mod config;
pub mod error;
pub mod size;

pub use components::*;
pub use config::ComponentsConfig;
pub use error::{ComponentError, ConfigError, Result};
pub use size::ComponentSize;

use stc_widgets::{CurrencyFormat, CurrencyFormatter, TextInput, TextInputConfig};

/// Text input formatting its value as currency
pub fn currency_input(config: TextInputConfig, format: CurrencyFormat) -> Result<TextInput> {
    format.validate()?;
    config.number_constraints.check()?;
    Ok(TextInput::with_config(config).currency(CurrencyFormatter::new(format)))
}

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::icon::icon;
    pub use crate::components::pagination::pagination;
    pub use crate::components::search::search;
    pub use crate::components::select::select;
    pub use crate::components::spinner::spinner;
    pub use crate::currency_input;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::*;
    pub use crate::config::ComponentsConfig;
    pub use crate::size::ComponentSize;
    pub use stc_core::{Bounds, Document, PointerEvent, SharedBounds, StateScope};
    pub use stc_icons::IconName;
    pub use stc_widgets::prelude::*;
}
