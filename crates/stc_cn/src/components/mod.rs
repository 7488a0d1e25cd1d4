//! stc components
//!
//! Each component is a controller plus a serializable view. Hosts call the
//! controller in response to input and render the view.

pub mod button;
pub mod icon;
pub mod pagination;
pub mod search;
pub mod select;
pub mod spinner;

pub use button::{Button, ButtonShape, ButtonVariant, ButtonView, LoaderPosition, LoaderView};
pub use icon::{Icon, IconContent, IconSize, IconView};
pub use pagination::{
    item_range, page_items, PageItem, PageItemView, Pagination, PaginationTexts, PaginationView,
    TotalPosition, TotalView,
};
pub use search::{SearchBox, SearchView};
pub use select::{
    DisplayContent, ListboxView, OptionView, SearchFieldView, Select, SelectBuilder,
    SelectEngine, SelectOption, SelectTexts, SelectValue, SelectView, TagView, TrailingIcon,
};
pub use spinner::{SpinSpeed, Spinner, SpinnerView};
