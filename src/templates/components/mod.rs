pub mod address_form;
pub mod comparables_display;
pub mod comparables_table;
pub mod error;
pub mod pin_picker;

pub use address_form::address_search;
pub use comparables_display::comparables_display;
pub use comparables_table::{
    analysis_error, analysis_loader, comparables_results, invalid_pin_alert,
};
pub use error::html_error_response;
pub use pin_picker::{pin_controls, properties_load_error, property_loader};
