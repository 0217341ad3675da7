mod api_error;
mod backend;
mod client;
mod models;

pub use api_error::ApiError;
pub use backend::ComparablesBackend;
pub use client::{ApiConfig, HttpBackend};
pub use models::{GetComparablesResponse, PinComparable, PropertySummary};

#[cfg(test)]
pub(crate) use api_error::GENERIC_SEARCH_ERROR;
#[cfg(test)]
pub(crate) use client::decode_response;
