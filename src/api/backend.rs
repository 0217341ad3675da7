use crate::api::{ApiError, PropertySummary};
use crate::domain::Comparable;

/// The calls the web app and CLI make against the comparables backends.
///
/// `HttpBackend` is the production implementation; router tests swap in a
/// recording fake so no request ever leaves the process.
pub trait ComparablesBackend: Send + Sync {
    /// `GET /api/properties`
    fn list_properties(&self) -> Result<Vec<PropertySummary>, ApiError>;

    /// `GET /api/comparables/{pin}`
    fn comparables_for_pin(&self, pin: &str) -> Result<Vec<Comparable>, ApiError>;

    /// `POST /api/get_comparables` with `{ "address": ... }`
    fn comparables_for_address(&self, address: &str) -> Result<Vec<Comparable>, ApiError>;
}
