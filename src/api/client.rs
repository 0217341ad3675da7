// client.rs
use super::api_error::GENERIC_SEARCH_ERROR;
use super::models::ErrorBody;
use crate::api::{
    ApiError, ComparablesBackend, GetComparablesResponse, PinComparable, PropertySummary,
};
use crate::domain::Comparable;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("comparables-client/", env!("CARGO_PKG_VERSION"));

/// Where the two backends live. They are configured separately and never
/// assumed to be the same service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Serves `/api/properties` and `/api/comparables/{pin}`.
    pub properties_api: Url,
    /// Serves `/api/get_comparables`.
    pub search_api: Url,
    /// `None` waits on the backend indefinitely.
    pub timeout: Option<Duration>,
}

pub struct HttpBackend {
    client: Client,
    properties_api: Url,
    search_api: Url,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        info!(
            properties_api = %config.properties_api,
            search_api = %config.search_api,
            "backend client ready"
        );

        Ok(Self {
            client,
            properties_api: config.properties_api.clone(),
            search_api: config.search_api.clone(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        let body = resp.text()?;
        decode_response(status, &body, &status_fallback(status))
    }
}

impl ComparablesBackend for HttpBackend {
    fn list_properties(&self) -> Result<Vec<PropertySummary>, ApiError> {
        let url = endpoint(&self.properties_api, &["api", "properties"])?;
        self.get_json(url)
    }

    fn comparables_for_pin(&self, pin: &str) -> Result<Vec<Comparable>, ApiError> {
        let url = endpoint(&self.properties_api, &["api", "comparables", pin])?;
        let rows: Vec<PinComparable> = self.get_json(url)?;
        Ok(rows.into_iter().map(Comparable::from).collect())
    }

    fn comparables_for_address(&self, address: &str) -> Result<Vec<Comparable>, ApiError> {
        let url = endpoint(&self.search_api, &["api", "get_comparables"])?;
        debug!(%url, address, "POST");

        let resp = self
            .client
            .post(url)
            .json(&json!({ "address": address }))
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        let payload: GetComparablesResponse = decode_response(status, &body, GENERIC_SEARCH_ERROR)?;

        Ok(payload
            .best_comparables
            .into_iter()
            .map(Comparable::from)
            .collect())
    }
}

/// Append path segments to a base URL, keeping any prefix path the base
/// already has. Segments are percent-encoded, so a PIN can never escape its
/// own segment.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{base} cannot be used as a base URL")))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

fn status_fallback(status: StatusCode) -> String {
    format!("Backend returned HTTP {status}")
}

/// Turn a raw backend response into either the expected payload or an
/// `ApiError`. Non-2xx bodies are searched for an `{ "error": ... }` message;
/// `fallback` is used when there is none.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
