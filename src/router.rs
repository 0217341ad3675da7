use crate::api::ComparablesBackend;
use crate::domain::search::{normalize_address, BLANK_ADDRESS_ERROR};
use crate::domain::{PinSelection, SearchState};
use crate::errors::ServerError;
use crate::responses::{html_response, stylesheet_response, ResultResp};
use crate::templates::components::{
    address_search, analysis_error, comparables_results, invalid_pin_alert, pin_controls,
    properties_load_error, property_loader,
};
use crate::templates::pages::{home_page, search_page};
use astra::Request;
use maud::{html, Markup};
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, error, info, warn};

/// Everything a request handler needs. Holds no per-user state; each
/// request renders from scratch.
pub struct App {
    backend: Box<dyn ComparablesBackend>,
}

impl App {
    pub fn new(backend: impl ComparablesBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn backend(&self) -> &dyn ComparablesBackend {
        self.backend.as_ref()
    }
}

const ROUTES: &[&str] = &["/", "/properties", "/comparables", "/search", "/static/main.css"];

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let fragment = is_htmx(&req);
    debug!(%method, %path, fragment, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page(property_loader(), html! {})),
        ("GET", "/properties") => load_properties(app, fragment),
        ("GET", "/comparables") => {
            let params = parse_query(&req);
            find_comparables(app, params.get("pin").map(String::as_str), fragment)
        }
        ("GET", "/search") => html_response(search_page("", &SearchState::Idle)),
        ("POST", "/search") => {
            let form = read_form(&mut req)?;
            let address = form.get("address").map(String::as_str).unwrap_or("");
            search_by_address(app, address, fragment)
        }
        ("GET", "/static/main.css") => stylesheet_response(),
        (_, p) if ROUTES.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn load_properties(app: &App, fragment: bool) -> ResultResp {
    let controls = picker_controls(app, None);

    if fragment {
        html_response(controls)
    } else {
        html_response(home_page(controls, html! {}))
    }
}

fn find_comparables(app: &App, pin: Option<&str>, fragment: bool) -> ResultResp {
    let results = match PinSelection::parse(pin) {
        None => {
            warn!(?pin, "no valid PIN selected");
            invalid_pin_alert()
        }
        Some(selection) => lookup(app, &selection),
    };

    if fragment {
        html_response(results)
    } else {
        // no htmx to fire the loader, so the picker is rendered up front
        let controls = picker_controls(app, pin);
        html_response(home_page(controls, results))
    }
}

fn picker_controls(app: &App, selected: Option<&str>) -> Markup {
    match app.backend().list_properties() {
        Ok(properties) => {
            info!(count = properties.len(), "properties loaded");
            pin_controls(&properties, selected)
        }
        Err(e) => {
            error!(status = ?e.status(), error = %e, "Error fetching properties");
            properties_load_error()
        }
    }
}

fn lookup(app: &App, selection: &PinSelection) -> Markup {
    let pin = selection.as_str();
    match app.backend().comparables_for_pin(pin) {
        Ok(comparables) => {
            info!(pin, count = comparables.len(), "comparables found");
            comparables_results(pin, &comparables)
        }
        Err(e) => {
            error!(pin, status = ?e.status(), error = %e, "Error fetching comparables");
            analysis_error()
        }
    }
}

fn search_by_address(app: &App, address: &str, fragment: bool) -> ResultResp {
    let state = match normalize_address(address) {
        None => SearchState::Error(BLANK_ADDRESS_ERROR.to_string()),
        Some(query) => {
            let pending = SearchState::Idle.submit();
            let outcome = app.backend().comparables_for_address(query);
            match &outcome {
                Ok(comparables) => info!(address = query, count = comparables.len(), "search done"),
                Err(e) => error!(
                    address = query,
                    status = ?e.status(),
                    error = %e,
                    "Error searching comparables"
                ),
            }
            pending.resolve(outcome)
        }
    };

    if fragment {
        html_response(address_search(address, &state))
    } else {
        html_response(search_page(address, &state))
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
