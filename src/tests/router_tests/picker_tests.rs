// src/tests/router_tests/picker_tests.rs

use crate::router::handle;
use crate::tests::utils::{attrs, body_string, count, get, htmx, texts, Canned, FakeBackend};

const ONE_ROW: &str = r#"[{
    "property_identification_number": "A1",
    "square_footage": 1000,
    "year_built": 1990,
    "confidence_score": 0.8765,
    "latitude": 41.85,
    "longitude": -87.65
}]"#;

#[test]
fn home_page_renders_loader_without_calling_backend() {
    let (app, calls) = FakeBackend::new().into_app();

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert_eq!(attrs(&body, "#loader", "hx-get"), vec![Some("/properties".into())]);
    assert_eq!(attrs(&body, "#loader", "hx-trigger"), vec![Some("load".into())]);
    assert_eq!(count(&body, "#results-container"), 1);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn empty_property_list_leaves_only_placeholder() {
    let (app, calls) = FakeBackend::new().properties(Canned::ok("[]")).into_app();

    let body = body_string(handle(htmx(get("/properties")), &app).unwrap());

    assert_eq!(attrs(&body, "#pin-select option", "value"), vec![Some(String::new())]);
    assert_eq!(texts(&body, "#pin-select option"), vec!["-- Select a PIN --"]);
    assert_eq!(*calls.lock().unwrap(), vec!["GET /api/properties"]);
}

#[test]
fn one_option_per_property_in_response_order() {
    let (app, _) = FakeBackend::new()
        .properties(Canned::ok(
            r#"[
                {"property_identification_number": "C3"},
                {"property_identification_number": "A1"},
                {"property_identification_number": 17091010010000}
            ]"#,
        ))
        .into_app();

    let body = body_string(handle(htmx(get("/properties")), &app).unwrap());

    let values: Vec<String> = attrs(&body, "#pin-select option", "value")
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    assert_eq!(values, vec!["", "C3", "A1", "17091010010000"]);
    assert_eq!(
        texts(&body, "#pin-select option")[1..],
        ["C3", "A1", "17091010010000"]
    );
    assert!(body.contains("3 properties available"));
}

#[test]
fn property_load_failure_replaces_loader_with_message() {
    let (app, _) = FakeBackend::new()
        .properties(Canned::Unreachable("connection refused"))
        .into_app();

    let body = body_string(handle(htmx(get("/properties")), &app).unwrap());

    assert_eq!(
        texts(&body, "#loader"),
        vec!["Error: Could not load property data from the backend API."]
    );
    assert_eq!(count(&body, "select"), 0);
}

#[test]
fn property_load_without_htmx_renders_full_page() {
    let (app, _) = FakeBackend::new()
        .properties(Canned::ok(r#"[{"property_identification_number": "A1"}]"#))
        .into_app();

    let body = body_string(handle(get("/properties"), &app).unwrap());

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(count(&body, "#pin-select option"), 2);
    assert_eq!(count(&body, "#results-container"), 1);
}

#[test]
fn invalid_selection_never_reaches_backend() {
    let (app, calls) = FakeBackend::new().by_pin(Canned::ok(ONE_ROW)).into_app();

    for uri in [
        "/comparables",
        "/comparables?pin=",
        "/comparables?pin=--%20Select%20a%20PIN%20--",
    ] {
        let body = body_string(handle(htmx(get(uri)), &app).unwrap());
        assert_eq!(
            texts(&body, "[role=alert]"),
            vec!["Please select a valid property PIN."],
            "{uri}"
        );
        assert_eq!(count(&body, "table"), 0);
    }

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn empty_lookup_shows_no_results_and_no_table() {
    let (app, calls) = FakeBackend::new().by_pin(Canned::ok("[]")).into_app();

    let body = body_string(handle(htmx(get("/comparables?pin=A1")), &app).unwrap());

    assert!(body.contains("No comparables found."));
    assert_eq!(count(&body, "table"), 0);
    assert_eq!(*calls.lock().unwrap(), vec!["GET /api/comparables/A1"]);
}

#[test]
fn lookup_row_is_formatted() {
    let (app, _) = FakeBackend::new().by_pin(Canned::ok(ONE_ROW)).into_app();

    let body = body_string(handle(htmx(get("/comparables?pin=Z9")), &app).unwrap());

    assert_eq!(
        texts(&body, "table.comparables thead th"),
        vec!["PIN", "Square Footage", "Year Built", "Confidence Score"]
    );
    assert_eq!(
        texts(&body, "table.comparables tbody td"),
        vec!["A1", "1,000", "1990", "0.8765"]
    );
    assert_eq!(texts(&body, "h2"), vec!["Top 1 Comparables for PIN Z9"]);
}

#[test]
fn lookup_failure_shows_generic_message() {
    let (app, _) = FakeBackend::new()
        .by_pin(Canned::status(500, r#"{"error": "Data not loaded"}"#))
        .into_app();

    let body = body_string(handle(htmx(get("/comparables?pin=A1")), &app).unwrap());

    assert_eq!(texts(&body, "p.error"), vec!["An error occurred during analysis."]);
    assert!(!body.contains("Data not loaded"));
    assert_eq!(count(&body, "table"), 0);
}

#[test]
fn malformed_lookup_body_is_an_error() {
    let (app, _) = FakeBackend::new()
        .by_pin(Canned::ok(r#"{"rows": []}"#))
        .into_app();

    let body = body_string(handle(htmx(get("/comparables?pin=A1")), &app).unwrap());

    assert_eq!(texts(&body, "p.error"), vec!["An error occurred during analysis."]);
}

#[test]
fn pin_query_is_percent_decoded() {
    let (app, calls) = FakeBackend::new().into_app();

    handle(htmx(get("/comparables?pin=17-09%2F101+001")), &app).unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["GET /api/comparables/17-09/101 001"]
    );
}

#[test]
fn whitespace_pin_is_looked_up_as_is() {
    let (app, calls) = FakeBackend::new().into_app();

    let body = body_string(handle(htmx(get("/comparables?pin=%20%20")), &app).unwrap());

    assert_eq!(count(&body, "[role=alert]"), 0);
    assert_eq!(*calls.lock().unwrap(), vec!["GET /api/comparables/  "]);
}

#[test]
fn lookup_without_htmx_renders_picker_with_pin_selected() {
    let (app, calls) = FakeBackend::new()
        .properties(Canned::ok(
            r#"[{"property_identification_number": "C3"}, {"property_identification_number": "A1"}]"#,
        ))
        .by_pin(Canned::ok(ONE_ROW))
        .into_app();

    let body = body_string(handle(get("/comparables?pin=A1"), &app).unwrap());

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(count(&body, "#results-container table"), 1);
    assert_eq!(count(&body, "#loader"), 0);
    assert_eq!(
        attrs(&body, "#pin-select option[selected]", "value"),
        vec![Some("A1".into())]
    );
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["GET /api/comparables/A1", "GET /api/properties"]
    );
}

#[test]
fn invalid_selection_without_htmx_still_renders_picker() {
    let (app, calls) = FakeBackend::new()
        .properties(Canned::ok(r#"[{"property_identification_number": "A1"}]"#))
        .into_app();

    let body = body_string(handle(get("/comparables?pin="), &app).unwrap());

    assert_eq!(
        texts(&body, "#results-container [role=alert]"),
        vec!["Please select a valid property PIN."]
    );
    assert_eq!(
        attrs(&body, "#pin-select option[selected]", "value"),
        vec![Some(String::new())]
    );
    assert_eq!(*calls.lock().unwrap(), vec!["GET /api/properties"]);
}

#[test]
fn analysis_loader_sits_right_before_results() {
    let (app, _) = FakeBackend::new().into_app();

    let page = body_string(handle(get("/"), &app).unwrap());
    assert_eq!(count(&page, "#analysis-loader.htmx-indicator + #results-container"), 1);

    let picker = body_string(handle(htmx(get("/properties")), &app).unwrap());
    assert_eq!(
        attrs(&picker, "#controls", "hx-indicator"),
        vec![Some("#analysis-loader".into())]
    );

    // the stylesheet hides stale results while the indicator is active
    let css = body_string(handle(get("/static/main.css"), &app).unwrap());
    assert!(css.contains("#analysis-loader.htmx-request + #results-container { display: none; }"));
}
