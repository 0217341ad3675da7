use crate::api::PropertySummary;
use maud::{html, Markup};

pub const PIN_PLACEHOLDER: &str = "-- Select a PIN --";
pub const PROPERTIES_LOAD_ERROR: &str =
    "Error: Could not load property data from the backend API.";

/// Shown until the property list arrives. Fires exactly one request on load
/// and swaps itself for whatever comes back.
pub fn property_loader() -> Markup {
    html! {
        div
            id="loader"
            class="loader"
            hx-get="/properties"
            hx-trigger="load"
            hx-swap="outerHTML"
        {
            "Loading property data..."
        }
    }
}

pub fn properties_load_error() -> Markup {
    html! {
        div id="loader" class="loader error" { (PROPERTIES_LOAD_ERROR) }
    }
}

/// `selected` pre-selects a PIN when the page is re-rendered after a lookup.
pub fn pin_controls(properties: &[PropertySummary], selected: Option<&str>) -> Markup {
    html! {
        form
            id="controls"
            class="controls"
            action="/comparables"
            method="get"
            hx-get="/comparables"
            hx-target="#results-container"
            hx-swap="innerHTML"
            hx-indicator="#analysis-loader"
            hx-disabled-elt="#find-button"
        {
            label for="pin-select" class="sr-only" { "Property PIN" }
            select id="pin-select" name="pin" required {
                option value="" selected[selected.is_none()] { (PIN_PLACEHOLDER) }
                @for property in properties {
                    option
                        value=(property.property_identification_number)
                        selected[selected == Some(property.property_identification_number.as_str())]
                    {
                        (property.property_identification_number)
                    }
                }
            }
            button id="find-button" type="submit" class="primary" { "Find Comparables" }

            p class="microcopy" {
                (properties.len()) " properties available"
            }
        }
    }
}
