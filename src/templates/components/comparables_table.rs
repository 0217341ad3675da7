use crate::domain::format::{fixed, group_thousands, plain_or_missing, MISSING};
use crate::domain::search::INVALID_PIN_ALERT;
use crate::domain::Comparable;
use maud::{html, Markup};

pub const NO_COMPARABLES: &str = "No comparables found.";
pub const ANALYSIS_ERROR: &str = "An error occurred during analysis.";

/// Replaces `#results-container` while a lookup is in flight.
pub fn analysis_loader() -> Markup {
    html! {
        div id="analysis-loader" class="loader htmx-indicator" {
            "Agent is performing analysis..."
        }
    }
}

pub fn comparables_results(pin: &str, comparables: &[Comparable]) -> Markup {
    if comparables.is_empty() {
        return html! { p class="empty" { (NO_COMPARABLES) } };
    }

    html! {
        h2 { "Top " (comparables.len()) " Comparables for PIN " (pin) }
        div class="table-wrap" {
            table class="comparables" {
                thead {
                    tr {
                        th scope="col" { "PIN" }
                        th scope="col" { "Square Footage" }
                        th scope="col" { "Year Built" }
                        th scope="col" { "Confidence Score" }
                    }
                }
                tbody {
                    @for comp in comparables {
                        tr {
                            td { (comp.pin.as_deref().unwrap_or(MISSING)) }
                            td class="num" { (group_thousands(comp.square_footage)) }
                            td class="num" { (plain_or_missing(comp.year_built)) }
                            td class="num" { (fixed(comp.confidence_score, 4)) }
                        }
                    }
                }
            }
        }
    }
}

pub fn analysis_error() -> Markup {
    html! { p class="error" { (ANALYSIS_ERROR) } }
}

pub fn invalid_pin_alert() -> Markup {
    html! { div class="alert" role="alert" { (INVALID_PIN_ALERT) } }
}
