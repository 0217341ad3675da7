use crate::domain::format::{fixed, group_thousands, plain_or_missing, MISSING};
use crate::domain::Comparable;
use maud::{html, Markup};

pub const NO_COMPARABLE_PROPERTIES: &str = "No comparable properties found.";

/// Card grid for an address search. Pure rendering.
pub fn comparables_display(comparables: &[Comparable]) -> Markup {
    if comparables.is_empty() {
        return html! { p class="empty" { (NO_COMPARABLE_PROPERTIES) } };
    }

    html! {
        section class="comparables-section" {
            h2 { "Top " (comparables.len()) " Comparable Properties" }
            div class="comparables-grid" {
                @for comp in comparables {
                    (comparable_card(comp))
                }
            }
        }
    }
}

fn comparable_card(comp: &Comparable) -> Markup {
    html! {
        article class="card comparable" {
            h3 { (comp.address.as_deref().or(comp.pin.as_deref()).unwrap_or(MISSING)) }
            p { "Type: " span class="value" { (comp.property_type.as_deref().unwrap_or(MISSING)) } }
            p { "Size: " span class="value" { (group_thousands(comp.square_footage)) " sqft" } }
            p { "Age: " span class="value" { (plain_or_missing(comp.age)) " years" } }
            div class="card-footer" {
                p {
                    "Confidence Score: "
                    span class="score" { (fixed(comp.confidence_score, 2)) }
                }
            }
        }
    }
}
