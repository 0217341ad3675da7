// templates/pages/home.rs

use crate::templates::{components::analysis_loader, desktop_layout};
use maud::{html, Markup};

/// The PIN picker. `controls` is either the loader, the loaded `<select>`
/// or the load error; `results` fills `#results-container`.
pub fn home_page(controls: Markup, results: Markup) -> Markup {
    desktop_layout(
        "Find Comparables by PIN",
        html! {
            h1 { "Comparable Property Agent" }
            p class="lead" {
                "Select a property by its identification number (PIN) to find the most similar industrial properties."
            }

            (controls)

            (analysis_loader())
            div id="results-container" {
                (results)
            }
        },
    )
}
