use crate::domain::SearchState;
use crate::templates::{components::address_search, desktop_layout};
use maud::{html, Markup};

pub fn search_page(address: &str, state: &SearchState) -> Markup {
    desktop_layout(
        "Find Comparables by Address",
        html! {
            h1 { "Industrial Property Analysis" }
            p class="lead" { "Enter a property address to find the best comparables." }

            (address_search(address, state))
        },
    )
}
