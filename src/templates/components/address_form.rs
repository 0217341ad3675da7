use crate::domain::SearchState;
use crate::templates::components::comparables_display;
use maud::{html, Markup};

/// The whole address search component: form, error line and results.
///
/// The fragment replaces itself on submit, so the typed address and the
/// button state always come from `state`. During the request htmx disables
/// the button and the CSS swaps in the busy label.
pub fn address_search(address: &str, state: &SearchState) -> Markup {
    html! {
        div id="address-search" class="address-search" {
            form
                action="/search"
                method="post"
                hx-post="/search"
                hx-target="#address-search"
                hx-swap="outerHTML"
                hx-disabled-elt="#address-submit"
                class="search-form"
            {
                label class="sr-only" for="address" { "Property address" }
                input
                    type="text"
                    id="address"
                    name="address"
                    value=(address)
                    placeholder="e.g., 123 Main St, Chicago, IL"
                    required;

                button
                    id="address-submit"
                    type="submit"
                    class="primary"
                    disabled[state.submit_disabled()]
                    aria-busy=(if state.is_loading() { "true" } else { "false" })
                {
                    span class="btn-text" { (state.submit_label()) }
                    @if !state.is_loading() {
                        span class="busy-label" aria-hidden="true" { (SearchState::Loading.submit_label()) }
                    }
                }
            }

            @if let Some(message) = state.error() {
                p class="error" role="alert" { (message) }
            }

            @if let Some(comparables) = state.comparables() {
                (comparables_display(comparables))
            }
        }
    }
}
