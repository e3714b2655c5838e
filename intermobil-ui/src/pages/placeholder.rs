//! Placeholder Page
//!
//! Views that have no content yet.

use leptos::*;

use intermobil::View;

#[component]
pub fn Placeholder(view: View) -> impl IntoView {
    view! {
        <div class="content-area placeholder-view">
            <h2 class="section-title">{view.label()}</h2>
            <p class="placeholder-text">"Questa sezione è in costruzione."</p>
        </div>
    }
}
