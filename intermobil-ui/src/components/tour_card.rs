//! Tour Card Component
//!
//! Preview image and a button opening the tour in a new tab.

use leptos::*;

use intermobil::TourCard as Tour;

#[component]
pub fn TourCard(tour: Tour) -> impl IntoView {
    let open_tour = move |_| {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(tour.tour_url, "_blank").is_err() {
                web_sys::console::error_1(&format!("Failed to open {}", tour.tour_url).into());
            }
        }
    };

    view! {
        <div class=if tour.is_main { "card main-tour-card" } else { "card" }>
            <div class="card-preview">
                <img src=tour.image_url alt=tour.title class="card-preview-image" />
            </div>
            <div class="card-content">
                <h3 class="card-title">{tour.title}</h3>
                <button class="card-button" on:click=open_tour>
                    "Apri Tour"
                </button>
            </div>
        </div>
    }
}
