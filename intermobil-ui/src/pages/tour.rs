//! Virtual Tour Page
//!
//! The main showroom tour above a grid of demo tours.

use leptos::*;

use intermobil::dashboard::{DEMO_TOURS, MAIN_TOUR};

use crate::components::TourCard;

#[component]
pub fn Tour() -> impl IntoView {
    view! {
        <div class="content-area">
            <section>
                <h2 class="section-title">"Showroom Principale"</h2>
                <TourCard tour=MAIN_TOUR />
            </section>

            <section class="demo-section">
                <h2 class="section-title">"Tour Demo"</h2>
                <div class="demo-tours-grid">
                    {DEMO_TOURS
                        .into_iter()
                        .map(|tour| view! { <TourCard tour=tour /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
