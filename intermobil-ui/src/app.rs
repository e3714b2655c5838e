//! App Root Component
//!
//! Global providers, the navigation shell and view switching.

use leptos::*;

use intermobil::{DashboardConfig, View};

use crate::components::{Header, Sidebar};
use crate::pages::{Placeholder, Stats, Tour};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state(DashboardConfig::default());
    let state = use_global_state();

    // Mirror the theme on <html data-theme="...">
    create_effect(move |_| {
        let theme = state.theme();
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });

    // Only a view change remounts the content
    let current = create_memo(move |_| state.view());

    view! {
        <div class="dashboard-layout">
            <Sidebar />
            <main class="main-content">
                <Header />
                {move || match current.get() {
                    View::Tour => view! { <Tour /> }.into_view(),
                    View::Stats => view! { <Stats /> }.into_view(),
                    other => view! { <Placeholder view=other /> }.into_view(),
                }}
            </main>
        </div>
    }
}
