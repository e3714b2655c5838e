//! Header Component
//!
//! Top bar with the sidebar toggle, greeting and theme switch.

use leptos::*;

use intermobil::Theme;

use crate::components::icons::{MenuIcon, MoonIcon, SunIcon};
use crate::state::use_global_state;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_global_state();

    view! {
        <header class="header">
            <div class="header-left">
                <button
                    class="hamburger-menu"
                    aria-label="Toggle menu"
                    on:click=move |_| state.toggle_sidebar()
                >
                    <MenuIcon />
                </button>
                <h2 class="header-title">"Benvenuto"</h2>
            </div>
            <ThemeToggle />
        </header>
    }
}

/// Shows the moon in light mode and the sun in dark mode
#[component]
fn ThemeToggle() -> impl IntoView {
    let state = use_global_state();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| state.toggle_theme()
        >
            {move || match state.theme() {
                Theme::Light => view! { <MoonIcon /> }.into_view(),
                Theme::Dark => view! { <SunIcon /> }.into_view(),
            }}
        </button>
    }
}
