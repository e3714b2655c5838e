//! Sidebar Component
//!
//! Brand logo and navigation between views.

use leptos::*;

use intermobil::View;

use crate::components::icons::ViewIcon;
use crate::state::use_global_state;

/// Sidebar navigation; slides in on small screens when open
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_global_state();

    view! {
        <aside class=move || if state.sidebar_open() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <h1 class="sidebar-logo">"Intermobil"<span>"."</span></h1>
            </div>
            <nav class="sidebar-nav">
                {View::ALL.into_iter().map(|view| view! { <NavItem view=view /> }).collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation entry
#[component]
fn NavItem(view: View) -> impl IntoView {
    let state = use_global_state();

    let is_active = create_memo(move |_| state.view() == view);

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        state.set_view(view);
    };

    view! {
        <a
            href="#"
            data-view=view.slug()
            class=move || if is_active.get() { "nav-item active" } else { "nav-item" }
            on:click=on_click
        >
            <ViewIcon view=view />
            <span>{view.label()}</span>
        </a>
    }
}
