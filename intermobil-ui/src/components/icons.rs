//! Line Icons
//!
//! Inline SVG icons, 24×24 stroked with the current text colour.

use leptos::*;

use intermobil::View;

/// Wrapper applying the shared stroke attributes
#[component]
fn Icon(
    #[prop(default = 24)]
    size: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {children()}
        </svg>
    }
}

/// Sidebar icon for a view
#[component]
pub fn ViewIcon(view: View) -> impl IntoView {
    match view {
        View::Tour => view! {
            <Icon>
                <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" />
                <circle cx="12" cy="10" r="3" />
            </Icon>
        }
        .into_view(),
        View::Photos => view! {
            <Icon>
                <rect x="3" y="3" width="18" height="18" rx="2" ry="2" />
                <circle cx="8.5" cy="8.5" r="1.5" />
                <polyline points="21 15 16 10 5 21" />
            </Icon>
        }
        .into_view(),
        View::Requests => view! {
            <Icon>
                <path d="M22 12h-6l-2 3h-4l-2-3H2" />
                <path d="M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z" />
            </Icon>
        }
        .into_view(),
        View::Stats => view! {
            <Icon>
                <line x1="18" y1="20" x2="18" y2="10" />
                <line x1="12" y1="20" x2="12" y2="4" />
                <line x1="6" y1="20" x2="6" y2="14" />
            </Icon>
        }
        .into_view(),
        View::Support => view! {
            <Icon>
                <circle cx="12" cy="12" r="10" />
                <path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" />
                <line x1="12" y1="17" x2="12.01" y2="17" />
            </Icon>
        }
        .into_view(),
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <Icon>
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </Icon>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <Icon>
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
        </Icon>
    }
}

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <Icon>
            <circle cx="12" cy="12" r="5" />
            <line x1="12" y1="1" x2="12" y2="3" />
            <line x1="12" y1="21" x2="12" y2="23" />
            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
            <line x1="1" y1="12" x2="3" y2="12" />
            <line x1="21" y1="12" x2="23" y2="12" />
            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
        </Icon>
    }
}

#[component]
pub fn InfoIcon() -> impl IntoView {
    view! {
        <Icon size=16>
            <circle cx="12" cy="12" r="10" />
            <line x1="12" y1="16" x2="12" y2="12" />
            <line x1="12" y1="8" x2="12.01" y2="8" />
        </Icon>
    }
}

#[component]
pub fn DashIcon() -> impl IntoView {
    view! {
        <Icon>
            <line x1="5" y1="12" x2="19" y2="12" />
        </Icon>
    }
}
