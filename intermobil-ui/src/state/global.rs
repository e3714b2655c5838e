//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use intermobil::{DashboardConfig, ShellState, Theme, View};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Active view, theme and sidebar drawer
    pub shell: RwSignal<ShellState>,
    /// Dashboard settings
    pub config: StoredValue<DashboardConfig>,
}

/// Provide global state to the component tree
pub fn provide_global_state(config: DashboardConfig) {
    let state = GlobalState {
        shell: create_rw_signal(ShellState::with_theme(config.default_theme)),
        config: store_value(config),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn view(&self) -> View {
        self.shell.with(|s| s.view)
    }

    pub fn theme(&self) -> Theme {
        self.shell.with(|s| s.theme)
    }

    pub fn sidebar_open(&self) -> bool {
        self.shell.with(|s| s.sidebar_open)
    }

    pub fn set_view(&self, view: View) {
        self.shell.update(|s| s.set_view(view));
    }

    pub fn toggle_theme(&self) {
        self.shell.update(|s| s.toggle_theme());
    }

    pub fn toggle_sidebar(&self) {
        self.shell.update(|s| s.toggle_sidebar());
    }
}

/// Show a blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
