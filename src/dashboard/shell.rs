//! Shell state: active view, colour theme and the mobile sidebar drawer.

use serde::{Deserialize, Serialize};

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Tour,
    Photos,
    Requests,
    Stats,
    Support,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 5] = [
        View::Tour,
        View::Photos,
        View::Requests,
        View::Stats,
        View::Support,
    ];

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            View::Tour => "Virtual Tour",
            View::Photos => "Foto",
            View::Requests => "Richieste",
            View::Stats => "Statistiche",
            View::Support => "Supporto",
        }
    }

    /// Stable identifier
    pub fn slug(&self) -> &'static str {
        match self {
            View::Tour => "tour",
            View::Photos => "photos",
            View::Requests => "requests",
            View::Stats => "stats",
            View::Support => "support",
        }
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the document `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse `light` / `dark`, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// State of the navigation shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    pub view: View,
    pub theme: Theme,
    pub sidebar_open: bool,
}

impl ShellState {
    /// Initial state with the given theme
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Switch view; the drawer closes so the content is visible on small screens
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.sidebar_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ShellState::default();
        assert_eq!(state.view, View::Tour);
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_toggles() {
        let mut state = ShellState::default();

        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.theme.as_str(), "dark");
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);

        state.toggle_sidebar();
        assert!(state.sidebar_open);
        state.set_view(View::Stats);
        assert_eq!(state.view, View::Stats);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_view_labels() {
        let labels: Vec<&str> = View::ALL.iter().map(View::label).collect();
        assert_eq!(
            labels,
            vec!["Virtual Tour", "Foto", "Richieste", "Statistiche", "Supporto"]
        );

        let slugs: Vec<&str> = View::ALL.iter().map(View::slug).collect();
        assert_eq!(slugs, vec!["tour", "photos", "requests", "stats", "support"]);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse(" Dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
