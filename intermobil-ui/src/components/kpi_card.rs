//! KPI Card Component
//!
//! Displays a single summary figure with an explanatory tooltip.

use leptos::*;

use crate::components::icons::InfoIcon;

/// KPI card component
#[component]
pub fn KpiCard(
    /// Card caption
    title: &'static str,
    /// Hover text on the info icon
    tooltip: &'static str,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-info">
                <div class="kpi-title-wrapper">
                    <span class="kpi-title">{title}</span>
                    <div class="info-icon" title=tooltip>
                        <InfoIcon />
                    </div>
                </div>
                <div class="kpi-value">{move || value.get()}</div>
            </div>
        </div>
    }
}
