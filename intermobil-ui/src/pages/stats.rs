//! Statistics Page
//!
//! KPIs, the visitor chart and the detail table, with CSV import/export and
//! a date filter.

use leptos::*;
use wasm_bindgen::JsCast;

use intermobil::stats::{format_count, format_duration, is_csv_file, to_csv_string};
use intermobil::ImportError;

use crate::components::{KpiCard, StatsTable, VisitorChart};
use crate::files::{download_text, read_text_file};
use crate::state::{alert, parse_date_input, use_global_state, StatsState};

const EXPORT_FILENAME: &str = "statistiche.csv";

/// Statistics page
#[component]
pub fn Stats() -> impl IntoView {
    let state = use_global_state();
    let stats = StatsState::new(state.config.with_value(|c| c.summary_options()));
    let file_input = create_node_ref::<html::Input>();

    let snapshot = stats.snapshot;
    let kpis = move || snapshot.with(|s| s.kpis);

    let on_import_click = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !is_csv_file(&file.name(), &file.type_()) {
            alert(&ImportError::NotCsv.alert_message());
            input.set_value("");
            return;
        }

        read_text_file(&file, move |result| {
            match result.and_then(|text| stats.apply_import(&text)) {
                Ok(count) => {
                    logging::log!("Imported {} rows", count);
                    alert("Dati importati con successo!");
                }
                Err(e) => {
                    logging::warn!("Import failed: {}", e);
                    alert(&e.alert_message());
                }
            }
            // Picking the same file again must fire `change`
            input.set_value("");
        });
    };

    let on_export = move |_| {
        let csv = snapshot.with_untracked(|s| to_csv_string(&s.table));
        let result = csv
            .map_err(|e| e.to_string())
            .and_then(|csv| download_text(EXPORT_FILENAME, &csv, "text/csv;charset=utf-8"));

        if let Err(e) = result {
            logging::error!("Export failed: {}", e);
        }
    };

    view! {
        <div class="content-area">
            <div class="stats-header-filters">
                <div class="filter-group">
                    <label class="filter-label">"Intervallo di Date"</label>
                    <div class="date-range-selector">
                        <input
                            type="date"
                            class="filter-input"
                            on:change=move |ev| stats.set_from(parse_date_input(&event_target_value(&ev)))
                        />
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <line x1="5" y1="12" x2="19" y2="12" />
                        </svg>
                        <input
                            type="date"
                            class="filter-input"
                            on:change=move |ev| stats.set_to(parse_date_input(&event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="filter-actions">
                    <button class="action-button" on:click=on_export>"Esporta"</button>
                    <button class="primary-button" on:click=on_import_click>"Importa CSV"</button>
                    <input
                        type="file"
                        node_ref=file_input
                        accept=".csv,text/csv"
                        style="display: none"
                        on:change=on_file_change
                    />
                </div>
            </div>

            <div class="kpi-grid">
                <KpiCard
                    title="Totale Tour"
                    tooltip="Numero di tour unici attivi nel periodo."
                    value=Signal::derive(move || kpis().total_tours.to_string())
                />
                <KpiCard
                    title="Visitatori Unici (UV)"
                    tooltip="Numero totale di visitatori unici."
                    value=Signal::derive(move || format_count(kpis().unique_visitors))
                />
                <KpiCard
                    title="Tempo Medio"
                    tooltip="Tempo medio di permanenza per sessione."
                    value=Signal::derive(move || format_duration(kpis().average_seconds))
                />
                <KpiCard
                    title="Richieste Totali"
                    tooltip="Numero totale di richieste di informazioni inviate."
                    value=Signal::derive(move || kpis().total_requests.to_string())
                />
            </div>

            <div class="statistical-data-container">
                <div class="chart-header">
                    <h3 class="chart-title">"Panoramica Visitatori"</h3>
                    <div class="chart-legend">
                        <div class="legend-item">
                            <span class="legend-marker uv"></span>
                            "Visitatori Unici (UV)"
                        </div>
                        <div class="legend-item">
                            <span class="legend-marker avg-time"></span>
                            "Tempo Medio"
                        </div>
                    </div>
                </div>
                <VisitorChart points=Signal::derive(move || snapshot.with(|s| s.chart.clone())) />
            </div>

            <div class="table-container">
                <div class="table-header-filters">
                    <h3 class="section-title no-margin">"Dati Dettagliati"</h3>
                </div>
                <StatsTable rows=Signal::derive(move || snapshot.with(|s| s.table.clone())) />
            </div>
        </div>
    }
}
