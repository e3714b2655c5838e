//! Statistics Table Component

use leptos::*;

use intermobil::StatsRow;

/// Detail table, rendered in the order given
#[component]
pub fn StatsTable(#[prop(into)] rows: Signal<Vec<StatsRow>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="stats-table">
                <thead>
                    <tr>
                        <th>"Data"</th>
                        <th>"Nome Tour"</th>
                        <th>"Visitatori Unici"</th>
                        <th>"Tempo Medio"</th>
                        <th>"Azione"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.date}</td>
                                    <td>{row.name}</td>
                                    <td>{row.uv}</td>
                                    <td>{row.avg_time}</td>
                                    <td>
                                        <a
                                            href="#"
                                            class="table-action-link"
                                            on:click=|ev| ev.prevent_default()
                                        >
                                            "Dettagli"
                                        </a>
                                    </td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
