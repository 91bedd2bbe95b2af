use crate::dashboards::d001_reports::api;
use crate::dashboards::d001_reports::charts::{
    channel_config, daily_sales_config, delivery_config, CHANNEL_CHART, DAILY_CHART,
    DELIVERY_CHART,
};
use crate::shared::charts::{render_chart, ChartHandle, ChartRegistry};
use crate::shared::components::StatCard;
use crate::shared::format::{format_integer, format_money};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::dashboards::d001_reports::{ChangesCounters, DashboardData};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let toast = use_toast();
    let data = RwSignal::new(None::<DashboardData>);
    let changes = RwSignal::new(None::<ChangesCounters>);
    let charts = StoredValue::new_local(ChartRegistry::<ChartHandle>::default());

    let draw = move |d: &DashboardData| {
        let configs = [
            (DAILY_CHART, daily_sales_config(&d.daily_sales)),
            (CHANNEL_CHART, channel_config(&d.channels)),
            (DELIVERY_CHART, delivery_config(&d.delivery_types)),
        ];
        for (key, config) in configs {
            charts.try_update_value(|registry| {
                registry.release(key);
                match render_chart(key, &config) {
                    Ok(handle) => registry.replace(key, handle),
                    Err(e) => log::error!("chart {}: {:?}", key, e),
                }
            });
        }
    };

    let load = move || {
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(d) => {
                    log::debug!("dashboard: {} days, {} channels", d.daily_sales.len(), d.channels.len());
                    draw(&d);
                    data.set(Some(d));
                }
                Err(e) => {
                    log::error!("loading dashboard: {}", e);
                    toast.error("Error cargando dashboard");
                }
            }
        });
        spawn_local(async move {
            match api::fetch_changes_stats().await {
                Ok(stats) => changes.set(Some(stats.stats)),
                Err(e) => log::error!("loading change stats: {}", e),
            }
        });
    };
    load();

    on_cleanup(move || {
        charts.try_update_value(|registry| registry.clear());
    });

    let current = move || data.with(|d| d.as_ref().map(|d| d.comparison.current.clone()).unwrap_or_default());
    let change = move |pick: fn(&DashboardData) -> f64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(pick)))
    };
    let changes_value = move |pick: fn(&ChangesCounters) -> u64| {
        Signal::derive(move || {
            changes.with(|c| c.as_ref().map(|c| pick(c).to_string()).unwrap_or_else(|| "-".to_string()))
        })
    };

    let top_rows = move || {
        let customers = data.with(|d| d.as_ref().map(|d| d.top_customers.clone()).unwrap_or_default());
        if customers.is_empty() {
            return view! {
                <tr>
                    <td colspan="4" class="table__empty">"No hay datos"</td>
                </tr>
            }
                .into_any();
        }
        customers
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                view! {
                    <tr>
                        <td>{i + 1}</td>
                        <td>{c.name}</td>
                        <td>{c.purchases}</td>
                        <td class="text-right">{format_money(c.total)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="reports-dashboard">
            <div class="page__header">
                <h2>"Reportes"</h2>
                <button class="button button--icon" title="Actualizar" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Ventas del mes"
                    value=Signal::derive(move || format_money(current().total_amount))
                    change_percent=change(|d| d.comparison.changes.total_amount)
                    subtitle=Signal::derive(move || {
                        Some(format!("{} ventas", format_integer(current().total_sales as f64)))
                    })
                />
                <StatCard
                    label="Ticket promedio"
                    value=Signal::derive(move || format_money(current().avg_ticket))
                    change_percent=change(|d| d.comparison.changes.avg_ticket)
                />
                <StatCard
                    label="Por cobrar"
                    value=Signal::derive(move || format_money(current().unpaid_amount))
                    subtitle=Signal::derive(move || Some(format!("{} ventas impagas", current().unpaid_sales)))
                    warning=true
                />
                <StatCard label="Cambios este mes" value=changes_value(|c| c.changes_this_month) />
                <StatCard label="Cambios pendientes" value=changes_value(|c| c.pending_count) />
            </div>

            <div class="chart-grid">
                <div class="chart-card chart-card--wide">
                    <h3>"Ventas diarias"</h3>
                    <canvas id=DAILY_CHART></canvas>
                </div>
                <div class="chart-card">
                    <h3>"Por canal"</h3>
                    <canvas id=CHANNEL_CHART></canvas>
                </div>
                <div class="chart-card">
                    <h3>"Por tipo de entrega"</h3>
                    <canvas id=DELIVERY_CHART></canvas>
                </div>
            </div>

            <div class="top-customers">
                <h3>"Top clientes"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Cliente"</th>
                            <th>"Compras"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>{top_rows}</tbody>
                </table>
            </div>
        </section>
    }
}
