use super::api;
use super::state::{StatusRow, StatusView};
use crate::shared::dialogs::confirm;
use crate::shared::format::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::projections::p001_delivery_status::DeliveryChannel;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pending/overdue worklist of one delivery channel
#[component]
pub fn DeliveryStatusPage(channel: DeliveryChannel) -> impl IntoView {
    let toast = use_toast();
    let data = RwSignal::new(StatusView::default());
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_buckets(channel).await {
                Ok(buckets) => {
                    let now = chrono::Local::now().naive_local();
                    log::debug!(
                        "{}: {} pending, {} overdue",
                        channel.stats_path(),
                        buckets.total_pending,
                        buckets.total_overdue
                    );
                    data.set(StatusView::from_buckets(channel, buckets, now));
                }
                Err(e) => {
                    log::error!("{}: {}", channel.stats_path(), e);
                    toast.error("Error al cargar datos");
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let complete = move |sale_id: i64| {
        if !confirm(&channel.confirm_text(sale_id)) {
            return;
        }
        spawn_local(async move {
            match api::complete(channel, sale_id).await {
                Ok(body) => {
                    toast.success(body.message_or("Operación completada"));
                    load();
                }
                Err(e) => {
                    log::error!("{}: {}", channel.action_path(sale_id), e);
                    toast.error(e.toast_text_or(channel.action_error()));
                }
            }
        });
    };

    let contact_heading = if channel.shows_address() {
        "Dirección"
    } else {
        "Teléfono"
    };

    let render_rows = move |rows: Vec<StatusRow>| {
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan="8" class="table__empty">{channel.empty_text()}</td>
                </tr>
            }
                .into_any();
        }
        rows.into_iter()
            .map(|row| {
                let id = row.sale.id;
                let row_class = if row.overdue { "row--overdue" } else { "" };
                view! {
                    <tr class=row_class>
                        <td>{format!("#{}", id)}</td>
                        <td>{row.sale.customer_name()}</td>
                        <td>{row.contact(channel)}</td>
                        <td class="text-right">{format_money(row.sale.amount)}</td>
                        <td>{row.age.label()}</td>
                        <td>{format_date(row.sale.created_at.as_deref())}</td>
                        <td>{row.sale.notes_or_dash().to_string()}</td>
                        <td>
                            <button class="button button--small button--success" on:click=move |_| complete(id)>
                                {channel.action_label()}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let table = move |rows: Vec<StatusRow>| {
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Cliente"</th>
                        <th>{contact_heading}</th>
                        <th>"Monto"</th>
                        <th>"Antigüedad"</th>
                        <th>"Creado"</th>
                        <th>"Notas"</th>
                        <th>"Acción"</th>
                    </tr>
                </thead>
                <tbody>{render_rows(rows)}</tbody>
            </table>
        }
    };

    view! {
        <div class="page delivery-status">
            <div class="page__header">
                <h2>{channel.title()}</h2>
                <button class="button button--icon" title="Actualizar" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
            </div>

            <div class="counters">
                <div class="counter">
                    <span class="counter__label">"Pendientes"</span>
                    <span class="counter__value">{move || data.with(|d| d.total_pending)}</span>
                </div>
                <div class="counter counter--warning">
                    <span class="counter__label">{channel.overdue_heading()}</span>
                    <span class="counter__value">{move || data.with(|d| d.total_overdue)}</span>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <Show when=move || data.with(|d| d.shows_overdue())>
                <section class="status-section status-section--overdue">
                    <h3>{channel.overdue_heading()}</h3>
                    {move || table(data.with(|d| d.overdue.clone()))}
                </section>
            </Show>

            <section class="status-section">
                <h3>"Pendientes"</h3>
                {move || table(data.with(|d| d.pending.clone()))}
            </section>
        </div>
    }
}
