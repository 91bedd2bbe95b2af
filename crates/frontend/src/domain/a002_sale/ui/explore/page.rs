use super::edit_modal::SaleEditModal;
use super::state::{delete_applied, ExplorerState, FilterInputs};
use crate::domain::a001_customer::ui::CustomerAutocomplete;
use crate::domain::a002_sale::api;
use crate::domain::a002_sale::shift_cache::ShiftCache;
use crate::shared::components::PaginationControls;
use crate::shared::dialogs::confirm;
use crate::shared::format::{format_date, format_money};
use crate::shared::storage::BrowserStorage;
use crate::shared::toast::use_toast;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_sale::ExploreQuery;
use contracts::enums::PaymentMethod;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Filterable, paginated listing of every sale
#[component]
pub fn SalesExplorerPage() -> impl IntoView {
    let toast = use_toast();
    let state = RwSignal::new(ExplorerState::default());
    let customer = RwSignal::new(None::<Customer>);
    let inputs = RwSignal::new(FilterInputs::default());
    let editing = RwSignal::new(None::<i64>);

    let fetch = move |(token, query): (u64, ExploreQuery)| {
        spawn_local(async move {
            match api::explore(&query).await {
                Ok(page) => {
                    state.try_update(|s| {
                        if !s.apply_page(token, page) {
                            log::debug!("dropping superseded explore page {}", query.page);
                        }
                    });
                }
                Err(e) => {
                    log::error!("explore page {}: {}", query.page, e);
                    state.try_update(|s| s.fail(token));
                    toast.error(e.toast_text());
                }
            }
        });
    };

    let load_first = move || {
        let filter = inputs.with_untracked(|i| {
            i.to_filter(customer.with_untracked(|c| c.as_ref().map(|c| c.id)))
        });
        if let Some(request) = state.try_update(|s| s.apply_filter(filter)) {
            fetch(request);
        }
    };
    load_first();

    let on_filter = move |ev: SubmitEvent| {
        ev.prevent_default();
        load_first();
    };

    let clear_filters = move |_| {
        inputs.set(FilterInputs::default());
        customer.set(None);
        load_first();
    };

    let go_to = Callback::new(move |page: u32| {
        if let Some(request) = state.try_update(|s| s.go_to(page)) {
            fetch(request);
        }
    });

    let reload = move || {
        if let Some(request) = state.try_update(|s| s.reload()) {
            fetch(request);
        }
    };

    let remove = move |id: i64| {
        if !confirm(&format!("¿Eliminar venta #{}?", id)) {
            return;
        }
        spawn_local(async move {
            match api::delete_sale(id).await {
                Ok(body) => {
                    let mut cache = ShiftCache::load(BrowserStorage);
                    state.try_update(|s| delete_applied(s, &mut cache, id));
                    toast.success(body.message_or("Venta eliminada"));
                    reload();
                }
                Err(e) => {
                    log::error!("deleting sale {}: {}", id, e);
                    toast.error(e.toast_text_or("Error al eliminar"));
                }
            }
        });
    };

    let mark_paid = move |id: i64| {
        spawn_local(async move {
            match api::mark_paid(id).await {
                Ok(body) => {
                    state.try_update(|s| s.mark_paid_local(id));
                    toast.success(body.message_or("Venta marcada como pagada"));
                }
                Err(e) => {
                    log::error!("marking sale {} paid: {}", id, e);
                    toast.error(e.toast_text_or("Error al marcar como pagado"));
                }
            }
        });
    };

    let rows = move || {
        state.with(|s| {
            s.sales()
                .iter()
                .map(|sale| {
                    let id = sale.id;
                    let paid = sale.paid;
                    view! {
                        <tr>
                            <td>{format!("#{}", id)}</td>
                            <td>{format_date(sale.sale_date.as_deref().or(sale.created_at.as_deref()))}</td>
                            <td>{sale.customer_name()}</td>
                            <td class="text-right">{format_money(sale.amount)}</td>
                            <td>{sale.payment_label()}</td>
                            <td>{if paid { "Si" } else { "No" }}</td>
                            <td>{sale.delivery_label()}</td>
                            <td>{sale.sales_channel.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__actions">
                                <button class="button button--small" on:click=move |_| editing.set(Some(id))>
                                    "Editar"
                                </button>
                                {(!paid)
                                    .then(|| {
                                        view! {
                                            <button
                                                class="button button--small button--success"
                                                on:click=move |_| mark_paid(id)
                                            >
                                                "Marcar pagado"
                                            </button>
                                        }
                                    })}
                                <button
                                    class="button button--small button--danger"
                                    on:click=move |_| remove(id)
                                >
                                    "Eliminar"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let payment_options = PaymentMethod::all()
        .into_iter()
        .map(|m| view! { <option value=m.code()>{m.display_name()}</option> })
        .collect_view();

    view! {
        <div class="page sales-explorer">
            <form class="filter-panel" on:submit=on_filter>
                <div class="form__group">
                    <label class="form__label">"Cliente"</label>
                    <CustomerAutocomplete selected=customer />
                </div>
                <div class="form__group">
                    <label class="form__label">"Método de pago"</label>
                    <select
                        class="form__select"
                        prop:value=move || inputs.with(|i| i.payment_method.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            inputs.update(|i| i.payment_method = value);
                        }
                    >
                        <option value="">"Todos"</option>
                        {payment_options}
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Pagado"</label>
                    <select
                        class="form__select"
                        prop:value=move || inputs.with(|i| i.paid.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            inputs.update(|i| i.paid = value);
                        }
                    >
                        <option value="">"Todos"</option>
                        <option value="true">"Si"</option>
                        <option value="false">"No"</option>
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Desde"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || inputs.with(|i| i.date_from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            inputs.update(|i| i.date_from = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Hasta"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || inputs.with(|i| i.date_to.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            inputs.update(|i| i.date_to = value);
                        }
                    />
                </div>
                <div class="form__actions">
                    <button type="submit" class="button button--primary">"Filtrar"</button>
                    <button type="button" class="button button--secondary" on:click=clear_filters>
                        "Limpiar"
                    </button>
                </div>
            </form>

            <Show when=move || state.with(|s| s.is_loading)>
                <div class="loading">"Cargando..."</div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Fecha"</th>
                        <th>"Cliente"</th>
                        <th>"Monto"</th>
                        <th>"Método de pago"</th>
                        <th>"Pagado"</th>
                        <th>"Entrega"</th>
                        <th>"Canal"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || state.with(|s| s.result.is_some() && s.sales().is_empty())>
                <div class="table__empty">"No hay ventas para los filtros elegidos"</div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.total_sales()))
                on_page_change=go_to
            />

            {move || {
                editing
                    .get()
                    .map(|id| {
                        view! {
                            <SaleEditModal
                                sale_id=id
                                on_close=Callback::new(move |_| editing.set(None))
                                on_saved=Callback::new(move |_| reload())
                            />
                        }
                    })
            }}
        </div>
    }
}
