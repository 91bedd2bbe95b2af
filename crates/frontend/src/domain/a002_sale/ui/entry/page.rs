use super::state::{build_sale_payload, channel_of, customer_of, EditLoads, EntryMode, HIGHLIGHT_MS};
use crate::domain::a001_customer::ui::{CustomerAutocomplete, CustomerFormModal};
use crate::domain::a002_sale::api;
use crate::domain::a002_sale::shift_cache::ShiftCache;
use crate::domain::a002_sale::ui::fields::{SaleFields, SaleFieldsView};
use crate::shared::components::StatCard;
use crate::shared::dialogs::{confirm, scroll_to_top};
use crate::shared::download::download_receipt;
use crate::shared::format::{format_date, format_integer, format_money, today};
use crate::shared::icons::icon;
use crate::shared::storage::{last_channel, remember_channel, BrowserStorage};
use crate::shared::toast::use_toast;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_sale::LastSale;
use contracts::enums::SALES_CHANNELS;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sales entry: create/edit form, shift counters and the latest sales
#[component]
pub fn SaleEntryPage() -> impl IntoView {
    let toast = use_toast();

    let customer = RwSignal::new(None::<Customer>);
    let channel = RwSignal::new(last_channel(&BrowserStorage));
    let fields = RwSignal::new(SaleFields::default());
    let mode = RwSignal::new(EntryMode::Create);
    let edit_loads = StoredValue::new(EditLoads::default());
    let (saving, set_saving) = signal(false);

    let recent = RwSignal::new(Vec::<LastSale>::new());
    let highlighted = RwSignal::new(None::<i64>);

    let cache = StoredValue::new_local(ShiftCache::load(BrowserStorage));
    let totals = RwSignal::new(cache.with_value(|c| c.totals()));
    let refresh_totals = move || {
        if let Some(t) = cache.try_with_value(|c| c.totals()) {
            totals.set(t);
        }
    };

    // None: closed; Some(None): new customer; Some(Some(c)): edit c
    let customer_modal = RwSignal::new(None::<Option<Customer>>);

    let load_recent = move |highlight: Option<i64>| {
        spawn_local(async move {
            match api::last_sales().await {
                Ok(rows) => {
                    recent.set(rows);
                    if let Some(id) = highlight {
                        highlighted.set(Some(id));
                        TimeoutFuture::new(HIGHLIGHT_MS).await;
                        highlighted.try_update(|h| {
                            if *h == Some(id) {
                                *h = None;
                            }
                        });
                    }
                }
                Err(e) => {
                    log::error!("loading last sales: {}", e);
                    toast.error(e.toast_text());
                }
            }
        });
    };
    load_recent(None);

    let reset_form = move || {
        edit_loads.try_update_value(|l| l.cancel());
        mode.set(EntryMode::Create);
        customer.set(None);
        fields.set(SaleFields::default());
        channel.set(last_channel(&BrowserStorage));
    };

    let select_channel = move |value: &'static str| {
        remember_channel(&BrowserStorage, value);
        channel.set(Some(value.to_string()));
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match build_sale_payload(
            customer.get_untracked().as_ref(),
            channel.get_untracked().as_deref(),
            &fields.get_untracked(),
            today(),
        ) {
            Ok(p) => p,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };
        let editing = mode.get_untracked().editing_id();

        set_saving.set(true);
        spawn_local(async move {
            let result = match editing {
                None => api::create_sale(&payload).await.map(|created| {
                    cache.try_update_value(|c| c.add(created.sale_id, payload.amount, payload.paid));
                    (created.sale_id, created.message)
                }),
                Some(id) => api::update_sale(id, &payload).await.map(|body| {
                    cache.try_update_value(|c| c.upsert(id, payload.amount, payload.paid));
                    (id, body.message)
                }),
            };
            set_saving.set(false);

            match result {
                Ok((id, message)) => {
                    log::info!("sale {} saved", id);
                    toast.success(
                        message
                            .filter(|m| !m.trim().is_empty())
                            .unwrap_or_else(|| "Operación completada".to_string()),
                    );
                    refresh_totals();
                    reset_form();
                    load_recent(Some(id));
                }
                Err(e) => {
                    log::error!("saving sale: {}", e);
                    toast.error(e.toast_text());
                }
            }
        });
    };

    let start_edit = move |id: i64| {
        let Some(token) = edit_loads.try_update_value(|l| l.begin()) else {
            return;
        };
        spawn_local(async move {
            match api::get_sale(id).await {
                Ok(sale) => {
                    let Some(next) = edit_loads.try_with_value(|l| l.accept(token, &sale)).flatten() else {
                        log::debug!("dropping superseded load of sale {}", id);
                        return;
                    };
                    customer.set(customer_of(&sale));
                    channel.set(channel_of(&sale));
                    fields.set(SaleFields::from_sale(&sale));
                    mode.set(next);
                    scroll_to_top();
                }
                Err(e) => {
                    log::error!("loading sale {}: {}", id, e);
                    if edit_loads.try_with_value(|l| l.is_current(token)) == Some(true) {
                        toast.error(e.toast_text());
                    }
                }
            }
        });
    };

    let remove = move |id: i64| {
        if !confirm(&format!("¿Eliminar venta {}?", id)) {
            return;
        }
        spawn_local(async move {
            match api::delete_sale(id).await {
                Ok(body) => {
                    cache.try_update_value(|c| c.remove(id));
                    refresh_totals();
                    if mode.get_untracked().editing_id() == Some(id) {
                        reset_form();
                    }
                    toast.success(body.message_or("Venta eliminada"));
                    load_recent(None);
                }
                Err(e) => {
                    log::error!("deleting sale {}: {}", id, e);
                    toast.error(e.toast_text_or("Error al eliminar"));
                }
            }
        });
    };

    let receipt = move |id: i64| {
        spawn_local(async move {
            if let Err(e) = download_receipt(id).await {
                log::error!("receipt for sale {}: {}", id, e);
                toast.error("Error al descargar el comprobante");
            }
        });
    };

    let reset_shift = move |_| {
        if !confirm("¿Estás seguro de resetear el contador del turno?") {
            return;
        }
        cache.try_update_value(|c| c.reset());
        refresh_totals();
        toast.success("Contador reseteado");
    };

    let channel_radios = SALES_CHANNELS
        .iter()
        .copied()
        .map(|option| {
            let id = format!("entry-channel-{}", option);
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=id.clone()
                        type="radio"
                        class="form__radio"
                        name="entry-channel"
                        value=option
                        prop:checked=move || channel.with(|c| c.as_deref() == Some(option))
                        on:change=move |_| select_channel(option)
                    />
                    <label class="form__radio-label" for=id>
                        {option}
                    </label>
                </div>
            }
        })
        .collect_view();

    let recent_rows = move || {
        let marked = highlighted.get();
        recent
            .get()
            .into_iter()
            .map(|sale| {
                let id = sale.id;
                let row_class = if marked == Some(id) { "row--highlight" } else { "" };
                view! {
                    <tr class=row_class>
                        <td>{format_date(sale.sale_date.as_deref())}</td>
                        <td>{sale.customer_name()}</td>
                        <td class="text-right">{format_money(sale.amount)}</td>
                        <td>{sale.payment_label()}</td>
                        <td class="table__actions">
                            <button class="button button--small" on:click=move |_| start_edit(id)>
                                "Editar"
                            </button>
                            <button
                                class="button button--small button--danger"
                                on:click=move |_| remove(id)
                            >
                                "Eliminar"
                            </button>
                            <button class="button button--small" on:click=move |_| receipt(id)>
                                "Descargar comprobante"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page sales-entry">
            <section class="shift-dashboard">
                <div class="stat-grid">
                    <StatCard
                        label="Total vendido"
                        value=Signal::derive(move || format_money(totals.get().total))
                    />
                    <StatCard
                        label="Cantidad de ventas"
                        value=Signal::derive(move || format_integer(totals.get().count as f64))
                    />
                    <StatCard
                        label="Total pagado"
                        value=Signal::derive(move || format_money(totals.get().paid))
                    />
                    <StatCard
                        label="Total impago"
                        value=Signal::derive(move || format_money(totals.get().unpaid))
                        warning=true
                    />
                </div>
                <button class="button button--secondary" on:click=reset_shift>
                    "Resetear contador"
                </button>
            </section>

            <form class="form sale-form" on:submit=submit>
                <h2 class="form__title">{move || mode.get().title()}</h2>

                <div class="form__group">
                    <label class="form__label">"Cliente"</label>
                    <div class="customer-picker">
                        <CustomerAutocomplete selected=customer show_info=true />
                        <button
                            type="button"
                            class="button button--icon"
                            title="Nuevo cliente"
                            on:click=move |_| customer_modal.set(Some(None))
                        >
                            {icon("user-plus")}
                        </button>
                        <Show when=move || customer.with(Option::is_some)>
                            <button
                                type="button"
                                class="button button--small"
                                on:click=move |_| customer_modal.set(Some(customer.get_untracked()))
                            >
                                "Editar cliente"
                            </button>
                        </Show>
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label">"Punto de venta"</label>
                    <div class="form__radio-group">{channel_radios}</div>
                </div>

                <SaleFieldsView fields=fields name="entry" min_shipping_date=today() />

                <div class="form__actions">
                    <button
                        type="submit"
                        class=move || mode.get().submit_class()
                        disabled=move || saving.get()
                    >
                        {move || mode.get().submit_label()}
                    </button>
                    <Show when=move || mode.with(|m| m.editing_id().is_some())>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| reset_form()
                        >
                            "Cancelar"
                        </button>
                    </Show>
                </div>
            </form>

            <section class="recent-sales">
                <h3>"Últimas ventas"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Fecha"</th>
                            <th>"Cliente"</th>
                            <th>"Monto"</th>
                            <th>"Método de pago"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>{recent_rows}</tbody>
                </table>
            </section>

            {move || {
                customer_modal
                    .get()
                    .map(|editing| {
                        view! {
                            <CustomerFormModal
                                customer=editing
                                on_close=Callback::new(move |_| customer_modal.set(None))
                                on_updated=Callback::new(move |updated: Customer| {
                                    let same = customer
                                        .with_untracked(|c| c.as_ref().map(|c| c.id) == Some(updated.id));
                                    if same {
                                        customer.set(Some(updated));
                                    }
                                })
                            />
                        }
                    })
            }}
        </div>
    }
}
