use super::api;
use super::state::{parse_dragged_id, CalendarState, ShipmentDraft};
use crate::shared::download::{day_labels_path, open_in_new_tab, sale_label_path};
use crate::shared::format::{format_day, iso_date, today};
use crate::shared::icons::icon;
use crate::shared::toast::{use_toast, ToastKind, CALENDAR_TOAST_MS};
use chrono::NaiveDate;
use contracts::domain::a002_sale::{Sale, ShipmentUpdate};
use contracts::projections::p002_shipment_calendar::CalendarWindow;
use leptos::ev::DragEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Courier shipments per day, with drag-and-drop rescheduling
#[component]
pub fn ShipmentCalendarPage(window: CalendarWindow) -> impl IntoView {
    let toast = use_toast();
    let notify = move |text: &str, kind: ToastKind| toast.show_for(text, kind, CALENDAR_TOAST_MS);

    let state = RwSignal::new(CalendarState::new(window, today()));
    let drag_over = RwSignal::new(None::<NaiveDate>);
    let (saving, set_saving) = signal(false);

    let load_day = move |date: NaiveDate| {
        let Some(token) = state.try_update(|s| s.select_day(date)) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_day(date).await {
                Ok(sales) => {
                    let count = sales.len();
                    state.try_update(|s| {
                        if s.apply_day(token, sales) {
                            log::debug!("shipments on {}: {}", date, count);
                        }
                    });
                }
                Err(e) => {
                    log::error!("shipments on {}: {}", date, e);
                    notify("Error al cargar envíos", ToastKind::Error);
                }
            }
        });
    };

    // Reload counts, then open `then_open` once they are in
    let load_calendar = move |then_open: Option<NaiveDate>| {
        let Some(token) = state.try_update(|s| s.begin_counts()) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_counts().await {
                Ok(counts) => {
                    let applied = state.try_update(|s| s.apply_counts(token, counts)).unwrap_or(false);
                    if applied {
                        if let Some(date) = then_open {
                            load_day(date);
                        }
                    }
                }
                Err(e) => {
                    log::error!("shipment calendar: {}", e);
                    notify("Error al cargar el calendario", ToastKind::Error);
                }
            }
        });
    };
    load_calendar(Some(today()));

    let reschedule = move |sale_id: i64, date: NaiveDate| {
        spawn_local(async move {
            match api::update_shipment(sale_id, &ShipmentUpdate::reschedule(date)).await {
                Ok(_) => {
                    log::info!("sale {} rescheduled to {}", sale_id, date);
                    notify("Envío reprogramado", ToastKind::Success);
                    let next = state.try_update(|s| s.after_reschedule());
                    load_calendar(next);
                }
                Err(e) => {
                    log::error!("rescheduling sale {}: {}", sale_id, e);
                    notify("Error moviendo el envío", ToastKind::Error);
                }
            }
        });
    };

    let save_draft = move || {
        if saving.get_untracked() {
            return;
        }
        let Some(draft) = state.with_untracked(|s| s.draft.clone()) else {
            return;
        };
        let update = match draft.to_update() {
            Ok(u) => u,
            Err(msg) => {
                notify(&msg, ToastKind::Error);
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = api::update_shipment(draft.sale_id, &update).await;
            set_saving.set(false);
            match result {
                Ok(_) => {
                    notify("Envío actualizado", ToastKind::Success);
                    state.try_update(|s| s.cancel_edit());
                    let active = state.with_untracked(|s| s.active);
                    load_calendar(active);
                }
                Err(e) => {
                    log::error!("saving shipment {}: {}", draft.sale_id, e);
                    notify("Error al guardar", ToastKind::Error);
                }
            }
        });
    };

    let on_drop = move |ev: DragEvent, date: NaiveDate| {
        ev.prevent_default();
        drag_over.set(None);
        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data("text/plain").ok())
            .unwrap_or_default();
        match parse_dragged_id(&payload) {
            Some(sale_id) => reschedule(sale_id, date),
            None => log::warn!("drop without a sale id: {:?}", payload),
        }
    };

    // Draft edits change `state` on every keystroke; render only from what the tiles show
    let day_tiles = Memo::new(move |_| state.with(|s| s.tiles()));
    let tiles = move || {
        let hovered = drag_over.get();
        day_tiles
            .get()
            .into_iter()
            .map(|tile| {
                let date = tile.date;
                let mut class = tile.css_class();
                if hovered == Some(date) {
                    class.push_str(" drag-hover");
                }
                view! {
                    <div
                        class=class
                        data-date=iso_date(date)
                        on:click=move |_| load_day(date)
                        on:dragover=move |ev: DragEvent| {
                            ev.prevent_default();
                            if drag_over.get_untracked() != Some(date) {
                                drag_over.set(Some(date));
                            }
                        }
                        on:dragleave=move |_| {
                            if drag_over.get_untracked() == Some(date) {
                                drag_over.set(None);
                            }
                        }
                        on:drop=move |ev: DragEvent| on_drop(ev, date)
                    >
                        {tile.is_today.then(|| view! { <span class="today-badge">"HOY"</span> })}
                        <strong>{format_day(date)}</strong>
                        <span class="badge">{format!("{} envíos", tile.count)}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let card = move |sale: Sale, day: NaiveDate, editing: Option<i64>| {
        let id = sale.id;
        if editing == Some(id) {
            return view! { <ShipmentEditCard state=state saving=saving on_save=Callback::new(move |_| save_draft()) /> }
                .into_any();
        }
        let shown_date = sale.shipping_date.unwrap_or(day);
        view! {
            <div
                class="shipment-card"
                draggable="true"
                on:dragstart=move |ev: DragEvent| {
                    if let Some(dt) = ev.data_transfer() {
                        if let Err(e) = dt.set_data("text/plain", &id.to_string()) {
                            log::warn!("drag start for sale {} failed: {:?}", id, e);
                        }
                    }
                }
            >
                <strong>{format!("Venta #{}", id)}</strong>
                <div>"Cliente: "{sale.customer_name()}</div>
                <div>"Fecha envío: "{format_day(shown_date)}</div>
                <div>"Notas: "{sale.notes_or_dash().to_string()}</div>
                <div class="shipment-card__actions">
                    <button class="button button--small" on:click=move |_| state.update(|s| s.start_edit(id))>
                        "Editar"
                    </button>
                    <button
                        class="button button--small"
                        on:click=move |_| open_in_new_tab(&sale_label_path(id))
                    >
                        "Etiqueta"
                    </button>
                </div>
            </div>
        }
            .into_any()
    };

    let detail_source = Memo::new(move |_| {
        state.with(|s| (s.active, s.shipments.clone(), s.draft.as_ref().map(|d| d.sale_id)))
    });
    let detail = move || {
        let (active, shipments, editing) = detail_source.get();
        let Some(day) = active else {
            return view! { <em>"Seleccione un día"</em> }.into_any();
        };
        match shipments {
            None => view! { <div class="loading">"Cargando..."</div> }.into_any(),
            Some(list) if list.is_empty() => view! { <em>"No hay envíos"</em> }.into_any(),
            Some(list) => list
                .into_iter()
                .map(|sale| card(sale, day, editing))
                .collect_view()
                .into_any(),
        }
    };

    let print_day = move |_| {
        if let Some(day) = state.with_untracked(|s| s.active) {
            open_in_new_tab(&day_labels_path(day));
        }
    };

    view! {
        <div class="page shipments">
            <div class="page__header">
                <h2>"Envíos"</h2>
                <button
                    class="button button--icon"
                    title="Actualizar"
                    on:click=move |_| {
                        let active = state.with_untracked(|s| s.active);
                        load_calendar(active);
                    }
                >
                    {icon("refresh")}
                </button>
            </div>

            <div id="calendar" class="calendar">{tiles}</div>

            <section class="day-detail">
                <div class="day-detail__header">
                    <h3>
                        {move || {
                            state
                                .with(|s| s.active)
                                .map(|d| format!("Envíos del {}", format_day(d)))
                                .unwrap_or_default()
                        }}
                    </h3>
                    <Show when=move || state.with(|s| s.shows_print())>
                        <button class="button button--secondary" on:click=print_day>
                            {icon("printer")}
                            " Imprimir etiquetas del día"
                        </button>
                    </Show>
                </div>
                <div id="dayDetail">{detail}</div>
            </section>
        </div>
    }
}

/// Date and notes form replacing a card while it is edited
#[component]
fn ShipmentEditCard(
    state: RwSignal<CalendarState>,
    saving: ReadSignal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    let draft_field = move |read: fn(&ShipmentDraft) -> String| {
        move || state.with(|s| s.draft.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <div class="shipment-card shipment-card--editing">
            <label class="form__label">"Fecha envío"</label>
            <input
                type="date"
                class="input-text"
                prop:value=draft_field(|d| d.date.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| {
                        if let Some(d) = s.draft.as_mut() {
                            d.date = value;
                        }
                    });
                }
            />
            <label class="form__label">"Notas"</label>
            <textarea
                class="input-text"
                prop:value=draft_field(|d| d.notes.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| {
                        if let Some(d) = s.draft.as_mut() {
                            d.notes = value;
                        }
                    });
                }
            ></textarea>
            <div class="shipment-card__actions">
                <button
                    class="button button--small button--primary"
                    disabled=move || saving.get()
                    on:click=move |_| on_save.run(())
                >
                    "Guardar"
                </button>
                <button class="button button--small" on:click=move |_| state.update(|s| s.cancel_edit())>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
