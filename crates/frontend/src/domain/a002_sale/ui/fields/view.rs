use super::state::SaleFields;
use chrono::NaiveDate;
use contracts::enums::{DeliveryType, PaymentMethod};
use leptos::prelude::*;

/// Inputs for amount, payment, delivery, shipping date, change flag and notes.
///
/// `name` keeps radio groups apart when two forms are on screen.
/// With `min_shipping_date`, the date input refuses earlier days.
#[component]
pub fn SaleFieldsView(
    fields: RwSignal<SaleFields>,
    name: &'static str,
    #[prop(optional)] min_shipping_date: Option<NaiveDate>,
) -> impl IntoView {
    let min_attr = min_shipping_date.map(|d| d.format("%Y-%m-%d").to_string());

    let payment_radios = PaymentMethod::all()
        .into_iter()
        .map(|method| {
            let id = format!("{}-payment-{}", name, method.code());
            view! {
                <div class=move || {
                    if fields.with(|f| f.is_payment_disabled(method)) {
                        "form__radio-wrapper form__radio-wrapper--disabled"
                    } else {
                        "form__radio-wrapper"
                    }
                }>
                    <input
                        id=id.clone()
                        type="radio"
                        class="form__radio"
                        name=format!("{}-payment", name)
                        value=method.code()
                        prop:checked=move || fields.with(|f| f.payment_method == Some(method))
                        prop:disabled=move || fields.with(|f| f.is_payment_disabled(method))
                        on:change=move |_| {
                            fields.update(|f| {
                                f.select_payment(method);
                            })
                        }
                    />
                    <label class="form__radio-label" for=id>
                        {method.display_name()}
                    </label>
                </div>
            }
        })
        .collect_view();

    let paid_radios = [(true, "Sí"), (false, "No")]
        .into_iter()
        .map(|(value, label)| {
            let id = format!("{}-paid-{}", name, value);
            view! {
                <div class=move || {
                    if fields.with(|f| f.is_paid_disabled(value)) {
                        "form__radio-wrapper form__radio-wrapper--disabled"
                    } else {
                        "form__radio-wrapper"
                    }
                }>
                    <input
                        id=id.clone()
                        type="radio"
                        class="form__radio"
                        name=format!("{}-paid", name)
                        prop:checked=move || fields.with(|f| f.paid == Some(value))
                        prop:disabled=move || fields.with(|f| f.is_paid_disabled(value))
                        on:change=move |_| {
                            fields.update(|f| {
                                f.select_paid(value);
                            })
                        }
                    />
                    <label class="form__radio-label" for=id>
                        {label}
                    </label>
                </div>
            }
        })
        .collect_view();

    let delivery_radios = DeliveryType::all()
        .into_iter()
        .map(|delivery| {
            let id = format!("{}-delivery-{}", name, delivery.code());
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=id.clone()
                        type="radio"
                        class="form__radio"
                        name=format!("{}-delivery", name)
                        value=delivery.code()
                        prop:checked=move || fields.with(|f| f.delivery_type == Some(delivery))
                        on:change=move |_| fields.update(|f| f.select_delivery(delivery))
                    />
                    <label class="form__radio-label" for=id>
                        {delivery.display_name()}
                    </label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <label class="form__label">"Monto"</label>
            <input
                type="number"
                class="form__input"
                min="0"
                step="0.01"
                prop:value=move || fields.with(|f| f.amount.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| f.amount = value);
                }
            />
        </div>

        <div class="form__group">
            <label class="form__label">"Método de pago"</label>
            <div class="form__radio-group">{payment_radios}</div>
        </div>

        <div class="form__group">
            <label class="form__label">"Pagado"</label>
            <div class="form__radio-group">{paid_radios}</div>
        </div>

        <div class="form__group">
            <label class="form__label">"Tipo de entrega"</label>
            <div class="form__radio-group">{delivery_radios}</div>
        </div>

        <Show when=move || fields.with(|f| f.shows_shipping_date())>
            <div class="form__group">
                <label class="form__label">"Fecha de envío"</label>
                <input
                    type="date"
                    class="form__input"
                    min=min_attr.clone()
                    prop:value=move || fields.with(|f| f.shipping_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| f.shipping_date = value);
                    }
                />
            </div>
        </Show>

        <div class="form__checkbox-wrapper">
            <input
                id=format!("{}-has-change", name)
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || fields.with(|f| f.has_change)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    fields.update(|f| f.has_change = checked);
                }
            />
            <label class="form__checkbox-label" for=format!("{}-has-change", name)>
                "Es un cambio"
            </label>
        </div>

        <div class="form__group">
            <label class="form__label">"Notas"</label>
            <textarea
                class="form__textarea"
                rows="3"
                prop:value=move || fields.with(|f| f.notes.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| f.notes = value);
                }
            ></textarea>
        </div>
    }
}
