use crate::domain::a001_customer::api;
use crate::shared::components::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a001_customer::{Customer, CustomerPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Validation message for a customer form, if any required field is blank
pub fn validate_customer(payload: &CustomerPayload) -> Result<(), String> {
    let missing = payload.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("Complete los campos: {}", missing.join(", ")))
    }
}

/// Create (`customer = None`) or edit a customer
#[component]
pub fn CustomerFormModal(
    customer: Option<Customer>,
    on_close: Callback<()>,
    /// Called with the edited customer after a successful update
    #[prop(optional)]
    on_updated: Option<Callback<Customer>>,
) -> impl IntoView {
    let toast = use_toast();
    let editing = customer.clone();
    let customer_id = customer.as_ref().map(|c| c.id);
    let form = RwSignal::new(
        customer
            .as_ref()
            .map(CustomerPayload::from)
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);

    let title = if customer_id.is_some() {
        "Editar cliente"
    } else {
        "Crear cliente"
    };

    let save = move || {
        let payload = form.get_untracked();
        if let Err(msg) = validate_customer(&payload) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        set_saving.set(true);
        let editing = editing.clone();
        spawn_local(async move {
            let result = match customer_id {
                Some(id) => api::update_customer(id, &payload).await,
                None => api::create_customer(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(body) => {
                    let fallback = if customer_id.is_some() {
                        "Cliente actualizado correctamente"
                    } else {
                        "Cliente creado correctamente"
                    };
                    toast.success(body.message_or(fallback));
                    if let (Some(cb), Some(old)) = (on_updated, editing) {
                        cb.run(Customer {
                            first_name: payload.first_name.clone(),
                            last_name: payload.last_name.clone(),
                            address: payload.address.clone(),
                            city: payload.city.clone(),
                            phone: payload.phone.clone(),
                            description: Some(payload.description.clone()),
                            ..old
                        });
                    }
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("customer save failed: {}", e);
                    let text = e.toast_text_or("Ocurrió un error");
                    error.set(Some(text.clone()));
                    toast.error(text);
                }
            }
        });
    };

    let field = move |label: &'static str,
                      get: fn(&CustomerPayload) -> String,
                      set: fn(&mut CustomerPayload, String)| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    type="text"
                    class="input-text"
                    prop:value=move || form.with(|f| get(f))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    save();
                }
            >
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
                {field("Nombre", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                {field("Apellido", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                {field("Dirección", |f| f.address.clone(), |f, v| f.address = v)}
                {field("Localidad", |f| f.city.clone(), |f, v| f.city = v)}
                {field("Teléfono", |f| f.phone.clone(), |f, v| f.phone = v)}
                <div class="form__group">
                    <label class="form__label">"Descripción"</label>
                    <textarea
                        class="input-text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    ></textarea>
                </div>
                <div class="form__actions">
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        "Guardar"
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_lists_missing_fields() {
        let payload = CustomerPayload {
            first_name: "Ana".into(),
            city: "Quilmes".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_customer(&payload),
            Err("Complete los campos: apellido, dirección, teléfono".to_string())
        );

        let full = CustomerPayload {
            first_name: "Ana".into(),
            last_name: "Gómez".into(),
            address: "Mitre 100".into(),
            city: "Quilmes".into(),
            phone: "1122334455".into(),
            description: String::new(),
        };
        assert_eq!(validate_customer(&full), Ok(()));
    }
}
