use crate::domain::a002_sale::api;
use crate::domain::a002_sale::ui::fields::{SaleFields, SaleFieldsView};
use crate::shared::components::Modal;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Edit amount, payment, delivery and notes of one sale.
/// `on_saved` runs after the server accepted the change.
#[component]
pub fn SaleEditModal(sale_id: i64, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let fields = RwSignal::new(None::<RwSignal<SaleFields>>);
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match api::get_sale(sale_id).await {
            Ok(sale) => fields.set(Some(RwSignal::new(SaleFields::from_sale(&sale)))),
            Err(e) => {
                log::error!("loading sale {}: {}", sale_id, e);
                toast.error(e.toast_text());
                on_close.run(());
            }
        }
    });

    let save = move |_| {
        let Some(current) = fields.get_untracked() else {
            return;
        };
        let payload = match current.get_untracked().edit_payload() {
            Ok(p) => p,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = api::update_sale_fields(sale_id, &payload).await;
            set_saving.set(false);
            match result {
                Ok(body) => {
                    toast.success(body.message_or("Venta actualizada"));
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("updating sale {}: {}", sale_id, e);
                    toast.error(e.toast_text_or("Error al actualizar"));
                }
            }
        });
    };

    view! {
        <Modal title=format!("Editar venta #{}", sale_id) on_close=on_close>
            {move || match fields.get() {
                None => view! { <div class="loading">"Cargando..."</div> }.into_any(),
                Some(current) => {
                    view! {
                        <div class="form">
                            <SaleFieldsView fields=current name="edit" />
                            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
                            <div class="form__actions">
                                <button
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                    on:click=save
                                >
                                    "Guardar"
                                </button>
                                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                                    "Cancelar"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Modal>
    }
}
