use crate::dashboards::d001_reports::api;
use crate::dashboards::d001_reports::state::{PinVerdict, PIN_ERROR_MS};
use crate::shared::toast::use_toast;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PinGate(on_unlock: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let pin = RwSignal::new(String::new());
    let rejected = RwSignal::new(false);
    let (checking, set_checking) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if checking.get_untracked() {
            return;
        }
        let value = pin.get_untracked();
        set_checking.set(true);
        spawn_local(async move {
            let result = api::verify_pin(&value).await;
            set_checking.set(false);
            match result.map(PinVerdict::from) {
                Ok(PinVerdict::Unlocked) => {
                    log::info!("reports unlocked");
                    on_unlock.run(());
                }
                Ok(PinVerdict::Rejected(message)) => {
                    pin.set(String::new());
                    rejected.set(true);
                    toast.error(message);
                    TimeoutFuture::new(PIN_ERROR_MS).await;
                    rejected.try_set(false);
                }
                Err(e) => {
                    log::error!("verifying PIN: {}", e);
                    toast.error("Error al verificar PIN");
                }
            }
        });
    };

    view! {
        <div class="pin-gate">
            <div class="pin-gate__locked">"🔒 Reportes bloqueados"</div>
            <form class="pin-gate__form" on:submit=submit>
                <label class="form__label" for="pinInput">"Ingrese el PIN"</label>
                <input
                    id="pinInput"
                    type="password"
                    class=move || {
                        if rejected.get() { "form__input form__input--error" } else { "form__input" }
                    }
                    autocomplete="off"
                    prop:value=move || pin.get()
                    on:input=move |ev| pin.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--primary" disabled=move || checking.get()>
                    "Ingresar"
                </button>
            </form>
        </div>
    }
}
