use crate::layout::global_context::AppGlobalContext;
use crate::layout::shell::AppShell;
use crate::shared::toast::{ToastService, DEFAULT_TOAST_MS};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    // Toasts are shared by every page; the calendar asks for a shorter lifetime per toast
    provide_context(ToastService::new(DEFAULT_TOAST_MS));

    view! {
        <AppShell />
    }
}
