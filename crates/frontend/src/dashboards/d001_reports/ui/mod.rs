mod custom_report;
mod dashboard;
mod pin_gate;

use custom_report::CustomReport;
use dashboard::ReportsDashboard;
use leptos::prelude::*;
use pin_gate::PinGate;

/// Reports, locked behind the back-office PIN until it is verified
#[component]
pub fn ReportsPage() -> impl IntoView {
    let unlocked = RwSignal::new(false);

    view! {
        <div class="page reports">
            <Show
                when=move || unlocked.get()
                fallback=move || view! { <PinGate on_unlock=Callback::new(move |_| unlocked.set(true)) /> }
            >
                <ReportsDashboard />
                <CustomReport />
            </Show>
        </div>
    }
}
