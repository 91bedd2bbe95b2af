use super::global_context::{AppGlobalContext, Page};
use super::navbar::Navbar;
use crate::dashboards::d001_reports::ui::ReportsPage;
use crate::domain::a002_sale::ui::entry::SaleEntryPage;
use crate::domain::a002_sale::ui::explore::SalesExplorerPage;
use crate::projections::p001_delivery_status::ui::DeliveryStatusPage;
use crate::projections::p002_shipment_calendar::ui::ShipmentCalendarPage;
use crate::shared::toast::ToastHost;
use contracts::projections::p001_delivery_status::DeliveryChannel;
use contracts::projections::p002_shipment_calendar::CalendarWindow;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app">
            <Navbar />
            <main class="app__content">
                {move || match ctx.active.get() {
                    Page::Sales => view! { <SaleEntryPage /> }.into_any(),
                    Page::Explore => view! { <SalesExplorerPage /> }.into_any(),
                    Page::Changes => {
                        view! { <DeliveryStatusPage channel=DeliveryChannel::Changes /> }.into_any()
                    }
                    Page::Pickup => {
                        view! { <DeliveryStatusPage channel=DeliveryChannel::Pickup /> }.into_any()
                    }
                    Page::Mail => {
                        view! { <DeliveryStatusPage channel=DeliveryChannel::Mail /> }.into_any()
                    }
                    Page::Shipments => {
                        view! { <ShipmentCalendarPage window=CalendarWindow::Forward /> }.into_any()
                    }
                    Page::Reports => view! { <ReportsPage /> }.into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}
