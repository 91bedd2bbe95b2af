use crate::dashboards::d001_reports::api;
use crate::dashboards::d001_reports::state::{
    channel_rows, customer_rows, delivery_rows, format_percent, PaymentBreakdown, ReportForm,
    ReportResult, ShareRow,
};
use crate::shared::api_utils::ApiError;
use crate::shared::format::{format_money, today};
use crate::shared::request_seq::RequestSeq;
use crate::shared::toast::use_toast;
use chrono::NaiveDate;
use contracts::dashboards::d001_reports::{ChangesStats, SalesSummaryReport};
use contracts::enums::{delivery_display_name, ReportType};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn generate(report_type: ReportType, start: NaiveDate, end: NaiveDate) -> Result<ReportResult, ApiError> {
    Ok(match report_type {
        ReportType::General => ReportResult::General(api::fetch_sales_summary(start, end).await?),
        ReportType::Delivery => {
            ReportResult::Delivery(delivery_rows(&api::fetch_sales_summary(start, end).await?))
        }
        ReportType::Channel => {
            ReportResult::Channel(channel_rows(&api::fetch_sales_summary(start, end).await?))
        }
        ReportType::Payment => {
            ReportResult::Payment(PaymentBreakdown::from(api::fetch_sales_summary(start, end).await?.summary))
        }
        ReportType::Changes => ReportResult::Changes(api::fetch_changes_stats().await?),
        ReportType::TopCustomers => {
            ReportResult::TopCustomers(customer_rows(&api::fetch_top_customers(start, end).await?))
        }
    })
}

/// Ad hoc report over a date range
#[component]
pub fn CustomReport() -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(ReportForm::for_month_of(today()));
    let result = RwSignal::new(None::<Result<ReportResult, ()>>);
    let (loading, set_loading) = signal(false);
    let seq = StoredValue::new(RequestSeq::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let (start, end) = match current.validate() {
            Ok(range) => range,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };
        let report_type = current.report_type;
        let Some(token) = seq.try_update_value(|s| s.issue()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let outcome = generate(report_type, start, end).await;
            if seq.try_with_value(|s| s.is_current(token)) != Some(true) {
                return;
            }
            set_loading.set(false);
            match outcome {
                Ok(report) => result.set(Some(Ok(report))),
                Err(e) => {
                    log::error!("{} report {}..{}: {}", report_type.code(), start, end, e);
                    toast.error("Error generando reporte");
                    result.set(Some(Err(())));
                }
            }
        });
    };

    let type_options = ReportType::all()
        .into_iter()
        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
        .collect_view();

    let body = move || {
        if loading.get() {
            return view! { <p>"Cargando reporte..."</p> }.into_any();
        }
        match result.get() {
            None => view! { <p class="report-hint">"Elija un rango de fechas y un tipo de reporte"</p> }.into_any(),
            Some(Err(())) => view! { <p class="report-error">"Error al generar reporte"</p> }.into_any(),
            Some(Ok(report)) => {
                let title = report.report_type().title();
                view! {
                    <h3 class="report-title">{title}</h3>
                    {render_report(report)}
                }
                    .into_any()
            }
        }
    };

    view! {
        <section class="custom-report">
            <h2>"Reportes personalizados"</h2>
            <form class="form form--inline" on:submit=submit>
                <div class="form__group">
                    <label class="form__label">"Desde"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || form.with(|f| f.start_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.start_date = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Hasta"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || form.with(|f| f.end_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.end_date = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Tipo de reporte"</label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.report_type.code())
                        on:change=move |ev| {
                            if let Some(t) = ReportType::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.report_type = t);
                            }
                        }
                    >
                        {type_options}
                    </select>
                </div>
                <button type="submit" class="button button--primary" disabled=move || loading.get()>
                    "Generar"
                </button>
            </form>
            <div class="report-result">{body}</div>
        </section>
    }
}

fn render_report(report: ReportResult) -> AnyView {
    match report {
        ReportResult::General(r) => general_view(r),
        ReportResult::Delivery(rows) => share_table("Tipo de Entrega", rows, false),
        ReportResult::Channel(rows) => share_table("Canal", rows, true),
        ReportResult::Payment(p) => payment_view(p),
        ReportResult::Changes(stats) => changes_view(stats),
        ReportResult::TopCustomers(rows) => view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Cliente"</th>
                        <th>"Compras"</th>
                        <th>"Total Gastado"</th>
                        <th>"Ticket Promedio"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|r| {
                            view! {
                                <tr>
                                    <td>{r.rank}</td>
                                    <td>{r.name}</td>
                                    <td>{r.purchases}</td>
                                    <td class="text-right">{format_money(r.total)}</td>
                                    <td class="text-right">{format_money(r.avg_ticket)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}

fn general_view(report: SalesSummaryReport) -> AnyView {
    let s = report.summary;
    view! {
        <div class="report-grid">
            <div class="report-card">
                <h4>"Resumen del Período"</h4>
                <p><strong>"Total Ventas: "</strong>{s.total_sales}</p>
                <p><strong>"Monto Total: "</strong>{format_money(s.total_amount)}</p>
                <p><strong>"Ticket Promedio: "</strong>{format_money(s.avg_ticket)}</p>
                <p>
                    <strong>"Ventas Pagadas: "</strong>
                    {format!("{} ({})", s.paid_sales, format_money(s.paid_amount))}
                </p>
                <p>
                    <strong>"Ventas Impagas: "</strong>
                    {format!("{} ({})", s.unpaid_sales, format_money(s.unpaid_amount))}
                </p>
            </div>
            <div class="report-card">
                <h4>"Por Canal de Venta"</h4>
                {report
                    .by_channel
                    .iter()
                    .map(|c| {
                        view! {
                            <p>
                                <strong>{format!("{}: ", c.label())}</strong>
                                {format!("{} ventas - {}", c.count, format_money(c.total))}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="report-card">
                <h4>"Por Tipo de Entrega"</h4>
                {report
                    .by_delivery
                    .iter()
                    .map(|d| {
                        view! {
                            <p>
                                <strong>{format!("{}: ", delivery_display_name(d.delivery_type.as_deref()))}</strong>
                                {format!("{} ventas - {}", d.count, format_money(d.total))}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn share_table(group: &'static str, rows: Vec<ShareRow>, with_avg: bool) -> AnyView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>{group}</th>
                    <th>"Cantidad"</th>
                    <th>"Monto Total"</th>
                    {with_avg.then(|| view! { <th>"Ticket Promedio"</th> })}
                    <th>"% del Total"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|r| {
                        view! {
                            <tr>
                                <td>{r.label}</td>
                                <td>{r.count}</td>
                                <td class="text-right">{format_money(r.total)}</td>
                                {with_avg
                                    .then(|| view! { <td class="text-right">{format_money(r.avg_ticket)}</td> })}
                                <td class="text-right">{format_percent(r.share)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

fn payment_view(p: PaymentBreakdown) -> AnyView {
    let s = p.summary;
    view! {
        <div class="report-grid">
            <div class="report-card">
                <h4>"Ventas Pagadas"</h4>
                <p class="report-big-number">{s.paid_sales}</p>
                <p><strong>"Monto: "</strong>{format_money(s.paid_amount)}</p>
                <p><strong>"Porcentaje: "</strong>{format_percent(p.paid_share)}</p>
            </div>
            <div class="report-card">
                <h4>"Ventas Impagas"</h4>
                <p class="report-big-number warning">{s.unpaid_sales}</p>
                <p><strong>"Monto: "</strong>{format_money(s.unpaid_amount)}</p>
                <p><strong>"Porcentaje: "</strong>{format_percent(p.unpaid_share)}</p>
            </div>
            <div class="report-card">
                <h4>"Resumen"</h4>
                <p><strong>"Total Ventas: "</strong>{s.total_sales}</p>
                <p><strong>"Efectividad de Cobro: "</strong>{format_percent(p.paid_share)}</p>
                <p><strong>"Por Cobrar: "</strong>{format_money(s.unpaid_amount)}</p>
            </div>
        </div>
    }
    .into_any()
}

fn changes_view(data: ChangesStats) -> AnyView {
    let stats = data.stats;
    view! {
        <div class="report-grid">
            <div class="report-card">
                <h4>"Cambios Este Mes"</h4>
                <p class="report-big-number">{stats.changes_this_month}</p>
            </div>
            <div class="report-card">
                <h4>"Cambios Pendientes"</h4>
                <p class="report-big-number">{stats.pending_count}</p>
            </div>
            <div class="report-card">
                <h4>"Cambios Vencidos"</h4>
                <p class="report-big-number warning">{stats.overdue_count}</p>
            </div>
        </div>
        <h4 class="report-subtitle">"Tendencia de Cambios (Últimos 6 Meses)"</h4>
        <table class="table">
            <thead>
                <tr>
                    <th>"Mes"</th>
                    <th>"Cantidad de Cambios"</th>
                </tr>
            </thead>
            <tbody>
                {data
                    .trend
                    .into_iter()
                    .map(|t| view! { <tr><td>{t.month}</td><td>{t.count}</td></tr> })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
