use contracts::dashboards::d001_reports::{format_change_percent, is_positive_change};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Formatted primary value
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to the previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    /// Optional line below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Highlight the value as something that needs attention
    #[prop(optional)]
    warning: bool,
) -> impl IntoView {
    let card_class = if warning {
        "stat-card stat-card--warning"
    } else {
        "stat-card"
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let cls = if is_positive_change(pct) {
                "stat-change positive"
            } else {
                "stat-change negative"
            };
            view! { <span class=cls>{format_change_percent(pct)}</span> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
            {change_view}
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
