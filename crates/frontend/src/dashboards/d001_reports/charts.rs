//! Chart.js configs for the dashboard charts

use crate::shared::format::format_day_month;
use contracts::dashboards::d001_reports::{ChannelTotal, DailySales, DeliveryTotal};
use contracts::enums::delivery_display_name;
use serde_json::{json, Value};

pub const DAILY_CHART: &str = "dailySalesChart";
pub const CHANNEL_CHART: &str = "channelChart";
pub const DELIVERY_CHART: &str = "deliveryChart";

const BLUE: &str = "#4A90E2";
const AMBER: &str = "#F59E0B";
const GREEN: &str = "#28a745";

/// Line chart of the amount sold per day
pub fn daily_sales_config(days: &[DailySales]) -> Value {
    let labels: Vec<String> = days.iter().map(|d| format_day_month(&d.date)).collect();
    let totals: Vec<f64> = days.iter().map(|d| d.total).collect();
    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Ventas ($)",
                "data": totals,
                "borderColor": BLUE,
                "backgroundColor": "rgba(74, 144, 226, 0.1)",
                "tension": 0.4,
                "fill": true
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "beginAtZero": true } }
        }
    })
}

/// Doughnut of the amount per sales channel
pub fn channel_config(channels: &[ChannelTotal]) -> Value {
    let labels: Vec<String> = channels.iter().map(ChannelTotal::label).collect();
    let totals: Vec<f64> = channels.iter().map(|c| c.total).collect();
    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": totals,
                "backgroundColor": [BLUE, AMBER, GREEN]
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": { "legend": { "position": "bottom" } }
        }
    })
}

/// Bars with the number of sales per delivery type
pub fn delivery_config(deliveries: &[DeliveryTotal]) -> Value {
    let labels: Vec<String> = deliveries
        .iter()
        .map(|d| delivery_display_name(d.delivery_type.as_deref()))
        .collect();
    let counts: Vec<u64> = deliveries.iter().map(|d| d.count).collect();
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Cantidad",
                "data": counts,
                "backgroundColor": [BLUE, GREEN, AMBER]
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "beginAtZero": true } }
        }
    })
}
