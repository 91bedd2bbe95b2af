use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d001_reports::{
    average, share_percent, ChangesStats, PeriodSummary, PinResponse, SalesSummaryReport,
    TopCustomer,
};
use contracts::enums::{delivery_display_name, ReportType};

/// How long the PIN input keeps its error border
pub const PIN_ERROR_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum PinVerdict {
    Unlocked,
    Rejected(String),
}

impl From<PinResponse> for PinVerdict {
    fn from(res: PinResponse) -> Self {
        if res.valid {
            PinVerdict::Unlocked
        } else {
            PinVerdict::Rejected(
                res.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "PIN incorrecto".to_string()),
            )
        }
    }
}

/// `12.3%`
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.1}%", value)
}

/// Inputs of the custom report form
#[derive(Debug, Clone, PartialEq)]
pub struct ReportForm {
    pub start_date: String,
    pub end_date: String,
    pub report_type: ReportType,
}

impl ReportForm {
    /// First day of the month through today
    pub fn for_month_of(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self {
            start_date: first.format("%Y-%m-%d").to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
            report_type: ReportType::General,
        }
    }

    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), String> {
        let parse = |raw: &str| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        let (Some(start), Some(end)) = (parse(&self.start_date), parse(&self.end_date)) else {
            return Err("Seleccione el rango de fechas".to_string());
        };
        if start > end {
            return Err("La fecha de inicio debe ser anterior a la fecha final".to_string());
        }
        Ok((start, end))
    }
}

/// A generated custom report, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum ReportResult {
    General(SalesSummaryReport),
    Delivery(Vec<ShareRow>),
    Channel(Vec<ShareRow>),
    Payment(PaymentBreakdown),
    Changes(ChangesStats),
    TopCustomers(Vec<CustomerRow>),
}

impl ReportResult {
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportResult::General(_) => ReportType::General,
            ReportResult::Delivery(_) => ReportType::Delivery,
            ReportResult::Channel(_) => ReportType::Channel,
            ReportResult::Payment(_) => ReportType::Payment,
            ReportResult::Changes(_) => ReportType::Changes,
            ReportResult::TopCustomers(_) => ReportType::TopCustomers,
        }
    }
}

/// Group row of the delivery and channel reports
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRow {
    pub label: String,
    pub count: u64,
    pub total: f64,
    pub avg_ticket: f64,
    /// Share of the period's total amount
    pub share: f64,
}

pub fn delivery_rows(report: &SalesSummaryReport) -> Vec<ShareRow> {
    report
        .by_delivery
        .iter()
        .map(|d| ShareRow {
            label: delivery_display_name(d.delivery_type.as_deref()),
            count: d.count,
            total: d.total,
            avg_ticket: average(d.total, d.count),
            share: share_percent(d.total, report.summary.total_amount),
        })
        .collect()
}

pub fn channel_rows(report: &SalesSummaryReport) -> Vec<ShareRow> {
    report
        .by_channel
        .iter()
        .map(|c| ShareRow {
            label: c.label(),
            count: c.count,
            total: c.total,
            avg_ticket: average(c.total, c.count),
            share: share_percent(c.total, report.summary.total_amount),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentBreakdown {
    pub summary: PeriodSummary,
    /// Paid sales over all sales; also the collection effectiveness
    pub paid_share: f64,
    pub unpaid_share: f64,
}

impl From<PeriodSummary> for PaymentBreakdown {
    fn from(summary: PeriodSummary) -> Self {
        let total = summary.total_sales as f64;
        Self {
            paid_share: share_percent(summary.paid_sales as f64, total),
            unpaid_share: share_percent(summary.unpaid_sales as f64, total),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub rank: usize,
    pub name: String,
    pub purchases: u64,
    pub total: f64,
    pub avg_ticket: f64,
}

pub fn customer_rows(customers: &[TopCustomer]) -> Vec<CustomerRow> {
    customers
        .iter()
        .enumerate()
        .map(|(i, c)| CustomerRow {
            rank: i + 1,
            name: c.name.clone(),
            purchases: c.purchases,
            total: c.total,
            avg_ticket: average(c.total, c.purchases),
        })
        .collect()
}
