use serde::{Deserialize, Serialize};

/// Ad hoc report layouts available on the reports page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    General,
    Delivery,
    Channel,
    Payment,
    Changes,
    TopCustomers,
}

impl ReportType {
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::General => "general",
            ReportType::Delivery => "delivery",
            ReportType::Channel => "channel",
            ReportType::Payment => "payment",
            ReportType::Changes => "changes",
            ReportType::TopCustomers => "top_customers",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::General => "General",
            ReportType::Delivery => "Por tipo de entrega",
            ReportType::Channel => "Por canal de venta",
            ReportType::Payment => "Pagos",
            ReportType::Changes => "Cambios",
            ReportType::TopCustomers => "Top clientes",
        }
    }

    /// Heading rendered above the generated report
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::General => "📊 Reporte General de Ventas",
            ReportType::Delivery => "📦 Reporte por Tipo de Entrega",
            ReportType::Channel => "📍 Reporte por Canal de Venta",
            ReportType::Payment => "💰 Análisis de Pagos",
            ReportType::Changes => "🔄 Reporte de Cambios",
            ReportType::TopCustomers => "⭐ Top 20 Clientes",
        }
    }

    pub fn all() -> Vec<ReportType> {
        vec![
            ReportType::General,
            ReportType::Delivery,
            ReportType::Channel,
            ReportType::Payment,
            ReportType::Changes,
            ReportType::TopCustomers,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}
