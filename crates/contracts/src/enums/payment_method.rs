use serde::{Deserialize, Serialize};

/// Payment methods accepted by the sales API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Transfer => "Transferencia",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Transfer]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "transfer" => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }
}

/// Display name for a stored payment code, the raw code when unrecognised
pub fn payment_display_name(code: Option<&str>) -> String {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => PaymentMethod::from_code(c)
            .map(|m| m.display_name().to_string())
            .unwrap_or_else(|| c.to_string()),
        None => "-".to_string(),
    }
}
