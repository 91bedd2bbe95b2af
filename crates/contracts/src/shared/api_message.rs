use serde::{Deserialize, Serialize};

/// Body returned by every mutation endpoint: `message` on success, `error` on failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    /// Message for a success toast, with a fallback for empty bodies
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Error for a failure toast, with a fallback for bodies without `error`
    pub fn error_or(&self, fallback: &str) -> String {
        self.error
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_fallbacks() {
        let body: ApiMessage = serde_json::from_str(r#"{"message":"Venta eliminada"}"#).unwrap();
        assert_eq!(body.message_or("ok"), "Venta eliminada");
        assert_eq!(body.error_or("Error"), "Error");

        let body: ApiMessage = serde_json::from_str(r#"{"error":"Venta no encontrada"}"#).unwrap();
        assert_eq!(body.error_or("Error"), "Venta no encontrada");

        let empty: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message_or("Operación completada"), "Operación completada");
    }
}
