use crate::shared::serde_helpers::null_as_empty;
use serde::{Deserialize, Serialize};

/// Customer as returned by `/customers` and `/customers/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Address, City" line shown under suggestions
    pub fn location(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

/// Body for `POST /customers` and `PUT /customers/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub description: String,
}

impl CustomerPayload {
    /// Names of required fields that are blank; description is optional
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("nombre");
        }
        if self.last_name.trim().is_empty() {
            missing.push("apellido");
        }
        if self.address.trim().is_empty() {
            missing.push("dirección");
        }
        if self.city.trim().is_empty() {
            missing.push("localidad");
        }
        if self.phone.trim().is_empty() {
            missing.push("teléfono");
        }
        missing
    }
}

impl From<&Customer> for CustomerPayload {
    fn from(c: &Customer) -> Self {
        Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            address: c.address.clone(),
            city: c.city.clone(),
            phone: c.phone.clone(),
            description: c.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_with_nulls() {
        let json = r#"{"id":7,"first_name":"Ana","last_name":"Gómez","address":null,
            "city":"Quilmes","phone":"11-5555","description":null,
            "created_at":"2024-01-01T10:00:00"}"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.full_name(), "Ana Gómez");
        assert_eq!(c.address, "");
        assert_eq!(c.location(), ", Quilmes");
    }

    #[test]
    fn test_missing_fields() {
        let payload = CustomerPayload {
            first_name: "Ana".into(),
            last_name: " ".into(),
            address: "Calle 1".into(),
            city: "".into(),
            phone: "123".into(),
            description: String::new(),
        };
        assert_eq!(payload.missing_fields(), vec!["apellido", "localidad"]);
    }
}
