//! Lenient deserializers for values the back office serializes inconsistently.
//!
//! Amounts come back as JSON numbers from most endpoints but as decimal strings
//! ("1500.00") from `/sales/last_sales`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
    Null,
}

/// Accept `1500`, `1500.5`, `"1500.00"` or `null`; anything unparseable becomes 0
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        NumberOrString::Null => 0.0,
    })
}

/// `null` strings become empty strings
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` booleans become `false`
pub fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "super::amount")]
        amount: f64,
        #[serde(default, deserialize_with = "super::null_as_empty")]
        notes: String,
    }

    #[test]
    fn test_amount_variants() {
        let r: Row = serde_json::from_str(r#"{"amount":"1500.00","notes":null}"#).unwrap();
        assert_eq!(r.amount, 1500.0);
        assert_eq!(r.notes, "");

        let r: Row = serde_json::from_str(r#"{"amount":99.5}"#).unwrap();
        assert_eq!(r.amount, 99.5);

        let r: Row = serde_json::from_str(r#"{"amount":"abc"}"#).unwrap();
        assert_eq!(r.amount, 0.0);

        let r: Row = serde_json::from_str(r#"{"amount":null}"#).unwrap();
        assert_eq!(r.amount, 0.0);
    }
}
