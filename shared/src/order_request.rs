use crate::error::OrderError;
use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer};
use std::str::FromStr;

/// Body sent by the web front end. Both fields are optional and anything else is ignored.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct OrderRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Decodes a raw request body. An empty body means "use the defaults".
    pub fn from_body(body: &[u8]) -> Result<Self, OrderError> {
        if body.is_empty() {
            return Ok(OrderRequest::default());
        }
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(OrderError::InvalidInput(
                "request body must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawPrice>::deserialize(deserializer)?
        .map(|raw| parse_price(&raw).map_err(D::Error::custom))
        .transpose()
}

// Numbers go through their shortest textual form so 19.99 stays 19.99.
fn parse_price(raw: &RawPrice) -> Result<Decimal, String> {
    let text = match raw {
        RawPrice::Number(n) => n.to_string(),
        RawPrice::Text(s) => s.trim().to_string(),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| format!("price '{}' is not a valid decimal: {}", text, e))
}
