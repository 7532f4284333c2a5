use crate::{
    core::{OrderKind, OrderRecord, OrderRepository, OrderStatus, TIMESTAMP_FORMAT},
    error::OrderError,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug)]
pub struct DynamoDbOrderRepository {
    table_name: Option<String>,
    dynamodb_client: Client,
}

impl DynamoDbOrderRepository {
    pub fn new(table_name: Option<String>, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }

    fn table_name(&self) -> Result<&str, OrderError> {
        let table_name = self
            .table_name
            .as_deref()
            .ok_or_else(|| OrderError::Configuration("TABLE_NAME is not set".to_string()))?;
        validate_table_name(table_name)?;
        Ok(table_name)
    }
}

// DynamoDB naming rules: 3-255 characters from [A-Za-z0-9_.-].
fn validate_table_name(table_name: &str) -> Result<(), OrderError> {
    let valid_chars = table_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if !(3..=255).contains(&table_name.len()) || !valid_chars {
        return Err(OrderError::Configuration(format!(
            "TABLE_NAME '{}' is not a valid table name",
            table_name
        )));
    }
    Ok(())
}

#[async_trait]
impl OrderRepository for DynamoDbOrderRepository {
    async fn put_order(&self, order: &OrderRecord) -> Result<(), OrderError> {
        let table_name = self.table_name()?;

        self.dynamodb_client
            .put_item()
            .table_name(table_name)
            .set_item(Some(order.to_item()))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| {
                OrderError::Storage(format!("Error adding item: {}", DisplayErrorContext(e)))
            })
    }
}

impl OrderRecord {
    pub fn to_item(&self) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::from([
            ("ProductId".to_string(), AttributeValue::S(self.id.clone())),
            ("Tipo".to_string(), AttributeValue::S(self.kind.as_str().to_string())),
            ("Fecha".to_string(), AttributeValue::S(self.created_at_iso())),
            ("Estado".to_string(), AttributeValue::S(self.status.as_str().to_string())),
        ]);
        if let Some(product_name) = &self.product_name {
            item.insert("Producto".to_string(), AttributeValue::S(product_name.clone()));
        }
        if let Some(price) = &self.price {
            item.insert("Precio".to_string(), AttributeValue::N(price.to_string()));
        }
        item
    }
}

impl TryFrom<HashMap<String, AttributeValue>> for OrderRecord {
    type Error = String;

    fn try_from(item: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let id = item
            .get("ProductId")
            .ok_or_else(|| "ProductId not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "ProductId is not a String".to_string())?;
        let kind = item
            .get("Tipo")
            .ok_or_else(|| "Tipo not found".to_string())?
            .as_s()
            .map_err(|_| "Tipo is not a String".to_string())
            .and_then(|s| OrderKind::try_from(s.as_str()))?;
        let created_at = item
            .get("Fecha")
            .ok_or_else(|| "Fecha not found".to_string())?
            .as_s()
            .map_err(|_| "Fecha is not a String".to_string())
            .and_then(|s| {
                NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
                    .map_err(|_| "Cannot convert Fecha into a timestamp".to_string())
            })?;
        let status = item
            .get("Estado")
            .ok_or_else(|| "Estado not found".to_string())?
            .as_s()
            .map_err(|_| "Estado is not a String".to_string())
            .and_then(|s| OrderStatus::try_from(s.as_str()))?;
        let product_name = item
            .get("Producto")
            .and_then(|p| p.as_s().map(|s| s.to_string()).ok());
        let price = item
            .get("Precio")
            .map(|p| {
                p.as_n()
                    .map_err(|_| "Precio is not a number".to_string())
                    .and_then(|n| {
                        Decimal::from_str(n)
                            .map_err(|_| "Cannot convert Precio into a decimal".to_string())
                    })
            })
            .transpose()?;

        Ok(OrderRecord {
            id,
            kind,
            product_name,
            price,
            created_at,
            status,
        })
    }
}
