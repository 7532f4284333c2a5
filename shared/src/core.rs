use crate::error::OrderError;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

pub const DEFAULT_PRODUCT_NAME: &str = "Producto Desconocido";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait OrderRepository: Debug {
    async fn put_order(&self, order: &OrderRecord) -> Result<(), OrderError>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Wall clock of the execution environment, no timezone attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl LocalClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Simulated,
    Web,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Simulated => "Pedido Simulado",
            OrderKind::Web => "Pedido Web",
        }
    }
}

impl TryFrom<&str> for OrderKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Pedido Simulado" => Ok(OrderKind::Simulated),
            "Pedido Web" => Ok(OrderKind::Web),
            other => Err(format!("Unknown order kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processed,
    Confirmed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processed => "Procesado",
            OrderStatus::Confirmed => "Confirmado",
        }
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Procesado" => Ok(OrderStatus::Processed),
            "Confirmado" => Ok(OrderStatus::Confirmed),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: String,
    pub kind: OrderKind,
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// An order placed from the web front end. Missing fields fall back to the
    /// placeholder product and a zero price.
    pub fn web(
        id: String,
        created_at: NaiveDateTime,
        product_name: Option<String>,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            id,
            kind: OrderKind::Web,
            product_name: Some(product_name.unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string())),
            price: Some(price.unwrap_or(Decimal::ZERO)),
            created_at,
            status: OrderStatus::Confirmed,
        }
    }

    pub fn simulated(id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            kind: OrderKind::Simulated,
            product_name: None,
            price: None,
            created_at,
            status: OrderStatus::Processed,
        }
    }

    pub fn created_at_iso(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_micro_opt(9, 26, 53, 589793)
            .unwrap()
    }

    #[test]
    fn when_web_order_has_no_fields_should_use_placeholders() {
        let order = OrderRecord::web("abc".to_string(), timestamp(), None, None);

        assert_eq!(order.product_name.as_deref(), Some(DEFAULT_PRODUCT_NAME));
        assert_eq!(order.price, Some(Decimal::ZERO));
        assert_eq!(order.kind, OrderKind::Web);
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[test]
    fn when_web_order_has_fields_should_keep_them() {
        let price = Decimal::from_str("19.99").unwrap();
        let order = OrderRecord::web(
            "abc".to_string(),
            timestamp(),
            Some("Widget".to_string()),
            Some(price),
        );

        assert_eq!(order.product_name.as_deref(), Some("Widget"));
        assert_eq!(order.price, Some(price));
    }

    #[test]
    fn simulated_order_should_have_no_product_or_price() {
        let order = OrderRecord::simulated("abc".to_string(), timestamp());

        assert_eq!(order.kind, OrderKind::Simulated);
        assert_eq!(order.status, OrderStatus::Processed);
        assert!(order.product_name.is_none());
        assert!(order.price.is_none());
    }

    #[test]
    fn created_at_should_be_iso_8601_without_timezone() {
        let order = OrderRecord::simulated("abc".to_string(), timestamp());

        assert_eq!(order.created_at_iso(), "2026-03-14T09:26:53.589793");
    }

    #[test]
    fn uuid_generator_should_produce_distinct_valid_ids() {
        let generator = UuidGenerator::new();

        let ids: HashSet<String> = (0..100).map(|_| generator.generate_id()).collect();

        assert_eq!(ids.len(), 100);
        for id in ids {
            assert!(uuid::Uuid::parse_str(&id).is_ok());
        }
    }

    #[test]
    fn kind_and_status_should_parse_their_labels() {
        assert_eq!(OrderKind::try_from("Pedido Web"), Ok(OrderKind::Web));
        assert_eq!(OrderStatus::try_from("Procesado"), Ok(OrderStatus::Processed));
        assert!(OrderStatus::try_from("Enviado").is_err());
    }
}
