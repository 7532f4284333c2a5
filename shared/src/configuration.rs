use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings injected by the deployment. A missing table name is not an error here,
/// it is reported when an order is written.
#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Config {
    pub table_name: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Config::from_figment(Figment::new())
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.merge(Serialized::defaults(raw_env(&["TABLE_NAME"]))).extract()
    }
}

// Values are kept as text: `Env` would turn names like `0042` or `true` into numbers
// and booleans.
fn raw_env(keys: &[&str]) -> HashMap<String, String> {
    Env::raw()
        .only(keys)
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Config;
    use figment::providers::{Format, Json};
    use figment::Figment;

    #[test]
    fn when_table_name_is_set_should_load() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TABLE_NAME", "ecommerce-inventory-prod");

            let config = Config::load()?;

            assert_eq!(config.table_name.as_deref(), Some("ecommerce-inventory-prod"));

            Ok(())
        });
    }

    #[test]
    fn when_table_name_is_missing_should_load_as_none() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();

            let config = Config::from_figment(Figment::new())?;

            assert!(config.table_name.is_none());

            Ok(())
        });
    }

    #[test]
    fn when_table_name_looks_like_a_number_or_bool_should_keep_it_as_text() {
        figment::Jail::expect_with(|jail| {
            for table_name in ["123", "0042", "true", "1.50"] {
                jail.set_env("TABLE_NAME", table_name);

                let config = Config::from_figment(Figment::new())?;

                assert_eq!(config.table_name.as_deref(), Some(table_name));
            }

            Ok(())
        });
    }

    #[test]
    fn environment_should_override_other_providers() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TABLE_NAME", "orders-from-env");

            let config = Config::from_figment(Figment::from(Json::string(stringify!({
                "table_name": "orders-from-json"
            }))))?;

            assert_eq!(config.table_name.as_deref(), Some("orders-from-env"));

            Ok(())
        });
    }
}
