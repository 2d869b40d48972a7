use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    pub shop_name: String,
    pub currency_symbol: String,
    pub log_level: String,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shop_name: "Smoothie Shop".to_string(),
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Config::default();
        let config = Config {
            shop_name: env::var("SHOP_NAME").unwrap_or(defaults.shop_name),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            log_level: env::var("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            environment: env::var("APP_ENV").unwrap_or(defaults.environment),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.shop_name.trim().is_empty() {
            return Err(anyhow::anyhow!("SHOP_NAME cannot be empty"));
        }

        if self.currency_symbol.chars().count() > 3 {
            return Err(anyhow::anyhow!(
                "CURRENCY_SYMBOL must be at most 3 characters"
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of: {}",
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
