//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Defaults (the crate constants in shop-core)
//!
//! Configuration is read-only after initialization, so no mutex is needed.

use chrono::Weekday;
use shop_core::fraud::FraudGuard;
use shop_core::pricing::PricingPolicy;
use shop_core::Money;
use shop_store::{HashConfig, StoreConfig};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub pricing: PricingPolicy,

    /// Card totals above this are refused for `new` accounts.
    pub fraud_card_limit: Money,

    pub hashing: HashConfig,

    /// Currency symbol (for log output)
    pub currency_symbol: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            pricing: PricingPolicy::default(),
            fraud_card_limit: shop_core::FRAUD_CARD_LIMIT,
            hashing: HashConfig::default(),
            currency_symbol: "₴".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl ShopConfig {
    /// Loads configuration from `SHOP_*` environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `SHOP_FRAUD_LIMIT_CENTS`: card limit for new accounts
    /// - `SHOP_VIP_DISCOUNT_BPS` / `SHOP_ADMIN_DISCOUNT_BPS`: electronics discounts
    /// - `SHOP_CLOTHING_DISCOUNT_CENTS`: flat discount on the discount day
    /// - `SHOP_DISCOUNT_WEEKDAY`: e.g. `sat`, `Saturday`
    /// - `SHOP_HASH_MEMORY_KIB` / `SHOP_HASH_ITERATIONS`: argon2 cost
    /// - `SHOP_CURRENCY_SYMBOL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShopConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(limit) = parse_cents(&lookup, "SHOP_FRAUD_LIMIT_CENTS")? {
            config.fraud_card_limit = limit;
        }

        if let Some(bps) = parse_bps(&lookup, "SHOP_VIP_DISCOUNT_BPS")? {
            config.pricing.vip_discount_bps = bps;
        }

        if let Some(bps) = parse_bps(&lookup, "SHOP_ADMIN_DISCOUNT_BPS")? {
            config.pricing.admin_discount_bps = bps;
        }

        if let Some(amount) = parse_cents(&lookup, "SHOP_CLOTHING_DISCOUNT_CENTS")? {
            config.pricing.discount_day_amount = amount;
        }

        if let Some(day) = parse_var::<Weekday, _>(&lookup, "SHOP_DISCOUNT_WEEKDAY")? {
            config.pricing.discount_day = day;
        }

        if let Some(kib) = parse_var::<u32, _>(&lookup, "SHOP_HASH_MEMORY_KIB")? {
            config.hashing.memory_kib = kib;
        }

        if let Some(passes) = parse_var::<u32, _>(&lookup, "SHOP_HASH_ITERATIONS")? {
            config.hashing.iterations = passes;
        }

        if let Some(symbol) = lookup("SHOP_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    pub fn fraud_guard(&self) -> FraudGuard {
        FraudGuard::new(self.fraud_card_limit)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().hashing(self.hashing)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shop_cli::state::ShopConfig;
    /// use shop_core::Money;
    ///
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "₴12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.major().abs(),
            amount.cents_part()
        )
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

/// Amounts are whole cents, never negative.
fn parse_cents<F>(lookup: &F, key: &'static str) -> Result<Option<Money>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<i64, _>(lookup, key)? {
        Some(cents) if cents < 0 => Err(ConfigError::InvalidValue {
            key,
            value: cents.to_string(),
        }),
        other => Ok(other.map(Money::from_cents)),
    }
}

fn parse_bps<F>(lookup: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<u32, _>(lookup, key)? {
        Some(bps) if bps > 10_000 => Err(ConfigError::InvalidValue {
            key,
            value: bps.to_string(),
        }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ShopConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.pricing.discount_day, Weekday::Sat);
        assert_eq!(config.fraud_card_limit, Money::from_major(5000));
    }

    #[test]
    fn test_overrides() {
        let config = ShopConfig::from_lookup(lookup(&[
            ("SHOP_FRAUD_LIMIT_CENTS", "100000"),
            ("SHOP_VIP_DISCOUNT_BPS", "1500"),
            ("SHOP_DISCOUNT_WEEKDAY", "sunday"),
            ("SHOP_CURRENCY_SYMBOL", "$"),
        ]))
        .unwrap();

        assert_eq!(config.fraud_card_limit, Money::from_major(1000));
        assert_eq!(config.pricing.vip_discount_bps, 1500);
        assert_eq!(config.pricing.admin_discount_bps, shop_core::ADMIN_DISCOUNT_BPS);
        assert_eq!(config.pricing.discount_day, Weekday::Sun);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ShopConfig::from_lookup(lookup(&[("SHOP_FRAUD_LIMIT_CENTS", "lots")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SHOP_FRAUD_LIMIT_CENTS",
                value: "lots".to_string()
            }
        );

        let err = ShopConfig::from_lookup(lookup(&[("SHOP_FRAUD_LIMIT_CENTS", "-1")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SHOP_FRAUD_LIMIT_CENTS",
                value: "-1".to_string()
            }
        );

        let err = ShopConfig::from_lookup(lookup(&[("SHOP_CLOTHING_DISCOUNT_CENTS", "-500")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SHOP_CLOTHING_DISCOUNT_CENTS",
                value: "-500".to_string()
            }
        );

        let zero = ShopConfig::from_lookup(lookup(&[("SHOP_CLOTHING_DISCOUNT_CENTS", "0")])).unwrap();
        assert_eq!(zero.pricing.discount_day_amount, Money::zero());

        assert!(ShopConfig::from_lookup(lookup(&[("SHOP_ADMIN_DISCOUNT_BPS", "10001")])).is_err());
        assert!(ShopConfig::from_lookup(lookup(&[("SHOP_DISCOUNT_WEEKDAY", "someday")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = ShopConfig {
            currency_symbol: "$".to_string(),
            ..ShopConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(90_000)), "$900.00");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }
}
