//! # State Module
//!
//! Everything a request handler needs, built once per process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ShopConfig::from_env() ──► ShopState::new(config, clock)              │
//! │                                      │                                  │
//! │          ┌──────────────────┬────────┴─────────┬──────────────────┐    │
//! │          ▼                  ▼                  ▼                  ▼    │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐ │
//! │  │    Store     │  │PricingEngine │  │  FraudGuard  │  │ ShopConfig │ │
//! │  │ Mutex<users, │  │ policy +     │  │ card limit   │  │ (symbol)   │ │
//! │  │   orders>    │  │ Arc<Clock>   │  │              │  │            │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘ │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Store: single Mutex, one session per request                        │
//! │  • PricingEngine, FraudGuard, ShopConfig: read-only after init         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigError, ShopConfig};

use std::sync::Arc;

use shop_core::clock::{Clock, SystemClock};
use shop_core::fraud::FraudGuard;
use shop_core::pricing::PricingEngine;
use shop_store::{Store, StoreResult};

/// Process-wide state shared by all requests.
#[derive(Debug)]
pub struct ShopState {
    pub store: Store,
    pub pricing: PricingEngine,
    pub fraud: FraudGuard,
    pub config: ShopConfig,
}

impl ShopState {
    /// Builds state from configuration and an explicit time source.
    pub fn new(config: ShopConfig, clock: Arc<dyn Clock>) -> StoreResult<Self> {
        let store = Store::new(config.store_config())?;
        let pricing = PricingEngine::new(config.pricing, clock);
        let fraud = config.fraud_guard();

        tracing::debug!(
            fraud_limit = %config.format_currency(config.fraud_card_limit),
            discount_day = %config.pricing.discount_day,
            "Shop state initialized"
        );

        Ok(ShopState {
            store,
            pricing,
            fraud,
            config,
        })
    }

    /// Builds state that reads the current UTC date.
    pub fn with_system_clock(config: ShopConfig) -> StoreResult<Self> {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Drops every user and order. For tests.
    pub fn reset(&self) -> StoreResult<()> {
        self.store.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shop_core::clock::FixedClock;
    use shop_core::{Money, Role};
    use shop_store::HashConfig;

    fn config() -> ShopConfig {
        ShopConfig {
            hashing: HashConfig::minimal(),
            ..ShopConfig::default()
        }
    }

    #[test]
    fn test_system_clock_state_prices_by_todays_date() {
        let before = Utc::now().date_naive();
        let state = ShopState::with_system_clock(config()).unwrap();
        let after = Utc::now().date_naive();

        let today = state.pricing.today();
        assert!(before <= today && today <= after);
        assert_eq!(state.fraud, config().fraud_guard());
    }

    #[test]
    fn test_reset_empties_store() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let state = ShopState::new(config(), Arc::new(FixedClock::new(day))).unwrap();

        state
            .store
            .session(|s| -> StoreResult<()> {
                let user = s.users().find_or_create("a@test.com", "password123", Role::Customer)?;
                s.orders().record(&user, &[], Money::zero())?;
                Ok(())
            })
            .unwrap();

        state.reset().unwrap();
        assert!(state.store.list_users().unwrap().is_empty());
        assert!(state.store.list_orders().unwrap().is_empty());
    }
}
