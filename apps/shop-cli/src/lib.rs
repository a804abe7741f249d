//! # shop-cli: Request Handler for the Shop Order Pipeline
//!
//! The thin layer between JSON requests and the domain crates.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shop-cli                                         │
//! │                                                                         │
//! │  main.rs (clap)                                                         │
//! │     │                                                                   │
//! │     ├── purchase <JSON|->  ──► commands::purchase ──► Receipt | ApiError│
//! │     ├── batch <FILE|->     ──► commands::run_batch (one line each)      │
//! │     └── users              ──► commands::list_users                     │
//! │                                                                         │
//! │  state::ShopState ◄── ShopConfig::from_env() + Clock                    │
//! │     ├── shop_store::Store         (users, orders)                      │
//! │     ├── shop_core::PricingEngine  (role + discount-day rules)          │
//! │     └── shop_core::FraudGuard     (card limit for new accounts)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use shop_cli::commands::purchase;
//! use shop_cli::state::{ShopConfig, ShopState};
//! use shop_core::clock::FixedClock;
//! use shop_core::PurchaseRequest;
//! use shop_store::HashConfig;
//!
//! let config = ShopConfig { hashing: HashConfig::minimal(), ..ShopConfig::default() };
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let state = ShopState::new(config, Arc::new(FixedClock::new(today))).unwrap();
//!
//! let request: PurchaseRequest = serde_json::from_str(
//!     r#"{"user":{"email":"x@test.com","password":"password123"},
//!         "items":[{"category":"clothing","price":100}],
//!         "payment":"card"}"#,
//! ).unwrap();
//!
//! let receipt = purchase(&state, &request).unwrap();
//! assert_eq!(receipt.total.cents(), 9000);
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - Default: `info,shop=debug`
/// - Override with `RUST_LOG`, e.g. `RUST_LOG=shop_store=trace`
///
/// Logs go to stderr; stdout carries only JSON responses.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shop=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
