//! # shop-core: Pure Business Logic for the Shop Order Pipeline
//!
//! This crate holds the rules of a purchase as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shop Orders Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-cli (Request Handler)                   │   │
//! │  │    validate ──► find_or_create ──► price ──► check ──► record  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   fraud   │  │ validation│  │   │
//! │  │   │ Role, Item│  │  Engine   │  │   Guard   │  │   rules   │  │   │
//! │  │   │   Order   │  │  Policy   │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • TIME VIA `Clock`                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-store (In-memory Store)                 │   │
//! │  │              user directory, order ledger, one Mutex            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain and wire types (Role, Category, Item, Order, Receipt)
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Line and cart pricing
//! - [`fraud`] - Card limit rule for new accounts
//! - [`clock`] - Injectable "today" for the discount day
//! - [`validation`] - Request boundary validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use shop_core::clock::FixedClock;
//! use shop_core::pricing::{PricingEngine, PricingPolicy};
//! use shop_core::{Category, Item, Money, Role};
//!
//! let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let engine = PricingEngine::new(PricingPolicy::default(), Arc::new(FixedClock::new(saturday)));
//!
//! let shirt = Item::new(Category::Clothing, Money::from_major(100));
//! assert_eq!(engine.price_item(&shirt, Role::Customer).unwrap(), Money::from_major(90));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod fraud;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rust_decimal::Decimal;
pub use types::*;

use chrono::Weekday;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum email length (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// `vip` electronics discount: 10% (price × 0.90).
pub const VIP_DISCOUNT_BPS: u32 = 1000;

/// `admin` electronics discount: 50% (price × 0.50).
pub const ADMIN_DISCOUNT_BPS: u32 = 5000;

/// Weekday on which clothing is discounted.
pub const DISCOUNT_DAY: Weekday = Weekday::Sat;

/// Flat clothing discount on the discount day: 10.00.
pub const DISCOUNT_DAY_AMOUNT: Money = Money::from_cents(1000);

/// Card totals above this are refused for `new` accounts: 5000.00.
pub const FRAUD_CARD_LIMIT: Money = Money::from_cents(500_000);

/// Highest listed price accepted for a single line: 1,000,000,000.00.
pub const MAX_ITEM_PRICE: Money = Money::from_major(1_000_000_000);
