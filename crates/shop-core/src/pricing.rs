//! # Pricing Engine
//!
//! Computes line prices from an item and the purchaser's role, and sums carts.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price_item(item, role)                                                 │
//! │                                                                         │
//! │  price <= 0 ──────────────────────────────► ValidationError             │
//! │                                                                         │
//! │  electronics ──┬── vip   ──► price - 10%                               │
//! │                ├── admin ──► price - 50%                               │
//! │                └── other ──► price                                     │
//! │                                                                         │
//! │  clothing ─────┬── today is discount day ──► price - 10.00             │
//! │                └── otherwise ──────────────► price                     │
//! │                                                                         │
//! │  result clamped to >= 0                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::clock::Clock;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, Item, Role};
use crate::{ADMIN_DISCOUNT_BPS, DISCOUNT_DAY, DISCOUNT_DAY_AMOUNT, VIP_DISCOUNT_BPS};

// =============================================================================
// Pricing Policy
// =============================================================================

/// Discount rates and the discount day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Electronics discount for `vip`, in basis points.
    pub vip_discount_bps: u32,
    /// Electronics discount for `admin`, in basis points.
    pub admin_discount_bps: u32,
    /// Weekday on which clothing gets a flat discount.
    pub discount_day: Weekday,
    /// Flat clothing discount on the discount day.
    pub discount_day_amount: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            vip_discount_bps: VIP_DISCOUNT_BPS,
            admin_discount_bps: ADMIN_DISCOUNT_BPS,
            discount_day: DISCOUNT_DAY,
            discount_day_amount: DISCOUNT_DAY_AMOUNT,
        }
    }
}

impl PricingPolicy {
    /// Electronics discount for a role, if any.
    fn electronics_discount_bps(&self, role: Role) -> Option<u32> {
        match role {
            Role::Vip => Some(self.vip_discount_bps),
            Role::Admin => Some(self.admin_discount_bps),
            Role::Customer | Role::New => None,
        }
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Prices items against a policy and an injected clock.
#[derive(Clone)]
pub struct PricingEngine {
    policy: PricingPolicy,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl PricingEngine {
    pub fn new(policy: PricingPolicy, clock: Arc<dyn Clock>) -> Self {
        PricingEngine { policy, clock }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Calendar date the engine prices against.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// True if the clock says today is the clothing discount day.
    pub fn is_discount_day(&self) -> bool {
        self.today().weekday() == self.policy.discount_day
    }

    /// Computes the price of one line for a purchaser role.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use chrono::NaiveDate;
    /// use shop_core::clock::FixedClock;
    /// use shop_core::pricing::{PricingEngine, PricingPolicy};
    /// use shop_core::{Category, Item, Money, Role};
    ///
    /// let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    /// let engine = PricingEngine::new(PricingPolicy::default(), Arc::new(FixedClock::new(monday)));
    ///
    /// let laptop = Item::new(Category::Electronics, Money::from_cents(100_000));
    /// assert_eq!(engine.price_item(&laptop, Role::Vip).unwrap().cents(), 90_000);
    /// ```
    pub fn price_item(&self, item: &Item, role: Role) -> CoreResult<Money> {
        if !item.price.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            }
            .into());
        }

        let price = match item.category {
            Category::Electronics => match self.policy.electronics_discount_bps(role) {
                Some(bps) => item.price.apply_percentage_discount(bps),
                None => item.price,
            },
            Category::Clothing => {
                if self.is_discount_day() {
                    item.price - self.policy.discount_day_amount
                } else {
                    item.price
                }
            }
        };

        Ok(price.non_negative())
    }

    /// Sums independently priced lines. An empty cart totals zero.
    ///
    /// A total that does not fit in [`Money`] is a validation error, never a
    /// wrapped or panicking sum.
    pub fn price_cart(&self, items: &[Item], role: Role) -> CoreResult<Money> {
        items.iter().try_fold(Money::zero(), |total, item| {
            let line = self.price_item(item, role)?;
            total.checked_add(line).ok_or_else(|| {
                ValidationError::TooLarge {
                    field: "total".to_string(),
                    max: Money::MAX,
                }
                .into()
            })
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
