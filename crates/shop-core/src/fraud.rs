//! # Fraud Guard
//!
//! Rejects large card payments from untrusted (`new`) accounts.
//!
//! ```text
//! payment == card ──no──► pass
//!      │yes
//! total > limit ────no──► pass
//!      │yes
//! role == new ──────no──► pass (logged)
//!      │yes
//!      ▼
//! LimitExceeded
//! ```

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PaymentMethod, Role};
use crate::FRAUD_CARD_LIMIT;

/// Stateless card-limit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FraudGuard {
    card_limit: Money,
}

impl Default for FraudGuard {
    fn default() -> Self {
        FraudGuard::new(FRAUD_CARD_LIMIT)
    }
}

impl FraudGuard {
    pub const fn new(card_limit: Money) -> Self {
        FraudGuard { card_limit }
    }

    pub const fn card_limit(&self) -> Money {
        self.card_limit
    }

    /// Checks a priced transaction.
    ///
    /// The limit is exclusive: a total exactly at the limit passes.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::fraud::FraudGuard;
    /// use shop_core::{Money, PaymentMethod, Role};
    ///
    /// let guard = FraudGuard::default();
    /// let total = Money::from_major(6000);
    /// assert!(guard.check(total, &PaymentMethod::Card, Role::New).is_err());
    /// assert!(guard.check(total, &PaymentMethod::Card, Role::Customer).is_ok());
    /// ```
    pub fn check(&self, total: Money, payment: &PaymentMethod, role: Role) -> CoreResult<()> {
        if *payment != PaymentMethod::Card || total <= self.card_limit {
            return Ok(());
        }

        debug!(total = %total, role = %role, "Fraud check required for large card payment");

        if role == Role::New {
            return Err(CoreError::LimitExceeded {
                total,
                limit: self.card_limit,
            });
        }

        Ok(())
    }
}
