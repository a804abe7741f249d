//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats, a VIP laptop at 999.99 × 0.90 = 899.991000000001         │
//! │  and a cart total drifts a little further with every line.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                     │
//! │    99999 cents × 9000 bps / 10000 = 89999 cents (rounded half-up)      │
//! │    Every line price is an exact integer, so the order total is too     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_cents(100_000); // 1000.00
//! let vip = price.apply_percentage_discount(1000); // 10% off
//! assert_eq!(vip.cents(), 90_000);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: discount arithmetic may dip below zero before the
///   pricing engine clamps a line back to zero
/// - **Single field tuple struct**: serializes as a bare integer on the wire
///
/// ## Where Money is Used
/// ```text
/// Item.price ──► price_item() ──► line price ──► price_cart() ──► Order.total
///                                                                    │
///                                             FraudGuard::check() ◄──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(10).cents(), 1000);
    /// ```
    #[inline]
    pub const fn from_major(units: i64) -> Self {
        Money(units * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative values to zero.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-500).non_negative(), Money::zero());
    /// assert_eq!(Money::from_cents(500).non_negative().cents(), 500);
    /// ```
    #[inline]
    pub const fn non_negative(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// The discount itself is rounded half-up with `(amount * bps + 5000) / 10000`,
    /// computed in i128 so large carts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let listed = Money::from_cents(100_000);
    /// assert_eq!(listed.apply_percentage_discount(5000).cents(), 50_000);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }

    /// The amount in major units, exactly (`1099` cents is `10.99`).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Converts a major-unit amount to cents, rounding half away from zero.
    ///
    /// Returns `None` when the amount does not fit.
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(1999, 2)), Some(Money::from_cents(1999)));
    /// assert_eq!(Money::from_decimal(Decimal::new(10005, 4)), Some(Money::from_cents(100)));
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Money> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Checked addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering without a currency symbol, e.g. `1234.50`.
///
/// The app layer prefixes the configured symbol when logging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Serde adapter that puts `Money` on the wire in major units.
///
/// Whole amounts are written as integers (`1000`), others with their cents
/// (`19.99`). Input may be an integer, a float or a numeric string.
///
/// ```rust
/// use serde::Serialize;
/// use shop_core::money::Money;
///
/// #[derive(Serialize)]
/// struct Line {
///     #[serde(with = "shop_core::money::major_units")]
///     total: Money,
/// }
///
/// let json = serde_json::to_string(&Line { total: Money::from_cents(1999) }).unwrap();
/// assert_eq!(json, r#"{"total":19.99}"#);
/// ```
pub mod major_units {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if money.cents_part() == 0 {
            return serializer.serialize_i64(money.major());
        }

        match money.to_decimal().to_f64() {
            Some(amount) => serializer.serialize_f64(amount),
            None => Err(ser::Error::custom("amount is not representable")),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::from_decimal(amount).ok_or_else(|| de::Error::custom("amount out of range"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(5000).cents(), 500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
    }

    #[test]
    fn test_percentage_discount() {
        let listed = Money::from_cents(100_000);
        assert_eq!(listed.apply_percentage_discount(1000).cents(), 90_000);
        assert_eq!(listed.apply_percentage_discount(5000).cents(), 50_000);
        assert_eq!(listed.apply_percentage_discount(0), listed);
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 10% of 5 cents is 0.5 cents, rounded up to 1
        assert_eq!(Money::from_cents(5).apply_percentage_discount(1000).cents(), 4);
        // 10% of 4 cents is 0.4 cents, rounded down to 0
        assert_eq!(Money::from_cents(4).apply_percentage_discount(1000).cents(), 4);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Money::from_cents(-1).non_negative(), Money::zero());
        assert_eq!(Money::zero().non_negative(), Money::zero());
        assert_eq!(Money::from_cents(42).non_negative().cents(), 42);
    }

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(Money::from_cents(1099).to_decimal(), Decimal::new(1099, 2));
        assert_eq!(Money::from_decimal(Decimal::from(1000)), Some(Money::from_major(1000)));
        // 0.005 rounds up to a cent, 0.004 down to nothing
        assert_eq!(Money::from_decimal(Decimal::new(5, 3)), Some(Money::from_cents(1)));
        assert_eq!(Money::from_decimal(Decimal::new(4, 3)), Some(Money::zero()));
        assert_eq!(Money::from_decimal(Decimal::MAX), None);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(Money::from_cents(i64::MAX)
            .checked_add(Money::from_cents(1))
            .is_none());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(900)).unwrap();
        assert_eq!(json, "900");
        let back: Money = serde_json::from_str("900").unwrap();
        assert_eq!(back.cents(), 900);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        #[serde(with = "major_units")]
        amount: Money,
    }

    #[test]
    fn test_major_units_wire_format() {
        let whole = serde_json::to_value(Line { amount: Money::from_major(1000) }).unwrap();
        assert_eq!(whole, serde_json::json!({"amount": 1000}));

        let cents = serde_json::to_string(&Line { amount: Money::from_cents(1999) }).unwrap();
        assert_eq!(cents, r#"{"amount":19.99}"#);

        let parsed: Line = serde_json::from_str(r#"{"amount": 19.99}"#).unwrap();
        assert_eq!(parsed.amount, Money::from_cents(1999));
        let parsed: Line = serde_json::from_str(r#"{"amount": 90}"#).unwrap();
        assert_eq!(parsed.amount, Money::from_major(90));
    }
}
