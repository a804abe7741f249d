//! # Domain Types
//!
//! Core domain types used throughout the shop order pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │      Order      │   │     Receipt     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (seq u64)   │   │  id (seq u64)   │   │  status         │       │
//! │  │  email (unique) │   │  user_id (FK)   │   │  total          │       │
//! │  │  password_hash  │   │  total          │   │  order_id       │       │
//! │  │  role           │   │  items snapshot │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Role       │   │    Category     │   │ PaymentMethod   │       │
//! │  │  customer, vip  │   │  electronics    │   │  card, bonus,   │       │
//! │  │  admin, new     │   │  clothing       │   │  other(..)      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire vs Domain
//! [`PurchaseRequest`] is what arrives from the caller: free strings for role
//! and category. [`crate::validation::validate_purchase`] turns it into a
//! [`Purchase`] where every field is a closed type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// The purchaser's role. Drives electronics discounts and the fraud guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    /// 10% off electronics.
    Vip,
    /// 50% off electronics.
    Admin,
    /// Untrusted account; large card payments are refused.
    New,
}

impl Role {
    pub const ALL: [&'static str; 4] = ["customer", "vip", "admin", "new"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vip => "vip",
            Role::Admin => "admin",
            Role::New => "new",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "vip" => Ok(Role::Vip),
            "admin" => Ok(Role::Admin),
            "new" => Ok(Role::New),
            other => Err(ValidationError::not_allowed("role", other, &Role::ALL)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
}

impl Category {
    pub const ALL: [&'static str; 2] = ["electronics", "clothing"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "clothing" => Ok(Category::Clothing),
            other => Err(ValidationError::not_allowed("category", other, &Category::ALL)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the purchaser pays.
///
/// Payment is an open set on the wire: unknown methods are accepted and
/// simply never trip the fraud guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Card,
    Bonus,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Bonus => "bonus",
            PaymentMethod::Other(s) => s,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(s: &str) -> Self {
        match s {
            "card" => PaymentMethod::Card,
            "bonus" => PaymentMethod::Bonus,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A validated cart line. Transient: only lives for one pricing computation
/// and as a snapshot inside an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub category: Category,
    /// Listed price in cents, strictly positive after validation.
    pub price: Money,
}

impl Item {
    pub const fn new(category: Category, price: Money) -> Self {
        Item { category, price }
    }
}

// =============================================================================
// User
// =============================================================================

/// A directory entry. Created on first purchase, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    /// Unique key (case-sensitive).
    pub email: String,
    /// Argon2 PHC string. The plaintext is never stored.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Public view of a [`User`], safe to dump (no password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub role: Role,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// The status of an order. Orders are only ever recorded once they succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Completed,
}

/// A recorded order. Immutable after creation.
///
/// `total` is the sum of line prices at the time of creation and is never
/// recomputed from `items`, which hold the listed (pre-discount) prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub total: Money,
    pub items: Vec<Item>,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Wire Types
// =============================================================================

/// Inbound user block of a purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPayload {
    pub email: String,
    pub password: String,
    /// Defaults to `customer` when absent.
    #[serde(default)]
    #[ts(optional)]
    pub role: Option<String>,
}

/// Inbound cart line of a purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemPayload {
    pub category: String,
    /// Listed price in major units, e.g. `19.99`.
    #[ts(type = "number")]
    pub price: Decimal,
}

/// A purchase request as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRequest {
    pub user: UserPayload,
    #[serde(default)]
    pub items: Vec<ItemPayload>,
    pub payment: String,
}

/// A purchase request after boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub items: Vec<Item>,
    pub payment: PaymentMethod,
}

/// The success response returned after an order is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Always `"success"`.
    pub status: String,
    /// In major units on the wire.
    #[serde(with = "crate::money::major_units")]
    #[ts(type = "number")]
    pub total: Money,
    pub order_id: u64,
}

impl Receipt {
    pub const SUCCESS: &'static str = "success";

    pub fn for_order(order: &Order) -> Self {
        Receipt {
            status: Self::SUCCESS.to_string(),
            total: order.total,
            order_id: order.id,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
