//! # Validation Module
//!
//! Boundary validation for purchase requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape: user/items/payment present, price is a number             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── email shape, password length                                      │
//! │  ├── role / category in their closed sets                              │
//! │  └── every price in (0, MAX_ITEM_PRICE], rounded to cents             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  └── re-checks price > 0 for callers that skip this module             │
//! │                                                                         │
//! │  Nothing past Layer 2 runs for a rejected request: no user, no order.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, Item, ItemPayload, PaymentMethod, Purchase, PurchaseRequest, Role};
use crate::{MAX_EMAIL_LENGTH, MAX_ITEM_PRICE, MIN_PASSWORD_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an email address shape.
///
/// ## Rules
/// - At most 254 characters, no whitespace
/// - Exactly one `@` with a non-empty local part
/// - Domain has at least one `.` and no empty labels
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_email;
///
/// assert!(validate_email("x@test.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("a@localhost").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidEmail);
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or(ValidationError::InvalidEmail)?;

    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates password length (in characters, not bytes).
///
/// ```rust
/// use shop_core::validation::validate_password;
///
/// assert!(validate_password("password123").is_ok());
/// assert!(validate_password("short").is_err());
/// ```
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Parses an optional role, defaulting to `customer`.
pub fn parse_role(role: Option<&str>) -> ValidationResult<Role> {
    match role {
        None => Ok(Role::default()),
        Some(s) => s.parse(),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a listed price given in major units and converts it to cents.
///
/// ## Rules
/// - Must be strictly positive after rounding to cents. Free items are not sold here.
/// - Must not exceed [`MAX_ITEM_PRICE`], so cart totals stay far from overflow.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use shop_core::validation::validate_price;
///
/// assert_eq!(validate_price(Decimal::new(1999, 2)).unwrap().cents(), 1999);
/// assert!(validate_price(Decimal::ZERO).is_err());
/// assert!(validate_price(Decimal::from(-100)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> ValidationResult<Money> {
    let must_be_positive = || ValidationError::MustBePositive {
        field: "price".to_string(),
    };

    if price <= Decimal::ZERO {
        return Err(must_be_positive());
    }

    let too_large = || ValidationError::TooLarge {
        field: "price".to_string(),
        max: MAX_ITEM_PRICE,
    };

    let cents = Money::from_decimal(price).ok_or_else(too_large)?;
    if cents > MAX_ITEM_PRICE {
        return Err(too_large());
    }
    if !cents.is_positive() {
        return Err(must_be_positive());
    }

    Ok(cents)
}

fn validate_item(item: &ItemPayload) -> ValidationResult<Item> {
    let category: Category = item.category.parse()?;
    let price = validate_price(item.price)?;
    Ok(Item::new(category, price))
}

// =============================================================================
// Request Validator
// =============================================================================

/// Validates a whole purchase request.
///
/// Checks run in a fixed order (email, password, role, items) and the first
/// failure wins.
///
/// ## Example
/// ```rust
/// use shop_core::types::{ItemPayload, PurchaseRequest, UserPayload};
/// use shop_core::Decimal;
/// use shop_core::validation::validate_purchase;
///
/// let request = PurchaseRequest {
///     user: UserPayload {
///         email: "vip@test.com".into(),
///         password: "password123".into(),
///         role: Some("vip".into()),
///     },
///     items: vec![ItemPayload { category: "electronics".into(), price: Decimal::from(1000) }],
///     payment: "card".into(),
/// };
/// let purchase = validate_purchase(&request).unwrap();
/// assert_eq!(purchase.items.len(), 1);
/// ```
pub fn validate_purchase(request: &PurchaseRequest) -> ValidationResult<Purchase> {
    validate_email(&request.user.email)?;
    validate_password(&request.user.password)?;
    let role = parse_role(request.user.role.as_deref())?;

    let items = request
        .items
        .iter()
        .map(validate_item)
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(Purchase {
        email: request.user.email.clone(),
        password: request.user.password.clone(),
        role,
        items,
        payment: PaymentMethod::from(request.payment.as_str()),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
