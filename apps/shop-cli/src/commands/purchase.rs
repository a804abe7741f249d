//! # Purchase Command
//!
//! ```text
//! validate ──► find_or_create ──► price ──► fraud check ──► record ──► Receipt
//!    │         └──────────── one store session (one lock) ─────────┘
//!    └── fails early, nothing is touched
//! ```

use shop_core::validation::validate_purchase;
use shop_core::{Order, PurchaseRequest, Receipt};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// Runs one purchase end to end.
///
/// The cart is priced with the role stored on the account, so an existing
/// user cannot change their discount by sending a different role.
pub fn purchase(state: &ShopState, request: &PurchaseRequest) -> Result<Receipt, ApiError> {
    debug!(
        items = request.items.len(),
        payment = %request.payment,
        "purchase command"
    );

    let purchase = validate_purchase(request)?;

    let order = state.store.session(|s| -> Result<Order, ApiError> {
        let user = s
            .users()
            .find_or_create(&purchase.email, &purchase.password, purchase.role)?;

        let total = state.pricing.price_cart(&purchase.items, user.role)?;
        state.fraud.check(total, &purchase.payment, user.role)?;

        Ok(s.orders().record(&user, &purchase.items, total)?)
    })?;

    info!(
        order_id = order.id,
        user_id = order.user_id,
        total = %state.config.format_currency(order.total),
        "Purchase completed"
    );

    Ok(Receipt::for_order(&order))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorClass, ErrorCode};
    use crate::state::ShopConfig;
    use chrono::NaiveDate;
    use shop_core::clock::FixedClock;
    use shop_core::{Decimal, ItemPayload, Money, Role, UserPayload, MAX_ITEM_PRICE};
    use shop_store::HashConfig;
    use std::sync::Arc;

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn state_on(day: NaiveDate) -> ShopState {
        let config = ShopConfig {
            hashing: HashConfig::minimal(),
            ..ShopConfig::default()
        };
        ShopState::new(config, Arc::new(FixedClock::new(day))).unwrap()
    }

    /// Prices are whole currency units.
    fn request(email: &str, role: Option<&str>, items: &[(&str, i64)], payment: &str) -> PurchaseRequest {
        PurchaseRequest {
            user: UserPayload {
                email: email.to_string(),
                password: "password123".to_string(),
                role: role.map(str::to_string),
            },
            items: items
                .iter()
                .map(|(category, price)| ItemPayload {
                    category: category.to_string(),
                    price: Decimal::from(*price),
                })
                .collect(),
            payment: payment.to_string(),
        }
    }

    #[test]
    fn test_customer_pays_list_price() {
        let state = state_on(monday());
        let receipt = purchase(
            &state,
            &request("c@test.com", None, &[("electronics", 1000)], "card"),
        )
        .unwrap();

        assert_eq!(receipt.status, "success");
        assert_eq!(receipt.total, Money::from_cents(100_000));
        assert_eq!(receipt.order_id, 1);
    }

    #[test]
    fn test_role_discounts_on_electronics() {
        let state = state_on(monday());

        let vip = purchase(
            &state,
            &request("vip@test.com", Some("vip"), &[("electronics", 1000)], "card"),
        )
        .unwrap();
        assert_eq!(vip.total, Money::from_cents(90_000));

        let admin = purchase(
            &state,
            &request("admin@test.com", Some("admin"), &[("electronics", 1000)], "card"),
        )
        .unwrap();
        assert_eq!(admin.total, Money::from_cents(50_000));

        let new = purchase(
            &state,
            &request("new@test.com", Some("new"), &[("electronics", 1000)], "card"),
        )
        .unwrap();
        assert_eq!(new.total, Money::from_cents(100_000));
    }

    #[test]
    fn test_clothing_discount_only_on_saturday() {
        let cart = [("clothing", 100)];

        let sat = purchase(&state_on(saturday()), &request("a@test.com", None, &cart, "card")).unwrap();
        assert_eq!(sat.total, Money::from_cents(9_000));

        let mon = purchase(&state_on(monday()), &request("a@test.com", None, &cart, "card")).unwrap();
        assert_eq!(mon.total, Money::from_cents(10_000));
    }

    #[test]
    fn test_cheap_clothing_clamps_to_zero_on_saturday() {
        let state = state_on(saturday());
        let receipt = purchase(&state, &request("a@test.com", None, &[("clothing", 5)], "bonus")).unwrap();
        assert_eq!(receipt.total, Money::zero());
    }

    #[test]
    fn test_cart_total_is_sum_of_lines() {
        let state = state_on(monday());
        let receipt = purchase(
            &state,
            &request(
                "a@test.com",
                None,
                &[("electronics", 100), ("clothing", 200)],
                "card",
            ),
        )
        .unwrap();
        assert_eq!(receipt.total, Money::from_cents(30_000));
    }

    #[test]
    fn test_fraud_guard_blocks_new_accounts_only() {
        let state = state_on(monday());
        let cart = [("electronics", 6000)];

        let err = purchase(&state, &request("new@test.com", Some("new"), &cart, "card")).unwrap_err();
        assert_eq!(err.code, ErrorCode::LimitExceeded);
        assert_eq!(err.class, ErrorClass::AccessDenied);
        assert_eq!(err.message, "Limit exceeded");

        let ok = purchase(&state, &request("c@test.com", Some("customer"), &cart, "card")).unwrap();
        assert_eq!(ok.total, Money::from_cents(600_000));
    }

    #[test]
    fn test_fraud_rejection_keeps_user_but_records_no_order() {
        let state = state_on(monday());
        purchase(
            &state,
            &request("new@test.com", Some("new"), &[("electronics", 6000)], "card"),
        )
        .unwrap_err();

        let users = state.store.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, Role::New);
        assert!(state.store.list_orders().unwrap().is_empty());
    }

    #[test]
    fn test_bonus_payment_bypasses_fraud_guard() {
        let state = state_on(monday());
        let receipt = purchase(
            &state,
            &request("new@test.com", Some("new"), &[("electronics", 6000)], "bonus"),
        )
        .unwrap();
        assert_eq!(receipt.total, Money::from_cents(600_000));
    }

    #[test]
    fn test_same_email_creates_one_user() {
        let state = state_on(monday());
        let cart = [("electronics", 10)];

        let first = purchase(&state, &request("x@test.com", None, &cart, "card")).unwrap();
        let second = purchase(&state, &request("x@test.com", None, &cart, "card")).unwrap();

        let users = state.store.list_users().unwrap();
        assert_eq!(users.iter().filter(|u| u.email == "x@test.com").count(), 1);

        let orders = state.store.list_orders().unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.user_id == users[0].id));
        assert!(first.order_id < second.order_id);
    }

    #[test]
    fn test_stored_role_wins_over_requested_role() {
        let state = state_on(monday());
        let cart = [("electronics", 1000)];

        purchase(&state, &request("x@test.com", Some("customer"), &cart, "card")).unwrap();
        let again = purchase(&state, &request("x@test.com", Some("admin"), &cart, "card")).unwrap();

        assert_eq!(again.total, Money::from_cents(100_000));
    }

    #[test]
    fn test_wrong_password_is_access_denied() {
        let state = state_on(monday());
        let cart = [("electronics", 10)];
        purchase(&state, &request("x@test.com", None, &cart, "card")).unwrap();

        let mut wrong = request("x@test.com", None, &cart, "card");
        wrong.user.password = "different-password".to_string();
        let err = purchase(&state, &wrong).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.class, ErrorClass::AccessDenied);
        assert_eq!(state.store.list_orders().unwrap().len(), 1);
    }

    #[test]
    fn test_short_password_has_no_side_effects() {
        let state = state_on(monday());
        let mut req = request("x@test.com", None, &[("electronics", 10)], "card");
        req.user.password = "short".to_string();

        let err = purchase(&state, &req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Password too short");

        assert!(state.store.list_users().unwrap().is_empty());
        assert!(state.store.list_orders().unwrap().is_empty());
    }

    #[test]
    fn test_validation_failures() {
        let state = state_on(monday());

        let err = purchase(&state, &request("not-an-email", None, &[], "card")).unwrap_err();
        assert_eq!(err.message, "Invalid email");

        let err = purchase(&state, &request("a@test.com", Some("root"), &[], "card")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = purchase(&state, &request("a@test.com", None, &[("food", 1)], "card")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = purchase(&state, &request("a@test.com", None, &[("clothing", 0)], "card")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(state.store.list_users().unwrap().is_empty());
    }

    #[test]
    fn test_fractional_price_is_kept_to_the_cent() {
        let state = state_on(monday());
        let mut req = request("a@test.com", None, &[("electronics", 0)], "card");
        req.items[0].price = Decimal::new(1999, 2);

        let receipt = purchase(&state, &req).unwrap();
        assert_eq!(receipt.total, Money::from_cents(1999));
        assert_eq!(
            serde_json::to_value(&receipt).unwrap(),
            serde_json::json!({"status": "success", "total": 19.99, "order_id": 1})
        );
    }

    #[test]
    fn test_oversized_price_is_rejected_and_store_stays_usable() {
        let state = state_on(monday());
        let huge = MAX_ITEM_PRICE.to_decimal() + Decimal::ONE;
        let mut req = request("a@test.com", None, &[("electronics", 0)], "card");
        req.items[0].price = huge;

        let err = purchase(&state, &req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.class, ErrorClass::ClientError);
        assert!(state.store.list_users().unwrap().is_empty());

        let mut req = request("a@test.com", None, &[("electronics", 0)], "card");
        req.items[0].price = Decimal::from(i64::MAX) * Decimal::from(1000);
        let err = purchase(&state, &req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let ok = purchase(&state, &request("a@test.com", None, &[("clothing", 10)], "card")).unwrap();
        assert_eq!(ok.order_id, 1);
        assert_eq!(ok.total, Money::from_major(10));
    }

    #[test]
    fn test_empty_cart_records_zero_order() {
        let state = state_on(monday());
        let receipt = purchase(&state, &request("a@test.com", None, &[], "card")).unwrap();
        assert_eq!(receipt.total, Money::zero());
        assert_eq!(state.store.list_orders().unwrap().len(), 1);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let state = state_on(monday());
        let cart = [("clothing", 10)];

        let order_ids: Vec<u64> = (0..4)
            .map(|i| {
                purchase(&state, &request(&format!("u{i}@test.com"), None, &cart, "card"))
                    .unwrap()
                    .order_id
            })
            .collect();
        assert!(order_ids.windows(2).all(|w| w[0] < w[1]));

        let user_ids: Vec<u64> = state.store.list_users().unwrap().iter().map(|u| u.id).collect();
        assert_eq!(user_ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_concurrent_purchases_get_unique_ids() {
        let state = Arc::new(state_on(monday()));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    (0..5)
                        .map(|_| {
                            purchase(
                                &state,
                                &request(&format!("t{t}@test.com"), None, &[("clothing", 1)], "card"),
                            )
                            .unwrap()
                            .order_id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 20);
        assert_eq!(state.store.list_users().unwrap().len(), 4);
    }
}
