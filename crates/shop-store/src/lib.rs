//! # shop-store: In-memory Store for the Shop Order Pipeline
//!
//! This crate owns the process-wide user directory and order ledger.
//! Both collections live behind one `Mutex` and reset on restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Orders Data Flow                            │
//! │                                                                         │
//! │  purchase() in shop-cli                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     shop-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │   Password   │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (argon2id)  │  │   │
//! │  │   │               │    │ UserDirectory │    │              │  │   │
//! │  │   │ Mutex<Tables> │◄───│ OrderLedger   │───►│ hash/verify  │  │   │
//! │  │   │ session/reset │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The store, its configuration and lock sessions
//! - [`repository`] - User directory and order ledger
//! - [`password`] - Argon2 password hashing
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use shop_core::{Money, Role};
//! use shop_store::{HashConfig, Store, StoreConfig, StoreResult};
//!
//! let store = Store::new(StoreConfig::default().hashing(HashConfig::minimal())).unwrap();
//!
//! let order = store
//!     .session(|s| -> StoreResult<_> {
//!         let user = s.users().find_or_create("x@test.com", "password123", Role::Customer)?;
//!         s.orders().record(&user, &[], Money::zero())
//!     })
//!     .unwrap();
//!
//! assert_eq!(order.id, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod password;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use password::HashConfig;
pub use store::{Session, Store, StoreConfig};

pub use repository::order::OrderLedger;
pub use repository::user::UserDirectory;
