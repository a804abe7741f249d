//! # Store
//!
//! The single owner of the user directory and the order ledger.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store                                           │
//! │                                                                         │
//! │   Mutex<Tables> ─────────────────────────────────────────────┐          │
//! │     ├── users:  UserTable  { rows: Vec<User>,  next_id }     │          │
//! │     └── orders: OrderTable { rows: Vec<Order>, next_id }     │          │
//! │                                                              │          │
//! │   store.session(|s| {                     one lock for both ◄┘          │
//! │       let user  = s.users().find_or_create(..)?;                        │
//! │       let order = s.orders().record(..)?;                               │
//! │   })                                                                    │
//! │                                                                         │
//! │   "assign next id" is read-modify-write, so a request that creates a   │
//! │   user and then an order must hold the lock across both steps.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A session is not a transaction: work done before an error is kept.

use std::sync::{Mutex, MutexGuard};

use shop_core::{Order, User};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::password::{HashConfig, Hasher};
use crate::repository::order::{OrderLedger, OrderTable};
use crate::repository::user::{UserDirectory, UserTable};

/// Store configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub hashing: HashConfig,
}

impl StoreConfig {
    pub fn hashing(mut self, hashing: HashConfig) -> Self {
        self.hashing = hashing;
        self
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: UserTable,
    orders: OrderTable,
}

/// In-memory store shared by every request in the process.
#[derive(Debug)]
pub struct Store {
    tables: Mutex<Tables>,
    hasher: Hasher,
}

impl Store {
    /// Creates an empty store.
    ///
    /// ## Errors
    /// `InvalidConfig` if the argon2 parameters are out of range.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let hasher = Hasher::new(config.hashing)?;
        debug!(?config, "Store created");
        Ok(Store {
            tables: Mutex::new(Tables::default()),
            hasher,
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Runs `f` while holding the store lock.
    ///
    /// ## Usage
    /// ```rust
    /// use shop_core::Role;
    /// use shop_store::{HashConfig, Store, StoreConfig};
    ///
    /// let store = Store::new(StoreConfig::default().hashing(HashConfig::minimal())).unwrap();
    /// let user = store
    ///     .session(|s| s.users().find_or_create("x@test.com", "password123", Role::Vip))
    ///     .unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    pub fn session<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Session<'_>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let mut guard = self.lock()?;
        let mut session = Session {
            tables: &mut *guard,
            hasher: &self.hasher,
        };
        f(&mut session)
    }

    /// Snapshot of all users in insertion order.
    pub fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.lock()?.users.rows().to_vec())
    }

    /// Snapshot of all orders in insertion order.
    pub fn list_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.lock()?.orders.rows().to_vec())
    }

    /// Clears both collections. The id sequences keep counting, so an id is
    /// never handed out twice by the same store.
    pub fn reset(&self) -> StoreResult<()> {
        let mut tables = self.lock()?;
        let users = tables.users.clear();
        let orders = tables.orders.clear();
        info!(users, orders, "Store reset");
        Ok(())
    }
}

/// Access to the tables while the store lock is held.
pub struct Session<'a> {
    tables: &'a mut Tables,
    hasher: &'a Hasher,
}

impl Session<'_> {
    pub fn users(&mut self) -> UserDirectory<'_> {
        UserDirectory::new(&mut self.tables.users, self.hasher)
    }

    pub fn orders(&mut self) -> OrderLedger<'_> {
        OrderLedger::new(&mut self.tables.orders)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
