//! # User Directory
//!
//! Find-or-create lookup over users keyed by email.
//!
//! ## Identity Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  find_or_create(email, password, role)                                  │
//! │                                                                         │
//! │  email unseen ──► hash password ──► id = next_id ──► insert ──► User   │
//! │                                                                         │
//! │  email known ──┬── password verifies ──► existing User (unchanged)     │
//! │                │                          requested role is ignored     │
//! │                └── mismatch ──────────► InvalidCredentials             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stored role always wins, so a returning buyer cannot promote
//! themselves to `admin` by sending a different role.

use chrono::Utc;
use shop_core::{Role, User};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::password::Hasher;

/// Backing rows for the directory.
#[derive(Debug)]
pub(crate) struct UserTable {
    rows: Vec<User>,
    next_id: u64,
}

impl Default for UserTable {
    fn default() -> Self {
        UserTable {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl UserTable {
    pub(crate) fn rows(&self) -> &[User] {
        &self.rows
    }

    /// Drops every row and returns how many there were. `next_id` is kept.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        removed
    }
}

/// Directory operations, borrowed from a locked store session.
pub struct UserDirectory<'a> {
    table: &'a mut UserTable,
    hasher: &'a Hasher,
}

impl<'a> UserDirectory<'a> {
    pub(crate) fn new(table: &'a mut UserTable, hasher: &'a Hasher) -> Self {
        UserDirectory { table, hasher }
    }

    /// Exact, case-sensitive email lookup.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.table.rows.iter().find(|u| u.email == email)
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.table.rows.iter().find(|u| u.id == id)
    }

    /// Returns the user for `email`, creating it on first sight.
    ///
    /// ## Errors
    /// - `InvalidCredentials` if the email exists with a different password
    /// - `IdExhausted` if the id sequence overflowed
    /// - `PasswordHash` if hashing failed
    pub fn find_or_create(&mut self, email: &str, password: &str, role: Role) -> StoreResult<User> {
        if let Some(existing) = self.find_by_email(email) {
            if !self.hasher.verify(password, &existing.password_hash)? {
                info!(user_id = existing.id, "Rejected purchase: password mismatch");
                return Err(StoreError::InvalidCredentials {
                    email: email.to_string(),
                });
            }

            if existing.role != role {
                debug!(
                    user_id = existing.id,
                    stored = %existing.role,
                    requested = %role,
                    "Ignoring requested role for existing user"
                );
            }

            return Ok(existing.clone());
        }

        let id = self.table.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or(StoreError::IdExhausted { entity: "User" })?;

        let user = User {
            id,
            email: email.to_string(),
            password_hash: self.hasher.hash(password)?,
            role,
            created_at: Utc::now(),
        };

        self.table.rows.push(user.clone());
        self.table.next_id = next_id;

        info!(user_id = id, role = %role, "User created");
        Ok(user)
    }

    /// All users in insertion order.
    pub fn list(&self) -> &[User] {
        &self.table.rows
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
