//! # Repository Module
//!
//! Table access for the in-memory store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Request handler                                                       │
//! │       │                                                                 │
//! │       │  store.session(|s| s.users().find_or_create(..))               │
//! │       ▼                                                                 │
//! │  UserDirectory / OrderLedger  (borrow one table from the session)      │
//! │  ├── find_or_create / record                                           │
//! │  ├── get, find_by_email, for_user                                      │
//! │  └── list                                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UserTable / OrderTable  (rows + next id, behind the store Mutex)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A repository only exists while the store lock is held, so there is no way
//! to touch a table without it.
//!
//! ## Available Repositories
//!
//! - [`user::UserDirectory`] - Find-or-create users by email
//! - [`order::OrderLedger`] - Append-only order records

pub mod order;
pub mod user;
