//! # User Commands

use shop_core::UserView;
use tracing::debug;

use crate::error::ApiError;
use crate::state::ShopState;

/// Dumps the user directory without password hashes.
pub fn list_users(state: &ShopState) -> Result<Vec<UserView>, ApiError> {
    debug!("list_users command");

    let users = state.store.list_users()?;
    Ok(users.iter().map(UserView::from).collect())
}
