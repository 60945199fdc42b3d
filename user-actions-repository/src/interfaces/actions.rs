//! This module defines the `ActionsRepository` trait, which provides read access
//! to the loaded users and actions.
use user_actions_shared::types::{Action, User, UserId};

use crate::errors::ActionsRepositoryError;

/// A trait that defines the interface for reading users and actions.
///
/// Implementors must return owned values that do not alias their internal
/// storage, and must return actions ordered by user id, then creation time.
#[async_trait::async_trait]
pub trait ActionsRepository: Send + Sync {
    /// Retrieves a user by id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no user with this id was loaded.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, ActionsRepositoryError>;

    /// Counts the actions performed by a user.
    ///
    /// Unknown users have zero actions; this is not an error.
    async fn count_actions_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<usize, ActionsRepositoryError>;

    /// Returns a copy of every action, sorted by user id, then creation time.
    async fn list_actions(&self) -> Result<Vec<Action>, ActionsRepositoryError>;
}
