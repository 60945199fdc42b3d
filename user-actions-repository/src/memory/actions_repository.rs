//! In-memory implementation of the actions repository.
//!
//! Provides a process-lifetime store for users and actions loaded from JSON
//! record sources.
//!
//! ## Key Features
//!
//! - Users keyed by id, later duplicates overwrite earlier ones
//! - Actions deduplicated by id and sorted once at load time
//! - Many concurrent readers through `tokio::sync::RwLock`
//! - Per-user counts by binary search over the sorted actions
use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use user_actions_shared::types::{Action, ActionId, User, UserId};

use super::loader::read_records;
use crate::{ActionsRepository, ActionsRepositoryError};

/// In-memory implementation of the actions repository.
///
/// The store is fully populated by its constructors before it is returned,
/// so readers can never observe a partially loaded state. After construction
/// the collections are only read. Queries take read guards and never contend
/// with each other.
#[derive(Debug, Default)]
pub struct InMemoryActionsRepository {
    users: RwLock<HashMap<UserId, User>>,
    /// Sorted by user id, then creation time, then action id.
    actions: RwLock<Vec<Action>>,
}

impl InMemoryActionsRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository from already parsed records.
    ///
    /// # Arguments
    ///
    /// * `users` - Users in source order; the last record wins for a duplicated id
    /// * `actions` - Actions in any order; the last record wins for a duplicated id
    pub fn from_records(users: Vec<User>, actions: Vec<Action>) -> Self {
        let users = index_users(users);
        let actions = sort_actions(actions);

        Self {
            users: RwLock::new(users),
            actions: RwLock::new(actions),
        }
    }

    /// Loads users and actions from two JSON files.
    ///
    /// # Arguments
    ///
    /// * `users_path` - JSON array of users
    /// * `actions_path` - JSON array of actions
    ///
    /// # Returns
    ///
    /// * `Ok(InMemoryActionsRepository)` - Fully loaded repository
    /// * `Err(ActionsRepositoryError)` - Either file could not be read or parsed
    pub async fn from_files(
        users_path: impl AsRef<Path>,
        actions_path: impl AsRef<Path>,
    ) -> Result<Self, ActionsRepositoryError> {
        let users_path = users_path.as_ref();
        let actions_path = actions_path.as_ref();

        let users: Vec<User> = read_records(users_path).await?;
        let actions: Vec<Action> = read_records(actions_path).await?;

        let repository = Self::from_records(users, actions);

        info!(
            users_file = %users_path.display(),
            actions_file = %actions_path.display(),
            users = repository.users.read().await.len(),
            actions = repository.actions.read().await.len(),
            "Loaded user actions store"
        );

        Ok(repository)
    }
}

/// Keys users by id, keeping the last record for each id.
fn index_users(users: Vec<User>) -> HashMap<UserId, User> {
    users.into_iter().map(|user| (user.id, user)).collect()
}

/// Deduplicates actions by id (last record wins) and sorts them into timeline order.
fn sort_actions(actions: Vec<Action>) -> Vec<Action> {
    let unique: HashMap<ActionId, Action> = actions
        .into_iter()
        .map(|action| (action.id, action))
        .collect();

    let mut sorted: Vec<Action> = unique.into_values().collect();
    // The comparison is total, so an unstable sort is deterministic.
    sorted.sort_unstable_by(Action::timeline_cmp);
    sorted
}

#[async_trait]
impl ActionsRepository for InMemoryActionsRepository {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, ActionsRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn count_actions_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<usize, ActionsRepositoryError> {
        let actions = self.actions.read().await;
        let start = actions.partition_point(|action| action.user_id < user_id);
        let end = actions.partition_point(|action| action.user_id <= user_id);
        Ok(end - start)
    }

    async fn list_actions(&self) -> Result<Vec<Action>, ActionsRepositoryError> {
        let actions = self.actions.read().await;
        Ok(actions.clone())
    }
}
