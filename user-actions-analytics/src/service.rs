//! Query facade over the actions repository.

use std::sync::Arc;

use tracing::debug;
use user_actions_repository::ActionsRepository;
use user_actions_shared::types::{ActionsProbability, ReferralIndex, User, UserId};

use crate::AnalyticsError;
use crate::graph::referral_index;
use crate::probability::{next_action_probability, require_action_type};

/// `UserActionsService` answers the user and analytics queries.
///
/// It holds the repository behind an `Arc` so a single loaded store can be
/// shared by every request handler. Each query takes a fresh snapshot of the
/// ordered actions and never mutates the store.
#[derive(Clone)]
pub struct UserActionsService {
    repository: Arc<dyn ActionsRepository>,
}

impl UserActionsService {
    /// Creates a new `UserActionsService` over `repository`.
    pub fn new(repository: Arc<dyn ActionsRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::UserNotFound` if the id is unknown.
    pub async fn get_user(&self, id: UserId) -> Result<User, AnalyticsError> {
        self.repository
            .get_user(id)
            .await?
            .ok_or(AnalyticsError::UserNotFound(id))
    }

    /// Counts the actions of a user. Unknown users have zero actions.
    pub async fn count_actions(&self, user_id: UserId) -> Result<usize, AnalyticsError> {
        let count = self.repository.count_actions_by_user_id(user_id).await?;
        debug!(user_id, count, "Counted user actions");
        Ok(count)
    }

    /// Computes the distribution of the action following `action_type`.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::ActionTypeRequired` for a blank action type,
    /// before the store is read.
    pub async fn next_action_probability(
        &self,
        action_type: &str,
    ) -> Result<ActionsProbability, AnalyticsError> {
        let action_type = require_action_type(action_type)?;
        let actions = self.repository.list_actions().await?;
        let probabilities = next_action_probability(action_type, &actions)?;
        debug!(
            action_type,
            outcomes = probabilities.len(),
            "Computed next action probability"
        );
        Ok(probabilities)
    }

    /// Computes the referral index of every user who referred someone.
    ///
    /// # Errors
    ///
    /// * `AnalyticsError::NoActions` - the store holds no actions
    /// * `AnalyticsError::NoReferrals` - no action forms a referral edge
    pub async fn referral_index(&self) -> Result<ReferralIndex, AnalyticsError> {
        let actions = self.repository.list_actions().await?;
        referral_index(&actions)
    }
}
