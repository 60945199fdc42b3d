//! Error types for the user actions analytics.
//! Separates invalid queries, not-found outcomes and repository failures.
use thiserror::Error;
use user_actions_repository::ActionsRepositoryError;
use user_actions_shared::types::UserId;

/// Represents the outcomes of an analytics query other than success.
///
/// `ActionTypeRequired` is a validation error. `UserNotFound`, `NoActions`
/// and `NoReferrals` are expected outcomes against incomplete data.
/// `Repository` is the only fault.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Action type is required")]
    ActionTypeRequired,

    #[error("No actions found")]
    NoActions,

    #[error("No referrals found")]
    NoReferrals,

    #[error("Repository error: {0}")]
    Repository(#[from] ActionsRepositoryError),
}

impl AnalyticsError {
    /// Returns `true` for outcomes caused by missing data rather than a bad query or a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::NoActions | Self::NoReferrals
        )
    }
}
