use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Identifier of an action record.
pub type ActionId = i64;

// Well-known action types. The set is open: any string is a valid type.
pub const WELCOME: &str = "WELCOME";
pub const CONNECT_CRM: &str = "CONNECT_CRM";
pub const ADD_CONTACT: &str = "ADD_CONTACT";
pub const EDIT_CONTACT: &str = "EDIT_CONTACT";
pub const VIEW_CONTACTS: &str = "VIEW_CONTACTS";
/// The only action type that forms edges of the referral graph.
pub const REFER_USER: &str = "REFER_USER";

/// A timestamped action performed by a user.
///
/// `target_user_id` is `0` when the action has no target. Older exports name
/// that field `targetUser`, which is accepted on input. A record carrying both
/// names is rejected as a duplicate field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: ActionId,
    #[serde(rename = "type")]
    pub action_type: String,
    pub user_id: UserId,
    #[serde(default, alias = "targetUser")]
    pub target_user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Action {
    /// Returns `true` if this action is a referral with an actual target.
    pub fn is_referral(&self) -> bool {
        self.action_type == REFER_USER && self.target_user_id != 0
    }

    /// Timeline ordering: by user, then by creation time, then by id.
    ///
    /// The id tie-breaker makes the order total so that two loads of the same
    /// records always produce the same sequence.
    pub fn timeline_cmp(&self, other: &Self) -> Ordering {
        self.user_id
            .cmp(&other.user_id)
            .then_with(|| self.created_at.cmp(&other.created_at))
            .then_with(|| self.id.cmp(&other.id))
    }
}
