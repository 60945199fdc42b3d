use std::collections::BTreeMap;

use super::UserId;

/// Probability of each action type following a queried action type.
///
/// Values are in `[0, 1]` and rounded to two decimal places.
pub type ActionsProbability = BTreeMap<String, f64>;

/// Referral relation: referrer id to the ids of the users it referred, in action order.
pub type Referral = BTreeMap<UserId, Vec<UserId>>;

/// Number of distinct users transitively referred by each referrer.
pub type ReferralIndex = BTreeMap<UserId, usize>;
