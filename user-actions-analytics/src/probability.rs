//! Next-action probability estimation.
//!
//! Walks adjacent pairs of the ordered action log. Because the log is sorted
//! by user id, then creation time, a pair with equal user ids is exactly "an
//! action and the next action of the same user".

use std::collections::HashMap;

use user_actions_shared::types::{Action, ActionsProbability};

use crate::AnalyticsError;

/// Rejects a blank action type.
pub(crate) fn require_action_type(action_type: &str) -> Result<&str, AnalyticsError> {
    if action_type.trim().is_empty() {
        return Err(AnalyticsError::ActionTypeRequired);
    }
    Ok(action_type)
}

/// Returns `count / total` rounded to two decimal places, halves away from zero.
///
/// The rounding happens on the integer counts, so exact decimal halves such as
/// 57/200 = 0.285 round up even though `0.285` has no exact `f64` form.
pub fn round_probability(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let hundredths = (count * 200 + total) / (2 * total);
    hundredths as f64 / 100.0
}

/// Estimates the distribution of the action type that follows `action_type`.
///
/// `actions` must be sorted by user id, then creation time. An empty map is
/// returned when no user ever performed another action after `action_type`.
///
/// # Errors
///
/// Returns `AnalyticsError::ActionTypeRequired` if `action_type` is blank.
pub fn next_action_probability(
    action_type: &str,
    actions: &[Action],
) -> Result<ActionsProbability, AnalyticsError> {
    let action_type = require_action_type(action_type)?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for pair in actions.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        // pairs spanning two users sit on the boundary of the sort order
        if current.user_id == next.user_id && current.action_type == action_type {
            *counts.entry(next.action_type.as_str()).or_default() += 1;
            total += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|(next_type, count)| (next_type.to_string(), round_probability(count, total)))
        .collect())
}
