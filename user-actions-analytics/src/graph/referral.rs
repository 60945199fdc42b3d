//! Referral graph computation
//!
//! Builds the referral relation from `REFER_USER` actions and computes, for
//! each referrer, the number of distinct users reachable through it using a
//! depth-first walk with an explicit stack.

use std::collections::HashSet;

use tracing::debug;
use user_actions_shared::types::{Action, Referral, ReferralIndex, UserId};

use crate::AnalyticsError;

/// Builds the referral graph from an action sequence.
///
/// Every referral action with a nonzero target contributes one edge
/// `user_id -> target_user_id`. Duplicate edges are kept and edge order
/// follows the order of `actions`.
pub fn build_referral_graph(actions: &[Action]) -> Referral {
    let mut graph = Referral::new();
    for action in actions.iter().filter(|action| action.is_referral()) {
        graph
            .entry(action.user_id)
            .or_default()
            .push(action.target_user_id);
    }
    graph
}

/// Returns the users reachable from `root`, in depth-first pre-order.
///
/// `root` itself is never part of the result, even when a cycle leads back
/// to it. Each reachable user appears exactly once.
pub fn reachable_from(root: UserId, graph: &Referral) -> Vec<UserId> {
    let mut visited: HashSet<UserId> = HashSet::new();
    visited.insert(root);

    let mut reached = Vec::new();
    let mut stack: Vec<UserId> = Vec::new();
    push_targets(&mut stack, root, graph);

    while let Some(user) = stack.pop() {
        if !visited.insert(user) {
            continue;
        }
        reached.push(user);
        push_targets(&mut stack, user, graph);
    }

    reached
}

/// Pushes the targets of `user` so that the first target is popped first.
fn push_targets(stack: &mut Vec<UserId>, user: UserId, graph: &Referral) {
    if let Some(targets) = graph.get(&user) {
        stack.extend(targets.iter().rev().copied());
    }
}

/// Computes the referral index of every referrer in `graph`.
///
/// Users that were referred but never referred anyone are not keys of the
/// graph and are therefore absent from the result.
pub fn compute_referral_index(graph: &Referral) -> ReferralIndex {
    graph
        .keys()
        .map(|&root| (root, reachable_from(root, graph).len()))
        .collect()
}

/// Computes the referral index over an ordered action sequence.
///
/// # Errors
///
/// * `AnalyticsError::NoActions` - `actions` is empty
/// * `AnalyticsError::NoReferrals` - no action forms a referral edge
pub fn referral_index(actions: &[Action]) -> Result<ReferralIndex, AnalyticsError> {
    if actions.is_empty() {
        return Err(AnalyticsError::NoActions);
    }

    let graph = build_referral_graph(actions);
    if graph.is_empty() {
        return Err(AnalyticsError::NoReferrals);
    }

    let index = compute_referral_index(&graph);
    debug!(
        referrers = index.len(),
        edges = graph.values().map(Vec::len).sum::<usize>(),
        "Computed referral index"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use user_actions_shared::types::{ADD_CONTACT, REFER_USER, WELCOME};

    fn make_action(id: i64, user_id: UserId, action_type: &str, target: UserId) -> Action {
        Action {
            id,
            action_type: action_type.to_string(),
            user_id,
            target_user_id: target,
            created_at: Utc::now(),
        }
    }

    fn make_graph(edges: &[(UserId, UserId)]) -> Referral {
        let actions: Vec<Action> = edges
            .iter()
            .enumerate()
            .map(|(i, (from, to))| make_action(i as i64 + 1, *from, REFER_USER, *to))
            .collect();
        build_referral_graph(&actions)
    }

    #[test]
    fn test_build_graph_filters_referrals() {
        let actions = vec![
            make_action(1, 1, WELCOME, 2),
            make_action(2, 1, REFER_USER, 2),
            make_action(3, 1, REFER_USER, 0),
            make_action(4, 2, ADD_CONTACT, 3),
            make_action(5, 2, REFER_USER, 3),
        ];

        let graph = build_referral_graph(&actions);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph[&1], vec![2]);
        assert_eq!(graph[&2], vec![3]);
    }

    #[test]
    fn test_build_graph_keeps_duplicates_in_action_order() {
        let graph = make_graph(&[(1, 3), (1, 2), (1, 3)]);
        assert_eq!(graph[&1], vec![3, 2, 3]);
    }

    #[test]
    fn test_linear_chain_with_branch() {
        // 1 -> 2 -> 3 -> 4, 1 -> 5
        let graph = make_graph(&[(1, 2), (2, 3), (3, 4), (1, 5)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index, ReferralIndex::from([(1, 4), (2, 2), (3, 1)]));
    }

    #[test]
    fn test_diamond_graph() {
        //     1
        //    / \
        //   2   3
        //    \ /
        //     4
        let graph = make_graph(&[(1, 2), (1, 3), (2, 4), (3, 4)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index[&1], 3);
        assert_eq!(index[&2], 1);
        assert_eq!(index[&3], 1);
    }

    #[test]
    fn test_shared_descendant_counted_per_root() {
        // 1 -> 3 and 2 -> 3: each root counts 3 independently
        let graph = make_graph(&[(1, 3), (2, 3)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index, ReferralIndex::from([(1, 1), (2, 1)]));
    }

    #[test]
    fn test_cycle_handling() {
        let graph = make_graph(&[(1, 2), (2, 1)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index, ReferralIndex::from([(1, 1), (2, 1)]));
    }

    #[test]
    fn test_longer_cycle() {
        // 1 -> 2 -> 3 -> 1
        let graph = make_graph(&[(1, 2), (2, 3), (3, 1)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index, ReferralIndex::from([(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_self_referral() {
        let graph = make_graph(&[(1, 1), (2, 2), (2, 3)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index[&1], 0);
        assert_eq!(index[&2], 1);
    }

    #[test]
    fn test_duplicate_edges_counted_once() {
        let graph = make_graph(&[(1, 2), (1, 2), (2, 3), (1, 3)]);

        let index = compute_referral_index(&graph);

        assert_eq!(index[&1], 2);
    }

    #[test]
    fn test_referred_only_users_absent() {
        let graph = make_graph(&[(1, 2), (1, 3)]);

        let index = compute_referral_index(&graph);

        assert!(!index.contains_key(&2));
        assert!(!index.contains_key(&3));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_sibling_order_does_not_change_index() {
        let edges = [(1, 2), (1, 3), (1, 4), (2, 5), (3, 5), (4, 6), (6, 2)];
        let mut reversed = edges;
        reversed.reverse();

        let forward = compute_referral_index(&make_graph(&edges));
        let backward = compute_referral_index(&make_graph(&reversed));

        assert_eq!(forward, backward);
        assert_eq!(forward[&1], 5);
    }

    #[test]
    fn test_reachable_from_preorder() {
        // 1 -> [2, 5], 2 -> [3], 3 -> [4]
        let graph = make_graph(&[(1, 2), (2, 3), (3, 4), (1, 5)]);

        assert_eq!(reachable_from(1, &graph), vec![2, 3, 4, 5]);
        assert_eq!(reachable_from(4, &graph), Vec::<UserId>::new());
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth: UserId = 100_000;
        let edges: Vec<(UserId, UserId)> = (1..depth).map(|u| (u, u + 1)).collect();
        let graph = make_graph(&edges);

        let reached = reachable_from(1, &graph);

        assert_eq!(reached.len(), (depth - 1) as usize);
    }

    #[test]
    fn test_referral_index_no_actions() {
        let result = referral_index(&[]);
        assert!(matches!(result, Err(AnalyticsError::NoActions)));
    }

    #[test]
    fn test_referral_index_no_referrals() {
        let actions = vec![
            make_action(1, 1, WELCOME, 2),
            make_action(2, 2, ADD_CONTACT, 3),
            make_action(3, 3, REFER_USER, 0),
        ];

        let result = referral_index(&actions);
        assert!(matches!(result, Err(AnalyticsError::NoReferrals)));
    }

    #[test]
    fn test_referral_index_from_actions() {
        let actions = vec![
            make_action(1, 1, REFER_USER, 2),
            make_action(4, 1, REFER_USER, 5),
            make_action(2, 2, REFER_USER, 3),
            make_action(3, 3, REFER_USER, 4),
        ];

        let index = referral_index(&actions).unwrap();
        assert_eq!(index, ReferralIndex::from([(1, 4), (2, 2), (3, 1)]));
    }
}
