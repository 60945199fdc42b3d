//! Referral graph derived from the action log
//!
//! - `build_referral_graph`: referrer → referred users, from `REFER_USER` actions
//! - `compute_referral_index`: distinct reachable users per referrer
//! - `referral_index`: both steps with the empty-data checks

mod referral;

pub use referral::{build_referral_graph, compute_referral_index, reachable_from, referral_index};
