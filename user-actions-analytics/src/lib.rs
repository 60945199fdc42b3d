//! # User Actions Analytics
//!
//! Read-only analytics over the user actions store:
//!
//! - Referral graph construction and the per-user referral index
//! - Next-action probability estimation over the ordered action log
//! - `UserActionsService`, the facade exposing the four store queries
//!
//! All computations are synchronous pure functions over a snapshot of the
//! store's action sequence. They rely on that sequence being sorted by user
//! id, then creation time, which the repository guarantees.

pub mod errors;
pub mod graph;
pub mod probability;
pub mod service;

pub use errors::AnalyticsError;
pub use graph::{build_referral_graph, compute_referral_index, reachable_from, referral_index};
pub use probability::next_action_probability;
pub use service::UserActionsService;
