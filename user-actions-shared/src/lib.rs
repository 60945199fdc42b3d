//! # User Actions Shared
//! This crate defines the data structures shared across the user actions ecosystem.
//! It includes the loaded records (users and actions) and the derived analytics
//! results (referral graphs, referral indices and next-action probabilities).
pub mod types;
