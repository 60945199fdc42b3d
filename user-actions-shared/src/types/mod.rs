mod action;
mod analytics;
mod user;

pub use action::{
    ADD_CONTACT, Action, ActionId, CONNECT_CRM, EDIT_CONTACT, REFER_USER, VIEW_CONTACTS, WELCOME,
};
pub use analytics::{ActionsProbability, Referral, ReferralIndex};
pub use user::{User, UserId};
