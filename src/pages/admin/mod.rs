//! Admin console pages. Every route here is role-gated through the page
//! shell; the denial route is a navigation, never a rendered shell.

pub mod discounts;
pub mod inventory;
pub mod stores;
pub mod users;
