//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages declare constraints once via `PageShell`
//! and keep their data fetches inside the shell's children, so nothing is
//! fetched until the access decision is `Allow`.

pub mod account;
pub mod admin;
pub mod cart;
pub mod checkout;
pub mod denied;
pub mod home;
pub mod login;
pub mod oauth_callback;
pub mod products;
pub mod register;
