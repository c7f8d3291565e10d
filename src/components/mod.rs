//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and interstitials while reading session
//! and redirect state from Leptos context providers.

pub mod navbar;
pub mod page_shell;
pub mod product_card;
pub mod prompts;
