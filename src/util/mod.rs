//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access-control core lives here as pure, unit-tested modules: the
//! route guard decision function, the redirect memory slot, and the
//! one-shot resume latch. Pages and components wire these into Leptos.

pub mod gated_actions;
pub mod guard;
pub mod money;
pub mod redirect;
pub mod resume;
