//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state is the only process-wide store; it is constructed once at
//! the application root and handed to components via context, never as an
//! ambient import-time singleton.

pub mod session;
