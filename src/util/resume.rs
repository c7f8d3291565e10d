//! One-shot latch for post-auth navigation resumption.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration, and the OAuth callback all finish by resolving a
//! destination and navigating exactly once. Reactive effects re-run on
//! unrelated state changes, so the "have we already navigated" question is
//! answered by an explicit state machine instead of render timing.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

/// Delay before post-auth navigation so session-dependent chrome (navbar,
/// cart badge) settles first. UX smoothing only: correctness comes from
/// resolving the destination strictly after the session write completes.
pub const NAV_SETTLE_MS: u32 = 50;

/// Let one event-loop turn plus the settle delay elapse before navigating.
#[cfg(feature = "hydrate")]
pub async fn settle_before_navigation() {
    gloo_timers::future::TimeoutFuture::new(NAV_SETTLE_MS).await;
}

/// Phase of a single auth completion event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumePhase {
    /// No completion observed yet.
    #[default]
    Pending,
    /// A completion is being resolved; no other attempt may start.
    Resolving,
    /// Navigation has fired; every later attempt is a no-op.
    Resolved,
}

/// `Pending → Resolving → Resolved`, with exactly one caller winning the
/// `Pending → Resolving` transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResumeLatch {
    phase: ResumePhase,
}

impl ResumeLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to start resolving. Returns true for exactly one caller;
    /// repeated effect evaluations get false and must do nothing.
    pub fn begin(&mut self) -> bool {
        if self.phase == ResumePhase::Pending {
            self.phase = ResumePhase::Resolving;
            true
        } else {
            false
        }
    }

    /// Mark the navigation as fired.
    pub fn finish(&mut self) {
        self.phase = ResumePhase::Resolved;
    }

    pub fn phase(&self) -> ResumePhase {
        self.phase
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == ResumePhase::Resolved
    }
}
