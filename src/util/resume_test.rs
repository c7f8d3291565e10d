use super::*;

#[test]
fn latch_starts_pending() {
    let latch = ResumeLatch::new();
    assert_eq!(latch.phase(), ResumePhase::Pending);
    assert!(!latch.is_resolved());
}

#[test]
fn begin_wins_exactly_once() {
    let mut latch = ResumeLatch::new();
    assert!(latch.begin());
    assert!(!latch.begin());
    assert!(!latch.begin());
}

#[test]
fn begin_after_finish_is_rejected() {
    let mut latch = ResumeLatch::new();
    assert!(latch.begin());
    latch.finish();
    assert!(latch.is_resolved());
    assert!(!latch.begin());
}

#[test]
fn duplicate_effect_firing_navigates_once() {
    // Simulates a reactive effect re-running after the same completion
    // event: only the first evaluation may navigate.
    let mut latch = ResumeLatch::new();
    let mut navigations = 0;
    for _ in 0..5 {
        if latch.begin() {
            navigations += 1;
            latch.finish();
        }
    }
    assert_eq!(navigations, 1);
}
