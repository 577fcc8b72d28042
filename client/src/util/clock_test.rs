use super::*;

#[test]
fn fixed_clock_reports_configured_instant() {
    let clock = FixedClock::at(1_700_000_000);
    assert_eq!(clock.now(), 1_700_000_000);
}

#[test]
fn fixed_clock_clones_share_time() {
    let clock = FixedClock::at(100);
    let other = clock.clone();
    clock.advance(50);
    assert_eq!(other.now(), 150);
    other.set(10);
    assert_eq!(clock.now(), 10);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now() > 1_577_836_800);
}
