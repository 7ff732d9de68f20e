use std::time::Duration;

use swarm_shooter::score::{final_score, format_score};

#[test]
fn instant_wipeout_scores_time_budget() {
    assert_eq!(final_score(Duration::ZERO, 0), 5000);
}

#[test]
fn survivors_add_bonus_and_time_subtracts() {
    assert_eq!(final_score(Duration::from_secs(10), 3), 10_990);
}

#[test]
fn score_rounds_fractional_seconds() {
    assert_eq!(final_score(Duration::from_millis(2600), 0), 4997);
}

#[test]
fn score_never_goes_negative() {
    assert_eq!(final_score(Duration::from_secs(10_000), 0), 0);
}

#[test]
fn format_inserts_thousands_separators() {
    assert_eq!(format_score(0), "0");
    assert_eq!(format_score(999), "999");
    assert_eq!(format_score(1000), "1,000");
    assert_eq!(format_score(10_990), "10,990");
    assert_eq!(format_score(1_234_567), "1,234,567");
}
