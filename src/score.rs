/// Results-screen scoring.
use std::time::Duration;

use crate::constants::{SCORE_PER_SURVIVOR, SCORE_TIME_BUDGET};

/// Time budget minus elapsed seconds, plus a bonus per surviving unit.
/// Never negative.
pub fn final_score(elapsed: Duration, alive: usize) -> u64 {
    let score = SCORE_TIME_BUDGET - elapsed.as_secs_f64() + alive as f64 * SCORE_PER_SURVIVOR;
    score.round().max(0.0) as u64
}

/// `1234567` → `"1,234,567"`.
pub fn format_score(score: u64) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
