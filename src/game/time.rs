//! Per-move time budgeting.
//!
//! All inputs are seconds as `f64`, the unit the game clock reports in.
//! `None` for the remaining time means the game is untimed.

use std::time::{Duration, Instant};

use crate::constants::{
    DEFAULT_TIME_FRACTION, LOW_TIME_DEPTH_CAP, MEDIUM_TIME, MEDIUM_TIME_DEPTH_CAP, MIN_TIME_BUDGET,
    CRITICAL_TIME,
};

/// Seconds to spend on this move, or `None` when nothing limits the search.
///
/// With a clock the budget is `min(base, remaining * fraction)`, floored so a
/// move always gets some time, and capped at half of what is left.
pub fn move_time_budget(remaining: Option<f64>, base_think_time: Option<f64>, fraction: f64) -> Option<f64> {
    let Some(remaining) = remaining else {
        return base_think_time;
    };

    let cap = base_think_time.unwrap_or(f64::INFINITY);
    let mut budget = cap.min(remaining * fraction);
    // The floor never exceeds the configured think time.
    budget = budget.max(MIN_TIME_BUDGET.min(cap));
    budget = budget.min(remaining / 2.0);
    Some(budget)
}

/// Search depth allowed with `remaining` seconds on the clock.
pub fn effective_depth(configured: u8, remaining: Option<f64>) -> u8 {
    let configured = configured.max(1);
    match remaining {
        None => configured,
        Some(r) if r < CRITICAL_TIME => configured.min(LOW_TIME_DEPTH_CAP),
        Some(r) if r < MEDIUM_TIME => configured.min(MEDIUM_TIME_DEPTH_CAP),
        Some(_) => configured,
    }
}

/// Everything a search bot needs to know about its time for one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBudget {
    pub seconds: Option<f64>,
    pub depth: u8,
    pub deadline: Option<Instant>,
}

impl TimeBudget {
    pub fn plan(configured_depth: u8, remaining: Option<f64>, base_think_time: Option<f64>) -> Self {
        let seconds = move_time_budget(remaining, base_think_time, DEFAULT_TIME_FRACTION);
        let deadline = seconds
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
            .and_then(|d| Instant::now().checked_add(d));
        Self {
            seconds,
            depth: effective_depth(configured_depth, remaining),
            deadline,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untimed_returns_base() {
        assert_eq!(move_time_budget(None, Some(2.5), DEFAULT_TIME_FRACTION), Some(2.5));
        assert_eq!(move_time_budget(None, None, DEFAULT_TIME_FRACTION), None);
    }

    #[test]
    fn test_budget_bounds() {
        let remaining = [0.01, 0.08, 0.5, 1.0, 3.0, 60.0, 600.0, 7200.0];
        let bases = [0.001, 0.02, 0.3, 1.0, 5.0, 100.0];
        for &r in &remaining {
            for &b in &bases {
                let budget = move_time_budget(Some(r), Some(b), DEFAULT_TIME_FRACTION).unwrap();
                assert!(budget > 0.0, "r={r} b={b}");
                assert!(budget <= r / 2.0, "r={r} b={b} budget={budget}");
                assert!(budget <= b, "r={r} b={b} budget={budget}");
            }
        }
    }

    #[test]
    fn test_fraction_of_generous_clock() {
        let budget = move_time_budget(Some(400.0), None, DEFAULT_TIME_FRACTION).unwrap();
        assert!((budget - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_applies_to_small_clock() {
        let budget = move_time_budget(Some(1.0), None, DEFAULT_TIME_FRACTION).unwrap();
        assert!((budget - MIN_TIME_BUDGET).abs() < 1e-9);
    }

    #[test]
    fn test_effective_depth_caps() {
        assert_eq!(effective_depth(4, None), 4);
        assert_eq!(effective_depth(4, Some(0.5)), 1);
        assert_eq!(effective_depth(4, Some(3.0)), 2);
        assert_eq!(effective_depth(1, Some(3.0)), 1);
        assert_eq!(effective_depth(4, Some(30.0)), 4);
        assert_eq!(effective_depth(0, None), 1);
    }

    #[test]
    fn test_plan_without_clock_has_no_deadline() {
        let plan = TimeBudget::plan(3, None, None);
        assert!(!plan.is_timed());
        assert_eq!(plan.depth, 3);
    }
}
