use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgress {
    /// Whole percent of the goal reached, clamped to `0..=100`.
    pub percent: u8,
    pub remaining: Decimal,
}

pub fn goal_progress(earned: Decimal, goal: Decimal) -> GoalProgress {
    let earned = earned.max(Decimal::ZERO);
    // a goal of zero or less still reads as "reached" once anything is earned
    let denominator = if goal > Decimal::ZERO {
        goal
    } else {
        Decimal::ONE
    };
    let ratio = earned
        .checked_div(denominator)
        .unwrap_or(Decimal::ONE)
        .min(Decimal::ONE);
    let percent = (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(100)
        .min(100);

    GoalProgress {
        percent,
        remaining: (goal - earned).max(Decimal::ZERO),
    }
}
