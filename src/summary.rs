//! Movement summary calculation engine
//!
//! Pure functions over a movement history: balance, deposit/withdrawal
//! totals, interest credit, sorted views, and statement rows. Nothing here
//! touches storage or mutates an account.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Sum of all movements
pub fn compute_balance(movements: &[i64]) -> i64 {
    movements.iter().sum()
}

/// Deposit and withdrawal totals plus credited interest for one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Sum of all deposits (strictly positive movements)
    pub total_in: i64,
    /// Magnitude of the sum of all withdrawals (strictly negative movements)
    pub total_out: i64,
    /// Interest credited across qualifying deposits
    pub total_interest: i64,
}

impl AccountSummary {
    /// Calculate the summary for a movement history and interest rate
    ///
    /// Interest is earned per deposit as `deposit * rate / 100`, computed in
    /// exact decimal arithmetic. A deposit whose raw interest comes to less
    /// than 1 unit earns nothing at all (a threshold filter, not rounding);
    /// qualifying interest is credited rounded down to whole units.
    pub fn calculate(movements: &[i64], interest_rate: &BigDecimal) -> Self {
        let total_in = movements.iter().filter(|m| **m > 0).sum();
        let total_out = movements.iter().filter(|m| **m < 0).sum::<i64>().abs();

        let hundred = BigDecimal::from(100);
        let threshold = BigDecimal::from(1);
        let mut total_interest = 0i64;
        for deposit in movements.iter().filter(|m| **m > 0) {
            let earned = (BigDecimal::from(*deposit) * interest_rate) / &hundred;
            if earned >= threshold {
                total_interest += earned
                    .with_scale_round(0, RoundingMode::Floor)
                    .to_i64()
                    .unwrap_or(0);
            }
        }

        Self {
            total_in,
            total_out,
            total_interest,
        }
    }
}

/// Whether a movement credits or debits the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Classify a movement by its sign
    pub fn of(amount: i64) -> Self {
        if amount > 0 {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

/// One row of an account statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// 1-based position within the displayed sequence
    pub sequence: usize,
    pub kind: MovementKind,
    pub amount: i64,
}

/// Return a sorted copy of the movements; the input is never mutated
///
/// Descending order is the exact reverse of ascending order.
pub fn sorted_view(movements: &[i64], ascending: bool) -> Vec<i64> {
    let mut view = movements.to_vec();
    view.sort();
    if !ascending {
        view.reverse();
    }
    view
}

/// Build statement rows for display
///
/// With `sorted` set, rows are numbered over the ascending view rather than
/// chronological order; the stored history is untouched either way.
pub fn statement(movements: &[i64], sorted: bool) -> Vec<StatementLine> {
    let view = if sorted {
        sorted_view(movements, true)
    } else {
        movements.to_vec()
    };

    view.into_iter()
        .enumerate()
        .map(|(i, amount)| StatementLine {
            sequence: i + 1,
            kind: MovementKind::of(amount),
            amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVEMENTS: [i64; 8] = [200, 450, -400, 3000, -650, -130, 70, 1300];

    fn rate(tenths: i64) -> BigDecimal {
        BigDecimal::from(tenths) / BigDecimal::from(10)
    }

    #[test]
    fn test_compute_balance() {
        assert_eq!(compute_balance(&MOVEMENTS), 3840);
        assert_eq!(compute_balance(&[]), 0);
    }

    #[test]
    fn test_summary_totals() {
        let summary = AccountSummary::calculate(&MOVEMENTS, &rate(12));
        assert_eq!(summary.total_in, 5020);
        assert_eq!(summary.total_out, 1180);
    }

    #[test]
    fn test_summary_interest_floors_per_deposit() {
        // Deposits 200, 450, 3000, 1300 at 1.2% earn 2.4, 5.4, 36, 15.6;
        // the 70 deposit earns 0.84 and falls under the 1-unit threshold.
        let summary = AccountSummary::calculate(&MOVEMENTS, &rate(12));
        assert_eq!(summary.total_interest, 2 + 5 + 36 + 15);
    }

    #[test]
    fn test_summary_interest_threshold_excludes_small_deposits() {
        // At 1% only the deposit of 100 or more earns anything.
        let summary = AccountSummary::calculate(&[99, 100, -50], &rate(10));
        assert_eq!(summary.total_interest, 1);
        assert_eq!(summary.total_in, 199);
        assert_eq!(summary.total_out, 50);
    }

    #[test]
    fn test_summary_empty_movements() {
        let summary = AccountSummary::calculate(&[], &rate(12));
        assert_eq!(summary.total_in, 0);
        assert_eq!(summary.total_out, 0);
        assert_eq!(summary.total_interest, 0);
    }

    #[test]
    fn test_sorted_view_is_a_permutation() {
        let ascending = sorted_view(&MOVEMENTS, true);
        assert_eq!(
            ascending,
            vec![-650, -400, -130, 70, 200, 450, 1300, 3000]
        );

        let mut expected = MOVEMENTS.to_vec();
        expected.sort();
        assert_eq!(ascending, expected);
    }

    #[test]
    fn test_sorted_view_does_not_mutate_input() {
        let original = MOVEMENTS.to_vec();
        let _ = sorted_view(&original, true);
        assert_eq!(original, MOVEMENTS.to_vec());
    }

    #[test]
    fn test_sorted_view_idempotent_per_direction() {
        let once = sorted_view(&MOVEMENTS, true);
        let twice = sorted_view(&once, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorted_view_descending_is_reverse_of_ascending() {
        let ascending = sorted_view(&MOVEMENTS, true);
        let descending = sorted_view(&MOVEMENTS, false);
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_movement_kind_by_sign() {
        assert_eq!(MovementKind::of(250), MovementKind::Deposit);
        assert_eq!(MovementKind::of(-250), MovementKind::Withdrawal);
    }

    #[test]
    fn test_statement_chronological() {
        let lines = statement(&[200, -400], false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].sequence, 1);
        assert_eq!(lines[0].kind, MovementKind::Deposit);
        assert_eq!(lines[0].amount, 200);
        assert_eq!(lines[1].sequence, 2);
        assert_eq!(lines[1].kind, MovementKind::Withdrawal);
        assert_eq!(lines[1].amount, -400);
    }

    #[test]
    fn test_statement_sorted_renumbers_rows() {
        let lines = statement(&[200, -400, 70], true);
        let amounts: Vec<i64> = lines.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![-400, 70, 200]);
        let sequences: Vec<usize> = lines.iter().map(|l| l.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }
}
