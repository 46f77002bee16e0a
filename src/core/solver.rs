use crate::domain::model::Solution;
use chrono::{SecondsFormat, Utc};

/// Hard request ceiling: 2^20 - 1 = 1,048,575 moves.
pub const MAX_DISKS: u32 = 20;

/// Full move lists are only materialized up to this disk count
/// (2^12 - 1 = 4095 moves); above it only the count is computed.
pub const FULL_LIST_THRESHOLD: u32 = 12;

pub const FORMULA: &str = "2^n - 1";

const LIST_SUPPRESSED_MESSAGE: &str = "Full list too large - showing move count only";

/// Closed-form move count for n disks.
pub fn total_moves(n: u32) -> u64 {
    (1u64 << n) - 1
}

/// Solve the classic 3-peg puzzle for `n` disks.
///
/// Generates the canonical move sequence when `n` is at or below
/// [`FULL_LIST_THRESHOLD`], otherwise computes the count alone. The move
/// list is owned by this single call, so concurrent invocations never
/// share state.
pub fn solve(n: u32, source: &str, auxiliary: &str, target: &str) -> Solution {
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    if n <= FULL_LIST_THRESHOLD {
        let mut moves = Vec::with_capacity(total_moves(n) as usize);
        move_stack(n, source, auxiliary, target, &mut moves);
        Solution {
            total_moves: moves.len() as u64,
            moves,
            message: None,
            formula: FORMULA.to_string(),
            n,
            generated_at,
        }
    } else {
        Solution {
            total_moves: total_moves(n),
            moves: Vec::new(),
            message: Some(LIST_SUPPRESSED_MESSAGE.to_string()),
            formula: FORMULA.to_string(),
            n,
            generated_at,
        }
    }
}

/// Move `n` disks from `source` to `target` using `auxiliary` as the spare,
/// appending each move in physical order.
fn move_stack(n: u32, source: &str, auxiliary: &str, target: &str, moves: &mut Vec<String>) {
    if n == 0 {
        return;
    }
    if n == 1 {
        moves.push(format!("Move disk 1 from {} to {}", source, target));
        return;
    }

    move_stack(n - 1, source, target, auxiliary, moves);
    moves.push(format!("Move disk {} from {} to {}", n, source, target));
    move_stack(n - 1, auxiliary, source, target, moves);
}
