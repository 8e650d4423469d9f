//! Nim game solver
//!
//! The first player wins a normal-play Nim position iff the XOR of all pile
//! sizes (the XOR-sum) is nonzero. A winning move reduces one pile so the
//! XOR-sum becomes zero.

use crate::error::{AlgoError, Result};
use serde::Serialize;

/// A single move: pile `pile` goes from `from` stones down to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NimMove {
    pub pile: usize,
    pub from: i64,
    pub to: i64,
}

impl NimMove {
    /// Stones taken by this move
    pub fn removed(&self) -> i64 {
        self.from - self.to
    }
}

/// XOR of all pile sizes.
///
/// Fails for an empty collection or any negative pile.
pub fn xor_sum(piles: &[i64]) -> Result<i64> {
    if piles.is_empty() {
        return Err(AlgoError::EmptyPiles);
    }

    let mut sum = 0;
    for (index, &pile) in piles.iter().enumerate() {
        if pile < 0 {
            return Err(AlgoError::NegativePile { index, value: pile });
        }
        sum ^= pile;
    }
    Ok(sum)
}

/// Whether the player to move wins with optimal play
pub fn can_win(piles: &[i64]) -> Result<bool> {
    Ok(xor_sum(piles)? != 0)
}

/// Apply the optimal move in place.
///
/// Picks the first pile whose size XOR the XOR-sum is smaller and reduces
/// it to that value. Returns `None`, leaving the piles alone, when the
/// XOR-sum is already zero.
pub fn make_optimal_move(piles: &mut [i64]) -> Result<Option<NimMove>> {
    let sum = xor_sum(piles)?;

    for (pile, size) in piles.iter_mut().enumerate() {
        let target = *size ^ sum;
        if target < *size {
            let nim_move = NimMove {
                pile,
                from: *size,
                to: target,
            };
            *size = target;
            tracing::debug!(pile, from = nim_move.from, to = nim_move.to, "nim move");
            return Ok(Some(nim_move));
        }
    }

    tracing::debug!("no winning nim move");
    Ok(None)
}
