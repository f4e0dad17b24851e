//! Nim rules: a single pile, each move removes 1-3 stones, taking the
//! last stone wins.

use std::ops::RangeInclusive;

/// Stones on the table at the start of a game.
pub const INITIAL_STONES: u32 = 7;

/// Most stones a single move may remove.
pub const MAX_TAKE: u32 = 3;

/// Largest legal take from a pile of `stones` (0 when the pile is empty).
pub fn max_take(stones: u32) -> u32 {
    MAX_TAKE.min(stones)
}

/// Legal move sizes from a pile of `stones`, smallest first.
/// Empty for an empty pile.
pub fn legal_takes(stones: u32) -> RangeInclusive<u32> {
    1..=max_take(stones)
}

/// Applies a move, returning the stones left.
pub fn apply_take(stones: u32, take: u32) -> u32 {
    assert!(
        take >= 1 && take <= max_take(stones),
        "illegal take {} from pile of {}",
        take,
        stones
    );
    stones - take
}

/// True when the side to move loses under perfect play.
///
/// With takes of 1-3 and last-stone-wins, the losing piles are exactly
/// the multiples of 4: whatever the mover takes, the opponent can
/// restore the multiple.
pub fn is_losing_position(stones: u32) -> bool {
    stones % 4 == 0
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
