//! Session state for an interactive game against the engine.

use std::fmt;

use nim_core::game;

/// Which side makes the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Engine,
}

impl Turn {
    pub fn other(self) -> Turn {
        match self {
            Turn::Player => Turn::Engine,
            Turn::Engine => Turn::Player,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Player => write!(f, "You"),
            Turn::Engine => write!(f, "Engine"),
        }
    }
}

/// Game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    PlayerWins,
    EngineWins,
}

/// A recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Who moved.
    pub by: Turn,
    /// Stones taken.
    pub taken: u32,
    /// Stones left after the move.
    pub left: u32,
}

/// State of one game: pile, turn order, result and move history.
///
/// The `epoch` distinguishes games across resets. Every engine request is
/// tagged with the epoch it was issued under, and a reply is only applied
/// while [`Session::accepts`] holds for that tag.
#[derive(Debug, Clone)]
pub struct Session {
    /// Stones remaining in the pile.
    pub stones: u32,
    /// Whose move it is.
    pub turn: Turn,
    /// Game result.
    pub outcome: Outcome,
    /// Move history, oldest first.
    pub history: Vec<MoveRecord>,
    /// Bumped on every reset; replies tagged with an older value are stale.
    pub epoch: u64,
    initial_stones: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(game::INITIAL_STONES)
    }
}

impl Session {
    pub fn new(initial_stones: u32) -> Self {
        Self {
            stones: initial_stones,
            turn: Turn::Player,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            epoch: 0,
            initial_stones,
        }
    }

    /// Starts a fresh game. Pending engine replies for the old game become
    /// stale because the epoch advances.
    pub fn reset(&mut self) {
        self.stones = self.initial_stones;
        self.turn = Turn::Player;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        self.epoch += 1;
    }

    /// Whether an engine reply tagged with `epoch` may still be applied.
    ///
    /// Stale replies are dropped, never applied: the game must not have
    /// been reset since the request was issued, and must still be running.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.epoch == epoch && self.outcome == Outcome::InProgress
    }

    /// Applies a legal move for the side to move and records it.
    ///
    /// Taking the last stone wins for the mover; otherwise the turn flips.
    /// Callers validate first; an illegal take or a move on a finished
    /// game is a caller bug.
    pub fn apply_take(&mut self, take: u32) {
        assert!(
            self.outcome == Outcome::InProgress,
            "move applied to a finished game"
        );
        self.stones = game::apply_take(self.stones, take);
        self.history.push(MoveRecord {
            by: self.turn,
            taken: take,
            left: self.stones,
        });
        if self.stones == 0 {
            self.outcome = match self.turn {
                Turn::Player => Outcome::PlayerWins,
                Turn::Engine => Outcome::EngineWins,
            };
        } else {
            self.turn = self.turn.other();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_alternate_and_are_recorded() {
        let mut session = Session::new(7);
        session.apply_take(2);
        assert_eq!(session.stones, 5);
        assert_eq!(session.turn, Turn::Engine);

        session.apply_take(3);
        assert_eq!(session.stones, 2);
        assert_eq!(session.turn, Turn::Player);

        assert_eq!(
            session.history,
            vec![
                MoveRecord { by: Turn::Player, taken: 2, left: 5 },
                MoveRecord { by: Turn::Engine, taken: 3, left: 2 },
            ]
        );
    }

    #[test]
    fn test_taking_the_last_stone_wins() {
        let mut session = Session::new(3);
        session.apply_take(3);
        assert_eq!(session.outcome, Outcome::PlayerWins);

        let mut session = Session::new(4);
        session.apply_take(1);
        session.apply_take(3);
        assert_eq!(session.outcome, Outcome::EngineWins);
    }

    #[test]
    fn test_reset_starts_a_fresh_game_in_a_new_epoch() {
        let mut session = Session::new(7);
        session.apply_take(1);
        session.apply_take(2);
        let old_epoch = session.epoch;

        session.reset();
        assert_eq!(session.stones, 7);
        assert_eq!(session.turn, Turn::Player);
        assert_eq!(session.outcome, Outcome::InProgress);
        assert!(session.history.is_empty());
        assert_eq!(session.epoch, old_epoch + 1);
    }

    #[test]
    fn test_stale_epoch_replies_are_rejected() {
        let mut session = Session::new(7);
        let requested_under = session.epoch;
        assert!(session.accepts(requested_under));

        session.reset();
        assert!(!session.accepts(requested_under));
        assert!(session.accepts(session.epoch));
    }

    #[test]
    fn test_replies_after_game_end_are_rejected() {
        let mut session = Session::new(2);
        let requested_under = session.epoch;
        session.apply_take(2);
        assert_eq!(session.outcome, Outcome::PlayerWins);
        assert!(!session.accepts(requested_under));
    }

    #[test]
    #[should_panic(expected = "finished game")]
    fn test_moving_on_a_finished_game_panics() {
        let mut session = Session::new(1);
        session.apply_take(1);
        session.apply_take(1);
    }
}
