//! Turn engine.
//!
//! Owns the live board and the side to move, applies house selections, and
//! detects the end of the game. When the side due to move next has no seeds
//! left in its houses, one last sow is issued in end phase for that side and
//! the board is scored.

use tracing::{debug, info, instrument};

use crate::board::{Board, House, Side};
use crate::protocol::kfen::{parse_kfen, KfenError};
use crate::resolve::{GameResult, Sow};
use crate::search::{advise, Advice};

/// Errors returned when the engine is driven incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("the game is already over")]
    GameOver,

    #[error("{0} has no legal move")]
    NoLegalMove(Side),
}

/// What happened when a house was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub mover: Side,
    pub house: House,
    pub sow: Sow,
    /// Set when this turn ended the game.
    pub result: Option<GameResult>,
}

/// Holds the mutable state of a single game.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    board: Board,
    to_move: Side,
    result: Option<GameResult>,
}

impl Default for TurnEngine {
    fn default() -> Self {
        TurnEngine::new()
    }
}

impl TurnEngine {
    /// Starts a new game from the opening position with Side A to move.
    pub fn new() -> Self {
        TurnEngine::from_position(Board::new(), Side::A)
    }

    /// Starts from an arbitrary position.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        TurnEngine {
            board,
            to_move,
            result: None,
        }
    }

    /// Starts from a KFEN string.
    pub fn from_kfen(kfen: &str) -> Result<Self, KfenError> {
        let (board, to_move) = parse_kfen(kfen)?;
        Ok(TurnEngine::from_position(board, to_move))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Final scores, once the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Plays `house` for the side to move.
    ///
    /// An empty house leaves the board and the side to move unchanged and
    /// reports [`crate::resolve::SowKind::Rejected`].
    #[instrument(level = "debug", skip(self), fields(mover = ?self.to_move, house = house.number()))]
    pub fn play(&mut self, house: House) -> Result<TurnReport, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let mover = self.to_move;
        let sow = self.board.sow(mover, false, house);
        self.to_move = sow.next;
        debug!(kind = ?sow.kind, next = ?sow.next, "turn applied");

        if self.board.is_side_empty(self.to_move) {
            // Flush with the same selection for the side now due to move.
            // Its houses are empty, so this leaves the seeds where they are.
            self.board.sow(self.to_move, true, house);
            let result = self.board.finalize();
            info!(
                score_a = result.score_a,
                score_b = result.score_b,
                outcome = ?result.outcome,
                "game over"
            );
            self.result = Some(result);
        }

        Ok(TurnReport {
            mover,
            house,
            sow,
            result: self.result,
        })
    }

    /// Asks the advisor for a house for the side to move without playing it.
    pub fn advise(&self) -> Option<Advice> {
        advise(&self.board, self.to_move)
    }

    /// Lets the advisor choose and play a house for the side to move.
    pub fn play_advised(&mut self) -> Result<(Advice, TurnReport), EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let advice = self
            .advise()
            .ok_or(EngineError::NoLegalMove(self.to_move))?;
        let report = self.play(advice.house)?;
        Ok((advice, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{Outcome, SowKind};
    use crate::search::Reason;

    fn house(n: u8) -> House {
        House::new(n).unwrap()
    }

    #[test]
    fn new_engine_starts_with_side_a() {
        let engine = TurnEngine::new();
        assert_eq!(engine.to_move(), Side::A);
        assert_eq!(engine.board(), &Board::new());
        assert!(!engine.is_over());
    }

    #[test]
    fn extra_turn_keeps_mover() {
        let mut engine = TurnEngine::new();
        let report = engine.play(house(3)).unwrap();
        assert_eq!(report.sow.kind, SowKind::ExtraTurn);
        assert_eq!(engine.to_move(), Side::A);
        assert!(report.result.is_none());
    }

    #[test]
    fn rejected_move_keeps_mover_and_board() {
        let mut engine = TurnEngine::new();
        engine.play(house(1)).unwrap();
        engine.play(house(1)).unwrap();
        assert_eq!(engine.to_move(), Side::A);
        let before = engine.board().clone();
        let report = engine.play(house(1)).unwrap();
        assert_eq!(report.sow.kind, SowKind::Rejected);
        assert_eq!(engine.to_move(), Side::A);
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn game_ends_when_next_mover_is_empty() {
        // A's last seed goes into its store: A moves again but has nothing left.
        let mut engine =
            TurnEngine::from_kfen("a/0,0,0,0,0,1/20/1,2,0,0,0,0/24").unwrap();
        let report = engine.play(house(6)).unwrap();
        assert_eq!(report.sow.kind, SowKind::ExtraTurn);
        let result = report.result.unwrap();
        assert_eq!(result.score_a, 21);
        assert_eq!(result.score_b, 27);
        assert_eq!(result.outcome, Outcome::Loss);
        assert!(engine.is_over());
        assert_eq!(engine.play(house(1)), Err(EngineError::GameOver));
    }

    #[test]
    fn game_continues_while_next_mover_has_seeds() {
        // A empties its own row but B still has seeds and moves next.
        let mut engine =
            TurnEngine::from_kfen("a/0,0,0,0,0,2/20/1,2,0,0,0,0/23").unwrap();
        let report = engine.play(house(6)).unwrap();
        assert!(report.result.is_none());
        assert_eq!(engine.to_move(), Side::B);
        assert!(engine.board().is_side_empty(Side::A));
    }

    #[test]
    fn from_kfen_refuses_oversized_piles() {
        let err = TurnEngine::from_kfen("a/0,0,0,0,0,1/0/4294967295,1,0,0,0,0/0").unwrap_err();
        assert_eq!(err, KfenError::WrongTotal(4_294_967_297));
    }

    #[test]
    fn play_advised_uses_advisor() {
        let mut engine = TurnEngine::from_kfen("b/4,4,4,4,4,4/0/4,4,4,4,4,4/0").unwrap();
        let (advice, report) = engine.play_advised().unwrap();
        assert_eq!(advice.house, house(3));
        assert_eq!(advice.reason, Reason::ExtraTurn);
        assert_eq!(report.mover, Side::B);
        assert_eq!(engine.to_move(), Side::B);
    }

    #[test]
    fn play_advised_without_moves_is_an_error() {
        let mut engine = TurnEngine::from_kfen("b/4,4,4,4,4,4/0/0,0,0,0,0,0/24").unwrap();
        assert_eq!(
            engine.play_advised(),
            Err(EngineError::NoLegalMove(Side::B))
        );
    }
}
