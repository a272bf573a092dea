//! The public interface both board implementations satisfy, so that callers
//! (and the differential tests) can swap one for the other freely.

use std::fmt;

use crate::core::{Move, MoveList, Piece, Player, Square};

/// A chess position that knows the rules of the game. Implementations are
/// value types: every state-changing operation returns a new position and the
/// receiver is never modified, so positions can be shared freely.
///
/// FEN encoding goes through [`fmt::Display`].
pub trait Rules: Clone + fmt::Display + Sized {
    /// Creates the starting position of the standard chess.
    fn starting() -> Self;

    /// Parses a position from a FEN string.
    ///
    /// # Errors
    ///
    /// Returns an error on syntactic mismatch or an obviously corrupt
    /// position.
    fn from_fen(input: &str) -> anyhow::Result<Self>;

    /// The player who makes the next move.
    fn side_to_move(&self) -> Player;

    /// Unordered listing of every occupied square and the piece standing on
    /// it.
    fn pieces(&self) -> Vec<(Square, Piece)>;

    /// All legal moves of the side to move. The order is unspecified but
    /// deterministic for a given position.
    fn generate_moves(&self) -> MoveList;

    /// Applies the move and returns the resulting position with the other
    /// player to move, or [None] when the move is illegal.
    fn play(&self, next_move: Move) -> Option<Self>;

    /// Whether the king of the side to move is attacked.
    fn in_check(&self) -> bool;

    /// Whether the side to move is checkmated: in check with no legal moves.
    fn is_checkmate(&self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }
}

/// [Perft] (**per**formance **t**esting) is a technique for checking
/// correctness of move generation by traversing the tree of legal moves and
/// counting all the leaf nodes at a certain depth.
///
/// [Perft]: https://www.chessprogramming.org/Perft
#[must_use]
pub fn perft<P: Rules>(position: &P, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return position.generate_moves().len() as u64;
    }
    let mut nodes = 0;
    for next_move in position.generate_moves() {
        if let Some(next_position) = position.play(next_move) {
            nodes += perft(&next_position, depth - 1);
        }
    }
    nodes
}
