//! Bitboard-backed implementation of the chess position: all pieces and their
//! placement, castling rights, side to move and the en passant target. This is
//! the default board implementation; an alternative square-centric one lives
//! in [`crate::mailbox`] and both have different trade-offs and scenarios
//! where they are efficient.
//!
//! Moves are applied as in-place transforms of a copy of the position, and
//! check detection looks outward from the king square, so it costs a handful
//! of attack lookups no matter how much material is on the board.

use std::fmt;

use strum::IntoEnumIterator;

use crate::attacks;
use crate::bitboard::{Bitboard, Pieces};
use crate::core::{
    CastleRights,
    CastlingSide,
    Direction,
    File,
    Move,
    MoveList,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
};
use crate::fen;
use crate::rules::Rules;

/// Piece-centric implementation of the chess position. Efficient board
/// representation is crucial for move generation performance, and keeping one
/// bitboard per piece kind allows most of the work to happen on whole square
/// sets at once.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    white_pieces: Pieces,
    black_pieces: Pieces,
    side_to_move: Player,
    castling: CastleRights,
    en_passant_square: Option<Square>,
}

impl Position {
    /// Creates the starting position of the standard chess.
    ///
    /// ```
    /// use tabia::position::Position;
    ///
    /// let starting_position = Position::starting();
    /// assert_eq!(
    ///     &starting_position.to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        Self {
            white_pieces: Pieces::starting(Player::White),
            black_pieces: Pieces::starting(Player::Black),
            side_to_move: Player::White,
            castling: CastleRights::all(),
            en_passant_square: None,
        }
    }

    /// Parses the position from a FEN string. The four modeled fields (piece
    /// placement, side to move, castling availability, en passant target) are
    /// read; trailing halfmove/fullmove counters are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on syntactic mismatch or when the position does not
    /// pass the correctness heuristics (e.g. a missing king).
    pub fn from_fen(input: &str) -> anyhow::Result<Self> {
        let record = fen::decode(input)?;
        let mut white_pieces = Pieces::empty();
        let mut black_pieces = Pieces::empty();
        for (square, piece) in record.placement {
            let pieces = match piece.player {
                Player::White => &mut white_pieces,
                Player::Black => &mut black_pieces,
            };
            pieces.bitboard_for_mut(piece.kind).extend(square);
        }
        Ok(Self {
            white_pieces,
            black_pieces,
            side_to_move: record.side_to_move,
            castling: record.castling,
            en_passant_square: record.en_passant_square,
        })
    }

    /// The player who makes the next move.
    #[must_use]
    pub const fn us(&self) -> Player {
        self.side_to_move
    }

    /// The player who waits for their turn.
    #[must_use]
    pub fn them(&self) -> Player {
        !self.us()
    }

    /// The piece standing on the given square, if any.
    ///
    /// This is linear in the number of piece kinds: convenient at the
    /// boundaries (FEN, display) but not on hot paths.
    #[must_use]
    pub fn at(&self, square: Square) -> Option<Piece> {
        if let Some(kind) = self.white_pieces.at(square) {
            return Some(Piece {
                player: Player::White,
                kind,
            });
        }
        if let Some(kind) = self.black_pieces.at(square) {
            return Some(Piece {
                player: Player::Black,
                kind,
            });
        }
        None
    }

    /// Calculates the list of legal moves: the pseudo-legal moves of every
    /// piece of the side to move (plus the castles), filtered by [`Self::play`]
    /// accepting them. The order is unspecified but deterministic for a given
    /// position.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let our_pieces = self.material(self.us());
        for (bitboard, kind) in [
            (our_pieces.king, PieceKind::King),
            (our_pieces.queens, PieceKind::Queen),
            (our_pieces.rooks, PieceKind::Rook),
            (our_pieces.bishops, PieceKind::Bishop),
            (our_pieces.knights, PieceKind::Knight),
            (our_pieces.pawns, PieceKind::Pawn),
        ] {
            for from in bitboard.iter() {
                for to in self.targets(kind, from).iter() {
                    let candidate = Move::Standard { from, to };
                    if self.play(candidate).is_some() {
                        moves.push(candidate);
                    }
                }
            }
        }
        for side in [CastlingSide::Short, CastlingSide::Long] {
            let candidate = Move::Castle(side);
            if self.play(candidate).is_some() {
                moves.push(candidate);
            }
        }
        moves
    }

    /// Applies the move and returns the resulting position, or [None] if the
    /// move is not legal: no piece of the side to move on the source square,
    /// unreachable destination, unmet castling preconditions or a move that
    /// leaves the own king attacked. The input position is never modified.
    #[must_use]
    pub fn play(&self, next_move: Move) -> Option<Self> {
        if !self.is_valid(next_move) {
            return None;
        }
        let mut next = self.clone();
        next.execute(next_move);
        let king = next.material(next.side_to_move).king.as_square();
        if next.attacked(king, !next.side_to_move) {
            return None;
        }
        next.side_to_move = !next.side_to_move;
        Some(next)
    }

    /// Whether the king of the side to move is attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let king = self.material(self.us()).king.as_square();
        self.attacked(king, self.them())
    }

    /// Whether the side to move is checkmated: it is in check and has no legal
    /// moves.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    fn material(&self, player: Player) -> &Pieces {
        match player {
            Player::White => &self.white_pieces,
            Player::Black => &self.black_pieces,
        }
    }

    fn material_mut(&mut self, player: Player) -> &mut Pieces {
        match player {
            Player::White => &mut self.white_pieces,
            Player::Black => &mut self.black_pieces,
        }
    }

    fn occupancy(&self, player: Player) -> Bitboard {
        self.material(player).all()
    }

    fn occupied_squares(&self) -> Bitboard {
        self.occupancy(self.us()) | self.occupancy(self.them())
    }

    /// Pseudo-legal target squares for a piece of the side to move. Own-color
    /// squares are excluded, enemy squares are captures.
    fn targets(&self, kind: PieceKind, from: Square) -> Bitboard {
        let occupied = self.occupied_squares();
        let ours = self.occupancy(self.us());
        match kind {
            PieceKind::King => attacks::king_attacks(from) - ours,
            PieceKind::Queen => attacks::queen_attacks(from, occupied) - ours,
            PieceKind::Rook => attacks::rook_attacks(from, occupied) - ours,
            PieceKind::Bishop => attacks::bishop_attacks(from, occupied) - ours,
            PieceKind::Knight => attacks::knight_attacks(from) - ours,
            PieceKind::Pawn => attacks::pawn_moves(
                from,
                self.us(),
                occupied,
                self.occupancy(self.them()),
                self.en_passant_square,
            ),
        }
    }

    /// Whether the square is attacked by the given player. Looks outward from
    /// the square instead of accumulating the full enemy attack set.
    fn attacked(&self, square: Square, by: Player) -> bool {
        let their_pieces = self.material(by);
        let occupied = self.occupied_squares();
        (attacks::knight_attacks(square) & their_pieces.knights).has_any()
            || (attacks::king_attacks(square) & their_pieces.king).has_any()
            || (attacks::pawn_attacks(square, !by) & their_pieces.pawns).has_any()
            || (attacks::rook_attacks(square, occupied)
                & (their_pieces.rooks | their_pieces.queens))
                .has_any()
            || (attacks::bishop_attacks(square, occupied)
                & (their_pieces.bishops | their_pieces.queens))
                .has_any()
    }

    fn is_valid(&self, next_move: Move) -> bool {
        match next_move {
            Move::Standard { from, to } => match self.material(self.us()).at(from) {
                Some(kind) => self.targets(kind, from).contains(to),
                None => false,
            },
            Move::Castle(side) => self.can_castle(side),
        }
    }

    /// The castling predicate: the right is still granted, king and rook stand
    /// on their home squares, the squares between them are empty and neither
    /// the king's square nor any square it traverses is attacked.
    fn can_castle(&self, side: CastlingSide) -> bool {
        let us = self.us();
        if !self.castling.contains(CastleRights::single(us, side)) {
            return false;
        }
        let backrank = Rank::backrank(us);
        let rook_home = Square::new(
            match side {
                CastlingSide::Short => File::H,
                CastlingSide::Long => File::A,
            },
            backrank,
        );
        let our_pieces = self.material(us);
        if !our_pieces.king.contains(Square::new(File::E, backrank))
            || !our_pieces.rooks.contains(rook_home)
        {
            return false;
        }
        let occupied = self.occupied_squares();
        if (occupied & attacks::castle_clearance(us, side)).has_any() {
            return false;
        }
        let enemy_attacks = attacks::attack_set(self.them(), self.material(self.them()), occupied);
        (enemy_attacks & attacks::castle_king_walk(us, side)).is_empty()
    }

    /// Applies a pseudo-legal move in place. The side to move is not flipped
    /// here: the caller still has to verify that the mover's king is safe.
    fn execute(&mut self, next_move: Move) {
        match next_move {
            Move::Standard { from, to } => self.execute_standard(from, to),
            Move::Castle(side) => self.execute_castle(side),
        }
    }

    fn execute_standard(&mut self, from: Square, to: Square) {
        for square in [from, to] {
            self.castling.remove(CastleRights::cleared_by(square));
        }
        self.capture_at(to);
        let previous_en_passant = self.en_passant_square.take();
        let us = self.side_to_move;
        if self.material(us).pawns.contains(from) {
            if previous_en_passant == Some(to) {
                // The captured pawn is one rank behind the target square,
                // right next to the capturing pawn.
                let captured = Square::new(to.file(), from.rank());
                self.material_mut(!us).pawns.clear(captured);
            }
            let our_pieces = self.material_mut(us);
            our_pieces.pawns.clear(from);
            if to.rank() == Rank::backrank(!us) {
                // Promotion is always to a queen.
                our_pieces.queens.extend(to);
            } else {
                our_pieces.pawns.extend(to);
            }
            if from.rank() == Rank::pawns_starting(us) {
                let push = Direction::pawn_push(us);
                if let Some(passed) = from.shift(push) {
                    if passed.shift(push) == Some(to) {
                        self.en_passant_square = Some(passed);
                    }
                }
            }
            return;
        }
        if self.material(us).king.contains(from) {
            let our_pieces = self.material_mut(us);
            our_pieces.king.clear(from);
            our_pieces.king.extend(to);
            return;
        }
        let our_pieces = self.material_mut(us);
        for bitboard in [
            &mut our_pieces.queens,
            &mut our_pieces.rooks,
            &mut our_pieces.bishops,
            &mut our_pieces.knights,
        ] {
            if bitboard.contains(from) {
                bitboard.clear(from);
                bitboard.extend(to);
                return;
            }
        }
    }

    fn execute_castle(&mut self, side: CastlingSide) {
        let us = self.side_to_move;
        let backrank = Rank::backrank(us);
        let (rook_from, rook_to, king_to) = match side {
            CastlingSide::Short => (File::H, File::F, File::G),
            CastlingSide::Long => (File::A, File::D, File::C),
        };
        self.castling.remove(CastleRights::both(us));
        self.en_passant_square = None;
        let our_pieces = self.material_mut(us);
        our_pieces.rooks.clear(Square::new(rook_from, backrank));
        our_pieces.rooks.extend(Square::new(rook_to, backrank));
        our_pieces.king.clear(Square::new(File::E, backrank));
        our_pieces.king.extend(Square::new(king_to, backrank));
    }

    fn capture_at(&mut self, square: Square) {
        let them = self.them();
        let their_pieces = self.material_mut(them);
        // Kings can not be captured, so they are not on the list.
        for bitboard in [
            &mut their_pieces.queens,
            &mut their_pieces.rooks,
            &mut their_pieces.bishops,
            &mut their_pieces.knights,
            &mut their_pieces.pawns,
        ] {
            if bitboard.contains(square) {
                bitboard.clear(square);
                return;
            }
        }
    }
}

impl Rules for Position {
    fn starting() -> Self {
        Self::starting()
    }

    fn from_fen(input: &str) -> anyhow::Result<Self> {
        Self::from_fen(input)
    }

    fn side_to_move(&self) -> Player {
        self.us()
    }

    fn pieces(&self) -> Vec<(Square, Piece)> {
        self.occupied_squares()
            .iter()
            .filter_map(|square| self.at(square).map(|piece| (square, piece)))
            .collect()
    }

    fn generate_moves(&self) -> MoveList {
        self.generate_moves()
    }

    fn play(&self, next_move: Move) -> Option<Self> {
        self.play(next_move)
    }

    fn in_check(&self) -> bool {
        self.in_check()
    }

    fn is_checkmate(&self) -> bool {
        self.is_checkmate()
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_fen(input.trim())
    }
}

impl fmt::Display for Position {
    /// Returns the position in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            fen::encode(
                |square| self.at(square),
                self.side_to_move,
                self.castling,
                self.en_passant_square,
            )
        )
    }
}

impl fmt::Debug for Position {
    /// Dumps the board in a simple format ('.' for an empty square, FEN
    /// algebraic symbol for a piece) a-la Stockfish "debug" command in UCI
    /// mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let symbol = match self.at(Square::new(file, rank)) {
                    Some(piece) => piece.algebraic_symbol(),
                    None => '.',
                };
                write!(f, "{symbol}")?;
                if file != File::H {
                    write!(f, " ")?;
                }
            }
            if rank != Rank::One {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
