//! Square-centric reference implementation of the chess position: an ordered
//! map from occupied squares to pieces, with move targets computed by plain
//! coordinate arithmetic. It is deliberately straightforward so that it can be
//! audited square by square, and the bitboard implementation in
//! [`crate::position`] is held to producing exactly the same observable
//! behavior.

use std::collections::BTreeMap;
use std::fmt;

use strum::IntoEnumIterator;

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
    BOARD_WIDTH,
};
use crate::fen;
use crate::rules::Rules;

const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::UpLeft,
];

const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

/// The 8 L-shaped (rank delta, file delta) knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Map-backed implementation of the chess position. Use through the
/// [`Rules`] trait:
///
/// ```
/// use tabia::mailbox;
/// use tabia::rules::Rules;
///
/// let position = mailbox::Position::starting();
/// assert_eq!(position.generate_moves().len(), 20);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    pieces: BTreeMap<Square, Piece>,
    side_to_move: Player,
    castling: CastleRights,
    en_passant_square: Option<Square>,
}

impl Position {
    fn at(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    fn occupied_by(&self, square: Square, player: Player) -> bool {
        self.at(square).is_some_and(|piece| piece.player == player)
    }

    fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces
            .iter()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.player == player)
            .map(|(&square, _)| square)
    }

    /// Pseudo-legal target squares of the piece standing on `from`.
    fn targets(&self, piece: Piece, from: Square) -> Vec<Square> {
        match piece.kind {
            PieceKind::King => self.step_targets(from, piece.player, &ALL_DIRECTIONS),
            PieceKind::Queen => self.sliding_targets(from, piece.player, &ALL_DIRECTIONS),
            PieceKind::Rook => self.sliding_targets(from, piece.player, &ROOK_DIRECTIONS),
            PieceKind::Bishop => self.sliding_targets(from, piece.player, &BISHOP_DIRECTIONS),
            PieceKind::Knight => self.jump_targets(from, piece.player),
            PieceKind::Pawn => self.pawn_targets(from, piece.player),
        }
    }

    /// Squares the piece standing on `from` attacks, whatever stands on them.
    /// Differs from [`Self::targets`] only for pawns, which attack their
    /// capture squares but not the squares they push to.
    fn attack_targets(&self, piece: Piece, from: Square) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => pawn_capture_directions(piece.player)
                .iter()
                .filter_map(|&direction| from.shift(direction))
                .collect(),
            _ => self.targets(piece, from),
        }
    }

    fn step_targets(&self, from: Square, player: Player, directions: &[Direction]) -> Vec<Square> {
        directions
            .iter()
            .filter_map(|&direction| from.shift(direction))
            .filter(|&to| !self.occupied_by(to, player))
            .collect()
    }

    fn sliding_targets(
        &self,
        from: Square,
        player: Player,
        directions: &[Direction],
    ) -> Vec<Square> {
        let mut targets = Vec::new();
        for &direction in directions {
            let mut square = from;
            while let Some(next) = square.shift(direction) {
                match self.at(next) {
                    None => {
                        targets.push(next);
                        square = next;
                    },
                    Some(blocker) => {
                        if blocker.player != player {
                            targets.push(next);
                        }
                        break;
                    },
                }
            }
        }
        targets
    }

    fn jump_targets(&self, from: Square, player: Player) -> Vec<Square> {
        KNIGHT_JUMPS
            .iter()
            .filter_map(|&(rank_delta, file_delta)| offset(from, rank_delta, file_delta))
            .filter(|&to| !self.occupied_by(to, player))
            .collect()
    }

    fn pawn_targets(&self, from: Square, player: Player) -> Vec<Square> {
        let mut targets = Vec::new();
        let push = Direction::pawn_push(player);
        if let Some(ahead) = from.shift(push) {
            if self.at(ahead).is_none() {
                targets.push(ahead);
                if from.rank() == Rank::pawns_starting(player) {
                    if let Some(ahead_two) = ahead.shift(push) {
                        if self.at(ahead_two).is_none() {
                            targets.push(ahead_two);
                        }
                    }
                }
            }
        }
        for &direction in &pawn_capture_directions(player) {
            if let Some(to) = from.shift(direction) {
                if self.occupied_by(to, !player) || self.en_passant_square == Some(to) {
                    targets.push(to);
                }
            }
        }
        targets
    }

    fn attacked(&self, target: Square, by: Player) -> bool {
        self.pieces
            .iter()
            .filter(|(_, piece)| piece.player == by)
            .any(|(&from, &piece)| self.attack_targets(piece, from).contains(&target))
    }

    fn is_valid(&self, next_move: Move) -> bool {
        match next_move {
            Move::Standard { from, to } => match self.at(from) {
                Some(piece) if piece.player == self.side_to_move => {
                    self.targets(piece, from).contains(&to)
                },
                _ => false,
            },
            Move::Castle(side) => self.can_castle(side),
        }
    }

    fn can_castle(&self, side: CastlingSide) -> bool {
        let us = self.side_to_move;
        if !self.castling.contains(CastleRights::single(us, side)) {
            return false;
        }
        let backrank = Rank::backrank(us);
        let home = |file| Square::new(file, backrank);
        let king = Piece {
            player: us,
            kind: PieceKind::King,
        };
        let rook = Piece {
            player: us,
            kind: PieceKind::Rook,
        };
        let rook_home = match side {
            CastlingSide::Short => File::H,
            CastlingSide::Long => File::A,
        };
        if self.at(home(File::E)) != Some(king) || self.at(home(rook_home)) != Some(rook) {
            return false;
        }
        let clearance: &[File] = match side {
            CastlingSide::Short => &[File::F, File::G],
            CastlingSide::Long => &[File::B, File::C, File::D],
        };
        if clearance.iter().any(|&file| self.at(home(file)).is_some()) {
            return false;
        }
        let king_walk: &[File] = match side {
            CastlingSide::Short => &[File::E, File::F, File::G],
            CastlingSide::Long => &[File::E, File::D, File::C],
        };
        !king_walk
            .iter()
            .any(|&file| self.attacked(home(file), !us))
    }

    fn execute(&mut self, next_move: Move) {
        match next_move {
            Move::Standard { from, to } => self.execute_standard(from, to),
            Move::Castle(side) => {
                // Castling decomposes into two standard moves: the rook goes
                // first, then the king.
                let backrank = Rank::backrank(self.side_to_move);
                let (rook_from, rook_to, king_to) = match side {
                    CastlingSide::Short => (File::H, File::F, File::G),
                    CastlingSide::Long => (File::A, File::D, File::C),
                };
                self.execute_standard(
                    Square::new(rook_from, backrank),
                    Square::new(rook_to, backrank),
                );
                self.execute_standard(Square::new(File::E, backrank), Square::new(king_to, backrank));
            },
        }
    }

    fn execute_standard(&mut self, from: Square, to: Square) {
        for square in [from, to] {
            self.castling.remove(CastleRights::cleared_by(square));
        }
        let moving = match self.pieces.remove(&from) {
            Some(piece) => piece,
            None => return,
        };
        let previous_en_passant = self.en_passant_square.take();
        if moving.kind == PieceKind::Pawn && previous_en_passant == Some(to) {
            let captured = Square::new(to.file(), from.rank());
            let _ = self.pieces.remove(&captured);
        }
        let arriving = if moving.kind == PieceKind::Pawn && to.rank() == Rank::backrank(!moving.player)
        {
            // Promotion is always to a queen.
            Piece {
                player: moving.player,
                kind: PieceKind::Queen,
            }
        } else {
            moving
        };
        // Inserting over an enemy piece captures it.
        let _ = self.pieces.insert(to, arriving);
        if moving.kind == PieceKind::Pawn && from.rank() == Rank::pawns_starting(moving.player) {
            let push = Direction::pawn_push(moving.player);
            if let Some(passed) = from.shift(push) {
                if passed.shift(push) == Some(to) {
                    self.en_passant_square = Some(passed);
                }
            }
        }
    }
}

impl Rules for Position {
    fn starting() -> Self {
        let mut pieces = BTreeMap::new();
        let backrank_kinds = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for player in [Player::White, Player::Black] {
            for (file, kind) in File::iter().zip(backrank_kinds) {
                let _ = pieces.insert(
                    Square::new(file, Rank::backrank(player)),
                    Piece { player, kind },
                );
            }
            for file in File::iter() {
                let _ = pieces.insert(
                    Square::new(file, Rank::pawns_starting(player)),
                    Piece {
                        player,
                        kind: PieceKind::Pawn,
                    },
                );
            }
        }
        Self {
            pieces,
            side_to_move: Player::White,
            castling: CastleRights::all(),
            en_passant_square: None,
        }
    }

    fn from_fen(input: &str) -> anyhow::Result<Self> {
        let record = fen::decode(input)?;
        Ok(Self {
            pieces: record.placement.into_iter().collect(),
            side_to_move: record.side_to_move,
            castling: record.castling,
            en_passant_square: record.en_passant_square,
        })
    }

    fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    fn pieces(&self) -> Vec<(Square, Piece)> {
        self.pieces
            .iter()
            .map(|(&square, &piece)| (square, piece))
            .collect()
    }

    fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (&from, &piece) in self
            .pieces
            .iter()
            .filter(|(_, piece)| piece.player == self.side_to_move)
        {
            for to in self.targets(piece, from) {
                let candidate = Move::Standard { from, to };
                if self.play(candidate).is_some() {
                    moves.push(candidate);
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

    fn play(&self, next_move: Move) -> Option<Self> {
        if !self.is_valid(next_move) {
            return None;
        }
        let mut next = self.clone();
        next.execute(next_move);
        let exposed = next
            .king_square(next.side_to_move)
            .is_some_and(|king| next.attacked(king, !next.side_to_move));
        if exposed {
            return None;
        }
        next.side_to_move = !next.side_to_move;
        Some(next)
    }

    fn in_check(&self) -> bool {
        self.king_square(self.side_to_move)
            .is_some_and(|king| self.attacked(king, !self.side_to_move))
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

/// Moves `square` by the given rank and file deltas, or [None] when that falls
/// off the board.
fn offset(square: Square, rank_delta: i8, file_delta: i8) -> Option<Square> {
    let rank = square.rank() as i8 + rank_delta;
    let file = square.file() as i8 + file_delta;
    let board = 0..BOARD_WIDTH as i8;
    if !board.contains(&rank) || !board.contains(&file) {
        return None;
    }
    Some(Square::new(
        File::try_from(file as u8).ok()?,
        Rank::try_from(rank as u8).ok()?,
    ))
}

const fn pawn_capture_directions(player: Player) -> [Direction; 2] {
    match player {
        Player::White => [Direction::UpLeft, Direction::UpRight],
        Player::Black => [Direction::DownLeft, Direction::DownRight],
    }
}
