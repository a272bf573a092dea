//! Mappings of occupied squares to the attacked squares for each piece kind.
//! Sliding pieces hunt for the nearest blocker on each ray with single bit
//! scans instead of walking the board square by square; knight and king sets
//! are produced by re-centering a pattern constant.

use crate::bitboard::{Bitboard, Pieces};
use crate::core::{CastlingSide, File, Player, Rank, Square};

/// The a1-h8 diagonal.
const MAIN_DIAGONAL: u64 = 0x8040_2010_0804_0201;
/// The a8-h1 diagonal.
const ANTI_DIAGONAL: u64 = 0x0102_0408_1020_4080;

/// Attack set of a knight standing on C3. Shifted around the board to produce
/// the set for any square.
const KNIGHT_PATTERN: u64 = 0x0000_000A_1100_110A;
const KNIGHT_CENTER: u8 = Square::C3 as u8;

/// Attack set of a king standing on B2.
const KING_PATTERN: u64 = 0x0000_0000_0007_0507;
const KING_CENTER: u8 = Square::B2 as u8;

/// Shifts a pattern centered on `center` so that it is centered on `square`
/// instead. Attacks shifted off the first and the last rank fall off the
/// board; file wrap-arounds have to be masked by the caller.
const fn recenter(pattern: u64, center: u8, square: Square) -> u64 {
    let index = square as u8;
    if index >= center {
        pattern << (index - center)
    } else {
        pattern >> (center - index)
    }
}

/// Knight attacks from the given square.
#[must_use]
pub fn knight_attacks(from: Square) -> Bitboard {
    // Shifting by up to two files can wrap a target around the board edge onto
    // the opposite files. Which files are unreachable depends only on the file
    // region of the source square.
    let wrap_mask = match from.file() {
        File::A | File::B => !(File::G.mask() | File::H.mask()),
        File::G | File::H => !(File::A.mask() | File::B.mask()),
        _ => Bitboard::full(),
    };
    Bitboard::from_bits(recenter(KNIGHT_PATTERN, KNIGHT_CENTER, from)) & wrap_mask
}

/// King attacks (the 8 neighbouring squares) from the given square.
#[must_use]
pub fn king_attacks(from: Square) -> Bitboard {
    let wrap_mask = match from.file() {
        File::A => !File::H.mask(),
        File::H => !File::A.mask(),
        _ => Bitboard::full(),
    };
    Bitboard::from_bits(recenter(KING_PATTERN, KING_CENTER, from)) & wrap_mask
}

/// Squares a pawn of the given player attacks from the given square: the
/// diagonal captures only, regardless of what stands on them. Forward pushes
/// are not attacks; see [`pawn_moves`].
#[must_use]
pub fn pawn_attacks(from: Square, player: Player) -> Bitboard {
    let bit = Bitboard::from(from).bits();
    // Mask the destination file so that an a-pawn can not capture onto the
    // h-file and vice versa.
    let attacks = match player {
        Player::White => {
            ((bit << 7) & !File::H.mask().bits()) | ((bit << 9) & !File::A.mask().bits())
        },
        Player::Black => {
            ((bit >> 9) & !File::H.mask().bits()) | ((bit >> 7) & !File::A.mask().bits())
        },
    };
    Bitboard::from_bits(attacks)
}

/// Full move target set of a pawn: single pushes to empty squares, double
/// pushes from the starting rank when both squares ahead are empty, and
/// diagonal captures against enemy pieces or the en passant target.
#[must_use]
pub fn pawn_moves(
    from: Square,
    player: Player,
    occupied: Bitboard,
    their_occupancy: Bitboard,
    en_passant_square: Option<Square>,
) -> Bitboard {
    let bit = Bitboard::from(from).bits();
    let empty = !occupied;
    let (single, double) = match player {
        Player::White => (bit << 8, bit << 16),
        Player::Black => (bit >> 8, bit >> 16),
    };
    let single = Bitboard::from_bits(single) & empty;
    let mut pushes = single;
    if single.has_any() && from.rank() == Rank::pawns_starting(player) {
        pushes |= Bitboard::from_bits(double) & empty;
    }
    let mut capture_targets = their_occupancy;
    if let Some(square) = en_passant_square {
        capture_targets |= Bitboard::from(square);
    }
    pushes | (pawn_attacks(from, player) & capture_targets)
}

/// The blocker-inclusive ray from `from` towards the most significant bit of
/// `line`: scanning with [`Bitboard::lsb`] finds the nearest blocker.
fn climbing_ray(from: Square, line: Bitboard, occupancy: Bitboard) -> Bitboard {
    let ray = line & Bitboard::above(from);
    let blockers = ray & occupancy;
    if blockers.is_empty() {
        return ray;
    }
    let nearest = blockers.lsb().bits();
    ray & Bitboard::from_bits(nearest | (nearest - 1))
}

/// The blocker-inclusive ray from `from` towards the least significant bit of
/// `line`: the nearest blocker is the [`Bitboard::msb`] of the occupied part.
fn descending_ray(from: Square, line: Bitboard, occupancy: Bitboard) -> Bitboard {
    let ray = line & Bitboard::below(from);
    let blockers = ray & occupancy;
    if blockers.is_empty() {
        return ray;
    }
    ray & !Bitboard::from_bits(blockers.msb().bits() - 1)
}

/// The a1-h8 direction diagonal through the given square, derived by shifting
/// the main diagonal by whole ranks.
fn diagonal_line(square: Square) -> Bitboard {
    let towards_h = square.file() as i8 - square.rank() as i8;
    Bitboard::from_bits(if towards_h >= 0 {
        MAIN_DIAGONAL >> (towards_h * 8)
    } else {
        MAIN_DIAGONAL << (-towards_h * 8)
    })
}

/// The a8-h1 direction diagonal through the given square.
fn anti_diagonal_line(square: Square) -> Bitboard {
    let towards_top = square.file() as i8 + square.rank() as i8 - 7;
    Bitboard::from_bits(if towards_top >= 0 {
        ANTI_DIAGONAL << (towards_top * 8)
    } else {
        ANTI_DIAGONAL >> (-towards_top * 8)
    })
}

/// Rook attacks from the given square: the four orthogonal rays, stopping at
/// the first occupied square of each (included in the set, to be excluded by
/// the caller when it holds an own piece).
#[must_use]
pub fn rook_attacks(from: Square, occupancy: Bitboard) -> Bitboard {
    let file = from.file().mask();
    let rank = from.rank().mask();
    climbing_ray(from, file, occupancy)
        | climbing_ray(from, rank, occupancy)
        | descending_ray(from, rank, occupancy)
        | descending_ray(from, file, occupancy)
}

/// Bishop attacks from the given square: same structure as [`rook_attacks`]
/// over the two diagonals.
#[must_use]
pub fn bishop_attacks(from: Square, occupancy: Bitboard) -> Bitboard {
    let diagonal = diagonal_line(from);
    let anti_diagonal = anti_diagonal_line(from);
    climbing_ray(from, diagonal, occupancy)
        | climbing_ray(from, anti_diagonal, occupancy)
        | descending_ray(from, anti_diagonal, occupancy)
        | descending_ray(from, diagonal, occupancy)
}

/// Queen attacks: the union of rook and bishop attacks.
#[must_use]
pub fn queen_attacks(from: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(from, occupancy) | bishop_attacks(from, occupancy)
}

/// Union of the attack-only target sets over all pieces of one player. For
/// pawns this includes the diagonal captures only, not the pushes.
pub(crate) fn attack_set(player: Player, pieces: &Pieces, occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::empty();
    for from in pieces.king.iter() {
        attacks |= king_attacks(from);
    }
    for from in pieces.queens.iter() {
        attacks |= queen_attacks(from, occupancy);
    }
    for from in pieces.rooks.iter() {
        attacks |= rook_attacks(from, occupancy);
    }
    for from in pieces.bishops.iter() {
        attacks |= bishop_attacks(from, occupancy);
    }
    for from in pieces.knights.iter() {
        attacks |= knight_attacks(from);
    }
    for from in pieces.pawns.iter() {
        attacks |= pawn_attacks(from, player);
    }
    attacks
}

/// Squares between the castling king and rook that have to be empty.
pub(crate) fn castle_clearance(player: Player, side: CastlingSide) -> Bitboard {
    let clearance = match side {
        // f1, g1
        CastlingSide::Short => 0x60,
        // b1, c1, d1
        CastlingSide::Long => 0x0E,
    };
    match player {
        Player::White => Bitboard::from_bits(clearance),
        Player::Black => Bitboard::from_bits(clearance << 56),
    }
}

/// Squares that must not be attacked by the enemy for the castle to be legal:
/// the king's current square, the square it passes through and its
/// destination.
pub(crate) fn castle_king_walk(player: Player, side: CastlingSide) -> Bitboard {
    let walk = match side {
        // e1, f1, g1
        CastlingSide::Short => 0x70,
        // c1, d1, e1
        CastlingSide::Long => 0x1C,
    };
    match player {
        Player::White => Bitboard::from_bits(walk),
        Player::Black => Bitboard::from_bits(walk << 56),
    }
}
