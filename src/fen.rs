//! [Forsyth-Edwards Notation] codec shared by both board implementations, so
//! that they accept and produce exactly the same strings.
//!
//! Only the four fields this crate models are read: piece placement, side to
//! move, castling availability and the en passant target square. Halfmove
//! clock and fullmove counter are ignored when present and never emitted.
//!
//! [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation

use anyhow::bail;
use strum::IntoEnumIterator;

use crate::core::{
    CastleRights,
    Direction,
    File,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
    BOARD_WIDTH,
};

/// The four FEN fields in parsed form, not yet tied to a board
/// representation.
pub(crate) struct Record {
    pub(crate) placement: Vec<(Square, Piece)>,
    pub(crate) side_to_move: Player,
    pub(crate) castling: CastleRights,
    pub(crate) en_passant_square: Option<Square>,
}

/// Parses a FEN string and checks the correctness of the resulting position.
///
/// FEN ::=
///       Piece Placement
///   ' ' Side to move
///   ' ' Castling ability
///   ' ' En passant target square
///
/// Any number of whitespace characters may separate the fields; trailing
/// fields (halfmove clock, fullmove counter) are ignored.
pub(crate) fn decode(input: &str) -> anyhow::Result<Record> {
    let mut parts = input.split_ascii_whitespace();
    let pieces_placement = match parts.next() {
        Some(placement) => placement,
        None => bail!("missing pieces placement"),
    };
    let mut placement = Vec::with_capacity(32);
    let mut rank_id = BOARD_WIDTH;
    for rank_fen in pieces_placement.split('/') {
        if rank_id == 0 {
            bail!("expected {BOARD_WIDTH} ranks, got {pieces_placement}");
        }
        rank_id -= 1;
        let rank = Rank::try_from(rank_id)?;
        let mut file: u8 = 0;
        for symbol in rank_fen.chars() {
            match symbol {
                '0' => bail!("empty-square run can not be 0"),
                '1'..='9' => {
                    file += symbol as u8 - b'0';
                    continue;
                },
                _ => (),
            }
            let piece = Piece::try_from(symbol)?;
            placement.push((Square::new(file.try_into()?, rank), piece));
            file += 1;
        }
        if file != BOARD_WIDTH {
            bail!("rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {file}");
        }
    }
    if rank_id != 0 {
        bail!("there should be {BOARD_WIDTH} ranks, got {pieces_placement}");
    }
    let side_to_move = match parts.next() {
        Some(value) => value.try_into()?,
        None => bail!("missing side to move"),
    };
    let castling = match parts.next() {
        Some(value) => value.try_into()?,
        None => bail!("missing castling rights"),
    };
    let en_passant_square = match parts.next() {
        Some("-") => None,
        Some(value) => Some(value.try_into()?),
        None => bail!("missing en passant square"),
    };
    let record = Record {
        placement,
        side_to_move,
        castling,
        en_passant_square,
    };
    match validate(&record) {
        Ok(()) => Ok(record),
        Err(e) => Err(e.context("illegal position")),
    }
}

/// Checks if the position can be reasoned about by the move generator. This
/// employs a limited number of heuristics that filter out the most obviously
/// incorrect positions; checking whether the position is truly reachable from
/// the starting position would require retrograde analysis.
fn validate(record: &Record) -> anyhow::Result<()> {
    for player in [Player::White, Player::Black] {
        let kings = record
            .placement
            .iter()
            .filter(|(_, piece)| piece.kind == PieceKind::King && piece.player == player)
            .count();
        if kings != 1 {
            bail!("expected 1 {player:?} king, got {kings}");
        }
        let pawns = record
            .placement
            .iter()
            .filter(|(_, piece)| piece.kind == PieceKind::Pawn && piece.player == player)
            .count();
        if pawns > 8 {
            bail!("expected <= 8 {player:?} pawns, got {pawns}");
        }
    }
    for (square, piece) in &record.placement {
        if piece.kind == PieceKind::Pawn
            && (square.rank() == Rank::One || square.rank() == Rank::Eight)
        {
            bail!("pawns can not be placed on backranks");
        }
    }
    if let Some(square) = record.en_passant_square {
        let expected_rank = match record.side_to_move {
            Player::White => Rank::Six,
            Player::Black => Rank::Three,
        };
        if square.rank() != expected_rank {
            bail!("expected en passant square on rank {expected_rank}, got {square}");
        }
        // The pawn that was just pushed by the opponent should be in front of
        // the en passant square.
        let them = !record.side_to_move;
        let pushed_pawn = Piece {
            player: them,
            kind: PieceKind::Pawn,
        };
        let in_front = square
            .shift(Direction::pawn_push(them))
            .is_some_and(|in_front| record.placement.contains(&(in_front, pushed_pawn)));
        if !in_front {
            bail!("en passant square is not behind a pushed pawn");
        }
    }
    Ok(())
}

/// Emits the four FEN fields for a board described by the `at` square lookup.
pub(crate) fn encode(
    at: impl Fn(Square) -> Option<Piece>,
    side_to_move: Player,
    castling: CastleRights,
    en_passant_square: Option<Square>,
) -> String {
    let mut result = String::new();
    for rank in Rank::iter().rev() {
        let mut empty_squares = 0;
        for file in File::iter() {
            match at(Square::new(file, rank)) {
                Some(piece) => {
                    if empty_squares != 0 {
                        result.push_str(&empty_squares.to_string());
                        empty_squares = 0;
                    }
                    result.push(piece.algebraic_symbol());
                },
                None => empty_squares += 1,
            }
        }
        if empty_squares != 0 {
            result.push_str(&empty_squares.to_string());
        }
        if rank != Rank::One {
            const RANK_SEPARATOR: char = '/';
            result.push(RANK_SEPARATOR);
        }
    }
    result.push(' ');
    result.push_str(&side_to_move.to_string());
    result.push(' ');
    result.push_str(&castling.to_string());
    result.push(' ');
    match en_passant_square {
        Some(square) => result.push_str(&square.to_string()),
        None => result.push('-'),
    }
    result
}
