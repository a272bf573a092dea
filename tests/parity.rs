//! Differential tests: the bitboard implementation and the map-backed
//! reference implementation must be indistinguishable through the public
//! interface.

use itertools::Itertools;
use pretty_assertions::assert_eq;
use tabia::rules::{perft, Rules};
use tabia::{mailbox, position, Move};

const POSITIONS: [&str; 10] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6",
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -",
    "r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq -",
    "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq -",
    "8/P7/8/8/8/8/8/k6K w - -",
    "7k/5Q2/6K1/8/8/8/8/8 b - -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "2r3r1/p3k3/pp3p2/1B5p/5P2/2pqp1P1/PPK4P/3R4 w - -",
    "2r3r1/3p3k/1p3pp1/1B5P/5P2/2P1pqP1/PP4KP/3R4 w - -",
];

fn sorted_moves<P: Rules>(position: &P) -> Vec<String> {
    position
        .generate_moves()
        .iter()
        .map(Move::to_string)
        .sorted()
        .collect()
}

#[test]
fn same_moves_and_verdicts() {
    for fen in POSITIONS {
        let fast = position::Position::from_fen(fen).expect("valid position");
        let reference = mailbox::Position::from_fen(fen).expect("valid position");
        assert_eq!(fast.to_string(), reference.to_string(), "{fen}");
        assert_eq!(sorted_moves(&fast), sorted_moves(&reference), "{fen}");
        assert_eq!(fast.in_check(), reference.in_check(), "{fen}");
        assert_eq!(fast.is_checkmate(), reference.is_checkmate(), "{fen}");
        assert_eq!(fast.side_to_move(), reference.side_to_move(), "{fen}");
    }
}

#[test]
fn same_piece_listings() {
    for fen in POSITIONS {
        let fast = position::Position::from_fen(fen).expect("valid position");
        let reference = mailbox::Position::from_fen(fen).expect("valid position");
        let mut fast_pieces = fast.pieces();
        let mut reference_pieces = reference.pieces();
        fast_pieces.sort_by_key(|(square, _)| *square as u8);
        reference_pieces.sort_by_key(|(square, _)| *square as u8);
        assert_eq!(fast_pieces, reference_pieces, "{fen}");
    }
}

/// Walks a deterministic game from each position, always playing the
/// lexicographically first move, and checks that both implementations stay in
/// lockstep the whole way.
#[test]
fn deterministic_walks_stay_in_lockstep() {
    for fen in POSITIONS {
        let mut fast = position::Position::from_fen(fen).expect("valid position");
        let mut reference = mailbox::Position::from_fen(fen).expect("valid position");
        for _ply in 0..40 {
            let moves = sorted_moves(&fast);
            assert_eq!(moves, sorted_moves(&reference), "{fen}");
            let Some(first) = moves.first() else {
                break;
            };
            let next_move = Move::from_uci(first).expect("moves print in parseable notation");
            fast = fast.play(next_move).expect("generated moves are legal");
            reference = reference.play(next_move).expect("generated moves are legal");
            assert_eq!(fast.to_string(), reference.to_string(), "{fen}: {next_move}");
        }
    }
}

#[test]
fn same_perft_counts() {
    let fast = position::Position::starting();
    let reference = mailbox::Position::starting();
    for depth in 0..=3 {
        assert_eq!(perft(&fast, depth), perft(&reference, depth), "{depth}");
    }
}
