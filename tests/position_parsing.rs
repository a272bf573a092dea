use pretty_assertions::assert_eq;
use tabia::position::Position;
use tabia::rules::Rules;
use tabia::{Piece, PieceKind, Player, Square};

fn check_round_trip(serialized_position: &str) {
    let position = Position::from_fen(serialized_position)
        .unwrap_or_else(|_| panic!("we are checking valid positions: {serialized_position}"));
    assert_eq!(position.to_string(), serialized_position);
}

#[test]
fn round_trips() {
    for serialized_position in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6",
        "r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq -",
        "8/P7/8/8/8/8/8/k6K w - -",
        "7k/5Q2/6K1/8/8/8/8/8 b - -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "4k3/8/8/8/8/8/8/4K2R w K -",
        "r3k3/8/8/8/8/8/8/4K3 b q -",
        "2r3r1/3p3k/1p3pp1/1B5P/5P2/2P1pqP1/PP4KP/3R4 w - -",
    ] {
        check_round_trip(serialized_position);
    }
}

#[test]
fn full_fen_is_normalized() {
    // Halfmove clock and fullmove counter are accepted but not modeled.
    let position =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 13 37").unwrap();
    assert_eq!(
        position.to_string(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
    );
    // Castling letters are normalized to the KQkq order.
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQK -").unwrap();
    assert_eq!(position.to_string(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let position =
        Position::try_from("  rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR   w  KQkq  -\n").unwrap();
    assert_eq!(
        position.to_string(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
    );
}

#[test]
fn rejects_malformed_input() {
    for serialized_position in [
        "",
        "what is this",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq -",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR W KQkq -",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq E3",
        "rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4",
        // Positions the engine refuses to reason about.
        "8/8/8/8/8/8/8/KK6 w - -",
        "k7/8/8/8/8/8/8/8 w - -",
        "kp6/8/8/8/8/8/8/KP6 w - -",
    ] {
        assert!(
            Position::from_fen(serialized_position).is_err(),
            "should be rejected: {serialized_position}"
        );
    }
}

#[test]
fn squares_parse_from_algebraic_notation() {
    assert_eq!(Square::try_from("e4").unwrap(), Square::E4);
    assert_eq!(Square::try_from("a1").unwrap(), Square::A1);
    assert_eq!(Square::try_from("h8").unwrap(), Square::H8);
    assert!(Square::try_from("j4").is_err());
    assert!(Square::try_from("e0").is_err());
}

#[test]
fn piece_listing_matches_placement() {
    let position = Position::from_fen("8/P7/8/8/8/8/8/k6K w - -").unwrap();
    let mut pieces = position.pieces();
    pieces.sort_by_key(|(square, _)| *square as u8);
    assert_eq!(
        pieces,
        vec![
            (
                Square::A1,
                Piece {
                    player: Player::Black,
                    kind: PieceKind::King,
                }
            ),
            (
                Square::H1,
                Piece {
                    player: Player::White,
                    kind: PieceKind::King,
                }
            ),
            (
                Square::A7,
                Piece {
                    player: Player::White,
                    kind: PieceKind::Pawn,
                }
            ),
        ]
    );
    assert_eq!(position.side_to_move(), Player::White);
}
