//! Chess board representation and legal move engine: enumerates every legal
//! move in a position, executes a chosen move producing a new position,
//! decides check and checkmate and round-trips positions through
//! [Forsyth-Edwards Notation].
//!
//! Two implementations sit behind the same [`rules::Rules`] interface:
//!
//! - [`position::Position`] is the default, bitboard-backed one with
//!   branch-light sliding-piece attack generation;
//! - [`mailbox::Position`] is a square-centric reference implementation kept
//!   deliberately simple.
//!
//! ```
//! use tabia::position::Position;
//!
//! let position = Position::starting();
//! assert_eq!(position.generate_moves().len(), 20);
//! assert_eq!(
//!     position.to_string(),
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
//! );
//! ```
//!
//! [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation

// Rustc lints.
#![warn(
    missing_docs,
    variant_size_differences,
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery
)]
// Performance is important for the bitboard path.
#![deny(clippy::perf)]

pub mod attacks;
pub mod bitboard;
pub mod core;
pub mod mailbox;
pub mod position;
pub mod rules;

mod fen;

pub use crate::core::{
    CastleRights,
    CastlingSide,
    File,
    Move,
    MoveList,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
};
pub use crate::position::Position;
pub use crate::rules::{perft, Rules};
