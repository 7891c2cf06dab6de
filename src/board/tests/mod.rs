//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `movegen.rs` - Piece rules, castling, promotion and en passant
//! - `position.rs` - Rotation, move application and notation
//! - `eval.rs` - Move points and static value
//! - `search.rs` - Bound probes and iterative deepening
//! - `proptest.rs` - Property-based tests

mod eval;
mod position;
