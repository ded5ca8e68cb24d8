//! Goshape: a Go board-state engine with move classification.
//!
//! The engine keeps an NxN grid, the move history and a simple-ko marker.
//! It answers group and liberty queries, applies moves with captures, and
//! classifies candidate moves (atari, connection, cut, shapes, ko, ...).
//! Everything is synchronous and deterministic; there is no I/O.
//!
//! ## Modules
//!
//! - [`constants`] - Size limits, coordinate letters, thresholds
//! - [`board`] - Grid, groups, liberties and capture resolution
//! - [`position`] - Game state, move application, summaries, coordinates
//! - [`patterns`] - Declarative shape table and matcher
//! - [`analysis`] - Non-mutating classification of a candidate move
//! - [`record`] - Replaying setup stones and move lists
//!
//! ## Example
//!
//! ```
//! use goshape::analysis::analyze_move;
//! use goshape::board::Color;
//! use goshape::position::{Position, parse_coord, play_move};
//!
//! let mut pos = Position::new(9);
//! play_move(&mut pos, parse_coord("C3", 9).unwrap(), Color::Black).unwrap();
//!
//! let jump = parse_coord("E3", 9).unwrap();
//! let analysis = analyze_move(&pos, jump, Color::Black).unwrap();
//! assert!(analysis.one_point_jump);
//! println!("{}", pos.summary());
//! ```

pub mod analysis;
pub mod board;
pub mod constants;
pub mod patterns;
pub mod position;
pub mod record;
