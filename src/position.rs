//! Go position: the board plus move history and the simple-ko marker.
//!
//! This module provides the authoritative game state:
//! - Setup (handicap) stones folded into the grid at construction
//! - Move application with capture resolution
//! - Simple ko: one point that may not be refilled immediately
//! - Group summaries and text coordinate conversion
//!
//! Suicide is not rejected here. A stone left without liberties stays on the
//! board; callers wanting strict rules check with `analyze_move` first.

use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, Census, Color, Group, Point};
use crate::constants::{COLUMN_LETTERS, MAX_SIZE};

/// Why a move or coordinate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Point is not on the board
    OutOfBounds(Point),
    /// Point is not empty
    Occupied(Point),
    /// Point is the current ko marker
    Ko(Point),
    /// Text is not a coordinate on this board
    InvalidCoord(String),
    /// Text is not a `<color> <coordinate|pass>` move entry
    InvalidMoveText(String),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds((r, c)) => {
                write!(f, "illegal move: ({r},{c}) is outside the board")
            }
            MoveError::Occupied((r, c)) => {
                write!(f, "illegal move: ({r},{c}) is already occupied")
            }
            MoveError::Ko((r, c)) => write!(f, "illegal move: ({r},{c}) retakes ko"),
            MoveError::InvalidCoord(text) => write!(f, "invalid coordinate: '{text}'"),
            MoveError::InvalidMoveText(text) => write!(f, "invalid move entry: '{text}'"),
        }
    }
}

impl std::error::Error for MoveError {}

/// One entry of the move history.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub point: Point,
    pub color: Color,
}

/// A Go position (board state).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    /// Moves applied through `play_move`, oldest first
    history: Vec<MoveRecord>,
    /// Point that may not be played next (set by single-stone captures)
    ko: Option<Point>,
}

impl Position {
    pub fn new(size: usize) -> Self {
        Position {
            board: Board::new(size),
            history: Vec::new(),
            ko: None,
        }
    }

    /// A position with setup stones already on the board. Setup stones are
    /// placed directly: no captures, no history. Off-board points are skipped.
    pub fn with_setup(size: usize, black: &[Point], white: &[Point]) -> Self {
        let mut pos = Position::new(size);
        let setup = black
            .iter()
            .map(|&pt| (pt, Color::Black))
            .chain(white.iter().map(|&pt| (pt, Color::White)));
        for (pt, color) in setup {
            if pos.board.contains(pt) {
                pos.board.set(pt, Some(color));
            } else {
                debug!(row = pt.0, col = pt.1, "skipping off-board setup stone");
            }
        }
        pos
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    pub fn group_at(&self, pt: Point) -> Option<Group> {
        self.board.group_at(pt)
    }

    pub fn groups(&self) -> Census {
        self.board.groups()
    }

    /// Reject off-board, occupied and ko points.
    pub fn check_playable(&self, pt: Point) -> Result<(), MoveError> {
        if !self.board.contains(pt) {
            return Err(MoveError::OutOfBounds(pt));
        }
        if self.board.get(pt).is_some() {
            return Err(MoveError::Occupied(pt));
        }
        if self.ko == Some(pt) {
            return Err(MoveError::Ko(pt));
        }
        Ok(())
    }

    /// Groups by color, largest first, with liberty counts.
    pub fn summary(&self) -> BoardSummary {
        let census = self.groups();
        let summarize = |groups: &[Group]| {
            let mut out: Vec<GroupSummary> = groups
                .iter()
                .map(|g| GroupSummary {
                    anchor: g.anchor(),
                    stones: g.size(),
                    liberties: g.liberty_count(),
                })
                .collect();
            out.sort_by(|a, b| b.stones.cmp(&a.stones));
            out
        };
        BoardSummary {
            size: self.size(),
            black: summarize(&census.black),
            white: summarize(&census.white),
        }
    }
}

/// Play a stone and resolve captures.
///
/// Fails without touching the position if the point is off-board, occupied
/// or the ko point. On success the ko marker is set to the captured point
/// when exactly one stone was captured, and cleared otherwise.
/// Returns the captured points.
pub fn play_move(pos: &mut Position, pt: Point, color: Color) -> Result<Vec<Point>, MoveError> {
    pos.check_playable(pt)?;

    let captured = pos.board.place_and_capture(pt, color);
    pos.ko = match captured.as_slice() {
        [single] => Some(*single),
        _ => None,
    };
    if !captured.is_empty() {
        debug!(
            color = %color,
            at = %str_coord(pt, pos.size()),
            count = captured.len(),
            "captured stones"
        );
    }
    if let Some(ko) = pos.ko {
        debug!(ko = %str_coord(ko, pos.size()), "ko marker set");
    }

    pos.history.push(MoveRecord { point: pt, color });
    trace!(n = pos.history.len(), color = %color, at = %str_coord(pt, pos.size()), "move applied");
    Ok(captured)
}

/// Summary line data for one group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSummary {
    pub anchor: Point,
    pub stones: usize,
    pub liberties: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSummary {
    pub size: usize,
    pub black: Vec<GroupSummary>,
    pub white: Vec<GroupSummary>,
}

impl fmt::Display for BoardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (color, groups) in [(Color::Black, &self.black), (Color::White, &self.white)] {
            writeln!(f, "{color} Groups:")?;
            if groups.is_empty() {
                writeln!(f, "  None")?;
                continue;
            }
            for (i, g) in groups.iter().enumerate() {
                writeln!(
                    f,
                    "  Group {} ({}): {} stones, {} liberties",
                    i + 1,
                    str_coord(g.anchor, self.size),
                    g.stones,
                    g.liberties
                )?;
            }
        }
        Ok(())
    }
}

/// Parse a coordinate string (e.g., "D4") into a Point on a board of `size`.
///
/// Columns use letters A-Z skipping I. Row numbers count up from the bottom
/// edge, so "A1" is the bottom-left corner, `(size - 1, 0)`.
pub fn parse_coord(text: &str, size: usize) -> Result<Point, MoveError> {
    let invalid = || MoveError::InvalidCoord(text.to_string());

    let s = text.trim().to_ascii_uppercase();
    if !s.is_ascii() || !(2..=3).contains(&s.len()) {
        return Err(invalid());
    }

    let (col_part, row_part) = s.split_at(1);
    let col = COLUMN_LETTERS
        .iter()
        .take(size.min(MAX_SIZE))
        .position(|&b| col_part.as_bytes().first() == Some(&b))
        .ok_or_else(invalid)?;

    if !row_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number: usize = row_part.parse().map_err(|_| invalid())?;
    if number == 0 || number > size {
        return Err(invalid());
    }

    Ok((size - number, col))
}

/// Convert a Point to a coordinate string (e.g., "D4").
pub fn str_coord((row, col): Point, size: usize) -> String {
    let letter = COLUMN_LETTERS.get(col).map_or('?', |&b| char::from(b));
    format!("{letter}{}", size.saturating_sub(row))
}
