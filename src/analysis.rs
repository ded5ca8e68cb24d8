//! Classification of a candidate move.
//!
//! [`analyze_move`] never touches the live position. It copies the grid,
//! plays the stone on the copy, resolves captures there and drops the copy.
//! Tactical checks that need the result of the move read the copy; shape
//! and connectivity checks read the board as it was before the move.

use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Board, Color, Point};
use crate::constants::TENUKI_DISTANCE_SQ;
use crate::patterns::{Shape, matching_shapes};
use crate::position::{MoveError, Position};

/// Properties of one candidate move. Flags are independent; a move can be
/// both a capture and a connection, or form several shapes at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveAnalysis {
    /// Opposing stones removed by the move
    pub captures: usize,
    /// Liberties of the mover's group after captures
    pub liberties: usize,

    pub capture: bool,
    /// No liberties left and nothing captured. When set, only `capture`,
    /// `suicide` and `takes_ko` are evaluated.
    pub suicide: bool,
    pub self_atari: bool,
    pub atari: bool,
    pub connects: bool,
    pub cuts: bool,
    pub starts_ko: bool,
    pub takes_ko: bool,
    pub tenuki: bool,
    pub peep: bool,
    pub throw_in: bool,

    pub completes_empty_triangle: bool,
    pub completes_tiger_mouth: bool,
    pub completes_bamboo_joint: bool,

    pub one_point_jump: bool,
    pub knights_move: bool,
    pub diagonal: bool,
}

impl MoveAnalysis {
    /// Tactical flags that are set, by name.
    pub fn tactics(&self) -> Vec<&'static str> {
        set_flags(&[
            ("capture", self.capture),
            ("atari", self.atari),
            ("connects", self.connects),
            ("cuts", self.cuts),
            ("peep", self.peep),
            ("throw in", self.throw_in),
            ("starts ko", self.starts_ko),
            ("takes ko", self.takes_ko),
            ("tenuki", self.tenuki),
        ])
    }

    /// Basic shapes formed, by name.
    pub fn shapes(&self) -> Vec<&'static str> {
        set_flags(&[
            ("one point jump", self.one_point_jump),
            ("knights move", self.knights_move),
            ("diagonal", self.diagonal),
        ])
    }

    /// Completed shapes with their quality: `false` for bad shape.
    pub fn shape_quality(&self) -> Vec<(&'static str, bool)> {
        [
            ("empty triangle", self.completes_empty_triangle, false),
            ("tiger mouth", self.completes_tiger_mouth, true),
            ("bamboo joint", self.completes_bamboo_joint, true),
        ]
        .into_iter()
        .filter(|&(_, set, _)| set)
        .map(|(name, _, good)| (name, good))
        .collect()
    }

    fn set_shape(&mut self, shape: Shape) {
        match shape {
            Shape::Peep => self.peep = true,
            Shape::EmptyTriangle => self.completes_empty_triangle = true,
            Shape::TigerMouth => self.completes_tiger_mouth = true,
            Shape::BambooJoint => self.completes_bamboo_joint = true,
            Shape::OnePointJump => self.one_point_jump = true,
            Shape::KnightsMove => self.knights_move = true,
            Shape::Diagonal => self.diagonal = true,
        }
    }
}

fn set_flags(flags: &[(&'static str, bool)]) -> Vec<&'static str> {
    flags.iter().filter(|(_, set)| *set).map(|(name, _)| *name).collect()
}

impl fmt::Display for MoveAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suicide {
            return writeln!(f, "  Warning: suicide, the stone would have no liberties.");
        }
        if self.self_atari {
            writeln!(f, "  Warning: self-atari, the group is left with one liberty.")?;
        }

        let tactics = self.tactics();
        let shapes = self.shapes();
        let quality = self.shape_quality();
        if tactics.is_empty() && shapes.is_empty() && quality.is_empty() {
            writeln!(f, "  This appears to be a simple, non-special move.")?;
        }
        if !tactics.is_empty() {
            writeln!(f, "  Tactics:")?;
            for name in tactics {
                writeln!(f, "    - Is a {name} move.")?;
            }
        }
        if !shapes.is_empty() {
            writeln!(f, "  Basic Shape:")?;
            for name in shapes {
                writeln!(f, "    - Forms a {name}.")?;
            }
        }
        if !quality.is_empty() {
            writeln!(f, "  Shape Quality:")?;
            for (name, good) in quality {
                let verdict = if good { "Good Shape" } else { "Bad Shape" };
                writeln!(f, "    - {name} ({verdict})")?;
            }
        }
        Ok(())
    }
}

/// Classify `color` playing at `pt` without modifying `pos`.
///
/// Off-board, occupied and ko points are rejected with the same errors
/// `play_move` would return.
pub fn analyze_move(pos: &Position, pt: Point, color: Color) -> Result<MoveAnalysis, MoveError> {
    pos.check_playable(pt)?;
    let before = pos.board();
    let opp = color.opponent();

    let mut scratch = before.clone();
    let captured = scratch.place_and_capture(pt, color);
    let own = scratch.group_at(pt);
    let liberties = own.as_ref().map_or(0, |g| g.liberty_count());

    let mut a = MoveAnalysis {
        captures: captured.len(),
        liberties,
        capture: !captured.is_empty(),
        suicide: liberties == 0 && captured.is_empty(),
        takes_ko: pos.ko() == Some(pt),
        ..MoveAnalysis::default()
    };
    if a.suicide {
        return Ok(a);
    }

    a.self_atari = liberties == 1 && captured.is_empty();
    a.atari = scratch
        .neighbors(pt)
        .filter(|&n| scratch.get(n) == Some(opp))
        .filter_map(|n| scratch.group_at(n))
        .any(|g| g.liberty_count() == 1);

    a.connects = distinct_neighbor_groups(before, pt, color) > 1;
    a.cuts = distinct_neighbor_groups(before, pt, opp) > 1;

    if let (Some(own), [taken]) = (&own, captured.as_slice()) {
        a.starts_ko = own.size() == 1 && own.liberties.iter().eq([taken]);
    }

    // The one liberty a self-atari stone keeps is the only non-opposing neighbor.
    if let Some(own) = own.as_ref().filter(|_| a.self_atari) {
        a.throw_in = before
            .neighbors(pt)
            .all(|n| before.get(n) == Some(opp) || own.liberties.contains(&n));
    }
    a.tenuki = pos
        .last_move()
        .is_some_and(|last| distance_sq(last.point, pt) > TENUKI_DISTANCE_SQ);

    for shape in matching_shapes(before, pt, color) {
        a.set_shape(shape);
    }
    Ok(a)
}

/// Number of different `color` groups touching `pt`.
fn distinct_neighbor_groups(board: &Board, pt: Point, color: Color) -> usize {
    board
        .neighbors(pt)
        .filter(|&n| board.get(n) == Some(color))
        .filter_map(|n| board.group_at(n))
        .map(|g| g.anchor())
        .collect::<BTreeSet<_>>()
        .len()
}

fn distance_sq((r1, c1): Point, (r2, c2): Point) -> usize {
    let dr = r1.abs_diff(r2);
    let dc = c1.abs_diff(c2);
    dr * dr + dc * dc
}
