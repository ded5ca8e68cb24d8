//! Shape patterns around a candidate move.
//!
//! Each shape is drawn once as a 5x5 diagram centered on the candidate
//! point and expanded to all 8 board symmetries (rotations and reflections).
//! A shape matches when any of its orientations matches. All of an
//! orientation's requirements must hold, and a requirement that falls off
//! the board fails.
//!
//! Diagram characters, relative to the player making the move:
//! - `*`: the candidate point (no requirement)
//! - `X`: own stone
//! - `O`: opponent stone
//! - `.`: empty point
//! - `?`: anything, including off-board

use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::board::{Board, Color, Point};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// Opposing stones on two opposite sides: threatens to cut through.
    Peep,
    /// Two perpendicular own stones next to the move (bad shape).
    EmptyTriangle,
    /// Own stones on two diagonals sharing a side (good shape).
    TigerMouth,
    /// Fourth stone of two parallel one-point jumps (good shape).
    BambooJoint,
    /// Own stone two points away with the point between empty.
    OnePointJump,
    KnightsMove,
    Diagonal,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::Peep,
        Shape::EmptyTriangle,
        Shape::TigerMouth,
        Shape::BambooJoint,
        Shape::OnePointJump,
        Shape::KnightsMove,
        Shape::Diagonal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Peep => "peep",
            Shape::EmptyTriangle => "empty triangle",
            Shape::TigerMouth => "tiger mouth",
            Shape::BambooJoint => "bamboo joint",
            Shape::OnePointJump => "one point jump",
            Shape::KnightsMove => "knights move",
            Shape::Diagonal => "diagonal",
        }
    }
}

/// The shape diagrams. Row 2, column 2 is the candidate point.
const SHAPE_SRC: &[(Shape, [&str; 5])] = &[
    (Shape::Peep, ["?????", "??O??", "??*??", "??O??", "?????"]),
    (Shape::EmptyTriangle, ["?????", "??X??", "?X*??", "?????", "?????"]),
    (Shape::TigerMouth, ["?????", "?X???", "??*??", "?X???", "?????"]),
    (Shape::BambooJoint, ["?????", "?????", "X?*??", "X?X??", "?????"]),
    (Shape::OnePointJump, ["??X??", "??.??", "??*??", "?????", "?????"]),
    (Shape::KnightsMove, ["?????", "?????", "??*??", "????X", "?????"]),
    (Shape::Diagonal, ["?????", "?????", "??*??", "???X?", "?????"]),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Need {
    Own,
    Opponent,
    Empty,
}

impl Need {
    fn accepts(self, stone: Option<Color>, mover: Color) -> bool {
        match self {
            Need::Own => stone == Some(mover),
            Need::Opponent => stone == Some(mover.opponent()),
            Need::Empty => stone.is_none(),
        }
    }
}

type Offset = (isize, isize);

/// One orientation of a shape: every listed offset must satisfy its need.
type Pattern = Vec<(Offset, Need)>;

/// Static storage for the expanded pattern table, indexed like `Shape::ALL`.
static PATTERNS: OnceLock<Vec<Vec<Pattern>>> = OnceLock::new();

/// Does `mover` playing at `pt` form `shape`? The board is read as it is
/// before the move; `pt` itself is never inspected.
pub fn shape_matches(board: &Board, pt: Point, mover: Color, shape: Shape) -> bool {
    let table = PATTERNS.get_or_init(make_patterns);
    let Some(orientations) = Shape::ALL
        .iter()
        .position(|&s| s == shape)
        .and_then(|i| table.get(i))
    else {
        return false;
    };

    orientations.iter().any(|pattern| {
        pattern.iter().all(|&(d, need)| {
            board
                .offset(pt, d)
                .is_some_and(|p| need.accepts(board.get(p), mover))
        })
    })
}

/// Every shape `mover` forms by playing at `pt`.
pub fn matching_shapes(board: &Board, pt: Point, mover: Color) -> Vec<Shape> {
    Shape::ALL
        .into_iter()
        .filter(|&shape| shape_matches(board, pt, mover, shape))
        .collect()
}

fn make_patterns() -> Vec<Vec<Pattern>> {
    Shape::ALL
        .iter()
        .map(|&shape| {
            SHAPE_SRC
                .iter()
                .find(|(s, _)| *s == shape)
                .map(|(_, rows)| pat_enumerate(&parse_diagram(rows)))
                .unwrap_or_default()
        })
        .collect()
}

fn parse_diagram(rows: &[&str; 5]) -> Pattern {
    let mut pattern = Vec::new();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let need = match ch {
                'X' => Need::Own,
                'O' => Need::Opponent,
                '.' => Need::Empty,
                _ => continue,
            };
            pattern.push(((r as isize - 2, c as isize - 2), need));
        }
    }
    pattern
}

/// Enumerate all rotations and reflections of a pattern, without duplicates.
fn pat_enumerate(src: &Pattern) -> Vec<Pattern> {
    let mut seen = BTreeSet::new();
    for a in [src.clone(), rot90(src)] {
        for b in [a.clone(), vertflip(&a)] {
            for mut c in [b.clone(), horizflip(&b)] {
                c.sort();
                seen.insert(c);
            }
        }
    }
    seen.into_iter().collect()
}

fn rot90(p: &Pattern) -> Pattern {
    p.iter().map(|&((r, c), n)| ((c, -r), n)).collect()
}

fn vertflip(p: &Pattern) -> Pattern {
    p.iter().map(|&((r, c), n)| ((-r, c), n)).collect()
}

fn horizflip(p: &Pattern) -> Pattern {
    p.iter().map(|&((r, c), n)| ((r, -c), n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orientations(shape: Shape) -> usize {
        let table = PATTERNS.get_or_init(make_patterns);
        let i = Shape::ALL.iter().position(|&s| s == shape).unwrap();
        table[i].len()
    }

    fn board_with(size: usize, black: &[Point], white: &[Point]) -> Board {
        let mut board = Board::new(size);
        for &pt in black {
            board.set(pt, Some(Color::Black));
        }
        for &pt in white {
            board.set(pt, Some(Color::White));
        }
        board
    }

    #[test]
    fn test_symmetry_counts() {
        assert_eq!(orientations(Shape::Peep), 2);
        assert_eq!(orientations(Shape::EmptyTriangle), 4);
        assert_eq!(orientations(Shape::TigerMouth), 4);
        assert_eq!(orientations(Shape::BambooJoint), 8);
        assert_eq!(orientations(Shape::OnePointJump), 4);
        assert_eq!(orientations(Shape::KnightsMove), 8);
        assert_eq!(orientations(Shape::Diagonal), 4);
    }

    #[test]
    fn test_every_shape_has_a_diagram() {
        for shape in Shape::ALL {
            assert!(orientations(shape) > 0, "{} has no patterns", shape.name());
        }
    }

    #[test]
    fn test_empty_board_matches_nothing() {
        let board = Board::new(9);
        assert!(matching_shapes(&board, (4, 4), Color::Black).is_empty());
    }

    #[test]
    fn test_empty_triangle_all_orientations() {
        for (a, b) in [((3, 4), (4, 3)), ((3, 4), (4, 5)), ((5, 4), (4, 5)), ((5, 4), (4, 3))] {
            let board = board_with(9, &[a, b], &[]);
            assert!(
                shape_matches(&board, (4, 4), Color::Black, Shape::EmptyTriangle),
                "{a:?} {b:?}"
            );
            assert!(!shape_matches(&board, (4, 4), Color::White, Shape::EmptyTriangle));
        }
        // Two stones in a line are not a triangle.
        let board = board_with(9, &[(3, 4), (5, 4)], &[]);
        assert!(!shape_matches(&board, (4, 4), Color::Black, Shape::EmptyTriangle));
    }

    #[test]
    fn test_tiger_mouth() {
        let board = board_with(9, &[(3, 3), (5, 3)], &[]);
        assert!(shape_matches(&board, (4, 4), Color::Black, Shape::TigerMouth));
        let board = board_with(9, &[(3, 3), (5, 5)], &[]);
        assert!(!shape_matches(&board, (4, 4), Color::Black, Shape::TigerMouth));
    }

    #[test]
    fn test_bamboo_joint() {
        // X . X      row 3
        // X . *      row 4, move at (4,4)
        let board = board_with(9, &[(3, 2), (3, 4), (4, 2)], &[]);
        assert!(shape_matches(&board, (4, 4), Color::Black, Shape::BambooJoint));
        // Vertical: own stones at (2,4), (2,5), (4,5).
        let board = board_with(9, &[(2, 4), (2, 5), (4, 5)], &[]);
        assert!(shape_matches(&board, (4, 4), Color::Black, Shape::BambooJoint));
        let board = board_with(9, &[(3, 2), (4, 2)], &[]);
        assert!(!shape_matches(&board, (4, 4), Color::Black, Shape::BambooJoint));
    }

    #[test]
    fn test_one_point_jump_needs_gap() {
        let board = board_with(9, &[(4, 2)], &[]);
        assert!(shape_matches(&board, (4, 4), Color::Black, Shape::OnePointJump));

        let board = board_with(9, &[(4, 2), (4, 3)], &[]);
        assert!(!shape_matches(&board, (4, 4), Color::Black, Shape::OnePointJump));

        let board = board_with(9, &[(4, 2)], &[(4, 3)]);
        assert!(!shape_matches(&board, (4, 4), Color::Black, Shape::OnePointJump));
    }

    #[test]
    fn test_knights_move_and_diagonal() {
        let board = board_with(9, &[(2, 3)], &[]);
        assert_eq!(matching_shapes(&board, (4, 4), Color::Black), vec![Shape::KnightsMove]);

        let board = board_with(9, &[(5, 5)], &[]);
        assert_eq!(matching_shapes(&board, (4, 4), Color::Black), vec![Shape::Diagonal]);
    }

    #[test]
    fn test_peep_uses_opponent_stones() {
        let board = board_with(9, &[], &[(4, 3), (4, 5)]);
        assert!(shape_matches(&board, (4, 4), Color::Black, Shape::Peep));
        assert!(!shape_matches(&board, (4, 4), Color::White, Shape::Peep));
    }

    #[test]
    fn test_off_board_requirement_fails() {
        // Corner move: the jump partner would be off the board on three sides.
        let board = board_with(9, &[(0, 2)], &[]);
        assert!(shape_matches(&board, (0, 0), Color::Black, Shape::OnePointJump));
        let board = Board::new(9);
        assert!(!shape_matches(&board, (0, 0), Color::Black, Shape::OnePointJump));
    }
}
