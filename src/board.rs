//! 2D board representation: stones, groups and liberties.
//!
//! Groups are never stored. Every query floods the current grid, so the
//! answer depends only on which cells hold which stones.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::constants::{COLUMN_LETTERS, ORTHOGONAL};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board point as zero-indexed `(row, col)`. Row 0 is the top row.
pub type Point = (usize, usize);

/// A maximal 4-connected set of same-colored stones with its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    /// Number of stones in the group.
    pub fn size(&self) -> usize {
        self.stones.len()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// Smallest member point. Two floods of the same group share an anchor.
    pub fn anchor(&self) -> Point {
        self.stones.first().copied().unwrap_or_default()
    }
}

/// All groups on a board, split by color, in row-major discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub black: Vec<Group>,
    pub white: Vec<Group>,
}

impl Census {
    pub fn of(&self, color: Color) -> &[Group] {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.black.iter().chain(self.white.iter())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `pt`, or `None` for empty and off-board points.
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !self.contains(pt) {
            return None;
        }
        self.cells[self.idx(pt)]
    }

    /// Overwrite a cell without any rule checks. Off-board points are ignored.
    pub(crate) fn set(&mut self, pt: Point, stone: Option<Color>) {
        if self.contains(pt) {
            let i = self.idx(pt);
            self.cells[i] = stone;
        }
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The point at `(row + dr, col + dc)` if it lies on the board.
    pub fn offset(&self, (row, col): Point, (dr, dc): (isize, isize)) -> Option<Point> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.contains((r, c)).then_some((r, c))
    }

    /// On-board orthogonal neighbors of `pt`.
    pub fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        ORTHOGONAL.iter().filter_map(move |&d| self.offset(pt, d))
    }

    /// The group containing `pt`, or `None` if the point is empty.
    pub fn group_at(&self, pt: Point) -> Option<Group> {
        let color = self.get(pt)?;
        let mut visited = vec![false; self.cells.len()];
        Some(self.flood(pt, color, &mut visited))
    }

    /// Every group on the board. Each stone is visited once.
    pub fn groups(&self) -> Census {
        let mut visited = vec![false; self.cells.len()];
        let mut census = Census::default();
        for row in 0..self.size {
            for col in 0..self.size {
                let pt = (row, col);
                let Some(color) = self.get(pt) else {
                    continue;
                };
                if visited[self.idx(pt)] {
                    continue;
                }
                let group = self.flood(pt, color, &mut visited);
                match color {
                    Color::Black => census.black.push(group),
                    Color::White => census.white.push(group),
                }
            }
        }
        census
    }

    /// Breadth-first search over same-colored stones from `start`.
    fn flood(&self, start: Point, color: Color, visited: &mut [bool]) -> Group {
        let mut stones = BTreeSet::from([start]);
        let mut liberties = BTreeSet::new();
        let mut queue = VecDeque::from([start]);
        visited[self.idx(start)] = true;

        while let Some(pt) = queue.pop_front() {
            for n in self.neighbors(pt) {
                match self.get(n) {
                    None => {
                        liberties.insert(n);
                    }
                    Some(c) if c == color => {
                        let i = self.idx(n);
                        if !visited[i] {
                            visited[i] = true;
                            stones.insert(n);
                            queue.push_back(n);
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        Group {
            color,
            stones,
            liberties,
        }
    }

    /// Place a stone and remove every adjacent opposing group left without
    /// liberties. All dead groups are found before any stone is lifted.
    ///
    /// Legality (bounds, occupancy, ko) is the caller's job. A suicidal
    /// stone stays on the board. Returns the captured points in order.
    pub(crate) fn place_and_capture(&mut self, pt: Point, color: Color) -> Vec<Point> {
        self.set(pt, Some(color));
        let opp = color.opponent();

        let dead: BTreeSet<Point> = self
            .neighbors(pt)
            .filter(|&n| self.get(n) == Some(opp))
            .filter_map(|n| self.group_at(n))
            .filter(|g| g.liberties.is_empty())
            .flat_map(|g| g.stones)
            .collect();

        for &p in &dead {
            self.set(p, None);
        }
        dead.into_iter().collect()
    }

    /// Text diagram with column letters and two-digit row numbers.
    /// `marker` is drawn as `S`.
    pub fn render(&self, marker: Option<Point>) -> String {
        let letters: Vec<String> = COLUMN_LETTERS
            .iter()
            .take(self.size)
            .map(|&b| char::from(b).to_string())
            .collect();

        let mut out = format!("   {}\n", letters.join(" "));
        for row in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|col| {
                    let ch = if marker == Some((row, col)) {
                        'S'
                    } else {
                        self.get((row, col)).map_or('.', Color::symbol)
                    };
                    ch.to_string()
                })
                .collect();
            out.push_str(&format!("{:02} {}\n", self.size - row, cells.join(" ")));
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_corner_stone_has_two_liberties() {
        let board = board_with(9, &[(0, 0)], &[]);
        let group = board.group_at((0, 0)).unwrap();
        assert_eq!(group.size(), 1);
        assert_eq!(group.liberty_count(), 2);
        assert_eq!(group.liberties, BTreeSet::from([(0, 1), (1, 0)]));
    }

    #[test]
    fn test_empty_point_has_no_group() {
        let board = Board::new(9);
        assert!(board.group_at((4, 4)).is_none());
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // X X
        // X .   <- (1,1) touches two stones of the same group
        let board = board_with(5, &[(0, 0), (0, 1), (1, 0)], &[]);
        let group = board.group_at((0, 0)).unwrap();
        assert_eq!(group.size(), 3);
        assert_eq!(
            group.liberties,
            BTreeSet::from([(0, 2), (1, 1), (2, 0)])
        );
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        let board = Board::new(3);
        assert_eq!(board.neighbors((0, 0)).count(), 2);
        assert_eq!(board.neighbors((0, 1)).count(), 3);
        assert_eq!(board.neighbors((1, 1)).count(), 4);
        assert_eq!(board.offset((0, 0), (-1, 0)), None);
        assert_eq!(board.offset((2, 2), (0, 1)), None);
    }

    #[test]
    fn test_census_splits_by_color() {
        let board = board_with(5, &[(0, 0), (0, 1), (4, 4)], &[(2, 2)]);
        let census = board.groups();
        assert_eq!(census.black.len(), 2);
        assert_eq!(census.white.len(), 1);
        assert_eq!(census.of(Color::Black)[0].size(), 2);
        assert_eq!(census.iter().map(Group::size).sum::<usize>(), 4);
    }

    #[test]
    fn test_capture_removes_only_dead_group() {
        // White (1,1) is surrounded on three sides; a second white stone at
        // (3,3) keeps its liberties.
        let mut board = board_with(5, &[(0, 1), (1, 0), (2, 1)], &[(1, 1), (3, 3)]);
        let captured = board.place_and_capture((1, 2), Color::Black);
        assert_eq!(captured, vec![(1, 1)]);
        assert_eq!(board.get((1, 1)), None);
        assert_eq!(board.get((3, 3)), Some(Color::White));
    }

    #[test]
    fn test_suicide_stays_on_board() {
        let mut board = board_with(5, &[(0, 1), (1, 0)], &[]);
        let captured = board.place_and_capture((0, 0), Color::White);
        assert!(captured.is_empty());
        assert_eq!(board.get((0, 0)), Some(Color::White));
        assert_eq!(board.group_at((0, 0)).unwrap().liberty_count(), 0);
    }

    #[test]
    fn test_render_marks_point() {
        let board = board_with(3, &[(0, 0)], &[(2, 2)]);
        let text = board.render(Some((1, 1)));
        assert_eq!(text, "   A B C\n03 X . .\n02 . S .\n01 . . O\n");
    }
}
