//! Game records: setup stones plus an ordered move list, replayed onto a
//! [`Position`].
//!
//! A record is what a game file reader hands over: board size, handicap
//! stones, moves (passes included) and optionally whose turn it is at the
//! start. Passes are skipped when replaying; the engine has no pass move.

use tracing::warn;

use crate::board::{Color, Point};
use crate::position::{MoveError, Position, parse_coord, play_move};

/// One move of a record. `None` is a pass.
pub type RecordMove = (Color, Option<Point>);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub size: usize,
    pub setup_black: Vec<Point>,
    pub setup_white: Vec<Point>,
    pub moves: Vec<RecordMove>,
    /// Player to move first, when the record says so explicitly
    pub first_player: Option<Color>,
}

/// Outcome of replaying a record.
#[derive(Clone, Debug)]
pub struct Replay {
    pub position: Position,
    /// Index into `moves` and error of the move that stopped the replay
    pub halted: Option<(usize, MoveError)>,
    /// Whose turn it is in `position`
    pub next_player: Color,
}

impl GameRecord {
    pub fn new(size: usize) -> Self {
        GameRecord {
            size,
            ..GameRecord::default()
        }
    }

    /// Player to move before any move is played. Handicap games with no
    /// explicit player start with White.
    pub fn initial_player(&self) -> Color {
        match self.first_player {
            Some(color) => color,
            None if !self.setup_black.is_empty() => Color::White,
            None => Color::Black,
        }
    }

    /// Apply setup stones, then the moves in order. Stops at the first
    /// illegal move and keeps the position reached before it.
    pub fn replay(&self) -> Replay {
        let mut position = Position::with_setup(self.size, &self.setup_black, &self.setup_white);
        let mut next_player = self.initial_player();

        for (i, &(color, point)) in self.moves.iter().enumerate() {
            if let Some(pt) = point {
                if let Err(err) = play_move(&mut position, pt, color) {
                    warn!(index = i, color = %color, error = %err, "illegal move in record, replay stopped");
                    return Replay {
                        position,
                        halted: Some((i, err)),
                        next_player,
                    };
                }
            }
            next_player = color.opponent();
        }

        Replay {
            position,
            halted: None,
            next_player,
        }
    }
}

/// Parse a list of coordinates separated by commas or whitespace.
pub fn parse_points(text: &str, size: usize) -> Result<Vec<Point>, MoveError> {
    text.split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_coord(s, size))
        .collect()
}

/// Parse moves like `"B D4, W Q16, B pass"`. Entries are separated by commas
/// or semicolons; colors may be `b`, `w`, `black` or `white`.
pub fn parse_moves(text: &str, size: usize) -> Result<Vec<RecordMove>, MoveError> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| parse_move(entry, size))
        .collect()
}

fn parse_move(entry: &str, size: usize) -> Result<RecordMove, MoveError> {
    let invalid = || MoveError::InvalidMoveText(entry.to_string());

    let mut parts = entry.split_whitespace();
    let (Some(color), Some(vertex), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let color = parse_color(color).ok_or_else(invalid)?;
    if vertex.eq_ignore_ascii_case("pass") {
        return Ok((color, None));
    }
    Ok((color, Some(parse_coord(vertex, size)?)))
}

/// Parse `b`, `w`, `black` or `white` in any case.
pub fn parse_color(text: &str) -> Option<Color> {
    match text.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("B D4, w pass; White a9", 9).unwrap();
        assert_eq!(
            moves,
            vec![
                (Color::Black, Some((5, 3))),
                (Color::White, None),
                (Color::White, Some((0, 0))),
            ]
        );
        assert!(parse_moves("", 9).unwrap().is_empty());
    }

    #[test]
    fn test_parse_moves_errors() {
        assert_eq!(
            parse_moves("B", 9),
            Err(MoveError::InvalidMoveText("B".into()))
        );
        assert_eq!(
            parse_moves("red D4", 9),
            Err(MoveError::InvalidMoveText("red D4".into()))
        );
        assert_eq!(
            parse_moves("B D4 E5", 9),
            Err(MoveError::InvalidMoveText("B D4 E5".into()))
        );
        assert_eq!(
            parse_moves("B Z4", 9),
            Err(MoveError::InvalidCoord("Z4".into()))
        );
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(
            parse_points("D4,Q16  c3", 19),
            Ok(vec![(15, 3), (3, 15), (16, 2)])
        );
    }

    #[test]
    fn test_initial_player() {
        let mut record = GameRecord::new(9);
        assert_eq!(record.initial_player(), Color::Black);
        record.setup_black = vec![(2, 2), (6, 6)];
        assert_eq!(record.initial_player(), Color::White);
        record.first_player = Some(Color::Black);
        assert_eq!(record.initial_player(), Color::Black);
    }

    #[test]
    fn test_replay_skips_passes() {
        let mut record = GameRecord::new(9);
        record.moves = vec![
            (Color::Black, Some((4, 4))),
            (Color::White, None),
            (Color::Black, Some((2, 2))),
        ];
        let replay = record.replay();
        assert!(replay.halted.is_none());
        assert_eq!(replay.position.history().len(), 2);
        assert_eq!(replay.next_player, Color::White);
    }

    #[test]
    fn test_replay_halts_on_illegal_move() {
        let mut record = GameRecord::new(9);
        record.setup_black = vec![(4, 4)];
        record.moves = vec![
            (Color::White, Some((3, 3))),
            (Color::Black, Some((4, 4))),
            (Color::White, Some((5, 5))),
        ];
        let replay = record.replay();
        assert_eq!(replay.halted, Some((1, MoveError::Occupied((4, 4)))));
        assert_eq!(replay.position.history().len(), 1);
        assert_eq!(replay.position.board().get((5, 5)), None);
        assert_eq!(replay.next_player, Color::Black);
    }
}
