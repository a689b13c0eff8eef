//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, MoveError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the eight three-in-a-row lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([usize; 3]);

impl Line {
    /// Returns the three cell indices of the line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a + 1, b + 1, c + 1)
    }
}

/// All winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    // Columns
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    // Diagonals
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// 3x3 tic-tac-toe board.
///
/// The board stores marks only; alternation of play is the engine's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from raw squares.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices of the empty squares, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Returns a copy with X and O swapped.
    pub fn relabeled(&self) -> Self {
        let mut squares = self.squares;
        for square in squares.iter_mut() {
            if let Square::Occupied(mark) = *square {
                *square = Square::Occupied(mark.opponent());
            }
        }
        Self { squares }
    }

    /// Formats the board in the compact notation accepted by `FromStr`.
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(11);
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push('|');
            }
            out.push(match square {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            });
        }
        out
    }

    /// Writes `mark` into an index known to be in range.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.squares[index] = Square::Occupied(mark);
    }

    /// Clears an index known to be in range.
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses the compact notation `"XO.|.X.|..O"`.
///
/// `X`/`O` in either case are marks; `.`, `-` and `_` are empty squares;
/// `|`, `/` and whitespace are separators.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELLS);
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::UnknownSymbol(other)),
            };
            squares.push(square);
        }

        let squares: [Square; CELLS] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Outcome of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty squares remain.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the outcome with the winning mark swapped.
    pub fn relabeled(&self) -> Self {
        match *self {
            Outcome::Win { mark, line } => Outcome::Win {
                mark: mark.opponent(),
                line,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win { mark, line } => write!(f, "{} wins on {}", mark, line),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Mark to move next (the last mover once the game is over).
    pub(crate) current: Mark,
    /// Outcome of `board`.
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Win/draw counters across games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games won by X.
    pub wins_x: u32,
    /// Games won by O.
    pub wins_o: u32,
    /// Drawn games.
    pub draws: u32,
}

impl ScoreTally {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player X: {}  Player O: {}  Draws: {}",
            self.wins_x, self.wins_o, self.draws
        )
    }
}
