//!
//! Basic types shared across the grid, the model and the simulator
//!
use crate::error::{GridHmmError, Result};
use derive_new::new;
use serde::Serialize;
use std::convert::TryFrom;

/// Dense id of a state (= open grid cell), `0 <= id < n_states`
pub type StateId = usize;

/// Observation sequence, one sensor reading per time step.
pub type Observations = Vec<Color>;

///
/// Cell coordinate on the grid.
///
/// `x` is the column and `y` is the row counted from the bottom.
/// Coordinates are signed so that neighbours of border cells can be probed.
///
#[derive(new, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    /// `|dx| + |dy|`
    pub fn manhattan(&self, other: &Coord) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
    /// the neighbouring coordinate in the direction
    pub fn step(&self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

///
/// Floor color of an open cell, and the symbol the sensor reports.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

///
/// All colors, in the order used by sensor noise cycling.
///
pub const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    /// position in `COLORS`
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
        }
    }
}

impl TryFrom<char> for Color {
    type Error = GridHmmError;
    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'r' => Ok(Color::Red),
            'g' => Ok(Color::Green),
            'b' => Ok(Color::Blue),
            'y' => Ok(Color::Yellow),
            _ => Err(GridHmmError::InvalidColorSymbol(c)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

///
/// Parse a sensor reading string such as `"rgby"`.
/// Whitespace is skipped.
///
pub fn parse_colors(s: &str) -> Result<Observations> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(Color::try_from)
        .collect()
}

///
/// Move command of the robot
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// `(dx, dy)`; north is `+y`
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GridHmmError;
    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'n' => Ok(Direction::North),
            'e' => Ok(Direction::East),
            's' => Ok(Direction::South),
            'w' => Ok(Direction::West),
            _ => Err(GridHmmError::InvalidMove(c)),
        }
    }
}

///
/// Parse a move string such as `"eswwn"`.
///
pub fn parse_moves(s: &str) -> Result<Vec<Direction>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(Direction::try_from)
        .collect()
}

/// Convert moves back into the `"eswwn"` form
pub fn moves_to_string(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.symbol()).collect()
}
