//!
//! Maze: a colored grid parsed from text
//!
//! ```text
//! rg#y
//! b#gr
//! ```
//!
//! * one line per row, the first line is the top (northmost) row
//! * `#` is a wall, `r`/`g`/`b`/`y` is an open cell of that color
//! * empty lines are skipped, every row must have the same width
//!
//! `y = 0` is the bottom row, so the example above has `(0,0) = b` and
//! `(0,1) = r`.
//!
use super::GridWorld;
use crate::common::Color;
use crate::error::{GridHmmError, Result};
use log::debug;
use std::convert::TryFrom;
use std::path::Path;
use std::str::FromStr;

pub const WALL: char = '#';

#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// `cells[y][x]`, `y = 0` is the bottom row.
    cells: Vec<Vec<Option<Color>>>,
}

impl Maze {
    ///
    /// Build from rows listed bottom row first.
    /// `None` is a wall.
    ///
    pub fn from_rows(cells: Vec<Vec<Option<Color>>>) -> Result<Maze> {
        let height = cells.len();
        // the top row is the reference width
        let width = cells.last().map_or(0, |row| row.len());
        for (y, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(GridHmmError::MazeParse {
                    line: height - y,
                    message: format!("row has width {} but expected {}", row.len(), width),
                });
            }
        }
        Ok(Maze {
            width,
            height,
            cells,
        })
    }
    ///
    /// Load a maze text file
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Maze> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let maze: Maze = text.parse()?;
        debug!(
            "loaded maze {} ({}x{}, {} open)",
            path.as_ref().display(),
            maze.width,
            maze.height,
            maze.n_open()
        );
        Ok(maze)
    }
    fn cell(&self, x: i64, y: i64) -> Option<Option<Color>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }
}

impl GridWorld for Maze {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn is_open(&self, x: i64, y: i64) -> bool {
        matches!(self.cell(x, y), Some(Some(_)))
    }
    fn color_at(&self, x: i64, y: i64) -> Option<Color> {
        self.cell(x, y).flatten()
    }
}

impl FromStr for Maze {
    type Err = GridHmmError;
    fn from_str(s: &str) -> Result<Maze> {
        let mut rows: Vec<Vec<Option<Color>>> = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                let n = line.chars().count();
                if n != first.len() {
                    return Err(GridHmmError::MazeParse {
                        line: i + 1,
                        message: format!("row has width {} but expected {}", n, first.len()),
                    });
                }
            }
            let row = line
                .chars()
                .map(|c| match c {
                    WALL => Ok(None),
                    c => Color::try_from(c).map(Some).map_err(|_| GridHmmError::MazeParse {
                        line: i + 1,
                        message: format!("unknown cell symbol {:?}", c),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        // first line is the top row
        rows.reverse();
        Maze::from_rows(rows)
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.cells.iter().rev() {
            for cell in row {
                match cell {
                    Some(color) => write!(f, "{}", color)?,
                    None => write!(f, "{}", WALL)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maze_parse() {
        let m: Maze = "rg#y\nb#gr\n".parse().unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 2);
        // bottom row
        assert_eq!(m.color_at(0, 0), Some(Color::Blue));
        assert!(!m.is_open(1, 0));
        assert_eq!(m.color_at(3, 0), Some(Color::Red));
        // top row
        assert_eq!(m.color_at(0, 1), Some(Color::Red));
        assert_eq!(m.color_at(1, 1), Some(Color::Green));
        assert!(!m.is_open(2, 1));
        // outside
        assert!(!m.is_open(-1, 0));
        assert!(!m.is_open(0, 2));
        assert!(!m.is_open(4, 0));
        assert_eq!(m.color_at(1, 0), None);
        assert_eq!(m.n_open(), 6);
        assert_eq!(m.to_string(), "rg#y\nb#gr\n");
    }
    #[test]
    fn maze_parse_errors() {
        match "rg\nr\n".parse::<Maze>() {
            Err(GridHmmError::MazeParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
        match "rg\nrx\n".parse::<Maze>() {
            Err(GridHmmError::MazeParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
        let empty: Maze = "\n\n".parse().unwrap();
        assert_eq!(empty.n_open(), 0);
    }
    #[test]
    fn maze_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rgby").unwrap();
        writeln!(file, "#r##").unwrap();
        let m = Maze::from_file(file.path()).unwrap();
        assert_eq!(m.n_open(), 5);
        assert_eq!(m.color_at(1, 0), Some(Color::Red));
        assert_eq!(m.color_at(3, 1), Some(Color::Yellow));

        assert!(matches!(
            Maze::from_file("/nonexistent/maze.maz"),
            Err(GridHmmError::Io(_))
        ));
    }
}
