//!
//! Grid world the robot moves on
//!
//! The HMM only needs to know which cells are open and which color each open
//! cell has. `GridWorld` abstracts that, `Maze` is the text-file backed
//! implementation and `mocks` has small hand-made grids for tests.
//!
pub mod maze;
pub mod mocks;

use crate::common::{Color, Coord};

pub use maze::Maze;

pub trait GridWorld {
    /// number of columns
    fn width(&self) -> usize;
    /// number of rows
    fn height(&self) -> usize;
    ///
    /// The robot can stand on `(x, y)`.
    /// Coordinates outside `0..width x 0..height` are never open.
    fn is_open(&self, x: i64, y: i64) -> bool;
    ///
    /// True floor color of `(x, y)`, or `None` if the cell is not open.
    fn color_at(&self, x: i64, y: i64) -> Option<Color>;

    fn is_open_at(&self, c: Coord) -> bool {
        self.is_open(c.x, c.y)
    }
    ///
    /// Number of open cells
    fn n_open(&self) -> usize {
        let mut n = 0;
        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                if self.is_open(x, y) {
                    n += 1;
                }
            }
        }
        n
    }
}

impl<G: GridWorld + ?Sized> GridWorld for &G {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn is_open(&self, x: i64, y: i64) -> bool {
        (**self).is_open(x, y)
    }
    fn color_at(&self, x: i64, y: i64) -> Option<Color> {
        (**self).color_at(x, y)
    }
}
