//!
//! Mock grids for testing
//!
use super::Maze;

///
/// Three cell corridor `(0,0)-(1,0)-(2,0)` colored red, green, blue.
///
/// ```text
/// rgb
/// ```
///
pub fn mock_corridor() -> Maze {
    parse("rgb")
}

///
/// 4x4 maze with walls, the layout used in the command line demo.
///
/// ```text
/// rg#y
/// byrg
/// g#br
/// rgyb
/// ```
///
pub fn mock_maze() -> Maze {
    parse("rg#y\nbyrg\ng#br\nrgyb\n")
}

///
/// Small fully open 2x2 square, every cell a different color.
///
/// ```text
/// by
/// rg
/// ```
///
pub fn mock_square() -> Maze {
    parse("by\nrg\n")
}

///
/// 3x2 grid with two cells sharing the same color and a wall.
///
/// ```text
/// rr#
/// gbr
/// ```
///
pub fn mock_ambiguous() -> Maze {
    parse("rr#\ngbr\n")
}

///
/// Grid without open cells
///
pub fn mock_walls_only() -> Maze {
    parse("###\n###\n")
}

fn parse(s: &str) -> Maze {
    s.parse().unwrap()
}
