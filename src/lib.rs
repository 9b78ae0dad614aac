//!
//! Exact Bayesian inference of the position of a robot on a colored grid
//!
//! * `grid`: the world (`GridWorld`, text `Maze`)
//! * `hmm`: model construction and the filtering / smoothing / Viterbi passes
//! * `simulate`: seeded robot simulation
//! * `report`, `evaluate`, `cli`: front-end of the `gridhmm` binary
//!
pub mod cli;
pub mod common;
pub mod error;
pub mod evaluate;
pub mod grid;
pub mod hmm;
pub mod matrix;
pub mod prob;
pub mod report;
pub mod simulate;
pub mod utils;

pub use error::{GridHmmError, Result};

#[macro_use]
extern crate approx;
