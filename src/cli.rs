//!
//! Subcommands of the `gridhmm` binary
//!
use crate::common::parse_moves;
use crate::error::Result;
use crate::evaluate::evaluate as evaluate_trials;
use crate::grid::Maze;
use crate::hmm::model::GridModel;
use crate::hmm::params::SensorParams;
use crate::report::Report;
use crate::simulate::Simulator;
use crate::utils::timer;
use log::info;
use std::path::Path;

fn sensor_params(accuracy: Option<f64>) -> Result<SensorParams> {
    match accuracy {
        Some(p) => SensorParams::from_accuracy(p),
        None => Ok(SensorParams::default()),
    }
}

///
/// Simulate one run on the maze and print the decoded paths.
///
/// The robot follows `moves` if given, otherwise `n_moves` random moves.
///
pub fn run(
    maze_path: &Path,
    moves: Option<&str>,
    n_moves: usize,
    seed: u64,
    accuracy: Option<f64>,
    json: bool,
) -> Result<()> {
    let maze = Maze::from_file(maze_path)?;
    let params = sensor_params(accuracy)?;
    let model = GridModel::new(&maze, params)?;

    let mut sim = Simulator::from_model(&model, &maze, seed);
    let moves = match moves {
        Some(s) => parse_moves(s)?,
        None => sim.random_moves(n_moves),
    };
    let trajectory = sim.run(&moves);

    let (report, t) = timer(|| Report::new(maze.to_string(), &model, &trajectory));
    let report = report?;
    info!("inference t={}ms", t);

    if json {
        let s = serde_json::to_string_pretty(&report)?;
        println!("{}", s);
    } else {
        println!("{}", report);
    }
    Ok(())
}

///
/// Run `n_trials` simulated runs in parallel and print the accuracy of each
/// decoder.
///
pub fn evaluate(
    maze_path: &Path,
    n_trials: usize,
    n_moves: usize,
    seed: u64,
    accuracy: Option<f64>,
) -> Result<()> {
    let maze = Maze::from_file(maze_path)?;
    let params = sensor_params(accuracy)?;
    let model = GridModel::new(&maze, params)?;
    println!("# n_states={}", model.n_states());
    println!("# sensor={}", params);

    let (result, t) = timer(|| evaluate_trials(&model, &maze, params, n_trials, n_moves, seed));
    let result = result?;
    println!("# evaluate t={}ms", t);
    println!("{}", result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::mocks::mock_maze;
    use std::io::Write;

    fn write_maze() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", mock_maze()).unwrap();
        file
    }

    #[test]
    fn cli_run() {
        let file = write_maze();
        run(file.path(), Some("eswwn"), 0, 0, None, false).unwrap();
        run(file.path(), None, 10, 1, Some(0.7), true).unwrap();
        assert!(run(file.path(), Some("exw"), 0, 0, None, false).is_err());
        assert!(run(file.path(), None, 3, 0, Some(1.5), false).is_err());
    }

    #[test]
    fn cli_evaluate() {
        let file = write_maze();
        evaluate(file.path(), 4, 10, 0, None).unwrap();
    }

    #[test]
    fn cli_missing_maze() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.maz");
        assert!(run(&path, None, 3, 0, None, false).is_err());
        assert!(evaluate(&path, 1, 3, 0, None).is_err());
    }
}
