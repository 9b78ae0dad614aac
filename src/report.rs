//!
//! Summary of one simulated run and its decoded paths
//!
//! `Display` prints a console report (maze, motions, the three paths and
//! the two distribution tables), `Serialize` is used for `--json` output.
//!
use crate::common::{moves_to_string, Coord, StateId};
use crate::error::Result;
use crate::hmm::model::GridModel;
use crate::hmm::params::SensorParams;
use crate::hmm::result::{FilteringTrace, SmoothingTrace};
use crate::matrix::ProbVector;
use crate::prob::Prob;
use crate::simulate::Trajectory;
use itertools::Itertools;
use serde::Serialize;

/// placeholder printed for a step without a decoded state
const NO_STATE: &str = "(-,-)";

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub maze: String,
    pub sensor: SensorParams,
    pub motions: String,
    pub observations: String,
    /// coordinate of each state id, the column order of the tables
    pub coords: Vec<Coord>,
    /// true positions, including the initial one
    pub actual_path: Vec<Coord>,
    /// argmax of the smoothed distribution at each step
    pub per_step_path: Vec<Coord>,
    /// one state per observation, from step 1
    pub viterbi_path: Vec<Coord>,
    pub viterbi_score: Prob,
    pub filtering: FilteringTrace,
    pub smoothing: SmoothingTrace,
}

impl Report {
    ///
    /// Decode the trajectory with the uniform prior
    ///
    pub fn new(maze: String, model: &GridModel, trajectory: &Trajectory) -> Result<Report> {
        let prior = model.uniform_prior();
        let xs = &trajectory.observations;
        let filtering = model.filtering_pass(&prior, xs)?;
        let smoothing = model.forward_backward_pass(&prior, xs)?;
        let viterbi = model.viterbi(&prior, xs)?;

        let to_coords = |states: &[StateId]| -> Vec<Coord> {
            states.iter().map(|&s| model.state_to_coord(s)).collect()
        };

        Ok(Report {
            maze,
            sensor: *model.params(),
            motions: moves_to_string(&trajectory.moves),
            observations: xs.iter().map(|c| c.symbol()).collect(),
            coords: model.index().iter().map(|(_, c)| c).collect(),
            actual_path: to_coords(&trajectory.states),
            per_step_path: to_coords(&smoothing.most_likely_per_step_path()),
            viterbi_path: to_coords(&viterbi.path),
            viterbi_score: viterbi.score,
            filtering,
            smoothing,
        })
    }
    fn fmt_table(&self, f: &mut std::fmt::Formatter, tables: &[ProbVector]) -> std::fmt::Result {
        writeln!(
            f,
            "| steps | {} |",
            self.coords.iter().map(|c| format!("{:^9}", c.to_string())).join(" | ")
        )?;
        for (t, table) in tables.iter().enumerate() {
            writeln!(
                f,
                "| step{} | {} |",
                t,
                table.iter().map(|p| format!("{:.7}", p)).join(" | ")
            )?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let path = |cs: &[Coord]| cs.iter().join("");
        writeln!(f, "maze:")?;
        write!(f, "{}", self.maze)?;
        writeln!(f, "sensor: {}", self.sensor)?;
        writeln!(f, "motions: {}", self.motions)?;
        writeln!(f, "observations: {}", self.observations)?;
        writeln!(f, "{:<15}{}", "actual path:", path(&self.actual_path))?;
        writeln!(f, "{:<15}{}", "per-step path:", path(&self.per_step_path))?;
        // viterbi has no state at step 0
        writeln!(
            f,
            "{:<15}{}{}",
            "viterbi path:",
            NO_STATE,
            path(&self.viterbi_path)
        )?;
        writeln!(f, "viterbi score: {}", self.viterbi_score)?;
        writeln!(f)?;
        writeln!(f, "smoothing distribution:")?;
        self.fmt_table(f, &self.smoothing.tables)?;
        writeln!(f)?;
        writeln!(f, "filtering distribution:")?;
        self.fmt_table(f, &self.filtering.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::parse_moves;
    use crate::grid::mocks::*;
    use crate::hmm::model::build_model;
    use crate::simulate::Simulator;

    fn corridor_report() -> Report {
        let maze = mock_corridor();
        let model = build_model(&maze).unwrap();
        let trajectory = Trajectory {
            moves: parse_moves("e").unwrap(),
            states: vec![0, 1],
            observations: vec![crate::common::Color::Green],
        };
        Report::new(maze.to_string(), &model, &trajectory).unwrap()
    }

    #[test]
    fn report_paths() {
        let r = corridor_report();
        assert_eq!(r.motions, "e");
        assert_eq!(r.observations, "g");
        assert_eq!(r.coords.len(), 3);
        assert_eq!(r.actual_path, vec![Coord::new(0, 0), Coord::new(1, 0)]);
        assert_eq!(r.per_step_path, vec![Coord::new(0, 0), Coord::new(1, 0)]);
        assert_eq!(r.viterbi_path, vec![Coord::new(1, 0)]);
    }

    #[test]
    fn report_display() {
        let s = corridor_report().to_string();
        println!("{}", s);
        assert!(s.contains("actual path:   (0,0)(1,0)"));
        assert!(s.contains("per-step path: (0,0)(1,0)"));
        assert!(s.contains("viterbi path:  (-,-)(1,0)"));
        assert!(s.contains("| step0 | 0.0000000 | 0.0000000 | 0.0000000 |"));
        // filtering step0 is the uniform prior
        assert!(s.contains("| step0 | 0.3333333 | 0.3333333 | 0.3333333 |"));
    }

    #[test]
    fn report_paths_are_aligned() {
        let maze = mock_maze();
        let model = build_model(&maze).unwrap();
        let mut sim = Simulator::from_model(&model, &maze, 5);
        let moves = sim.random_moves(7);
        let r = Report::new(maze.to_string(), &model, &sim.run(&moves)).unwrap();
        let s = r.to_string();
        let lines: Vec<&str> = s
            .lines()
            .filter(|l| l.contains(" path:"))
            .collect();
        assert_eq!(lines.len(), 3);
        // same number of steps, and step t starts at the same column
        let width = lines[0].len();
        for line in lines.iter() {
            assert_eq!(line.len(), width);
            assert_eq!(line.matches('(').count(), 8);
        }
    }

    #[test]
    fn report_json() {
        let maze = mock_maze();
        let model = build_model(&maze).unwrap();
        let mut sim = Simulator::from_model(&model, &maze, 2);
        let moves = sim.random_moves(5);
        let trajectory = sim.run(&moves);
        let r = Report::new(maze.to_string(), &model, &trajectory).unwrap();
        let json: serde_json::Value = serde_json::to_value(&r).unwrap();
        assert_eq!(json["actual_path"].as_array().unwrap().len(), 6);
        assert_eq!(json["viterbi_path"].as_array().unwrap().len(), 5);
        assert_eq!(json["filtering"]["tables"].as_array().unwrap().len(), 6);
        assert!(json["viterbi_score"].is_string());
    }
}
