//!
//! test of the grid hmm through the public API
//!
#[macro_use]
extern crate approx;

use gridhmm::common::{parse_colors, parse_moves, Coord, COLORS};
use gridhmm::evaluate::evaluate;
use gridhmm::grid::{GridWorld, Maze};
use gridhmm::hmm::{build_model, GridModel, SensorParams};
use gridhmm::prob::Prob;
use gridhmm::report::Report;
use gridhmm::simulate::Simulator;
use itertools::Itertools;

fn rooms() -> Maze {
    Maze::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/rooms.maz")).unwrap()
}

#[test]
fn hmm_demo_maze_file() {
    let maze = Maze::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/simple.maz")).unwrap();
    assert_eq!(maze, gridhmm::grid::mocks::mock_maze());
    assert_eq!(build_model(&maze).unwrap().n_states(), 14);
}

#[test]
fn hmm_maze_file_to_model() {
    let maze = rooms();
    assert_eq!(maze.width(), 8);
    assert_eq!(maze.height(), 5);
    let model = build_model(&maze).unwrap();
    assert_eq!(model.n_states(), maze.n_open());

    // ids are row-major from the bottom row
    assert_eq!(model.state_to_coord(0), Coord::new(0, 0));
    for s in 0..model.n_states() {
        let c = model.state_to_coord(s);
        assert_eq!(model.coord_to_state(c), Some(s));
        assert!(maze.is_open(c.x, c.y));
        assert_abs_diff_eq!(model.trans().row(s).sum(), 1.0, epsilon = 1e-9);
        let total: f64 = COLORS.iter().map(|&c| model.p_emit(s, c)).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
    }
    assert_eq!(model.coord_to_state(Coord::new(0, 3)), None);
    assert_eq!(model.coord_to_state(Coord::new(-1, 0)), None);
}

#[test]
fn hmm_simulated_run_is_decoded() {
    let maze = rooms();
    let model = build_model(&maze).unwrap();
    let prior = model.uniform_prior();
    for seed in 0..5 {
        let mut sim = Simulator::from_model(&model, &maze, seed);
        let moves = sim.random_moves(40);
        let t = sim.run(&moves);

        let f = model.filtering_pass(&prior, &t.observations).unwrap();
        let s = model.forward_backward_pass(&prior, &t.observations).unwrap();
        let v = model.viterbi(&prior, &t.observations).unwrap();
        assert_eq!(f.n_emissions(), 40);
        assert_eq!(s.n_emissions(), 40);
        assert_eq!(v.len(), 40);
        assert_abs_diff_eq!(s.table(40), f.last(), epsilon = 1e-12);

        // the true path is possible, so the best path is at least as likely
        let truth: Prob = model
            .path_score(&prior, &t.observations, t.emitting_states())
            .unwrap();
        assert!(v.score >= truth || abs_diff_eq!(v.score, truth, epsilon = 1e-9));
        for (&a, &b) in v.path.iter().tuple_windows() {
            assert!(model.p_trans(a, b) > 0.0);
        }
    }
}

#[test]
fn hmm_perfect_sensor_on_unique_colors() {
    let maze: Maze = "rgb\n".parse().unwrap();
    let model = GridModel::new(&maze, SensorParams::perfect()).unwrap();
    let prior = model.uniform_prior();
    let xs = parse_colors("rgbbgr").unwrap();
    let v = model.viterbi(&prior, &xs).unwrap();
    assert_eq!(v.path, vec![0, 1, 2, 2, 1, 0]);
    let s = model.forward_backward_pass(&prior, &xs).unwrap();
    assert_eq!(s.most_likely_per_step_path(), vec![0, 0, 1, 2, 2, 1, 0]);

    // an impossible reading gives zero beliefs instead of NaN
    let xs = parse_colors("ry").unwrap();
    let f = model.filtering_pass(&prior, &xs).unwrap();
    assert!(f.last().iter().all(|&p| p == 0.0));
    let v = model.viterbi(&prior, &xs).unwrap();
    assert!(v.score.is_zero());
}

#[test]
fn hmm_report_from_moves() {
    let maze: Maze = "rg#y\nbyrg\ng#br\nrgyb\n".parse().unwrap();
    let model = build_model(&maze).unwrap();
    let mut sim = Simulator::from_model(&model, &maze, 0);
    let moves = parse_moves("eswwneswwn").unwrap();
    let t = sim.run(&moves);
    let report = Report::new(maze.to_string(), &model, &t).unwrap();
    assert_eq!(report.motions, "eswwneswwn");
    assert_eq!(report.actual_path.len(), 11);
    assert_eq!(report.per_step_path.len(), 11);
    assert_eq!(report.viterbi_path.len(), 10);
    let text = report.to_string();
    assert!(text.contains("| step10 |"));
}

#[test]
fn hmm_evaluate_rooms() {
    let maze = rooms();
    let model = build_model(&maze).unwrap();
    let acc = evaluate(&model, &maze, *model.params(), 16, 25, 0).unwrap();
    println!("{}", acc);
    assert_eq!(acc.hits.n_steps, 16 * 25);
    // far better than guessing one of the open cells
    let guess = 1.0 / model.n_states() as f64;
    assert!(acc.smoothing > guess);
    assert!(acc.viterbi > guess);
}
