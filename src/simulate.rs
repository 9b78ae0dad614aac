//!
//! Simulated robot on a grid
//!
//! * the initial state is drawn uniformly from the open cells
//! * a move into a wall (or off the grid) keeps the robot in place
//! * the sensor reads the true color with `p_correct`, and each of the other
//!   three colors with `p_wrong`
//!
use crate::common::{Color, Coord, Direction, Observations, StateId, COLORS, DIRECTIONS};
use crate::grid::GridWorld;
use crate::hmm::model::GridModel;
use crate::hmm::params::SensorParams;
use log::{debug, warn};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

///
/// One simulated run
///
/// `states[0]` is the initial state and `states[t]` is the state after
/// `moves[t-1]`, which emitted `observations[t-1]`.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub moves: Vec<Direction>,
    pub states: Vec<StateId>,
    pub observations: Observations,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.observations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
    /// states that emitted the observations, `states[1..]`
    pub fn emitting_states(&self) -> &[StateId] {
        &self.states[1..]
    }
}

pub struct Simulator<'a, G: GridWorld> {
    model: &'a GridModel,
    grid: &'a G,
    params: SensorParams,
    rng: Xoshiro256PlusPlus,
}

impl<'a, G: GridWorld> Simulator<'a, G> {
    ///
    /// `params` is the noise of the simulated sensor, which can differ from
    /// the sensor the model assumes.
    ///
    pub fn new(model: &'a GridModel, grid: &'a G, params: SensorParams, seed: u64) -> Self {
        if params != *model.params() {
            warn!(
                "simulated sensor {} differs from the model sensor {}",
                params,
                model.params()
            );
        }
        Simulator {
            model,
            grid,
            params,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
    ///
    /// Simulator whose sensor matches the model
    ///
    pub fn from_model(model: &'a GridModel, grid: &'a G, seed: u64) -> Self {
        Simulator::new(model, grid, *model.params(), seed)
    }
    pub fn initial_state(&mut self) -> StateId {
        self.rng.gen_range(0..self.model.n_states())
    }
    ///
    /// State after trying to move toward `dir` from `state`
    ///
    pub fn step(&self, state: StateId, dir: Direction) -> StateId {
        let target: Coord = self.model.state_to_coord(state).step(dir);
        self.model.coord_to_state(target).unwrap_or(state)
    }
    ///
    /// Noisy color reading at `state`
    ///
    pub fn sense(&mut self, state: StateId) -> Color {
        let coord = self.model.state_to_coord(state);
        let truth = self.grid.color_at(coord.x, coord.y);
        match truth {
            Some(color) if self.rng.gen_bool(self.params.p_correct) => color,
            Some(color) => {
                // one of the other three colors, uniformly
                let shift = self.rng.gen_range(1..COLORS.len());
                COLORS[(color.index() + shift) % COLORS.len()]
            }
            None => COLORS[self.rng.gen_range(0..COLORS.len())],
        }
    }
    ///
    /// Run the moves from a random initial state
    ///
    pub fn run(&mut self, moves: &[Direction]) -> Trajectory {
        let mut state = self.initial_state();
        let mut states = Vec::with_capacity(moves.len() + 1);
        let mut observations = Vec::with_capacity(moves.len());
        states.push(state);
        for &dir in moves {
            state = self.step(state, dir);
            states.push(state);
            observations.push(self.sense(state));
        }
        debug!(
            "simulated n_moves={} start={} end={}",
            moves.len(),
            self.model.state_to_coord(states[0]),
            self.model.state_to_coord(state),
        );
        Trajectory {
            moves: moves.to_vec(),
            states,
            observations,
        }
    }
    ///
    /// `n` moves drawn uniformly from the four directions
    ///
    pub fn random_moves(&mut self, n: usize) -> Vec<Direction> {
        (0..n)
            .map(|_| DIRECTIONS[self.rng.gen_range(0..DIRECTIONS.len())])
            .collect()
    }
}
