//!
//! Definition of the grid HMM and its construction from a `GridWorld`
//!
use super::index::StateIndex;
use super::params::{SensorParams, EPSILON};
use crate::common::{Color, Coord, StateId, COLORS, DIRECTIONS};
use crate::error::{GridHmmError, Result};
use crate::grid::GridWorld;
use crate::matrix::{normalize_row, transpose, Matrix, ProbVector};
use log::{debug, info};
use ndarray::prelude::*;

/// Probability of attempting each of the four cardinal moves.
pub const P_MOVE: f64 = 0.25;

///
/// HMM of a robot on a colored grid
///
/// * states: open cells (see `StateIndex`)
/// * transition: the robot picks one of 4 directions uniformly; a blocked
///   direction keeps it in place.
/// * emission: the color sensor (see `SensorParams`)
///
/// Immutable after construction and shareable between threads.
///
#[derive(Debug, Clone)]
pub struct GridModel {
    index: StateIndex,
    params: SensorParams,
    /// `trans[[i, j]] = P(next = j | now = i)`
    trans: Matrix,
    /// `trans^T`, used by the forward update
    trans_t: Matrix,
    /// per-color observation likelihood, indexed by `Color::index`
    emissions: [ProbVector; 4],
}

///
/// Build the model with the default sensor parameters.
///
pub fn build_model<G: GridWorld>(grid: &G) -> Result<GridModel> {
    GridModel::new(grid, SensorParams::default())
}

impl GridModel {
    ///
    /// Build the transition matrix and observation vectors from the grid.
    ///
    /// Fails with `EmptyModel` if the grid has no open cell, and with
    /// `MalformedTransition`/`MalformedSensor` if a row of the model is not a
    /// distribution.
    ///
    pub fn new<G: GridWorld>(grid: &G, params: SensorParams) -> Result<GridModel> {
        let index = StateIndex::from_grid(grid);
        if index.is_empty() {
            return Err(GridHmmError::EmptyModel);
        }
        let n = index.n_states();

        let trans = Array2::from_shape_fn((n, n), |(i, j)| {
            transition_probability(grid, index.coord(i), index.coord(j))
        });
        let emissions = COLORS.map(|color| {
            Array1::from_shape_fn(n, |i| {
                let c = index.coord(i);
                sensor_probability(&params, grid.color_at(c.x, c.y), color)
            })
        });
        let trans_t = transpose(&trans);

        let model = GridModel {
            index,
            params,
            trans,
            trans_t,
            emissions,
        };
        model.check()?;
        info!("built grid model n_states={} ({})", n, params);
        Ok(model)
    }
    ///
    /// Assert that every transition row and every per-state set of
    /// observation likelihoods sums to one.
    ///
    fn check(&self) -> Result<()> {
        for (i, row) in self.trans.outer_iter().enumerate() {
            let sum = row.sum();
            debug!("trans row {} {} sum={}", i, self.index.coord(i), sum);
            if (sum - 1.0).abs() > EPSILON {
                return Err(GridHmmError::MalformedTransition { state: i, sum });
            }
        }
        for i in 0..self.n_states() {
            let sum: f64 = self.emissions.iter().map(|e| e[i]).sum();
            if (sum - 1.0).abs() > EPSILON {
                return Err(GridHmmError::MalformedSensor { state: i, sum });
            }
        }
        Ok(())
    }
    pub fn n_states(&self) -> usize {
        self.index.n_states()
    }
    pub fn index(&self) -> &StateIndex {
        &self.index
    }
    pub fn params(&self) -> &SensorParams {
        &self.params
    }
    /// Transition matrix `T` (rows are "from" distributions)
    pub fn trans(&self) -> &Matrix {
        &self.trans
    }
    /// `T^T`
    pub fn trans_transposed(&self) -> &Matrix {
        &self.trans_t
    }
    pub fn p_trans(&self, from: StateId, to: StateId) -> f64 {
        self.trans[[from, to]]
    }
    ///
    /// Likelihood vector `O_c[i] = P(sensor reads c | state i)`
    ///
    pub fn emission(&self, color: Color) -> &ProbVector {
        &self.emissions[color.index()]
    }
    pub fn p_emit(&self, state: StateId, color: Color) -> f64 {
        self.emissions[color.index()][state]
    }
    pub fn state_to_coord(&self, id: StateId) -> Coord {
        self.index.coord(id)
    }
    pub fn coord_to_state(&self, coord: Coord) -> Option<StateId> {
        self.index.state(coord)
    }
    ///
    /// Uniform prior `1/N` over all states
    ///
    pub fn uniform_prior(&self) -> ProbVector {
        let n = self.n_states();
        Array1::from_elem(n, 1.0 / n as f64)
    }
    ///
    /// Prior proportional to nonnegative `weights` (one per state)
    ///
    pub fn prior_from_weights(&self, weights: &ProbVector) -> Result<ProbVector> {
        if weights.len() != self.n_states() {
            return Err(GridHmmError::DimensionMismatch {
                op: "prior_from_weights",
                left: (weights.len(), 1),
                right: (self.n_states(), 1),
            });
        }
        if weights.iter().any(|&w| w < 0.0) || weights.sum() <= 0.0 {
            return Err(GridHmmError::InvalidParams(
                "prior weights must be nonnegative with a positive sum".to_string(),
            ));
        }
        let row = weights.view().insert_axis(Axis(0)).to_owned();
        Ok(normalize_row(&row)?.row(0).to_owned())
    }
    ///
    /// Prior concentrated on a single state
    ///
    pub fn point_prior(&self, state: StateId) -> ProbVector {
        let mut v = Array1::zeros(self.n_states());
        v[state] = 1.0;
        v
    }
}

///
/// `P(next = to | now = from)` on the grid.
///
/// * neighbour (Manhattan distance 1): `1/4`, the direction was chosen
/// * same cell: `(number of blocked directions) / 4`
/// * otherwise 0
///
pub fn transition_probability<G: GridWorld>(grid: &G, from: Coord, to: Coord) -> f64 {
    match from.manhattan(&to) {
        0 => {
            let n_blocked = DIRECTIONS
                .iter()
                .filter(|&&d| !grid.is_open_at(from.step(d)))
                .count();
            n_blocked as f64 * P_MOVE
        }
        1 => P_MOVE,
        _ => 0.0,
    }
}

///
/// `P(sensor reads observed | true color)`
///
pub fn sensor_probability(params: &SensorParams, truth: Option<Color>, observed: Color) -> f64 {
    if truth == Some(observed) {
        params.p_correct
    } else {
        params.p_wrong
    }
}
