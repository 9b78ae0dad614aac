//!
//! Results of the inference passes
//!
//! * `FilteringTrace`: forward messages
//! * `SmoothingTrace`: forward-backward marginals
//! * `ViterbiResult`: most probable state sequence
//!
use super::smoothing::most_likely_per_step_path;
use crate::common::StateId;
use crate::matrix::{argmax, ProbVector};
use ndarray::Array2;
use serde::Serialize;

///
/// `tables[0]` is the prior and `tables[t]` is `P(state_t | x_1..x_t)`,
/// so the length is the number of emissions + 1.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteringTrace {
    pub tables: Vec<ProbVector>,
}

impl FilteringTrace {
    /// The number of emissions that this result stores.
    pub fn n_emissions(&self) -> usize {
        self.tables.len() - 1
    }
    pub fn table(&self, t: usize) -> &ProbVector {
        &self.tables[t]
    }
    /// belief after the last emission
    pub fn last(&self) -> &ProbVector {
        &self.tables[self.tables.len() - 1]
    }
    ///
    /// State of maximum belief at each step (including the prior at step 0)
    ///
    pub fn argmax_path(&self) -> Vec<StateId> {
        self.tables.iter().map(argmax).collect()
    }
}

///
/// `tables[t]` is `P(state_t | x_1..x_T)` for `t >= 1`.
/// `tables[0]` is all-zero, there is no evidence before the first step.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothingTrace {
    pub tables: Vec<ProbVector>,
}

impl SmoothingTrace {
    pub fn n_emissions(&self) -> usize {
        self.tables.len() - 1
    }
    pub fn table(&self, t: usize) -> &ProbVector {
        &self.tables[t]
    }
    /// see `smoothing::most_likely_per_step_path`
    pub fn most_likely_per_step_path(&self) -> Vec<StateId> {
        most_likely_per_step_path(self)
    }
}

///
/// Viterbi decoding result
///
/// * `path[t]` is the state at step `t + 1` (one per emission)
/// * `backpointers[[j, t]]` is the best predecessor of state `j` at `t`
/// * `score` is the joint probability of `path` and the emissions, in the
///   score domain `S` (`Prob` for log-space, `f64` for linear)
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViterbiResult<S> {
    pub path: Vec<StateId>,
    pub backpointers: Array2<StateId>,
    pub score: S,
}

impl<S> ViterbiResult<S> {
    pub fn len(&self) -> usize {
        self.path.len()
    }
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
