//!
//! Forward-backward algorithm (smoothing)
//!
//! ```text
//! s_t ∝ a_t ⊙ b_t    (1 <= t <= T)
//! s_0 = 0
//! ```
//!
//! The forward chain `a_t` and the backward chain `b_t` do not depend on each
//! other, so they are computed in parallel and only combined at the end.
//!
use super::model::GridModel;
use super::result::SmoothingTrace;
use crate::common::{Color, StateId};
use crate::error::Result;
use crate::matrix::{argmax, elementwise_multiply, vector_normalize, ProbVector};
use log::debug;
use ndarray::Array1;

impl GridModel {
    ///
    /// Smoothed marginals `P(state_t | x_1..x_T)` for every step.
    ///
    pub fn forward_backward_pass(
        &self,
        prior: &ProbVector,
        emissions: &[Color],
    ) -> Result<SmoothingTrace> {
        self.check_len("forward_backward_pass", prior)?;
        let (forward, backward) = rayon::join(
            || self.filtering_pass(prior, emissions),
            || self.backward_pass(emissions),
        );
        let (forward, backward) = (forward?, backward?);

        let n_emissions = emissions.len();
        let mut tables = vec![Array1::zeros(self.n_states()); n_emissions + 1];
        for t in (1..=n_emissions).rev() {
            let joint = elementwise_multiply(forward.table(t), &backward[t])?;
            tables[t] = vector_normalize(&joint);
        }
        debug!("forward-backward done n_emissions={}", n_emissions);
        Ok(SmoothingTrace { tables })
    }
}

///
/// Most likely state at each step, decided independently per step.
///
/// The argmax keeps the first strictly greater value starting from 0, so
/// ties go to the lowest id and the all-zero step 0 yields state 0.
///
/// Consecutive states of this path need not be adjacent on the grid; use
/// Viterbi for the most probable coherent sequence.
///
pub fn most_likely_per_step_path(trace: &SmoothingTrace) -> Vec<StateId> {
    trace.tables.iter().map(argmax).collect()
}
