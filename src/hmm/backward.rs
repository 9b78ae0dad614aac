//!
//! Backward algorithm
//!
use super::model::GridModel;
use crate::common::Color;
use crate::error::Result;
use crate::matrix::{elementwise_multiply, multiply_vector, ProbVector};
use log::trace;
use ndarray::Array1;

impl GridModel {
    ///
    /// One step of the backward recursion
    ///
    /// ```text
    /// b_t-1 = T (O_c ⊙ b_t)
    /// ```
    ///
    /// `b_t[k] = P(x_t+1..x_T | state_t = k)` is a likelihood, not a
    /// distribution, and is not normalized.
    ///
    pub fn backward(&self, next: &ProbVector, color: Color) -> Result<ProbVector> {
        self.check_len("backward", next)?;
        let weighted = elementwise_multiply(self.emission(color), next)?;
        multiply_vector(self.trans(), &weighted)
    }
    ///
    /// All backward messages `b_0, ..., b_T` for the emissions.
    ///
    /// `b_T` is all-ones (no evidence after the last emission).
    /// `messages[t]` is `b_t`, ordered along with the emissions.
    ///
    pub fn backward_pass(&self, emissions: &[Color]) -> Result<Vec<ProbVector>> {
        let mut messages = Vec::with_capacity(emissions.len() + 1);
        messages.push(Array1::ones(self.n_states()));
        // feed the emissions backward
        for (i, &color) in emissions.iter().enumerate().rev() {
            let prev = self.backward(&messages[messages.len() - 1], color)?;
            trace!("b[{}] x={} {}", i, color, prev);
            messages.push(prev);
        }
        // reverse the vector so that messages[t] corresponds to b_t
        messages.reverse();
        Ok(messages)
    }
}
