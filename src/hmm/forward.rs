//!
//! Forward algorithm (filtering)
//!
use super::model::GridModel;
use super::result::FilteringTrace;
use crate::common::Color;
use crate::error::{GridHmmError, Result};
use crate::matrix::{elementwise_multiply, multiply_vector, vector_normalize, ProbVector};
use log::trace;

impl GridModel {
    ///
    /// One step of filtering
    ///
    /// ```text
    /// a_t ∝ O_c ⊙ (T^T a_t-1)
    /// ```
    ///
    /// `T^T a_t-1` collects the mass flowing *into* each state. The result
    /// is normalized to sum 1, or stays all-zero if no state can emit `c`.
    ///
    pub fn forward(&self, prev: &ProbVector, color: Color) -> Result<ProbVector> {
        self.check_len("forward", prev)?;
        let predicted = multiply_vector(self.trans_transposed(), prev)?;
        let joint = elementwise_multiply(self.emission(color), &predicted)?;
        Ok(vector_normalize(&joint))
    }
    ///
    /// Run the forward algorithm over the emissions from the prior.
    ///
    pub fn filtering_pass(&self, prior: &ProbVector, emissions: &[Color]) -> Result<FilteringTrace> {
        self.check_len("filtering_pass", prior)?;
        let mut tables = Vec::with_capacity(emissions.len() + 1);
        tables.push(prior.clone());
        for (i, &color) in emissions.iter().enumerate() {
            let table = self.forward(&tables[i], color)?;
            trace!("f[{}] x={} {}", i + 1, color, table);
            tables.push(table);
        }
        Ok(FilteringTrace { tables })
    }
    pub(crate) fn check_len(&self, op: &'static str, v: &ProbVector) -> Result<()> {
        if v.len() != self.n_states() {
            return Err(GridHmmError::DimensionMismatch {
                op,
                left: (v.len(), 1),
                right: (self.n_states(), 1),
            });
        }
        Ok(())
    }
}
