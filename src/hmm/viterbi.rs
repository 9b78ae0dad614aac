//!
//! Viterbi algorithm (most probable state sequence)
//!
//! ```text
//! V[i][0] = prior[i] O_x1[i]
//! V[j][t] = max_k V[k][t-1] T[k][j] O_xt[j]
//! ```
//!
//! The dynamic program is generic over the score domain:
//!
//! * `Prob` (log-space, default): products become sums, usable for long
//!   sequences
//! * `f64` (linear): underflows to zero after a few hundred steps
//!
use super::model::GridModel;
use super::result::ViterbiResult;
use crate::common::{Color, StateId, COLORS};
use crate::error::{GridHmmError, Result};
use crate::matrix::ProbVector;
use crate::prob::Prob;
use log::debug;
use ndarray::prelude::*;
use num_traits::{One, Zero};
use rayon::prelude::*;

///
/// Score domain of the Viterbi dynamic program
///
/// `zero()` is the smallest score, the running max of every argmax starts
/// there and is replaced only by strictly greater values.
///
pub trait Score: Copy + PartialOrd + Zero + One + Send + Sync + std::fmt::Debug {
    /// convert a linear probability into this domain
    fn lift(p: f64) -> Self;
}

impl Score for f64 {
    fn lift(p: f64) -> Self {
        p
    }
}

impl Score for Prob {
    fn lift(p: f64) -> Self {
        Prob::from_prob(p)
    }
}

///
/// `(argmax, max)` with the strict-greater rule starting from `S::zero()`
///
fn argmax_score<S: Score>(scores: impl Iterator<Item = S>) -> (StateId, S) {
    let mut best = S::zero();
    let mut best_index = 0;
    for (k, score) in scores.enumerate() {
        if score > best {
            best = score;
            best_index = k;
        }
    }
    (best_index, best)
}

impl GridModel {
    ///
    /// Log-space Viterbi decoding
    ///
    pub fn viterbi(&self, prior: &ProbVector, emissions: &[Color]) -> Result<ViterbiResult<Prob>> {
        self.viterbi_with::<Prob>(prior, emissions)
    }
    ///
    /// Linear-space Viterbi decoding
    ///
    /// Only for short sequences: all scores become 0 once the joint
    /// probability underflows, and the decoded path degenerates to state 0.
    ///
    pub fn viterbi_linear(
        &self,
        prior: &ProbVector,
        emissions: &[Color],
    ) -> Result<ViterbiResult<f64>> {
        self.viterbi_with::<f64>(prior, emissions)
    }
    ///
    /// Viterbi decoding in the score domain `S`.
    ///
    /// Ties are broken toward the lowest state id, both for the
    /// backpointers and for the final state.
    ///
    pub fn viterbi_with<S: Score>(
        &self,
        prior: &ProbVector,
        emissions: &[Color],
    ) -> Result<ViterbiResult<S>> {
        self.check_len("viterbi", prior)?;
        let n = self.n_states();
        let n_emissions = emissions.len();
        let mut backpointers = Array2::zeros((n, n_emissions));
        if n_emissions == 0 {
            return Ok(ViterbiResult {
                path: Vec::new(),
                backpointers,
                score: S::one(),
            });
        }

        let trans: Array2<S> = self.trans().mapv(S::lift);
        let emits: Vec<Array1<S>> = COLORS
            .iter()
            .map(|&c| self.emission(c).mapv(S::lift))
            .collect();

        let mut scores: Array2<S> = Array2::from_elem((n, n_emissions), S::zero());
        let e0 = &emits[emissions[0].index()];
        for i in 0..n {
            scores[[i, 0]] = S::lift(prior[i]) * e0[i];
        }

        for t in 1..n_emissions {
            let e = &emits[emissions[t].index()];
            // each state's reduction only reads column t-1
            let column: Vec<(StateId, S)> = (0..n)
                .into_par_iter()
                .map(|j| argmax_score((0..n).map(|k| scores[[k, t - 1]] * trans[[k, j]] * e[j])))
                .collect();
            for (j, (k, score)) in column.into_iter().enumerate() {
                scores[[j, t]] = score;
                backpointers[[j, t]] = k;
            }
        }

        let (last, score) = argmax_score(scores.column(n_emissions - 1).iter().copied());
        let mut path = vec![0; n_emissions];
        path[n_emissions - 1] = last;
        for t in (1..n_emissions).rev() {
            path[t - 1] = backpointers[[path[t], t]];
        }
        debug!("viterbi n_emissions={} score={:?}", n_emissions, score);

        Ok(ViterbiResult {
            path,
            backpointers,
            score,
        })
    }
    ///
    /// Joint probability `P(states, emissions)` of a state sequence, in the
    /// score domain `S`. `states[t]` is the state that emitted `emissions[t]`.
    ///
    pub fn path_score<S: Score>(
        &self,
        prior: &ProbVector,
        emissions: &[Color],
        states: &[StateId],
    ) -> Result<S> {
        self.check_len("path_score", prior)?;
        if states.len() != emissions.len() {
            return Err(GridHmmError::DimensionMismatch {
                op: "path_score",
                left: (states.len(), 1),
                right: (emissions.len(), 1),
            });
        }
        let mut score = S::one();
        for (t, (&s, &x)) in states.iter().zip(emissions.iter()).enumerate() {
            let p_from = if t == 0 {
                prior[s]
            } else {
                self.p_trans(states[t - 1], s)
            };
            score = score * S::lift(p_from) * S::lift(self.p_emit(s, x));
        }
        Ok(score)
    }
}
