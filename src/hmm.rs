//!
//! Grid HMM calculation
//!
//! # Overview of calculation
//!
//! x = x_1,...,x_T : sensor readings (colors) of length T
//! T[i][j] : transition probability from state i to state j
//! O_c[i]  : probability that state i makes the sensor read c
//!
//! Filtering (forward)
//! a_t = P(state_t | x_1..x_t)          for 0<=t<=T, a_0 = prior
//!     ∝ O_{x_t} ⊙ (T^T a_t-1)
//!
//! Backward
//! b_t = P(x_t+1..x_T | state_t)        for 0<=t<=T, b_T = 1
//!     = T (O_{x_t+1} ⊙ b_t+1)
//!
//! Smoothing
//! s_t = P(state_t | x_1..x_T) ∝ a_t ⊙ b_t   for 1<=t<=T, s_0 = 0
//!
//! Viterbi
//! V[j][t] = max_k V[k][t-1] T[k][j] O_{x_t}[j]
//!
pub mod backward;
pub mod forward;
pub mod index;
pub mod model;
pub mod params;
pub mod result;
pub mod smoothing;
pub mod viterbi;


pub use index::StateIndex;
pub use model::{build_model, GridModel};
pub use params::SensorParams;
pub use result::{FilteringTrace, SmoothingTrace, ViterbiResult};
pub use smoothing::most_likely_per_step_path;
pub use viterbi::Score;
