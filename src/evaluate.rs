//!
//! Accuracy of the decoders on simulated runs
//!
//! Each trial simulates a random walk with its own seed, runs the three
//! decoders with the uniform prior, and counts the steps where the decoded
//! state equals the true state. Trials run in parallel over a shared model.
//!
use crate::common::StateId;
use crate::error::Result;
use crate::grid::GridWorld;
use crate::hmm::model::GridModel;
use crate::hmm::params::SensorParams;
use crate::simulate::{Simulator, Trajectory};
use crate::utils::progress_common_style;
use indicatif::ParallelProgressIterator;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

///
/// Number of steps (among `1..=T`) where each decoder hit the true state
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Hits {
    pub n_steps: usize,
    pub filtering: usize,
    pub smoothing: usize,
    pub viterbi: usize,
}

impl std::ops::Add for Hits {
    type Output = Hits;
    fn add(self, other: Hits) -> Hits {
        Hits {
            n_steps: self.n_steps + other.n_steps,
            filtering: self.filtering + other.filtering,
            smoothing: self.smoothing + other.smoothing,
            viterbi: self.viterbi + other.viterbi,
        }
    }
}

fn count_hits(decoded: &[StateId], truth: &[StateId]) -> usize {
    decoded
        .iter()
        .zip(truth.iter())
        .filter(|(a, b)| a == b)
        .count()
}

///
/// Fraction of correctly decoded steps over all trials
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Accuracy {
    pub n_trials: usize,
    pub hits: Hits,
    pub filtering: f64,
    pub smoothing: f64,
    pub viterbi: f64,
}

impl Accuracy {
    pub fn from_hits(n_trials: usize, hits: Hits) -> Accuracy {
        let ratio = |n: usize| {
            if hits.n_steps == 0 {
                0.0
            } else {
                n as f64 / hits.n_steps as f64
            }
        };
        Accuracy {
            n_trials,
            hits,
            filtering: ratio(hits.filtering),
            smoothing: ratio(hits.smoothing),
            viterbi: ratio(hits.viterbi),
        }
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "n_trials\t{}", self.n_trials)?;
        writeln!(f, "n_steps\t{}", self.hits.n_steps)?;
        writeln!(f, "filtering\t{:.4}", self.filtering)?;
        writeln!(f, "smoothing\t{:.4}", self.smoothing)?;
        write!(f, "viterbi\t{:.4}", self.viterbi)
    }
}

///
/// Decode one trajectory with the uniform prior and count hits
///
pub fn score_trajectory(model: &GridModel, trajectory: &Trajectory) -> Result<Hits> {
    let prior = model.uniform_prior();
    let xs = &trajectory.observations;
    let truth = trajectory.emitting_states();

    let filtering = model.filtering_pass(&prior, xs)?.argmax_path();
    let smoothing = model
        .forward_backward_pass(&prior, xs)?
        .most_likely_per_step_path();
    let viterbi = model.viterbi(&prior, xs)?.path;

    Ok(Hits {
        n_steps: truth.len(),
        filtering: count_hits(&filtering[1..], truth),
        smoothing: count_hits(&smoothing[1..], truth),
        viterbi: count_hits(&viterbi, truth),
    })
}

///
/// Run `n_trials` random walks of `n_moves` steps; trial `i` uses the seed
/// `seed + i` (wrapping), so the result does not depend on the thread count.
///
pub fn evaluate<G: GridWorld + Sync>(
    model: &GridModel,
    grid: &G,
    sensor: SensorParams,
    n_trials: usize,
    n_moves: usize,
    seed: u64,
) -> Result<Accuracy> {
    let hits: Vec<Hits> = (0..n_trials)
        .into_par_iter()
        .progress_with_style(progress_common_style())
        .map(|i| {
            let mut sim = Simulator::new(model, grid, sensor, seed.wrapping_add(i as u64));
            let moves = sim.random_moves(n_moves);
            let trajectory = sim.run(&moves);
            score_trajectory(model, &trajectory)
        })
        .collect::<Result<_>>()?;
    let total = hits.into_iter().fold(Hits::default(), |acc, h| acc + h);
    let accuracy = Accuracy::from_hits(n_trials, total);
    info!(
        "evaluated n_trials={} filtering={:.4} smoothing={:.4} viterbi={:.4}",
        n_trials, accuracy.filtering, accuracy.smoothing, accuracy.viterbi
    );
    Ok(accuracy)
}
