//!
//! Sensor parameters of the color HMM
//!
use crate::error::{GridHmmError, Result};
use serde::Serialize;

/// Tolerance used when checking that probabilities form a distribution.
pub const EPSILON: f64 = 1e-9;

///
/// Color sensor error profile
///
/// The sensor reports the true floor color with `p_correct` and each of the
/// three other colors with `p_wrong`, so `p_correct + 3 p_wrong = 1`.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorParams {
    pub p_correct: f64,
    pub p_wrong: f64,
}

impl SensorParams {
    pub fn new(p_correct: f64, p_wrong: f64) -> Result<SensorParams> {
        let in_range = |p: f64| (0.0..=1.0).contains(&p);
        if !in_range(p_correct) || !in_range(p_wrong) {
            return Err(GridHmmError::InvalidParams(format!(
                "p_correct={} p_wrong={} must be in [0, 1]",
                p_correct, p_wrong
            )));
        }
        let total = p_correct + 3.0 * p_wrong;
        if (total - 1.0).abs() > EPSILON {
            return Err(GridHmmError::InvalidParams(format!(
                "p_correct + 3 p_wrong = {} (must be 1)",
                total
            )));
        }
        Ok(SensorParams { p_correct, p_wrong })
    }
    ///
    /// `p_wrong = (1 - p_correct) / 3`
    ///
    pub fn from_accuracy(p_correct: f64) -> Result<SensorParams> {
        SensorParams::new(p_correct, (1.0 - p_correct) / 3.0)
    }
    ///
    /// A sensor that never lies
    ///
    pub fn perfect() -> SensorParams {
        SensorParams {
            p_correct: 1.0,
            p_wrong: 0.0,
        }
    }
}

/// 88% correct, 4% for each wrong color
impl Default for SensorParams {
    fn default() -> Self {
        SensorParams {
            p_correct: 0.88,
            p_wrong: 0.04,
        }
    }
}

impl std::fmt::Display for SensorParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "p_correct={} p_wrong={}", self.p_correct, self.p_wrong)
    }
}
