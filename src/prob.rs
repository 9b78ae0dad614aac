//!
//! Log-space probability scalar
//!
//! Viterbi scores are products of up to `T` probabilities and underflow to
//! zero quickly in linear space. `Prob` stores `log p` instead, so products
//! become sums and `p = 0` is represented by `-inf`.
//!
use approx::AbsDiffEq;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

///
/// Wrapper of f64 that holds `log p` of a probability `0 <= p <= 1`
///
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, SerializeDisplay, DeserializeFromStr)]
pub struct Prob(f64);

///
/// short-hand of `Prob::from_prob`
///
pub fn p(p: f64) -> Prob {
    Prob::from_prob(p)
}

///
/// short-hand of `Prob::from_log_prob`
///
pub fn lp(lp: f64) -> Prob {
    Prob::from_log_prob(lp)
}

impl Prob {
    pub fn from_prob(value: f64) -> Prob {
        Prob(value.ln())
    }
    pub fn from_log_prob(log_value: f64) -> Prob {
        Prob(log_value)
    }
    ///
    /// Get the probability (in `[0, 1]`)
    ///
    pub fn to_value(self) -> f64 {
        self.0.exp()
    }
    ///
    /// Get the log probability
    ///
    pub fn to_log_value(self) -> f64 {
        self.0
    }
    ///
    /// `p == 0` (log p = -inf)
    ///
    pub fn is_zero(self) -> bool {
        self.0.is_infinite() && self.0.is_sign_negative()
    }
    ///
    /// `p == 1` (log p = 0)
    ///
    pub fn is_one(self) -> bool {
        self.0 == 0.0
    }
    pub fn zero() -> Prob {
        Prob(f64::NEG_INFINITY)
    }
    pub fn one() -> Prob {
        Prob(0.0)
    }
    ///
    /// abs diff of two log probs `|log p_a - log p_b|`
    ///
    /// Two zeros are equal (diff 0), zero and non-zero are infinitely apart.
    ///
    pub fn log_diff(&self, other: Prob) -> f64 {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => 0.0,
            (true, false) | (false, true) => f64::INFINITY,
            (false, false) => (self.0 - other.0).abs(),
        }
    }
}

/// p=0 as a default value
impl Default for Prob {
    fn default() -> Self {
        Prob::zero()
    }
}

impl num_traits::One for Prob {
    fn one() -> Self {
        Prob::one()
    }
}

impl num_traits::Zero for Prob {
    fn zero() -> Self {
        Prob::zero()
    }
    fn is_zero(&self) -> bool {
        Prob::is_zero(*self)
    }
}

/// `log_p(p)`, e.g. `-0.1278(0.8800)`
impl std::fmt::Display for Prob {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({:.4})", self.0, self.to_value())
    }
}

/// Parses the `Display` form. The parenthesized linear value is optional.
impl FromStr for Prob {
    type Err = std::num::ParseFloatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let front = match s.split_once('(') {
            Some((front, _)) => front,
            None => s,
        };
        front.trim().parse::<f64>().map(Prob)
    }
}

/// Addition `px + py` in log space
///
/// If `x >= y`:
///
/// ```text
/// log(exp(x) + exp(y)) = x + log(1 + exp(y-x))
/// ```
impl std::ops::Add for Prob {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let (x, y) = if self.0 >= other.0 {
            (self.0, other.0)
        } else {
            (other.0, self.0)
        };
        if y == f64::NEG_INFINITY {
            Prob(x)
        } else if x == y {
            Prob(x + 2f64.ln())
        } else {
            Prob(x + (y - x).exp().ln_1p())
        }
    }
}

/// Multiplication `px * py` is `log px + log py`
impl std::ops::Mul for Prob {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Prob(self.0 + other.0)
    }
}

/// Division `px / py` is `log px - log py`
impl std::ops::Div for Prob {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Prob(self.0 - other.0)
    }
}

impl std::ops::AddAssign for Prob {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl std::ops::MulAssign for Prob {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl std::iter::Sum for Prob {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + b)
    }
}
impl<'a> std::iter::Sum<&'a Self> for Prob {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + *b)
    }
}
impl std::iter::Product for Prob {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Prob::one(), |a, b| a * b)
    }
}
impl<'a> std::iter::Product<&'a Self> for Prob {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Prob::one(), |a, b| a * *b)
    }
}

/// for approx `assert_abs_diff_eq` (compares log values)
impl AbsDiffEq for Prob {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prob_identity() {
        let x = p(0.3);
        let e = p(0.0);
        assert_relative_eq!((x + e).0, x.0);
        assert!((x * e).is_zero());
        assert_relative_eq!((x * p(1.0)).0, x.0);
    }
    #[test]
    fn prob_add_mul() {
        assert_eq!(p(0.0) + p(1.0), p(1.0));
        assert_eq!(p(0.0) * p(1.0), p(0.0));
        assert_abs_diff_eq!((p(0.3) + p(0.3)).0, p(0.6).0);
        assert_abs_diff_eq!((p(0.3) * p(0.3)).0, p(0.09).0);
        assert_abs_diff_eq!((p(0.88) * p(0.04)).0, p(0.0352).0, epsilon = 1e-12);
        assert_abs_diff_eq!((p(0.5) / p(0.25)).0, p(2.0).0);
    }
    #[test]
    fn prob_sum_prod() {
        let xs: Vec<Prob> = vec![];
        assert_eq!(xs.iter().sum::<Prob>(), p(0.0));
        assert_eq!(xs.iter().product::<Prob>(), p(1.0));

        let xs = vec![p(0.1), p(0.1), p(0.1)];
        assert_relative_eq!(xs.iter().sum::<Prob>().to_value(), 0.3);
        assert_relative_eq!(xs.iter().product::<Prob>().to_value(), 0.001);
    }
    #[test]
    fn prob_assign() {
        let mut x = p(0.4);
        x += p(0.2);
        assert_abs_diff_eq!(x, p(0.6));
        x *= p(0.5);
        assert_abs_diff_eq!(x, p(0.3));
        x *= p(0.0);
        assert!(x.is_zero());
    }
    #[test]
    fn prob_order() {
        let mut ps = vec![p(0.9), p(0.2), p(0.5), p(0.1), p(1.0), p(0.0)];
        ps.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ps, vec![p(0.0), p(0.1), p(0.2), p(0.5), p(0.9), p(1.0)]);
        assert!(p(0.0) < p(1e-300));
        assert!(Prob::zero() == p(0.0));
    }
    #[test]
    fn prob_underflow() {
        // 0.04^400 is zero as f64 but not in log space
        let x: Prob = std::iter::repeat(p(0.04)).take(400).product();
        assert!(!x.is_zero());
        assert_eq!(x.to_value(), 0.0);
        assert_relative_eq!(
            x.to_log_value(),
            400.0 * 0.04f64.ln(),
            max_relative = 1e-12
        );
    }
    #[test]
    fn prob_serialize() {
        for x in [Prob::one(), p(0.5), Prob::zero()] {
            assert_eq!(Prob::from_str(&x.to_string()).unwrap(), x);
            let json = serde_json::to_string(&x).unwrap();
            let y: Prob = serde_json::from_str(&json).unwrap();
            assert_eq!(x, y);
        }
        assert_eq!(Prob::from_str("-0.5").unwrap(), lp(-0.5));
        assert!(Prob::from_str("abc").is_err());
    }
    #[test]
    fn prob_log_diff() {
        assert_eq!(0.0, Prob::zero().log_diff(Prob::zero()));
        assert_eq!(f64::INFINITY, Prob::zero().log_diff(Prob::one()));
        assert_eq!(f64::INFINITY, Prob::one().log_diff(Prob::zero()));
        assert_relative_eq!(p(0.5).log_diff(p(0.25)), 2f64.ln());
    }
}
