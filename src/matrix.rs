//!
//! Dense matrix/vector primitives used by the HMM
//!
//! Thin shape-checked wrappers around `ndarray`. `ndarray` itself panics on
//! incompatible shapes; every function here checks first and returns
//! `DimensionMismatch` instead.
//!
use crate::common::StateId;
use crate::error::{GridHmmError, Result};
use ndarray::prelude::*;

/// Dense matrix of probabilities
pub type Matrix = Array2<f64>;

/// Dense vector of probabilities (indexed by `StateId`)
pub type ProbVector = Array1<f64>;

fn shape1(v: &ProbVector) -> (usize, usize) {
    (v.len(), 1)
}

///
/// Matrix product `A B`
///
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(GridHmmError::DimensionMismatch {
            op: "multiply",
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(a.dot(b))
}

///
/// Matrix-vector product `A v`
///
pub fn multiply_vector(a: &Matrix, v: &ProbVector) -> Result<ProbVector> {
    if a.ncols() != v.len() {
        return Err(GridHmmError::DimensionMismatch {
            op: "multiply_vector",
            left: a.dim(),
            right: shape1(v),
        });
    }
    Ok(a.dot(v))
}

///
/// `A^T` as an owned (standard layout) matrix
///
pub fn transpose(a: &Matrix) -> Matrix {
    a.t().as_standard_layout().into_owned()
}

///
/// View a vector as a `n x 1` column matrix
///
pub fn as_column(v: &ProbVector) -> Matrix {
    v.view().insert_axis(Axis(1)).to_owned()
}

///
/// Divide a single-row (or single-column) matrix by the sum of its elements.
///
/// A matrix with more than one row and more than one column is rejected.
/// Unlike `vector_normalize` there is no zero-sum guard.
///
pub fn normalize_row(m: &Matrix) -> Result<Matrix> {
    if m.nrows() > 1 && m.ncols() > 1 {
        return Err(GridHmmError::DimensionMismatch {
            op: "normalize_row",
            left: m.dim(),
            right: (1, m.ncols()),
        });
    }
    let sum = m.sum();
    Ok(m.mapv(|x| x / sum))
}

///
/// Elementwise (Hadamard) product `a ⊙ b`
///
pub fn elementwise_multiply(a: &ProbVector, b: &ProbVector) -> Result<ProbVector> {
    if a.len() != b.len() {
        return Err(GridHmmError::DimensionMismatch {
            op: "elementwise_multiply",
            left: shape1(a),
            right: shape1(b),
        });
    }
    Ok(a * b)
}

///
/// Divide by `sum(v)`.
///
/// If the sum is exactly zero the vector is returned unchanged, so that a
/// state space with zero likelihood stays all-zero instead of turning NaN.
///
pub fn vector_normalize(v: &ProbVector) -> ProbVector {
    let sum = v.sum();
    if sum == 0.0 {
        v.clone()
    } else {
        v.mapv(|x| x / sum)
    }
}

///
/// Index of the maximum element.
///
/// The running max starts at `0.0` and only strictly greater values replace
/// it, so the lowest index wins ties and an all-zero (or empty) vector
/// yields `0`.
///
pub fn argmax(v: &ProbVector) -> StateId {
    let mut max_value = 0.0;
    let mut max_index = 0;
    for (i, &x) in v.iter().enumerate() {
        if x > max_value {
            max_value = x;
            max_index = i;
        }
    }
    max_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_multiply() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![[1.0], [2.0], [3.0]];
        let ab = multiply(&a, &b).unwrap();
        assert_eq!(ab, array![[14.0], [32.0]]);

        match multiply(&a, &a) {
            Err(GridHmmError::DimensionMismatch { left, right, .. }) => {
                assert_eq!(left, (2, 3));
                assert_eq!(right, (2, 3));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(multiply_vector(&a, &array![1.0, 2.0]).is_err());
        assert_eq!(
            multiply_vector(&a, &array![1.0, 0.0, 1.0]).unwrap(),
            array![4.0, 10.0]
        );
    }
    #[test]
    fn matrix_transpose() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = transpose(&a);
        assert_eq!(t, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert!(t.is_standard_layout());
        assert_eq!(transpose(&t), a);
    }
    #[test]
    fn matrix_normalize_row() {
        let col = array![[1.0], [2.0], [3.0]];
        let n = normalize_row(&col).unwrap();
        assert_abs_diff_eq!(n, array![[1.0 / 6.0], [2.0 / 6.0], [3.0 / 6.0]]);
        let row = array![[2.0, 2.0]];
        assert_eq!(normalize_row(&row).unwrap(), array![[0.5, 0.5]]);
        assert!(normalize_row(&array![[1.0, 2.0], [3.0, 4.0]]).is_err());
    }
    #[test]
    fn vector_elementwise() {
        let a = array![0.0, 0.0, 0.0];
        let b = array![4.0, 5.0, 6.0];
        assert_eq!(elementwise_multiply(&a, &b).unwrap(), a);
        assert_eq!(
            elementwise_multiply(&array![1.0, 2.0], &array![3.0, 4.0]).unwrap(),
            array![3.0, 8.0]
        );
        assert!(elementwise_multiply(&a, &array![1.0]).is_err());
    }
    #[test]
    fn vector_normalize_zero_sum() {
        let zero = array![0.0, 0.0, 0.0];
        let n = vector_normalize(&zero);
        assert_eq!(n, zero);
        assert!(n.iter().all(|x| !x.is_nan()));

        let v = array![1.0, 3.0];
        assert_eq!(vector_normalize(&v), array![0.25, 0.75]);
    }
    #[test]
    fn vector_argmax() {
        assert_eq!(argmax(&array![0.1, 0.5, 0.5, 0.2]), 1);
        assert_eq!(argmax(&array![0.0, 0.0]), 0);
        assert_eq!(argmax(&array![0.0, 0.0, 1e-9]), 2);
        assert_eq!(argmax(&array![]), 0);
    }
    #[test]
    fn column_view() {
        let c = as_column(&array![1.0, 2.0]);
        assert_eq!(c.dim(), (2, 1));
        assert_eq!(c.column(0).to_owned(), array![1.0, 2.0]);
    }
}
