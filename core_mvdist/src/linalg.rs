/*
* Licensed to Elasticsearch B.V. under one or more contributor
* license agreements. See the NOTICE file distributed with
* this work for additional information regarding copyright
* ownership. Elasticsearch B.V. licenses this file to you under
* the Apache License, Version 2.0 (the "License"); you may
* not use this file except in compliance with the License.
* You may obtain a copy of the License at
*
*  http://www.apache.org/licenses/LICENSE-2.0
*
* Unless required by applicable law or agreed to in writing,
* software distributed under the License is distributed on an
* "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
* KIND, either express or implied.  See the License for the
* specific language governing permissions and limitations
* under the License.
*/

//! # Dense linear algebra
//!
//! The tensors are `ndarray` arrays, the factorizations are `nalgebra`'s LU and Cholesky.
//! All functions here expect square inputs; shape checking happens where the matrices
//! enter a distribution. None of them form an explicit inverse.
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

/// Relative tolerance used when deciding whether a matrix may go through Cholesky.
const SYMMETRY_TOLERANCE: f64 = 1e-12;

fn to_nalgebra<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> DMatrix<f64> {
    let (rows, cols) = a.dim();
    DMatrix::from_fn(rows, cols, |i, j| a[[i, j]])
}

fn from_nalgebra(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// True if `a` is square and equal to its transpose up to rounding.
pub fn is_symmetric<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> bool {
    let (rows, cols) = a.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            let (x, y) = (a[[i, j]], a[[j, i]]);
            let scale = x.abs().max(y.abs()).max(1.0);
            if (x - y).abs() > SYMMETRY_TOLERANCE * scale {
                return false;
            }
        }
    }
    true
}

/// Log-determinant of a square matrix.
///
/// Symmetric positive definite inputs use the Cholesky factor, `2 Σ ln L_ii`. Anything else
/// falls back to the LU determinant, so a singular matrix gives `-inf` and a negative
/// determinant gives `NaN`.
pub fn ln_det<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    debug_assert_eq!(a.nrows(), a.ncols());
    let m = to_nalgebra(a);
    if is_symmetric(a) {
        if let Some(chol) = m.clone().cholesky() {
            let l = chol.l_dirty();
            return 2.0 * (0..l.nrows()).map(|i| l[(i, i)].ln()).sum::<f64>();
        }
    }
    m.lu().determinant().ln()
}

/// Solves `a X = b` with an LU factorization. `None` when `a` is singular.
pub fn solve<S, T>(a: &ArrayBase<S, Ix2>, b: &ArrayBase<T, Ix2>) -> Option<Array2<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    debug_assert_eq!(a.nrows(), a.ncols());
    debug_assert_eq!(a.nrows(), b.nrows());
    to_nalgebra(a)
        .lu()
        .solve(&to_nalgebra(b))
        .map(|x| from_nalgebra(&x))
}

/// Sum of the diagonal.
pub fn trace<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    a.diag().sum()
}

/// Lower triangular `L` with `a = L Lᵀ`, or `None` if `a` is not symmetric positive definite.
pub fn cholesky_lower<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> Option<Array2<f64>> {
    if !is_symmetric(a) {
        return None;
    }
    to_nalgebra(a).cholesky().map(|chol| from_nalgebra(&chol.l()))
}

/// Solves `Lᵀ y = z` for a lower triangular `L`. `None` if `L` has a zero on its diagonal.
pub fn solve_lower_transpose<S, T>(l: &ArrayBase<S, Ix2>, z: &ArrayBase<T, Ix1>) -> Option<Array1<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    debug_assert_eq!(l.nrows(), z.len());
    let rhs = DVector::from_iterator(z.len(), z.iter().cloned());
    to_nalgebra(l)
        .tr_solve_lower_triangular(&rhs)
        .map(|y| y.iter().cloned().collect())
}
