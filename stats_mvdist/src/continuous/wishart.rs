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

//! # Wishart
//!
//! Distribution over `p x p` positive definite matrices with `n` degrees of freedom and
//! scale `V`. This is the distribution of the maximum likelihood estimate of a normal's
//! precision, and for `p = 1, V = 1` it is a chi-square.
//!
//! The log density is evaluated as
//! ```text
//! [ (n-p-1) ln|V| - tr(V⁻¹ X) - n p ln 2 - n ln|V| - 2 ln Γ_p(n/2) ] / 2
//! ```
//! with the determinant terms left unsimplified. Note the first term uses `|V|`, not `|X|`.

use super::*;
use core_mvdist::linalg::{cholesky_lower, ln_det, solve, trace};
use core_mvdist::{bound, ln_multivariate_gamma, switch};
use rand_distr::{ChiSquared, Distribution, StandardNormal};
use std::convert::TryFrom;
use std::f64::consts::LN_2;

/// Wishart with `n` degrees of freedom and a `p x p` scale matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WishartParams")]
pub struct Wishart {
    n: f64,
    p: usize,
    scale: Array2<f64>,
    #[serde(skip_serializing)]
    ln_det_scale: f64,
}

#[derive(Deserialize)]
struct WishartParams {
    n: f64,
    p: usize,
    scale: Array2<f64>,
}

impl TryFrom<WishartParams> for Wishart {
    type Error = MvDistError;
    fn try_from(params: WishartParams) -> MvDistResult<Wishart> {
        Wishart::new(params.n, params.p, params.scale)
    }
}

impl Wishart {
    /// Degrees of freedom `n`, dimension `p`, scale `V` of size `p x p`.
    pub fn new(n: f64, p: usize, scale: Array2<f64>) -> MvDistResult<Wishart> {
        let (rows, cols) = scale.dim();
        if rows != cols {
            return Err(MvDistError::NotSquare {
                tensor: "scale",
                rows,
                cols,
            });
        }
        if rows != p {
            return Err(MvDistError::dims("scale", (p, p), (rows, cols)));
        }
        let ln_det_scale = ln_det(&scale);
        Ok(Wishart {
            n,
            p,
            scale,
            ln_det_scale,
        })
    }

    /// Degrees of freedom
    pub fn degrees_of_freedom(&self) -> f64 {
        self.n
    }

    /// The scale matrix `V`
    pub fn scale(&self) -> &Array2<f64> {
        &self.scale
    }
}

impl MultivariateDistribution for Wishart {
    type Value = Array2<f64>;

    fn dim(&self) -> usize {
        self.p
    }

    fn ln_pdf(&self, value: &Array2<f64>) -> MvDistResult<f64> {
        if value.dim() != (self.p, self.p) {
            return Err(MvDistError::dims("value", (self.p, self.p), value.dim()));
        }
        let n = self.n;
        let p = self.p as f64;
        let ivi = self.ln_det_scale;
        let trace_term = solve(&self.scale, value)
            .map(|x| trace(&x))
            .unwrap_or(f64::NAN);
        let raw = ((n - p - 1.0) * ivi
            - trace_term
            - n * p * LN_2
            - n * ivi
            - 2.0 * ln_multivariate_gamma(self.p, n / 2.0))
            / 2.0;
        Ok(bound(raw, &[n > p - 1.0, ivi.is_finite()]))
    }

    fn mean(&self) -> Array2<f64> {
        &self.scale * self.n
    }

    /// Bartlett decomposition, `L A Aᵀ Lᵀ` with `V = L Lᵀ`
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MvDistResult<Array2<f64>> {
        let p = self.p;
        if self.n <= p as f64 - 1.0 {
            return Err(MvDistError::InvalidParameter(
                "wishart degrees of freedom must exceed p - 1",
            ));
        }
        let l = cholesky_lower(&self.scale).ok_or_else(|| {
            warn!("Unable to factor the scale matrix of {:?}", self);
            MvDistError::InvalidParameter("the scale matrix is not positive definite")
        })?;
        let mut a = Array2::<f64>::zeros((p, p));
        for i in 0..p {
            let chi = ChiSquared::new(self.n - i as f64).map_err(|_| {
                MvDistError::InvalidParameter("wishart degrees of freedom must exceed p - 1")
            })?;
            a[[i, i]] = chi.sample(rng).sqrt();
            for j in 0..i {
                a[[i, j]] = rng.sample(StandardNormal);
            }
        }
        let la = l.dot(&a);
        Ok(la.dot(&la.t()))
    }
}

impl DistributionMode for Wishart {
    /// `(n - p - 1) V` when `n >= p + 1`, otherwise all `NaN`.
    fn mode(&self) -> Array2<f64> {
        let p = self.p as f64;
        switch(
            self.n >= p + 1.0,
            &self.scale * (self.n - p - 1.0),
            f64::NAN,
        )
    }
}
