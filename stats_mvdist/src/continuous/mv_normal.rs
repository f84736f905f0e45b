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

//! # Multivariate Normal
//!
//! Parameterized by the mean and the precision matrix (the inverse covariance), so the
//! log density needs a log determinant and a quadratic form, but no inverse.
//! The precision is not checked for positive definiteness. If it isn't, the log
//! determinant comes back `NaN` or `-inf` and so does the density.

use super::*;
use core_mvdist::linalg::{cholesky_lower, ln_det, solve_lower_transpose};
use rand_distr::StandardNormal;
use std::convert::TryFrom;
use std::f64::consts::PI;

/// `N(μ, T⁻¹)` over vectors of length `k`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MvNormalParams")]
pub struct MvNormal {
    mu: Array1<f64>,
    tau: Array2<f64>,
    #[serde(skip_serializing)]
    ln_det_tau: f64,
}

/// What goes over the wire. Deserializing goes back through `MvNormal::new`.
#[derive(Deserialize)]
struct MvNormalParams {
    mu: Array1<f64>,
    tau: Array2<f64>,
}

impl TryFrom<MvNormalParams> for MvNormal {
    type Error = MvDistError;
    fn try_from(params: MvNormalParams) -> MvDistResult<MvNormal> {
        MvNormal::new(params.mu, params.tau)
    }
}

impl MvNormal {
    /// Mean `mu` of length `k`, precision `tau` of size `k x k`.
    pub fn new(mu: Array1<f64>, tau: Array2<f64>) -> MvDistResult<MvNormal> {
        let (rows, cols) = tau.dim();
        if rows != cols {
            return Err(MvDistError::NotSquare {
                tensor: "tau",
                rows,
                cols,
            });
        }
        if mu.len() != rows {
            return Err(MvDistError::length("mu", rows, mu.len()));
        }
        let ln_det_tau = ln_det(&tau);
        Ok(MvNormal {
            mu,
            tau,
            ln_det_tau,
        })
    }

    /// Identity precision, `N(μ, I)`.
    pub fn standard(mu: Array1<f64>) -> MvNormal {
        let k = mu.len();
        MvNormal {
            mu,
            tau: Array2::eye(k),
            ln_det_tau: 0.0,
        }
    }

    /// The location parameter
    pub fn mu(&self) -> &Array1<f64> {
        &self.mu
    }

    /// The precision matrix
    pub fn precision(&self) -> &Array2<f64> {
        &self.tau
    }
}

impl MultivariateDistribution for MvNormal {
    type Value = Array1<f64>;

    fn dim(&self) -> usize {
        self.mu.len()
    }

    fn ln_pdf(&self, value: &Array1<f64>) -> MvDistResult<f64> {
        if value.len() != self.dim() {
            return Err(MvDistError::length("value", self.dim(), value.len()));
        }
        let delta = value - &self.mu;
        let k = self.dim() as f64;
        Ok(0.5 * (-k * (2.0 * PI).ln() + self.ln_det_tau - delta.dot(&self.tau.dot(&delta))))
    }

    fn mean(&self) -> Array1<f64> {
        self.mu.clone()
    }

    /// `μ + L⁻ᵀ z` where `T = L Lᵀ` and `z` is standard normal
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MvDistResult<Array1<f64>> {
        let l = cholesky_lower(&self.tau).ok_or_else(|| {
            warn!("Unable to factor the precision matrix of {:?}", self);
            MvDistError::InvalidParameter("the precision matrix is not positive definite")
        })?;
        let z: Array1<f64> = (0..self.dim())
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        let offset = solve_lower_transpose(&l, &z).ok_or(MvDistError::InvalidParameter(
            "the precision matrix is singular",
        ))?;
        Ok(offset + &self.mu)
    }
}

impl DistributionMode for MvNormal {
    fn mode(&self) -> Array1<f64> {
        self.mu.clone()
    }
}

impl DistributionMedian for MvNormal {
    fn median(&self) -> Array1<f64> {
        self.mu.clone()
    }
}
