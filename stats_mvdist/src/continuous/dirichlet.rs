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

//! # Dirichlet
//!
//! Density over the `k-1` simplex. Points can be passed with all `k` coordinates, or with
//! the first `k-1` in which case the last one is `1 - sum(first k-1)`. That the point
//! actually lies on the simplex is up to the caller.
//!
//! The density is only defined for `k > 1` and positive concentrations. Anything else
//! evaluates the formula anyway and then reports `-inf`.

use super::*;
use core_mvdist::{bound, logpow, switch};
use ndarray::{concatenate, Axis, Zip};
use rand_distr::{Distribution, Gamma};
use statrs::function::gamma::ln_gamma;
use std::borrow::Cow;
use std::convert::TryFrom;

/// Dirichlet with concentration `a` over `k` categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DirichletParams")]
pub struct Dirichlet {
    k: usize,
    a: Array1<f64>,
}

#[derive(Deserialize)]
struct DirichletParams {
    k: usize,
    a: Array1<f64>,
}

impl TryFrom<DirichletParams> for Dirichlet {
    type Error = MvDistError;
    fn try_from(params: DirichletParams) -> MvDistResult<Dirichlet> {
        Dirichlet::new(params.k, params.a)
    }
}

impl Dirichlet {
    /// `a` must have `k` entries, or a single entry which is then used for all `k`.
    pub fn new(k: usize, a: Array1<f64>) -> MvDistResult<Dirichlet> {
        let a = if a.len() == k {
            a
        } else if a.len() == 1 {
            Array1::from_elem(k, a[0])
        } else {
            return Err(MvDistError::length("a", k, a.len()));
        };
        Ok(Dirichlet { k, a })
    }

    /// Every category gets the same concentration.
    pub fn symmetric(k: usize, a: f64) -> Dirichlet {
        Dirichlet {
            k,
            a: Array1::from_elem(k, a),
        }
    }

    /// The concentration parameters, always `k` of them.
    pub fn concentration(&self) -> &Array1<f64> {
        &self.a
    }

    /// Sum of the concentrations. This controls how tightly the mass sits around the mean.
    pub fn total(&self) -> f64 {
        self.a.sum()
    }

    fn complete<'a>(&self, value: &'a Array1<f64>) -> MvDistResult<Cow<'a, Array1<f64>>> {
        if value.len() == self.k {
            Ok(Cow::Borrowed(value))
        } else if value.len() + 1 == self.k {
            let last = Array1::from_elem(1, 1.0 - value.sum());
            // both are 1-d, so this can't fail
            let full = concatenate(Axis(0), &[value.view(), last.view()])
                .map_err(|_| MvDistError::length("value", self.k, value.len()))?;
            Ok(Cow::Owned(full))
        } else {
            Err(MvDistError::length("value", self.k, value.len()))
        }
    }
}

impl MultivariateDistribution for Dirichlet {
    type Value = Array1<f64>;

    fn dim(&self) -> usize {
        self.k
    }

    fn ln_pdf(&self, value: &Array1<f64>) -> MvDistResult<f64> {
        let x = self.complete(value)?;
        let terms = Zip::from(x.as_ref())
            .and(&self.a)
            .fold(0.0, |acc, &xi, &ai| acc + logpow(xi, ai - 1.0) - ln_gamma(ai));
        let raw = terms + ln_gamma(self.total());
        Ok(bound(
            raw,
            &[self.k > 1, self.a.iter().all(|ai| *ai > 0.0)],
        ))
    }

    fn mean(&self) -> Array1<f64> {
        &self.a / self.total()
    }

    /// Normalized independent `Gamma(a_i, 1)` draws. Returns all `k` coordinates.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MvDistResult<Array1<f64>> {
        if self.k < 2 {
            return Err(MvDistError::InvalidParameter(
                "a dirichlet needs at least 2 categories",
            ));
        }
        let mut draws = Array1::<f64>::zeros(self.k);
        for (draw, ai) in draws.iter_mut().zip(self.a.iter()) {
            let gamma = Gamma::new(*ai, 1.0).map_err(|_| {
                MvDistError::InvalidParameter("dirichlet concentrations must be positive")
            })?;
            *draw = gamma.sample(rng);
        }
        let total = draws.sum();
        Ok(draws / total)
    }
}

impl DistributionMode for Dirichlet {
    /// `(a - 1) / sum(a - 1)` if every `a_i > 1`, otherwise all `NaN`.
    fn mode(&self) -> Array1<f64> {
        let shifted = &self.a - 1.0;
        let shifted_total = shifted.sum();
        switch(
            self.a.iter().all(|ai| *ai > 1.0),
            shifted / shifted_total,
            f64::NAN,
        )
    }
}
