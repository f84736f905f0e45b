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

//! # Distribution traits
//!
//! Every distribution is a plain struct of its parameters. What a sampler needs from
//! it is the log density of a proposal, and what a model needs is the derived tensors.
//! Modes and medians are separate traits because not every distribution has one.

use crate::errors::MvDistResult;
use rand::Rng;
use rayon::prelude::*;
use std::fmt::Debug;

///
pub trait MultivariateDistribution: Clone + Debug + Send + Sync + 'static {
    /// The tensor the density is evaluated at, and the type of the derived tensors.
    type Value: Clone + Debug + Send + Sync;

    /// The `k` of a vector valued distribution, or the side length of a matrix valued one.
    fn dim(&self) -> usize;

    /// Log density at `value`. Out of support values give `Ok(-inf)`;
    /// the only errors are tensors of the wrong shape.
    fn ln_pdf(&self, value: &Self::Value) -> MvDistResult<f64>;

    /// The expectation.
    fn mean(&self) -> Self::Value;

    /// Draws a value. Fails if the parameters cannot be sampled from,
    /// even where `ln_pdf` would still happily return `-inf`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MvDistResult<Self::Value>;

    /// Log density of each value, in order. Evaluated in parallel.
    fn batch_ln_pdf(&self, values: &[Self::Value]) -> MvDistResult<Vec<f64>> {
        values.par_iter().map(|v| self.ln_pdf(v)).collect()
    }

    /// Total log likelihood of a set of independent observations.
    /// A single out of support value makes the whole thing `-inf`.
    fn ln_likelihood(&self, values: &[Self::Value]) -> MvDistResult<f64> {
        Ok(self.batch_ln_pdf(values)?.iter().sum())
    }
}

/// Distributions that have a closed form mode. It may be `NaN` for some parameters.
pub trait DistributionMode: MultivariateDistribution {
    /// The mode, as a tensor of the value's shape.
    fn mode(&self) -> Self::Value;
}

/// Distributions that have a closed form median.
pub trait DistributionMedian: MultivariateDistribution {
    /// The median, as a tensor of the value's shape.
    fn median(&self) -> Self::Value;
}
