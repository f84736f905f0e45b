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

#![doc(test(attr(allow(unused_variables), deny(warnings))))]

//! # Multivariate distributions
//! Log densities, means and modes for the multivariate normal, Dirichlet, multinomial
//! and Wishart distributions, written to be called from inside a sampler.
//!
//! ## Sentinels, not errors
//! A proposal outside a distribution's support gets a log density of `-inf`, and an
//! undefined mode is a tensor of `NaN`. A Metropolis-Hastings step can then reject it
//! purely through the arithmetic of its acceptance ratio. The formula is always evaluated
//! first and overridden afterwards, see [`core_mvdist::bound`].
//!
//! Errors are reserved for tensors of the wrong shape and for config files that can't be read.
//!
//! ```
//! use ndarray::arr1;
//! use stats_mvdist::{Multinomial, MultivariateDistribution};
//!
//! let coin = Multinomial::new(10, arr1(&[0.5, 0.5]));
//! let fair = coin.ln_pdf(&arr1(&[5.0, 5.0])).unwrap();
//! assert!((fair - (252.0f64.ln() - 10.0 * 2.0f64.ln())).abs() < 1e-9);
//!
//! let impossible = coin.ln_pdf(&arr1(&[11.0, -1.0])).unwrap();
//! assert_eq!(impossible, f64::NEG_INFINITY);
//! ```

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod errors;
pub use errors::{MvDistError, MvDistResult};

mod traits;
pub use traits::*;

pub mod continuous;
pub use continuous::{Dirichlet, MvNormal, Wishart};

pub mod discrete;
pub use discrete::Multinomial;

mod any;
pub use any::{AnyMultivariate, MvValue};

pub mod config;

mod moments;
pub use moments::SampleMoments;
