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

//! Numeric kernels shared by the distributions in `stats_mvdist`.
//!
//! Everything in here is a pure function of its inputs. Out of support results are
//! signalled with sentinels (`-inf` for log densities, `NaN` for derived tensors), never
//! with errors, so that a sampler can add the results straight into an acceptance ratio.

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

mod bound;
pub use bound::{bound, switch};

pub mod linalg;

mod special;
pub use special::{ln_factorial, ln_multivariate_gamma, logpow, xlogy};
