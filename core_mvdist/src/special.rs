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

//! Log space special functions.
use statrs::function::factorial;
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;

/// statrs keeps a table of the first 171 factorials.
const FACTORIAL_CACHE_LEN: f64 = 171.0;

/// `ln(x!)` for a count stored as a float.
///
/// Small whole numbers come out of statrs' table, everything else goes through `ln_gamma(x + 1)`.
/// Negative or fractional counts are not rejected here, the callers bound them away.
pub fn ln_factorial(x: f64) -> f64 {
    if x.fract() == 0.0 && x >= 0.0 && x < FACTORIAL_CACHE_LEN {
        factorial::ln_factorial(x as u64)
    } else {
        ln_gamma(x + 1.0)
    }
}

/// Log of the multivariate gamma function of order `p`:
/// `ln Γ_p(a) = p(p-1)/4 ln(π) + Σ_{j=1}^{p} ln Γ(a + (1 - j)/2)`
pub fn ln_multivariate_gamma(p: usize, a: f64) -> f64 {
    let p_f = p as f64;
    let mut result = p_f * (p_f - 1.0) / 4.0 * PI.ln();
    for j in 0..p {
        result += ln_gamma(a - (j as f64) / 2.0);
    }
    result
}

/// `m * ln(x)`, taking `0^0 = 1` so that an empty coordinate with a flat exponent adds nothing.
#[inline]
pub fn logpow(x: f64, m: f64) -> f64 {
    if x == 0.0 && m == 0.0 {
        0.0
    } else {
        m * x.ln()
    }
}

/// `x * ln(y)`, which is `0` whenever `x` is `0`, even for `y = 0`.
#[inline]
pub fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}
