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

//! Post-hoc selection between a raw result and a sentinel.
use log::trace;
use ndarray::{Array, Dimension};

/// Replaces an already computed log density with `-inf` unless every condition holds.
///
/// The raw value is expected to be evaluated before this is called, even when it is
/// garbage. This keeps the arithmetic identical whether or not a guard trips.
#[inline]
pub fn bound(raw: f64, conditions: &[bool]) -> f64 {
    match conditions.iter().position(|c| !*c) {
        None => raw,
        Some(failed) => {
            trace!(
                "Guard {} of {} failed, replacing {} with -inf",
                failed,
                conditions.len(),
                raw
            );
            f64::NEG_INFINITY
        }
    }
}

/// Selects the whole tensor or a tensor full of `fallback`, element by element.
///
/// Mirrors a vectorized `where`: the shape of the output is always the shape of `value`.
pub fn switch<D: Dimension>(condition: bool, value: Array<f64, D>, fallback: f64) -> Array<f64, D> {
    value.mapv_into(|v| if condition { v } else { fallback })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn bound_passes_raw_value() {
        assert_approx_eq!(bound(-3.5, &[true, true, true]), -3.5);
        assert_approx_eq!(bound(1.25, &[]), 1.25);
    }

    #[test]
    fn bound_overrides_any_failed_guard() {
        assert_eq!(bound(-3.5, &[true, false, true]), f64::NEG_INFINITY);
        assert_eq!(bound(f64::NAN, &[false]), f64::NEG_INFINITY);
    }

    #[test]
    fn bound_keeps_nan_when_guards_hold() {
        assert!(bound(f64::NAN, &[true]).is_nan());
    }

    #[test]
    fn switch_keeps_shape() {
        let kept = switch(true, arr1(&[1.0, 2.0, 3.0]), f64::NAN);
        assert_eq!(kept, arr1(&[1.0, 2.0, 3.0]));

        let replaced = switch(false, arr2(&[[1.0, 2.0], [3.0, 4.0]]), f64::NAN);
        assert_eq!(replaced.dim(), (2, 2));
        assert!(replaced.iter().all(|v| v.is_nan()));
    }
}
