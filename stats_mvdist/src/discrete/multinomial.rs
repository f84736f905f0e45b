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

//! # Multinomial
//!
//! Counts of `k` outcomes over `n` independent trials. The counts are carried as floats
//! holding whole numbers, so they can sit in the same tensors as everything else.
//!
//! Only defined when the counts sum to `n` and `p` sums to 1. Neither is checked;
//! the bound only rejects `n = 0` and counts outside `[0, n]`.

use super::*;
use core_mvdist::{bound, ln_factorial, xlogy};
use ndarray::Zip;
use rand_distr::{Binomial, Distribution};

/// Multinomial over `n` trials with outcome probabilities `p`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Multinomial {
    n: u64,
    p: Array1<f64>,
}

impl Multinomial {
    /// `n` trials, `p` the probability of each outcome.
    pub fn new(n: u64, p: Array1<f64>) -> Multinomial {
        Multinomial { n, p }
    }

    /// Number of trials
    pub fn trials(&self) -> u64 {
        self.n
    }

    /// Outcome probabilities
    pub fn probabilities(&self) -> &Array1<f64> {
        &self.p
    }
}

impl MultivariateDistribution for Multinomial {
    type Value = Array1<f64>;

    fn dim(&self) -> usize {
        self.p.len()
    }

    /// `ln n! + Σ [x_i ln p_i - ln x_i!]`, where an outcome that never happened adds
    /// nothing even if its probability is 0.
    fn ln_pdf(&self, value: &Array1<f64>) -> MvDistResult<f64> {
        if value.len() != self.dim() {
            return Err(MvDistError::length("value", self.dim(), value.len()));
        }
        let n = self.n as f64;
        let terms = Zip::from(value)
            .and(&self.p)
            .fold(0.0, |acc, &xi, &pi| acc + xlogy(xi, pi) - ln_factorial(xi));
        let raw = ln_factorial(n) + terms;
        Ok(bound(
            raw,
            &[self.n > 0, value.iter().all(|xi| 0.0 <= *xi && *xi <= n)],
        ))
    }

    fn mean(&self) -> Array1<f64> {
        &self.p * (self.n as f64)
    }

    /// Draws each count from a binomial conditioned on the counts before it.
    /// `p` is renormalized, so it only has to be non-negative with a positive total.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MvDistResult<Array1<f64>> {
        let total: f64 = self.p.sum();
        if self.p.iter().any(|pi| !(*pi >= 0.0)) || !(total > 0.0) {
            return Err(MvDistError::InvalidParameter(
                "multinomial probabilities must be non-negative with a positive sum",
            ));
        }
        let mut counts = Array1::<f64>::zeros(self.dim());
        // leftover trials go to the last outcome that can actually happen
        let last = match self.p.iter().rposition(|pi| *pi > 0.0) {
            Some(last) => last,
            None => return Ok(counts),
        };
        let mut remaining_trials = self.n;
        let mut remaining_mass = total;
        for (i, pi) in self.p.iter().enumerate().take(last + 1) {
            if remaining_trials == 0 {
                break;
            }
            if i == last {
                counts[i] = remaining_trials as f64;
                break;
            }
            let conditional = if remaining_mass > 0.0 {
                (pi / remaining_mass).max(0.0).min(1.0)
            } else {
                0.0
            };
            let binomial = Binomial::new(remaining_trials, conditional).map_err(|_| {
                MvDistError::InvalidParameter("multinomial probabilities must be in [0, 1]")
            })?;
            let draw = binomial.sample(rng);
            counts[i] = draw as f64;
            remaining_trials -= draw;
            remaining_mass -= pi;
        }
        Ok(counts)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::SampleMoments;
    use ndarray::arr1;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use statrs::distribution::{Binomial as BinomialDist, Discrete};

    #[test]
    fn multinomial_fair_coin() {
        let multinomial = Multinomial::new(10, arr1(&[0.5, 0.5]));
        let ln_pdf = multinomial.ln_pdf(&arr1(&[5.0, 5.0])).unwrap();
        println!("{:?} at [5, 5]: {}", multinomial, ln_pdf);
        assert_approx_eq!(ln_pdf, 252.0f64.ln() - 10.0 * 2.0f64.ln(), 1e-9);
        assert_approx_eq!(ln_pdf, -1.4020427180880297, 1e-9);
    }

    #[test]
    fn multinomial_known_value() {
        let multinomial = Multinomial::new(6, arr1(&[0.2, 0.3, 0.5]));
        let ln_pdf = multinomial.ln_pdf(&arr1(&[2.0, 1.0, 3.0])).unwrap();
        assert_approx_eq!(ln_pdf, -2.40794560865187, 1e-10);
    }

    #[test]
    fn multinomial_two_outcomes_is_binomial() {
        let multinomial = Multinomial::new(10, arr1(&[0.3, 0.7]));
        let binomial = BinomialDist::new(0.3, 10).unwrap();
        for k in 0..=10u64 {
            let x = arr1(&[k as f64, (10 - k) as f64]);
            assert_approx_eq!(multinomial.ln_pdf(&x).unwrap(), binomial.ln_pmf(k), 1e-10);
        }
        assert_approx_eq!(
            multinomial.ln_pdf(&arr1(&[3.0, 7.0])).unwrap(),
            -1.32115127776689,
            1e-10
        );
    }

    #[test]
    fn multinomial_degenerate_probabilities() {
        let multinomial = Multinomial::new(7, arr1(&[1.0, 0.0, 0.0]));
        assert_approx_eq!(multinomial.ln_pdf(&arr1(&[7.0, 0.0, 0.0])).unwrap(), 0.0);
        assert_eq!(
            multinomial.ln_pdf(&arr1(&[6.0, 1.0, 0.0])).unwrap(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn multinomial_guards() {
        let multinomial = Multinomial::new(5, arr1(&[0.2, 0.8]));
        assert_eq!(
            multinomial.ln_pdf(&arr1(&[6.0, -1.0])).unwrap(),
            f64::NEG_INFINITY
        );
        assert_eq!(
            multinomial.ln_pdf(&arr1(&[-1.0, 6.0])).unwrap(),
            f64::NEG_INFINITY
        );
        let no_trials = Multinomial::new(0, arr1(&[0.2, 0.8]));
        assert_eq!(
            no_trials.ln_pdf(&arr1(&[0.0, 0.0])).unwrap(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn multinomial_large_n_does_not_overflow() {
        let multinomial = Multinomial::new(100000, arr1(&[0.25, 0.25, 0.5]));
        let ln_pdf = multinomial
            .ln_pdf(&arr1(&[25000.0, 25000.0, 50000.0]))
            .unwrap();
        assert!(ln_pdf.is_finite());
        assert!(ln_pdf < 0.0);
    }

    #[test]
    fn multinomial_mean_sums_to_n() {
        let multinomial = Multinomial::new(12, arr1(&[0.1, 0.2, 0.3, 0.4]));
        let mean = multinomial.mean();
        assert_approx_eq!(mean.sum(), 12.0);
        assert_approx_eq!(mean[3], 4.8);
    }

    #[test]
    fn multinomial_shape_error() {
        let multinomial = Multinomial::new(3, arr1(&[0.5, 0.5]));
        assert!(multinomial.ln_pdf(&arr1(&[1.0, 1.0, 1.0])).is_err());
    }

    #[test]
    fn multinomial_sample_mean() {
        let multinomial = Multinomial::new(20, arr1(&[0.1, 0.2, 0.3, 0.4]));
        let mut rng = SmallRng::seed_from_u64(0);
        let mut moments = SampleMoments::new(4);
        for _i in 0..10000 {
            let sample = multinomial.sample(&mut rng).unwrap();
            assert_approx_eq!(sample.sum(), 20.0);
            assert!(multinomial.ln_pdf(&sample).unwrap().is_finite());
            moments.add(&sample);
        }
        let mean = moments.mean();
        let expected = multinomial.mean();
        for i in 0..4 {
            assert_approx_eq!(mean[i], expected[i], 0.1);
        }
    }

    #[test]
    fn multinomial_sample_skips_impossible_outcomes() {
        let mut rng = SmallRng::seed_from_u64(0);
        for p in [
            arr1(&[0.1, 0.2, 0.7, 0.0]),
            arr1(&[0.0, 0.5, 0.0, 0.5, 0.0]),
            arr1(&[0.3, 0.3, 0.4, 0.0, 0.0]),
        ]
        .iter()
        {
            let multinomial = Multinomial::new(50, p.clone());
            for _i in 0..2000 {
                let sample = multinomial.sample(&mut rng).unwrap();
                assert_approx_eq!(sample.sum(), 50.0);
                for (count, pi) in sample.iter().zip(p.iter()) {
                    if *pi == 0.0 {
                        assert_eq!(*count, 0.0);
                    }
                }
                assert!(multinomial.ln_pdf(&sample).unwrap().is_finite());
            }
        }
    }

    #[test]
    fn multinomial_sample_rejects_bad_probabilities() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(Multinomial::new(4, arr1(&[-0.1, 1.1]))
            .sample(&mut rng)
            .is_err());
        assert!(Multinomial::new(4, arr1(&[0.0, 0.0]))
            .sample(&mut rng)
            .is_err());
    }
}
