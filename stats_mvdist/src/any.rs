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

//! # Tagged distributions
//!
//! For when the distribution is only known at runtime, for example when it was read
//! from a config file. Values are vectors or matrices, tagged the same way.

use crate::continuous::{Dirichlet, MvNormal, Wishart};
use crate::discrete::Multinomial;
use crate::errors::{MvDistError, MvDistResult};
use crate::traits::*;
use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A vector or a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MvValue {
    ///
    Vector(Array1<f64>),
    ///
    Matrix(Array2<f64>),
}

impl MvValue {
    /// The shape, `[k]` for vectors and `[rows, cols]` for matrices
    pub fn shape(&self) -> Vec<usize> {
        match self {
            MvValue::Vector(v) => vec![v.len()],
            MvValue::Matrix(m) => vec![m.nrows(), m.ncols()],
        }
    }
}

impl From<Array1<f64>> for MvValue {
    fn from(v: Array1<f64>) -> MvValue {
        MvValue::Vector(v)
    }
}

impl From<Array2<f64>> for MvValue {
    fn from(m: Array2<f64>) -> MvValue {
        MvValue::Matrix(m)
    }
}

/// One of the four distributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyMultivariate {
    ///
    MvNormal(MvNormal),
    ///
    Dirichlet(Dirichlet),
    ///
    Multinomial(Multinomial),
    ///
    Wishart(Wishart),
}

impl AnyMultivariate {
    /// The name used for this distribution in config files
    pub fn name(&self) -> &'static str {
        match self {
            AnyMultivariate::MvNormal(_) => "mv_normal",
            AnyMultivariate::Dirichlet(_) => "dirichlet",
            AnyMultivariate::Multinomial(_) => "multinomial",
            AnyMultivariate::Wishart(_) => "wishart",
        }
    }

    /// The mode, `None` for distributions that don't define one.
    pub fn mode(&self) -> Option<MvValue> {
        match self {
            AnyMultivariate::MvNormal(d) => Some(d.mode().into()),
            AnyMultivariate::Dirichlet(d) => Some(d.mode().into()),
            AnyMultivariate::Multinomial(_) => None,
            AnyMultivariate::Wishart(d) => Some(d.mode().into()),
        }
    }

    /// The median, `None` for distributions that don't define one.
    pub fn median(&self) -> Option<MvValue> {
        match self {
            AnyMultivariate::MvNormal(d) => Some(d.median().into()),
            _ => None,
        }
    }

    fn expected_shape(&self) -> Vec<usize> {
        match self {
            AnyMultivariate::Wishart(d) => vec![d.dim(), d.dim()],
            _ => vec![self.dim()],
        }
    }
}

impl MultivariateDistribution for AnyMultivariate {
    type Value = MvValue;

    fn dim(&self) -> usize {
        match self {
            AnyMultivariate::MvNormal(d) => d.dim(),
            AnyMultivariate::Dirichlet(d) => d.dim(),
            AnyMultivariate::Multinomial(d) => d.dim(),
            AnyMultivariate::Wishart(d) => d.dim(),
        }
    }

    fn ln_pdf(&self, value: &MvValue) -> MvDistResult<f64> {
        match (self, value) {
            (AnyMultivariate::MvNormal(d), MvValue::Vector(v)) => d.ln_pdf(v),
            (AnyMultivariate::Dirichlet(d), MvValue::Vector(v)) => d.ln_pdf(v),
            (AnyMultivariate::Multinomial(d), MvValue::Vector(v)) => d.ln_pdf(v),
            (AnyMultivariate::Wishart(d), MvValue::Matrix(m)) => d.ln_pdf(m),
            _ => Err(MvDistError::ShapeMismatch {
                tensor: "value",
                expected: self.expected_shape(),
                found: value.shape(),
            }),
        }
    }

    fn mean(&self) -> MvValue {
        match self {
            AnyMultivariate::MvNormal(d) => d.mean().into(),
            AnyMultivariate::Dirichlet(d) => d.mean().into(),
            AnyMultivariate::Multinomial(d) => d.mean().into(),
            AnyMultivariate::Wishart(d) => d.mean().into(),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MvDistResult<MvValue> {
        Ok(match self {
            AnyMultivariate::MvNormal(d) => d.sample(rng)?.into(),
            AnyMultivariate::Dirichlet(d) => d.sample(rng)?.into(),
            AnyMultivariate::Multinomial(d) => d.sample(rng)?.into(),
            AnyMultivariate::Wishart(d) => d.sample(rng)?.into(),
        })
    }
}

impl From<MvNormal> for AnyMultivariate {
    fn from(d: MvNormal) -> AnyMultivariate {
        AnyMultivariate::MvNormal(d)
    }
}

impl From<Dirichlet> for AnyMultivariate {
    fn from(d: Dirichlet) -> AnyMultivariate {
        AnyMultivariate::Dirichlet(d)
    }
}

impl From<Multinomial> for AnyMultivariate {
    fn from(d: Multinomial) -> AnyMultivariate {
        AnyMultivariate::Multinomial(d)
    }
}

impl From<Wishart> for AnyMultivariate {
    fn from(d: Wishart) -> AnyMultivariate {
        AnyMultivariate::Wishart(d)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn any_dispatches_ln_pdf() {
        let multinomial = Multinomial::new(10, arr1(&[0.5, 0.5]));
        let direct = multinomial.ln_pdf(&arr1(&[5.0, 5.0])).unwrap();
        let any = AnyMultivariate::from(multinomial);
        assert_eq!(any.name(), "multinomial");
        let tagged = any.ln_pdf(&arr1(&[5.0, 5.0]).into()).unwrap();
        assert_approx_eq!(direct, tagged);
    }

    #[test]
    fn any_wrong_value_kind_is_shape_error() {
        let any = AnyMultivariate::from(Wishart::new(3.0, 2, Array2::eye(2)).unwrap());
        match any.ln_pdf(&MvValue::Vector(arr1(&[1.0, 2.0]))) {
            Err(MvDistError::ShapeMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, vec![2, 2]);
                assert_eq!(found, vec![2]);
            }
            other => panic!("expected a shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn any_mode_and_median_availability() {
        let normal: AnyMultivariate = MvNormal::standard(arr1(&[1.0, 2.0])).into();
        assert_eq!(normal.median(), Some(MvValue::Vector(arr1(&[1.0, 2.0]))));
        assert_eq!(normal.mode(), Some(MvValue::Vector(arr1(&[1.0, 2.0]))));

        let multinomial: AnyMultivariate = Multinomial::new(4, arr1(&[0.5, 0.5])).into();
        assert_eq!(multinomial.mode(), None);
        assert_eq!(multinomial.median(), None);
        assert_eq!(multinomial.mean(), MvValue::Vector(arr1(&[2.0, 2.0])));

        let wishart: AnyMultivariate = Wishart::new(4.0, 2, arr2(&[[1.0, 0.0], [0.0, 2.0]]))
            .unwrap()
            .into();
        assert_eq!(
            wishart.mode(),
            Some(MvValue::Matrix(arr2(&[[1.0, 0.0], [0.0, 2.0]])))
        );
        assert_eq!(wishart.median(), None);
    }

    #[test]
    fn any_batch_matches_single() {
        let dirichlet: AnyMultivariate = Dirichlet::new(3, arr1(&[2.0, 3.0, 4.0])).unwrap().into();
        let values: Vec<MvValue> = vec![
            arr1(&[0.2, 0.3]).into(),
            arr1(&[0.1, 0.1]).into(),
            arr1(&[0.6, 0.3]).into(),
        ];
        let batch = dirichlet.batch_ln_pdf(&values).unwrap();
        for (value, ln_pdf) in values.iter().zip(batch.iter()) {
            assert_approx_eq!(dirichlet.ln_pdf(value).unwrap(), *ln_pdf);
        }
        let total: f64 = batch.iter().sum();
        assert_approx_eq!(dirichlet.ln_likelihood(&values).unwrap(), total);
    }

    #[test]
    fn any_likelihood_propagates_errors() {
        let normal: AnyMultivariate = MvNormal::standard(arr1(&[0.0, 0.0])).into();
        let values: Vec<MvValue> = vec![arr1(&[0.0, 0.0]).into(), arr1(&[0.0]).into()];
        assert!(normal.ln_likelihood(&values).is_err());
    }
}
