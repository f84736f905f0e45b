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

//! Reads distributions out of yaml. One document per distribution, minimal examples below.
//! ```yaml
//! ---
//! distribution: mv_normal
//! mu: [0.0, 1.0]
//! tau: [[2.0, 0.5], [0.5, 1.0]]
//! ---
//! distribution: dirichlet
//! k: 3
//! a: 1.5
//! ---
//! distribution: multinomial
//! n: 10
//! p: [0.2, 0.3, 0.5]
//! ---
//! distribution: wishart
//! n: 4.0
//! p: 2
//! scale: [[1.0, 0.0], [0.0, 1.0]]
//! ```

use crate::any::AnyMultivariate;
use crate::continuous::{Dirichlet, MvNormal, Wishart};
use crate::discrete::Multinomial;
use crate::errors::{MvDistResult, ParsingError};
use crate::traits::MultivariateDistribution;
use log::debug;
use ndarray::{Array1, Array2};
use std::fs::read_to_string;
use std::path::Path;
use yaml_rust::{Yaml, YamlLoader};

/// Loads the first distribution in a yaml file.
pub fn from_yaml<P: AsRef<Path>>(path: P) -> MvDistResult<AnyMultivariate> {
    debug!("Reading distribution config {:?}", path.as_ref());
    let config = read_to_string(&path)?;
    from_yaml_str(&config)
}

/// Loads the first distribution in a yaml string.
pub fn from_yaml_str(config: &str) -> MvDistResult<AnyMultivariate> {
    let docs = YamlLoader::load_from_str(config)?;
    let doc = docs.first().ok_or(ParsingError::EmptyYaml)?;
    from_yaml_doc(doc)
}

/// Loads every distribution in a yaml stream, in order.
pub fn all_from_yaml_str(config: &str) -> MvDistResult<Vec<AnyMultivariate>> {
    let docs = YamlLoader::load_from_str(config)?;
    if docs.is_empty() {
        return Err(ParsingError::EmptyYaml.into());
    }
    docs.iter().map(from_yaml_doc).collect()
}

fn from_yaml_doc(doc: &Yaml) -> MvDistResult<AnyMultivariate> {
    let name = field(doc, "distribution")?
        .as_str()
        .ok_or_else(|| ParsingError::malformed("distribution"))?;
    let dist: AnyMultivariate = match name {
        "mv_normal" => MvNormal::new(vector(doc, "mu")?, matrix(doc, "tau")?)?.into(),
        "dirichlet" => {
            let k = count(doc, "k")? as usize;
            let a = match number(field(doc, "a")?) {
                Some(a) => Array1::from_elem(1, a),
                None => vector(doc, "a")?,
            };
            Dirichlet::new(k, a)?.into()
        }
        "multinomial" => Multinomial::new(count(doc, "n")?, vector(doc, "p")?).into(),
        "wishart" => Wishart::new(
            real(doc, "n")?,
            count(doc, "p")? as usize,
            matrix(doc, "scale")?,
        )?
        .into(),
        other => return Err(ParsingError::UnknownDistribution(other.to_string()).into()),
    };
    debug!("Loaded a {} of dimension {}", dist.name(), dist.dim());
    Ok(dist)
}

fn field<'a>(doc: &'a Yaml, name: &str) -> Result<&'a Yaml, ParsingError> {
    let value = &doc[name];
    if value.is_badvalue() {
        Err(ParsingError::missing(name))
    } else {
        Ok(value)
    }
}

// yaml has no opinion on `4` vs `4.0`, neither do we
fn number(value: &Yaml) -> Option<f64> {
    match value {
        Yaml::Real(_) => value.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn real(doc: &Yaml, name: &str) -> Result<f64, ParsingError> {
    number(field(doc, name)?).ok_or_else(|| ParsingError::malformed(name))
}

fn count(doc: &Yaml, name: &str) -> Result<u64, ParsingError> {
    match field(doc, name)?.as_i64() {
        Some(i) if i >= 0 => Ok(i as u64),
        _ => Err(ParsingError::malformed(name)),
    }
}

fn numbers(value: &Yaml, name: &str) -> Result<Vec<f64>, ParsingError> {
    value
        .as_vec()
        .ok_or_else(|| ParsingError::malformed(name))?
        .iter()
        .map(|v| number(v).ok_or_else(|| ParsingError::malformed(name)))
        .collect()
}

fn vector(doc: &Yaml, name: &str) -> Result<Array1<f64>, ParsingError> {
    Ok(Array1::from(numbers(field(doc, name)?, name)?))
}

fn matrix(doc: &Yaml, name: &str) -> Result<Array2<f64>, ParsingError> {
    let rows = field(doc, name)?
        .as_vec()
        .ok_or_else(|| ParsingError::malformed(name))?
        .iter()
        .map(|row| numbers(row, name))
        .collect::<Result<Vec<Vec<f64>>, ParsingError>>()?;
    let cols = rows.first().map(|r| r.len()).unwrap_or(0);
    if rows.iter().any(|r| r.len() != cols) {
        return Err(ParsingError::malformed(name));
    }
    let flat: Vec<f64> = rows.iter().flatten().cloned().collect();
    Array2::from_shape_vec((rows.len(), cols), flat).map_err(|_| ParsingError::malformed(name))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::any::MvValue;
    use crate::errors::MvDistError;
    use ndarray::{arr1, arr2};

    #[test]
    fn yaml_mv_normal() {
        let config = "
distribution: mv_normal
mu: [1, 2.0]
tau: [[2.0, 0.5], [0.5, 1]]
";
        let dist = from_yaml_str(config).unwrap();
        let direct = MvNormal::new(arr1(&[1.0, 2.0]), arr2(&[[2.0, 0.5], [0.5, 1.0]])).unwrap();
        let x = arr1(&[0.5, 2.5]);
        assert_approx_eq!(
            dist.ln_pdf(&x.clone().into()).unwrap(),
            direct.ln_pdf(&x).unwrap()
        );
    }

    #[test]
    fn yaml_dirichlet_scalar_and_list() {
        let scalar = from_yaml_str("distribution: dirichlet\nk: 3\na: 2\n").unwrap();
        let list = from_yaml_str("distribution: dirichlet\nk: 3\na: [2.0, 2.0, 2.0]\n").unwrap();
        let x: MvValue = arr1(&[0.2, 0.3]).into();
        assert_approx_eq!(scalar.ln_pdf(&x).unwrap(), list.ln_pdf(&x).unwrap());
    }

    #[test]
    fn yaml_stream() {
        let config = "
---
distribution: multinomial
n: 10
p: [0.5, 0.5]
---
distribution: wishart
n: 4
p: 2
scale: [[2.0, 0.5], [0.5, 1.0]]
";
        let dists = all_from_yaml_str(config).unwrap();
        assert_eq!(dists.len(), 2);
        assert_eq!(dists[0].name(), "multinomial");
        assert_eq!(dists[1].name(), "wishart");
        assert_approx_eq!(
            dists[0].ln_pdf(&arr1(&[5.0, 5.0]).into()).unwrap(),
            -1.4020427180880297
        );
        assert_approx_eq!(
            dists[1]
                .ln_pdf(&arr2(&[[2.0, 0.5], [0.5, 1.0]]).into())
                .unwrap(),
            -5.063595109432369
        );
    }

    #[test]
    fn yaml_missing_field() {
        match from_yaml_str("distribution: multinomial\nn: 10\n") {
            Err(MvDistError::ParsingError(ParsingError::MissingYamlError { field })) => {
                assert_eq!(field, "p")
            }
            other => panic!("expected a missing field, got {:?}", other),
        }
    }

    #[test]
    fn yaml_malformed_fields() {
        assert!(matches!(
            from_yaml_str("distribution: multinomial\nn: -3\np: [1.0]\n"),
            Err(MvDistError::ParsingError(ParsingError::MalformedYamlError { .. }))
        ));
        assert!(matches!(
            from_yaml_str("distribution: wishart\nn: 3\np: 2\nscale: [[1.0, 0.0], [0.0]]\n"),
            Err(MvDistError::ParsingError(ParsingError::MalformedYamlError { .. }))
        ));
        assert!(matches!(
            from_yaml_str("distribution: mv_normal\nmu: [a, b]\ntau: [[1.0]]\n"),
            Err(MvDistError::ParsingError(ParsingError::MalformedYamlError { .. }))
        ));
    }

    #[test]
    fn yaml_unknown_and_empty() {
        assert!(matches!(
            from_yaml_str("distribution: cauchy\n"),
            Err(MvDistError::ParsingError(ParsingError::UnknownDistribution(_)))
        ));
        assert!(matches!(
            from_yaml_str(""),
            Err(MvDistError::ParsingError(ParsingError::EmptyYaml))
        ));
    }

    #[test]
    fn yaml_shape_errors_surface() {
        assert!(matches!(
            from_yaml_str("distribution: wishart\nn: 3\np: 3\nscale: [[1.0, 0.0], [0.0, 1.0]]\n"),
            Err(MvDistError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn yaml_missing_file() {
        assert!(matches!(
            from_yaml("/this/file/does/not/exist.yml"),
            Err(MvDistError::IoError(_))
        ));
    }
}
