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

//! The errors that can occur when building a distribution, evaluating it, or loading it from a file.
//!
//! Values outside of a distribution's support are not errors, they come back as `-inf`.
//! These are for tensors of the wrong shape and for configuration that can't be read.

use std::error::Error;
use std::fmt;
use std::io;
use yaml_rust::ScanError;

/// Helper type for a call that could go wrong.
pub type MvDistResult<T> = Result<T, MvDistError>;

/// Error type for the distributions.
#[derive(Debug)]
pub enum MvDistError {
    /// A tensor had a different shape than the distribution's parameters call for
    ShapeMismatch {
        /// Which tensor was off
        tensor: &'static str,
        /// The shape we needed
        expected: Vec<usize>,
        /// The shape we got
        found: Vec<usize>,
    },
    /// A matrix parameter or value was not square
    NotSquare {
        /// Which tensor was off
        tensor: &'static str,
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
    /// The parameters can be evaluated, but there is no way to draw from them
    InvalidParameter(&'static str),
    /// IO error when opening files
    IoError(io::Error),
    /// Parsing error when loading a yaml file
    ParsingError(ParsingError),
}

impl fmt::Display for MvDistError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MvDistError::ShapeMismatch {
                tensor,
                ref expected,
                ref found,
            } => write!(
                f,
                "{} has shape {:?}, expected {:?}",
                tensor, found, expected
            ),
            MvDistError::NotSquare { tensor, rows, cols } => {
                write!(f, "{} is {}x{}, it must be square", tensor, rows, cols)
            }
            MvDistError::InvalidParameter(message) => write!(f, "{}", message),
            // not sure that cause should be included in message
            MvDistError::IoError(ref e) => write!(f, "{}", e),
            MvDistError::ParsingError(ref e) => write!(f, "{}", e),
        }
    }
}

impl Error for MvDistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            MvDistError::IoError(ref e) => Some(e),
            MvDistError::ParsingError(ref e) => Some(e),
            MvDistError::ShapeMismatch { .. } => None,
            MvDistError::NotSquare { .. } => None,
            MvDistError::InvalidParameter(..) => None,
        }
    }
}

impl From<io::Error> for MvDistError {
    fn from(err: io::Error) -> Self {
        MvDistError::IoError(err)
    }
}

impl From<ParsingError> for MvDistError {
    fn from(err: ParsingError) -> Self {
        MvDistError::ParsingError(err)
    }
}

impl From<ScanError> for MvDistError {
    fn from(err: ScanError) -> Self {
        MvDistError::ParsingError(ParsingError::YamlScanError(err))
    }
}

impl MvDistError {
    /// A vector had the wrong length
    pub fn length(tensor: &'static str, expected: usize, found: usize) -> MvDistError {
        MvDistError::ShapeMismatch {
            tensor,
            expected: vec![expected],
            found: vec![found],
        }
    }

    /// A matrix had the wrong dimensions
    pub fn dims(
        tensor: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    ) -> MvDistError {
        MvDistError::ShapeMismatch {
            tensor,
            expected: vec![expected.0, expected.1],
            found: vec![found.0, found.1],
        }
    }
}

/// A parsing error occored while reading a distribution from yaml
#[derive(Debug)]
pub enum ParsingError {
    /// The yaml itself could not be scanned
    YamlScanError(ScanError),
    /// A field was present, but held the wrong kind of value
    MalformedYamlError {
        /// The field that was messed up
        field: String,
    },
    /// A needed field was missing from the document.
    MissingYamlError {
        /// The missing field
        field: String,
    },
    /// The `distribution` key named something we don't have
    UnknownDistribution(String),
    /// The stream had no documents in it
    EmptyYaml,
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::YamlScanError(e) => write!(f, "{}", e),
            ParsingError::MalformedYamlError { field } => {
                write!(f, "the yaml field '{}' has the wrong type", field)
            }
            ParsingError::MissingYamlError { field } => {
                write!(f, "the yaml field '{}' is missing", field)
            }
            ParsingError::UnknownDistribution(name) => {
                write!(f, "unknown distribution '{}'", name)
            }
            ParsingError::EmptyYaml => write!(f, "no yaml documents found"),
        }
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParsingError::YamlScanError(e) => Some(e),
            ParsingError::MalformedYamlError { .. } => None,
            ParsingError::MissingYamlError { .. } => None,
            ParsingError::UnknownDistribution(..) => None,
            ParsingError::EmptyYaml => None,
        }
    }
}

impl ParsingError {
    pub(crate) fn missing(field: &str) -> ParsingError {
        ParsingError::MissingYamlError {
            field: field.to_string(),
        }
    }

    pub(crate) fn malformed(field: &str) -> ParsingError {
        ParsingError::MalformedYamlError {
            field: field.to_string(),
        }
    }
}
