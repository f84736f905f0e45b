//! # Continuous distributions
//!
//! Densities over vectors (the normal and the simplex) and over positive definite matrices.

use crate::errors::{MvDistError, MvDistResult};
use crate::traits::*;
use log::warn;
use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

mod dirichlet;
mod mv_normal;
mod wishart;
pub use dirichlet::Dirichlet;
pub use mv_normal::MvNormal;
pub use wishart::Wishart;
