use crate::errors::{MvDistError, MvDistResult};
use crate::traits::*;
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

mod multinomial;
pub use multinomial::Multinomial;
