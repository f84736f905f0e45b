use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Running first and second moments of vector samples, coordinate by coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SampleMoments {
    /// The number of samples seen
    pub count: u64,
    /// The first moment, use this with the `count` to get the mean
    pub moment1: Array1<f64>,
    /// The second moment, use this with the `count` and first moment to get the variance
    pub moment2: Array1<f64>,
}

impl SampleMoments {
    /// Empty moments for samples of length `dim`
    pub fn new(dim: usize) -> SampleMoments {
        SampleMoments {
            count: 0,
            moment1: Array1::zeros(dim),
            moment2: Array1::zeros(dim),
        }
    }

    pub fn mean(&self) -> Array1<f64> {
        if self.count > 0 {
            &self.moment1 / self.count as f64
        } else {
            Array1::zeros(self.moment1.len())
        }
    }

    pub fn var(&self) -> Array1<f64> {
        if self.count > 0 {
            let m = &self.moment1 / self.count as f64;
            &self.moment2 / self.count as f64 - &m * &m
        } else {
            Array1::zeros(self.moment1.len())
        }
    }

    pub fn add(&mut self, sample: &Array1<f64>) {
        self.count += 1;
        self.moment1 += sample;
        self.moment2 += &(sample * sample);
    }

    pub fn remove(&mut self, sample: &Array1<f64>) {
        if self.count > 0 {
            self.count -= 1;
            self.moment1 -= sample;
            self.moment2 -= &(sample * sample);
            self.moment2.mapv_inplace(|m| m.max(0.0));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn moments_sanity_test() {
        let mut moments = SampleMoments::new(2);
        moments.add(&arr1(&[1.0, 2.0]));
        moments.add(&arr1(&[3.0, 2.0]));
        moments.add(&arr1(&[5.0, 2.0]));
        println!("{:?}", moments);
        assert_eq!(moments.count, 3);
        assert_approx_eq!(moments.mean()[0], 3.0);
        assert_approx_eq!(moments.mean()[1], 2.0);
        assert_approx_eq!(moments.var()[0], 8.0 / 3.0);
        assert_approx_eq!(moments.var()[1], 0.0);

        moments.remove(&arr1(&[5.0, 2.0]));
        assert_approx_eq!(moments.mean()[0], 2.0);
        assert_approx_eq!(moments.var()[0], 1.0);
    }

    #[test]
    fn moments_empty() {
        let moments = SampleMoments::new(3);
        assert_eq!(moments.mean(), Array1::<f64>::zeros(3));
        assert_eq!(moments.var(), Array1::<f64>::zeros(3));
    }
}
