use super::helper_functions::seeded_rng;
use crate::error::LayoutError;
use crate::param_layout::ParamRole;
use crate::traits::WeightInit;
use ndarray::ArrayViewMutD;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Weight initializer that samples every element from a normal distribution.
#[derive(Debug, Clone)]
pub struct NormalInit {
    distribution: Normal<f32>,
    rng: StdRng,
}

impl NormalInit {
    /// Creates a normal initializer.
    ///
    /// # Parameters
    ///
    /// - `mean` - Mean of the distribution
    /// - `std_dev` - Standard deviation of the distribution
    /// - `seed` - Optional seed for reproducible sampling
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new normal initializer
    /// - `Err(LayoutError::InvalidInitializer)` - If `std_dev` is negative or NaN
    pub fn new(mean: f32, std_dev: f32, seed: Option<u64>) -> Result<Self, LayoutError> {
        // rand_distr only rejects a non-finite std_dev
        if std_dev.is_nan() || std_dev < 0.0 {
            return Err(LayoutError::InvalidInitializer(format!(
                "normal distribution std_dev must be non-negative, got {}",
                std_dev
            )));
        }

        let distribution = Normal::new(mean, std_dev).map_err(|e| {
            LayoutError::InvalidInitializer(format!(
                "normal distribution (mean {}, std_dev {}) is invalid: {}",
                mean, std_dev, e
            ))
        })?;

        Ok(Self {
            distribution,
            rng: seeded_rng(seed),
        })
    }
}

impl WeightInit for NormalInit {
    fn populate(
        &mut self,
        _name: &str,
        _role: Option<ParamRole>,
        _shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        view.map_inplace(|x| *x = self.distribution.sample(&mut self.rng));
        Ok(())
    }
}
