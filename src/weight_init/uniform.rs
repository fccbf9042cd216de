use super::helper_functions::seeded_rng;
use crate::error::LayoutError;
use crate::param_layout::ParamRole;
use crate::traits::WeightInit;
use ndarray::ArrayViewMutD;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};

/// Weight initializer that samples every element uniformly from `[low, high)`.
///
/// # Fields
///
/// - `distribution` - The uniform distribution to sample from
/// - `rng` - Random number generator, seeded at construction
#[derive(Debug, Clone)]
pub struct UniformInit {
    distribution: Uniform<f32>,
    rng: StdRng,
}

impl UniformInit {
    /// Creates a uniform initializer.
    ///
    /// # Parameters
    ///
    /// - `low` - Inclusive lower bound
    /// - `high` - Exclusive upper bound
    /// - `seed` - Optional seed for reproducible sampling
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new uniform initializer
    /// - `Err(LayoutError::InvalidInitializer)` - If `low >= high` or a bound is not finite
    pub fn new(low: f32, high: f32, seed: Option<u64>) -> Result<Self, LayoutError> {
        let distribution = Uniform::new(low, high).map_err(|e| {
            LayoutError::InvalidInitializer(format!(
                "uniform range [{}, {}) is invalid: {}",
                low, high, e
            ))
        })?;

        Ok(Self {
            distribution,
            rng: seeded_rng(seed),
        })
    }
}

impl WeightInit for UniformInit {
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
