use super::helper_functions::{fan_in_fan_out, seeded_rng};
use crate::error::LayoutError;
use crate::param_layout::ParamRole;
use crate::traits::WeightInit;
use ndarray::ArrayViewMutD;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};

/// Xavier (Glorot) uniform initialization.
///
/// Weights are sampled from `U(-limit, limit)` with
/// `limit = sqrt(6 / (fan_in + fan_out))`, where the fans are derived from the
/// parameter's shape (see `fan_in_fan_out`). Biases are zeroed. Parameters
/// that are neither weights nor biases are left untouched.
#[derive(Debug, Clone)]
pub struct XavierUniform {
    rng: StdRng,
}

impl XavierUniform {
    /// Creates a Xavier uniform initializer.
    ///
    /// # Parameters
    ///
    /// * `seed` - Optional seed for reproducible sampling
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }

    /// Calculates the sampling bound used for a weight of the given shape.
    pub fn limit(shape: &[usize]) -> f32 {
        let (fan_in, fan_out) = fan_in_fan_out(shape);
        (6.0_f32 / (fan_in + fan_out) as f32).sqrt()
    }
}

impl WeightInit for XavierUniform {
    fn populate(
        &mut self,
        name: &str,
        role: Option<ParamRole>,
        shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        match role {
            Some(ParamRole::Weight) => {
                let limit = Self::limit(shape);
                let distribution = Uniform::new(-limit, limit).map_err(|e| {
                    LayoutError::InvalidInitializer(format!(
                        "xavier bound {} for '{}' is invalid: {}",
                        limit, name, e
                    ))
                })?;
                view.map_inplace(|x| *x = distribution.sample(&mut self.rng));
            }
            Some(ParamRole::Bias) => view.fill(0.0),
            None => {}
        }
        Ok(())
    }
}
