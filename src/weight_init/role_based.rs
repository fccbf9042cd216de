use crate::error::LayoutError;
use crate::param_layout::ParamRole;
use crate::traits::WeightInit;
use ndarray::ArrayViewMutD;

/// Weight initializer that dispatches on the parameter's role.
///
/// Weights go to the `weight` strategy and biases to the `bias` strategy.
/// Parameters with no role are left untouched.
///
/// # Example
/// ```rust
/// use ndarray::Array1;
/// use rustyml_params::prelude::*;
///
/// let init = RoleBasedInit::new(UniformInit::new(-0.05, 0.05, Some(7)).unwrap(), ConstantInit::zeros());
/// let mut initializer = ParamInitializer::with_weight_init(init);
///
/// let dense = DenseParams::new(4, 3);
/// let mut params = Array1::<f32>::ones(15);
/// let views = initializer.init(&dense, params.view_mut(), true).unwrap();
///
/// assert!(views.get("b").unwrap().iter().all(|&b| b == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct RoleBasedInit<W, B> {
    weight: W,
    bias: B,
}

impl<W: WeightInit, B: WeightInit> RoleBasedInit<W, B> {
    /// Creates a role-based initializer.
    ///
    /// # Parameters
    ///
    /// - `weight` - Strategy applied to weight parameters
    /// - `bias` - Strategy applied to bias parameters
    pub fn new(weight: W, bias: B) -> Self {
        Self { weight, bias }
    }
}

impl<W: WeightInit, B: WeightInit> WeightInit for RoleBasedInit<W, B> {
    fn populate(
        &mut self,
        name: &str,
        role: Option<ParamRole>,
        shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        match role {
            Some(ParamRole::Weight) => self.weight.populate(name, role, shape, view),
            Some(ParamRole::Bias) => self.bias.populate(name, role, shape, view),
            None => Ok(()),
        }
    }

    fn is_noop(&self) -> bool {
        self.weight.is_noop() && self.bias.is_noop()
    }
}
