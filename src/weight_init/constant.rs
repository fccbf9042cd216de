use crate::error::LayoutError;
use crate::param_layout::ParamRole;
use crate::traits::WeightInit;
use ndarray::ArrayViewMutD;

/// Weight initializer that writes the same value into every element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantInit {
    value: f32,
}

impl ConstantInit {
    /// Creates a constant initializer.
    ///
    /// # Parameters
    ///
    /// * `value` - The value written into every element
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Creates an initializer that zeroes every element.
    pub fn zeros() -> Self {
        Self::new(0.0)
    }

    /// Returns the value written into every element.
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl WeightInit for ConstantInit {
    fn populate(
        &mut self,
        _name: &str,
        _role: Option<ParamRole>,
        _shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        let value = self.value;
        view.par_mapv_inplace(|_| value);
        Ok(())
    }
}
