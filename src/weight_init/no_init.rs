use crate::error::LayoutError;
use crate::param_layout::ParamRole;
use crate::traits::WeightInit;
use ndarray::ArrayViewMutD;

/// Weight initializer that leaves every view as it is.
///
/// This is the default strategy of `ParamInitializer`. When initialization is
/// requested with it, the initializer logs a warning instead of writing values,
/// so a missing strategy is visible rather than silently ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoInit;

impl WeightInit for NoInit {
    fn populate(
        &mut self,
        _name: &str,
        _role: Option<ParamRole>,
        _shape: &[usize],
        _view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        Ok(())
    }

    fn is_noop(&self) -> bool {
        true
    }
}
