use super::{BufferKind, ParamViews, layout};
use crate::error::LayoutError;
use crate::traits::{FlatBuffer, LayerDescriptor, WeightInit};
use crate::weight_init::NoInit;
use ndarray::ArrayViewMutD;

/// Lays out parameter and gradient buffers for any layer descriptor.
///
/// `ParamInitializer` holds no per-call state: every method is a pure function
/// of the descriptor and buffer it is given. The only thing it carries is the
/// weight-initialization strategy used when `init` is asked to populate the
/// views. With the default `NoInit` strategy the value is zero-sized, so it can
/// be constructed wherever it is needed.
///
/// # Example
/// ```rust
/// use ndarray::Array1;
/// use rustyml_params::prelude::*;
///
/// let dense = DenseParams::new(3, 4);
/// let mut initializer = ParamInitializer::with_weight_init(XavierUniform::new(Some(42)));
///
/// let mut params = Array1::<f32>::zeros(initializer.num_params(&dense).unwrap());
/// let views = initializer.init(&dense, params.view_mut(), true).unwrap();
///
/// assert_eq!(views.get("W").unwrap().shape(), &[3, 4]);
/// assert_eq!(views.get("b").unwrap().shape(), &[1, 4]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamInitializer<W = NoInit> {
    weight_init: W,
}

impl ParamInitializer<NoInit> {
    /// Creates an initializer whose `init` never writes to the views.
    pub fn new() -> Self {
        Self { weight_init: NoInit }
    }
}

impl<W: WeightInit> ParamInitializer<W> {
    /// Creates an initializer that populates views with the given strategy.
    ///
    /// # Parameters
    ///
    /// * `weight_init` - Strategy applied to every parameter when `init` is called with `initialize = true`
    pub fn with_weight_init(weight_init: W) -> Self {
        Self { weight_init }
    }

    /// Returns the weight-initialization strategy.
    pub fn weight_init(&self) -> &W {
        &self.weight_init
    }

    /// Calculates the total number of parameters a layer declares. See `num_params`.
    pub fn num_params<D: LayerDescriptor + ?Sized>(&self, descriptor: &D) -> Result<usize, LayoutError> {
        layout::num_params(descriptor)
    }

    /// Returns every parameter name in layout order. See `param_keys`.
    pub fn param_keys<'d, D: LayerDescriptor + ?Sized>(&self, descriptor: &'d D) -> &'d [String] {
        layout::param_keys(descriptor)
    }

    /// Returns the names of the weight parameters. See `weight_keys`.
    pub fn weight_keys<'d, D: LayerDescriptor + ?Sized>(&self, descriptor: &'d D) -> &'d [String] {
        layout::weight_keys(descriptor)
    }

    /// Returns the names of the bias parameters. See `bias_keys`.
    pub fn bias_keys<'d, D: LayerDescriptor + ?Sized>(&self, descriptor: &'d D) -> &'d [String] {
        layout::bias_keys(descriptor)
    }

    /// Checks whether a parameter is a weight. See `is_weight_param`.
    pub fn is_weight_param<D: LayerDescriptor + ?Sized>(&self, descriptor: &D, name: &str) -> bool {
        layout::is_weight_param(descriptor, name)
    }

    /// Checks whether a parameter is a bias. See `is_bias_param`.
    pub fn is_bias_param<D: LayerDescriptor + ?Sized>(&self, descriptor: &D, name: &str) -> bool {
        layout::is_bias_param(descriptor, name)
    }

    /// Lays out a parameter buffer and optionally populates it.
    ///
    /// Layout errors are reported before anything is written. The strategy runs
    /// on each parameter in `param_keys` order, so if it fails partway through,
    /// the parameters before the failing one keep the values it already wrote
    /// and the rest of the buffer is unchanged. Nothing is rolled back.
    ///
    /// # Parameters
    ///
    /// - `descriptor` - The layer descriptor
    /// - `params_view` - Flat, mutable view over the layer's parameter storage
    /// - `initialize` - Whether to run the weight-initialization strategy on every view
    ///
    /// # Returns
    ///
    /// - `Ok(ParamViews<ArrayViewMutD<'a, f32>>)` - One view per parameter, in `param_keys` order
    /// - `Err(LayoutError)` - If the layout fails or the strategy rejects a parameter
    pub fn init<'a, D, B>(
        &mut self,
        descriptor: &D,
        params_view: B,
        initialize: bool,
    ) -> Result<ParamViews<ArrayViewMutD<'a, f32>>, LayoutError>
    where
        D: LayerDescriptor + ?Sized,
        B: FlatBuffer<'a, Elem = f32, Shaped = ArrayViewMutD<'a, f32>>,
    {
        let mut views = layout::layout(descriptor, params_view, BufferKind::Parameters)?;

        if !initialize {
            return Ok(views);
        }

        if self.weight_init.is_noop() {
            log::warn!(
                "parameter initialization requested but no weight initializer is configured; {} parameters left as-is",
                views.len()
            );
            return Ok(views);
        }

        for (name, view) in views.iter_mut() {
            let role = layout::param_role(descriptor, name);
            let shape = view.shape().to_vec();
            self.weight_init.populate(name, role, &shape, view)?;
        }

        Ok(views)
    }

    /// Lays out a gradient buffer with the same offsets and shapes as the parameters.
    ///
    /// # Parameters
    ///
    /// - `descriptor` - The layer descriptor
    /// - `gradient_view` - Flat view over the layer's gradient storage
    ///
    /// # Returns
    ///
    /// - `Ok(ParamViews<B::Shaped>)` - One gradient view per parameter, in `param_keys` order
    /// - `Err(LayoutError)` - If the layout fails
    pub fn gradients_from_flattened<'a, D, B>(
        &self,
        descriptor: &D,
        gradient_view: B,
    ) -> Result<ParamViews<B::Shaped>, LayoutError>
    where
        D: LayerDescriptor + ?Sized,
        B: FlatBuffer<'a>,
    {
        layout::layout(descriptor, gradient_view, BufferKind::Gradients)
    }
}
