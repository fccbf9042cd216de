use crate::error::LayoutError;
use crate::param_layout::{ParamRole, ParamShapes};
use ndarray::{ArrayView1, ArrayViewD, ArrayViewMut1, ArrayViewMutD, Axis, Order, ShapeError};

/// Describes the trainable parameters a layer declares.
///
/// Implementors expose the ordered list of parameter names together with the
/// weight and bias subsets and the shape declared for each name. The order of
/// `param_keys` decides where each parameter lives inside a flat buffer, so it
/// must stay stable for the lifetime of the layer.
pub trait LayerDescriptor {
    /// Returns every parameter name in layout order.
    fn param_keys(&self) -> &[String];

    /// Returns the names of the parameters that are weights.
    fn weight_keys(&self) -> &[String];

    /// Returns the names of the parameters that are biases.
    fn bias_keys(&self) -> &[String];

    /// Returns the mapping from parameter name to declared shape.
    fn param_shapes(&self) -> &ParamShapes;

    /// Returns the declared shape of a single parameter.
    ///
    /// # Parameters
    ///
    /// * `name` - The parameter name to look up
    ///
    /// # Returns
    ///
    /// * `Option<&[usize]>` - The shape, or `None` if no shape was declared for `name`
    fn param_shape(&self, name: &str) -> Option<&[usize]> {
        self.param_shapes().get(name)
    }
}

/// A one-dimensional view over caller-owned numeric storage.
///
/// Splitting never copies: both halves keep borrowing the original storage for
/// `'a`, so every view produced from a buffer is bounded by the buffer's
/// lifetime. For mutable buffers the halves are disjoint borrows.
pub trait FlatBuffer<'a>: Sized {
    /// Element type of the underlying storage.
    type Elem;
    /// N-dimensional view produced by `into_shaped`.
    type Shaped;

    /// Returns the number of elements in the view.
    fn len(&self) -> usize;

    /// Returns `true` if the view holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the shape the view currently has.
    fn native_shape(&self) -> &[usize];

    /// Splits the view into `[0, mid)` and `[mid, len)`.
    ///
    /// # Parameters
    ///
    /// * `mid` - Number of elements kept in the first half
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    fn split_at(self, mid: usize) -> (Self, Self);

    /// Reinterprets the view with a new shape without copying.
    ///
    /// # Parameters
    ///
    /// - `shape` - Target dimension sizes
    /// - `order` - Element ordering used to map flat offsets onto the target shape
    ///
    /// # Returns
    ///
    /// - `Ok(Self::Shaped)` - The reshaped view, still aliasing the same storage
    /// - `Err(ShapeError)` - If the element counts disagree or the strides cannot be reinterpreted
    fn into_shaped(self, shape: &[usize], order: Order) -> Result<Self::Shaped, ShapeError>;
}

impl<'a, A> FlatBuffer<'a> for ArrayViewMut1<'a, A> {
    type Elem = A;
    type Shaped = ArrayViewMutD<'a, A>;

    fn len(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn native_shape(&self) -> &[usize] {
        self.shape()
    }

    fn split_at(self, mid: usize) -> (Self, Self) {
        ArrayViewMut1::split_at(self, Axis(0), mid)
    }

    fn into_shaped(self, shape: &[usize], order: Order) -> Result<Self::Shaped, ShapeError> {
        if self.shape() == shape {
            return Ok(self.into_dyn());
        }
        self.into_shape_with_order((shape.to_vec(), order))
    }
}

impl<'a, A> FlatBuffer<'a> for ArrayView1<'a, A> {
    type Elem = A;
    type Shaped = ArrayViewD<'a, A>;

    fn len(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn native_shape(&self) -> &[usize] {
        self.shape()
    }

    fn split_at(self, mid: usize) -> (Self, Self) {
        ArrayView1::split_at(self, Axis(0), mid)
    }

    fn into_shaped(self, shape: &[usize], order: Order) -> Result<Self::Shaped, ShapeError> {
        if self.shape() == shape {
            return Ok(self.into_dyn());
        }
        self.into_shape_with_order((shape.to_vec(), order))
    }
}

/// Strategy that fills freshly laid-out parameter views with starting values.
///
/// The layout manager calls `populate` once per parameter, in layout order,
/// when the caller asks for initialization.
pub trait WeightInit {
    /// Writes starting values into one parameter view.
    ///
    /// # Parameters
    ///
    /// - `name` - Parameter name
    /// - `role` - Whether the parameter is a weight, a bias, or neither (`None`)
    /// - `shape` - Declared shape of the parameter
    /// - `view` - The parameter's view into the flat buffer
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the view was populated (or intentionally left alone)
    /// - `Err(LayoutError)` - If the strategy cannot handle this parameter
    fn populate(
        &mut self,
        name: &str,
        role: Option<ParamRole>,
        shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError>;

    /// Returns `true` if this strategy never writes to the views it is given.
    fn is_noop(&self) -> bool {
        false
    }
}

impl<W: WeightInit + ?Sized> WeightInit for Box<W> {
    fn populate(
        &mut self,
        name: &str,
        role: Option<ParamRole>,
        shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        (**self).populate(name, role, shape, view)
    }

    fn is_noop(&self) -> bool {
        (**self).is_noop()
    }
}
