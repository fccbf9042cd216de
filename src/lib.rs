/// Error type shared by every layout and initialization operation.
///
/// `LayoutError` covers invalid shapes, undersized buffers, reshape failures,
/// inconsistent descriptors and invalid initializer arguments. Every fallible
/// function in this crate returns `Result<T, LayoutError>`.
pub mod error;

/// Capability traits the layout manager is written against.
///
/// - `LayerDescriptor` - A layer's ordered parameter names, weight and bias subsets, and shapes
/// - `FlatBuffer` - A one-dimensional view that can be split without copying and reshaped
/// - `WeightInit` - A strategy that fills freshly laid-out parameter views
pub mod traits;

/// Partitioning of flat parameter and gradient buffers into named, shaped views.
///
/// Given a `LayerDescriptor`, this module counts the layer's parameters,
/// classifies each one as a weight or a bias, and carves a flat buffer into one
/// view per parameter. Parameters occupy consecutive ranges in declaration
/// order and are reshaped with the column-major `DEFAULT_WEIGHT_INIT_ORDER`.
/// Views borrow the buffer, so they cannot outlive it, and mutable views never
/// overlap.
///
/// # Core Components
/// - `num_params` - Total element count of all declared shapes
/// - `layout` - The partitioning algorithm, for parameter and gradient buffers alike
/// - `validate_descriptor` - Consistency checks run before a buffer is split
/// - `ParamInitializer` - Layout plus an injectable weight-initialization strategy
/// - `ParamShapes`, `ParamViews` - Ordered name-keyed collections of shapes and views
///
/// # Examples
/// ```rust
/// use ndarray::Array1;
/// use rustyml_params::prelude::*;
///
/// let params = LayerParams::new()
///     .with_weight("W", vec![3, 4])
///     .with_bias("b", vec![4]);
///
/// let mut buffer = Array1::from_iter((0..16).map(|v| v as f32));
/// let views = layout(&params, buffer.view_mut(), BufferKind::Parameters).unwrap();
///
/// let w = views.get("W").unwrap();
/// assert_eq!(w.shape(), &[3, 4]);
/// assert_eq!(w[[1, 0]], 1.0); // column-major
/// assert_eq!(views.get("b").unwrap()[[0]], 12.0);
/// ```
pub mod param_layout;

/// Parameter declarations of common layer types.
///
/// - **LayerParams**: General-purpose builder for arbitrary named parameters
/// - **DenseParams**: Weight (input_dim, output_dim) and bias (1, output_dim)
/// - **SimpleRnnParams**: Input kernel, recurrent kernel and bias
/// - **Conv2DParams**: Kernel (filters, channels, kh, kw) and bias (1, filters)
pub mod descriptor;

/// Weight-initialization strategies for `ParamInitializer`.
///
/// - **NoInit**: Leaves views untouched (the default); requesting initialization with it logs a warning
/// - **ConstantInit**: Fills every element with one value
/// - **UniformInit** / **NormalInit**: Random sampling with an optional seed
/// - **XavierUniform**: Glorot uniform weights and zero biases
/// - **RoleBasedInit**: Separate strategies for weights and biases
pub mod weight_init;

/// A convenience module that re-exports the most commonly used types, traits and functions.
///
/// # Examples
/// ```rust
/// use rustyml_params::prelude::*;
///
/// let dense = DenseParams::new(4, 3);
/// assert_eq!(num_params(&dense).unwrap(), 15);
/// ```
pub mod prelude;
