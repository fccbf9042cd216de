use super::input_validation_function::validate_descriptor;
use super::param_shapes::shape_len;
use super::{BufferKind, ParamRole, ParamViews};
use crate::error::LayoutError;
use crate::traits::{FlatBuffer, LayerDescriptor};
use ndarray::{ErrorKind, Order, ShapeError};

/// Element order used to map flat offsets onto multi-dimensional parameter views.
///
/// Column-major: for a `[3, 4]` weight, element `[i, j]` lives at offset `i + 3 * j`.
/// This is a single convention shared by every layout pass.
pub const DEFAULT_WEIGHT_INIT_ORDER: Order = Order::ColumnMajor;

/// Calculates the total number of parameters a layer declares.
///
/// # Parameters
///
/// * `descriptor` - The layer descriptor
///
/// # Returns
///
/// - `Ok(usize)` - Sum over all declared shapes of the product of their dimensions
/// - `Err(LayoutError::InvalidShape)` - If a shape has a zero dimension or the count overflows
pub fn num_params<D: LayerDescriptor + ?Sized>(descriptor: &D) -> Result<usize, LayoutError> {
    descriptor
        .param_shapes()
        .iter()
        .try_fold(0usize, |total, (name, shape)| {
            let len = shape_len(name, shape)?;
            total
                .checked_add(len)
                .ok_or_else(|| LayoutError::InvalidShape {
                    name: name.to_string(),
                    shape: shape.to_vec(),
                })
        })
}

/// Returns every parameter name of a layer in layout order.
///
/// # Parameters
///
/// * `descriptor` - The layer descriptor
///
/// # Returns
///
/// * `&[String]` - The descriptor's parameter keys, unchanged
pub fn param_keys<D: LayerDescriptor + ?Sized>(descriptor: &D) -> &[String] {
    descriptor.param_keys()
}

/// Returns the names of a layer's weight parameters.
///
/// # Parameters
///
/// * `descriptor` - The layer descriptor
///
/// # Returns
///
/// * `&[String]` - The descriptor's weight keys, unchanged
pub fn weight_keys<D: LayerDescriptor + ?Sized>(descriptor: &D) -> &[String] {
    descriptor.weight_keys()
}

/// Returns the names of a layer's bias parameters.
///
/// # Parameters
///
/// * `descriptor` - The layer descriptor
///
/// # Returns
///
/// * `&[String]` - The descriptor's bias keys, unchanged
pub fn bias_keys<D: LayerDescriptor + ?Sized>(descriptor: &D) -> &[String] {
    descriptor.bias_keys()
}

/// Checks whether a parameter is one of the layer's weights.
///
/// # Parameters
///
/// - `descriptor` - The layer descriptor
/// - `name` - The parameter name to classify
///
/// # Returns
///
/// * `bool` - `true` if `name` is in the weight list
pub fn is_weight_param<D: LayerDescriptor + ?Sized>(descriptor: &D, name: &str) -> bool {
    descriptor.weight_keys().iter().any(|key| key == name)
}

/// Checks whether a parameter is one of the layer's biases.
///
/// # Parameters
///
/// - `descriptor` - The layer descriptor
/// - `name` - The parameter name to classify
///
/// # Returns
///
/// * `bool` - `true` if `name` is in the bias list
pub fn is_bias_param<D: LayerDescriptor + ?Sized>(descriptor: &D, name: &str) -> bool {
    descriptor.bias_keys().iter().any(|key| key == name)
}

/// Classifies a parameter by its membership in the weight and bias lists.
///
/// Weight membership is checked first; a valid descriptor never lists a name in both.
///
/// # Parameters
///
/// - `descriptor` - The layer descriptor
/// - `name` - The parameter name to classify
///
/// # Returns
///
/// * `Option<ParamRole>` - The role, or `None` for parameters that are neither
pub fn param_role<D: LayerDescriptor + ?Sized>(descriptor: &D, name: &str) -> Option<ParamRole> {
    if is_weight_param(descriptor, name) {
        Some(ParamRole::Weight)
    } else if is_bias_param(descriptor, name) {
        Some(ParamRole::Bias)
    } else {
        None
    }
}

/// Partitions a flat buffer into named, shaped views of a layer's parameters.
///
/// Parameters are assigned consecutive ranges in `param_keys` order, starting
/// at offset 0. Each range is reshaped to its declared shape with
/// `DEFAULT_WEIGHT_INIT_ORDER`. All views borrow the buffer's storage; nothing
/// is copied. Elements past the layer's total are left untouched.
///
/// Every precondition is checked before the buffer is split, so on error no
/// view is produced.
///
/// # Parameters
///
/// - `descriptor` - The layer descriptor
/// - `buffer` - Flat view over the parameter or gradient storage
/// - `kind` - What the buffer holds; the layout is the same either way
///
/// # Returns
///
/// - `Ok(ParamViews<B::Shaped>)` - One view per parameter, in `param_keys` order
/// - `Err(LayoutError)` - If the descriptor is inconsistent, a shape is invalid,
///   the buffer is too small, or a view cannot be reshaped
pub fn layout<'a, D, B>(
    descriptor: &D,
    buffer: B,
    kind: BufferKind,
) -> Result<ParamViews<B::Shaped>, LayoutError>
where
    D: LayerDescriptor + ?Sized,
    B: FlatBuffer<'a>,
{
    validate_descriptor(descriptor)?;

    let required = num_params(descriptor)?;
    let actual = buffer.len();
    if actual < required {
        return Err(LayoutError::BufferTooSmall { required, actual });
    }

    log::debug!(
        "laying out {} {} across {} of {} buffer elements",
        descriptor.param_keys().len(),
        kind,
        required,
        actual
    );
    if actual > required {
        log::debug!(
            "{} trailing {} elements left outside the layout",
            actual - required,
            kind
        );
    }

    let mut views = ParamViews::with_capacity(descriptor.param_keys().len());
    let mut rest = buffer;
    let mut cursor = 0usize;

    for name in descriptor.param_keys() {
        let shape = descriptor
            .param_shape(name)
            .ok_or_else(|| LayoutError::MissingShape { name: name.clone() })?;
        let len = shape_len(name, shape)?;

        let (sub, tail) = rest.split_at(len);
        rest = tail;

        let view = reshape(name, sub, shape)?;
        views.push(name.clone(), view);
        cursor += len;
    }

    debug_assert_eq!(cursor, required);

    Ok(views)
}

/// Reshapes one sub-view to its declared shape, leaving it as is if it already matches.
fn reshape<'a, B: FlatBuffer<'a>>(
    name: &str,
    sub: B,
    shape: &[usize],
) -> Result<B::Shaped, LayoutError> {
    let actual = sub.len();
    let expected = shape_len(name, shape)?;
    if actual != expected {
        return Err(LayoutError::ShapeMismatch {
            name: name.to_string(),
            expected,
            actual,
        });
    }

    sub.into_shaped(shape, DEFAULT_WEIGHT_INIT_ORDER)
        .map_err(|e| shape_error(name, expected, actual, e))
}

fn shape_error(name: &str, expected: usize, actual: usize, e: ShapeError) -> LayoutError {
    match e.kind() {
        ErrorKind::IncompatibleShape => LayoutError::ShapeMismatch {
            name: name.to_string(),
            expected,
            actual,
        },
        _ => LayoutError::IncompatibleLayout {
            name: name.to_string(),
            reason: e.to_string(),
        },
    }
}
