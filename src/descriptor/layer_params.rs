use crate::param_layout::ParamShapes;
use crate::traits::LayerDescriptor;

/// General-purpose layer descriptor assembled from named parameter declarations.
///
/// Parameter keys are laid out in the order they are declared. The builder
/// does not reject inconsistent declarations (such as a name declared twice);
/// those are reported by `validate_descriptor` when a buffer is laid out, so a
/// descriptor built from external data fails at the same place as one built
/// by hand.
///
/// # Example
/// ```rust
/// use rustyml_params::prelude::*;
///
/// let params = LayerParams::new()
///     .with_weight("W", vec![3, 4])
///     .with_bias("b", vec![4]);
///
/// assert_eq!(num_params(&params).unwrap(), 16);
/// assert!(is_weight_param(&params, "W"));
/// assert!(is_bias_param(&params, "b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerParams {
    param_keys: Vec<String>,
    weight_keys: Vec<String>,
    bias_keys: Vec<String>,
    param_shapes: ParamShapes,
}

impl LayerParams {
    /// Creates a descriptor with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a descriptor from raw key lists and shapes, without checking them.
    ///
    /// # Parameters
    ///
    /// - `param_keys` - Every parameter name in layout order
    /// - `weight_keys` - Names of the weight parameters
    /// - `bias_keys` - Names of the bias parameters
    /// - `param_shapes` - Declared shape of each parameter
    pub fn from_parts(
        param_keys: Vec<String>,
        weight_keys: Vec<String>,
        bias_keys: Vec<String>,
        param_shapes: ParamShapes,
    ) -> Self {
        Self {
            param_keys,
            weight_keys,
            bias_keys,
            param_shapes,
        }
    }

    /// Declares a weight parameter.
    pub fn with_weight(mut self, name: impl Into<String>, shape: Vec<usize>) -> Self {
        self.add_weight(name, shape);
        self
    }

    /// Declares a bias parameter.
    pub fn with_bias(mut self, name: impl Into<String>, shape: Vec<usize>) -> Self {
        self.add_bias(name, shape);
        self
    }

    /// Declares a parameter that is neither a weight nor a bias.
    pub fn with_param(mut self, name: impl Into<String>, shape: Vec<usize>) -> Self {
        self.add_param(name, shape);
        self
    }

    /// Declares a weight parameter in place.
    ///
    /// # Parameters
    ///
    /// - `name` - Parameter name
    /// - `shape` - Dimension sizes of the parameter
    pub fn add_weight(&mut self, name: impl Into<String>, shape: Vec<usize>) -> &mut Self {
        let name = name.into();
        self.weight_keys.push(name.clone());
        self.add_param(name, shape)
    }

    /// Declares a bias parameter in place.
    ///
    /// # Parameters
    ///
    /// - `name` - Parameter name
    /// - `shape` - Dimension sizes of the parameter
    pub fn add_bias(&mut self, name: impl Into<String>, shape: Vec<usize>) -> &mut Self {
        let name = name.into();
        self.bias_keys.push(name.clone());
        self.add_param(name, shape)
    }

    /// Declares a parameter with no role in place. The name is appended to the layout order.
    ///
    /// # Parameters
    ///
    /// - `name` - Parameter name
    /// - `shape` - Dimension sizes of the parameter
    pub fn add_param(&mut self, name: impl Into<String>, shape: Vec<usize>) -> &mut Self {
        let name = name.into();
        self.param_keys.push(name.clone());
        self.param_shapes.insert(name, shape);
        self
    }
}

impl LayerDescriptor for LayerParams {
    fn param_keys(&self) -> &[String] {
        &self.param_keys
    }

    fn weight_keys(&self) -> &[String] {
        &self.weight_keys
    }

    fn bias_keys(&self) -> &[String] {
        &self.bias_keys
    }

    fn param_shapes(&self) -> &ParamShapes {
        &self.param_shapes
    }
}
