use super::{BIAS_KEY, LayerParams, WEIGHT_KEY};

/// Parameter declarations of a dense (fully connected) layer.
///
/// Declares the weight matrix `W` with shape (input_dim, output_dim) followed by
/// the bias row `b` with shape (1, output_dim), matching the layout the dense
/// layer computes `input * W + b` with.
///
/// # Fields
///
/// - `input_dim` - Input dimension size
/// - `output_dim` - Output dimension size
/// - `params` - The underlying parameter declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseParams {
    input_dim: usize,
    output_dim: usize,
    params: LayerParams,
}

impl DenseParams {
    /// Creates the parameter declarations of a dense layer.
    ///
    /// # Parameters
    ///
    /// - `input_dim` - Number of input features
    /// - `output_dim` - Number of output units
    pub fn new(input_dim: usize, output_dim: usize) -> Self {
        let params = LayerParams::new()
            .with_weight(WEIGHT_KEY, vec![input_dim, output_dim])
            .with_bias(BIAS_KEY, vec![1, output_dim]);

        Self {
            input_dim,
            output_dim,
            params,
        }
    }

    /// Returns the input dimension.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Returns the output dimension.
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }
}

delegate_layer_descriptor!(DenseParams, params);
