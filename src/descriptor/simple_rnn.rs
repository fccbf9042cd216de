use super::{BIAS_KEY, LayerParams, RECURRENT_WEIGHT_KEY, WEIGHT_KEY};

/// Parameter declarations of a simple recurrent layer.
///
/// # Fields
///
/// - `input_dim` - Number of input features per time step
/// - `units` - Number of recurrent units
/// - `params` - `W` (input_dim, units), `RW` (units, units) and `b` (1, units), in that order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRnnParams {
    input_dim: usize,
    units: usize,
    params: LayerParams,
}

impl SimpleRnnParams {
    pub fn new(input_dim: usize, units: usize) -> Self {
        let params = LayerParams::new()
            .with_weight(WEIGHT_KEY, vec![input_dim, units])
            .with_weight(RECURRENT_WEIGHT_KEY, vec![units, units])
            .with_bias(BIAS_KEY, vec![1, units]);

        Self {
            input_dim,
            units,
            params,
        }
    }

    /// Returns the input feature dimension.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Returns the number of recurrent units.
    pub fn units(&self) -> usize {
        self.units
    }
}

delegate_layer_descriptor!(SimpleRnnParams, params);
