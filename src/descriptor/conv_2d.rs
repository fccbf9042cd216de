use super::{BIAS_KEY, LayerParams, WEIGHT_KEY};

/// Parameter declarations of a 2D convolutional layer.
///
/// Declares the kernel `W` with shape (filters, channels, kernel_height, kernel_width)
/// followed by the bias `b` with shape (1, filters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conv2DParams {
    filters: usize,
    channels: usize,
    kernel_size: (usize, usize),
    params: LayerParams,
}

impl Conv2DParams {
    /// Creates the parameter declarations of a 2D convolutional layer.
    ///
    /// # Parameters
    ///
    /// - `filters` - Number of output filters
    /// - `channels` - Number of input channels
    /// - `kernel_size` - Kernel size as (height, width)
    pub fn new(filters: usize, channels: usize, kernel_size: (usize, usize)) -> Self {
        let params = LayerParams::new()
            .with_weight(
                WEIGHT_KEY,
                vec![filters, channels, kernel_size.0, kernel_size.1],
            )
            .with_bias(BIAS_KEY, vec![1, filters]);

        Self {
            filters,
            channels,
            kernel_size,
            params,
        }
    }

    /// Returns the number of output filters.
    pub fn filters(&self) -> usize {
        self.filters
    }

    /// Returns the number of input channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the kernel size as (height, width).
    pub fn kernel_size(&self) -> (usize, usize) {
        self.kernel_size
    }
}

delegate_layer_descriptor!(Conv2DParams, params);
