/// A macro that implements `LayerDescriptor` for a layer type by delegating to
/// one of its `LayerParams` fields.
///
/// # Parameters
///
/// - `$layer` - The layer descriptor type
/// - `$field` - The field holding the layer's `LayerParams`
macro_rules! delegate_layer_descriptor {
    ($layer:ty, $field:ident) => {
        impl $crate::traits::LayerDescriptor for $layer {
            fn param_keys(&self) -> &[String] {
                $crate::traits::LayerDescriptor::param_keys(&self.$field)
            }

            fn weight_keys(&self) -> &[String] {
                $crate::traits::LayerDescriptor::weight_keys(&self.$field)
            }

            fn bias_keys(&self) -> &[String] {
                $crate::traits::LayerDescriptor::bias_keys(&self.$field)
            }

            fn param_shapes(&self) -> &$crate::param_layout::ParamShapes {
                $crate::traits::LayerDescriptor::param_shapes(&self.$field)
            }
        }
    };
}

/// Parameter declarations of a 2D convolutional layer
pub mod conv_2d;
/// Parameter declarations of a dense (fully connected) layer
pub mod dense;
/// General-purpose builder for arbitrary layers
pub mod layer_params;
/// Parameter declarations of a simple recurrent layer
pub mod simple_rnn;

pub use conv_2d::Conv2DParams;
pub use dense::DenseParams;
pub use layer_params::LayerParams;
pub use simple_rnn::SimpleRnnParams;

/// Name of the main weight parameter declared by the built-in layer descriptors
pub const WEIGHT_KEY: &str = "W";
/// Name of the recurrent weight parameter declared by recurrent layer descriptors
pub const RECURRENT_WEIGHT_KEY: &str = "RW";
/// Name of the bias parameter declared by the built-in layer descriptors
pub const BIAS_KEY: &str = "b";
