/// Descriptor consistency checks run before any buffer is split
pub mod input_validation_function;
/// The layout algorithm and the descriptor accessors built on it
pub mod layout;
/// Parameter roles and buffer kinds
pub mod param_kind;
/// Facade bundling the layout functions with a weight-initialization strategy
pub mod param_initializer;
/// Ordered name to shape mapping
pub mod param_shapes;
/// Ordered collection of named views returned by a layout pass
pub mod param_views;

pub use input_validation_function::{validate_descriptor, validate_roles};
pub use layout::{
    DEFAULT_WEIGHT_INIT_ORDER, bias_keys, is_bias_param, is_weight_param, layout, num_params,
    param_keys, param_role, weight_keys,
};
pub use param_initializer::ParamInitializer;
pub use param_kind::{BufferKind, ParamRole};
pub use param_shapes::{ParamShapes, shape_len};
pub use param_views::ParamViews;
