pub use crate::descriptor::{Conv2DParams, DenseParams, LayerParams, SimpleRnnParams};
pub use crate::error::LayoutError;
pub use crate::param_layout::{
    BufferKind, DEFAULT_WEIGHT_INIT_ORDER, ParamInitializer, ParamRole, ParamShapes, ParamViews,
    bias_keys, is_bias_param, is_weight_param, layout, num_params, param_keys, param_role,
    validate_descriptor, weight_keys,
};
pub use crate::traits::{FlatBuffer, LayerDescriptor, WeightInit};
pub use crate::weight_init::{
    ConstantInit, NoInit, NormalInit, RoleBasedInit, UniformInit, XavierUniform,
};
