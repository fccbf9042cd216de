/// Constant-value initialization
pub mod constant;
/// Fan computation and RNG seeding shared by the random initializers
pub mod helper_functions;
/// The default initializer, which writes nothing
pub mod no_init;
/// Normal-distribution initialization
pub mod normal;
/// Dispatch to separate strategies for weights and biases
pub mod role_based;
/// Uniform-distribution initialization
pub mod uniform;
/// Xavier (Glorot) uniform initialization
pub mod xavier_uniform;

pub use constant::ConstantInit;
pub use helper_functions::fan_in_fan_out;
pub use no_init::NoInit;
pub use normal::NormalInit;
pub use role_based::RoleBasedInit;
pub use uniform::UniformInit;
pub use xavier_uniform::XavierUniform;
