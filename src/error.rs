/// Error types that can occur while laying out or initializing layer parameters
///
/// # Variants
///
/// - `InvalidShape` - A declared parameter shape has a zero dimension, or its element count overflows `usize`
/// - `BufferTooSmall` - The flat buffer holds fewer elements than the layer declares
/// - `ShapeMismatch` - A sub-view's element count disagrees with its target shape on reshape
/// - `IncompatibleLayout` - A sub-view's strides cannot be reinterpreted as the target shape without copying
/// - `RoleConflict` - A parameter name is listed as both a weight and a bias
/// - `MissingShape` - A parameter key has no declared shape
/// - `UnknownShape` - A declared shape belongs to a name that is not a parameter key
/// - `DuplicateKey` - A parameter key is listed more than once
/// - `InvalidInitializer` - A weight-initialization strategy was constructed with invalid arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    InvalidShape { name: String, shape: Vec<usize> },
    BufferTooSmall { required: usize, actual: usize },
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    IncompatibleLayout { name: String, reason: String },
    RoleConflict { name: String },
    MissingShape { name: String },
    UnknownShape { name: String },
    DuplicateKey { name: String },
    InvalidInitializer(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidShape { name, shape } => write!(
                f,
                "Invalid shape for parameter '{}': {:?}. Every dimension must be positive",
                name, shape
            ),
            LayoutError::BufferTooSmall { required, actual } => write!(
                f,
                "Buffer too small: layer requires {} elements but the buffer holds {}",
                required, actual
            ),
            LayoutError::ShapeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "Shape mismatch for parameter '{}': target shape holds {} elements, view holds {}",
                name, expected, actual
            ),
            LayoutError::IncompatibleLayout { name, reason } => {
                write!(f, "Cannot reshape view for parameter '{}': {}", name, reason)
            }
            LayoutError::RoleConflict { name } => write!(
                f,
                "Parameter '{}' is declared as both a weight and a bias",
                name
            ),
            LayoutError::MissingShape { name } => {
                write!(f, "Parameter '{}' has no declared shape", name)
            }
            LayoutError::UnknownShape { name } => write!(
                f,
                "Shape declared for '{}', which is not a parameter key",
                name
            ),
            LayoutError::DuplicateKey { name } => {
                write!(f, "Parameter key '{}' is listed more than once", name)
            }
            LayoutError::InvalidInitializer(msg) => {
                write!(f, "Invalid weight initializer: {}", msg)
            }
        }
    }
}

/// Implements the standard error trait for LayoutError
impl std::error::Error for LayoutError {}
