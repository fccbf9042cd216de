/// Role a named parameter plays during optimization and regularization
///
/// # Variants
///
/// - `Weight` - The parameter is listed in the layer's weight keys
/// - `Bias` - The parameter is listed in the layer's bias keys
///
/// Parameters listed in neither have no role and are represented as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamRole {
    Weight,
    Bias,
}

/// What a flat buffer holds
///
/// The layout is identical for both kinds; only the meaning of the values differs.
///
/// # Variants
///
/// - `Parameters` - Parameter values
/// - `Gradients` - Gradients of the parameters with the same layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Parameters,
    Gradients,
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferKind::Parameters => write!(f, "parameters"),
            BufferKind::Gradients => write!(f, "gradients"),
        }
    }
}
