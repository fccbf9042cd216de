use crate::error::LayoutError;
use crate::traits::LayerDescriptor;
use ahash::AHashSet;

/// Validates that a descriptor's parameter declarations are consistent.
///
/// Checks, in order, that no parameter key is listed twice, that every key has
/// a declared shape, that every declared shape belongs to a key, and that no
/// name is both a weight and a bias. Shapes themselves are checked by
/// `num_params`.
///
/// # Parameters
///
/// * `descriptor` - The layer descriptor to validate
///
/// # Returns
///
/// - `Ok(())` - If the declarations are consistent
/// - `Err(LayoutError)` - `DuplicateKey`, `MissingShape`, `UnknownShape` or `RoleConflict` for the first problem found
pub fn validate_descriptor<D: LayerDescriptor + ?Sized>(descriptor: &D) -> Result<(), LayoutError> {
    let shapes = descriptor.param_shapes();

    let mut seen = AHashSet::with_capacity(descriptor.param_keys().len());
    for name in descriptor.param_keys() {
        if !seen.insert(name.as_str()) {
            return Err(LayoutError::DuplicateKey { name: name.clone() });
        }
        if !shapes.contains(name) {
            return Err(LayoutError::MissingShape { name: name.clone() });
        }
    }

    if let Some(name) = shapes.keys().find(|name| !seen.contains(name)) {
        return Err(LayoutError::UnknownShape {
            name: name.to_string(),
        });
    }

    validate_roles(descriptor)
}

/// Validates that no parameter is declared as both a weight and a bias.
///
/// # Parameters
///
/// * `descriptor` - The layer descriptor to validate
///
/// # Returns
///
/// - `Ok(())` - If the weight and bias lists are disjoint
/// - `Err(LayoutError::RoleConflict)` - Naming the first bias that is also a weight
pub fn validate_roles<D: LayerDescriptor + ?Sized>(descriptor: &D) -> Result<(), LayoutError> {
    let weights: AHashSet<&str> = descriptor
        .weight_keys()
        .iter()
        .map(String::as_str)
        .collect();

    match descriptor
        .bias_keys()
        .iter()
        .find(|name| weights.contains(name.as_str()))
    {
        Some(name) => Err(LayoutError::RoleConflict { name: name.clone() }),
        None => Ok(()),
    }
}
