use crate::error::LayoutError;
use ahash::AHashMap;

/// Insertion-ordered mapping from parameter name to declared shape.
///
/// Iteration follows declaration order; lookups by name go through a hash
/// index. Re-inserting an existing name replaces its shape in place without
/// moving it.
#[derive(Debug, Clone, Default)]
pub struct ParamShapes {
    entries: Vec<(String, Vec<usize>)>,
    index: AHashMap<String, usize>,
}

impl ParamShapes {
    /// Creates an empty shape map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the shape of a parameter.
    ///
    /// # Parameters
    ///
    /// - `name` - Parameter name
    /// - `shape` - Dimension sizes of the parameter
    ///
    /// # Returns
    ///
    /// * `Option<Vec<usize>>` - The previously declared shape, if `name` was already present
    pub fn insert(&mut self, name: impl Into<String>, shape: Vec<usize>) -> Option<Vec<usize>> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, shape)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, shape));
                None
            }
        }
    }

    /// Looks up the declared shape of a parameter.
    ///
    /// # Parameters
    ///
    /// * `name` - Parameter name
    ///
    /// # Returns
    ///
    /// * `Option<&[usize]>` - The shape, or `None` if `name` was never declared
    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1.as_slice())
    }

    /// Returns `true` if a shape is declared for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of declared parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, shape)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(name, shape)| (name.as_str(), shape.as_slice()))
    }

    /// Iterates parameter names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for ParamShapes {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ParamShapes {}

impl<S: Into<String>> FromIterator<(S, Vec<usize>)> for ParamShapes {
    fn from_iter<I: IntoIterator<Item = (S, Vec<usize>)>>(iter: I) -> Self {
        let mut shapes = ParamShapes::new();
        for (name, shape) in iter {
            shapes.insert(name, shape);
        }
        shapes
    }
}

/// Calculates the number of elements a parameter shape holds.
///
/// An empty shape describes a scalar and holds one element.
///
/// # Parameters
///
/// - `name` - Parameter name, used in the error
/// - `shape` - Declared dimension sizes
///
/// # Returns
///
/// - `Ok(usize)` - The product of all dimensions
/// - `Err(LayoutError::InvalidShape)` - If a dimension is zero or the product overflows `usize`
pub fn shape_len(name: &str, shape: &[usize]) -> Result<usize, LayoutError> {
    let invalid = || LayoutError::InvalidShape {
        name: name.to_string(),
        shape: shape.to_vec(),
    };

    shape.iter().try_fold(1usize, |acc, &dim| {
        if dim == 0 {
            return Err(invalid());
        }
        acc.checked_mul(dim).ok_or_else(invalid)
    })
}
