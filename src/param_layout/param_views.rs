use ahash::AHashMap;

/// Named parameter views produced by a layout pass.
///
/// Iteration follows the descriptor's parameter key order. Consumers should
/// look views up by name; the ordering is exposed for reproducibility, not as
/// a positional contract.
///
/// `V` is usually `ArrayViewMutD<'a, f32>` or `ArrayViewD<'a, f32>`, so the
/// collection cannot outlive the buffer it was carved from.
#[derive(Debug)]
pub struct ParamViews<V> {
    entries: Vec<(String, V)>,
    index: AHashMap<String, usize>,
}

impl<V> ParamViews<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Appends a view. Callers guarantee names are unique.
    pub(crate) fn push(&mut self, name: String, view: V) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, view));
    }

    /// Looks up the view of a parameter.
    ///
    /// # Parameters
    ///
    /// * `name` - Parameter name
    ///
    /// # Returns
    ///
    /// * `Option<&V>` - The view, or `None` if the layout has no parameter with that name
    pub fn get(&self, name: &str) -> Option<&V> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Looks up the view of a parameter for writing.
    ///
    /// # Parameters
    ///
    /// * `name` - Parameter name
    ///
    /// # Returns
    ///
    /// * `Option<&mut V>` - The view, or `None` if the layout has no parameter with that name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Returns `true` if the layout produced a view named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Takes a view out of the collection, keeping the order of the rest.
    ///
    /// # Parameters
    ///
    /// * `name` - Name of the parameter to take
    ///
    /// # Returns
    ///
    /// * `Option<V>` - The view, or `None` if no parameter has that name
    pub fn remove(&mut self, name: &str) -> Option<V> {
        let i = self.index.remove(name)?;
        let (_, view) = self.entries.remove(i);
        for (j, (key, _)) in self.entries.iter().enumerate().skip(i) {
            self.index.insert(key.clone(), j);
        }
        Some(view)
    }

    /// Returns the number of views.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the layout produced no views.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates parameter names in layout order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates `(name, view)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, view)| (name.as_str(), view))
    }

    /// Iterates `(name, view)` pairs in layout order with mutable access to each view.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> {
        self.entries
            .iter_mut()
            .map(|(name, view)| (name.as_str(), view))
    }
}

impl<V> IntoIterator for ParamViews<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
