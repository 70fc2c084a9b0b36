use std::sync::Arc;

use crate::core::{make_foldable, Source};

/// Foldable over key-value pairs, see [`mapping`].
///
/// [`mapping`]: fn.mapping.html
pub type Mapping<K, V> = Source<Arc<[(K, V)]>, fn(Arc<[(K, V)]>) -> Entries<K, V>>;

/// Creates a [`Foldable`] over a key-value mapping.
///
/// Each step receives a `(key, value)` pair. Keys are visited in the order
/// in which `entries` yields them: declaration order for a vector of pairs,
/// ascending key order for a `BTreeMap`, and the (unspecified) iteration
/// order for hashed maps. The order is captured once, so every fold over the
/// returned foldable visits the pairs in the same order.
///
/// # Examples
///
/// ```
/// use asfold::*;
///
/// let pairs = mapping(vec![("a", 1), ("b", 2)])
///     .into_stream()
///     .as_array(identity)
///     .exec();
///
/// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
/// ```
///
/// [`Foldable`]: trait.Foldable.html
pub fn mapping<K, V, I>(entries: I) -> Mapping<K, V>
where
    K: Clone,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let entries: Arc<[(K, V)]> = entries.into_iter().collect();

    make_foldable(Entries::new as fn(Arc<[(K, V)]>) -> Entries<K, V>)(entries)
}

/* Entries */

/// Key cursor of a single fold over a [`Mapping`].
///
/// [`Mapping`]: type.Mapping.html
#[derive(Debug, Clone)]
pub struct Entries<K, V> {
    entries: Arc<[(K, V)]>,
    index: usize,
}

impl<K, V> Entries<K, V> {
    fn new(entries: Arc<[(K, V)]>) -> Self {
        Self { entries, index: 0 }
    }
}

impl<K, V> Iterator for Entries<K, V>
where
    K: Clone,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.get(self.index)?;
        let entry = (key.clone(), value.clone());

        self.index += 1;

        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.entries.len().saturating_sub(self.index);

        (len, Some(len))
    }
}
