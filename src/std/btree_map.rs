use std::collections::BTreeMap;

use crate::{mapping, IntoFoldable, Mapping};

/// Folds over the entries in ascending key order.
impl<K, V> IntoFoldable for BTreeMap<K, V>
where
    K: Clone,
    V: Clone,
{
    type Foldable = Mapping<K, V>;

    fn into_foldable(self) -> Self::Foldable {
        mapping(self)
    }
}
