use std::sync::Arc;

use crate::core::{make_foldable, Source};

/// Foldable over an ordered sequence, see [`sequence`].
///
/// [`sequence`]: fn.sequence.html
pub type Sequence<T> = Source<Arc<[T]>, fn(Arc<[T]>) -> Cursor<T>>;

/// Creates a [`Foldable`] over a sequence.
///
/// Each fold visits the items by increasing index, from `0` to `len - 1`,
/// and hands a clone of each item to the step.
///
/// [`Foldable`]: trait.Foldable.html
pub fn sequence<T, X>(xs: X) -> Sequence<T>
where
    T: Clone,
    X: Into<Arc<[T]>>,
{
    make_foldable(Cursor::new as fn(Arc<[T]>) -> Cursor<T>)(xs.into())
}

/* Cursor */

/// Index cursor of a single fold over a [`Sequence`].
///
/// [`Sequence`]: type.Sequence.html
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    xs: Arc<[T]>,
    index: usize,
}

impl<T> Cursor<T> {
    fn new(xs: Arc<[T]>) -> Self {
        Self { xs, index: 0 }
    }
}

impl<T> Iterator for Cursor<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.xs.get(self.index)?.clone();

        self.index += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.xs.len().saturating_sub(self.index);

        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Cursor<T> where T: Clone {}
