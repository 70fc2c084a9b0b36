use crate::{sequence, IntoFoldable, Sequence};

impl<'a, T> IntoFoldable for &'a [T]
where
    T: Clone,
{
    type Foldable = Sequence<T>;

    fn into_foldable(self) -> Self::Foldable {
        sequence(self)
    }
}
