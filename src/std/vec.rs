use crate::{sequence, IntoFoldable, Sequence};

impl<T> IntoFoldable for Vec<T>
where
    T: Clone,
{
    type Foldable = Sequence<T>;

    fn into_foldable(self) -> Self::Foldable {
        sequence(self)
    }
}
