use crate::{sequence, IntoFoldable, Sequence};

/// Folds over the `char`s of the string.
impl<'a> IntoFoldable for &'a str {
    type Foldable = Sequence<char>;

    fn into_foldable(self) -> Self::Foldable {
        sequence(self.chars().collect::<Vec<_>>())
    }
}
