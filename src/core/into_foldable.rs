use super::Stream;

/// `IntoFoldable` implements the conversion of a collection into a source
/// [`Foldable`], similar to the standard library's
/// [`std::iter::IntoIterator`] trait.
///
/// # Examples
///
/// ```
/// use asfold::*;
/// use futures::future::ready;
///
/// let shouting = "bar"
///     .into_stream()
///     .map(|c: char| ready(c.to_ascii_uppercase()))
///     .as_array(|cs| cs.into_iter().collect::<String>())
///     .exec();
///
/// assert_eq!(shouting, "BAR");
/// ```
///
/// [`Foldable`]: trait.Foldable.html
/// [`std::iter::IntoIterator`]: https://doc.rust-lang.org/std/iter/trait.IntoIterator.html
pub trait IntoFoldable {
    /// The foldable type that will be created.
    type Foldable;

    /// Converts `self` into a foldable source.
    fn into_foldable(self) -> Self::Foldable;

    /// Converts `self` into a [`Stream`] over its foldable source.
    ///
    /// [`Stream`]: struct.Stream.html
    fn into_stream(self) -> Stream<Self::Foldable>
    where
        Self: Sized,
    {
        Stream::new(self.into_foldable())
    }
}
