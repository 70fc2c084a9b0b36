use futures::future::{ready, BoxFuture, FutureExt};

use crate::Folder;

/// Step of [`Stream::as_array`]: appends every item to the accumulator.
///
/// [`Stream::as_array`]: ../struct.Stream.html#method.as_array
#[derive(Debug, Default, Clone, Copy)]
pub struct Push;

impl<'a, T> Folder<'a, Vec<T>, T> for Push
where
    T: Send + 'a,
{
    fn consume(self, mut acc: Vec<T>, item: T) -> BoxFuture<'a, (Self, Vec<T>)> {
        acc.push(item);

        ready((self, acc)).boxed()
    }
}
