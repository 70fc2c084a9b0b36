use futures::future::{ready, BoxFuture, FutureExt};

use crate::Folder;

/// Step of [`Stream::value`]: resumes with the accumulator it received and
/// ignores the item.
///
/// [`Stream::value`]: ../struct.Stream.html#method.value
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl<'a, B, T> Folder<'a, B, T> for PassThrough
where
    B: Send + 'a,
{
    fn consume(self, acc: B, _item: T) -> BoxFuture<'a, (Self, B)> {
        ready((self, acc)).boxed()
    }
}
