use futures::future::BoxFuture;

use crate::{Driver, Flow, Foldable, Folder, Items, Stream};

/* Fold */

/// Driver returned by [`Stream::fold`], [`Stream::as_array`] and
/// [`Stream::value`]. Nothing is visited until it is driven.
///
/// [`Stream::fold`]: ../struct.Stream.html#method.fold
/// [`Stream::as_array`]: ../struct.Stream.html#method.as_array
/// [`Stream::value`]: ../struct.Stream.html#method.value
pub struct Fold<F, B, S, D> {
    stream: Stream<F>,
    initial: B,
    step: S,
    done: D,
}

impl<F, B, S, D> Fold<F, B, S, D> {
    pub fn new(stream: Stream<F>, initial: B, step: S, done: D) -> Self {
        Self {
            stream,
            initial,
            step,
            done,
        }
    }
}

impl<'a, F, B, S, D, R> Driver<'a, R> for Fold<F, B, S, D>
where
    F: Foldable<'a, Flow<B>>,
    B: Send + 'a,
    S: Folder<'a, B, <F as Items<'a>>::Item>,
    D: FnOnce(B) -> R + Send + 'a,
    R: Send + 'a,
{
    fn drive(self) -> BoxFuture<'a, R> {
        let Fold {
            stream,
            initial,
            step,
            done,
        } = self;

        stream.fold_then(initial, step, done)
    }
}
