use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use tracing::trace;

use crate::{Combinator, CombinatorStep, Flow, Folder};

/* Filter */

pub struct Filter<O> {
    operation: O,
}

impl<O> Filter<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<'a, T, O, R> Combinator<'a, T> for Filter<O>
where
    T: Send + 'a,
    O: Fn(&T) -> R + Send + Sync + 'a,
    R: Future<Output = bool> + Send + 'a,
{
    type Output = T;
}

impl<'a, B, T, O, R> CombinatorStep<'a, B, T> for Filter<O>
where
    B: Send + 'a,
    T: Send + 'a,
    O: Fn(&T) -> R + Send + Sync + 'a,
    R: Future<Output = bool> + Send + 'a,
{
    fn process<S>(&self, acc: Flow<B>, item: T, step: S) -> BoxFuture<'a, (S, Flow<B>)>
    where
        S: Folder<'a, Flow<B>, Self::Output>,
    {
        let keep = (self.operation)(&item);

        async move {
            if keep.await {
                step.consume(acc, item).await
            } else {
                trace!("item rejected");

                (step, acc)
            }
        }
        .boxed()
    }
}
