use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

use crate::{Combinator, CombinatorStep, Flow, Folder};

/* Map */

pub struct Map<O> {
    operation: O,
}

impl<O> Map<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<'a, T, O, R> Combinator<'a, T> for Map<O>
where
    O: Fn(T) -> R + Send + Sync + 'a,
    R: Future + Send + 'a,
    R::Output: Send + 'a,
{
    type Output = R::Output;
}

impl<'a, B, T, O, R> CombinatorStep<'a, B, T> for Map<O>
where
    B: Send + 'a,
    O: Fn(T) -> R + Send + Sync + 'a,
    R: Future + Send + 'a,
    R::Output: Send + 'a,
{
    fn process<S>(&self, acc: Flow<B>, item: T, step: S) -> BoxFuture<'a, (S, Flow<B>)>
    where
        S: Folder<'a, Flow<B>, Self::Output>,
    {
        let mapped = (self.operation)(item);

        async move {
            let mapped = mapped.await;

            step.consume(acc, mapped).await
        }
        .boxed()
    }
}
