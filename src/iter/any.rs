use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

use crate::{end, Combinator, CombinatorStep, Flow, Folder, Verdict};

/* Any */

pub struct Any<O> {
    operation: O,
}

impl<O> Any<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<'a, T, O, R> Combinator<'a, T> for Any<O>
where
    T: Send + 'a,
    O: Fn(&T) -> R + Send + Sync + 'a,
    R: Future<Output = bool> + Send + 'a,
{
    type Output = T;
}

impl<'a, B, T, O, R> CombinatorStep<'a, B, T> for Any<O>
where
    B: Verdict + 'a,
    T: Send + 'a,
    O: Fn(&T) -> R + Send + Sync + 'a,
    R: Future<Output = bool> + Send + 'a,
{
    fn process<S>(&self, _acc: Flow<B>, item: T, step: S) -> BoxFuture<'a, (S, Flow<B>)>
    where
        S: Folder<'a, Flow<B>, Self::Output>,
    {
        let found = (self.operation)(&item);

        async move {
            let acc = if found.await {
                end(B::verdict(true))
            } else {
                Flow::Continue(B::verdict(false))
            };

            step.consume(acc, item).await
        }
        .boxed()
    }
}
