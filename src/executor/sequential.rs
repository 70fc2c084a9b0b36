use futures::{executor::block_on, future::BoxFuture};
use tracing::debug_span;

use crate::core::Executor;

/// Runs a fold on the current thread and blocks until it is done.
///
/// Steps and predicates that wait on a runtime-specific reactor (timers,
/// sockets of a tokio runtime, ...) need the `TokioExecutor` instead.
#[derive(Default, Debug, Clone, Copy)]
pub struct Sequential;

impl<'a, D> Executor<'a, D> for Sequential
where
    D: Send + 'a,
{
    type Result = D;

    fn exec(self, fold: BoxFuture<'a, D>) -> Self::Result {
        let _span = debug_span!("fold", executor = "sequential").entered();

        block_on(fold)
    }
}
