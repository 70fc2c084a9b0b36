use std::panic::resume_unwind;

use futures::future::{BoxFuture, FutureExt};
use tokio::task::spawn;
use tracing::{debug_span, Instrument};

use crate::core::Executor;

/// Runs a fold as its own task on the ambient tokio runtime.
///
/// The result is a future that resolves once the task is done. A panic
/// inside the fold is resumed in the awaiting task.
///
/// # Panics
///
/// Awaiting the result panics if the runtime cancels the task before the
/// fold completes, e.g. because the runtime is shut down.
#[derive(Default, Debug, Clone, Copy)]
pub struct Tokio;

impl<D> Executor<'static, D> for Tokio
where
    D: Send + 'static,
{
    type Result = BoxFuture<'static, D>;

    fn exec(self, fold: BoxFuture<'static, D>) -> Self::Result {
        let task = spawn(fold.instrument(debug_span!("fold", executor = "tokio")));

        async move {
            match task.await {
                Ok(value) => value,
                Err(err) if err.is_panic() => resume_unwind(err.into_panic()),
                Err(err) => panic!("fold task did not complete: {}", err),
            }
        }
        .boxed()
    }
}
