use futures::future::BoxFuture;

/// Runs the future of a driven fold.
pub trait Executor<'a, D>: Sized
where
    D: Send + 'a,
{
    type Result;

    fn exec(self, fold: BoxFuture<'a, D>) -> Self::Result;
}
