use futures::future::BoxFuture;

#[cfg(feature = "default-executor")]
use crate::DefaultExecutor;
use crate::Executor;

/// Something that runs a fold to completion once it is driven.
pub trait Driver<'a, T>: Sized
where
    T: Send + 'a,
{
    /// Returns the future that performs the fold. Awaiting it is the only
    /// thing that makes the fold visit any item.
    fn drive(self) -> BoxFuture<'a, T>;

    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<'a, T>,
    {
        executor.exec(self.drive())
    }

    #[cfg(feature = "default-executor")]
    fn exec(self) -> <DefaultExecutor as Executor<'a, T>>::Result
    where
        DefaultExecutor: Executor<'a, T>,
    {
        self.exec_with(DefaultExecutor::default())
    }
}

impl<'a, T> Driver<'a, T> for BoxFuture<'a, T>
where
    T: Send + 'a,
{
    fn drive(self) -> BoxFuture<'a, T> {
        self
    }
}
