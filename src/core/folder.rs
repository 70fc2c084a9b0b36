use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

/// The `Folder` trait encapsulates the step of [the standard fold
/// operation][fold], in continuation-passing form. It is fed one item at a
/// time using the `consume` method, together with the current accumulator,
/// and resumes the fold by resolving the returned future with the next
/// accumulator.
///
/// The folder is moved into `consume` and handed back together with the next
/// accumulator, so a fold owns exactly one folder at any time and the next
/// item is never consumed before the previous step has resolved.
///
/// A step may suspend for as long as it likes. A step future that never
/// resolves stalls its fold forever; nothing in this crate detects that.
///
/// [fold]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.fold
pub trait Folder<'a, A, T>: Sized + Send + 'a {
    /// Consume next item and resume with the new accumulator.
    fn consume(self, acc: A, item: T) -> BoxFuture<'a, (Self, A)>;

    /// Hint whether this `Folder` would like to stop processing
    /// further items, e.g. if the accumulator is already final.
    fn is_full(&self, acc: &A) -> bool {
        let _acc = acc;

        false
    }
}

/// Folder created by [`step_fn`].
///
/// [`step_fn`]: fn.step_fn.html
#[derive(Clone, Copy, Debug)]
pub struct StepFn<F>(F);

/// Creates a [`Folder`] from an asynchronous step closure.
///
/// # Examples
///
/// ```
/// use asfold::*;
/// use futures::future::ready;
///
/// let sum = sequence(vec![1, 2, 3])
///     .fold_then(0, step_fn(|acc: i32, x: i32| ready(acc + x)), |total| total)
///     .exec_with(SequentialExecutor);
///
/// assert_eq!(sum, 6);
/// ```
///
/// [`Folder`]: trait.Folder.html
pub fn step_fn<F>(f: F) -> StepFn<F> {
    StepFn(f)
}

impl<'a, A, T, F, R> Folder<'a, A, T> for StepFn<F>
where
    F: FnMut(A, T) -> R + Send + 'a,
    R: Future<Output = A> + Send + 'a,
    A: Send + 'a,
{
    fn consume(mut self, acc: A, item: T) -> BoxFuture<'a, (Self, A)> {
        let next = (self.0)(acc, item);

        async move {
            let acc = next.await;

            (self, acc)
        }
        .boxed()
    }
}
