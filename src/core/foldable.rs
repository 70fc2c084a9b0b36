use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, trace};

use super::{Folder, IntoFoldable};

/// Names the type of item a foldable source visits.
pub trait Items<'a> {
    /// The type of item that is passed to the step of a fold.
    type Item: Send + 'a;
}

/// A source of items that can be folded with an accumulator of type `A`.
///
/// Every call to `fold` is an independent pass over the source: it starts
/// with a fresh cursor, visits the items in order, awaits each step before
/// the next item is visited and resolves with the final accumulator once the
/// source is exhausted or the step reports itself full.
pub trait Foldable<'a, A>: Items<'a> + Send + Sync
where
    A: Send + 'a,
{
    /// Folds all items of the source into `initial` using `step`.
    ///
    /// The returned future resolves with the final accumulator, which is the
    /// same as folding with an identity completion callback.
    fn fold<S>(&self, initial: A, step: S) -> BoxFuture<'a, A>
    where
        S: Folder<'a, A, Self::Item>;

    /// Folds all items of the source and passes the final accumulator to
    /// `done`, exactly once.
    fn fold_then<S, D, R>(&self, initial: A, step: S, done: D) -> BoxFuture<'a, R>
    where
        S: Folder<'a, A, Self::Item>,
        D: FnOnce(A) -> R + Send + 'a,
        R: Send + 'a,
    {
        self.fold(initial, step).map(done).boxed()
    }
}

/// Identity completion callback.
#[inline]
pub fn identity<T>(x: T) -> T {
    x
}

/* Source */

/// Foldable created by [`make_foldable`].
///
/// [`make_foldable`]: fn.make_foldable.html
#[derive(Debug, Clone)]
pub struct Source<X, G> {
    source: X,
    iterate: G,
}

impl<X, G> IntoFoldable for Source<X, G> {
    type Foldable = Self;

    fn into_foldable(self) -> Self::Foldable {
        self
    }
}

/// Constructs a factory of [`Foldable`]s out of an iteration algorithm.
///
/// `iterate` receives a handle of the backing collection and returns a fresh
/// cursor over it. It is invoked once per `fold` call, so no position is
/// shared between folds. Nothing is cached across calls.
///
/// # Examples
///
/// ```
/// use asfold::*;
/// use futures::future::ready;
///
/// let evens = make_foldable(|n: usize| (0..n).map(|i| 2 * i));
/// let xs = evens(4)
///     .fold(Vec::new(), step_fn(|mut acc: Vec<usize>, x| {
///         acc.push(x);
///         ready(acc)
///     }))
///     .exec_with(SequentialExecutor);
///
/// assert_eq!(xs, vec![0, 2, 4, 6]);
/// ```
///
/// [`Foldable`]: trait.Foldable.html
pub fn make_foldable<X, G, I>(iterate: G) -> impl Fn(X) -> Source<X, G> + Clone
where
    G: Fn(X) -> I + Clone,
    I: IntoIterator,
{
    move |source| Source {
        source,
        iterate: iterate.clone(),
    }
}

impl<'a, X, G, I> Items<'a> for Source<X, G>
where
    G: Fn(X) -> I,
    I: IntoIterator,
    I::Item: Send + 'a,
{
    type Item = I::Item;
}

impl<'a, A, X, G, I> Foldable<'a, A> for Source<X, G>
where
    A: Send + 'a,
    X: Clone + Send + Sync,
    G: Fn(X) -> I + Send + Sync,
    I: IntoIterator,
    I::Item: Send + 'a,
    I::IntoIter: Send + 'a,
{
    fn fold<S>(&self, initial: A, step: S) -> BoxFuture<'a, A>
    where
        S: Folder<'a, A, Self::Item>,
    {
        let cursor = (self.iterate)(self.source.clone()).into_iter();

        async move {
            let mut step = step;
            let mut acc = initial;

            for (index, item) in cursor.enumerate() {
                if step.is_full(&acc) {
                    debug!(index, "source stopped early");

                    return acc;
                }

                trace!(index, "visit item");

                let (next, result) = step.consume(acc, item).await;

                step = next;
                acc = result;
            }

            acc
        }
        .boxed()
    }
}
