use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use tracing::trace;

use super::{end, make_folder, Derived, Flow, Foldable, Folder, Items};
use crate::iter::{
    any::Any, collect::Push, every::Every, filter::Filter, fold::Fold, map::Map,
    value::PassThrough,
};

/// Fold engine over a backing [`Foldable`].
///
/// A `Stream` is lazy: the combinators (`map`, `filter`, `every`, `any`)
/// only build new streams, and nothing is visited until one of the terminal
/// consumers (`fold`, `as_array`, `value`) is driven. Streams are never
/// modified after construction; derived streams hold their own copy of the
/// parent's items, so folding them re-runs the parent's fold each time.
///
/// The engine folds its items with [`Flow`] accumulators and stops on the
/// first [`Flow::Halt`], reporting the carried value without invoking the
/// external step for the item it arrived with.
///
/// # Examples
///
/// ```
/// use asfold::*;
/// use futures::future::ready;
///
/// let evens = Stream::new(sequence(vec![1, 2, 3, 4]))
///     .filter(|x| ready(x % 2 == 0))
///     .map(|x| ready(x * 10))
///     .as_array(identity)
///     .exec();
///
/// assert_eq!(evens, vec![20, 40]);
/// ```
///
/// [`Foldable`]: trait.Foldable.html
/// [`Flow`]: enum.Flow.html
/// [`Flow::Halt`]: enum.Flow.html#variant.Halt
#[derive(Debug, Clone)]
pub struct Stream<F> {
    items: F,
}

impl<F> Stream<F> {
    pub fn new(items: F) -> Self {
        Self { items }
    }

    /// The backing foldable of this stream.
    pub fn items(&self) -> &F {
        &self.items
    }

    pub fn into_items(self) -> F {
        self.items
    }

    /// Wraps `value` into a terminal accumulator, see [`end`].
    ///
    /// [`end`]: fn.end.html
    pub fn end<B>(&self, value: B) -> Flow<B> {
        end(value)
    }

    /// Folds the stream with `step`, starting from `initial`, and passes the
    /// result to `done` exactly once.
    ///
    /// The stream is only borrowed, so it can be folded again afterwards.
    ///
    /// This inherent method shadows the two-argument [`Foldable::fold`] of
    /// the stream. Call that one as `Foldable::fold(&stream, initial, step)`.
    ///
    /// [`Foldable::fold`]: trait.Foldable.html#tymethod.fold
    pub fn fold<B, S, D, R>(&self, initial: B, step: S, done: D) -> Fold<F, B, S, D>
    where
        F: Clone,
        D: FnOnce(B) -> R,
    {
        Fold::new(self.clone(), initial, step, done)
    }

    /// Collects all items of the stream in visitation order and passes the
    /// resulting vector to `done`.
    pub fn as_array<'a, D, R>(&self, done: D) -> Fold<F, Vec<F::Item>, Push, D>
    where
        F: Items<'a> + Clone,
        D: FnOnce(Vec<F::Item>) -> R,
    {
        self.fold(Vec::new(), Push, done)
    }

    /// Drains the stream without looking at its items and passes the final
    /// accumulator to `done`. Used to run pure reductions like `every` and
    /// `any`.
    pub fn value<B, D, R>(&self, initial: B, done: D) -> Fold<F, B, PassThrough, D>
    where
        F: Clone,
        D: FnOnce(B) -> R,
    {
        self.fold(initial, PassThrough, done)
    }

    /// Returns a stream of the items mapped through `operation`.
    pub fn map<'a, O, R>(&self, operation: O) -> Stream<Derived<F, Map<O>>>
    where
        F: Items<'a> + Clone,
        O: Fn(F::Item) -> R,
        R: Future,
    {
        make_folder(Map::new)(self, operation)
    }

    /// Returns a stream of the items `operation` resolves `true` for.
    ///
    /// Rejected items never reach the downstream step.
    pub fn filter<'a, O, R>(&self, operation: O) -> Stream<Derived<F, Filter<O>>>
    where
        F: Items<'a> + Clone,
        O: Fn(&F::Item) -> R,
        R: Future<Output = bool>,
    {
        make_folder(Filter::new)(self, operation)
    }

    /// Returns a stream that converges to `true` if `operation` resolves
    /// `true` for every item. Stops at the first item it resolves `false`
    /// for. Drain it with [`value`].
    ///
    /// [`value`]: #method.value
    pub fn every<'a, O, R>(&self, operation: O) -> Stream<Derived<F, Every<O>>>
    where
        F: Items<'a> + Clone,
        O: Fn(&F::Item) -> R,
        R: Future<Output = bool>,
    {
        make_folder(Every::new)(self, operation)
    }

    /// Returns a stream that converges to `true` as soon as `operation`
    /// resolves `true` for an item, and to `false` if it never does.
    pub fn any<'a, O, R>(&self, operation: O) -> Stream<Derived<F, Any<O>>>
    where
        F: Items<'a> + Clone,
        O: Fn(&F::Item) -> R,
        R: Future<Output = bool>,
    {
        make_folder(Any::new)(self, operation)
    }
}

impl<'a, F> Items<'a> for Stream<F>
where
    F: Items<'a>,
{
    type Item = F::Item;
}

impl<'a, B, F> Foldable<'a, B> for Stream<F>
where
    B: Send + 'a,
    F: Foldable<'a, Flow<B>>,
{
    fn fold<S>(&self, initial: B, step: S) -> BoxFuture<'a, B>
    where
        S: Folder<'a, B, Self::Item>,
    {
        self.items
            .fold(Flow::Continue(initial), Intercept { step })
            .map(Flow::into_value)
            .boxed()
    }
}

/* Intercept */

/// Stands between the backing foldable and the external step. Halted
/// accumulators are never forwarded.
struct Intercept<S> {
    step: S,
}

impl<'a, B, T, S> Folder<'a, Flow<B>, T> for Intercept<S>
where
    B: Send + 'a,
    S: Folder<'a, B, T>,
{
    fn consume(self, acc: Flow<B>, item: T) -> BoxFuture<'a, (Self, Flow<B>)> {
        match acc {
            Flow::Halt(value) => {
                trace!("intercepted halted accumulator");

                futures::future::ready((self, Flow::Halt(value))).boxed()
            }
            Flow::Continue(value) => {
                let next = self.step.consume(value, item);

                async move {
                    let (step, value) = next.await;

                    (Intercept { step }, Flow::Continue(value))
                }
                .boxed()
            }
        }
    }

    fn is_full(&self, acc: &Flow<B>) -> bool {
        match acc {
            Flow::Halt(_) => true,
            Flow::Continue(value) => self.step.is_full(value),
        }
    }
}
