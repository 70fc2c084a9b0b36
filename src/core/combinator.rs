use std::sync::Arc;

use futures::future::{ready, BoxFuture, FutureExt};

use super::{Flow, Foldable, Folder, Items, Stream};

/// Per-item transformation that a derived [`Stream`] routes the items of
/// its parent through.
///
/// [`Stream`]: struct.Stream.html
pub trait Combinator<'a, T>: Send + Sync + 'a {
    /// The type of item that is forwarded to the downstream step.
    type Output: Send + 'a;
}

/// Processing part of a [`Combinator`] for accumulators of type `B`.
///
/// For each item the combinator either forwards a (possibly transformed) item
/// and an accumulator to `step`, or skips the item and resolves with `acc`
/// directly, in which case the downstream step never sees that item. To stop
/// the whole fold a combinator forwards an accumulator built with [`end`].
///
/// [`Combinator`]: trait.Combinator.html
/// [`end`]: fn.end.html
pub trait CombinatorStep<'a, B, T>: Combinator<'a, T>
where
    B: Send + 'a,
{
    fn process<S>(&self, acc: Flow<B>, item: T, step: S) -> BoxFuture<'a, (S, Flow<B>)>
    where
        S: Folder<'a, Flow<B>, Self::Output>;
}

/// Builds a stream method out of a combinator constructor.
///
/// The returned function takes a stream and the transform argument `f` and
/// returns a new stream whose items are the parent's items routed through
/// `combinator(f)`. The parent is not modified; every fold of the derived
/// stream runs a complete fold of the parent's items.
pub fn make_folder<F, O, C>(combinator: fn(O) -> C) -> impl Fn(&Stream<F>, O) -> Stream<Derived<F, C>>
where
    F: Clone,
{
    move |stream: &Stream<F>, f: O| {
        Stream::new(Derived {
            items: stream.items().clone(),
            combinator: Arc::new(combinator(f)),
        })
    }
}

/* Derived */

/// Backing foldable of a stream created by a combinator.
pub struct Derived<F, C> {
    items: F,
    combinator: Arc<C>,
}

impl<F, C> Clone for Derived<F, C>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            combinator: self.combinator.clone(),
        }
    }
}

impl<'a, F, C> Items<'a> for Derived<F, C>
where
    F: Items<'a>,
    C: Combinator<'a, F::Item>,
{
    type Item = C::Output;
}

impl<'a, B, F, C> Foldable<'a, Flow<B>> for Derived<F, C>
where
    B: Send + 'a,
    F: Foldable<'a, Flow<B>>,
    C: CombinatorStep<'a, B, F::Item>,
{
    fn fold<S>(&self, initial: Flow<B>, step: S) -> BoxFuture<'a, Flow<B>>
    where
        S: Folder<'a, Flow<B>, Self::Item>,
    {
        self.items.fold(
            initial,
            Through {
                combinator: self.combinator.clone(),
                step,
            },
        )
    }
}

/* Through */

struct Through<C, S> {
    combinator: Arc<C>,
    step: S,
}

impl<'a, B, T, C, S> Folder<'a, Flow<B>, T> for Through<C, S>
where
    B: Send + 'a,
    C: CombinatorStep<'a, B, T>,
    S: Folder<'a, Flow<B>, C::Output>,
{
    fn consume(self, acc: Flow<B>, item: T) -> BoxFuture<'a, (Self, Flow<B>)> {
        if acc.is_halt() {
            return ready((self, acc)).boxed();
        }

        let Through { combinator, step } = self;
        let next = combinator.process(acc, item, step);

        async move {
            let (step, acc) = next.await;

            (Through { combinator, step }, acc)
        }
        .boxed()
    }

    fn is_full(&self, acc: &Flow<B>) -> bool {
        self.step.is_full(acc)
    }
}
