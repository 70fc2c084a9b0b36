/// Accumulator of a [`Stream`] fold, tagged with whether folding may go on.
///
/// Every accumulator that travels through a stream's backing [`Foldable`] is
/// a `Flow`. Short-circuiting combinators produce a `Halt` (see [`end`]) and
/// the stream stops as soon as it observes one: no further step, predicate
/// or mapper is invoked for that fold, and the carried value is reported as
/// the result.
///
/// [`Stream`]: struct.Stream.html
/// [`Foldable`]: trait.Foldable.html
/// [`end`]: fn.end.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow<B> {
    /// Keep folding with this accumulator.
    Continue(B),

    /// Stop folding, `B` is the final value.
    Halt(B),
}

impl<B> Flow<B> {
    /// Returns `true` if this is a terminal accumulator.
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, Flow::Halt(_))
    }

    #[inline]
    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue(_))
    }

    /// Returns the carried value, discarding the tag.
    #[inline]
    pub fn into_value(self) -> B {
        match self {
            Flow::Continue(value) => value,
            Flow::Halt(value) => value,
        }
    }

    #[inline]
    pub fn as_value(&self) -> &B {
        match self {
            Flow::Continue(value) => value,
            Flow::Halt(value) => value,
        }
    }

    /// Maps the carried value and keeps the tag.
    #[inline]
    pub fn map<C, F>(self, f: F) -> Flow<C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Flow::Continue(value) => Flow::Continue(f(value)),
            Flow::Halt(value) => Flow::Halt(f(value)),
        }
    }
}

/// Wraps `value` into a terminal accumulator.
#[inline]
pub fn end<B>(value: B) -> Flow<B> {
    Flow::Halt(value)
}

/// Returns `true` if `flow` was produced by [`end`].
///
/// [`end`]: fn.end.html
#[inline]
pub fn is_final<B>(flow: &Flow<B>) -> bool {
    flow.is_halt()
}

/// Accumulators that `every` and `any` can converge to.
///
/// Implemented for `bool` and for every `Flow` of a `Verdict`, which is what
/// a stream backed by an `every`/`any` stream folds its items with.
pub trait Verdict: Send {
    fn verdict(value: bool) -> Self;
}

impl Verdict for bool {
    #[inline]
    fn verdict(value: bool) -> Self {
        value
    }
}

impl<B> Verdict for Flow<B>
where
    B: Verdict,
{
    #[inline]
    fn verdict(value: bool) -> Self {
        Flow::Continue(B::verdict(value))
    }
}
