//! Asynchronous continuation-passing folds.
//!
//! A [`Stream`] wraps a [`Foldable`] source and folds it one item at a
//! time. Every step, predicate and mapper resumes the fold by resolving a
//! future, so each of them may suspend for as long as it needs; the next item
//! is only visited after the previous one resumed. Combinators are lazy and
//! short-circuiting ones (`every`, `any`) stop the fold with a [`Flow::Halt`]
//! accumulator.
//!
//! ```
//! use asfold::*;
//! use futures::future::ready;
//!
//! let small = sequence(vec![1, 2, 3, 4])
//!     .into_stream()
//!     .every(|x| ready(*x < 3))
//!     .value(true, identity)
//!     .exec();
//!
//! assert!(!small);
//! ```

mod core;
mod executor;
mod iter;
mod source;
mod std;

pub use self::core::{
    end, identity, is_final, make_foldable, make_folder, step_fn, Combinator, CombinatorStep,
    Derived, Driver, Executor, Flow, Foldable, Folder, IntoFoldable, Items, Source, StepFn,
    Stream, Verdict,
};
#[cfg(feature = "tokio-executor")]
pub use self::executor::TokioExecutor;
pub use self::executor::{DefaultExecutor, SequentialExecutor};
pub use self::iter::{
    any::Any, collect::Push, every::Every, filter::Filter, fold::Fold, map::Map,
    value::PassThrough,
};
pub use self::source::{mapping, sequence, Cursor, Entries, Mapping, Sequence};
