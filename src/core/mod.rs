mod combinator;
mod driver;
mod executor;
mod flow;
mod foldable;
mod folder;
mod into_foldable;
mod stream;

pub use combinator::{make_folder, Combinator, CombinatorStep, Derived};
pub use driver::Driver;
pub use executor::Executor;
pub use flow::{end, is_final, Flow, Verdict};
pub use foldable::{identity, make_foldable, Foldable, Items, Source};
pub use folder::{step_fn, Folder, StepFn};
pub use into_foldable::IntoFoldable;
pub use stream::Stream;
