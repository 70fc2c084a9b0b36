mod sequential;
#[cfg(feature = "tokio-executor")]
mod tokio;

pub use sequential::Sequential as SequentialExecutor;
#[cfg(feature = "tokio-executor")]
pub use self::tokio::Tokio as TokioExecutor;

/// Executor used by `Driver::exec`. Folds that need a tokio runtime are run
/// with `exec_with(TokioExecutor)` instead.
pub type DefaultExecutor = SequentialExecutor;
