mod mapping;
mod sequence;

pub use mapping::{mapping, Entries, Mapping};
pub use sequence::{sequence, Cursor, Sequence};
