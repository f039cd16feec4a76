//! Recompute-on-change and debounce primitives.

mod debounce;
mod memo;

pub use debounce::Debouncer;
pub use memo::Memo;
