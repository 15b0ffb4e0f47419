pub mod debounce;
pub mod format;
pub mod liveness;
pub mod settle;
