mod basic;
mod interface;
mod thread_local;

pub use basic::*;
pub use interface::*;
pub use thread_local::*;
