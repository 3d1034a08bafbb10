mod interface;
mod os_random;
mod unavailable;

pub use interface::*;
pub use os_random::*;
pub use unavailable::*;
