mod fallback;
mod fragment;
mod identifier;

pub use fallback::*;
pub use fragment::*;
pub use identifier::*;
