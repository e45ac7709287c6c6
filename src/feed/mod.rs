pub mod fetch;
pub mod parse;

pub use fetch::*;
pub use parse::*;
