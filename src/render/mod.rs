pub mod card;
pub mod grid;
pub mod rewrite;

pub use card::*;
pub use grid::*;
pub use rewrite::*;
