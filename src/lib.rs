mod error;
pub mod graph;
mod union_find;

pub use self::error::UnionFindError;
pub use self::union_find::{Result, UnionFind};
