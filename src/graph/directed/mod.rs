//! Directed adjacency-list graphs

mod adjacent_list;
pub use self::adjacent_list::*;
