mod kruskal;
mod union_find;

pub use kruskal::{total_weight, Kruskal};
pub use union_find::UnionFind;
