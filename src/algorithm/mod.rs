pub mod blocks;
pub mod bmssp;
pub mod dijkstra;
pub mod path;
pub mod pivots;
pub mod sssp;
