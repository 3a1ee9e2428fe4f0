pub mod core;

pub use core::{Edge, Graph, GraphStatistics};
