use thiserror::Error;

/// Error type for the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("graph must have at least one vertex, got {0}")]
    InvalidSize(usize),

    #[error("edge weight {0} is negative")]
    NegativeWeight(f64),

    #[error("edge weight {0} is not finite")]
    NonFiniteWeight(f64),

    #[error("edge at position {position} has index {actual}, expected {position}")]
    IndexMismatch { position: usize, actual: usize },

    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: usize, n: usize },

    #[error("weights must sum to 1.0 (within 1e-6), got {0}")]
    WeightsDontSumToOne(f64),

    #[error("scalarization requires every objective sense to be `min`, found a `max` sense at index {0}")]
    MixedObjectiveSense(usize),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid vertex id: {0}")]
    InvalidVertex(usize),

    #[error("invalid edge: {0} -> {1}")]
    InvalidEdge(usize, usize),

    #[error("source vertex not found in graph")]
    SourceNotFound,

    #[error("internal algorithm invariant violated: {0}")]
    AlgorithmError(String),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
