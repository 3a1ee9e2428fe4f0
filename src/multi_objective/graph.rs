//! The multi-objective graph representation (spec §3, §4.4 preamble):
//! a generalization of [`crate::graph::Graph`] from scalar weights to
//! fixed-length weight vectors, one per declared objective.

use crate::error::Error;
use crate::Result;

/// Whether smaller or larger values are better for an objective axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Min,
    Max,
}

/// An immutable directed edge carrying a length-`d` weight vector.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiObjectiveEdge {
    pub source: usize,
    pub target: usize,
    pub weights: Vec<f64>,
    pub edge_id: usize,
}

/// A validated directed graph whose edges carry `d`-dimensional weight
/// vectors, one [`Sense`] per axis.
#[derive(Debug, Clone)]
pub struct MultiObjectiveGraph {
    n: usize,
    d: usize,
    edges: Vec<MultiObjectiveEdge>,
    adjacency: Vec<Vec<usize>>,
    objective_names: Vec<String>,
    objective_sense: Vec<Sense>,
}

impl MultiObjectiveGraph {
    /// Builds a graph from `n` vertices, `d` objectives, and an edge list.
    /// Derives the adjacency table from the edges. Every edge's weight
    /// vector must have length `d`; `objective_names`/`objective_sense`
    /// must each have length `d`.
    pub fn new(
        n: usize,
        d: usize,
        edges: Vec<MultiObjectiveEdge>,
        objective_names: Vec<String>,
        objective_sense: Vec<Sense>,
    ) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }
        if d == 0 {
            return Err(Error::DimensionMismatch {
                expected: 1,
                actual: 0,
            });
        }
        if objective_names.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                actual: objective_names.len(),
            });
        }
        if objective_sense.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                actual: objective_sense.len(),
            });
        }

        let mut adjacency = vec![Vec::new(); n];
        for (i, edge) in edges.iter().enumerate() {
            if edge.weights.len() != d {
                return Err(Error::DimensionMismatch {
                    expected: d,
                    actual: edge.weights.len(),
                });
            }
            if edge.source >= n {
                return Err(Error::VertexOutOfRange { vertex: edge.source, n });
            }
            if edge.target >= n {
                return Err(Error::VertexOutOfRange { vertex: edge.target, n });
            }
            adjacency[edge.source].push(i);
        }

        log::debug!(
            "constructed multi-objective graph with {} vertices, {} edges, {} objectives",
            n,
            edges.len(),
            d
        );

        Ok(MultiObjectiveGraph {
            n,
            d,
            edges,
            adjacency,
            objective_names,
            objective_sense,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn objective_count(&self) -> usize {
        self.d
    }

    pub fn objective_names(&self) -> &[String] {
        &self.objective_names
    }

    pub fn sense(&self) -> &[Sense] {
        &self.objective_sense
    }

    pub fn edge(&self, index: usize) -> &MultiObjectiveEdge {
        &self.edges[index]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn outgoing_edges(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub fn out_neighbors(&self, v: usize) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.adjacency[v]
            .iter()
            .map(move |&e| (self.edges[e].target, self.edges[e].weights.as_slice()))
    }

    /// Whether every declared objective is `Sense::Min`, the precondition
    /// for [`crate::multi_objective::weighted_sum`] and
    /// [`crate::multi_objective::lexicographic`].
    pub fn all_minimize(&self) -> bool {
        self.objective_sense.iter().all(|s| *s == Sense::Min)
    }
}
