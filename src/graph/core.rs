use std::collections::{HashSet, VecDeque};

use crate::error::Error;
use crate::Result;

/// An immutable directed edge. `index` is the edge's position in the
/// graph's parallel weight array; [`Graph::new`] enforces that the i-th
/// edge constructed has `index == i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub index: usize,
}

/// A validated, read-only directed graph with non-negative, finite edge
/// weights. Vertices are addressed as `0..vertex_count()`.
///
/// Once constructed a `Graph` never changes: [`crate::algorithm::sssp`] and
/// friends allocate their own distance/parent buffers per call rather than
/// mutating any shared state, so two independent calls against the same
/// `Graph` are safe to run concurrently.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    edges: Vec<Edge>,
    weights: Vec<f64>,
    /// adjacency[v] holds, in insertion order, the indices of edges whose source is v.
    adjacency: Vec<Vec<usize>>,
}

/// Summary metrics over a [`Graph`], returned by [`Graph::statistics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStatistics {
    pub n_vertices: usize,
    pub m_edges: usize,
    pub density: f64,
    pub has_self_loops: bool,
    pub avg_out_degree: f64,
    pub max_out_degree: usize,
    pub min_out_degree: usize,
}

impl Graph {
    /// Builds a graph from `n` vertices and `(source, target, weight)` triples.
    ///
    /// Validates every invariant before the graph is returned: vertex count
    /// must be positive, every weight finite and non-negative, and every
    /// source/target within `[0, n)`. The i-th triple becomes the edge with
    /// `index == i`, so the index invariant holds by construction.
    pub fn new(n: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }

        let mut built_edges = Vec::with_capacity(edges.len());
        let mut weights = Vec::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); n];

        for (i, &(source, target, weight)) in edges.iter().enumerate() {
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight(weight));
            }
            if weight < 0.0 {
                return Err(Error::NegativeWeight(weight));
            }
            if source >= n {
                return Err(Error::VertexOutOfRange { vertex: source, n });
            }
            if target >= n {
                return Err(Error::VertexOutOfRange { vertex: target, n });
            }

            built_edges.push(Edge {
                source,
                target,
                index: i,
            });
            weights.push(weight);
            adjacency[source].push(i);
        }

        log::debug!(
            "constructed graph with {} vertices and {} edges",
            n,
            built_edges.len()
        );

        Ok(Graph {
            n,
            edges: built_edges,
            weights,
            adjacency,
        })
    }

    /// Re-checks every construction invariant, plus adjacency/edge index
    /// consistency. Idempotent: calling it repeatedly is always safe and
    /// always returns the same verdict for an unchanged graph.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidSize(self.n));
        }
        if self.edges.len() != self.weights.len() {
            return Err(Error::IndexMismatch {
                position: self.edges.len(),
                actual: self.weights.len(),
            });
        }
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.index != i {
                return Err(Error::IndexMismatch {
                    position: i,
                    actual: edge.index,
                });
            }
            if edge.source >= self.n {
                return Err(Error::VertexOutOfRange {
                    vertex: edge.source,
                    n: self.n,
                });
            }
            if edge.target >= self.n {
                return Err(Error::VertexOutOfRange {
                    vertex: edge.target,
                    n: self.n,
                });
            }
        }
        for &w in &self.weights {
            if !w.is_finite() {
                return Err(Error::NonFiniteWeight(w));
            }
            if w < 0.0 {
                return Err(Error::NegativeWeight(w));
            }
        }
        for v in 0..self.n {
            for &e in &self.adjacency[v] {
                if self.edges[e].source != v {
                    return Err(Error::AlgorithmError(format!(
                        "adjacency[{v}] contains edge {e} whose source is {}",
                        self.edges[e].source
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Edge indices whose source is `v`, in the order they were inserted.
    pub fn outgoing_edges(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// `(target, weight)` pairs for every edge leaving `v`, in adjacency order.
    pub fn out_neighbors(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[v]
            .iter()
            .map(move |&e| (self.edges[e].target, self.weights[e]))
    }

    pub fn find_edge(&self, u: usize, v: usize) -> Option<usize> {
        self.adjacency[u]
            .iter()
            .copied()
            .find(|&e| self.edges[e].target == v)
    }

    pub fn edge_weight_between(&self, u: usize, v: usize) -> Option<f64> {
        self.find_edge(u, v).map(|e| self.weights[e])
    }

    pub fn has_self_loops(&self) -> bool {
        self.edges.iter().any(|e| e.source == e.target)
    }

    /// Directed-graph density: `m / (n * (n - 1))`, or `0.0` for a single vertex.
    pub fn graph_density(&self) -> f64 {
        if self.n <= 1 {
            return 0.0;
        }
        self.edge_count() as f64 / (self.n as f64 * (self.n as f64 - 1.0))
    }

    pub fn statistics(&self) -> GraphStatistics {
        let degrees: Vec<usize> = (0..self.n).map(|v| self.out_degree(v)).collect();
        let total: usize = degrees.iter().sum();
        GraphStatistics {
            n_vertices: self.n,
            m_edges: self.edge_count(),
            density: self.graph_density(),
            has_self_loops: self.has_self_loops(),
            avg_out_degree: total as f64 / self.n as f64,
            max_out_degree: degrees.iter().copied().max().unwrap_or(0),
            min_out_degree: degrees.iter().copied().min().unwrap_or(0),
        }
    }

    /// Plain breadth-first traversal ignoring edge weights, for connectivity
    /// queries and tests. The returned set always contains `source`.
    pub fn reachability(&self, source: usize) -> Result<HashSet<usize>> {
        if source >= self.n {
            return Err(Error::VertexOutOfRange {
                vertex: source,
                n: self.n,
            });
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for (v, _) in self.out_neighbors(u) {
                if visited.insert(v) {
                    queue.push_back(v);
                }
            }
        }

        Ok(visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_negative_weight() {
        let err = Graph::new(2, &[(0, 1, -1.0)]).unwrap_err();
        assert_eq!(err, Error::NegativeWeight(-1.0));
    }

    #[test]
    fn construction_rejects_non_finite_weight() {
        let err = Graph::new(2, &[(0, 1, f64::NAN)]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteWeight(_)));
    }

    #[test]
    fn construction_rejects_out_of_range_vertex() {
        let err = Graph::new(2, &[(0, 5, 1.0)]).unwrap_err();
        assert_eq!(err, Error::VertexOutOfRange { vertex: 5, n: 2 });
    }

    #[test]
    fn construction_rejects_zero_vertices() {
        let err = Graph::new(0, &[]).unwrap_err();
        assert_eq!(err, Error::InvalidSize(0));
    }

    #[test]
    fn adjacency_is_insertion_ordered() {
        let g = Graph::new(3, &[(0, 2, 1.0), (0, 1, 2.0)]).unwrap();
        assert_eq!(g.outgoing_edges(0), &[0, 1]);
        assert_eq!(g.edge(0).target, 2);
        assert_eq!(g.edge(1).target, 1);
    }

    #[test]
    fn validate_is_idempotent() {
        let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
        g.validate().unwrap();
        g.validate().unwrap();
    }

    #[test]
    fn find_edge_and_weight_lookup() {
        let g = Graph::new(3, &[(0, 1, 1.5), (1, 2, 2.5)]).unwrap();
        assert_eq!(g.find_edge(0, 1), Some(0));
        assert_eq!(g.find_edge(0, 2), None);
        assert_eq!(g.edge_weight_between(1, 2), Some(2.5));
    }

    #[test]
    fn reachability_bfs() {
        let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let reached = g.reachability(0).unwrap();
        assert!(reached.contains(&0));
        assert!(reached.contains(&1));
        assert!(reached.contains(&2));
        assert!(!reached.contains(&3));
    }

    #[test]
    fn density_and_self_loops() {
        let g = Graph::new(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 0, 0.0)]).unwrap();
        assert!(g.has_self_loops());
        let stats = g.statistics();
        assert_eq!(stats.n_vertices, 3);
        assert_eq!(stats.m_edges, 3);
    }
}
