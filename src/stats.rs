//! Graph statistics derived from a graph and its coloring.

use crate::coloring::ColoringResult;
use crate::graph::Graph;
use std::fmt;

/// Returns \(\Delta(G)\), the maximum vertex degree, or 0 for an empty graph.
#[inline]
pub fn max_degree<P>(graph: &Graph<P>) -> usize {
    graph.max_degree()
}

/// Returns the heuristic chromatic number `max(color) + 1` (0 for an empty coloring).
///
/// This is an upper bound on \(\chi(G)\), not the true minimum.
#[inline]
pub fn chromatic_number(coloring: &ColoringResult) -> usize {
    coloring.chromatic_number()
}

/// Summary of a colored graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// \(\Delta(G)\).
    pub max_degree: usize,
    /// `max(color) + 1` of the coloring.
    pub chromatic_number: usize,
    /// Distinct colors actually assigned.
    pub colors_used: usize,
}

impl GraphStats {
    /// Collects statistics for `graph` colored by `coloring`.
    pub fn collect<P>(graph: &Graph<P>, coloring: &ColoringResult) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            max_degree: max_degree(graph),
            chromatic_number: chromatic_number(coloring),
            colors_used: coloring.colors_used(),
        }
    }

    /// Returns \(\Delta + 1\), the number of colors first-fit can never exceed (0 when empty).
    pub fn greedy_bound(&self) -> usize {
        if self.vertex_count == 0 {
            0
        } else {
            self.max_degree + 1
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {}  Edges: {}", self.vertex_count, self.edge_count)?;
        writeln!(f, "Chromatic Number (chi): {}", self.chromatic_number)?;
        write!(f, "Max Degree (big_delta): {}", self.max_degree)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::color_graph;
    use crate::graph::VertexId;

    fn star(leaves: usize) -> Graph {
        let mut graph = Graph::new();
        let center = graph.add_vertex(());
        for _ in 0..leaves {
            let leaf = graph.add_vertex(());
            graph.connect(center, leaf).unwrap();
        }
        graph
    }

    #[test]
    fn empty_graph_stats_are_zero() {
        let graph: Graph = Graph::new();
        let stats = GraphStats::collect(&graph, &color_graph(&graph));
        assert_eq!(stats, GraphStats::default());
        assert_eq!(stats.greedy_bound(), 0);
    }

    #[test]
    fn single_vertex_stats() {
        let mut graph = Graph::new();
        graph.add_vertex(());
        let coloring = color_graph(&graph);
        assert_eq!(chromatic_number(&coloring), 1);
        assert_eq!(max_degree(&graph), 0);
    }

    #[test]
    fn triangle_stats() {
        let mut graph = Graph::new();
        let ids: Vec<VertexId> = (0..3).map(|_| graph.add_vertex(())).collect();
        graph.connect(ids[0], ids[1]).unwrap();
        graph.connect(ids[0], ids[2]).unwrap();
        graph.connect(ids[1], ids[2]).unwrap();

        let stats = GraphStats::collect(&graph, &color_graph(&graph));
        assert_eq!(stats.max_degree, 2);
        assert_eq!(stats.chromatic_number, 3);
        assert_eq!(stats.colors_used, 3);
        assert_eq!(stats.greedy_bound(), 3);
    }

    #[test]
    fn star_stats() {
        let graph = star(3);
        let stats = GraphStats::collect(&graph, &color_graph(&graph));
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.chromatic_number, 2);
    }

    #[test]
    fn display_lists_chi_and_delta() {
        let graph = star(2);
        let text = GraphStats::collect(&graph, &color_graph(&graph)).to_string();
        assert!(text.contains("Chromatic Number (chi): 2"));
        assert!(text.contains("Max Degree (big_delta): 2"));
    }
}
