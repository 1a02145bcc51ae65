//! Degree-ordered first-fit vertex coloring.
//!
//! Vertices are visited in order of decreasing degree (ties broken by insertion order) and each
//! one receives the smallest color not already used by a colored neighbor. The result is always
//! a proper coloring with at most \(\Delta + 1\) colors; by Brooks' theorem the optimum is at most
//! \(\Delta\) for connected graphs other than complete graphs and odd cycles, so the heuristic is
//! usually close, but it makes no optimality claim and checks none of Brooks' preconditions.

use crate::graph::{Graph, VertexId};
use std::cmp::Reverse;
use tracing::debug;

/// A color label. Colors are dense small integers starting at 0.
pub type Color = usize;

// ============================================================================
// ColoringResult
// ============================================================================

/// Immutable vertex → color mapping produced by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColoringResult {
    /// `colors[i]` is the color of `VertexId(i)`.
    colors: Vec<Color>,
    /// The order in which vertices were colored.
    order: Vec<VertexId>,
}

impl ColoringResult {
    /// Returns the color of `v`, or `None` if `v` was not part of the colored graph.
    #[inline]
    pub fn color(&self, v: VertexId) -> Option<Color> {
        self.colors.get(v.index()).copied()
    }

    /// Returns colors indexed by vertex id.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the order in which vertices were colored.
    #[inline]
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Iterates over `(vertex, color)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (VertexId::new(i), c))
    }

    /// Number of colored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no vertex was colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns `max(color) + 1`, or 0 for an empty coloring.
    ///
    /// This counts labels up to the largest one used, not distinct labels; see
    /// [`ColoringResult::colors_used`].
    pub fn chromatic_number(&self) -> usize {
        self.colors.iter().max().map_or(0, |&c| c + 1)
    }

    /// Returns the number of distinct colors actually assigned.
    pub fn colors_used(&self) -> usize {
        let mut seen = vec![false; self.chromatic_number()];
        for &c in &self.colors {
            seen[c] = true;
        }
        seen.into_iter().filter(|&s| s).count()
    }

    /// Groups vertices by color; entry `c` lists the vertices colored `c` in id order.
    pub fn color_classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.chromatic_number()];
        for (v, c) in self.iter() {
            classes[c].push(v);
        }
        classes
    }
}

// ============================================================================
// GreedyColorer
// ============================================================================

/// First-fit colorer that keeps its scratch buffers between runs.
#[derive(Clone, Debug, Default)]
pub struct GreedyColorer {
    /// `forbidden[c]` is set while coloring a vertex with a neighbor already colored `c`.
    forbidden: Vec<bool>,
    assigned: Vec<Option<Color>>,
}

impl GreedyColorer {
    /// Creates a colorer with empty scratch space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors `graph` and returns the mapping. The graph itself is not modified.
    pub fn color<P>(&mut self, graph: &Graph<P>) -> ColoringResult {
        let n = graph.vertex_count();
        if n == 0 {
            return ColoringResult::default();
        }

        self.assigned.clear();
        self.assigned.resize(n, None);
        self.forbidden.clear();
        self.forbidden.resize(n, false);

        let order = degree_order(graph);
        for &v in &order {
            for u in graph.neighbors(v) {
                if let Some(c) = self.assigned[u.index()] {
                    self.forbidden[c] = true;
                }
            }

            let color = first_fit(&self.forbidden);
            self.assigned[v.index()] = Some(color);

            for u in graph.neighbors(v) {
                if let Some(c) = self.assigned[u.index()] {
                    self.forbidden[c] = false;
                }
            }
        }

        let colors: Vec<Color> = self.assigned.iter().flatten().copied().collect();
        debug_assert_eq!(colors.len(), n, "every vertex must be colored");

        let result = ColoringResult { colors, order };
        debug!(
            vertices = n,
            edges = graph.edge_count(),
            chromatic_number = result.chromatic_number(),
            "colored graph"
        );
        result
    }
}

/// Returns the smallest color whose slot is not forbidden.
///
/// A vertex has at most `n - 1` neighbors, so with `n` slots one is always free.
#[inline]
fn first_fit(forbidden: &[bool]) -> Color {
    forbidden
        .iter()
        .position(|&f| !f)
        .unwrap_or(forbidden.len())
}

// ============================================================================
// Public API
// ============================================================================

/// Returns all vertex ids sorted by degree, highest first; equal degrees keep insertion order.
pub fn degree_order<P>(graph: &Graph<P>) -> Vec<VertexId> {
    let mut order: Vec<VertexId> = graph.vertex_ids().collect();
    // `sort_by_key` is stable, which gives the insertion-order tie break.
    order.sort_by_key(|&v| Reverse(graph.degree(v)));
    order
}

/// Colors `graph` with the degree-ordered first-fit heuristic.
///
/// Returns an empty result for an empty graph. Calling this twice on an unchanged graph yields
/// identical results.
pub fn color_graph<P>(graph: &Graph<P>) -> ColoringResult {
    GreedyColorer::new().color(graph)
}

// ============================================================================
// Tests
// ============================================================================
