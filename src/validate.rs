//! Coloring validation and deterministic checks against bundled fixture graphs.

use crate::coloring::{color_graph, Color, ColoringResult};
use crate::graph::{parse_adjacency_matrix, Graph, GraphParseError, VertexId};
use thiserror::Error;

/// Reasons a coloring can fail validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// The coloring does not cover exactly the graph's vertices.
    #[error("coloring has {got} entries, graph has {expected} vertices")]
    LengthMismatch {
        /// Vertex count of the graph.
        expected: usize,
        /// Entries in the coloring.
        got: usize,
    },
    /// A color falls outside `0..vertex_count`.
    #[error("vertex {vertex} has color {color}, outside 0..{vertex_count}")]
    OutOfRange {
        /// The offending vertex.
        vertex: VertexId,
        /// Its color.
        color: Color,
        /// Vertex count of the graph.
        vertex_count: usize,
    },
    /// Two adjacent vertices share a color.
    #[error("adjacent vertices {a} and {b} share color {color}")]
    Conflict {
        /// Lower endpoint.
        a: VertexId,
        /// Higher endpoint.
        b: VertexId,
        /// The shared color.
        color: Color,
    },
    /// A fixture was colored with a different number of colors than recorded.
    #[error("expected chromatic number {expected}, got {got}")]
    UnexpectedChromaticNumber {
        /// Recorded value.
        expected: usize,
        /// Value produced by the engine.
        got: usize,
    },
    /// Fixture text could not be parsed.
    #[error(transparent)]
    Parse(#[from] GraphParseError),
    /// A named fixture failed one of the checks above.
    #[error("fixture {name} failed")]
    Fixture {
        /// File name of the fixture.
        name: &'static str,
        /// The underlying failure.
        source: Box<ColoringError>,
    },
}

// ============================================================================
// Public API
// ============================================================================

/// Bundled fixtures: file name, adjacency matrix, and the color count the engine produces.
const FIXTURES: [(&str, &str, usize); 5] = [
    ("triangle.txt", include_str!("../data/triangle.txt"), 3),
    ("star.txt", include_str!("../data/star.txt"), 2),
    ("cycle5.txt", include_str!("../data/cycle5.txt"), 3),
    ("k5.txt", include_str!("../data/k5.txt"), 5),
    ("petersen.txt", include_str!("../data/petersen.txt"), 3),
];

/// Checks that `coloring` is a proper coloring of `graph` with colors in `0..vertex_count`.
///
/// # Errors
/// Returns the first violation found: size mismatch, out-of-range color, or a monochromatic edge.
pub fn validate_coloring<P>(
    graph: &Graph<P>,
    coloring: &ColoringResult,
) -> Result<(), ColoringError> {
    let n = graph.vertex_count();
    if coloring.len() != n {
        return Err(ColoringError::LengthMismatch {
            expected: n,
            got: coloring.len(),
        });
    }

    for (vertex, color) in coloring.iter() {
        if color >= n {
            return Err(ColoringError::OutOfRange {
                vertex,
                color,
                vertex_count: n,
            });
        }
    }

    let colors = coloring.colors();
    for (a, b) in graph.edges() {
        let color = colors[a.index()];
        if color == colors[b.index()] {
            return Err(ColoringError::Conflict { a, b, color });
        }
    }

    Ok(())
}

/// Colors every bundled fixture graph and checks validity and the expected color count.
///
/// # Errors
/// Returns [`ColoringError::Fixture`] naming the first fixture that fails.
pub fn validate_known_graphs() -> Result<(), ColoringError> {
    for (name, text, expected) in FIXTURES {
        validate_fixture(text, expected).map_err(|e| ColoringError::Fixture {
            name,
            source: Box::new(e),
        })?;
    }
    Ok(())
}

/// Parses an adjacency matrix, colors it and checks the result.
///
/// # Errors
/// Returns an error if parsing fails, the coloring is invalid, or it uses a different number
/// of colors than `expected_colors`.
pub fn validate_fixture(text: &str, expected_colors: usize) -> Result<(), ColoringError> {
    let parsed = parse_adjacency_matrix(text)?;
    let graph = Graph::from_adjacency(&parsed);
    let coloring = color_graph(&graph);
    validate_coloring(&graph, &coloring)?;

    let got = coloring.chromatic_number();
    if got != expected_colors {
        return Err(ColoringError::UnexpectedChromaticNumber {
            expected: expected_colors,
            got,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ParsedAdjacencyMatrix;

    fn path(n: usize) -> Graph {
        Graph::from_adjacency(&ParsedAdjacencyMatrix {
            n,
            edges: (1..n).map(|i| (i - 1, i)).collect(),
        })
    }

    #[test]
    fn bundled_graphs_color_as_expected() {
        validate_known_graphs().unwrap();
    }

    #[test]
    fn bundled_fixtures_parse_to_expected_sizes() {
        let sizes: Vec<usize> = FIXTURES
            .iter()
            .map(|(_, text, _)| parse_adjacency_matrix(text).unwrap().n)
            .collect();
        assert_eq!(sizes, vec![3, 4, 5, 5, 10]);
    }

    #[test]
    fn petersen_graph_is_three_regular() {
        let parsed = parse_adjacency_matrix(FIXTURES[4].1).unwrap();
        let graph = Graph::from_adjacency(&parsed);
        assert_eq!(graph.edge_count(), 15);
        assert!(graph.vertex_ids().all(|v| graph.degree(v) == 3));
    }

    #[test]
    fn validate_coloring_rejects_conflict() {
        let graph = path(3);
        // Three isolated vertices all get color 0.
        let isolated = Graph::from_adjacency(&ParsedAdjacencyMatrix {
            n: 3,
            edges: Vec::new(),
        });
        let all_zero = color_graph(&isolated);

        let err = validate_coloring(&graph, &all_zero).unwrap_err();
        assert_eq!(
            err,
            ColoringError::Conflict {
                a: VertexId::new(0),
                b: VertexId::new(1),
                color: 0
            }
        );
    }

    #[test]
    fn validate_coloring_rejects_length_mismatch() {
        let graph = path(4);
        let coloring = color_graph(&path(2));
        assert!(matches!(
            validate_coloring(&graph, &coloring),
            Err(ColoringError::LengthMismatch { expected: 4, got: 2 })
        ));
    }

    #[test]
    fn validate_coloring_accepts_engine_output() {
        let graph = path(6);
        validate_coloring(&graph, &color_graph(&graph)).unwrap();
    }

    #[test]
    fn validate_fixture_reports_wrong_expectation() {
        let err = validate_fixture("011\n101\n110\n", 2).unwrap_err();
        assert_eq!(
            err,
            ColoringError::UnexpectedChromaticNumber {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn validate_fixture_rejects_malformed_input() {
        let err = validate_fixture("0100\n101\n0101\n0010\n", 2).unwrap_err();
        assert!(matches!(err, ColoringError::Parse(GraphParseError::NonSquare { .. })));
    }

    #[test]
    fn fixture_error_names_the_file() {
        let err = ColoringError::Fixture {
            name: "k5.txt",
            source: Box::new(ColoringError::UnexpectedChromaticNumber {
                expected: 4,
                got: 5,
            }),
        };
        assert_eq!(err.to_string(), "fixture k5.txt failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
