//! Mutable undirected graph with stable vertex ids, adjacency-matrix loading and random graphs.

use crate::coloring::{Color, ColoringResult};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

// ============================================================================
// VertexId
// ============================================================================

/// Stable identity of a vertex: its 0-based creation index.
///
/// Ids are handed out in strictly increasing order and are never reused while the graph
/// lives; [`Graph::clear`] restarts numbering at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw 0-based index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orders an unordered pair so `(a, b)` and `(b, a)` map to the same edge key.
#[inline(always)]
fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    (a.min(b), a.max(b))
}

// ============================================================================
// Errors
// ============================================================================

/// Contract violations reported by [`Graph`] mutations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The id was never handed out by this graph (or was handed out before a clear).
    #[error("vertex {id} does not exist (graph has {vertex_count} vertices)")]
    UnknownVertex {
        /// The offending id.
        id: VertexId,
        /// Number of vertices currently in the graph.
        vertex_count: usize,
    },
    /// Attempted to connect a vertex to itself.
    #[error("cannot connect vertex {id} to itself")]
    SelfLoop {
        /// The vertex on both ends.
        id: VertexId,
    },
    /// A coloring was applied to a graph of a different size.
    #[error("coloring covers {got} vertices, graph has {expected}")]
    LengthMismatch {
        /// Vertex count of the graph.
        expected: usize,
        /// Entries in the coloring.
        got: usize,
    },
}

// ============================================================================
// Vertex
// ============================================================================

/// A single vertex: id, caller-owned position payload, neighbor set and optional color.
#[derive(Clone, Debug)]
pub struct Vertex<P> {
    id: VertexId,
    position: P,
    neighbors: BTreeSet<VertexId>,
    color: Option<Color>,
}

impl<P> Vertex<P> {
    /// Returns the vertex id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the position payload exactly as it was passed to [`Graph::add_vertex`].
    #[inline]
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Iterates over neighbor ids in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.iter().copied()
    }

    /// Returns the number of incident edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the stored color, or `None` if the graph hasn't been colored since the last
    /// vertex or edge was added.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

// ============================================================================
// Graph
// ============================================================================

/// An undirected simple graph whose vertices carry an opaque position payload `P`.
///
/// Invariants:
/// - `vertices[i].id == VertexId(i)`.
/// - Adjacency is symmetric: `b ∈ N(a)` iff `a ∈ N(b)` iff `edge_key(a, b) ∈ edges`.
/// - No self-loops and no parallel edges.
#[derive(Clone, Debug)]
pub struct Graph<P = ()> {
    vertices: Vec<Vertex<P>>,
    edges: BTreeSet<(VertexId, VertexId)>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Graph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Appends a vertex at `position` and returns its id.
    pub fn add_vertex(&mut self, position: P) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.reset_colors();
        self.vertices.push(Vertex {
            id,
            position,
            neighbors: BTreeSet::new(),
            color: None,
        });
        trace!(%id, "added vertex");
        id
    }

    /// Connects `a` and `b` with an undirected edge.
    ///
    /// Returns `Ok(true)` if the edge was added and `Ok(false)` if it already existed.
    /// Adding a new edge discards any stored vertex colors, since they may no longer be proper.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either id is not in the graph, and
    /// [`GraphError::SelfLoop`] if `a == b`.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            return Err(GraphError::SelfLoop { id: a });
        }
        if !self.link(a, b) {
            debug!(%a, %b, "edge already present, ignoring");
            return Ok(false);
        }
        self.reset_colors();
        trace!(%a, %b, "added edge");
        Ok(true)
    }

    /// Removes every vertex and edge; the next vertex id is 0 again.
    pub fn clear(&mut self) {
        debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "clearing graph"
        );
        self.vertices.clear();
        self.edges.clear();
    }

    /// Returns the degree of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.vertices[v.index()].degree()
    }

    /// Iterates over the neighbors of `v` in ascending id order.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[v.index()].neighbors()
    }

    /// Returns the vertex with id `v`, if any.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> Option<&Vertex<P>> {
        self.vertices.get(v.index())
    }

    /// Returns the vertices in insertion (= id) order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<P>] {
        &self.vertices
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Iterates over edges as `(low, high)` id pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether the edge `(a, b)` exists. Unknown ids simply yield `false`.
    #[inline]
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains(&edge_key(a, b))
    }

    /// Returns the largest vertex degree, or 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).max().unwrap_or(0)
    }

    /// Returns the stored color of `v`, if the vertex exists and has been colored.
    #[inline]
    pub fn color(&self, v: VertexId) -> Option<Color> {
        self.vertex(v).and_then(Vertex::color)
    }

    /// Clears every stored vertex color.
    pub fn reset_colors(&mut self) {
        for vertex in &mut self.vertices {
            vertex.color = None;
        }
    }

    /// Stores a coloring on the vertices, replacing any previous colors.
    ///
    /// # Errors
    /// Returns [`GraphError::LengthMismatch`] if `coloring` was computed for a graph with a
    /// different number of vertices.
    pub fn apply_coloring(&mut self, coloring: &ColoringResult) -> Result<(), GraphError> {
        if coloring.len() != self.vertices.len() {
            return Err(GraphError::LengthMismatch {
                expected: self.vertices.len(),
                got: coloring.len(),
            });
        }
        for (vertex, &color) in self.vertices.iter_mut().zip(coloring.colors()) {
            vertex.color = Some(color);
        }
        Ok(())
    }

    #[inline]
    fn check(&self, v: VertexId) -> Result<(), GraphError> {
        if v.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                id: v,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Inserts `(a, b)` into both neighbor sets and the edge set. Ids must already be valid
    /// and distinct. Returns `false` if the edge was already present.
    fn link(&mut self, a: VertexId, b: VertexId) -> bool {
        debug_assert!(a != b);
        if !self.edges.insert(edge_key(a, b)) {
            return false;
        }
        self.vertices[a.index()].neighbors.insert(b);
        self.vertices[b.index()].neighbors.insert(a);
        true
    }
}

impl Graph<()> {
    /// Builds a position-less graph from a parsed adjacency matrix.
    pub fn from_adjacency(parsed: &ParsedAdjacencyMatrix) -> Self {
        let mut graph = Self::new();
        for _ in 0..parsed.n {
            graph.add_vertex(());
        }
        for &(i, j) in &parsed.edges {
            graph.link(VertexId(i), VertexId(j));
        }
        graph
    }

    /// Generates an Erdős–Rényi graph `G(n, p)` from the given RNG.
    ///
    /// `p` is clamped to `[0, 1]`; a NaN probability produces no edges.
    pub fn new_random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Self {
        let p = clamp_probability(p);
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex(());
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    graph.link(VertexId(i), VertexId(j));
                }
            }
        }
        graph
    }
}

// ============================================================================
// Random generation
// ============================================================================

/// Parameters for [`random_graph`].
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertices: usize,
    /// Independent probability of each edge; clamped to `[0, 1]`, NaN counts as 0.
    pub edge_probability: f64,
    /// Optional deterministic seed.
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 12,
            edge_probability: 0.3,
            seed: None,
        }
    }
}

/// Clamps `p` to `[0, 1]`, mapping NaN to 0.
#[inline]
fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Generates a random graph according to `cfg`.
pub fn random_graph(cfg: &RandomGraphConfig) -> Graph {
    let seed = cfg.seed.unwrap_or_else(rand::random::<u64>);
    let p = clamp_probability(cfg.edge_probability);
    debug!(vertices = cfg.vertices, p, seed, "generating random graph");
    let mut rng = SmallRng::seed_from_u64(seed);
    Graph::new_random(&mut rng, cfg.vertices, p)
}

// ============================================================================
// Parsing
// ============================================================================

/// Parsed adjacency matrix (0/1) representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedAdjacencyMatrix {
    /// Number of vertices (rows/cols).
    pub n: usize,
    /// Upper-triangle edges `(i, j)` with `i < j`, in row-major order.
    pub edges: Vec<(usize, usize)>,
}

/// Errors encountered while parsing/validating an adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphParseError {
    /// No non-empty rows were found.
    #[error("adjacency matrix is empty")]
    Empty,
    /// Matrix is not square.
    #[error("adjacency matrix is not square: row {row} has length {got}, expected {expected}")]
    NonSquare {
        /// The row index with wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Encountered a non `0/1` character.
    #[error("invalid character at ({row}, {col}): {ch:?} (expected '0' or '1')")]
    InvalidChar {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The invalid character.
        ch: char,
    },
    /// Diagonal contains a `1`.
    #[error("self-loop detected at vertex {vertex}")]
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },
    /// `A[i][j] != A[j][i]`.
    #[error("matrix is not symmetric at ({i},{j}): A[i][j]={a_ij}, A[j][i]={a_ji}")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Value at A[i][j].
        a_ij: u8,
        /// Value at A[j][i].
        a_ji: u8,
    },
    /// I/O error (file not found, etc.).
    #[error("I/O error: {0}")]
    Io(String),
}

/// Parses a `0/1` adjacency matrix from text.
///
/// Rules:
/// - Blank lines are ignored and rows are trimmed.
/// - The matrix must be square, symmetric, and have a zero diagonal.
///
/// # Errors
/// Returns an error if the input is empty, non-square, contains invalid characters,
/// has self-loops, or is not symmetric.
pub fn parse_adjacency_matrix(text: &str) -> Result<ParsedAdjacencyMatrix, GraphParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(GraphParseError::Empty);
    }
    let n = lines.len();

    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(n);
    for (i, line) in lines.iter().enumerate() {
        let bytes = line.as_bytes();
        if bytes.len() != n {
            return Err(GraphParseError::NonSquare {
                row: i,
                expected: n,
                got: bytes.len(),
            });
        }
        let mut row = Vec::with_capacity(n);
        for (j, &b) in bytes.iter().enumerate() {
            match b {
                b'0' => row.push(0),
                b'1' => row.push(1),
                _ => {
                    return Err(GraphParseError::InvalidChar {
                        row: i,
                        col: j,
                        ch: b as char,
                    })
                }
            }
        }
        rows.push(row);
    }

    for (i, row) in rows.iter().enumerate() {
        if row[i] != 0 {
            return Err(GraphParseError::SelfLoop { vertex: i });
        }
    }

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let a_ij = rows[i][j];
            let a_ji = rows[j][i];
            if a_ij != a_ji {
                return Err(GraphParseError::NotSymmetric { i, j, a_ij, a_ji });
            }
            if a_ij == 1 {
                edges.push((i, j));
            }
        }
    }

    Ok(ParsedAdjacencyMatrix { n, edges })
}

/// Loads a position-less graph from a file containing an adjacency matrix.
///
/// # Errors
/// Returns an error if the file cannot be read or the matrix is malformed.
pub fn load_graph(filename: impl AsRef<Path>) -> Result<Graph, GraphParseError> {
    let file = File::open(filename).map_err(|e| GraphParseError::Io(e.to_string()))?;
    let reader = BufReader::new(file);
    let mut text = String::new();
    for line in reader.lines() {
        let line = line.map_err(|e| GraphParseError::Io(e.to_string()))?;
        text.push_str(&line);
        text.push('\n');
    }
    let parsed = parse_adjacency_matrix(&text)?;
    Ok(Graph::from_adjacency(&parsed))
}

// ============================================================================
// Tests
// ============================================================================
