//! # Brooks Coloring Engine
//!
//! Degree-ordered greedy vertex coloring for interactively built undirected graphs.
//!
//! This crate provides:
//! - A mutable [`Graph`](graph::Graph) with stable, sequential vertex ids and an opaque
//!   per-vertex position payload.
//! - A first-fit coloring engine that visits vertices by decreasing degree, motivated by
//!   Brooks' theorem (\(\chi(G) \le \Delta(G)\) for connected graphs other than complete
//!   graphs and odd cycles).
//! - Graph statistics: maximum degree \(\Delta\) and the heuristic chromatic number.
//! - A headless click-driven [`Editor`](editor::Editor) for drawing front ends.
//!
//! ## Quick Start
//!
//! ```
//! use brooks::prelude::*;
//!
//! // A star: center 0 joined to three leaves.
//! let mut graph = Graph::new();
//! let center = graph.add_vertex(());
//! for _ in 0..3 {
//!     let leaf = graph.add_vertex(());
//!     graph.connect(center, leaf).unwrap();
//! }
//!
//! let coloring = color_graph(&graph);
//! assert_eq!(coloring.colors(), &[0, 1, 1, 1]);
//! assert_eq!(chromatic_number(&coloring), 2);
//! assert_eq!(max_degree(&graph), 3);
//! ```
//!
//! ## Interactive Editing
//!
//! ```
//! use brooks::editor::{ClickOutcome, Editor, Point};
//!
//! let mut editor = Editor::default();
//! editor.click(Point::new(20.0, 20.0)).unwrap();
//! editor.click(Point::new(120.0, 40.0)).unwrap();
//!
//! assert!(editor.enter_connect_mode());
//! editor.click(Point::new(22.0, 18.0)).unwrap();
//! let outcome = editor.click(Point::new(118.0, 45.0)).unwrap();
//! assert!(matches!(outcome, ClickOutcome::Connected { added: true, .. }));
//!
//! editor.color().unwrap();
//! assert_eq!(editor.info().chromatic_number, 2);
//! ```
//!
//! ## Validating Bundled Graphs
//!
//! ```
//! use brooks::validate::validate_known_graphs;
//!
//! validate_known_graphs().expect("bundled fixtures should color as recorded");
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Graph structure, adjacency-matrix parsing, random generation.
//! - [`coloring`]: The degree-ordered first-fit engine and its result type.
//! - [`stats`]: Maximum degree, chromatic number, and a combined report.
//! - [`validate`]: Proper-coloring checks and bundled fixture graphs.
//! - [`editor`]: Click-driven editing state machine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::inline_always)]
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod coloring;
pub mod editor;
pub mod graph;
pub mod stats;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::coloring::{color_graph, degree_order, Color, ColoringResult, GreedyColorer};
    pub use crate::editor::{Editor, EditorConfig, Mode, Point};
    pub use crate::graph::{Graph, GraphError, RandomGraphConfig, VertexId};
    pub use crate::stats::{chromatic_number, max_degree, GraphStats};
    pub use crate::validate::{validate_coloring, validate_known_graphs};
}
