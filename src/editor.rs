//! Headless interactive editor: turns canvas clicks into graph mutations.
//!
//! A drawing front end forwards each click position to [`Editor::click`] and renders whatever
//! the editor reports back. The editor owns the graph, the current interaction [`Mode`], and the
//! last coloring, so the front end keeps no graph state of its own.

use crate::coloring::{ColoringResult, GreedyColorer};
use crate::graph::{Graph, GraphError, VertexId};
use crate::stats::GraphStats;
use tracing::debug;

/// Default hit radius, equal to the drawn vertex radius.
pub const HIT_RADIUS: f64 = 10.0;

/// A canvas position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Editor settings.
#[derive(Clone, Debug)]
pub struct EditorConfig {
    /// Half-width of the square around a vertex that counts as a hit.
    pub hit_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_radius: HIT_RADIUS,
        }
    }
}

/// What a click means right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Clicks place new vertices.
    #[default]
    AddVertex,
    /// Clicks select the first endpoint of an edge.
    Connect,
    /// One endpoint is selected; the next hit on another vertex completes the edge.
    ConnectPending(VertexId),
}

/// Result of a single click, for the front end to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A vertex was placed.
    VertexAdded(VertexId),
    /// The first endpoint of an edge was selected.
    Selected(VertexId),
    /// An edge between the two vertices exists after the click; `added` is `false` if it was
    /// already there.
    Connected {
        /// First selected endpoint.
        a: VertexId,
        /// Second selected endpoint.
        b: VertexId,
        /// Whether the edge is new.
        added: bool,
    },
    /// A pending selection was dropped (miss, or the same vertex clicked twice).
    Deselected,
    /// Nothing happened.
    Ignored,
}

/// Interactive graph editor.
#[derive(Debug, Default)]
pub struct Editor {
    graph: Graph<Point>,
    mode: Mode,
    config: EditorConfig,
    colorer: GreedyColorer,
    coloring: Option<ColoringResult>,
}

impl Editor {
    /// Creates an empty editor in [`Mode::AddVertex`].
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the graph being edited.
    pub fn graph(&self) -> &Graph<Point> {
        &self.graph
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the last coloring, if the graph hasn't changed since it was computed.
    pub fn coloring(&self) -> Option<&ColoringResult> {
        self.coloring.as_ref()
    }

    /// Switches to [`Mode::AddVertex`], dropping any pending selection.
    pub fn enter_add_mode(&mut self) {
        self.mode = Mode::AddVertex;
    }

    /// Switches to [`Mode::Connect`]. Does nothing and returns `false` with fewer than two
    /// vertices.
    pub fn enter_connect_mode(&mut self) -> bool {
        if self.graph.vertex_count() < 2 {
            return false;
        }
        self.mode = Mode::Connect;
        true
    }

    /// Returns the first vertex, in insertion order, whose hit box contains `point`.
    pub fn vertex_at(&self, point: Point) -> Option<VertexId> {
        let r = self.config.hit_radius;
        self.graph
            .vertices()
            .iter()
            .find(|v| {
                let p = v.position();
                (point.x - p.x).abs() <= r && (point.y - p.y).abs() <= r
            })
            .map(|v| v.id())
    }

    /// Handles a click at `point` according to the current mode.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from the graph; hit-testing only yields valid, distinct ids,
    /// so this does not happen in practice.
    pub fn click(&mut self, point: Point) -> Result<ClickOutcome, GraphError> {
        match self.mode {
            Mode::AddVertex => {
                let id = self.graph.add_vertex(point);
                self.coloring = None;
                Ok(ClickOutcome::VertexAdded(id))
            }
            Mode::Connect => match self.vertex_at(point) {
                Some(v) => {
                    self.mode = Mode::ConnectPending(v);
                    Ok(ClickOutcome::Selected(v))
                }
                None => Ok(ClickOutcome::Ignored),
            },
            Mode::ConnectPending(a) => {
                self.mode = Mode::Connect;
                match self.vertex_at(point) {
                    Some(b) if b != a => {
                        let added = self.graph.connect(a, b)?;
                        if added {
                            self.coloring = None;
                        }
                        Ok(ClickOutcome::Connected { a, b, added })
                    }
                    _ => Ok(ClickOutcome::Deselected),
                }
            }
        }
    }

    /// Colors the graph, stores the colors on the vertices, and returns the coloring.
    ///
    /// Returns `None` for an empty graph.
    ///
    /// # Errors
    /// Returns [`GraphError::LengthMismatch`] only if the engine output disagrees with the
    /// graph size.
    pub fn color(&mut self) -> Result<Option<&ColoringResult>, GraphError> {
        if self.graph.is_empty() {
            return Ok(None);
        }
        self.graph.reset_colors();
        let coloring = self.colorer.color(&self.graph);
        self.graph.apply_coloring(&coloring)?;
        Ok(Some(&*self.coloring.insert(coloring)))
    }

    /// Returns statistics for the current graph. The chromatic number is 0 until the graph has
    /// been colored since its last change.
    pub fn info(&self) -> GraphStats {
        match &self.coloring {
            Some(coloring) => GraphStats::collect(&self.graph, coloring),
            None => GraphStats::collect(&self.graph, &ColoringResult::default()),
        }
    }

    /// Removes everything and returns to [`Mode::AddVertex`].
    pub fn clear(&mut self) {
        debug!(vertices = self.graph.vertex_count(), "clearing editor");
        self.graph.clear();
        self.coloring = None;
        self.mode = Mode::AddVertex;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_vertices(points: &[(f64, f64)]) -> Editor {
        let mut editor = Editor::default();
        for &(x, y) in points {
            editor.click(Point::new(x, y)).unwrap();
        }
        editor
    }

    #[test]
    fn clicks_add_vertices_in_add_mode() {
        let editor = editor_with_vertices(&[(10.0, 10.0), (50.0, 50.0)]);
        assert_eq!(editor.graph().vertex_count(), 2);
        assert_eq!(
            *editor.graph().vertices()[1].position(),
            Point::new(50.0, 50.0)
        );
        assert_eq!(editor.mode(), Mode::AddVertex);
    }

    #[test]
    fn connect_mode_requires_two_vertices() {
        let mut editor = editor_with_vertices(&[(10.0, 10.0)]);
        assert!(!editor.enter_connect_mode());
        assert_eq!(editor.mode(), Mode::AddVertex);

        editor.click(Point::new(100.0, 100.0)).unwrap();
        assert!(editor.enter_connect_mode());
        assert_eq!(editor.mode(), Mode::Connect);
    }

    #[test]
    fn two_hits_connect_vertices() {
        let mut editor = editor_with_vertices(&[(10.0, 10.0), (100.0, 100.0)]);
        editor.enter_connect_mode();

        let first = editor.click(Point::new(12.0, 8.0)).unwrap();
        assert_eq!(first, ClickOutcome::Selected(VertexId::new(0)));
        assert_eq!(editor.mode(), Mode::ConnectPending(VertexId::new(0)));

        let second = editor.click(Point::new(95.0, 110.0)).unwrap();
        assert_eq!(
            second,
            ClickOutcome::Connected {
                a: VertexId::new(0),
                b: VertexId::new(1),
                added: true
            }
        );
        assert_eq!(editor.mode(), Mode::Connect);
        assert!(editor.graph().has_edge(VertexId::new(0), VertexId::new(1)));
    }

    #[test]
    fn repeated_connection_is_reported_but_not_duplicated() {
        let mut editor = editor_with_vertices(&[(10.0, 10.0), (100.0, 100.0)]);
        editor.enter_connect_mode();
        for _ in 0..2 {
            editor.click(Point::new(10.0, 10.0)).unwrap();
            editor.click(Point::new(100.0, 100.0)).unwrap();
        }
        assert_eq!(editor.graph().edge_count(), 1);

        editor.click(Point::new(100.0, 100.0)).unwrap();
        let outcome = editor.click(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Connected {
                a: VertexId::new(1),
                b: VertexId::new(0),
                added: false
            }
        );
        assert_eq!(editor.graph().edge_count(), 1);
    }

    #[test]
    fn miss_or_same_vertex_drops_selection() {
        let mut editor = editor_with_vertices(&[(10.0, 10.0), (100.0, 100.0)]);
        editor.enter_connect_mode();

        assert_eq!(editor.click(Point::new(300.0, 300.0)).unwrap(), ClickOutcome::Ignored);

        editor.click(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(editor.click(Point::new(11.0, 11.0)).unwrap(), ClickOutcome::Deselected);
        assert_eq!(editor.mode(), Mode::Connect);

        editor.click(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(editor.click(Point::new(300.0, 300.0)).unwrap(), ClickOutcome::Deselected);
        assert_eq!(editor.graph().edge_count(), 0);
    }

    #[test]
    fn hit_test_prefers_earliest_vertex() {
        let editor = editor_with_vertices(&[(10.0, 10.0), (15.0, 15.0)]);
        assert_eq!(editor.vertex_at(Point::new(13.0, 13.0)), Some(VertexId::new(0)));
        assert_eq!(editor.vertex_at(Point::new(24.0, 24.0)), Some(VertexId::new(1)));
        assert_eq!(editor.vertex_at(Point::new(26.0, 26.0)), None);
    }

    #[test]
    fn custom_hit_radius() {
        let mut editor = Editor::new(EditorConfig { hit_radius: 2.0 });
        editor.click(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(editor.vertex_at(Point::new(2.0, -2.0)), Some(VertexId::new(0)));
        assert_eq!(editor.vertex_at(Point::new(3.0, 0.0)), None);
    }

    #[test]
    fn color_stores_colors_and_info_reports_them() {
        let mut editor = editor_with_vertices(&[(0.0, 0.0), (100.0, 0.0), (50.0, 80.0)]);
        editor.enter_connect_mode();
        let corners = [(0.0, 0.0), (100.0, 0.0), (50.0, 80.0)];
        for i in 0..3 {
            let (a, b) = (corners[i], corners[(i + 1) % 3]);
            editor.click(Point::new(a.0, a.1)).unwrap();
            editor.click(Point::new(b.0, b.1)).unwrap();
        }

        assert_eq!(editor.info().chromatic_number, 0);
        let chi = editor.color().unwrap().map(ColoringResult::chromatic_number);
        assert_eq!(chi, Some(3));

        let stored: Vec<_> = editor.graph().vertices().iter().map(|v| v.color()).collect();
        assert_eq!(stored, vec![Some(0), Some(1), Some(2)]);

        let info = editor.info();
        assert_eq!(info.chromatic_number, 3);
        assert_eq!(info.max_degree, 2);
    }

    #[test]
    fn adding_a_vertex_invalidates_coloring() {
        let mut editor = editor_with_vertices(&[(0.0, 0.0)]);
        editor.color().unwrap();
        assert!(editor.coloring().is_some());

        editor.click(Point::new(50.0, 50.0)).unwrap();
        assert!(editor.coloring().is_none());
        assert_eq!(editor.graph().color(VertexId::new(1)), None);
    }

    #[test]
    fn coloring_empty_editor_is_a_noop() {
        let mut editor = Editor::default();
        assert_eq!(editor.color().unwrap(), None);
        assert_eq!(editor.info(), GraphStats::default());
    }

    #[test]
    fn clear_resets_everything() {
        let mut editor = editor_with_vertices(&[(0.0, 0.0), (50.0, 50.0)]);
        editor.enter_connect_mode();
        editor.click(Point::new(0.0, 0.0)).unwrap();
        editor.color().unwrap();

        editor.clear();
        assert_eq!(editor.mode(), Mode::AddVertex);
        assert!(editor.graph().is_empty());
        assert!(editor.coloring().is_none());
        assert_eq!(
            editor.click(Point::new(5.0, 5.0)).unwrap(),
            ClickOutcome::VertexAdded(VertexId::new(0))
        );
    }
}
