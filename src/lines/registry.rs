//! LineRegistry: every prerequisite/corequisite line of one generation run.
//!
//! Lines are stored as edges of a petgraph `DiGraph` whose nodes are
//! plan-qualified course ids. Edges are never removed, so the petgraph edge
//! index doubles as the line id: ids are exactly `0..len()` in assignment
//! order. A separate course → line-ids index keeps per-course insertion order.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

/// Sequential line id, starting at 0.
pub type LineId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Drawn from the prerequisite to the course that needs it.
    Prerequisite,
    /// Drawn between two courses that must be taken together.
    Corequisite,
}

impl LineKind {
    pub fn is_corequisite(self) -> bool {
        self == LineKind::Corequisite
    }
}

/// A resolved line between two rendered course boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub source: String,
    pub target: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Default)]
pub struct LineRegistry {
    graph: DiGraph<String, LineKind>,
    node_index: HashMap<String, NodeIndex>,
    course_lines: HashMap<String, Vec<LineId>>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `course_id` known with an empty line list. No-op if already known.
    pub fn register(&mut self, course_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(course_id) {
            return idx;
        }
        let idx = self.graph.add_node(course_id.to_string());
        self.node_index.insert(course_id.to_string(), idx);
        self.course_lines.insert(course_id.to_string(), Vec::new());
        idx
    }

    /// Register both endpoints, record the line under both, return its id.
    ///
    /// A self-referential line lands in its course's list twice, once per
    /// endpoint; the client's reference counts stay balanced either way.
    pub fn add_line(&mut self, source: &str, target: &str, kind: LineKind) -> LineId {
        let from = self.register(source);
        let to = self.register(target);
        let id = self.graph.add_edge(from, to, kind).index();
        self.push_line(source, id);
        self.push_line(target, id);
        id
    }

    fn push_line(&mut self, course_id: &str, id: LineId) {
        if let Some(lines) = self.course_lines.get_mut(course_id) {
            lines.push(id);
        }
    }

    /// Ids of every line touching `course_id`, in assignment order.
    ///
    /// `None` means the course was never registered.
    pub fn lines_of(&self, course_id: &str) -> Option<&[LineId]> {
        self.course_lines.get(course_id).map(Vec::as_slice)
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.node_index.contains_key(course_id)
    }

    pub fn line(&self, id: LineId) -> Option<Line> {
        let edge = EdgeIndex::new(id);
        let (from, to) = self.graph.edge_endpoints(edge)?;
        let kind = *self.graph.edge_weight(edge)?;
        Some(Line {
            id,
            source: self.graph[from].clone(),
            target: self.graph[to].clone(),
            kind,
        })
    }

    /// All lines in id order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.len()).filter_map(|id| self.line(id))
    }

    /// Number of lines assigned so far (also the next id).
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered course ids.
    pub fn course_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Lines whose source and target are the same course.
    pub fn self_references(&self) -> Vec<LineId> {
        self.graph
            .edge_indices()
            .filter(|&e| {
                self.graph
                    .edge_endpoints(e)
                    .is_some_and(|(from, to)| from == to)
            })
            .map(EdgeIndex::index)
            .collect()
    }

    /// True if following prerequisite lines can lead back to where it started.
    ///
    /// Corequisite lines are ignored: mutual corequisites are expected.
    pub fn has_prerequisite_cycle(&self) -> bool {
        let prerequisites: DiGraph<(), ()> = self.graph.filter_map(
            |_, _| Some(()),
            |_, kind| (*kind == LineKind::Prerequisite).then_some(()),
        );
        is_cyclic_directed(&prerequisites)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_lines_registry.rs"]
mod tests;
