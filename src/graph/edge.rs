use fnv::FnvHashMap;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::EdgeId;

/// Identifier of an inferred or declared junction between edges.
pub type NodeId = usize;

/// Sequence shared with a neighboring edge at a junction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Overlap {
    pub name: String,
    pub id: EdgeId,
    pub length: usize,
}

/// One strand of an assembled contig.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Edge {
    pub id: EdgeId,
    /// The signed label the assembler used for this strand
    pub name: String,
    pub length: usize,
    pub coverage: f64,
    pub multiplicity: usize,
    pub repetitive: bool,
    pub color: Option<String>,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
    pub overlaps: Vec<Overlap>,
    /// Drawn without direction, the assembler marked the link both ways
    pub two_way: bool,
    pub element_id: EdgeId,
}

impl Edge {
    /// Length and coverage are floored at 1.
    pub fn new(id: EdgeId, name: &str, length: usize, coverage: f64) -> Self {
        Edge {
            id,
            name: name.to_string(),
            length: length.max(1),
            coverage: coverage.max(1.0),
            multiplicity: 1,
            repetitive: false,
            color: None,
            start: None,
            end: None,
            overlaps: Vec::new(),
            two_way: false,
            element_id: id,
        }
    }

    /// Record the overlap with `neighbor`, replacing an earlier
    /// overlap length for the same neighbor.
    pub fn add_overlap(&mut self, neighbor: EdgeId, length: usize) {
        if let Some(o) = self.overlaps.iter_mut().find(|o| o.id == neighbor) {
            o.length = length;
        } else {
            self.overlaps.push(Overlap {
                name: neighbor.label(),
                id: neighbor,
                length,
            });
        }
    }
}

/// Edges keyed by id, iterated in the order they were inserted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    index: FnvHashMap<EdgeId, usize>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert an edge. Re-inserting an id replaces the stored edge
    /// but keeps its original position.
    pub fn insert(&mut self, edge: Edge) {
        match self.index.get(&edge.id) {
            Some(&ix) => self.edges[ix] = edge,
            None => {
                self.index.insert(edge.id, self.edges.len());
                self.edges.push(edge);
            }
        }
    }

    #[inline]
    pub fn get(&self, id: &EdgeId) -> Option<&Edge> {
        self.index.get(id).map(|&ix| &self.edges[ix])
    }

    #[inline]
    pub fn get_mut(&mut self, id: &EdgeId) -> Option<&mut Edge> {
        match self.index.get(id) {
            Some(&ix) => Some(&mut self.edges[ix]),
            None => None,
        }
    }

    #[inline]
    pub fn contains(&self, id: &EdgeId) -> bool {
        self.index.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|e| e.id)
    }
}

impl std::iter::FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        iter.into_iter().for_each(|e| set.insert(e));
        set
    }
}
