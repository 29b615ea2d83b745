//! Junction inference for graphs whose input only says which edges
//! follow which.
//!
//! Edges are visited in insertion order. An edge's start junction is
//! taken from the end of a predecessor, or failing that from the
//! start of a sibling (another successor of one of its
//! predecessors); its end junction symmetrically from successors and
//! their other predecessors. Anything unresolved gets a fresh id.
//! Adjacent edges always end up sharing a junction, but the numbering
//! depends on the visiting order.

use fnv::{FnvHashMap, FnvHashSet};
use log::debug;

use crate::graph::{Adjacency, EdgeId, EdgeSet, NodeId};

/// Repetitive edges, joined when they meet at a junction.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RepeatGraph {
    adjacent: FnvHashMap<EdgeId, FnvHashSet<EdgeId>>,
}

impl RepeatGraph {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_vertex(&mut self, id: EdgeId) {
        self.adjacent.entry(id).or_default();
    }

    /// Undirected; a vertex is never its own neighbor.
    pub fn connect(&mut self, a: EdgeId, b: EdgeId) {
        if a == b {
            self.add_vertex(a);
            return;
        }
        self.adjacent.entry(a).or_default().insert(b);
        self.adjacent.entry(b).or_default().insert(a);
    }

    #[inline]
    pub fn contains(&self, id: &EdgeId) -> bool {
        self.adjacent.contains_key(id)
    }

    pub fn neighbors(&self, id: &EdgeId) -> impl Iterator<Item = &EdgeId> {
        self.adjacent.get(id).into_iter().flatten()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacent.len()
    }
}

fn find_start(edges: &EdgeSet, adj: &Adjacency, id: EdgeId) -> Option<NodeId> {
    adj.predecessors(id).iter().find_map(|&prev| {
        edges.get(&prev).and_then(|e| e.end).or_else(|| {
            adj.successors(prev)
                .iter()
                .find_map(|next| edges.get(next).and_then(|e| e.start))
        })
    })
}

fn find_end(edges: &EdgeSet, adj: &Adjacency, id: EdgeId) -> Option<NodeId> {
    adj.successors(id).iter().find_map(|&next| {
        edges.get(&next).and_then(|e| e.start).or_else(|| {
            adj.predecessors(next)
                .iter()
                .find_map(|prev| edges.get(prev).and_then(|e| e.end))
        })
    })
}

/// Assign `start` and `end` junctions to every edge and return the
/// graph of repetitive edges sharing a junction. Adjacency entries
/// naming edges that don't exist are ignored.
pub fn reconstruct(edges: &mut EdgeSet, adj: &Adjacency) -> RepeatGraph {
    let mut next_node: NodeId = 1;
    let mut junctions: FnvHashMap<NodeId, Vec<EdgeId>> = FnvHashMap::default();
    let mut repeats = RepeatGraph::new();

    let ids: Vec<EdgeId> = edges.ids().collect();
    for id in ids {
        let start = match find_start(edges, adj, id) {
            Some(node) => node,
            None => {
                let node = next_node;
                // a self-loop ends where it starts
                if !adj.successors(id).contains(&id) {
                    next_node += 1;
                }
                node
            }
        };
        let end = match find_end(edges, adj, id) {
            Some(node) => node,
            None => {
                next_node += 1;
                next_node - 1
            }
        };

        if let Some(edge) = edges.get_mut(&id) {
            edge.start = Some(start);
            edge.end = Some(end);
            if edge.repetitive {
                repeats.add_vertex(id);
                junctions.entry(start).or_default().push(id);
                junctions.entry(end).or_default().push(id);
            }
        }
    }
    debug!("Inferred {} junctions", next_node - 1);

    for members in junctions.values().filter(|m| m.len() > 1) {
        for (i, &a) in members.iter().enumerate() {
            for &b in members[i + 1..].iter() {
                repeats.connect(a, b);
            }
        }
    }

    repeats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn id(n: i64) -> EdgeId {
        EdgeId::encode(n)
    }

    fn edges(numbers: &[i64]) -> EdgeSet {
        numbers
            .iter()
            .map(|&n| Edge::new(id(n), &id(n).label(), 100, 10.0))
            .collect()
    }

    fn node(edges: &EdgeSet, n: i64) -> (NodeId, NodeId) {
        let e = edges.get(&id(n)).unwrap();
        (e.start.unwrap(), e.end.unwrap())
    }

    #[test]
    fn chain_shares_junctions() {
        let mut set = edges(&[1, 2, 3]);
        let mut adj = Adjacency::new();
        adj.add_link(id(1), id(2));
        adj.add_link(id(2), id(3));
        reconstruct(&mut set, &adj);

        assert_eq!(node(&set, 1).1, node(&set, 2).0);
        assert_eq!(node(&set, 2).1, node(&set, 3).0);
        assert_ne!(node(&set, 1).0, node(&set, 3).1);
    }

    #[test]
    fn every_link_shares_a_junction() {
        // a bubble: 1 -> {2, 3} -> 4, processed out of order
        let mut set = edges(&[4, 2, 1, 3]);
        let mut adj = Adjacency::new();
        for &(a, b) in [(1, 2), (1, 3), (2, 4), (3, 4)].iter() {
            adj.add_link(id(a), id(b));
        }
        reconstruct(&mut set, &adj);

        for &(a, b) in [(1, 2), (1, 3), (2, 4), (3, 4)].iter() {
            assert_eq!(node(&set, a).1, node(&set, b).0, "{} -> {}", a, b);
        }
        assert_eq!(node(&set, 2), node(&set, 3));
    }

    #[test]
    fn unlinked_edges_get_fresh_junctions() {
        let mut set = edges(&[1, 2]);
        reconstruct(&mut set, &Adjacency::new());
        let mut nodes = vec![node(&set, 1).0, node(&set, 1).1];
        nodes.extend(vec![node(&set, 2).0, node(&set, 2).1]);
        nodes.sort_unstable();
        nodes.dedup();
        assert_eq!(nodes.len(), 4);
    }

    #[test]
    fn self_loop_starts_and_ends_at_one_junction() {
        let mut set = edges(&[1, 2]);
        let mut adj = Adjacency::new();
        adj.add_link(id(1), id(1));
        reconstruct(&mut set, &adj);
        let (s, e) = node(&set, 1);
        assert_eq!(s, e);
        assert_ne!(node(&set, 2).0, s);
    }

    #[test]
    fn missing_neighbors_are_no_information() {
        let mut set = edges(&[1]);
        let mut adj = Adjacency::new();
        adj.add_link(id(7), id(1));
        adj.add_link(id(1), id(8));
        reconstruct(&mut set, &adj);
        let (s, e) = node(&set, 1);
        assert_ne!(s, e);
    }

    #[test]
    fn repeats_meeting_at_a_junction_are_joined() {
        let mut set = edges(&[1, 2, 3]);
        for n in [1, 2].iter() {
            set.get_mut(&id(*n)).unwrap().repetitive = true;
        }
        let mut adj = Adjacency::new();
        adj.add_link(id(1), id(2));
        adj.add_link(id(2), id(3));
        let repeats = reconstruct(&mut set, &adj);

        assert_eq!(repeats.vertex_count(), 2);
        assert!(repeats.neighbors(&id(1)).any(|n| *n == id(2)));
        assert!(repeats.neighbors(&id(2)).any(|n| *n == id(1)));
        assert!(!repeats.contains(&id(3)));
    }
}
