use fnv::FnvHashSet;
use log::debug;

use crate::graph::{EdgeId, EdgeSet};
use crate::topology::RepeatGraph;

pub const REPEAT_COLORS: [&str; 10] = [
    "red",
    "darkgreen",
    "blue",
    "goldenrod",
    "cadetblue1",
    "darkorchid",
    "aquamarine1",
    "darkgoldenrod1",
    "deepskyblue1",
    "darkolivegreen3",
];

/// Cycles through `REPEAT_COLORS`, one color per repeat cluster.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Palette {
    cursor: usize,
}

impl Palette {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn next_color(&mut self) -> &'static str {
        let color = REPEAT_COLORS[self.cursor % REPEAT_COLORS.len()];
        self.cursor += 1;
        color
    }

    /// Number of colors handed out so far.
    pub fn used(&self) -> usize {
        self.cursor
    }
}

/// All vertices reachable from `start`, found with an explicit stack
/// so long repeat chains can't overflow the call stack.
pub fn component(graph: &RepeatGraph, start: EdgeId) -> FnvHashSet<EdgeId> {
    let mut visited = FnvHashSet::default();
    let mut stack = vec![start];
    visited.insert(start);
    while let Some(id) = stack.pop() {
        for &next in graph.neighbors(&id) {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }
    visited
}

/// Give every cluster of connected repeat edges one color. A
/// cluster and its reverse-complement cluster are colored together.
/// Returns the number of clusters colored.
pub fn color_repeats(
    edges: &mut EdgeSet,
    graph: &RepeatGraph,
    palette: &mut Palette,
) -> usize {
    let mut colored: FnvHashSet<EdgeId> = FnvHashSet::default();
    let mut clusters = 0;

    let repeats: Vec<EdgeId> = edges
        .iter()
        .filter(|e| e.repetitive)
        .map(|e| e.id)
        .collect();

    for id in repeats {
        if colored.contains(&id) {
            continue;
        }
        let mut cluster = component(graph, id);
        let rc = id.matching();
        if graph.contains(&rc) {
            cluster.extend(component(graph, rc));
        }

        let color = palette.next_color();
        for member in cluster {
            if let Some(edge) = edges.get_mut(&member) {
                edge.color = Some(color.to_string());
            }
            colored.insert(member);
        }
        clusters += 1;
    }

    debug!("Colored {} repeat clusters", clusters);
    clusters
}
