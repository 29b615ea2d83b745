pub mod edge;
pub mod ident;
pub mod orientation;

pub use self::edge::*;
pub use self::ident::EdgeId;
pub use self::orientation::*;

use std::io::{self, Write};
use std::path::Path;

use fnv::{FnvHashMap, FnvHashSet};
use log::{info, warn};

use crate::coloring::{self, Palette};
use crate::mmap::MappedInput;
use crate::multiplicity;
use crate::parser::{tig_info, GraphFormat, GraphResult, ParserConfig};
use crate::topology;

/// Which edges follow which, as recorded by a parser. Ids may name
/// edges that were never built.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Adjacency {
    predecessors: FnvHashMap<EdgeId, Vec<EdgeId>>,
    successors: FnvHashMap<EdgeId, Vec<EdgeId>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Default::default()
    }

    /// Record that `to` directly follows `from`.
    pub fn add_link(&mut self, from: EdgeId, to: EdgeId) {
        self.successors.entry(from).or_default().push(to);
        self.predecessors.entry(to).or_default().push(from);
    }

    pub fn predecessors(&self, id: EdgeId) -> &[EdgeId] {
        self.predecessors.get(&id).map_or(&[][..], Vec::as_slice)
    }

    pub fn successors(&self, id: EdgeId) -> &[EdgeId] {
        self.successors.get(&id).map_or(&[][..], Vec::as_slice)
    }

    /// Number of recorded arcs, duplicates included.
    pub fn link_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }
}

/// How the junctions of a parsed graph are known.
#[derive(Debug, Clone, PartialEq)]
pub enum Topology {
    /// The input names the junctions, and colors its repeats.
    Declared,
    /// Junctions must be inferred from edge-to-edge adjacency.
    Inferred(Adjacency),
}

impl Topology {
    pub fn adjacency(&self) -> Option<&Adjacency> {
        match self {
            Topology::Declared => None,
            Topology::Inferred(adj) => Some(adj),
        }
    }
}

/// A parser's output, before multiplicities and junctions are worked
/// out.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGraph {
    pub edges: EdgeSet,
    pub topology: Topology,
}

/// Counts describing a finished graph.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GraphSummary {
    pub edges: usize,
    pub repeats: usize,
    pub nodes: usize,
    pub clusters: usize,
    pub median_coverage: Option<f64>,
}

impl std::fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} edges, {} repeats in {} clusters, {} junctions",
            self.edges, self.repeats, self.clusters, self.nodes
        )?;
        if let Some(median) = self.median_coverage {
            write!(f, ", median coverage {:.2}", median)?;
        }
        Ok(())
    }
}

/// A strand-aware assembly graph with multiplicities, junctions and
/// repeat colors filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyGraph {
    edges: EdgeSet,
    median_coverage: Option<f64>,
    clusters: usize,
}

impl AssemblyGraph {
    /// Run the whole pipeline on the contents of a graph file.
    pub fn from_text(
        format: GraphFormat,
        text: &str,
        config: &ParserConfig,
    ) -> Self {
        let mut raw = format.parse(text, config);

        if format == GraphFormat::Gfa {
            if let Some(path) = config.tig_info.as_ref() {
                if let Err(err) = tig_info::apply_file(path, &mut raw.edges) {
                    warn!(
                        "Ignoring tigInfo table {}: {}",
                        path.display(),
                        err
                    );
                }
            }
        }

        Self::from_raw(raw)
    }

    /// Load and run the pipeline on a graph file. An empty file gives
    /// an empty graph.
    pub fn from_path<P: AsRef<Path>>(
        format: GraphFormat,
        path: P,
        config: &ParserConfig,
    ) -> GraphResult<Self> {
        info!("Parsing {}...", path.as_ref().display());
        let input = MappedInput::open(path.as_ref())?;
        let graph = Self::from_text(format, &input.text(), config);
        info!("Finished parsing: {}", graph.summary());
        Ok(graph)
    }

    /// Estimate multiplicities, then infer junctions and color the
    /// repeat clusters unless the input declared its own.
    pub fn from_raw(raw: RawGraph) -> Self {
        let RawGraph {
            mut edges,
            topology: shape,
        } = raw;

        let median_coverage = multiplicity::estimate(&mut edges);

        let clusters = match shape {
            Topology::Declared => 0,
            Topology::Inferred(adjacency) => {
                let repeats = topology::reconstruct(&mut edges, &adjacency);
                let mut palette = Palette::new();
                coloring::color_repeats(&mut edges, &repeats, &mut palette)
            }
        };

        AssemblyGraph {
            edges,
            median_coverage,
            clusters,
        }
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn into_edges(self) -> EdgeSet {
        self.edges
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn median_coverage(&self) -> Option<f64> {
        self.median_coverage
    }

    /// Number of distinct junctions touched by an edge.
    pub fn node_count(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|e| e.start.into_iter().chain(e.end))
            .collect::<FnvHashSet<_>>()
            .len()
    }

    pub fn repeat_count(&self) -> usize {
        self.edges.iter().filter(|e| e.repetitive).count()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            edges: self.len(),
            repeats: self.repeat_count(),
            nodes: self.node_count(),
            clusters: self.clusters,
            median_coverage: self.median_coverage,
        }
    }

    /// One tab-separated row per edge, after a header row.
    pub fn write_tsv<W: Write>(&self, mut out: W) -> io::Result<()> {
        let opt = |n: Option<NodeId>| n.map_or("*".to_string(), |n| n.to_string());
        writeln!(
            out,
            "id\tname\tlength\tcoverage\tmultiplicity\trepetitive\tcolor\tstart\tend\ttwo_way"
        )?;
        for e in self.edges.iter() {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                e.id,
                e.name,
                e.length,
                e.coverage,
                e.multiplicity,
                e.repetitive,
                e.color.as_deref().unwrap_or("*"),
                opt(e.start),
                opt(e.end),
                e.two_way
            )?;
        }
        Ok(())
    }

    /// The edges as a JSON array, in insertion order.
    #[cfg(feature = "serde1")]
    pub fn write_json<W: Write>(&self, out: W) -> io::Result<()> {
        let edges: Vec<&Edge> = self.edges.iter().collect();
        serde_json::to_writer(out, &edges)?;
        Ok(())
    }
}
