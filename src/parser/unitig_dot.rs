//! Unitig adjacency graphs in dot, as written by ABySS:
//!
//! ```text
//! digraph adj {
//! graph [k=50]
//! edge [d=-49]
//! "3+" [l=99 C=454]
//! "3-" [l=99 C=454]
//! "3+" -> "157446-" [d=-45]
//! ```
//!
//! Every strand is its own node statement, and arcs join strands.

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::graph::{
    Adjacency, Edge, EdgeId, EdgeSet, Orientation, RawGraph, Topology,
};

lazy_static! {
    static ref EDGE_RE: Regex =
        Regex::new(r#""?(\d+)([+-])"? (.+)"#).unwrap();
    static ref LINK_RE: Regex =
        Regex::new(r#""?(\d+)([+-])"? -> "?(\d+)([+-])"?"#).unwrap();
    static ref INFO_RE: Regex =
        Regex::new(r"l=(\d+(?:\.\d+)?) C=(\d+(?:\.\d+)?)").unwrap();
}

/// A numbered strand such as `3+` or `0-`. The sign picks the strand
/// directly, so contig 0 keeps two distinct ids.
fn strand_id(number: &str, sign: &str) -> Option<EdgeId> {
    let orient = Orientation::from_bytes_plus_minus(sign)?;
    EdgeId::new(number.parse().ok()?, orient)
}

fn parse_edge(line: &str) -> Option<Edge> {
    let caps = EDGE_RE.captures(line)?;
    let id = strand_id(&caps[1], &caps[2])?;

    let info = INFO_RE.captures(&caps[3])?;
    let length = info[1].parse::<f64>().ok()?.trunc() as usize;
    let coverage = info[2].parse::<f64>().ok()?;
    Some(Edge::new(id, &id.label(), length, coverage))
}

fn parse_link(line: &str) -> Option<(EdgeId, EdgeId)> {
    let caps = LINK_RE.captures(line)?;
    let from = strand_id(&caps[1], &caps[2])?;
    let to = strand_id(&caps[3], &caps[4])?;
    Some((from, to))
}

/// Parse a unitig adjacency graph. Strands shorter than
/// `min_edge_len` are dropped, but arcs touching them are kept.
pub fn parse(text: &str, min_edge_len: usize) -> RawGraph {
    let mut edges = EdgeSet::new();
    let mut adjacency = Adjacency::new();

    for line in text.lines() {
        if line.contains("l=") {
            match parse_edge(line) {
                Some(edge) if edge.length >= min_edge_len => edges.insert(edge),
                Some(_) => (),
                None => debug!("Skipping unitig line: {}", line),
            }
        }
        if line.contains("->") {
            match parse_link(line) {
                Some((from, to)) => adjacency.add_link(from, to),
                None => debug!("Skipping arc line: {}", line),
            }
        }
    }

    info!(
        "Parsed {} edges and {} links from unitig dot graph",
        edges.len(),
        adjacency.link_count()
    );

    RawGraph {
        edges,
        topology: Topology::Inferred(adjacency),
    }
}
