//! Repeat graphs in dot, as written by Flye. Arcs are the edges,
//! and the dot nodes are the junctions between them:
//!
//! ```text
//! "7" -> "29" [label = "id 1\l53k 59x", color = "black"] ;
//! "29" -> "7" [label = "id -1\l53k 59x", color = "black"] ;
//! ```

use fnv::FnvHashMap;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::graph::{Edge, EdgeId, EdgeSet, RawGraph, Topology};

/// Color the assembler gives to edges it does not consider repeats.
pub const UNIQUE_COLOR: &str = "black";

lazy_static! {
    static ref ARC_RE: Regex =
        Regex::new(r#""?(\d+)"? -> "?(\d+)"? \[(.+)\]"#).unwrap();
    static ref LABEL_RE: Regex =
        Regex::new(r"id (-?\d+)\s+([0-9.]+)k\s+(\d+)").unwrap();
}

/// `key = value` pairs of a dot attribute list, quotes removed.
fn attributes(info: &str) -> FnvHashMap<&str, &str> {
    info.split(", ")
        .filter_map(|param| {
            let mut kv = param.splitn(2, " = ");
            let key = kv.next()?.trim();
            let value = kv.next()?.trim().trim_matches('"');
            Some((key, value))
        })
        .collect()
}

fn parse_arc(line: &str) -> Option<Edge> {
    let line = line.replace("\\l", " ").replace("\\n", " ");
    let caps = ARC_RE.captures(&line)?;
    let start: usize = caps[1].parse().ok()?;
    let end: usize = caps[2].parse().ok()?;
    let attrs = attributes(&caps[3]);

    let label = LABEL_RE.captures(attrs.get("label")?)?;
    let name = &label[1];
    let id = EdgeId::encode(name.parse().ok()?);
    let length = (label[2].parse::<f64>().ok()? * 1000.0).round() as usize;
    let coverage = label[3].parse::<f64>().ok()?;

    let color = attrs.get("color").copied().unwrap_or(UNIQUE_COLOR);

    let mut edge = Edge::new(id, name, length, coverage);
    edge.repetitive = color != UNIQUE_COLOR;
    edge.color = Some(color.to_string());
    edge.start = Some(start);
    edge.end = Some(end);
    edge.two_way = line.contains("dir = both");
    Some(edge)
}

/// Parse a repeat graph. Junctions and colors come from the file, so
/// the result has a declared topology.
pub fn parse(text: &str, min_edge_len: usize) -> RawGraph {
    let mut edges = EdgeSet::new();

    for line in text.lines().filter(|l| l.contains("label =")) {
        match parse_arc(line) {
            Some(edge) if edge.length >= min_edge_len => edges.insert(edge),
            Some(_) => (),
            None => debug!("Skipping repeat graph line: {}", line),
        }
    }

    info!("Parsed {} edges from repeat dot graph", edges.len());

    RawGraph {
        edges,
        topology: Topology::Declared,
    }
}
