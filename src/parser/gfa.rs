//! Segment/link graphs (GFA). Segments are contigs; each one yields
//! a forward and a reverse-complement edge. Links (`L`, and the GFA2
//! style `E`) join oriented segments and only one of the two
//! strand-symmetric copies of a link is written, so every link is
//! mirrored onto the opposite strands.

use log::{debug, info};

use crate::cigar;
use crate::graph::{
    ident::contig_number, Adjacency, Edge, EdgeId, EdgeSet, Orientation,
    RawGraph, Topology,
};
use crate::tags::Tags;

/// How the strand-mirrored copy of a link is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMirror {
    /// `a -> b` also records `rc(a) -> rc(b)`.
    SameOrder,
    /// `a -> b` also records `rc(b) -> rc(a)`, unless both are the
    /// same edge. SPAdes and ABySS graphs need this.
    Reversed,
}

impl Default for LinkMirror {
    fn default() -> Self {
        LinkMirror::SameOrder
    }
}

/// Assemblers that keep the sequence elsewhere write this in the
/// sequence column and the sequence in the next one.
const UNKNOWN_SEQUENCE: &str = "unknown";

/// The forward and reverse strands of one segment record.
fn parse_segment(fields: &[&str]) -> Option<(Edge, Edge)> {
    let number = contig_number(fields.get(1)?)?;

    let (seq_len, tag_start) = match fields.get(2) {
        Some(&"*") | None => (None, 3),
        Some(seq) if seq.eq_ignore_ascii_case(UNKNOWN_SEQUENCE) => {
            match fields.get(3) {
                Some(&"*") | None => (None, 3),
                Some(seq) if !seq.contains(':') => (Some(seq.len()), 4),
                Some(_) => (None, 3),
            }
        }
        Some(seq) => (Some(seq.len()), 3),
    };
    let tags = Tags::parse(fields.iter().skip(tag_start));

    let tag_len = tags.get_i64(b"ln").map(|ln| ln.max(0) as usize);
    let length = tag_len.or(seq_len)?;

    let coverage = if let Some(dp) = tags.get_f64(b"dp") {
        dp
    } else if let Some(kc) = tags.get_f64(b"kc") {
        let len = seq_len.unwrap_or(length).max(1);
        kc / len as f64
    } else {
        1.0
    };

    let id = EdgeId::encode(number);
    let rc_id = id.matching();
    let forward = Edge::new(id, &id.label(), length, coverage);
    let reverse = Edge::new(rc_id, &rc_id.label(), length, coverage);
    Some((forward, reverse))
}

fn oriented(name: &str, orient: &str) -> Option<EdgeId> {
    let orient = Orientation::from_bytes_plus_minus(orient)?;
    EdgeId::from_label(name, orient)
}

/// `L from + to - 47M [tags]`
fn parse_link(fields: &[&str]) -> Option<(EdgeId, EdgeId, usize)> {
    let from = oriented(fields.get(1)?, fields.get(2)?)?;
    let to = oriented(fields.get(3)?, fields.get(4)?)?;
    let overlap = fields.get(5).map_or(0, |cg| cigar::overlap_len(cg.as_bytes()));
    Some((from, to, overlap))
}

/// `2+` style oriented segment reference.
fn split_oriented(s: &str) -> Option<EdgeId> {
    let at = s.len().checked_sub(1)?;
    if !s.is_char_boundary(at) {
        return None;
    }
    let (name, orient) = s.split_at(at);
    oriented(name, orient)
}

/// `E * 2+ 65397+ 21 68$ 0 47 47M [tags]`
fn parse_alignment_edge(fields: &[&str]) -> Option<(EdgeId, EdgeId, usize)> {
    let from = split_oriented(fields.get(2)?)?;
    let to = split_oriented(fields.get(3)?)?;
    let alignment = fields.get(8).or_else(|| fields.last())?;
    Some((from, to, cigar::overlap_len(alignment.as_bytes())))
}

/// Parse a GFA graph. Segments shorter than `min_edge_len` are
/// dropped; links touching them are still recorded.
pub fn parse(text: &str, min_edge_len: usize, mirror: LinkMirror) -> RawGraph {
    let mut edges = EdgeSet::new();
    let mut links: Vec<(EdgeId, EdgeId, usize)> = Vec::new();

    for line in text.lines() {
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        let parsed_link = match fields.first() {
            Some(&"S") => {
                match parse_segment(&fields) {
                    Some((fwd, rev)) if fwd.length >= min_edge_len => {
                        edges.insert(fwd);
                        edges.insert(rev);
                    }
                    Some(_) => (),
                    None => debug!("Skipping segment line: {}", line),
                }
                continue;
            }
            Some(&"L") => parse_link(&fields),
            Some(&"E") => parse_alignment_edge(&fields),
            _ => continue,
        };
        match parsed_link {
            Some(link) => links.push(link),
            None => debug!("Skipping link line: {}", line),
        }
    }

    let mut adjacency = Adjacency::new();
    for &(from, to, overlap) in links.iter() {
        adjacency.add_link(from, to);
        match mirror {
            LinkMirror::SameOrder => {
                adjacency.add_link(from.matching(), to.matching())
            }
            LinkMirror::Reversed => {
                let (m_from, m_to) = (to.matching(), from.matching());
                if m_from != m_to {
                    adjacency.add_link(m_from, m_to);
                }
            }
        }

        if overlap > 0 {
            if let Some(edge) = edges.get_mut(&from) {
                edge.add_overlap(to, overlap);
            }
            if let Some(edge) = edges.get_mut(&to) {
                edge.add_overlap(from, overlap);
            }
        }
    }

    info!(
        "Parsed {} edges and {} links from GFA",
        edges.len(),
        links.len()
    );

    RawGraph {
        edges,
        topology: Topology::Inferred(adjacency),
    }
}
