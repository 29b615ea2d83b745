//! Parse the graphs written by genome assemblers (ABySS and Flye dot,
//! GFA, Canu tigInfo tables) into one strand-aware assembly graph,
//! with copy numbers estimated from coverage and repeat clusters
//! colored for display.

pub mod cigar;
pub mod coloring;
pub mod graph;
pub mod mmap;
pub mod multiplicity;
pub mod parser;
pub mod tags;
pub mod topology;

pub use graph::{AssemblyGraph, Edge, EdgeId, EdgeSet};
pub use parser::{Assembler, GraphFormat, ParserConfig};
