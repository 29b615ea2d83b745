pub mod error;
pub mod gfa;
pub mod repeat_dot;
pub mod tig_info;
pub mod unitig_dot;

pub use self::error::{GraphError, GraphResult};
pub use self::gfa::LinkMirror;

use std::path::{Path, PathBuf};

use crate::graph::RawGraph;

/// The supported graph dialects, chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    /// ABySS-style dot: strands are nodes, arcs are adjacencies.
    UnitigDot,
    /// Flye-style dot: arcs are edges, nodes are junctions.
    RepeatDot,
    /// GFA segments, links and alignment edges.
    Gfa,
}

impl GraphFormat {
    pub fn parse(&self, text: &str, config: &ParserConfig) -> RawGraph {
        match self {
            GraphFormat::UnitigDot => unitig_dot::parse(text, config.min_edge_len),
            GraphFormat::RepeatDot => repeat_dot::parse(text, config.min_edge_len),
            GraphFormat::Gfa => {
                gfa::parse(text, config.min_edge_len, config.link_mirror())
            }
        }
    }
}

impl std::str::FromStr for GraphFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abyss-dot" | "unitig-dot" | "abyss" => Ok(GraphFormat::UnitigDot),
            "flye-dot" | "repeat-dot" | "flye" | "gv" => {
                Ok(GraphFormat::RepeatDot)
            }
            "gfa" | "gfa1" | "gfa2" => Ok(GraphFormat::Gfa),
            _ => Err(GraphError::UnknownFormat(s.to_string())),
        }
    }
}

/// The assembler that wrote the input, where it changes how the
/// input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembler {
    Abyss,
    Spades,
    Canu,
    Flye,
    Other(String),
}

impl Assembler {
    /// SPAdes and ABySS GFA links need their strand mirror recorded
    /// with the endpoints swapped.
    pub fn link_mirror(&self) -> LinkMirror {
        match self {
            Assembler::Abyss | Assembler::Spades => LinkMirror::Reversed,
            _ => LinkMirror::SameOrder,
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Assembler::Other(String::new())
    }
}

impl std::str::FromStr for Assembler {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let assembler = if lower.contains("spades") {
            Assembler::Spades
        } else if lower.contains("abyss") {
            Assembler::Abyss
        } else if lower.contains("canu") {
            Assembler::Canu
        } else if lower.contains("flye") {
            Assembler::Flye
        } else {
            Assembler::Other(s.to_string())
        };
        Ok(assembler)
    }
}

/// Options shared by all the parsers.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Edges shorter than this are never built
    pub min_edge_len: usize,
    pub assembler: Assembler,
    /// Canu tigInfo table applied to GFA input
    pub tig_info: Option<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::new(1)
    }
}

impl ParserConfig {
    pub fn new(min_edge_len: usize) -> Self {
        ParserConfig {
            min_edge_len,
            assembler: Assembler::default(),
            tig_info: None,
        }
    }

    pub fn with_assembler(mut self, assembler: Assembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn with_tig_info<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.tig_info = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn link_mirror(&self) -> LinkMirror {
        self.assembler.link_mirror()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags() {
        assert_eq!("GFA".parse::<GraphFormat>().unwrap(), GraphFormat::Gfa);
        assert_eq!(
            "abyss-dot".parse::<GraphFormat>().unwrap(),
            GraphFormat::UnitigDot
        );
        assert_eq!(
            "flye".parse::<GraphFormat>().unwrap(),
            GraphFormat::RepeatDot
        );
        match "fastg".parse::<GraphFormat>() {
            Err(GraphError::UnknownFormat(tag)) => assert_eq!(tag, "fastg"),
            other => panic!("expected unknown format, got {:?}", other),
        }
    }

    #[test]
    fn assembler_names() {
        let parse = |s: &str| s.parse::<Assembler>().unwrap();
        assert_eq!(parse("metaSPAdes"), Assembler::Spades);
        assert_eq!(parse("ABySS"), Assembler::Abyss);
        assert_eq!(parse("canu"), Assembler::Canu);
        assert_eq!(parse("megahit"), Assembler::Other("megahit".into()));
        assert_eq!(parse("spades").link_mirror(), LinkMirror::Reversed);
        assert_eq!(parse("canu").link_mirror(), LinkMirror::SameOrder);
    }

    #[test]
    fn config_builder() {
        let config = ParserConfig::new(500)
            .with_assembler(Assembler::Canu)
            .with_tig_info("asm.unitigs.layout.tigInfo");
        assert_eq!(config.min_edge_len, 500);
        assert_eq!(config.assembler, Assembler::Canu);
        assert!(config.tig_info.is_some());
        assert_eq!(ParserConfig::default().min_edge_len, 1);
    }

    #[test]
    fn dispatch_by_format() {
        let config = ParserConfig::default();
        let dot = "\"1+\" [l=10 C=2]\n";
        assert_eq!(GraphFormat::UnitigDot.parse(dot, &config).edges.len(), 1);
        assert_eq!(GraphFormat::Gfa.parse(dot, &config).edges.len(), 0);
        let gfa = "S\t1\tACGT\n";
        assert_eq!(GraphFormat::Gfa.parse(gfa, &config).edges.len(), 2);
        assert!(GraphFormat::RepeatDot.parse(gfa, &config).edges.is_empty());
    }
}
