use std::fs;
use std::path::PathBuf;

use asmgraph::{Assembler, AssemblyGraph, GraphFormat, ParserConfig};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

static GRAPHPATH: &str = "./test/graphs/";

fn load_text(name: &str) -> String {
    let mut path = PathBuf::from(GRAPHPATH);
    path.push(name);
    fs::read_to_string(&path).unwrap()
}

/// Tile a small GFA into a larger one by renumbering its segments.
fn tiled_gfa(text: &str, copies: usize) -> String {
    let mut out = String::new();
    for copy in 0..copies {
        let offset = copy * 100;
        for line in text.lines().filter(|l| !l.is_empty() && !l.starts_with('H')) {
            let fields: Vec<String> = line
                .split('\t')
                .enumerate()
                .map(|(i, f)| match (line.as_bytes()[0], i) {
                    (b'S', 1) | (b'L', 1) | (b'L', 3) => {
                        let n: usize = f.parse().unwrap();
                        (n + offset).to_string()
                    }
                    _ => f.to_string(),
                })
                .collect();
            out.push_str(&fields.join("\t"));
            out.push('\n');
        }
    }
    out
}

macro_rules! bench_graph {
    ($name:ident, $format:expr, $id:literal, $text:expr) => {
        fn $name(c: &mut Criterion) {
            let text: String = $text;
            let config = ParserConfig::new(1).with_assembler(Assembler::Spades);
            c.bench_with_input(BenchmarkId::new($id, text.len()), &text, |b, t| {
                b.iter(|| AssemblyGraph::from_text($format, t, &config));
            });
        }
    };
}

bench_graph!(abyss_dot, GraphFormat::UnitigDot, "unitig_dot", load_text("abyss.dot"));
bench_graph!(flye_dot, GraphFormat::RepeatDot, "repeat_dot", load_text("flye.gv"));
bench_graph!(gfa_small, GraphFormat::Gfa, "gfa", load_text("repeat.gfa"));
bench_graph!(
    gfa_tiled,
    GraphFormat::Gfa,
    "gfa",
    tiled_gfa(&load_text("repeat.gfa"), 2000)
);

criterion_group!(
    name = pipeline_benches;
    config = Criterion::default().sample_size(25);
    targets = abyss_dot, flye_dot, gfa_small, gfa_tiled
);

criterion_main!(pipeline_benches);
