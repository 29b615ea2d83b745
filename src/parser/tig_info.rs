//! Canu's unitig summary table (`*.unitigs.layout.tigInfo`): a
//! whitespace-delimited table whose header names, among others, a
//! `coverage` column and a `sugRept` repeat suggestion column.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::error::{GraphError, GraphResult};
use crate::graph::{ident::contig_number, EdgeId, EdgeSet};
use crate::mmap::MappedInput;

pub const TIG_INFO_SUFFIX: &str = ".unitigs.layout.tigInfo";

const REPEAT_COLUMN: &str = "sugRept";
const COVERAGE_COLUMN: &str = "coverage";

/// Find the tigInfo table in an assembly output directory.
pub fn find_in_dir<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let mut found: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.ends_with(TIG_INFO_SUFFIX))
        })
        .collect();
    found.sort();
    found.into_iter().next()
}

/// Overwrite coverage, and raise the repeat flag, on both strands of
/// every contig listed in the table. Rows naming contigs that aren't
/// in `edges` are ignored. Returns the number of rows applied.
///
/// An empty table changes nothing. A header without the needed
/// columns is an error and also changes nothing.
pub fn apply(text: &str, edges: &mut EdgeSet) -> GraphResult<usize> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header: Vec<&str> = match lines.next() {
        Some(h) => h.split_whitespace().collect(),
        None => return Ok(0),
    };
    let column = |name: &'static str| {
        header
            .iter()
            .position(|c| *c == name)
            .ok_or(GraphError::MissingColumn(name))
    };
    let repeat_col = column(REPEAT_COLUMN)?;
    let cov_col = column(COVERAGE_COLUMN)?;

    let mut applied = 0;
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let row = fields.first().and_then(|f| contig_number(f)).and_then(|n| {
            let coverage = fields.get(cov_col)?.parse::<f64>().ok()?;
            let repeat = *fields.get(repeat_col)? == "yes";
            Some((EdgeId::encode(n), coverage, repeat))
        });
        let (id, coverage, repeat) = match row {
            Some(row) => row,
            None => {
                debug!("Skipping tigInfo row: {}", line);
                continue;
            }
        };

        let mut found = false;
        for strand in [id, id.matching()].iter() {
            if let Some(edge) = edges.get_mut(strand) {
                edge.coverage = coverage.max(1.0);
                edge.repetitive |= repeat;
                found = true;
            }
        }
        if found {
            applied += 1;
        } else {
            debug!("tigInfo row for {} has no edge, ignoring", id);
        }
    }

    info!("Applied {} tigInfo rows", applied);
    Ok(applied)
}

/// `apply` on a table read from disk.
pub fn apply_file<P: AsRef<Path>>(
    path: P,
    edges: &mut EdgeSet,
) -> GraphResult<usize> {
    let input = MappedInput::open(path)?;
    apply(&input.text(), edges)
}
