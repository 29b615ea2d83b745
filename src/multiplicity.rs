//! Copy-number estimation from coverage relative to the graph median.

use log::debug;

use crate::graph::EdgeSet;

/// Coverage ratios up to this value still count as single copy.
pub const REPEAT_RATIO: f64 = 1.75;

/// Median of the edge coverages; the mean of the two central values
/// when there is an even number of edges. `None` for no edges.
pub fn median_coverage(edges: &EdgeSet) -> Option<f64> {
    let mut covs: Vec<f64> = edges.iter().map(|e| e.coverage).collect();
    if covs.is_empty() {
        return None;
    }
    covs.sort_by(|a, b| a.total_cmp(b));
    let mid = covs.len() / 2;
    if covs.len() % 2 == 0 {
        Some((covs[mid - 1] + covs[mid]) / 2.0)
    } else {
        Some(covs[mid])
    }
}

/// Multiplicity of an edge with the given coverage. Ratios are
/// rounded half away from zero.
#[inline]
pub fn multiplicity(coverage: f64, median: f64) -> usize {
    let ratio = coverage / median;
    if ratio <= REPEAT_RATIO {
        1
    } else {
        ratio.round() as usize
    }
}

/// Set every edge's multiplicity, raising the repeat flag where it
/// exceeds one. Flags set earlier are never lowered. Returns the
/// median used.
pub fn estimate(edges: &mut EdgeSet) -> Option<f64> {
    let median = median_coverage(edges)?;
    debug!("Median edge coverage is {}", median);
    for edge in edges.iter_mut() {
        edge.multiplicity = multiplicity(edge.coverage, median);
        if edge.multiplicity > 1 {
            edge.repetitive = true;
        }
    }
    Some(median)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeId};

    fn with_coverages(covs: &[f64]) -> EdgeSet {
        covs.iter()
            .enumerate()
            .map(|(i, &c)| {
                let id = EdgeId::encode(i as i64 + 1);
                Edge::new(id, &id.label(), 100, c)
            })
            .collect()
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median_coverage(&with_coverages(&[3.0, 1.0, 2.0])), Some(2.0));
        assert_eq!(
            median_coverage(&with_coverages(&[4.0, 1.0, 2.0, 3.0])),
            Some(2.5)
        );
        assert_eq!(median_coverage(&EdgeSet::new()), None);
    }

    #[test]
    fn repeat_boundary() {
        let mut edges = with_coverages(&[10.0, 10.0, 10.0, 17.5, 17.6]);
        assert_eq!(estimate(&mut edges), Some(10.0));

        let mults: Vec<usize> = edges.iter().map(|e| e.multiplicity).collect();
        assert_eq!(mults, vec![1, 1, 1, 1, 2]);
        let repeats: Vec<bool> = edges.iter().map(|e| e.repetitive).collect();
        assert_eq!(repeats, vec![false, false, false, false, true]);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(multiplicity(25.0, 10.0), 3);
        assert_eq!(multiplicity(24.9, 10.0), 2);
        assert_eq!(multiplicity(40.0, 10.0), 4);
    }

    #[test]
    fn earlier_repeat_flags_survive() {
        let mut edges = with_coverages(&[10.0, 10.0, 10.0]);
        edges.get_mut(&EdgeId::encode(2)).unwrap().repetitive = true;
        estimate(&mut edges);
        assert!(edges.get(&EdgeId::encode(2)).unwrap().repetitive);
        assert!(!edges.get(&EdgeId::encode(1)).unwrap().repetitive);
    }
}
