use std::collections::HashSet;

use crate::field::Sensor;
use crate::interval::{self, Interval};

/// Project every sensor's exclusion diamond onto `row` and merge the results
/// into the canonical sorted disjoint set. Recomputed per row; each sensor
/// contributes at most one interval.
pub fn merged_row_coverage(sensors: &[Sensor], row: i64) -> Vec<Interval> {
    let projected = sensors.iter().filter_map(|s| s.covered_on_row(row)).collect();
    interval::merge(projected)
}

/// How many positions on `row` cannot hold an undetected beacon, net of the
/// sensors and beacons already known to sit inside the coverage there.
/// `bound` clips the count to an inclusive x-range.
pub fn excluded_count_on_row(sensors: &[Sensor], row: i64, bound: Option<(i64, i64)>) -> u64 {
    let mut merged = merged_row_coverage(sensors, row);
    if let Some((lo, hi)) = bound {
        merged = merged.iter().filter_map(|iv| iv.clip(lo, hi)).collect();
    }
    let covered: u64 = merged.iter().map(Interval::len).sum();
    // Known points occupy excluded cells but aren't unknown-beacon positions.
    // Coordinate equality is identity, so the HashSet collapses duplicate
    // reports of the same beacon.
    let known: HashSet<i64> = sensors.iter()
        .flat_map(|s| [s.pos(), s.beacon()])
        .filter(|p| p.y == row)
        .map(|p| p.x)
        .filter(|&x| merged.iter().any(|iv| iv.contains(x)))
        .collect();
    covered - known.len() as u64
}

/// First integer in [lo, hi] not covered by a merged interval set, or None
/// when the whole range is covered. Relies on the set being sorted and
/// disjoint.
pub fn first_uncovered(merged: &[Interval], lo: i64, hi: i64) -> Option<i64> {
    let mut cur = lo;
    for iv in merged {
        if iv.end() < cur {
            continue;
        }
        if iv.start() > cur {
            break;
        }
        cur = iv.end() + 1;
        if cur > hi {
            return None;
        }
    }
    (cur <= hi).then_some(cur)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Report;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_merged_row_coverage_row_10() {
        let report = Report::read(crate::EXAMPLE.as_bytes()).unwrap();
        assert_eq!(merged_row_coverage(report.sensors(), 10), vec![iv(-2, 24)]);
    }

    #[test]
    fn test_excluded_count_on_row_10() {
        let report = Report::read(crate::EXAMPLE.as_bytes()).unwrap();
        assert_eq!(excluded_count_on_row(report.sensors(), 10, None), 26);
    }

    #[test]
    fn test_excluded_count_on_row_clipped() {
        let report = Report::read(crate::EXAMPLE.as_bytes()).unwrap();
        // [0, 20] holds 21 covered cells, one occupied by the beacon at x=2.
        assert_eq!(excluded_count_on_row(report.sensors(), 10, Some((0, 20))), 20);
    }

    #[test]
    fn test_excluded_count_empty_row() {
        assert_eq!(excluded_count_on_row(&[], 10, None), 0);
    }

    #[test]
    fn test_first_uncovered_all_covered() {
        let merged = vec![iv(-3, -3), iv(0, 10)];
        assert_eq!(first_uncovered(&merged, 0, 10), None);
    }

    #[test]
    fn test_first_uncovered_at_start() {
        let merged = vec![iv(-3, -3), iv(1, 10)];
        assert_eq!(first_uncovered(&merged, 0, 10), Some(0));
    }

    #[test]
    fn test_first_uncovered_at_middle() {
        let merged = vec![iv(-3, -3), iv(0, 4), iv(6, 10)];
        assert_eq!(first_uncovered(&merged, 0, 10), Some(5));
    }

    #[test]
    fn test_first_uncovered_at_end() {
        let merged = vec![iv(-3, -3), iv(0, 9)];
        assert_eq!(first_uncovered(&merged, 0, 10), Some(10));
    }

    #[test]
    fn test_first_uncovered_empty_set() {
        assert_eq!(first_uncovered(&[], 0, 10), Some(0));
    }
}
