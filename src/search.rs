use log::debug;

use crate::coverage::{first_uncovered, merged_row_coverage};
use crate::field::{Point, Sensor};

/// Scan the closed square [lo, hi] x [lo, hi] for a position no sensor
/// covers, row by row, stopping at the first hit. None means every position
/// in the square is covered. Well-formed reports leave exactly one gap.
pub fn find_unique_gap(sensors: &[Sensor], lo: i64, hi: i64) -> Option<Point> {
    for row in lo..=hi {
        let merged = merged_row_coverage(sensors, row);
        if let Some(x) = first_uncovered(&merged, lo, hi) {
            debug!("uncovered position at ({x}, {row})");
            return Some(Point::new(x, row));
        }
    }
    None
}

pub fn tuning_frequency(x: i64, y: i64) -> i64 {
    x * 4_000_000 + y
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Report;

    #[test]
    fn test_find_unique_gap() {
        let report = Report::read(crate::EXAMPLE.as_bytes()).unwrap();
        assert_eq!(find_unique_gap(report.sensors(), 0, 20), Some(Point::new(14, 11)));
    }

    #[test]
    fn test_tuning_frequency() {
        assert_eq!(tuning_frequency(14, 11), 56000011);
    }

    #[test]
    fn test_fully_covered_square_has_no_gap() {
        // One sensor at (5,5) with distance 5 blankets [4,6] x [4,6].
        let sensors = [Sensor::from_coords(5, 5, 5, 10)];
        assert_eq!(find_unique_gap(&sensors, 4, 6), None);
    }

    #[test]
    fn test_gap_on_left_edge() {
        // Row 0 is covered across [0,5] but row 1 only across [1,5], leaving
        // the square's left edge open at (0, 1).
        let sensors = [Sensor::from_coords(3, 0, 0, 0)];
        assert_eq!(find_unique_gap(&sensors, 0, 5), Some(Point::new(0, 1)));
    }
}
