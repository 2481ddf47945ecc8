//! Coverage geometry for sensor/beacon exclusion reports. Each sensor knows
//! the Manhattan distance to its closest beacon; everything at least that
//! close is beacon-free. The engine projects each sensor's exclusion diamond
//! onto a row as a closed interval, merges the projections into a canonical
//! disjoint set, counts excluded positions on a row, and searches a bounded
//! square for the one uncovered point.

mod coverage;
mod error;
mod field;
mod interval;
mod search;

pub use coverage::{excluded_count_on_row, first_uncovered, merged_row_coverage};
pub use error::{Error, Result};
pub use field::{Point, Report, Sensor};
pub use interval::{merge, Interval};
pub use search::{find_unique_gap, tuning_frequency};

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";
