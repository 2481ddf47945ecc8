use std::io::BufRead;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

use crate::error::{Error, Result};
use crate::interval::Interval;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    pub fn manhattan_distance(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// One sensor report: the sensor's position, the closest beacon it locked
/// onto, and the Manhattan distance between them. No undetected beacon can
/// sit within that distance of the sensor.
#[derive(PartialEq, Debug)]
pub struct Sensor {
    pos: Point,
    beacon: Point,
    distance: u64,
}

impl Sensor {
    pub fn new(pos: Point, beacon: Point) -> Self {
        let distance = pos.manhattan_distance(&beacon);
        Sensor { pos, beacon, distance }
    }

    pub fn from_coords(sensor_x: i64, sensor_y: i64, beacon_x: i64, beacon_y: i64) -> Self {
        Sensor::new(Point::new(sensor_x, sensor_y), Point::new(beacon_x, beacon_y))
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn beacon(&self) -> Point {
        self.beacon
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Horizontal cross-section of the sensor's exclusion diamond at `row`,
    /// or None if the row lies beyond the beacon distance. The cross-section
    /// narrows to a single point at the diamond's tips.
    pub fn covered_on_row(&self, row: i64) -> Option<Interval> {
        let vertical = self.pos.y.abs_diff(row);
        if vertical > self.distance {
            return None;
        }
        let half = (self.distance - vertical) as i64;
        Some(Interval::span(self.pos.x - half, self.pos.x + half))
    }
}

/// The parsed sensor report: a plain owned collection, passed by slice into
/// every query.
#[derive(Debug)]
pub struct Report {
    sensors: Vec<Sensor>,
}

impl Report {
    pub fn read(r: impl BufRead) -> Result<Report> {
        let line_re = Lazy::new(|| {
            Regex::new(r#"Sensor at x=([-0-9]+), y=([-0-9]+): closest beacon is at x=([-0-9]+), y=([-0-9]+)"#).unwrap()
        });
        let mut sensors: Vec<Sensor> = Vec::new();
        for line in r.lines() {
            let line = line?;
            let Some(caps) = line_re.captures(&line) else {
                return Err(Error::UnexpectedLine(line));
            };
            let coords: Vec<i64> = caps.iter().skip(1)
                .map(|m| {
                    m.unwrap().as_str().parse::<i64>()
                        .map_err(|_| Error::UnexpectedLine(line.clone()))
                })
                .collect::<Result<Vec<_>>>()?;
            sensors.push(Sensor::from_coords(coords[0], coords[1], coords[2], coords[3]));
        }
        log::debug!("parsed {} sensor reports", sensors.len());
        Ok(Report { sensors })
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }
}
