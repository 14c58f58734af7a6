// Puzzle solutions.
// Each day consumes the fetched input as an opaque string and produces one
// answer per part.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;

use crate::error::{AocError, Result};

/// A solved Advent of Code challenge.
pub trait Solution {
    /// Part one is generally a specific application of the day's problem
    /// statement.
    fn part_one(&self, input: &str) -> Result<String>;

    /// Part two is typically a more generalised form of the problem posed in
    /// part one, using the same input.
    fn part_two(&self, input: &str) -> Result<String>;
}

/// Days with an implemented solution, in order.
pub const AVAILABLE_DAYS: [u8; 4] = [1, 2, 3, 4];

/// Look up the solution for a day.
pub fn for_day(day: u8) -> Result<Box<dyn Solution>> {
    match day {
        1 => Ok(Box::new(day01::Day01)),
        2 => Ok(Box::new(day02::Day02)),
        3 => Ok(Box::new(day03::Day03)),
        4 => Ok(Box::new(day04::Day04)),
        _ => Err(AocError::UnknownDay {
            day,
            available: AVAILABLE_DAYS.to_vec(),
        }),
    }
}
