// Day 4: Camp Cleanup.
// Each line holds a pair of inclusive section ranges; count the pairs where
// one range fully contains the other, then the pairs that merely overlap.

use tracing::warn;

use super::Solution;
use crate::error::{AocError, Result};

/// Inclusive range of section ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections {
    min: u64,
    max: u64,
}

impl Sections {
    fn contains(self, other: Sections) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    fn intersects(self, other: Sections) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

fn parse_range(range: &str) -> Result<Sections> {
    let (min, max) = range.split_once('-').ok_or_else(|| {
        AocError::Parse(format!(
            "a range should contain an upper and lower bound, got {range:?}"
        ))
    })?;

    Ok(Sections {
        min: min
            .parse()
            .map_err(|err| AocError::Parse(format!("failed to parse lower bound: {err}")))?,
        max: max
            .parse()
            .map_err(|err| AocError::Parse(format!("failed to parse upper bound: {err}")))?,
    })
}

fn parse_pair(line: &str) -> Result<(Sections, Sections)> {
    let (first, second) = line.split_once(',').ok_or_else(|| {
        AocError::Parse(format!("a row should contain two ranges, got {line:?}"))
    })?;
    Ok((parse_range(first)?, parse_range(second)?))
}

/// Count the lines whose pair of ranges satisfies `keep`. A malformed line
/// warns and is skipped rather than aborting the whole input.
fn count_pairs(input: &str, keep: impl Fn(Sections, Sections) -> bool) -> u64 {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .filter(|line| match parse_pair(line) {
            Ok((first, second)) => keep(first, second),
            Err(err) => {
                warn!(line, error = %err, "failed to parse row");
                false
            }
        })
        .count() as u64
}

pub struct Day04;

impl Solution for Day04 {
    fn part_one(&self, input: &str) -> Result<String> {
        Ok(count_pairs(input, |a, b| a.contains(b) || b.contains(a)).to_string())
    }

    fn part_two(&self, input: &str) -> Result<String> {
        Ok(count_pairs(input, Sections::intersects).to_string())
    }
}
