// Day 1: Calorie Counting.
// Basic string parsing, solved with a chain of iterator adapters.

use tracing::warn;

use super::Solution;
use crate::error::Result;

pub struct Day01;

/// Parse one line of a group into a calorie count. An unparseable line warns
/// and counts as zero rather than aborting the whole input.
fn parse_line(line: &str) -> u64 {
    if line.is_empty() {
        return 0;
    }

    line.parse().unwrap_or_else(|_| {
        warn!(entry = line, "failed to parse line");
        0
    })
}

/// Total calories carried by each elf. Elves are separated by a blank line,
/// with one calorie count per line.
fn group_sums(input: &str) -> Vec<u64> {
    input
        .split("\n\n")
        .map(|group| group.lines().map(parse_line).sum())
        .collect()
}

/// Sum of the `n` largest group totals.
fn sum_top_n(mut sums: Vec<u64>, n: usize) -> u64 {
    sums.sort_unstable_by(|a, b| b.cmp(a));
    sums.iter().take(n).sum()
}

impl Solution for Day01 {
    fn part_one(&self, input: &str) -> Result<String> {
        Ok(sum_top_n(group_sums(input), 1).to_string())
    }

    fn part_two(&self, input: &str) -> Result<String> {
        Ok(sum_top_n(group_sums(input), 3).to_string())
    }
}
