// Day 3: Rucksack Reorganization.
// Models each collection of items as a set: the misplaced item is the one
// common to both compartments, the badge the one common to a group of three.

use std::collections::HashSet;

use super::Solution;
use crate::error::Result;

pub struct Day03;

/// Priority of an item: a-z score 1-26, A-Z score 27-52. Anything else is
/// undefined and scores zero.
fn priority(item: u8) -> u64 {
    match item {
        b'a'..=b'z' => u64::from(item - b'a') + 1,
        b'A'..=b'Z' => u64::from(item - b'A') + 27,
        _ => 0,
    }
}

fn item_set(items: &str) -> HashSet<u8> {
    items.bytes().collect()
}

fn rucksacks(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.is_empty())
}

impl Solution for Day03 {
    fn part_one(&self, input: &str) -> Result<String> {
        let mut total = 0;
        for line in rucksacks(input) {
            let (first, second) = line.split_at(line.len() / 2);
            let first = item_set(first);
            let second = item_set(second);
            // There should be exactly one shared item per rucksack.
            if let Some(&item) = first.intersection(&second).next() {
                total += priority(item);
            }
        }
        Ok(total.to_string())
    }

    fn part_two(&self, input: &str) -> Result<String> {
        let lines: Vec<&str> = rucksacks(input).collect();

        let mut total = 0;
        for group in lines.chunks(3) {
            let mut members = group.iter();
            let Some(mut badges) = members.next().map(|line| item_set(line)) else {
                continue;
            };
            for line in members {
                let items = item_set(line);
                badges.retain(|item| items.contains(item));
            }
            if let Some(&badge) = badges.iter().next() {
                total += priority(badge);
            }
        }
        Ok(total.to_string())
    }
}
