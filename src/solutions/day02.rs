// Day 2: Rock Paper Scissors.
// A strategy guide where the second column is either the shape to play
// (part one) or the outcome to aim for (part two).

use super::Solution;
use crate::error::{AocError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Shape {
    /// The shape this one defeats.
    fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    fn score(self) -> u64 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// Outcome for this shape when played against `opponent`.
    pub fn vs(self, opponent: Shape) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// The shape to play against this one to force `target`.
    pub fn target_outcome(self, target: Outcome) -> Shape {
        match target {
            Outcome::Draw => self,
            Outcome::Lose => self.beats(),
            // The shape that beats the one we beat is the one that beats us.
            Outcome::Win => self.beats().beats(),
        }
    }
}

impl Outcome {
    fn score(self) -> u64 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

fn opponent_shape(column: char) -> Result<Shape> {
    match column {
        'A' => Ok(Shape::Rock),
        'B' => Ok(Shape::Paper),
        'C' => Ok(Shape::Scissors),
        _ => Err(AocError::Parse(format!("unknown opponent shape {column:?}"))),
    }
}

fn player_shape(column: char) -> Result<Shape> {
    match column {
        'X' => Ok(Shape::Rock),
        'Y' => Ok(Shape::Paper),
        'Z' => Ok(Shape::Scissors),
        _ => Err(AocError::Parse(format!("unknown player shape {column:?}"))),
    }
}

fn target(column: char) -> Result<Outcome> {
    match column {
        'X' => Ok(Outcome::Lose),
        'Y' => Ok(Outcome::Draw),
        'Z' => Ok(Outcome::Win),
        _ => Err(AocError::Parse(format!("unknown target outcome {column:?}"))),
    }
}

/// Split a round line into its two columns.
fn round_columns(line: &str) -> Result<(char, char)> {
    let mut chars = line.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(' '), Some(b), None) => Ok((a, b)),
        _ => Err(AocError::Parse(format!("malformed round {line:?}"))),
    }
}

fn rounds(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.is_empty())
}

pub struct Day02;

impl Solution for Day02 {
    fn part_one(&self, input: &str) -> Result<String> {
        let mut total = 0;
        for line in rounds(input) {
            let (first, second) = round_columns(line)?;
            let (opponent, player) = (opponent_shape(first)?, player_shape(second)?);
            total += player.score() + player.vs(opponent).score();
        }
        Ok(total.to_string())
    }

    fn part_two(&self, input: &str) -> Result<String> {
        let mut total = 0;
        for line in rounds(input) {
            let (first, second) = round_columns(line)?;
            let (opponent, outcome) = (opponent_shape(first)?, target(second)?);
            total += opponent.target_outcome(outcome).score() + outcome.score();
        }
        Ok(total.to_string())
    }
}
