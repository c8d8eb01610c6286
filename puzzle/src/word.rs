use std::fmt::Display;

use serde::Serialize;
use util::pos::{Diff, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  /// The step between consecutive letters of a word in this direction.
  pub fn delta(&self) -> Diff {
    match self {
      Direction::Across => Diff { row: 0, col: 1 },
      Direction::Down => Diff { row: 1, col: 0 },
    }
  }

  pub fn perpendicular(&self) -> Self {
    match self {
      Direction::Across => Direction::Down,
      Direction::Down => Direction::Across,
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Direction::Across => write!(f, "across"),
      Direction::Down => write!(f, "down"),
    }
  }
}

/// One placed word. `cells` holds the positions of the cells the word runs
/// through, recorded when the puzzle is assembled; the matching cells carry
/// this word's id in their `word_ids`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Word {
  pub id: u32,
  pub text: String,
  pub definition: String,
  pub start: Pos,
  pub direction: Direction,
  pub clue_number: Option<u32>,
  pub cells: Vec<Pos>,
}

impl Word {
  pub fn new(id: u32, text: &str, definition: &str, start: Pos, direction: Direction) -> Self {
    Self {
      id,
      text: text.to_uppercase(),
      definition: definition.to_owned(),
      start,
      direction,
      clue_number: None,
      cells: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.text.chars().count()
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  pub fn letter_positions(&self) -> impl Iterator<Item = (char, Pos)> + '_ {
    let delta = self.direction.delta();
    self
      .text
      .chars()
      .enumerate()
      .map(move |(idx, c)| (c, self.start + delta * idx as i32))
  }

  pub fn cell_positions(&self) -> impl Iterator<Item = Pos> + '_ {
    self.letter_positions().map(|(_, pos)| pos)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use super::{Direction, Word};

  #[gtest]
  fn test_text_is_uppercased() {
    let word = Word::new(0, "cat", "Feline", Pos::zero(), Direction::Across);
    expect_that!(word.text.as_str(), eq("CAT"));
    expect_that!(word.len(), eq(3));
  }

  #[gtest]
  fn test_across_positions() {
    let word = Word::new(
      0,
      "CAT",
      "Feline",
      Pos { row: 2, col: 1 },
      Direction::Across,
    );
    expect_that!(
      word.cell_positions().collect::<Vec<_>>(),
      container_eq([
        Pos { row: 2, col: 1 },
        Pos { row: 2, col: 2 },
        Pos { row: 2, col: 3 },
      ])
    );
  }

  #[gtest]
  fn test_down_positions() {
    let word = Word::new(0, "CAT", "Feline", Pos { row: 2, col: 1 }, Direction::Down);
    expect_that!(
      word.cell_positions().collect::<Vec<_>>(),
      container_eq([
        Pos { row: 2, col: 1 },
        Pos { row: 3, col: 1 },
        Pos { row: 4, col: 1 },
      ])
    );
  }

  #[gtest]
  fn test_letter_positions_pair_letters_in_order() {
    let word = Word::new(0, "CAT", "Feline", Pos::zero(), Direction::Across);
    expect_that!(
      word.letter_positions().map(|(c, _)| c).collect::<Vec<_>>(),
      container_eq(['C', 'A', 'T'])
    );
  }
}
