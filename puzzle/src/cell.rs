use std::fmt::Display;

use serde::Serialize;
use util::pos::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
  Empty,
  Filled,
  Correct,
  Incorrect,
}

/// One grid position. A cell with no answer letter is black: it belongs to
/// no word and its status never changes.
///
/// `pos`, `correct_char`, `clue_number` and `word_ids` are fixed once the
/// puzzle is assembled; only `user_input` and `status` move afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
  pub pos: Pos,
  pub correct_char: Option<char>,
  pub user_input: Option<char>,
  pub status: CellStatus,
  pub clue_number: Option<u32>,
  pub word_ids: Vec<u32>,
}

impl Cell {
  pub fn new(pos: Pos, correct_char: Option<char>) -> Self {
    Self {
      pos,
      correct_char,
      user_input: None,
      status: CellStatus::Empty,
      clue_number: None,
      word_ids: Vec::new(),
    }
  }

  pub fn is_black(&self) -> bool {
    self.correct_char.is_none()
  }

  /// Stores an input letter (uppercased) and returns the letter it
  /// displaced, if any.
  pub fn set_user_input(&mut self, input: char) -> Option<char> {
    let previous = self.user_input.replace(input.to_ascii_uppercase());
    self.status = CellStatus::Filled;
    previous
  }

  /// Removes the input letter, returning it so the caller can put it back
  /// in the pool.
  pub fn clear_input(&mut self) -> Option<char> {
    self.status = CellStatus::Empty;
    self.user_input.take()
  }

  /// Compares the input against the answer and records the verdict in
  /// `status`. Re-running it without touching the input gives the same
  /// answer.
  pub fn validate(&mut self) -> bool {
    match self.user_input {
      None => {
        self.status = CellStatus::Empty;
        false
      }
      Some(input) => {
        let correct = self.correct_char == Some(input);
        self.status = if correct {
          CellStatus::Correct
        } else {
          CellStatus::Incorrect
        };
        correct
      }
    }
  }

  /// Drops any correct/incorrect verdict, re-deriving the status from the
  /// current input alone.
  pub fn reset_status(&mut self) {
    self.status = if self.user_input.is_some() {
      CellStatus::Filled
    } else {
      CellStatus::Empty
    };
  }
}

impl Display for Cell {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.correct_char.unwrap_or('#'))
  }
}
