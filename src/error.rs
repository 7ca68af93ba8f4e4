use thiserror::Error;

use crate::chart::Chart;

/// Boxed static error type
pub type Err = Box<dyn std::error::Error + 'static>;

/// Why a sentence has no parse. Both are expected outcomes, not bugs.
#[derive(Error, Debug)]
pub enum ParseError {
  /// A token isn't in the lexicon. Found before any combination happens,
  /// so there's no chart to look at.
  #[error("this sentence cannot be parsed: unknown word {word:?} at position {position}")]
  LexicalGap { word: String, position: usize },
  /// Every word is known, but the grammar can't combine them into the start symbol.
  /// The fully built chart is kept for inspection.
  #[error("this sentence cannot be parsed: no derivation of the start symbol")]
  NoDerivation(Box<Chart>),
}

impl ParseError {
  pub fn is_lexical_gap(&self) -> bool {
    matches!(self, Self::LexicalGap { .. })
  }

  pub fn is_no_derivation(&self) -> bool {
    matches!(self, Self::NoDerivation(_))
  }

  /// The chart, if construction got far enough to build one
  pub fn chart(&self) -> Option<&Chart> {
    match self {
      Self::NoDerivation(chart) => Some(chart),
      Self::LexicalGap { .. } => None,
    }
  }
}

/// Defects in grammar tables, caught by `GrammarBuilder::build`
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GrammarError {
  #[error("invalid category name {0:?}: must be capitalized and made of letters, digits, - and _")]
  InvalidCategoryName(String),
  #[error("invalid word {0:?}: must be non-empty, lower-case, and contain no whitespace")]
  InvalidWord(String),
  #[error("unknown category {0:?}: not a part of speech and has no productions")]
  UnknownCategory(String),
  #[error("invalid probability {probability} in {rule}: must be within [0, 1]")]
  InvalidProbability { rule: String, probability: f64 },
  #[error("word {word:?} is listed more than once as {category}")]
  DuplicateLexicalEntry { word: String, category: String },
  #[error("empty lexicon")]
  EmptyLexicon,
}
