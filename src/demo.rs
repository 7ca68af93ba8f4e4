//! A toy grammar of fish, Amy, and her dinner plans

use crate::error::GrammarError;
use crate::grammar::{Grammar, GrammarBuilder};

pub const SENTENCES: &[&str] = &[
  "Fish swim in streams",
  "Fish in streams swim",
  "Amy ate fish for dinner",
  "Amy ate fish for dinner on Tuesday",
  "Amy ate for",
];

const WORDS: &[(&str, &str, f64)] = &[
  ("amy", "Noun", 0.1),
  ("dinner", "Noun", 0.2),
  ("fish", "Noun", 0.2),
  ("streams", "Noun", 0.1),
  ("streams", "Verb", 0.1),
  ("swim", "Noun", 0.2),
  ("swim", "Verb", 0.2),
  ("tuesday", "Noun", 0.2),
  ("for", "Prep", 0.5),
  ("in", "Prep", 0.3),
  ("on", "Prep", 0.2),
  ("ate", "Verb", 0.7),
];

const RULES: &[(&str, &str, &str, f64)] = &[
  ("S", "Noun", "Verb", 0.2),
  ("S", "Noun", "VerbAndObject", 0.3),
  ("S", "Noun", "VPWithPPList", 0.1),
  ("S", "NP", "Verb", 0.2),
  ("S", "NP", "VerbAndObject", 0.1),
  ("S", "NP", "VPWithPPList", 0.1),
  ("NP", "Noun", "PP", 0.8),
  ("NP", "Noun", "PPList", 0.2),
  ("PP", "Prep", "Noun", 0.6),
  ("PP", "Prep", "NP", 0.4),
  ("PPList", "PP", "PP", 0.6),
  ("PPList", "PP", "PPList", 0.4),
  ("VerbAndObject", "Verb", "Noun", 0.5),
  ("VerbAndObject", "Verb", "NP", 0.5),
  ("VPWithPPList", "Verb", "PP", 0.3),
  ("VPWithPPList", "Verb", "PPList", 0.1),
  ("VPWithPPList", "VerbAndObject", "PP", 0.4),
  ("VPWithPPList", "VerbAndObject", "PPList", 0.2),
];

pub const PARTS_OF_SPEECH: &[&str] = &["Noun", "Verb", "Prep"];

/// Builds the demo grammar, rooted at `S`
pub fn grammar() -> Result<Grammar, GrammarError> {
  builder().build("S")
}

/// The demo tables, not yet built, so more rules can be added
pub fn builder() -> GrammarBuilder {
  let mut builder = Grammar::builder();
  for pos in PARTS_OF_SPEECH {
    builder = builder.pos(pos);
  }
  for (lhs, left, right, p) in RULES {
    builder = builder.rule(lhs, left, right, *p);
  }
  for (word, category, p) in WORDS {
    builder = builder.word(word, category, *p);
  }
  builder
}
