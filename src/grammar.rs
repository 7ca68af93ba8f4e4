use std::collections::HashMap;
use std::fmt;

use crate::category::{Categories, Category};
use crate::error::GrammarError;
use crate::rules::{BinaryRule, LexicalRule};

/// A validated probabilistic grammar: a lexicon of word -> category rules, and binary
/// A -> B C rules over a closed set of categories.
#[derive(Debug, Clone)]
pub struct Grammar {
  start: Category,
  categories: Categories,
  lexicon: HashMap<String, Vec<LexicalRule>>,
  /// indexed by category, empty for parts of speech
  syntax: Vec<Vec<BinaryRule>>,
}

impl Grammar {
  pub fn builder() -> GrammarBuilder {
    GrammarBuilder::new()
  }

  pub fn start(&self) -> Category {
    self.start
  }

  pub fn categories(&self) -> &Categories {
    &self.categories
  }

  pub fn category(&self, name: &str) -> Option<Category> {
    self.categories.get(name)
  }

  /// # Panics
  ///
  /// If `category` was issued by another grammar with more categories.
  pub fn name(&self, category: Category) -> &str {
    self.categories.name(category)
  }

  /// Categories the word can be, in the order they were declared
  pub fn lexical(&self, word: &str) -> Option<&[LexicalRule]> {
    self.lexicon.get(word).map(Vec::as_slice)
  }

  /// # Panics
  ///
  /// If `category` was issued by another grammar with more categories.
  pub fn productions(&self, category: Category) -> &[BinaryRule] {
    &self.syntax[category.index()]
  }

  /// Categories that have at least one binary rule, with their rules
  pub fn nonterminals(&self) -> impl Iterator<Item = (Category, &[BinaryRule])> + '_ {
    self
      .categories
      .iter()
      .map(|c| (c, self.productions(c)))
      .filter(|(_, rules)| !rules.is_empty())
  }

  pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
    self.lexicon.keys().map(String::as_str)
  }
}

impl fmt::Display for Grammar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "//** start: {}", self.name(self.start))?;
    writeln!(f, "//** categories: {}", self.categories)?;

    for (lhs, rules) in self.nonterminals() {
      for rule in rules {
        writeln!(f, "{}", rule.display(&self.categories, lhs))?;
      }
    }

    let mut words = self.lexicon.keys().collect::<Vec<_>>();
    words.sort();
    for word in words {
      for rule in self.lexicon[word].iter() {
        writeln!(f, "{}", rule.display(&self.categories, word))?;
      }
    }

    Ok(())
  }
}

/// Collects grammar tables by name. Nothing is checked until `build`.
///
/// ```
/// use pcyk::Grammar;
///
/// let g = Grammar::builder()
///   .pos("Noun")
///   .pos("Verb")
///   .rule("S", "Noun", "Verb", 1.0)
///   .word("fish", "Noun", 0.5)
///   .word("swim", "Verb", 0.5)
///   .build("S")
///   .unwrap();
///
/// assert_eq!(g.parse(&["fish", "swim"]).unwrap().probability(), 0.25);
/// ```
#[derive(Debug, Default, Clone)]
pub struct GrammarBuilder {
  pos: Vec<String>,
  words: Vec<(String, String, f64)>,
  rules: Vec<(String, String, String, f64)>,
}

impl GrammarBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a part of speech: a category with no binary rules, only filled by words
  pub fn pos(mut self, category: &str) -> Self {
    self.pos.push(category.to_string());
    self
  }

  /// Adds `category -> word` with the given probability
  pub fn word(mut self, word: &str, category: &str, probability: f64) -> Self {
    self
      .words
      .push((word.to_string(), category.to_string(), probability));
    self
  }

  /// Adds `lhs -> left right` with the given probability
  pub fn rule(mut self, lhs: &str, left: &str, right: &str, probability: f64) -> Self {
    self.rules.push((
      lhs.to_string(),
      left.to_string(),
      right.to_string(),
      probability,
    ));
    self
  }

  pub fn build(self, start: &str) -> Result<Grammar, GrammarError> {
    if self.words.is_empty() {
      return Err(GrammarError::EmptyLexicon);
    }

    // parts of speech first, then every left-hand side, in declaration order
    let mut categories = Categories::new();
    for name in self.pos.iter() {
      categories.intern(name)?;
    }
    for (lhs, _, _, _) in self.rules.iter() {
      categories.intern(lhs)?;
    }

    let mut syntax = vec![Vec::new(); categories.len()];
    for (lhs, left, right, probability) in self.rules.iter() {
      check_probability(*probability, || format!("{} -> {} {}", lhs, left, right))?;
      let lhs = categories.resolve(lhs)?;
      syntax[lhs.index()].push(BinaryRule {
        left: categories.resolve(left)?,
        right: categories.resolve(right)?,
        probability: *probability,
      });
    }

    let mut lexicon: HashMap<String, Vec<LexicalRule>> = HashMap::new();
    for (word, category, probability) in self.words.into_iter() {
      if word.is_empty()
        || word.chars().any(|c| c.is_whitespace() || c.is_uppercase())
      {
        return Err(GrammarError::InvalidWord(word));
      }
      check_probability(probability, || format!("{} -> {}", category, word))?;

      let id = categories.resolve(&category)?;
      if lexicon
        .get(&word)
        .is_some_and(|rules| rules.iter().any(|r| r.category == id))
      {
        return Err(GrammarError::DuplicateLexicalEntry { word, category });
      }
      lexicon.entry(word).or_default().push(LexicalRule {
        category: id,
        probability,
      });
    }

    let start = categories.resolve(start)?;

    tracing::debug!(
      categories = categories.len(),
      rules = self.rules.len(),
      words = lexicon.len(),
      "built grammar"
    );

    Ok(Grammar {
      start,
      categories,
      lexicon,
      syntax,
    })
  }
}

fn check_probability(probability: f64, rule: impl FnOnce() -> String) -> Result<(), GrammarError> {
  if (0.0..=1.0).contains(&probability) {
    Ok(())
  } else {
    Err(GrammarError::InvalidProbability {
      rule: rule(),
      probability,
    })
  }
}
