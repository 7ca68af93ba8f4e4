use std::fmt;

use crate::category::{Categories, Category};

/// word -> Category, with the probability of that category producing the word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexicalRule {
  pub category: Category,
  pub probability: f64,
}

/// A -> B C, stored under A
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryRule {
  pub left: Category,
  pub right: Category,
  pub probability: f64,
}

impl LexicalRule {
  pub fn display<'a>(
    &'a self,
    categories: &'a Categories,
    word: &'a str,
  ) -> impl fmt::Display + 'a {
    DisplayLexical {
      rule: self,
      categories,
      word,
    }
  }
}

impl BinaryRule {
  pub fn display<'a>(
    &'a self,
    categories: &'a Categories,
    lhs: Category,
  ) -> impl fmt::Display + 'a {
    DisplayBinary {
      rule: self,
      categories,
      lhs,
    }
  }
}

struct DisplayLexical<'a> {
  rule: &'a LexicalRule,
  categories: &'a Categories,
  word: &'a str,
}

impl fmt::Display for DisplayLexical<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} -> {} [{}]",
      self.categories.name(self.rule.category),
      self.word,
      self.rule.probability
    )
  }
}

struct DisplayBinary<'a> {
  rule: &'a BinaryRule,
  categories: &'a Categories,
  lhs: Category,
}

impl fmt::Display for DisplayBinary<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} -> {} {} [{}]",
      self.categories.name(self.lhs),
      self.categories.name(self.rule.left),
      self.categories.name(self.rule.right),
      self.rule.probability
    )
  }
}
