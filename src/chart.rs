use std::fmt;

use crate::category::Category;
use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::rules::BinaryRule;
use crate::syntree::{Constituent, SynTree, Word};

/// Address of a chart cell. Spans are inclusive: `start..=end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CellRef {
  pub category: Category,
  pub start: usize,
  pub end: usize,
}

impl CellRef {
  pub fn new(category: Category, start: usize, end: usize) -> Self {
    Self {
      category,
      start,
      end,
    }
  }
}

/// The best derivation found for a category over a span
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
  pub category: Category,
  /// inclusive token indices
  pub span: (usize, usize),
  /// Set for nodes seeded straight from the lexicon
  pub word: Option<String>,
  /// Backpointers to the (left, right) sub-derivations. Several nodes may point at the same cell.
  pub children: Option<(CellRef, CellRef)>,
  pub probability: f64,
}

impl Node {
  pub fn is_terminal(&self) -> bool {
    self.children.is_none()
  }
}

/// CYK chart: for every category of the grammar, an N×N matrix of optional nodes.
/// Only cells with start <= end are ever filled.
///
/// An empty cell means "no derivation". A derivation that multiplies out to exactly 0.0
/// can't be told apart from that, so it is never recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
  tokens: Vec<String>,
  names: Vec<String>,
  start: Category,
  cells: Vec<Option<Node>>,
}

impl Chart {
  fn new(grammar: &Grammar, tokens: &[&str]) -> Self {
    let n = tokens.len();
    let categories = grammar.categories();
    Self {
      tokens: tokens.iter().map(|t| t.to_string()).collect(),
      names: categories
        .iter()
        .map(|c| categories.name(c).to_string())
        .collect(),
      start: grammar.start(),
      cells: vec![None; categories.len() * n * n],
    }
  }

  /// Number of tokens
  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn tokens(&self) -> &[String] {
    &self.tokens
  }

  /// # Panics
  ///
  /// If `category` came from a different grammar than the one the chart was built with.
  pub fn name(&self, category: Category) -> &str {
    &self.names[category.index()]
  }

  fn index(&self, category: Category, start: usize, end: usize) -> usize {
    let n = self.len();
    (category.index() * n + start) * n + end
  }

  pub fn get(&self, category: Category, start: usize, end: usize) -> Option<&Node> {
    if start > end || end >= self.len() || category.index() >= self.names.len() {
      return None;
    }
    self.cells[self.index(category, start, end)].as_ref()
  }

  pub fn get_ref(&self, cell: CellRef) -> Option<&Node> {
    self.get(cell.category, cell.start, cell.end)
  }

  /// Best probability of `category` over `start..=end`, 0.0 if there is no derivation
  pub fn probability(&self, category: Category, start: usize, end: usize) -> f64 {
    self
      .get(category, start, end)
      .map_or(0.0, |node| node.probability)
  }

  fn set(&mut self, node: Node) {
    let idx = self.index(node.category, node.span.0, node.span.1);
    self.cells[idx] = Some(node);
  }

  /// The start symbol's cell spanning the whole input
  pub fn root_ref(&self) -> Option<CellRef> {
    if self.is_empty() {
      None
    } else {
      Some(CellRef::new(self.start, 0, self.len() - 1))
    }
  }

  pub fn root(&self) -> Option<&Node> {
    self.root_ref().and_then(|cell| self.get_ref(cell))
  }

  /// Filled cells, ordered by span then category
  pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
    let n = self.len();
    (0..n).flat_map(move |length| {
      (0..n - length).flat_map(move |start| {
        (0..self.names.len() as u32)
          .filter_map(move |c| self.get(Category(c), start, start + length))
      })
    })
  }

  /// Walks the backpointers from `cell` down to the words. None if the cell is empty.
  pub fn tree(&self, cell: CellRef) -> Option<SynTree<String, String>> {
    let node = self.get_ref(cell)?;
    let constituent = Constituent {
      value: self.name(node.category).to_string(),
      span: (node.span.0, node.span.1 + 1),
    };

    let children = match (&node.children, &node.word) {
      (Some((left, right)), _) => vec![self.tree(*left)?, self.tree(*right)?],
      (None, Some(word)) => vec![SynTree::Leaf(Word {
        value: word.clone(),
        span: constituent.span,
      })],
      (None, None) => Vec::new(),
    };

    Some(SynTree::Branch(constituent, children))
  }
}

impl fmt::Display for Chart {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut last_span = None;
    for node in self.nodes() {
      if last_span != Some(node.span) {
        writeln!(f, "Span {}..={}:", node.span.0, node.span.1)?;
        last_span = Some(node.span);
      }
      write!(f, "  {}", self.name(node.category))?;
      match (&node.children, &node.word) {
        (Some((left, right)), _) => write!(
          f,
          " -> {}[{}..={}] {}[{}..={}]",
          self.name(left.category),
          left.start,
          left.end,
          self.name(right.category),
          right.start,
          right.end
        )?,
        (None, Some(word)) => write!(f, " -> {}", word)?,
        (None, None) => {}
      }
      writeln!(f, " ({})", node.probability)?;
    }
    Ok(())
  }
}

/// Builds the CYK chart for `input`, which should already be lower-cased.
///
/// Fails fast with `ParseError::LexicalGap` if any word is missing from the lexicon.
/// Otherwise the chart is always returned, even if the start symbol couldn't be derived.
pub fn parse_chart(g: &Grammar, input: &[&str]) -> Result<Chart, ParseError> {
  let n = input.len();
  tracing::debug!(tokens = n, "building chart");

  let mut chart = Chart::new(g, input);

  // spans of length 1: seed straight from the lexicon
  for (position, word) in input.iter().enumerate() {
    let Some(rules) = g.lexical(word) else {
      tracing::debug!(word, position, "word missing from lexicon");
      return Err(ParseError::LexicalGap {
        word: word.to_string(),
        position,
      });
    };

    for rule in rules.iter().filter(|r| r.probability > 0.0) {
      chart.set(Node {
        category: rule.category,
        span: (position, position),
        word: Some(word.to_string()),
        children: None,
        probability: rule.probability,
      });
    }
  }

  // longer spans, strictly by increasing length so every shorter span is final
  for length in 1..n {
    for start in 0..n - length {
      let end = start + length;
      for (lhs, rules) in g.nonterminals() {
        if let Some(best) = best_derivation(&chart, lhs, rules, start, end) {
          tracing::trace!(
            category = chart.name(lhs),
            start,
            end,
            probability = best.probability,
            "filled cell"
          );
          chart.set(best);
        }
      }
    }
  }

  tracing::debug!(
    tokens = n,
    filled = chart.nodes().count(),
    "finished chart"
  );

  Ok(chart)
}

/// Tries every split point and every rule of `lhs`, keeping the first strict maximum
fn best_derivation(
  chart: &Chart,
  lhs: Category,
  rules: &[BinaryRule],
  start: usize,
  end: usize,
) -> Option<Node> {
  let mut best: Option<Node> = None;

  for split in start..end {
    for rule in rules {
      let candidate = chart.probability(rule.left, start, split)
        * chart.probability(rule.right, split + 1, end)
        * rule.probability;

      if candidate > best.as_ref().map_or(0.0, |node| node.probability) {
        best = Some(Node {
          category: lhs,
          span: (start, end),
          word: None,
          children: Some((
            CellRef::new(rule.left, start, split),
            CellRef::new(rule.right, split + 1, end),
          )),
          probability: candidate,
        });
      }
    }
  }

  best
}
