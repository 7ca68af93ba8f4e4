use crate::chart::{CellRef, Chart, Node, parse_chart};
use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::syntree::SynTree;

/// A successful parse: the chart plus the root cell, which is known to be filled
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
  chart: Chart,
  root: CellRef,
}

impl Parse {
  pub fn chart(&self) -> &Chart {
    &self.chart
  }

  pub fn root(&self) -> &Node {
    // only constructed once the root is known to be filled
    self
      .chart
      .get_ref(self.root)
      .unwrap_or_else(|| unreachable!("parse root is always filled"))
  }

  /// Probability of the best parse, in (0, 1]
  pub fn probability(&self) -> f64 {
    self.root().probability
  }

  pub fn tree(&self) -> SynTree<String, String> {
    self
      .chart
      .tree(self.root)
      .unwrap_or_else(|| unreachable!("backpointers always lead to filled cells"))
  }
}

/// Splits on whitespace and lower-cases each token
pub fn tokenize(sentence: &str) -> Vec<String> {
  sentence
    .split_whitespace()
    .map(|t| t.to_lowercase())
    .collect()
}

impl Grammar {
  pub fn parse_chart(&self, input: &[&str]) -> Result<Chart, ParseError> {
    parse_chart(self, input)
  }

  /// Finds the most probable parse of `input` (lower-case tokens).
  pub fn parse(&self, input: &[&str]) -> Result<Parse, ParseError> {
    let chart = self.parse_chart(input)?;

    match chart.root_ref() {
      Some(root) if chart.get_ref(root).is_some() => Ok(Parse { chart, root }),
      _ => {
        tracing::debug!(tokens = chart.len(), "no derivation of the start symbol");
        Err(ParseError::NoDerivation(Box::new(chart)))
      }
    }
  }

  /// Tokenizes a raw sentence with `tokenize`, then parses it
  pub fn parse_sentence(&self, sentence: &str) -> Result<Parse, ParseError> {
    let tokens = tokenize(sentence);
    let tokens = tokens.iter().map(String::as_str).collect::<Vec<_>>();
    self.parse(&tokens)
  }
}
