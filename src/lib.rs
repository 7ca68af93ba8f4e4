#[macro_use]
extern crate lazy_static;

pub mod category;
pub mod chart;
pub mod demo;
pub mod error;
pub mod grammar;
pub mod parse;
pub mod rules;
pub mod syntree;

pub use crate::category::Category;
pub use crate::chart::{CellRef, Chart, Node};
pub use crate::error::{Err, GrammarError, ParseError};
pub use crate::grammar::{Grammar, GrammarBuilder};
pub use crate::parse::{Parse, tokenize};
pub use crate::syntree::SynTree;

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * b.abs().max(1e-300)
  }

  #[test]
  fn test_fish_swim_in_streams() {
    let g = demo::grammar().unwrap();
    let parse = g.parse_sentence("Fish swim in streams").unwrap();

    // S -> Noun VPWithPPList, VPWithPPList -> Verb PP, PP -> Prep Noun
    assert!(close(parse.probability(), 0.2 * (0.2 * (0.3 * 0.1 * 0.6) * 0.3) * 0.1));
    assert_eq!(
      parse.tree().to_outline(),
      "S\n   Noun fish\n   VPWithPPList\n      Verb swim\n      PP\n\
       \x20        Prep in\n         Noun streams\n"
    );
  }

  #[test]
  fn test_fish_in_streams_swim() {
    let g = demo::grammar().unwrap();
    let parse = g.parse_sentence("Fish in streams swim").unwrap();

    // S -> NP Verb, NP -> Noun PP
    assert!(close(parse.probability(), (0.2 * (0.3 * 0.1 * 0.6) * 0.8) * 0.2 * 0.2));
    assert_eq!(
      parse.tree().to_outline(),
      "S\n   NP\n      Noun fish\n      PP\n         Prep in\n         Noun streams\n   Verb swim\n"
    );

    // same words, different bracketing
    let other = g.parse_sentence("Fish swim in streams").unwrap();
    assert_ne!(parse.tree(), other.tree());
  }

  #[test]
  fn test_amy_ate_fish_for_dinner() {
    let g = demo::grammar().unwrap();
    let parse = g.parse_sentence("Amy ate fish for dinner").unwrap();

    // VerbAndObject -> Verb NP beats VPWithPPList -> VerbAndObject PP
    let np = 0.2 * (0.5 * 0.2 * 0.6) * 0.8;
    assert!(close(parse.probability(), 0.1 * (0.7 * np * 0.5) * 0.3));
    assert_eq!(
      parse.tree().to_outline(),
      "S\n   Noun amy\n   VerbAndObject\n      Verb ate\n      NP\n         Noun fish\n\
       \x20        PP\n            Prep for\n            Noun dinner\n"
    );
    assert_eq!(parse.tree().leaves(), vec!["amy", "ate", "fish", "for", "dinner"]);
  }

  #[test]
  fn test_amy_ate_fish_for_dinner_on_tuesday() {
    let g = demo::grammar().unwrap();
    let parse = g
      .parse_sentence("Amy ate fish for dinner on Tuesday")
      .unwrap();

    assert!(parse.probability() > 0.0);
    assert_eq!(parse.root().span, (0, 6));
    assert_eq!(parse.tree().leaves().len(), 7);
  }

  #[test]
  fn test_amy_ate_for_has_no_derivation() {
    let g = demo::grammar().unwrap();
    let err = g.parse_sentence("Amy ate for").unwrap_err();

    assert!(err.is_no_derivation());
    let chart = err.chart().unwrap();
    assert_eq!(chart.len(), 3);
    assert_eq!(chart.probability(g.start(), 0, 2), 0.0);
    // the words themselves were seeded
    let prep = g.category("Prep").unwrap();
    assert_eq!(chart.probability(prep, 2, 2), 0.5);
  }

  #[test]
  fn test_unknown_word_is_a_lexical_gap() {
    let g = demo::grammar().unwrap();

    match g.parse_sentence("Amy ate pizza") {
      Err(ParseError::LexicalGap { word, position }) => {
        assert_eq!(word, "pizza");
        assert_eq!(position, 2);
      }
      other => panic!("expected a lexical gap, got {:?}", other),
    }

    // regardless of whether the rest would parse
    let err = g.parse_sentence("pizza for").unwrap_err();
    assert!(err.is_lexical_gap());
    assert!(err.chart().is_none());
    assert_eq!(
      err.to_string(),
      "this sentence cannot be parsed: unknown word \"pizza\" at position 0"
    );
  }

  #[test]
  fn test_empty_input_has_no_derivation() {
    let g = demo::grammar().unwrap();
    let err = g.parse(&[]).unwrap_err();
    assert!(err.is_no_derivation());
    assert!(err.chart().unwrap().is_empty());
    assert!(g.parse_sentence("   ").unwrap_err().is_no_derivation());
  }

  #[test]
  fn test_parse_is_idempotent() {
    let g = demo::grammar().unwrap();
    for sentence in demo::SENTENCES {
      let first = g.parse_sentence(sentence);
      let second = g.parse_sentence(sentence);
      match (first, second) {
        (Ok(a), Ok(b)) => {
          assert_eq!(a.tree(), b.tree());
          assert_eq!(a.probability(), b.probability());
          assert_eq!(a, b);
        }
        (Err(a), Err(b)) => assert_eq!(a.chart(), b.chart()),
        (a, b) => panic!("{sentence}: {a:?} vs {b:?}"),
      }
    }
  }

  #[test]
  fn test_tokenize() {
    assert_eq!(tokenize("  Amy ATE\tfish \n"), vec!["amy", "ate", "fish"]);
    assert!(tokenize("").is_empty());
  }
}
