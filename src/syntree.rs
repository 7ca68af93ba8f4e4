use std::fmt;

/// A labeled inner node. Spans here are half-open, like `Range`.
#[derive(Debug, PartialEq, Clone)]
pub struct Constituent<T> {
  pub value: T,
  pub span: (usize, usize),
}

impl<T> fmt::Display for Constituent<T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}: {}", self.span.0, self.span.1, self.value)
  }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Word<U> {
  pub value: U,
  pub span: (usize, usize),
}

impl<U> fmt::Display for Word<U>
where
  U: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}: {}", self.span.0, self.span.1, self.value)
  }
}

#[derive(Debug, PartialEq, Clone)]
pub enum SynTree<T, U> {
  Branch(Constituent<T>, Vec<SynTree<T, U>>),
  Leaf(Word<U>),
}

impl<T, U> SynTree<T, U> {
  pub fn is_leaf(&self) -> bool {
    matches!(self, Self::Leaf(_))
  }

  pub fn get_leaf(&self) -> Option<&Word<U>> {
    match self {
      Self::Leaf(w) => Some(w),
      _ => None,
    }
  }

  pub fn get_branch(&self) -> Option<(&Constituent<T>, &Vec<SynTree<T, U>>)> {
    match self {
      Self::Branch(c, cs) => Some((c, cs)),
      _ => None,
    }
  }

  pub fn span(&self) -> (usize, usize) {
    match self {
      Self::Branch(c, _) => c.span,
      Self::Leaf(w) => w.span,
    }
  }

  /// The words under this tree, left to right
  pub fn leaves(&self) -> Vec<&U> {
    match self {
      Self::Leaf(w) => vec![&w.value],
      Self::Branch(_, children) => children.iter().flat_map(|c| c.leaves()).collect(),
    }
  }

  /// A branch whose only child is a word, i.e. a part of speech
  fn preterminal(&self) -> Option<(&Constituent<T>, &Word<U>)> {
    match self {
      Self::Branch(c, children) if children.len() == 1 => children[0].get_leaf().map(|w| (c, w)),
      _ => None,
    }
  }
}

impl<T, U> SynTree<T, U>
where
  T: fmt::Display,
  U: fmt::Display,
{
  /// Indented outline, three spaces per level, words next to their part of speech:
  ///
  /// ```text
  /// S
  ///    Noun amy
  ///    Verb ate
  /// ```
  pub fn to_outline(&self) -> String {
    let mut out = String::new();
    self.write_outline(&mut out, 0);
    out
  }

  fn write_outline(&self, out: &mut String, indent: usize) {
    out.push_str(&" ".repeat(indent));
    match self {
      Self::Leaf(w) => out.push_str(&format!("{}\n", w.value)),
      Self::Branch(c, children) => {
        if let Some((_, word)) = self.preterminal() {
          out.push_str(&format!("{} {}\n", c.value, word.value));
        } else {
          out.push_str(&format!("{}\n", c.value));
          for child in children {
            child.write_outline(out, indent + 3);
          }
        }
      }
    }
  }
}

impl<T, U> fmt::Display for SynTree<T, U>
where
  T: fmt::Display,
  U: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Leaf(t) => write!(f, "{}", t),
      Self::Branch(t, ts) => {
        write!(f, "({}", t)?;
        if ts.len() == 1 {
          write!(f, " ({}))", ts[0])
        } else {
          for t in ts.iter() {
            // TODO: is there a nice way to do this that doesn't allocate a String?
            let fmt = format!("{}", t);
            for line in fmt.lines() {
              write!(f, "\n  {}", line)?;
            }
          }
          write!(f, ")")
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn pos(label: &str, word: &str, at: usize) -> SynTree<String, String> {
    SynTree::Branch(
      Constituent {
        value: label.to_string(),
        span: (at, at + 1),
      },
      vec![SynTree::Leaf(Word {
        value: word.to_string(),
        span: (at, at + 1),
      })],
    )
  }

  fn fish_swim() -> SynTree<String, String> {
    SynTree::Branch(
      Constituent {
        value: "S".to_string(),
        span: (0, 2),
      },
      vec![pos("Noun", "fish", 0), pos("Verb", "swim", 1)],
    )
  }

  #[test]
  fn test_outline() {
    assert_eq!(fish_swim().to_outline(), "S\n   Noun fish\n   Verb swim\n");
  }

  #[test]
  fn test_display() {
    assert_eq!(
      fish_swim().to_string(),
      "(0..2: S\n  (0..1: Noun (0..1: fish))\n  (1..2: Verb (1..2: swim)))"
    );
  }

  #[test]
  fn test_leaves_and_span() {
    let tree = fish_swim();
    assert_eq!(tree.leaves(), vec!["fish", "swim"]);
    assert_eq!(tree.span(), (0, 2));
    assert!(!tree.is_leaf());
    assert!(tree.get_branch().unwrap().1[0].get_branch().unwrap().1[0].is_leaf());
  }
}
