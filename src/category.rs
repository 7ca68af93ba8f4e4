use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::error::GrammarError;

/// helper macro for initializing a regex with lazy_static!
macro_rules! regex_static {
  ($name:ident, $pattern:expr) => {
    lazy_static! {
      static ref $name: Regex = Regex::new($pattern).unwrap();
    }
  };
}

/// Interned id of a grammar category. Only meaningful for the grammar that issued it:
/// name and production lookups panic on ids another grammar handed out past this one's range,
/// while chart cell lookups (`Chart::get`) just find nothing. Map between grammars by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(pub(crate) u32);

impl Category {
  pub(crate) fn index(self) -> usize {
    self.0 as usize
  }
}

/// The closed set of category names a grammar knows about
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Categories {
  names: Vec<String>,
  ids: HashMap<String, Category>,
}

impl Categories {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Registers a name, returning the existing id if it was already known
  pub fn intern(&mut self, name: &str) -> Result<Category, GrammarError> {
    if let Some(&id) = self.ids.get(name) {
      return Ok(id);
    }

    validate_name(name)?;

    let id = Category(self.names.len() as u32);
    self.names.push(name.to_string());
    self.ids.insert(name.to_string(), id);
    Ok(id)
  }

  /// Looks up a name that must already be registered
  pub fn resolve(&self, name: &str) -> Result<Category, GrammarError> {
    self
      .ids
      .get(name)
      .copied()
      .ok_or_else(|| GrammarError::UnknownCategory(name.to_string()))
  }

  pub fn get(&self, name: &str) -> Option<Category> {
    self.ids.get(name).copied()
  }

  /// # Panics
  ///
  /// If `category` is out of range for this set.
  pub fn name(&self, category: Category) -> &str {
    &self.names[category.index()]
  }

  pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
    (0..self.names.len() as u32).map(Category)
  }
}

impl fmt::Display for Categories {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (idx, name) in self.names.iter().enumerate() {
      if idx > 0 {
        write!(f, " ")?;
      }
      write!(f, "{}", name)?;
    }
    Ok(())
  }
}

/// Category names start upper-case, so they can't be confused with words
fn validate_name(name: &str) -> Result<(), GrammarError> {
  regex_static!(CATEGORY_NAME, r"^[A-Z][A-Za-z0-9\-_]*$");
  if CATEGORY_NAME.is_match(name) {
    Ok(())
  } else {
    Err(GrammarError::InvalidCategoryName(name.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_intern_is_stable() {
    let mut cats = Categories::new();
    let noun = cats.intern("Noun").unwrap();
    let verb = cats.intern("Verb").unwrap();

    assert_ne!(noun, verb);
    assert_eq!(cats.intern("Noun").unwrap(), noun);
    assert_eq!(cats.len(), 2);
    assert_eq!(cats.name(verb), "Verb");
    assert_eq!(cats.to_string(), "Noun Verb");
  }

  #[test]
  fn test_rejects_bad_names() {
    let mut cats = Categories::new();
    for bad in ["", "noun", "Noun Phrase", "1NP", "N/P"] {
      assert!(
        matches!(cats.intern(bad), Err(GrammarError::InvalidCategoryName(_))),
        "accepted {bad:?}"
      );
    }
    assert!(cats.is_empty());
  }

  #[test]
  fn test_resolve_unknown() {
    let mut cats = Categories::new();
    cats.intern("S").unwrap();
    assert_eq!(cats.resolve("S").unwrap(), Category(0));
    assert!(matches!(
      cats.resolve("NP"),
      Err(GrammarError::UnknownCategory(name)) if name == "NP"
    ));
  }
}
