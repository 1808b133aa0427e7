use super::grammar::Grammar;
use super::symbol::SymbolId;

/// A production with a dot position, `X -> α . β`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Slot {
  pub prod: usize,
  pub dot: usize,
}

impl Slot {
  pub fn new(prod: usize, dot: usize) -> Self {
    Self { prod, dot }
  }

  pub fn advance(&self) -> Self {
    Self {
      prod: self.prod,
      dot: self.dot + 1,
    }
  }

  pub fn head(&self, grammar: &Grammar) -> SymbolId {
    grammar.prods[self.prod].head
  }

  pub fn is_complete(&self, grammar: &Grammar) -> bool {
    self.dot >= grammar.prods[self.prod].body.len()
  }

  /// Symbols after the dot.
  pub fn rest<'g>(&self, grammar: &'g Grammar) -> &'g [SymbolId] {
    let body = &grammar.prods[self.prod].body;
    &body[self.dot.min(body.len())..]
  }

  pub fn fmt(
    &self,
    grammar: &Grammar,
    f: &mut impl std::fmt::Write,
  ) -> std::fmt::Result {
    let prod = &grammar.prods[self.prod];

    write!(f, "{} ->", grammar.name(prod.head))?;

    for (i, &sym) in prod.body.iter().enumerate() {
      if i == self.dot {
        write!(f, " .")?;
      }
      write!(f, " {}", grammar.name(sym))?;
    }

    if self.dot >= prod.body.len() {
      write!(f, " .")?;
    }

    Ok(())
  }

  pub fn to_string(&self, grammar: &Grammar) -> String {
    let mut s = String::new();
    self.fmt(grammar, &mut s).unwrap();
    s
  }
}
