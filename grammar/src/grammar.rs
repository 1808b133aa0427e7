use super::symbol::{SymbolId, Symbols, SymbolTable};
use super::Set;

#[derive(Default, Debug)]
pub struct Grammar {
  pub symbols: Symbols,
  pub terminals: Set<SymbolId>,
  pub prods: Vec<Production>,
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Production {
  pub head: SymbolId,
  pub body: Vec<SymbolId>,
}

impl Grammar {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn terminal(&mut self, name: &str) -> SymbolId {
    let sym = self.symbols.intern(name);
    self.terminals.insert(sym);
    sym
  }

  pub fn nonterminal(&mut self, name: &str) -> SymbolId {
    self.symbols.intern(name)
  }

  /// Returns the index of the new production.
  pub fn add_production(&mut self, head: SymbolId, body: Vec<SymbolId>) -> usize {
    debug_assert!(!self.is_terminal(head), "terminal {} used as production head", head);
    self.prods.push(Production { head, body });
    self.prods.len() - 1
  }

  pub fn is_terminal(&self, sym: SymbolId) -> bool {
    self.terminals.contains(&sym)
  }

  /// Productions of `head` as `(index, production)` pairs, in declaration order.
  pub fn prods_of(&self, head: SymbolId) -> impl Iterator<Item = (usize, &Production)> {
    self.prods.iter()
      .enumerate()
      .filter(move |(_, prod)| prod.head == head)
  }

  pub fn nonterminals(&self) -> Set<SymbolId> {
    self.prods.iter().map(|prod| prod.head).collect()
  }

  pub fn name(&self, sym: SymbolId) -> &str {
    self.symbols.lookup_symbol(sym).unwrap_or("?")
  }
}

impl SymbolTable for Grammar {
  fn lookup_symbol(&self, symbol: SymbolId) -> Option<&str> {
    self.symbols.lookup_symbol(symbol)
  }
}

impl Production {
  pub fn to_string(&self, grammar: &Grammar) -> String {
    let mut s = grammar.name(self.head).to_owned();
    s.push_str(" ->");
    if self.body.is_empty() {
      s.push_str(" ()");
    }
    for &sym in &self.body {
      s.push(' ');
      s.push_str(grammar.name(sym));
    }
    s
  }
}
