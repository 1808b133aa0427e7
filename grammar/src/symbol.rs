use std::fmt;
use super::BiMap;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct SymbolId(u32);

#[derive(Default, Debug)]
pub struct SymbolIdGen(u32);

impl SymbolIdGen {
  pub fn gen(&mut self) -> SymbolId {
    let i = self.0;
    self.0 += 1;
    SymbolId(i)
  }
}

impl SymbolId {
  pub fn new(id: u32) -> Self {
    Self(id)
  }

  pub fn id(&self) -> u32 {
    self.0
  }
}

impl fmt::Display for SymbolId {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Maps symbol ids back to printable names. Only used for diagnostics.
pub trait SymbolTable {
  fn lookup_symbol(&self, symbol: SymbolId) -> Option<&str>;
}

#[derive(Default, Debug)]
pub struct Symbols {
  names: BiMap<SymbolId, String>,
  gen: SymbolIdGen,
}

impl Symbols {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the id already assigned to `name`, or assigns a fresh one.
  pub fn intern(&mut self, name: impl Into<String>) -> SymbolId {
    let name = name.into();
    if let Some(&id) = self.names.get_by_right(&name) {
      return id;
    }

    let id = self.gen.gen();
    self.names.insert(id, name);
    id
  }

  pub fn get(&self, name: &str) -> Option<SymbolId> {
    self.names.get_by_right(name).copied()
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

impl SymbolTable for Symbols {
  fn lookup_symbol(&self, symbol: SymbolId) -> Option<&str> {
    self.names.get_by_left(&symbol).map(|s| s.as_str())
  }
}
