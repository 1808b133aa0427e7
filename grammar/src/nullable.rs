//! compute the NULLABLE set.

use bitvec::prelude::*;
use super::grammar::Grammar;
use super::symbol::SymbolId;
use super::Set;

/// Nonterminals deriving the empty string, in the order they were discovered.
pub fn compute(grammar: &Grammar) -> Set<SymbolId> {
  let mut nullable = Set::<SymbolId>::default();
  let mut prods_nullable = bitvec![0; grammar.prods.len()];

  loop {
    let mut changed = false;

    for (i, prod) in grammar.prods.iter().enumerate() {
      if prods_nullable[i] {
        continue;
      }

      if is_nullable_string(&prod.body, &nullable) {
        prods_nullable.set(i, true);
        changed |= nullable.insert(prod.head);
      }
    }

    if !changed {
      break;
    }
  }

  nullable
}

/// An empty string is nullable.
pub fn is_nullable_string(symbols: &[SymbolId], nullable: &Set<SymbolId>) -> bool {
  symbols.iter().all(|sym| nullable.contains(sym))
}
