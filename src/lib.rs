//! Parse forests for generalized parsing.
//!
//! A [`Session`] holds the two forests a driver builds during one
//! left-to-right pass over an input; both are dropped together when the
//! session ends.

pub use grammar;
pub use forest;

pub use forest::{Crf, Sppf, Node, EdgeTarget, NodeState, ForestOptions, Error, Result};
pub use grammar::{Grammar, Slot, SymbolId, SymbolTable};

use grammar::{nullable, Set};

#[derive(Debug)]
pub struct Session {
  pub crf: Crf,
  pub sppf: Sppf,
}

impl Session {
  /// Forests sized for `input_len` symbols, with the root epsilon in place.
  pub fn new(input_len: usize) -> Result<Self> {
    Self::with_options(ForestOptions::for_input(input_len))
  }

  pub fn with_options(options: ForestOptions) -> Result<Self> {
    let mut sppf = Sppf::with_options(options);
    sppf.add_root_epsilon()?;

    Ok(Self {
      crf: Crf::with_options(options),
      sppf,
    })
  }

  /// Adds a nullable node for every nullable nonterminal of `grammar` and
  /// returns the nullable set.
  pub fn add_nullable_symbols(&mut self, grammar: &Grammar) -> Result<Set<SymbolId>> {
    let nullable = nullable::compute(grammar);
    for &sym in &nullable {
      self.sppf.add_nullable_symbol_node(sym)?;
    }
    Ok(nullable)
  }

  /// The nullable node for the symbols after the dot of `slot`, or `None`
  /// when they are not all nullable. A complete slot yields the root
  /// epsilon.
  pub fn add_nullable_tail(
    &mut self,
    grammar: &Grammar,
    slot: Slot,
    nullable: &Set<SymbolId>,
  ) -> Result<Option<usize>> {
    let rest = slot.rest(grammar);
    if !nullable::is_nullable_string(rest, nullable) {
      return Ok(None);
    }
    self.sppf.add_nullable_string_node(rest).map(Some)
  }
}
