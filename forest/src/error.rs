use grammar::SymbolId;
use thiserror::Error;

/// Invariant violations reported by the forests. Offering a value that is
/// already present is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("node index {index} out of range (forest has {len} nodes)")]
  InvalidNode { index: usize, len: usize },
  #[error("children list index {index} out of range (forest has {len} children lists)")]
  InvalidChildren { index: usize, len: usize },
  #[error("cluster node index {index} out of range (forest has {len} cluster nodes)")]
  InvalidClusterNode { index: usize, len: usize },
  #[error("label node index {index} out of range (forest has {len} label nodes)")]
  InvalidLabelNode { index: usize, len: usize },
  #[error("the root epsilon node has not been added")]
  MissingRootEpsilon,
  #[error("the root epsilon node was already added")]
  RootEpsilonExists,
  #[error("symbol {0} has no nullable node")]
  NotNullable(SymbolId),
  #[error("node {node} derives itself")]
  Cyclic { node: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
