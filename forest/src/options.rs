/// Capacity hints used when a forest is created. They only affect
/// preallocation, never behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestOptions {
  /// SPPF nodes, or CRF cluster nodes.
  pub nodes: usize,
  /// SPPF children lists, or CRF label nodes.
  pub children: usize,
  pub edges: usize,
}

impl Default for ForestOptions {
  fn default() -> Self {
    Self {
      nodes: 64,
      children: 64,
      edges: 64,
    }
  }
}

impl ForestOptions {
  /// Sizes every table for an input of `len` symbols.
  pub fn for_input(len: usize) -> Self {
    let n = len.max(1) * 4;
    Self {
      nodes: n,
      children: n,
      edges: n,
    }
  }
}
