//! Shared Packed Parse Forest.
//!
//! Nodes and children lists live in two hash-consed pools, and the edge
//! table maps a node index to the children list(s) it decomposes into. A
//! node that picks up a second, distinct children list is packed: that is
//! how the forest encodes more than one derivation of the same span.
//!
//! Node identity only covers the header fields of a node, never its
//! children, so a node can be created before any of its derivations are
//! known and the order in which derivations arrive does not matter.

use grammar::SymbolId;
use log::{debug, trace};
use crate::error::{Error, Result};
use crate::indexed::{IndexedMap, IndexedSet};
use crate::options::ForestOptions;

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Node {
  /// The input symbol at `source`.
  Leaf { source: usize },
  /// A run of nullable symbols. The empty run is the root epsilon node.
  Nullable { symbols: Vec<SymbolId> },
  /// `head` derives exactly `[start, end)` of the input.
  Inner { head: SymbolId, start: usize, end: usize },
}

impl Node {
  pub fn leaf(source: usize) -> Self {
    Node::Leaf { source }
  }

  pub fn nullable(symbols: Vec<SymbolId>) -> Self {
    Node::Nullable { symbols }
  }

  pub fn inner(head: SymbolId, start: usize, end: usize) -> Self {
    Node::Inner { head, start, end }
  }

  pub fn is_epsilon(&self) -> bool {
    matches!(self, Node::Nullable { symbols } if symbols.is_empty())
  }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum EdgeTarget {
  One(usize),
  /// Distinct children lists in attachment order, at least two.
  Many(Vec<usize>),
}

impl EdgeTarget {
  pub fn as_slice(&self) -> &[usize] {
    match self {
      EdgeTarget::One(children) => std::slice::from_ref(children),
      EdgeTarget::Many(children) => children,
    }
  }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeState {
  Unattached,
  Single,
  Packed,
}

#[derive(Debug, Default)]
pub struct Sppf {
  nodes: IndexedSet<Node>,
  children: IndexedSet<Vec<usize>>,
  edges: IndexedMap<EdgeTarget>,
  root_epsilon: Option<usize>,
  root_epsilon_children: Option<usize>,
}

impl Sppf {
  /// An empty forest. The root epsilon node is not created here, see
  /// [`Sppf::add_root_epsilon`].
  pub fn new() -> Self {
    Self::with_options(ForestOptions::default())
  }

  pub fn with_options(options: ForestOptions) -> Self {
    Self {
      nodes: IndexedSet::with_capacity(options.nodes),
      children: IndexedSet::with_capacity(options.children),
      edges: IndexedMap::with_capacity(options.edges),
      root_epsilon: None,
      root_epsilon_children: None,
    }
  }

  /// Creates the epsilon node and the children list `[epsilon]` that every
  /// empty derivation in the forest shares. Must be called once, before any
  /// nullable node is added.
  pub fn add_root_epsilon(&mut self) -> Result<usize> {
    if self.root_epsilon.is_some() {
      return Err(Error::RootEpsilonExists);
    }

    let (node, _) = self.nodes.insert(Node::nullable(vec![]));
    let (children, _) = self.children.insert(vec![node]);
    self.connect_unchecked(node, children);

    self.root_epsilon = Some(node);
    self.root_epsilon_children = Some(children);
    debug!("sppf: root epsilon node {} with children list {}", node, children);

    Ok(node)
  }

  pub fn root_epsilon(&self) -> Option<usize> {
    self.root_epsilon
  }

  pub fn root_epsilon_children(&self) -> Option<usize> {
    self.root_epsilon_children
  }

  /// Returns the canonical index of `node`. When an equal node is already
  /// in the forest, `node` is dropped and the existing index returned.
  pub fn add_node(&mut self, node: Node) -> usize {
    let (index, inserted) = self.nodes.insert(node);
    if inserted {
      trace!("sppf: node {} = {:?}", index, self.nodes[index]);
    }
    index
  }

  pub fn add_leaf_node(&mut self, source: usize) -> usize {
    self.add_node(Node::leaf(source))
  }

  /// Returns the canonical index of the children list. Every child must
  /// already be a node of this forest.
  pub fn add_children(&mut self, children: Vec<usize>) -> Result<usize> {
    for &child in &children {
      self.check_node(child)?;
    }

    let (index, inserted) = self.children.insert(children);
    if inserted {
      trace!("sppf: children list {} = {:?}", index, self.children[index]);
    }
    Ok(index)
  }

  /// Attaches a children list to a node. Attaching a list the node already
  /// has is a no-op; a second distinct list packs the node.
  pub fn connect(&mut self, node: usize, children: usize) -> Result<()> {
    self.check_node(node)?;
    self.check_children(children)?;
    self.connect_unchecked(node, children);
    Ok(())
  }

  fn connect_unchecked(&mut self, node: usize, children: usize) {
    let packed = match self.edges.get_mut(node) {
      None => {
        self.edges.insert(node, EdgeTarget::One(children));
        return;
      }
      Some(EdgeTarget::One(existing)) if *existing == children => return,
      Some(EdgeTarget::One(existing)) => vec![*existing, children],
      Some(EdgeTarget::Many(existing)) => {
        if !existing.contains(&children) {
          existing.push(children);
          trace!("sppf: node {} packs {} children lists", node, existing.len());
        }
        return;
      }
    };

    debug!("sppf: node {} is ambiguous, packing children lists {:?}", node, packed);
    self.edges.insert(node, EdgeTarget::Many(packed));
  }

  /// `add_node`, `add_children` and `connect` in one step. Returns the node
  /// index. Nothing is inserted when a child index is invalid.
  pub fn add_node_with_children(&mut self, node: Node, children: Vec<usize>) -> Result<usize> {
    for &child in &children {
      self.check_node(child)?;
    }

    let node = self.add_node(node);
    let children = self.add_children(children)?;
    self.connect_unchecked(node, children);
    Ok(node)
  }

  /// Adds the derivation `children` for `head` over `[start, end)`. When the
  /// span already has a different derivation the node becomes packed.
  pub fn add_inner_node(
    &mut self,
    head: SymbolId,
    start: usize,
    end: usize,
    children: Vec<usize>,
  ) -> Result<usize> {
    self.add_node_with_children(Node::inner(head, start, end), children)
  }

  /// The nullable node for a single symbol, which derives the root epsilon.
  pub fn add_nullable_symbol_node(&mut self, symbol: SymbolId) -> Result<usize> {
    let epsilon_children = self.root_epsilon_children.ok_or(Error::MissingRootEpsilon)?;

    let (index, inserted) = self.nodes.insert(Node::nullable(vec![symbol]));
    if inserted {
      trace!("sppf: nullable node {} for {}", index, symbol);
      self.connect_unchecked(index, epsilon_children);
    }
    Ok(index)
  }

  /// The nullable node for a run of symbols, e.g. the nullable tail of a
  /// production. Its single children list holds the nullable nodes of each
  /// symbol, which must already be in the forest.
  pub fn add_nullable_string_node(&mut self, symbols: &[SymbolId]) -> Result<usize> {
    if self.root_epsilon.is_none() {
      return Err(Error::MissingRootEpsilon);
    }

    let node = Node::nullable(symbols.to_vec());
    if let Some(index) = self.nodes.index_of(&node) {
      return Ok(index);
    }

    let children = symbols.iter()
      .map(|&sym| {
        self.nodes.index_of(&Node::nullable(vec![sym]))
          .ok_or(Error::NotNullable(sym))
      })
      .collect::<Result<Vec<_>>>()?;

    let index = self.add_node(node);
    let children = self.add_children(children)?;
    self.connect_unchecked(index, children);
    Ok(index)
  }

  pub fn get_node(&self, index: usize) -> Result<&Node> {
    self.nodes.get(index).ok_or(Error::InvalidNode { index, len: self.nodes.len() })
  }

  pub fn get_children(&self, index: usize) -> Result<&[usize]> {
    self.children.get(index)
      .map(|children| children.as_slice())
      .ok_or(Error::InvalidChildren { index, len: self.children.len() })
  }

  /// Every children list attached to `node`, in attachment order. Empty for
  /// an unattached node.
  pub fn get_children_lists(&self, node: usize) -> Result<Vec<&[usize]>> {
    self.check_node(node)?;
    Ok(self.edges.get(node)
      .map(|target| {
        target.as_slice().iter()
          .map(|&children| self.children[children].as_slice())
          .collect()
      })
      .unwrap_or_default())
  }

  pub fn edge(&self, node: usize) -> Option<&EdgeTarget> {
    self.edges.get(node)
  }

  pub fn node_state(&self, node: usize) -> Result<NodeState> {
    self.check_node(node)?;
    Ok(match self.edges.get(node) {
      None => NodeState::Unattached,
      Some(EdgeTarget::One(_)) => NodeState::Single,
      Some(EdgeTarget::Many(_)) => NodeState::Packed,
    })
  }

  pub fn is_packed(&self, node: usize) -> bool {
    matches!(self.edges.get(node), Some(EdgeTarget::Many(_)))
  }

  /// Indices of the ambiguous nodes, in the order their first edge was added.
  pub fn packed_nodes(&self) -> impl Iterator<Item = usize> + '_ {
    self.edges.iter()
      .filter(|(_, target)| matches!(target, EdgeTarget::Many(_)))
      .map(|(&node, _)| node)
  }

  pub fn index_of_node(&self, node: &Node) -> Option<usize> {
    self.nodes.index_of(node)
  }

  pub fn contains_node(&self, node: &Node) -> bool {
    self.nodes.contains(node)
  }

  pub fn index_of_children(&self, children: &[usize]) -> Option<usize> {
    self.children.index_of(&children.to_vec())
  }

  pub fn contains_children(&self, children: &[usize]) -> bool {
    self.index_of_children(children).is_some()
  }

  pub fn nodes(&self) -> impl Iterator<Item = &Node> {
    self.nodes.iter()
  }

  pub fn children_lists(&self) -> impl Iterator<Item = &[usize]> {
    self.children.iter().map(|children| children.as_slice())
  }

  pub fn edges(&self) -> impl Iterator<Item = (usize, &EdgeTarget)> {
    self.edges.iter().map(|(&node, target)| (node, target))
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn children_count(&self) -> usize {
    self.children.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// Number of distinct derivations rooted at `node`, saturating at
  /// `u64::MAX`. Leaves and the root epsilon count one, an unattached inner
  /// or nullable node counts zero.
  pub fn derivation_count(&self, node: usize) -> Result<u64> {
    self.check_node(node)?;
    let mut memo = vec![Count::Unvisited; self.nodes.len()];
    self.count(node, &mut memo)
  }

  fn count(&self, root: usize, memo: &mut [Count]) -> Result<u64> {
    let mut stack = Vec::<Frame>::new();
    let mut value = match self.enter(root, memo, &mut stack)? {
      Some(n) => return Ok(n),
      None => None,
    };

    while let Some(frame) = stack.last_mut() {
      if let Some(n) = value.take() {
        frame.product = frame.product.saturating_mul(n);
        frame.child += 1;
      }

      if frame.list == frame.lists.len() {
        let (node, total) = (frame.node, frame.total);
        stack.pop();
        memo[node] = Count::Done(total);
        value = Some(total);
        continue;
      }

      let children = &self.children[frame.lists[frame.list]];
      if frame.child == children.len() {
        frame.total = frame.total.saturating_add(frame.product);
        frame.list += 1;
        frame.child = 0;
        frame.product = 1;
        continue;
      }

      let child = children[frame.child];
      value = self.enter(child, memo, &mut stack)?;
    }

    value.ok_or(Error::Cyclic { node: root })
  }

  /// Returns the count of `node` when it is already known or needs no
  /// children, otherwise pushes a frame for it.
  fn enter<'a>(
    &'a self,
    node: usize,
    memo: &mut [Count],
    stack: &mut Vec<Frame<'a>>,
  ) -> Result<Option<u64>> {
    match memo[node] {
      Count::Done(n) => return Ok(Some(n)),
      Count::Visiting => return Err(Error::Cyclic { node }),
      Count::Unvisited => {}
    }

    if Some(node) == self.root_epsilon {
      memo[node] = Count::Done(1);
      return Ok(Some(1));
    }

    let target = match self.edges.get(node) {
      Some(target) => target,
      None => {
        let n = match self.nodes[node] {
          Node::Leaf { .. } => 1,
          _ => 0,
        };
        memo[node] = Count::Done(n);
        return Ok(Some(n));
      }
    };

    memo[node] = Count::Visiting;
    stack.push(Frame {
      node,
      lists: target.as_slice(),
      list: 0,
      child: 0,
      total: 0,
      product: 1,
    });
    Ok(None)
  }

  fn check_node(&self, index: usize) -> Result<()> {
    if index < self.nodes.len() {
      Ok(())
    } else {
      Err(Error::InvalidNode { index, len: self.nodes.len() })
    }
  }

  fn check_children(&self, index: usize) -> Result<()> {
    if index < self.children.len() {
      Ok(())
    } else {
      Err(Error::InvalidChildren { index, len: self.children.len() })
    }
  }
}

#[derive(Clone, Copy)]
enum Count {
  Unvisited,
  Visiting,
  Done(u64),
}

/// A node whose children lists are being counted.
struct Frame<'a> {
  node: usize,
  lists: &'a [usize],
  /// current children list
  list: usize,
  /// current child within that list
  child: usize,
  total: u64,
  product: u64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn sym(id: u32) -> SymbolId {
    SymbolId::new(id)
  }

  fn forest() -> Sppf {
    let mut sppf = Sppf::new();
    sppf.add_root_epsilon().unwrap();
    sppf
  }

  #[test]
  fn root_epsilon() {
    let mut sppf = Sppf::new();
    assert_eq!(sppf.node_count(), 0);
    let eps = sppf.add_root_epsilon().unwrap();

    assert_eq!(sppf.node_count(), 1);
    assert_eq!(sppf.children_count(), 1);
    assert_eq!(sppf.root_epsilon(), Some(eps));
    assert_eq!(sppf.root_epsilon_children(), Some(0));
    assert_eq!(sppf.get_children_lists(eps).unwrap(), vec![&[eps][..]]);
    assert!(sppf.get_node(eps).unwrap().is_epsilon());
    assert_eq!(sppf.add_root_epsilon(), Err(Error::RootEpsilonExists));
    assert_eq!(sppf.node_count(), 1);
  }

  #[test]
  fn node_dedup() {
    let mut sppf = forest();
    let before = sppf.node_count();

    let a = sppf.add_node_with_children(Node::leaf(5), vec![]).unwrap();
    let b = sppf.add_node_with_children(Node::leaf(5), vec![]).unwrap();

    assert_eq!(a, b);
    assert_eq!(sppf.node_count(), before + 1);
    assert_eq!(sppf.node_state(a), Ok(NodeState::Single));
    assert_eq!(sppf.add_leaf_node(5), a);
    assert_ne!(sppf.add_leaf_node(6), a);

    let x = sppf.add_node(Node::inner(sym(1), 0, 2));
    let y = sppf.add_node(Node::inner(sym(1), 0, 2));
    let z = sppf.add_node(Node::inner(sym(1), 0, 3));
    assert_eq!(x, y);
    assert_ne!(x, z);
    assert_eq!(sppf.node_state(x), Ok(NodeState::Unattached));
  }

  #[test]
  fn children_dedup() {
    let mut sppf = forest();
    let l0 = sppf.add_leaf_node(0);
    let l1 = sppf.add_leaf_node(1);

    let c0 = sppf.add_children(vec![l0, l1]).unwrap();
    let c1 = sppf.add_children(vec![l0, l1]).unwrap();
    let c2 = sppf.add_children(vec![l1, l0]).unwrap();

    assert_eq!(c0, c1);
    assert_ne!(c0, c2);
    assert_eq!(sppf.index_of_children(&[l1, l0]), Some(c2));
    assert!(!sppf.contains_children(&[l0]));
    assert_eq!(sppf.add_children(vec![l0, 42]), Err(Error::InvalidNode { index: 42, len: 3 }));
  }

  #[test]
  fn packing() {
    let mut sppf = forest();
    let l0 = sppf.add_leaf_node(0);
    let l1 = sppf.add_leaf_node(1);
    let a = sppf.add_node(Node::inner(sym(1), 0, 2));
    let b = sppf.add_node(Node::inner(sym(2), 2, 4));

    let e = sppf.add_inner_node(sym(3), 0, 4, vec![l0, l1]).unwrap();
    assert_eq!(sppf.node_state(e), Ok(NodeState::Single));
    assert!(!sppf.is_packed(e));
    let e2 = sppf.add_inner_node(sym(3), 0, 4, vec![a, b]).unwrap();

    assert_eq!(e, e2);
    assert_eq!(sppf.node_state(e), Ok(NodeState::Packed));
    assert_eq!(sppf.get_children_lists(e).unwrap(), vec![&[l0, l1][..], &[a, b][..]]);
    assert_eq!(sppf.packed_nodes().collect::<Vec<_>>(), vec![e]);
    assert!(sppf.is_packed(e));
    assert!(!sppf.is_packed(a));

    let lists = sppf.edge(e).unwrap().as_slice();
    assert_eq!(sppf.get_children(lists[0]), Ok(&[l0, l1][..]));
    assert_eq!(sppf.get_children(lists[1]), Ok(&[a, b][..]));
  }

  #[test]
  fn connect_is_idempotent() {
    let mut sppf = forest();
    let n = sppf.add_node(Node::inner(sym(0), 0, 1));
    let l = sppf.add_leaf_node(0);
    let c0 = sppf.add_children(vec![l]).unwrap();
    let c1 = sppf.add_children(vec![]).unwrap();
    let c2 = sppf.add_children(vec![l, l]).unwrap();

    sppf.connect(n, c0).unwrap();
    sppf.connect(n, c0).unwrap();
    assert_eq!(sppf.edge(n), Some(&EdgeTarget::One(c0)));

    sppf.connect(n, c1).unwrap();
    sppf.connect(n, c0).unwrap();
    sppf.connect(n, c2).unwrap();
    sppf.connect(n, c1).unwrap();
    assert_eq!(sppf.edge(n), Some(&EdgeTarget::Many(vec![c0, c1, c2])));
    assert_eq!(sppf.edge_count(), 2);
  }

  #[test]
  fn packing_is_order_independent() {
    let lists = |order: &[usize]| {
      let mut sppf = forest();
      let n = sppf.add_node(Node::inner(sym(0), 0, 3));
      let leaves = (0..3).map(|i| sppf.add_leaf_node(i)).collect::<Vec<_>>();
      let children = (0..3)
        .map(|i| sppf.add_children(vec![leaves[i]]).unwrap())
        .collect::<Vec<_>>();
      for &i in order {
        sppf.connect(n, children[i]).unwrap();
      }
      let mut attached = sppf.edge(n).unwrap().as_slice().to_vec();
      attached.sort();
      attached
    };

    assert_eq!(lists(&[0, 1, 2]), lists(&[2, 0, 1, 0, 2]));
    assert_eq!(lists(&[1, 2, 0]).len(), 3);
  }

  #[test]
  fn connect_rejects_invalid_indices() {
    let mut sppf = forest();
    let n = sppf.add_leaf_node(0);

    assert_eq!(sppf.connect(9, 0), Err(Error::InvalidNode { index: 9, len: 2 }));
    assert_eq!(sppf.connect(n, 3), Err(Error::InvalidChildren { index: 3, len: 1 }));
    assert_eq!(sppf.edge(n), None);
    assert!(sppf.get_children_lists(9).is_err());
    assert_eq!(sppf.get_children(3), Err(Error::InvalidChildren { index: 3, len: 1 }));

    let nodes = sppf.node_count();
    let children = sppf.children_count();
    assert_eq!(
      sppf.add_node_with_children(Node::inner(sym(0), 0, 1), vec![n, 7]),
      Err(Error::InvalidNode { index: 7, len: 2 }));
    assert_eq!(sppf.node_count(), nodes);
    assert_eq!(sppf.children_count(), children);
    assert!(!sppf.contains_node(&Node::inner(sym(0), 0, 1)));
  }

  #[test]
  fn nullable_nodes() {
    let mut sppf = forest();
    let eps = sppf.root_epsilon().unwrap();
    let eps_children = sppf.root_epsilon_children().unwrap();
    let (a, b) = (sym(1), sym(2));

    let na = sppf.add_nullable_symbol_node(a).unwrap();
    let nb = sppf.add_nullable_symbol_node(b).unwrap();
    assert_eq!(sppf.add_nullable_symbol_node(a), Ok(na));
    assert_eq!(sppf.edge(na), Some(&EdgeTarget::One(eps_children)));

    let nab = sppf.add_nullable_string_node(&[a, b]).unwrap();
    assert_eq!(sppf.get_node(nab), Ok(&Node::nullable(vec![a, b])));
    assert_eq!(sppf.get_children_lists(nab).unwrap(), vec![&[na, nb][..]]);
    assert_eq!(sppf.add_nullable_string_node(&[a, b]), Ok(nab));
    assert_eq!(sppf.add_nullable_string_node(&[a]), Ok(na));
    assert_eq!(sppf.add_nullable_string_node(&[]), Ok(eps));

    let epsilons = sppf.nodes().filter(|node| node.is_epsilon()).count();
    assert_eq!(epsilons, 1);
    assert_eq!(sppf.get_children_lists(eps).unwrap(), vec![&[eps][..]]);
  }

  #[test]
  fn nullable_string_requires_singletons() {
    let mut sppf = forest();
    let (a, b) = (sym(1), sym(2));
    sppf.add_nullable_symbol_node(a).unwrap();
    let nodes = sppf.node_count();
    let children = sppf.children_count();

    assert_eq!(sppf.add_nullable_string_node(&[a, b]), Err(Error::NotNullable(b)));
    assert_eq!(sppf.node_count(), nodes);
    assert_eq!(sppf.children_count(), children);
    assert!(!sppf.contains_node(&Node::nullable(vec![a, b])));
  }

  #[test]
  fn nullable_requires_root_epsilon() {
    let mut sppf = Sppf::new();

    assert_eq!(sppf.add_nullable_symbol_node(sym(0)), Err(Error::MissingRootEpsilon));
    assert_eq!(sppf.add_nullable_string_node(&[sym(0)]), Err(Error::MissingRootEpsilon));
    assert_eq!(sppf.node_count(), 0);
  }

  #[test]
  fn derivation_counts() {
    let mut sppf = forest();
    let eps = sppf.root_epsilon().unwrap();
    let l0 = sppf.add_leaf_node(0);
    let l1 = sppf.add_leaf_node(1);
    let na = sppf.add_nullable_symbol_node(sym(9)).unwrap();

    let a = sppf.add_inner_node(sym(1), 0, 1, vec![l0]).unwrap();
    sppf.add_inner_node(sym(1), 0, 1, vec![l0, na]).unwrap();
    let b = sppf.add_inner_node(sym(2), 1, 2, vec![l1]).unwrap();
    let root = sppf.add_inner_node(sym(3), 0, 2, vec![a, b]).unwrap();
    sppf.add_inner_node(sym(3), 0, 2, vec![l0, l1]).unwrap();

    assert_eq!(sppf.derivation_count(eps), Ok(1));
    assert_eq!(sppf.derivation_count(na), Ok(1));
    assert_eq!(sppf.derivation_count(a), Ok(2));
    assert_eq!(sppf.derivation_count(root), Ok(3));

    let dangling = sppf.add_node(Node::inner(sym(4), 0, 2));
    assert_eq!(sppf.derivation_count(dangling), Ok(0));
  }

  #[test]
  fn derivation_count_deep_chain() {
    let mut sppf = forest();
    let e = sym(1);
    let l0 = sppf.add_leaf_node(0);
    let mut top = sppf.add_inner_node(e, 0, 1, vec![l0]).unwrap();
    for end in 2..=200_000 {
      top = sppf.add_inner_node(e, 0, end, vec![top]).unwrap();
    }

    assert_eq!(sppf.derivation_count(top), Ok(1));

    let other = sppf.add_inner_node(e, 0, 200_000, vec![l0]).unwrap();
    assert_eq!(other, top);
    assert_eq!(sppf.derivation_count(top), Ok(2));
  }

  #[test]
  fn derivation_cycle() {
    let mut sppf = forest();
    let l0 = sppf.add_leaf_node(0);
    let a = sppf.add_inner_node(sym(1), 0, 1, vec![l0]).unwrap();
    sppf.add_inner_node(sym(1), 0, 1, vec![a]).unwrap();

    assert_eq!(sppf.derivation_count(a), Err(Error::Cyclic { node: a }));
  }

  #[test]
  fn forests_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sppf>();
    assert_send_sync::<crate::Crf>();
  }
}
