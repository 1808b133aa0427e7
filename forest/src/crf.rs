//! Call Return Forest.
//!
//! Cluster nodes `(X, j)` stand for a parse of nonterminal `X` started at
//! input position `j`. Label nodes `(X -> α . β, j)` are the continuations
//! waiting on a cluster node. Both are hash-consed, so however often a
//! driver derives the same call state it maps to one index.

use grammar::{Slot, SymbolId};
use log::trace;
use crate::error::{Error, Result};
use crate::indexed::{IndexedMap, IndexedSet};
use crate::options::ForestOptions;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ClusterNode {
  pub head: SymbolId,
  pub j: usize,
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct LabelNode {
  pub label: Slot,
  pub j: usize,
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct CrfEdge {
  pub cluster: usize,
  pub label: usize,
}

#[derive(Debug, Default)]
pub struct Crf {
  cluster_nodes: IndexedSet<ClusterNode>,
  label_nodes: IndexedSet<LabelNode>,
  edges: IndexedSet<CrfEdge>,
  /// cluster node -> label nodes, in edge insertion order
  successors: IndexedMap<Vec<usize>>,
}

impl Crf {
  pub fn new() -> Self {
    Self::with_options(ForestOptions::default())
  }

  pub fn with_options(options: ForestOptions) -> Self {
    Self {
      cluster_nodes: IndexedSet::with_capacity(options.nodes),
      label_nodes: IndexedSet::with_capacity(options.children),
      edges: IndexedSet::with_capacity(options.edges),
      successors: IndexedMap::with_capacity(options.nodes),
    }
  }

  pub fn add_cluster_node(&mut self, head: SymbolId, j: usize) -> usize {
    let (index, inserted) = self.cluster_nodes.insert(ClusterNode { head, j });
    if inserted {
      trace!("crf: cluster node {} = ({}, {})", index, head, j);
    }
    index
  }

  pub fn add_label_node(&mut self, label: Slot, j: usize) -> usize {
    let (index, inserted) = self.label_nodes.insert(LabelNode { label, j });
    if inserted {
      trace!("crf: label node {} = ({:?}, {})", index, label, j);
    }
    index
  }

  /// Returns whether the edge is new. Adding an existing edge changes
  /// nothing.
  pub fn add_edge(&mut self, cluster: usize, label: usize) -> Result<bool> {
    self.check_cluster_node(cluster)?;
    self.check_label_node(label)?;

    let (index, inserted) = self.edges.insert(CrfEdge { cluster, label });
    if inserted {
      trace!("crf: edge {} = {} -> {}", index, cluster, label);
      match self.successors.get_mut(cluster) {
        Some(labels) => labels.push(label),
        None => {
          self.successors.insert(cluster, vec![label]);
        }
      }
    }

    Ok(inserted)
  }

  pub fn cluster_node(&self, index: usize) -> Result<&ClusterNode> {
    self.cluster_nodes.get(index).ok_or(Error::InvalidClusterNode {
      index,
      len: self.cluster_nodes.len(),
    })
  }

  pub fn label_node(&self, index: usize) -> Result<&LabelNode> {
    self.label_nodes.get(index).ok_or(Error::InvalidLabelNode {
      index,
      len: self.label_nodes.len(),
    })
  }

  pub fn index_of_cluster_node(&self, head: SymbolId, j: usize) -> Option<usize> {
    self.cluster_nodes.index_of(&ClusterNode { head, j })
  }

  pub fn index_of_label_node(&self, label: Slot, j: usize) -> Option<usize> {
    self.label_nodes.index_of(&LabelNode { label, j })
  }

  pub fn contains_cluster_node(&self, head: SymbolId, j: usize) -> bool {
    self.cluster_nodes.contains(&ClusterNode { head, j })
  }

  pub fn contains_label_node(&self, label: Slot, j: usize) -> bool {
    self.label_nodes.contains(&LabelNode { label, j })
  }

  pub fn contains_edge(&self, cluster: usize, label: usize) -> bool {
    self.edges.contains(&CrfEdge { cluster, label })
  }

  /// Label nodes reachable from a cluster node.
  pub fn labels_of(&self, cluster: usize) -> Result<&[usize]> {
    self.check_cluster_node(cluster)?;
    Ok(self.successors.get(cluster).map(|labels| labels.as_slice()).unwrap_or(&[]))
  }

  pub fn cluster_nodes(&self) -> impl Iterator<Item = &ClusterNode> {
    self.cluster_nodes.iter()
  }

  pub fn label_nodes(&self) -> impl Iterator<Item = &LabelNode> {
    self.label_nodes.iter()
  }

  pub fn edges(&self) -> impl Iterator<Item = &CrfEdge> {
    self.edges.iter()
  }

  pub fn cluster_node_count(&self) -> usize {
    self.cluster_nodes.len()
  }

  pub fn label_node_count(&self) -> usize {
    self.label_nodes.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  fn check_cluster_node(&self, index: usize) -> Result<()> {
    if index < self.cluster_nodes.len() {
      Ok(())
    } else {
      Err(Error::InvalidClusterNode { index, len: self.cluster_nodes.len() })
    }
  }

  fn check_label_node(&self, index: usize) -> Result<()> {
    if index < self.label_nodes.len() {
      Ok(())
    } else {
      Err(Error::InvalidLabelNode { index, len: self.label_nodes.len() })
    }
  }
}
