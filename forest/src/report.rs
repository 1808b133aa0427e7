//! Human readable dumps of the forests, for debugging a driver.

use std::fmt::Write;
use grammar::{Grammar, SymbolId, SymbolTable};
use itertools::Itertools;
use crate::crf::Crf;
use crate::sppf::{EdgeTarget, Node, Sppf};

pub fn sppf(
  sppf: &Sppf,
  symbols: &impl SymbolTable,
  input: &str,
) -> String {
  let input = input.chars().collect::<Vec<_>>();
  let mut buf = String::new();

  writeln!(&mut buf, "nodes:").unwrap();
  for (i, node) in sppf.nodes().enumerate() {
    writeln!(&mut buf, "  {}: {}", i, node_to_string(node, symbols, &input)).unwrap();
  }

  writeln!(&mut buf, "children:").unwrap();
  for (i, children) in sppf.children_lists().enumerate() {
    writeln!(&mut buf, "  {}: [{}]", i, children.iter().join(", ")).unwrap();
  }

  writeln!(&mut buf, "edges:").unwrap();
  for (node, target) in sppf.edges() {
    match target {
      EdgeTarget::One(children) => {
        writeln!(&mut buf, "  {} -> {}", node, children).unwrap();
      }
      EdgeTarget::Many(children) => {
        writeln!(&mut buf, "  {} -> packed {}", node, children.iter().join(", ")).unwrap();
      }
    }
  }

  buf
}

fn node_to_string(node: &Node, symbols: &impl SymbolTable, input: &[char]) -> String {
  match node {
    Node::Leaf { source } => {
      let c = input.get(*source).copied().unwrap_or('?');
      format!("({}, {})", c, source)
    }
    Node::Nullable { symbols: nullable } if nullable.is_empty() => "(ϵ)".to_owned(),
    Node::Nullable { symbols: nullable } => {
      format!("(ϵ: {})", nullable.iter().map(|&sym| name(symbols, sym)).join(", "))
    }
    Node::Inner { head, start, end } => {
      format!("({}, {}, {})", name(symbols, *head), start, end)
    }
  }
}

fn name(symbols: &impl SymbolTable, sym: SymbolId) -> String {
  symbols.lookup_symbol(sym)
    .map(|s| s.to_owned())
    .unwrap_or_else(|| sym.to_string())
}

pub fn crf(crf: &Crf, grammar: &Grammar) -> String {
  let mut buf = String::new();

  writeln!(&mut buf, "cluster nodes:").unwrap();
  for (i, node) in crf.cluster_nodes().enumerate() {
    writeln!(&mut buf, "  {}: ({}, {})", i, name(grammar, node.head), node.j).unwrap();
  }

  writeln!(&mut buf, "label nodes:").unwrap();
  for (i, node) in crf.label_nodes().enumerate() {
    writeln!(&mut buf, "  {}: ({}, {})", i, node.label.to_string(grammar), node.j).unwrap();
  }

  writeln!(&mut buf, "edges:").unwrap();
  for edge in crf.edges() {
    writeln!(&mut buf, "  {} -> {}", edge.cluster, edge.label).unwrap();
  }

  buf
}
