use gllforest::{Session, Slot, SymbolId, Grammar};
use gllforest::grammar::Map;

/// Builds the forests bottom-up by trying every split of every span. Only
/// handles grammars without empty productions, which is all the ambiguity
/// tests need.
pub struct Driver<'a> {
  grammar: &'a Grammar,
  input: &'a [SymbolId],
  session: &'a mut Session,
  memo: Map<(SymbolId, usize, usize), Option<usize>>,
}

impl<'a> Driver<'a> {
  pub fn new(grammar: &'a Grammar, input: &'a [SymbolId], session: &'a mut Session) -> Self {
    Self {
      grammar,
      input,
      session,
      memo: Map::default(),
    }
  }

  pub fn parse(&mut self, start: SymbolId) -> Option<usize> {
    let end = self.input.len();
    self.derive(start, 0, end)
  }

  fn derive(&mut self, nt: SymbolId, i: usize, j: usize) -> Option<usize> {
    if let Some(&result) = self.memo.get(&(nt, i, j)) {
      return result;
    }
    self.memo.insert((nt, i, j), None);

    self.session.crf.add_cluster_node(nt, i);

    let grammar = self.grammar;
    let mut derivations = vec![];

    for (prod_ix, prod) in grammar.prods_of(nt) {
      'splits: for cuts in splits(i, j, prod.body.len()) {
        let mut children = vec![];

        for (k, &sym) in prod.body.iter().enumerate() {
          let (a, b) = (cuts[k], cuts[k + 1]);
          let child = if grammar.is_terminal(sym) {
            if b == a + 1 && self.input[a] == sym {
              Some(self.session.sppf.add_leaf_node(a))
            } else {
              None
            }
          } else {
            let cluster = self.session.crf.add_cluster_node(sym, a);
            let label = self.session.crf.add_label_node(Slot::new(prod_ix, k + 1), i);
            self.session.crf.add_edge(cluster, label).unwrap();
            self.derive(sym, a, b)
          };

          match child {
            Some(child) => children.push(child),
            None => continue 'splits,
          }
        }

        derivations.push(children);
      }
    }

    let mut result = None;
    for children in derivations {
      result = Some(self.session.sppf.add_inner_node(nt, i, j, children).unwrap());
    }

    self.memo.insert((nt, i, j), result);
    result
  }
}

/// Cut points splitting `[i, j)` into `parts` non-empty pieces.
fn splits(i: usize, j: usize, parts: usize) -> Vec<Vec<usize>> {
  if parts == 0 {
    return vec![];
  }
  if parts == 1 {
    return if j > i { vec![vec![i, j]] } else { vec![] };
  }

  let mut result = vec![];
  for c in i + 1..j {
    for rest in splits(c, j, parts - 1) {
      let mut cuts = vec![i];
      cuts.extend(rest);
      result.push(cuts);
    }
  }
  result
}

/// `E -> E + E | a`, returning the grammar, `E`, `+` and `a`.
pub fn expr_grammar() -> (Grammar, SymbolId, SymbolId, SymbolId) {
  let mut grammar = Grammar::new();
  let plus = grammar.terminal("+");
  let a = grammar.terminal("a");
  let e = grammar.nonterminal("E");
  grammar.add_production(e, vec![e, plus, e]);
  grammar.add_production(e, vec![a]);
  (grammar, e, plus, a)
}

pub fn tokens(input: &str, plus: SymbolId, a: SymbolId) -> Vec<SymbolId> {
  input.chars()
    .map(|c| if c == '+' { plus } else { a })
    .collect()
}
