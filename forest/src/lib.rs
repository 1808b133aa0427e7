//! Forest construction core for generalized parsing: the Call Return
//! Forest (CRF) of parser call states and the Shared Packed Parse Forest
//! (SPPF) of derivations.
//!
//! Both forests only grow during a parse and hand out indices, never
//! references, to their nodes. Neither does any locking; a driver that
//! shares a forest between threads serializes every `add_*`/`connect`
//! call, e.g. behind one mutex per forest.

pub mod indexed;
pub mod crf;
pub mod sppf;
pub mod report;
mod error;
mod options;

pub use crf::{Crf, ClusterNode, LabelNode, CrfEdge};
pub use sppf::{Sppf, Node, EdgeTarget, NodeState};
pub use error::{Error, Result};
pub use options::ForestOptions;
