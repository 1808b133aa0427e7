use fnv::FnvBuildHasher;

pub mod symbol;
pub mod grammar;
pub mod slot;
pub mod nullable;

pub use self::symbol::*;
pub use self::grammar::*;
pub use self::slot::Slot;

pub type Map<K, V> = indexmap::IndexMap<K, V, FnvBuildHasher>;
pub type Set<K> = indexmap::IndexSet<K, FnvBuildHasher>;
pub type BiMap<L, R> = bimap::BiHashMap<L, R>;
