//! Unopinionated standalone utilities.

mod grammar;
pub use grammar::{Noun, Sentence};

mod rng;
pub use rng::RngExt;

pub mod text;
pub use text::{CharExt, StrExt};

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving map with an efficient hash function.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;

/// Good default concrete rng.
pub type GameRng = rand_xorshift::XorShiftRng;
