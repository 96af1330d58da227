//! Small value-object toolkit.
//!
//! Two independent pieces: fixed-arity tuples (pair and triple, each in an
//! immutable and a mutable flavor) under [`tuple`], and a process-wide
//! registry mapping textual architecture identifiers to [`Processor`]
//! descriptors under [`arch`].

pub mod arch;
pub mod tuple;

pub use arch::{Bitness, Family, Processor};
pub use tuple::{MutablePair, MutableTriple, Pair, PairView, Triple, TripleView};
