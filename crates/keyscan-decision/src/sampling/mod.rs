//! Training-sample retention: bounded-probability policy plus the random
//! sources that feed it.

pub mod decider;
pub mod random;

pub use decider::{decide, SamplingDecision};
pub use random::{FixedDraws, SeededRandom, ThreadRandom};
