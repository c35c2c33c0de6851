//! # keyscan-decision
//!
//! Decision layer of the key recognition service. Turns raw, possibly
//! malformed engine output into the analysis contract:
//!
//! raw output → ranking → confidence flags → sampling decision → assembly → validation
//!
//! | Stage | Module |
//! |-------|--------|
//! | Candidate ranking (manufacturer-aware) | [`ranking`] |
//! | Confidence flags | [`classifier`] |
//! | Training-sample retention | [`sampling`] |
//! | Contract assembly + final check | [`assembler`] |
//!
//! Every stage is synchronous and stateless apart from the injected
//! [`DecisionSettings`](keyscan_core::DecisionSettings) and the per-call
//! [`RandomSource`](keyscan_core::RandomSource).

pub mod assembler;
pub mod classifier;
pub mod engine;
pub mod ranking;
pub mod sampling;

pub use assembler::{assemble, assemble_at};
pub use classifier::{classify, ConfidenceFlags};
pub use engine::DecisionEngine;
pub use ranking::{rank, Ranking};
pub use sampling::{decide, FixedDraws, SeededRandom, ThreadRandom};
