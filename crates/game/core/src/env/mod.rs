//! Read-only services the engine consults while stepping.
//!
//! The only oracle the arcade rules need is randomness for spawn placement.
//! It is injected as a trait object so tests and replays can pin it down.
mod rng;

pub use rng::{PcgRng, RngOracle, SeedContext, compute_seed};
