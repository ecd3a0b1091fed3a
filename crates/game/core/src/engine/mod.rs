//! Museum bonus aggregation engine.
//!
//! The engine is a pure function of a [`MuseumOracle`](crate::env::MuseumOracle)
//! and a slice of [`Slot`]s. It holds no state, performs no I/O and never
//! fails; the only side effect is a `tracing` warning for modifiers whose
//! effect category it does not recognize.

mod museum;
mod slot;

pub use museum::{calculate_museum_bonuses, slot_contribution};
pub use slot::Slot;
