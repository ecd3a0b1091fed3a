//! Stat model for museum bonuses.
//!
//! # Architecture
//!
//! ```text
//! [ Stat ]            nine enumerated accumulators
//!    ↑ from_key       exact key aliasing (special effects)
//!    ↑ matching_label fuzzy substring table (single-stat effects)
//! [ MuseumBonuses ]   additive vector, one field per Stat
//! ```
//!
//! All accumulation is addition, so any ordering of contributions yields the
//! same vector.

pub mod bonus;
pub mod stat;

pub use bonus::{MuseumBonuses, format_percent};
pub use stat::{LABEL_MATCHERS, Stat, UnknownStat};
