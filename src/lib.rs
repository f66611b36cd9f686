//! Life statistics from a birth date: exact age, body and cosmic counters,
//! a weeks-of-life grid and a handful of randomly picked fun facts.

pub mod age;
pub mod config;
pub mod engine;
pub mod error;
pub mod facts;
pub mod format;
pub mod i18n;
pub mod report;
pub mod stats;
pub mod svg;
pub mod validate;

pub use engine::{calculate_life_stats, calculate_life_stats_at};
pub use error::StatsError;
pub use facts::{FunFactData, FunFactKey};
pub use stats::LifeStats;
