//! Rate constants and the `LifeStats` value object.
//!
//! Rates are population averages:
//! - heartbeats: ~100,000 per day
//! - breaths: ~20,000 per day
//! - blinks: ~28,800 per day (1,200 per waking hour × 16 hours)
//! - Earth's orbital travel: ~940 million km per year

use serde::Serialize;

use crate::facts::FunFactData;

pub const HEARTBEATS_PER_DAY: i64 = 100_000;
pub const BREATHS_PER_DAY: i64 = 20_000;
pub const BLINKS_PER_DAY: i64 = 28_800;
pub const EARTH_TRAVEL_KM_PER_YEAR: f64 = 940_000_000.0;

pub const LIFE_EXPECTANCY_YEARS: i64 = 80;
pub const WEEKS_PER_YEAR: i64 = 52;
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const SLEEP_HOURS_PER_DAY: i64 = 8;
pub const MEALS_PER_DAY: i64 = 3;
pub const WATER_LITERS_PER_DAY: i64 = 2;
pub const STEPS_PER_DAY: i64 = 7_500;
pub const STEP_LENGTH_KM: f64 = 0.000762;
pub const LAUGHS_PER_DAY: i64 = 15;
pub const DREAMS_PER_NIGHT: i64 = 4;
pub const LUNAR_CYCLE_DAYS: f64 = 29.53;

/// Expected lifetime in days (80 × 365.25).
pub const TOTAL_EXPECTED_DAYS: f64 = LIFE_EXPECTANCY_YEARS as f64 * DAYS_PER_YEAR;

/// Weeks in the life-in-weeks grid. Deliberately 80 × 52, not `TOTAL_EXPECTED_DAYS / 7`.
pub const WEEKS_TOTAL: i64 = LIFE_EXPECTANCY_YEARS * WEEKS_PER_YEAR;

/// Everything derived from a birth date at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    // Exact age
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_days: i64,

    // Body
    pub heartbeats: i64,
    pub breaths: i64,
    pub blinks: i64,

    // Space
    pub distance_traveled_km: f64,

    // Life expectancy
    pub days_lived: i64,
    pub days_remaining: i64,
    pub life_percentage: f64,
    pub weeks_lived: i64,
    pub weeks_total: i64,

    // Lifestyle
    pub sleep_hours: i64,
    pub sleep_years: f64,
    pub meals_eaten: i64,
    pub water_liters: i64,
    pub steps_walked: i64,
    pub distance_walked_km: f64,
    pub laughs: i64,
    pub dreams: i64,
    pub full_moons: i64,
    pub sunrises: i64,

    pub fun_facts: Vec<FunFactData>,
}

impl LifeStats {
    /// Weeks left in the grid, never negative.
    pub fn weeks_remaining(&self) -> i64 {
        (self.weeks_total - self.weeks_lived).max(0)
    }
}
