//! Fun facts: numeric comparisons rendered by a translation catalog.
//!
//! The engine only emits a key and a pre-formatted value. Phrasing lives in
//! [`crate::i18n`].

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::format::{format_grouped, to_fixed};

pub const MAX_FUN_FACTS: usize = 4;

const DISTANCE_TO_MOON_KM: f64 = 384_400.0;
const DISTANCE_TO_SUN_KM: f64 = 149_600_000.0;
const PIZZA_SLICES_PER_DAY: f64 = 0.3;
const HAIR_GROWTH_CM_PER_DAY: f64 = 0.035;
const NAIL_GROWTH_MM_PER_DAY: f64 = 0.1;
const WORDS_PER_DAY: f64 = 16_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FunFactKey {
    MoonTrips,
    SunTrips,
    HeartBillion,
    HeartMillion,
    Books,
    Pizza,
    Hair,
    Nails,
    Words,
}

impl FunFactKey {
    pub const ALL: [FunFactKey; 9] = [
        FunFactKey::MoonTrips,
        FunFactKey::SunTrips,
        FunFactKey::HeartBillion,
        FunFactKey::HeartMillion,
        FunFactKey::Books,
        FunFactKey::Pizza,
        FunFactKey::Hair,
        FunFactKey::Nails,
        FunFactKey::Words,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FunFactKey::MoonTrips => "moonTrips",
            FunFactKey::SunTrips => "sunTrips",
            FunFactKey::HeartBillion => "heartBillion",
            FunFactKey::HeartMillion => "heartMillion",
            FunFactKey::Books => "books",
            FunFactKey::Pizza => "pizza",
            FunFactKey::Hair => "hair",
            FunFactKey::Nails => "nails",
            FunFactKey::Words => "words",
        }
    }
}

impl fmt::Display for FunFactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunFactData {
    pub key: FunFactKey,
    pub value: String,
}

impl FunFactData {
    fn new(key: FunFactKey, value: String) -> Self {
        Self { key, value }
    }
}

/// Every fact that applies, in a fixed order (7 or 8 entries).
pub fn candidate_facts(
    total_days: i64,
    heartbeats: i64,
    distance_km: f64,
    years: i32,
) -> Vec<FunFactData> {
    let days = total_days as f64;
    let mut facts = Vec::with_capacity(FunFactKey::ALL.len());

    facts.push(FunFactData::new(
        FunFactKey::MoonTrips,
        to_fixed(distance_km / DISTANCE_TO_MOON_KM, 0),
    ));
    facts.push(FunFactData::new(
        FunFactKey::SunTrips,
        to_fixed(distance_km / DISTANCE_TO_SUN_KM, 1),
    ));

    // exactly one heart fact
    if heartbeats > 1_000_000_000 {
        facts.push(FunFactData::new(
            FunFactKey::HeartBillion,
            to_fixed(heartbeats as f64 / 1_000_000_000.0, 1),
        ));
    } else {
        facts.push(FunFactData::new(
            FunFactKey::HeartMillion,
            to_fixed(heartbeats as f64 / 1_000_000.0, 0),
        ));
    }

    if years >= 1 {
        // one book per week
        facts.push(FunFactData::new(
            FunFactKey::Books,
            format_grouped(total_days.div_euclid(7) as f64),
        ));
    }

    facts.push(FunFactData::new(
        FunFactKey::Pizza,
        format_grouped(days * PIZZA_SLICES_PER_DAY),
    ));
    // cm → m
    facts.push(FunFactData::new(
        FunFactKey::Hair,
        to_fixed(days * HAIR_GROWTH_CM_PER_DAY / 100.0, 1),
    ));
    // mm → cm
    facts.push(FunFactData::new(
        FunFactKey::Nails,
        to_fixed(days * NAIL_GROWTH_MM_PER_DAY / 10.0, 1),
    ));
    // millions of words
    facts.push(FunFactData::new(
        FunFactKey::Words,
        to_fixed(days * WORDS_PER_DAY / 1_000_000.0, 0),
    ));

    facts
}

/// Shuffles the candidates with `rng` and keeps at most [`MAX_FUN_FACTS`].
pub fn generate_fun_facts<R: Rng + ?Sized>(
    total_days: i64,
    heartbeats: i64,
    distance_km: f64,
    years: i32,
    rng: &mut R,
) -> Vec<FunFactData> {
    let mut facts = candidate_facts(total_days, heartbeats, distance_km, years);
    facts.shuffle(rng);
    facts.truncate(MAX_FUN_FACTS);
    facts
}
