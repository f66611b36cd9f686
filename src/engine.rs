//! engine.rs
//!
//! Turns a birth date into a [`LifeStats`] snapshot.
//!
//! Callers are expected to validate input first (see [`crate::validate`]).
//! The engine does not reject future dates; for those `total_days` goes
//! negative and the result is meaningless.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rand::Rng;
use tracing::{debug, warn};

use crate::age::exact_age;
use crate::error::{Result, StatsError};
use crate::facts::generate_fun_facts;
use crate::stats::*;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        StatsError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Computes every statistic for `birth_date` against the local clock.
///
/// Fun facts are drawn with the thread-local RNG, so two calls may differ in
/// `fun_facts` only.
pub fn calculate_life_stats(birth_date: &str) -> Result<LifeStats> {
    let birth = parse_birth_date(birth_date)?;
    Ok(calculate_life_stats_at(birth, &Local::now(), &mut rand::thread_rng()))
}

/// Deterministic core: same `birth`, `now` and RNG state give the same value.
///
/// `birth` is taken as midnight in the zone of `now`.
pub fn calculate_life_stats_at<Tz, R>(birth: NaiveDate, now: &DateTime<Tz>, rng: &mut R) -> LifeStats
where
    Tz: TimeZone,
    R: Rng + ?Sized,
{
    if birth > now.date_naive() {
        warn!(%birth, now = %now.naive_local(), "birth date is in the future; statistics will be negative");
    }

    let age = exact_age(birth, now);
    let total_days = age.total_days;
    let days = total_days as f64;

    // Body
    let heartbeats = total_days * HEARTBEATS_PER_DAY;
    let breaths = total_days * BREATHS_PER_DAY;
    let blinks = total_days * BLINKS_PER_DAY;

    // Space
    let distance_traveled_km = days / DAYS_PER_YEAR * EARTH_TRAVEL_KM_PER_YEAR;

    // Life expectancy
    let days_remaining = ((TOTAL_EXPECTED_DAYS - days).floor() as i64).max(0);
    let life_percentage = (days / TOTAL_EXPECTED_DAYS * 100.0).min(100.0);
    let weeks_lived = total_days.div_euclid(7);

    // Lifestyle
    let sleep_hours = total_days * SLEEP_HOURS_PER_DAY;
    let sleep_years = sleep_hours as f64 / (DAYS_PER_YEAR * 24.0);
    let steps_walked = total_days * STEPS_PER_DAY;
    let distance_walked_km = steps_walked as f64 * STEP_LENGTH_KM;
    let full_moons = (days / LUNAR_CYCLE_DAYS).floor() as i64;

    let fun_facts = generate_fun_facts(total_days, heartbeats, distance_traveled_km, age.years, rng);

    debug!(
        %birth,
        total_days,
        years = age.years,
        months = age.months,
        days = age.days,
        life_percentage,
        fun_facts = fun_facts.len(),
        "calculated life stats"
    );

    LifeStats {
        years: age.years,
        months: age.months,
        days: age.days,
        hours: age.hours,
        minutes: age.minutes,
        seconds: age.seconds,
        total_days,
        heartbeats,
        breaths,
        blinks,
        distance_traveled_km,
        days_lived: total_days,
        days_remaining,
        life_percentage,
        weeks_lived,
        weeks_total: WEEKS_TOTAL,
        sleep_hours,
        sleep_years,
        meals_eaten: total_days * MEALS_PER_DAY,
        water_liters: total_days * WATER_LITERS_PER_DAY,
        steps_walked,
        distance_walked_km,
        laughs: total_days * LAUGHS_PER_DAY,
        dreams: total_days * DREAMS_PER_NIGHT,
        full_moons,
        sunrises: total_days,
        fun_facts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FunFactKey;
    use chrono::{FixedOffset, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        date(2026, 10, 19).and_hms_opt(14, 5, 9).unwrap().and_utc()
    }

    fn stats_for(birth: NaiveDate) -> LifeStats {
        calculate_life_stats_at(birth, &now(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn born_yesterday() {
        let stats = stats_for(date(2026, 10, 18));
        assert_eq!(stats.years, 0);
        assert_eq!(stats.days_lived, 1);
        assert_eq!(stats.heartbeats, 100_000);
        assert_eq!((stats.hours, stats.minutes, stats.seconds), (14, 5, 9));
    }

    #[test]
    fn very_old_birth_is_clamped() {
        let stats = stats_for(date(1941, 10, 19));
        assert_eq!(stats.life_percentage, 100.0);
        assert_eq!(stats.days_remaining, 0);
        assert_eq!(stats.years, 85);
    }

    #[test]
    fn twenty_five_years() {
        let stats = stats_for(date(2001, 10, 19));
        assert_eq!((stats.years, stats.months, stats.days), (25, 0, 0));
        assert!(stats.weeks_lived > 1200);
        assert!(stats.heartbeats > 800_000_000);
        assert!(stats.distance_traveled_km > 20_000_000_000.0);
        assert!(stats.sleep_years > 7.0 && stats.sleep_years < 12.0);
        assert!(stats.full_moons > 280 && stats.full_moons < 400);
    }

    #[test]
    fn rates_follow_total_days() {
        let stats = stats_for(date(1992, 6, 14));
        let d = stats.total_days;
        assert_eq!(stats.heartbeats, d * 100_000);
        assert_eq!(stats.breaths, d * 20_000);
        assert_eq!(stats.blinks, d * 28_800);
        assert_eq!(stats.sleep_hours, d * 8);
        assert_eq!(stats.meals_eaten, d * 3);
        assert_eq!(stats.water_liters, d * 2);
        assert_eq!(stats.steps_walked, d * 7_500);
        assert_eq!(stats.laughs, d * 15);
        assert_eq!(stats.dreams, d * 4);
        assert_eq!(stats.sunrises, d);
        assert_eq!(stats.weeks_lived, d / 7);
        assert_eq!(stats.weeks_total, 4160);
        assert_eq!(stats.days_remaining, (29_220.0 - d as f64).floor() as i64);
    }

    #[test]
    fn one_heart_fact_at_most() {
        for birth in [date(2026, 1, 1), date(1990, 1, 1), date(1950, 1, 1)] {
            let stats = stats_for(birth);
            let hearts = stats
                .fun_facts
                .iter()
                .filter(|f| matches!(f.key, FunFactKey::HeartBillion | FunFactKey::HeartMillion))
                .count();
            assert!(hearts <= 1);
            assert!(!stats.fun_facts.is_empty() && stats.fun_facts.len() <= 4);
        }
    }

    #[test]
    fn local_zone_does_not_shift_fixed_offsets() {
        let zone = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = zone
            .from_local_datetime(&date(2026, 10, 19).and_hms_opt(14, 5, 9).unwrap())
            .unwrap();
        let stats = calculate_life_stats_at(date(1992, 6, 14), &now, &mut StdRng::seed_from_u64(1));
        assert_eq!(stats, stats_for(date(1992, 6, 14)));
    }

    #[test]
    fn deterministic_with_same_inputs() {
        assert_eq!(stats_for(date(1988, 2, 29)), stats_for(date(1988, 2, 29)));
    }

    #[test]
    fn unparseable_date_is_an_error() {
        assert!(matches!(
            calculate_life_stats("not-a-date"),
            Err(StatsError::InvalidDate { .. })
        ));
        assert!(calculate_life_stats("2001-02-30").is_err());
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_birth_date("1992-06-14").unwrap(), date(1992, 6, 14));
        assert_eq!(parse_birth_date(" 1992-06-14 ").unwrap(), date(1992, 6, 14));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(stats_for(date(2000, 1, 1))).unwrap();
        assert!(json.get("distanceTraveledKm").is_some());
        assert!(json.get("weeksTotal").is_some());
        assert!(json["funFacts"][0]["key"].is_string());
        assert!(json["funFacts"][0]["value"].is_string());
    }
}
