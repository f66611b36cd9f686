//! Plain-text rendering of a [`LifeStats`] for the terminal.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::format::{format_compact, format_grouped, to_fixed};
use crate::i18n::Catalog;
use crate::stats::LifeStats;

const LABEL_WIDTH: usize = 24;

fn line(out: &mut String, label: &str, value: &str) {
    // pad by chars, not bytes, so accented labels still line up
    let pad = LABEL_WIDTH.saturating_sub(label.chars().count());
    let _ = writeln!(out, "  {label}{} {value}", " ".repeat(pad));
}

/// Renders every section of the stats page as text.
pub fn render_text(stats: &LifeStats, birth: NaiveDate, t: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}  {} {}", t.stats.title, t.locale.flag(), t.locale.label());
    let _ = writeln!(
        out,
        "{} {birth} {} {} {}",
        t.stats.born_on,
        t.stats.you_are,
        (t.stats.years_months_days)(stats.years, stats.months, stats.days),
        t.stats.old
    );
    out.push('\n');

    let _ = writeln!(out, "{}", t.body.section_title);
    line(&mut out, t.body.heartbeats, &format_grouped(stats.heartbeats as f64));
    line(&mut out, t.body.breaths, &format_grouped(stats.breaths as f64));
    line(&mut out, t.body.blinks, &format_grouped(stats.blinks as f64));
    line(&mut out, t.body.sleep_years, &to_fixed(stats.sleep_years, 1));
    line(&mut out, t.body.meals, &format_grouped(stats.meals_eaten as f64));
    line(&mut out, t.body.water, &format_grouped(stats.water_liters as f64));
    out.push('\n');

    let _ = writeln!(out, "{}", t.journey.section_title);
    line(&mut out, t.journey.space_km, &format_compact(stats.distance_traveled_km));
    line(&mut out, t.journey.walked, &format_grouped(stats.distance_walked_km));
    line(&mut out, t.journey.sunrises, &format_grouped(stats.sunrises as f64));
    line(&mut out, t.journey.full_moons, &format_grouped(stats.full_moons as f64));
    line(&mut out, t.journey.laughs, &format_grouped(stats.laughs as f64));
    line(&mut out, t.journey.dreams, &format_grouped(stats.dreams as f64));
    out.push('\n');

    let _ = writeln!(out, "{}", t.life_grid.title);
    let _ = writeln!(
        out,
        "  {}",
        (t.life_grid.description)(
            &format_grouped(stats.weeks_lived as f64),
            &format_grouped(stats.weeks_total as f64)
        )
    );
    let _ = writeln!(out, "  {}", t.life_grid.weeks_per_year);
    let _ = writeln!(out, "  {}", progress_bar(stats.life_percentage, 40));
    line(&mut out, t.life_grid.weeks_lived, &format_grouped(stats.weeks_lived as f64));
    line(
        &mut out,
        t.life_grid.weeks_remaining,
        &format_grouped(stats.weeks_remaining() as f64),
    );
    out.push('\n');

    let _ = writeln!(out, "{}", t.time_perspective.title);
    line(&mut out, t.time_perspective.days_lived, &format_grouped(stats.days_lived as f64));
    line(
        &mut out,
        t.time_perspective.days_remaining,
        &format_grouped(stats.days_remaining as f64),
    );
    line(
        &mut out,
        t.time_perspective.life_completed,
        &format!("{}%", to_fixed(stats.life_percentage, 1)),
    );
    line(
        &mut out,
        t.time_perspective.life_ahead,
        &format!("{}%", to_fixed((100.0 - stats.life_percentage).max(0.0), 1)),
    );
    let _ = writeln!(out, "  {}", t.time_perspective.disclaimer);
    out.push('\n');

    let _ = writeln!(out, "{}", t.fun_facts.title);
    for fact in &stats.fun_facts {
        let _ = writeln!(out, "  • {}", t.fun_fact(fact));
    }

    out
}

/// `[#####-----] 50.0%`, clamped to the bar width.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let pct = percentage.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        to_fixed(pct, 1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_life_stats_at;
    use crate::i18n::{Locale, catalog};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> (LifeStats, NaiveDate) {
        let birth = NaiveDate::from_ymd_opt(1992, 6, 14).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc();
        (calculate_life_stats_at(birth, &now, &mut StdRng::seed_from_u64(3)), birth)
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(progress_bar(50.0, 10), "[#####-----] 50.0%");
        assert_eq!(progress_bar(140.0, 4), "[####] 100.0%");
        assert_eq!(progress_bar(0.0, 4), "[----] 0.0%");
    }

    #[test]
    fn english_report_has_every_section() {
        let (stats, birth) = sample();
        let t = catalog(Locale::En);
        let text = render_text(&stats, birth, t);

        assert!(text.contains("34 years, 4 months, and 5 days"));
        assert!(text.contains(t.body.section_title));
        assert!(text.contains(t.journey.section_title));
        assert!(text.contains(t.life_grid.title));
        assert!(text.contains(t.time_perspective.title));
        assert!(text.contains(&format_grouped(stats.heartbeats as f64)));
        for fact in &stats.fun_facts {
            assert!(text.contains(&t.fun_fact(fact)));
        }
    }

    #[test]
    fn localized_report_uses_catalog() {
        let (stats, birth) = sample();
        let text = render_text(&stats, birth, catalog(Locale::Es));
        assert!(text.contains("34 años, 4 meses y 5 días"));
        assert!(text.contains("Latidos del Corazón"));
    }

    #[test]
    fn header_names_the_active_language() {
        let (stats, birth) = sample();
        for locale in Locale::ALL {
            let text = render_text(&stats, birth, catalog(locale));
            let header = text.lines().next().unwrap();
            assert!(header.ends_with(&format!("{} {}", locale.flag(), locale.label())));
        }
    }
}
